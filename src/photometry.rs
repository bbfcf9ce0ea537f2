//! Lumen-method sizing calculations.

/// Maintenance factor applied when sizing lamp counts.
///
/// Fixed derating for lamp and fitting degradation over time.
pub const DEFAULT_MAINTENANCE_FACTOR: f64 = 0.80;

/// Computes the room cavity ratio from room geometry.
///
/// RCR = 2.5 * h * P / A, where `h` is the height from the lighting to the
/// work area [m], `P` the room perimeter [m] and `A` the floor area [m^2].
/// Returns `None` when the perimeter or area is not positive (the ratio is
/// undefined and the caller should ask for valid dimensions).
pub fn room_cavity_ratio(height_to_work_area_m: f64, perimeter_m: f64, area_m2: f64) -> Option<f64> {
    if perimeter_m > 0.0 && area_m2 > 0.0 {
        Some(2.5 * height_to_work_area_m * perimeter_m / area_m2)
    } else {
        None
    }
}

/// Computes the number of lamps required to reach an illuminance target.
///
/// N = (E * A) / (F * (UF / 100) * MF) with the illuminance target `E` [lux],
/// working-plane area `A` [m^2], luminous flux per lamp `F` [lm], utilization
/// factor `UF` [%] and maintenance factor `MF`. Returns `None` when the flux,
/// utilization factor or maintenance factor is not positive.
///
/// The result is fractional; rounding up to whole lamps is left to the
/// caller, who may prefer to round per fitting instead.
pub fn lamps_required(
    illuminance_lux: f64,
    area_m2: f64,
    flux_lm: f64,
    utilization_factor_pct: f64,
    maintenance_factor: f64,
) -> Option<f64> {
    if flux_lm > 0.0 && utilization_factor_pct > 0.0 && maintenance_factor > 0.0 {
        let effective_flux = flux_lm * (utilization_factor_pct / 100.0) * maintenance_factor;
        Some(illuminance_lux * area_m2 / effective_flux)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_cavity_ratio() {
        let rcr = room_cavity_ratio(2.0, 20.0, 50.0).unwrap();
        assert!((rcr - 2.0).abs() < 1e-12, "2.5 * 2 * 20 / 50 = 2, got {rcr}");
    }

    #[test]
    fn test_room_cavity_ratio_invalid_geometry() {
        assert_eq!(room_cavity_ratio(2.0, 0.0, 50.0), None);
        assert_eq!(room_cavity_ratio(2.0, 20.0, 0.0), None);
        assert_eq!(room_cavity_ratio(2.0, -5.0, 50.0), None);
        assert_eq!(room_cavity_ratio(2.0, 20.0, -1.0), None);
    }

    #[test]
    fn test_room_cavity_ratio_zero_height() {
        // Zero mounting height is valid geometry; the RCR is simply 0 and
        // falls below the table's sampled range.
        assert_eq!(room_cavity_ratio(0.0, 20.0, 50.0), Some(0.0));
    }

    #[test]
    fn test_lamps_required() {
        let n = lamps_required(500.0, 50.0, 3000.0, 70.0, 0.80).unwrap();
        // (500 * 50) / (3000 * 0.70 * 0.80) = 25000 / 1680
        assert!((n - 25000.0 / 1680.0).abs() < 1e-10);
        assert!((n - 14.88).abs() < 0.01);
    }

    #[test]
    fn test_lamps_required_invalid_inputs() {
        assert_eq!(lamps_required(500.0, 50.0, 0.0, 70.0, 0.80), None);
        assert_eq!(lamps_required(500.0, 50.0, -100.0, 70.0, 0.80), None);
        assert_eq!(lamps_required(500.0, 50.0, 3000.0, 0.0, 0.80), None);
        assert_eq!(lamps_required(500.0, 50.0, 3000.0, 70.0, 0.0), None);
    }

    #[test]
    fn test_lamps_required_zero_demand() {
        // Zero illuminance or area is a valid (if pointless) request.
        assert_eq!(lamps_required(0.0, 50.0, 3000.0, 70.0, 0.80), Some(0.0));
        assert_eq!(lamps_required(500.0, 0.0, 3000.0, 70.0, 0.80), Some(0.0));
    }
}
