use std::collections::HashMap;

/// Number of room cavity ratio sample points in each table row.
pub const NUM_RCR_POINTS: usize = 30;

/// Room cavity ratio sample points, ascending.
///
/// The spacing is uneven: 0.2 steps up to RCR 5.0, then 1.0 steps up to 10.0.
pub const RCR_VALUES: [f64; NUM_RCR_POINTS] = [
    0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, //
    2.2, 2.4, 2.6, 2.8, 3.0, 3.2, 3.4, 3.6, 3.8, 4.0, //
    4.2, 4.4, 4.6, 4.8, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0,
];

/// Ceiling reflectance levels [%] the table is indexed by.
pub const CEILING_REFLECTANCE_LEVELS: [u8; 5] = [90, 80, 70, 60, 50];

/// Wall reflectance levels [%] the table is indexed by.
pub const WALL_REFLECTANCE_LEVELS: [u8; 10] = [90, 80, 70, 60, 50, 40, 30, 20, 10, 0];

/// Utilization factor table indexed by ceiling/wall reflectance and RCR.
///
/// Each row holds utilization factors [%] for one
/// (ceiling reflectance, wall reflectance) pair, one entry per point in
/// [`RCR_VALUES`]. Only a small subset of all reflectance combinations is
/// published; pairs without a row cannot be resolved.
#[derive(Debug, Clone)]
pub struct UtilizationFactorTable {
    /// Rows by (ceiling reflectance [%], wall reflectance [%]).
    rows: HashMap<(u8, u8), [f64; NUM_RCR_POINTS]>,
}

impl UtilizationFactorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Adds or replaces the row for a reflectance pair.
    pub fn insert(
        &mut self,
        ceiling_reflectance: u8,
        wall_reflectance: u8,
        factors: [f64; NUM_RCR_POINTS],
    ) {
        self.rows
            .insert((ceiling_reflectance, wall_reflectance), factors);
    }

    /// Returns the raw row for a reflectance pair, if published.
    pub fn row(
        &self,
        ceiling_reflectance: u8,
        wall_reflectance: u8,
    ) -> Option<&[f64; NUM_RCR_POINTS]> {
        self.rows.get(&(ceiling_reflectance, wall_reflectance))
    }

    /// Resolves the utilization factor [%] for a reflectance pair and RCR.
    ///
    /// Exact RCR sample points return the tabled value directly; values
    /// between two sample points are interpolated linearly. Returns `None`
    /// when the reflectance pair has no published row or when `rcr` lies
    /// outside the sampled range [0.2, 10.0] (no extrapolation).
    pub fn resolve(&self, ceiling_reflectance: u8, wall_reflectance: u8, rcr: f64) -> Option<f64> {
        let row = self.rows.get(&(ceiling_reflectance, wall_reflectance))?;

        if let Some(i) = RCR_VALUES.iter().position(|&r| r == rcr) {
            return Some(row[i]);
        }

        // Bracket rcr between the nearest sample points. Out-of-range values
        // (including NaN) leave one side without a bound.
        let lower = RCR_VALUES.iter().rposition(|&r| r <= rcr)?;
        let upper = RCR_VALUES.iter().position(|&r| r >= rcr)?;

        // The exact-match check above guarantees lower < upper here.
        let (x0, x1) = (RCR_VALUES[lower], RCR_VALUES[upper]);
        let (y0, y1) = (row[lower], row[upper]);
        let factor = y0 + (rcr - x0) / (x1 - x0) * (y1 - y0);

        debug_assert!(
            (0.0..=100.0).contains(&factor),
            "interpolated utilization factor out of range: {factor}"
        );
        Some(factor)
    }

    /// Creates the table pre-populated with the published reflectance rows.
    pub fn standard() -> Self {
        let mut table = Self::new();

        table.insert(
            90,
            90,
            [
                89.0, 88.0, 87.0, 87.0, 86.0, 85.0, 85.0, 84.0, 83.0, 83.0, //
                82.0, 82.0, 81.0, 81.0, 80.0, 79.0, 79.0, 78.0, 78.0, 77.0, //
                77.0, 76.0, 76.0, 75.0, 75.0, 73.0, 70.0, 68.0, 68.0, 65.0,
            ],
        );
        table.insert(
            90,
            80,
            [
                88.0, 87.0, 86.0, 85.0, 83.0, 82.0, 80.0, 79.0, 78.0, 77.0, //
                76.0, 75.0, 74.0, 73.0, 72.0, 71.0, 70.0, 69.0, 69.0, 69.0, //
                62.0, 61.0, 60.0, 59.0, 59.0, 61.0, 58.0, 55.0, 52.0, 51.0,
            ],
        );
        table.insert(
            90,
            70,
            [
                88.0, 86.0, 84.0, 82.0, 80.0, 78.0, 77.0, 75.0, 73.0, 72.0, //
                70.0, 69.0, 67.0, 66.0, 64.0, 63.0, 62.0, 61.0, 60.0, 58.0, //
                57.0, 56.0, 55.0, 54.0, 53.0, 49.0, 45.0, 42.0, 38.0, 36.0,
            ],
        );
        table.insert(
            90,
            60,
            [
                87.0, 85.0, 82.0, 80.0, 77.0, 75.0, 73.0, 71.0, 69.0, 67.0, //
                65.0, 64.0, 62.0, 60.0, 58.0, 56.0, 54.0, 53.0, 51.0, 51.0, //
                50.0, 49.0, 47.0, 46.0, 45.0, 41.0, 38.0, 35.0, 31.0, 29.0,
            ],
        );
        table.insert(
            90,
            50,
            [
                86.0, 84.0, 80.0, 77.0, 75.0, 72.0, 69.0, 67.0, 64.0, 62.0, //
                59.0, 58.0, 56.0, 54.0, 52.0, 50.0, 48.0, 47.0, 45.0, 44.0, //
                43.0, 42.0, 40.0, 39.0, 38.0, 34.0, 30.0, 27.0, 25.0, 22.0,
            ],
        );
        table.insert(
            80,
            70,
            [
                78.0, 76.0, 75.0, 73.0, 72.0, 70.0, 68.0, 67.0, 66.0, 64.0, //
                63.0, 61.0, 60.0, 59.0, 58.0, 57.0, 56.0, 54.0, 53.0, 53.0, //
                52.0, 51.0, 50.0, 49.0, 48.0, 44.0, 41.0, 38.0, 36.0, 33.0,
            ],
        );

        table
    }
}

impl Default for UtilizationFactorTable {
    fn default() -> Self {
        Self::new()
    }
}
