use anyhow::Result;
use luxplan::UtilizationFactorTable;

const PAIRS: [(u8, u8); 3] = [(90, 90), (90, 70), (80, 70)];

/// Tabulates utilization factors over a fine RCR sweep for a few
/// reflectance pairs. Dashes mark cavity ratios outside the published
/// sampling range, where no value is reported.
fn main() -> Result<()> {
    let table = UtilizationFactorTable::standard();

    print!("{:>6}", "RCR");
    for (ceiling, wall) in PAIRS {
        print!("{:>11}", format!("({ceiling}, {wall})"));
    }
    println!();

    for i in 1..=104 {
        let rcr = i as f64 * 0.1;
        print!("{rcr:>6.2}");
        for (ceiling, wall) in PAIRS {
            match table.resolve(ceiling, wall, rcr) {
                Some(factor) => print!("{factor:>11.2}"),
                None => print!("{:>11}", "-"),
            }
        }
        println!();
    }

    Ok(())
}
