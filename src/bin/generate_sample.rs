use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use clap::Parser;

/// Write a synthetic bulldozer auction CSV in the layout the dashboard reads.
#[derive(Debug, Parser)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "data/bulldozer.csv")]
    output: PathBuf,

    /// Number of sales to generate
    #[arg(short = 'n', long, default_value_t = 5000)]
    rows: usize,

    /// PRNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// (ProductGroupDesc, typical price in dollars)
const PRODUCT_GROUPS: [(&str, f64); 6] = [
    ("Track Type Tractors", 42_000.0),
    ("Track Excavators", 38_000.0),
    ("Wheel Loader", 35_000.0),
    ("Motor Graders", 30_000.0),
    ("Backhoe Loaders", 21_000.0),
    ("Skid Steer Loaders", 11_000.0),
];

const STATES: [&str; 10] = [
    "Alabama",
    "California",
    "Colorado",
    "Florida",
    "Georgia",
    "Illinois",
    "North Carolina",
    "Ohio",
    "Texas",
    "Washington",
];

/// Minimal deterministic PRNG (splitmix64)
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SplitMix64(args.seed);

    let first_day = NaiveDate::from_ymd_opt(1989, 1, 17).context("invalid start date")?;
    let span_days = 8_000;

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(["SalesID", "SalePrice", "saledate", "ProductGroupDesc", "state"])?;

    for i in 0..args.rows {
        let (group, base_price) = PRODUCT_GROUPS[rng.below(PRODUCT_GROUPS.len())];
        let state = STATES[rng.below(STATES.len())];

        let day = first_day + Duration::days(rng.below(span_days) as i64);
        // Auctions mostly run on the hour; a few have minutes set.
        let hour = rng.below(24);
        let minute = if rng.below(10) == 0 { rng.below(60) } else { 0 };

        // Prices drift up ~2% a year and scatter ±40% around the group base.
        let years = (day - first_day).num_days() as f64 / 365.25;
        let price = base_price * 1.02f64.powf(years) * (0.6 + 0.8 * rng.next_f64());
        let price = (price / 250.0).round() * 250.0;

        writer.write_record([
            (1_139_246 + i).to_string(),
            format!("{price:.0}"),
            format!("{} {hour}:{minute:02}", day.format("%m/%d/%Y")),
            group.to_string(),
            state.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} sales to {}", args.rows, args.output.display());
    Ok(())
}
