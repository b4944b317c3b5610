use std::path::PathBuf;

use clap::Parser;

use crate::data::aggregate::Aggregation;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "bulldozer-analytics")]
#[command(about = "Analyze bulldozer auction sales by machine type, region and period")]
pub struct Args {
    /// Auction CSV to load at startup
    #[arg(short, long, default_value = "data/bulldozer.csv")]
    pub data: PathBuf,

    /// Initial machine type filter (a ProductGroupDesc value)
    #[arg(short = 't', long)]
    pub machine_type: Option<String>,

    /// Initial region filter (a state value)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Initial aggregation period: Daily, Monthly or Yearly
    #[arg(short, long, default_value_t = Aggregation::Daily)]
    pub aggregation: Aggregation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bulldozer-analytics"]).unwrap();
        assert_eq!(args.data, PathBuf::from("data/bulldozer.csv"));
        assert_eq!(args.machine_type, None);
        assert_eq!(args.region, None);
        assert_eq!(args.aggregation, Aggregation::Daily);
    }

    #[test]
    fn test_initial_selection() {
        let args = Args::try_parse_from([
            "bulldozer-analytics",
            "--data",
            "sales.csv",
            "-t",
            "Wheel Loader",
            "--region",
            "Texas",
            "--aggregation",
            "monthly",
        ])
        .unwrap();
        assert_eq!(args.data, PathBuf::from("sales.csv"));
        assert_eq!(args.machine_type.as_deref(), Some("Wheel Loader"));
        assert_eq!(args.region.as_deref(), Some("Texas"));
        assert_eq!(args.aggregation, Aggregation::Monthly);
    }

    #[test]
    fn test_unknown_aggregation_is_rejected() {
        let err = Args::try_parse_from(["bulldozer-analytics", "-a", "Weekly"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
