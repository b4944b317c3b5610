/// Data layer: sale records, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   bulldozer.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Dataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<SaleRecord>, distinct types / regions
///   └──────────┘
///        │  &Dataset
///        ▼
///   ┌──────────┐
///   │  filter   │  machine type / region predicate
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  bucket by day / month / year → AggregatedSeries
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
