use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use super::filter::{SaleFilter, filtered};
use super::model::Dataset;
use crate::error::InvalidAggregationError;

// ---------------------------------------------------------------------------
// Aggregation period
// ---------------------------------------------------------------------------

/// Bucket granularity for summing sale prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Aggregation {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl Aggregation {
    /// Selector order.
    pub const ALL: [Aggregation; 3] = [
        Aggregation::Daily,
        Aggregation::Monthly,
        Aggregation::Yearly,
    ];

    /// The period a sale falls into, labelled by a single date:
    /// the day itself, the last day of its month, or Dec 31 of its year.
    pub fn bucket(self, sale_date: NaiveDateTime) -> NaiveDate {
        let day = sale_date.date();
        match self {
            Aggregation::Daily => day,
            Aggregation::Monthly => month_end(day),
            Aggregation::Yearly => year_end(day),
        }
    }

    /// The period label following `period`, or `None` past the calendar's end.
    pub fn next_period(self, period: NaiveDate) -> Option<NaiveDate> {
        period
            .succ_opt()
            .map(|day| self.bucket(day.and_time(NaiveTime::MIN)))
    }

    /// `strftime` layout for period labels on the chart.
    pub fn label_format(self) -> &'static str {
        match self {
            Aggregation::Daily => "%Y-%m-%d",
            Aggregation::Monthly => "%Y-%m",
            Aggregation::Yearly => "%Y",
        }
    }

    /// Render a period label, e.g. `2020-01` for a monthly bucket.
    pub fn format_period(self, period: NaiveDate) -> String {
        period.format(self.label_format()).to_string()
    }
}

/// Last calendar day of `day`'s month.
fn month_end(day: NaiveDate) -> NaiveDate {
    if day.month() == 12 {
        return year_end(day);
    }
    NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(day)
}

/// Dec 31 of `day`'s year. Exists for every representable year.
fn year_end(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), 12, 31).unwrap_or(day)
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Daily => write!(f, "Daily"),
            Aggregation::Monthly => write!(f, "Monthly"),
            Aggregation::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for Aggregation {
    type Err = InvalidAggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Aggregation::Daily),
            "monthly" => Ok(Aggregation::Monthly),
            "yearly" => Ok(Aggregation::Yearly),
            _ => Err(InvalidAggregationError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregated series
// ---------------------------------------------------------------------------

/// Summed sale prices for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub period: NaiveDate,
    pub total: Decimal,
}

/// The chart data: one point per period that has at least one sale,
/// strictly ascending by period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedSeries {
    pub aggregation: Aggregation,
    /// Number of sales that passed the filter.
    pub sale_count: usize,
    points: Vec<SeriesPoint>,
}

impl AggregatedSeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum over every period; equals the sum of the matching sale prices.
    pub fn total(&self) -> Decimal {
        self.points.iter().map(|p| p.total).sum()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Filter the dataset, bucket the surviving sales by period and sum each
/// bucket. An empty selection gives an empty series.
pub fn aggregate(
    dataset: &Dataset,
    filter: &SaleFilter,
    aggregation: Aggregation,
) -> AggregatedSeries {
    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut sale_count = 0;

    for sale in filtered(dataset, filter) {
        *buckets
            .entry(aggregation.bucket(sale.sale_date))
            .or_insert(Decimal::ZERO) += sale.sale_price;
        sale_count += 1;
    }

    let points = buckets
        .into_iter()
        .map(|(period, total)| SeriesPoint { period, total })
        .collect();

    AggregatedSeries {
        aggregation,
        sale_count,
        points,
    }
}
