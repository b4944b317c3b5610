use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// SaleRecord – one row of the auction CSV
// ---------------------------------------------------------------------------

/// A single bulldozer auction sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    /// When the hammer fell (`saledate`).
    pub sale_date: NaiveDateTime,
    /// Final price in dollars (`SalePrice`).
    pub sale_price: Decimal,
    /// Machine type, e.g. "Track Type Tractors" (`ProductGroupDesc`).
    pub product_group: String,
    /// US state the auction took place in (`state`).
    pub state: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All sales, loaded once at startup and never mutated afterwards.
///
/// Only shared references are handed out, so every query sees the same rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SaleRecord>,
    /// Sorted distinct `product_group` values (the "Type" selector).
    machine_types: BTreeSet<String>,
    /// Sorted distinct `state` values (the "Region" selector).
    regions: BTreeSet<String>,
}

impl Dataset {
    /// Build the selector indices from the loaded records.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        let mut machine_types = BTreeSet::new();
        let mut regions = BTreeSet::new();

        for rec in &records {
            machine_types.insert(rec.product_group.clone());
            regions.insert(rec.state.clone());
        }

        Dataset {
            records,
            machine_types,
            regions,
        }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn machine_types(&self) -> &BTreeSet<String> {
        &self.machine_types
    }

    pub fn regions(&self) -> &BTreeSet<String> {
        &self.regions
    }

    /// Number of sales.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Test helper: a sale at midnight on the given day.
    pub(crate) fn sale(
        (y, m, d): (i32, u32, u32),
        price: Decimal,
        product_group: &str,
        state: &str,
    ) -> SaleRecord {
        SaleRecord {
            sale_date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            sale_price: price,
            product_group: product_group.to_string(),
            state: state.to_string(),
        }
    }

    #[test]
    fn test_distinct_values_are_sorted_and_deduplicated() {
        let ds = Dataset::from_records(vec![
            sale((2020, 1, 5), Decimal::new(100, 0), "Wheel Loader", "Texas"),
            sale((2020, 1, 6), Decimal::new(200, 0), "Backhoe Loaders", "Iowa"),
            sale((2020, 1, 7), Decimal::new(300, 0), "Wheel Loader", "Alabama"),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.machine_types().iter().collect::<Vec<_>>(),
            ["Backhoe Loaders", "Wheel Loader"]
        );
        assert_eq!(
            ds.regions().iter().collect::<Vec<_>>(),
            ["Alabama", "Iowa", "Texas"]
        );
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.machine_types().is_empty());
        assert!(ds.regions().is_empty());
    }
}
