use super::model::{Dataset, SaleRecord};

// ---------------------------------------------------------------------------
// Filter predicate: optional machine type and region
// ---------------------------------------------------------------------------

/// The "Type" and "Region" selector values.
///
/// `None` in either field means "no constraint" for that column, so the
/// default filter passes every sale through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleFilter {
    /// Keep only sales whose `product_group` equals this.
    pub machine_type: Option<String>,
    /// Keep only sales whose `state` equals this.
    pub region: Option<String>,
}

impl SaleFilter {
    pub fn new(machine_type: Option<String>, region: Option<String>) -> Self {
        Self {
            machine_type,
            region,
        }
    }

    /// Whether a sale passes both constraints.
    pub fn matches(&self, sale: &SaleRecord) -> bool {
        let type_ok = self
            .machine_type
            .as_deref()
            .map_or(true, |t| sale.product_group == t);
        let region_ok = self.region.as_deref().map_or(true, |r| sale.state == r);
        type_ok && region_ok
    }
}

/// Iterate over the sales that pass `filter`, in load order.
pub fn filtered<'a>(
    dataset: &'a Dataset,
    filter: &'a SaleFilter,
) -> impl Iterator<Item = &'a SaleRecord> + 'a {
    dataset.records().iter().filter(move |sale| filter.matches(sale))
}
