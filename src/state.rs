use crate::data::aggregate::{AggregatedSeries, Aggregation, aggregate};
use crate::data::filter::SaleFilter;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Sales loaded at startup. Never replaced.
    dataset: Dataset,

    /// "Type" and "Region" selections.
    filter: SaleFilter,

    /// "Aggregation" selection.
    aggregation: Aggregation,

    /// Chart data for the current selections (cached).
    series: AggregatedSeries,
}

impl AppState {
    /// Take ownership of the dataset and compute the unfiltered daily series.
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            dataset,
            filter: SaleFilter::default(),
            aggregation: Aggregation::default(),
            series: AggregatedSeries::default(),
        };
        state.recompute();
        state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter(&self) -> &SaleFilter {
        &self.filter
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    pub fn series(&self) -> &AggregatedSeries {
        &self.series
    }

    /// Select a machine type, or `None` for all types.
    pub fn set_machine_type(&mut self, machine_type: Option<String>) {
        if self.filter.machine_type != machine_type {
            self.filter.machine_type = machine_type;
            self.recompute();
        }
    }

    /// Select a region, or `None` for all regions.
    pub fn set_region(&mut self, region: Option<String>) {
        if self.filter.region != region {
            self.filter.region = region;
            self.recompute();
        }
    }

    pub fn set_aggregation(&mut self, aggregation: Aggregation) {
        if self.aggregation != aggregation {
            self.aggregation = aggregation;
            self.recompute();
        }
    }

    /// Apply startup selections. A machine type or region the dataset has
    /// never seen is logged and left unselected.
    pub fn apply_initial(
        &mut self,
        machine_type: Option<&str>,
        region: Option<&str>,
        aggregation: Aggregation,
    ) {
        let machine_type = machine_type.filter(|t| {
            let known = self.dataset.machine_types().contains(*t);
            if !known {
                log::warn!("Ignoring unknown machine type {t:?}");
            }
            known
        });
        let region = region.filter(|r| {
            let known = self.dataset.regions().contains(*r);
            if !known {
                log::warn!("Ignoring unknown region {r:?}");
            }
            known
        });

        self.filter = SaleFilter::new(
            machine_type.map(str::to_string),
            region.map(str::to_string),
        );
        self.aggregation = aggregation;
        self.recompute();
    }

    /// Re-run the pipeline for the current selections.
    fn recompute(&mut self) {
        self.series = aggregate(&self.dataset, &self.filter, self.aggregation);
        log::debug!(
            "{:?} {}: {} sales in {} periods",
            self.filter,
            self.aggregation,
            self.series.sale_count,
            self.series.len()
        );
    }
}
