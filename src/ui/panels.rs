use eframe::egui::{self, RichText, Ui};

use crate::data::aggregate::Aggregation;
use crate::state::AppState;
use crate::ui::format::format_currency;

/// Placeholder entry that clears an optional selector.
const ALL_LABEL: &str = "All";

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Render the title banner.
pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("🚜").size(48.0));
        ui.heading(RichText::new("Bulldozer Analytics").strong());
        ui.label("Analyze the monthly bulldozer auction sales!");
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – the three selectors
// ---------------------------------------------------------------------------

/// Render the filter panel. Any change re-runs the pipeline through the
/// [`AppState`] setters before the plot is drawn.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Type");
    let mut machine_type = state.filter().machine_type.clone();
    optional_combo(
        ui,
        "type_filter",
        "Filter on machine type...",
        &mut machine_type,
        state.dataset().machine_types(),
    );
    state.set_machine_type(machine_type);
    ui.add_space(8.0);

    ui.strong("Region");
    let mut region = state.filter().region.clone();
    optional_combo(
        ui,
        "region_filter",
        "Filter on region...",
        &mut region,
        state.dataset().regions(),
    );
    state.set_region(region);
    ui.add_space(8.0);

    ui.strong("Aggregation");
    let mut aggregation = state.aggregation();
    egui::ComboBox::from_id_salt("agg_filter")
        .selected_text(aggregation.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in Aggregation::ALL {
                ui.selectable_value(&mut aggregation, option, option.to_string());
            }
        });
    state.set_aggregation(aggregation);
}

/// A combo box over `options` with a leading "All" entry mapping to `None`.
fn optional_combo<'a>(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    selected: &mut Option<String>,
    options: impl IntoIterator<Item = &'a String>,
) {
    let text = selected.clone().unwrap_or_else(|| placeholder.to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(selected, None, ALL_LABEL);
            for value in options {
                ui.selectable_value(selected, Some(value.clone()), value.as_str());
            }
        });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// One-line summary of the current selection.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let series = state.series();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} of {} sales, {} {} periods",
            series.sale_count,
            state.dataset().len(),
            series.len(),
            series.aggregation.to_string().to_lowercase(),
        ));
        ui.separator();
        ui.label(format!("Total: {}", format_currency(series.total())));
    });
}
