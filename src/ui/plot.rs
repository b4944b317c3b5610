use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use eframe::egui::{Color32, Ui};
use egui_plot::{GridInput, GridMark, Line, Plot, PlotPoints};
use rust_decimal::prelude::ToPrimitive;

use crate::data::aggregate::{AggregatedSeries, Aggregation};
use crate::ui::format::format_currency_f64;

/// Line colour of the sales series.
pub const ACCENT: Color32 = Color32::from_rgb(0x07, 0x9a, 0x82);

/// Upper bound on labelled x ticks across the visible range.
const MAX_X_TICKS: f64 = 12.0;

/// Beyond this many visible days no x ticks are drawn.
const MAX_TICK_SPAN_DAYS: i64 = 400 * 366;

// ---------------------------------------------------------------------------
// Sales plot (central panel)
// ---------------------------------------------------------------------------

/// Render the aggregated series as a single line.
pub fn sales_plot(ui: &mut Ui, series: &AggregatedSeries) {
    if series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No sales match the current filters");
        });
        return;
    }

    let aggregation = series.aggregation;
    let points: PlotPoints = plot_points(series).into_iter().collect();

    Plot::new("sales_plot")
        .x_axis_label("Sale date")
        .y_axis_label("Total sale price")
        .x_grid_spacer(move |input| period_marks(input, aggregation))
        .x_axis_formatter(move |mark, _range| period_label(mark.value, aggregation))
        .y_axis_formatter(|mark, _range| format_currency_f64(mark.value))
        .label_formatter(move |name, value| {
            let period = period_label(value.x, aggregation);
            if name.is_empty() {
                period
            } else {
                format!("{period}\n{name}: {}", format_currency_f64(value.y))
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name("Total sale price")
                .color(ACCENT)
                .width(2.0);
            plot_ui.line(line);
        });
}

/// `[x, y]` pairs: x counts days from 0001-01-01, y is the period total.
fn plot_points(series: &AggregatedSeries) -> Vec<[f64; 2]> {
    series
        .points()
        .iter()
        .map(|p| {
            [
                day_number(p.period),
                p.total.to_f64().unwrap_or(f64::NAN),
            ]
        })
        .collect()
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// The day a plot x coordinate falls on, if it is a representable date.
fn day_from_x(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x < f64::from(i32::MIN) || x > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Axis / tooltip label for a plot x coordinate, snapped to the nearest day.
fn period_label(x: f64, aggregation: Aggregation) -> String {
    day_from_x(x)
        .map(|d| aggregation.format_period(d))
        .unwrap_or_default()
}

/// Grid marks on bucket days only, so each tick names a distinct period.
/// Every `stride`-th period gets a mark to keep the axis readable.
fn period_marks(input: GridInput, aggregation: Aggregation) -> Vec<GridMark> {
    let (Some(first), Some(last)) = (day_from_x(input.bounds.0), day_from_x(input.bounds.1))
    else {
        return Vec::new();
    };
    let span = (last - first).num_days();
    if span < 0 || span > MAX_TICK_SPAN_DAYS {
        return Vec::new();
    }

    let period_days = match aggregation {
        Aggregation::Daily => 1.0,
        Aggregation::Monthly => 30.44,
        Aggregation::Yearly => 365.25,
    };
    let periods = (span as f64 / period_days).max(1.0);
    let stride = (periods / MAX_X_TICKS).ceil().max(1.0) as usize;
    let step_size = stride as f64 * period_days;

    let mut marks = Vec::new();
    let mut period = Some(aggregation.bucket(first.and_time(NaiveTime::MIN)));
    let mut index = 0;
    while let Some(p) = period.filter(|p| *p <= last) {
        if index % stride == 0 {
            marks.push(GridMark {
                value: day_number(p),
                step_size,
            });
        }
        period = match aggregation {
            Aggregation::Daily => p.checked_add_signed(Duration::days(stride as i64)),
            _ => aggregation.next_period(p),
        };
        index += match aggregation {
            Aggregation::Daily => stride,
            _ => 1,
        };
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::aggregate;
    use crate::data::filter::SaleFilter;
    use crate::data::model::Dataset;
    use crate::data::model::tests::sale;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plot_points_follow_series() {
        let ds = Dataset::from_records(vec![
            sale((2020, 1, 5), dec!(100), "Track", "IA"),
            sale((2020, 2, 10), dec!(50.5), "Wheel", "IA"),
        ]);
        let series = aggregate(&ds, &SaleFilter::default(), Aggregation::Monthly);

        let pts = plot_points(&series);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1][0] - pts[0][0], 29.0);
        assert_eq!(pts[0][1], 100.0);
        assert_eq!(pts[1][1], 50.5);
    }

    #[test]
    fn test_period_label_round_trips_day_number() {
        let d = NaiveDate::from_ymd_opt(2011, 10, 31).unwrap();
        let x = day_number(d);
        assert_eq!(period_label(x, Aggregation::Daily), "2011-10-31");
        assert_eq!(period_label(x + 0.4, Aggregation::Monthly), "2011-10");
        assert_eq!(period_label(x, Aggregation::Yearly), "2011");
    }

    fn marks_between(from: NaiveDate, to: NaiveDate, aggregation: Aggregation) -> Vec<String> {
        let input = GridInput {
            bounds: (day_number(from), day_number(to)),
            base_step_size: 1.0,
        };
        period_marks(input, aggregation)
            .iter()
            .map(|m| period_label(m.value, aggregation))
            .collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_ticks_name_each_month_once() {
        let labels = marks_between(ymd(2020, 1, 1), ymd(2020, 12, 31), Aggregation::Monthly);
        let expected: Vec<String> = (1..=12).map(|m| format!("2020-{m:02}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_yearly_ticks_are_distinct_years() {
        let labels = marks_between(ymd(1990, 6, 1), ymd(2011, 6, 1), Aggregation::Yearly);
        assert!(!labels.is_empty());
        assert!(labels.len() <= MAX_X_TICKS as usize + 1);
        assert!(labels.windows(2).all(|w| w[0] < w[1]), "{labels:?}");
        assert_eq!(labels[0], "1990");
    }

    #[test]
    fn test_daily_ticks_are_strided() {
        let labels = marks_between(ymd(2020, 1, 1), ymd(2020, 12, 31), Aggregation::Daily);
        assert!(labels.len() <= MAX_X_TICKS as usize + 1);
        assert!(labels.windows(2).all(|w| w[0] < w[1]), "{labels:?}");
        assert_eq!(labels[0], "2020-01-01");
    }

    #[test]
    fn test_no_ticks_for_unrepresentable_range() {
        let input = GridInput {
            bounds: (f64::NAN, 1e18),
            base_step_size: 1.0,
        };
        assert!(period_marks(input, Aggregation::Monthly).is_empty());
    }

    #[test]
    fn test_period_label_out_of_range() {
        assert_eq!(period_label(f64::NAN, Aggregation::Daily), "");
        assert_eq!(period_label(1e18, Aggregation::Daily), "");
    }
}
