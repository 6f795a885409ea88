use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Time-series line chart (central panel)
// ---------------------------------------------------------------------------

/// Stroke colour of the value line, identical in both themes.
const LINE_COLOR: Color32 = Color32::from_rgb(0x88, 0x84, 0xd8);

/// Render the chart. An empty dataset renders an empty plot; data-load
/// failures never surface here.
pub fn chart_plot(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = state
        .visible
        .iter()
        .map(|obs| [obs.timestamp.num_days_from_ce() as f64, obs.value])
        .collect();

    let line = Line::new(points).name("value").color(LINE_COLOR).width(1.5);

    Plot::new("timeframe_chart")
        .legend(Legend::default())
        .y_axis_label("Value")
        .x_axis_formatter(|mark, _range| format_day(mark.value))
        .label_formatter(|_name, point| {
            format!("Date: {}\nValue: {:.2}", format_day(point.x), point.y)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// Plot x-coordinates are days since the common era; format them back into
/// calendar dates for ticks and the hover tooltip.
fn format_day(days: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(days.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
