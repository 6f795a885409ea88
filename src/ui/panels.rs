use chrono::{NaiveDate, Utc};
use eframe::egui::{self, Color32, DragValue, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::data::model::Timeframe;
use crate::export::ExportFormat;
use crate::state::AppState;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Top bar – timeframe, theme, export, status
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Timeframe Chart");
        ui.separator();

        for timeframe in Timeframe::ALL {
            if ui
                .selectable_label(state.timeframe == timeframe, timeframe.label())
                .clicked()
            {
                state.set_timeframe(timeframe);
            }
        }
        ui.separator();

        if ui
            .selectable_label(state.theme == Theme::Dark, state.theme.label())
            .clicked()
        {
            state.toggle_theme();
        }
        ui.separator();

        if ui.button("Export PNG").clicked() {
            request_export(ui, ExportFormat::Png);
        }
        if ui.button("Export JPG").clicked() {
            request_export(ui, ExportFormat::Jpeg);
        }
        ui.separator();

        ui.label(format!(
            "{} observations loaded, {} shown",
            state.observations.len(),
            state.visible.len()
        ));
    });
}

/// Ask the viewport for a screenshot tagged with the target format; the app
/// writes the file when the screenshot event comes back.
fn request_export(ui: &Ui, format: ExportFormat) {
    ui.ctx()
        .send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::new(
            format,
        )));
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Date range");
    if let Some(new_start) = date_row(ui, "Start date", state.criteria.start_date, || {
        first_timestamp(state)
    }) {
        state.set_start_date(new_start);
    }
    if let Some(new_end) = date_row(ui, "End date", state.criteria.end_date, || {
        last_timestamp(state)
    }) {
        state.set_end_date(new_end);
    }
    ui.separator();

    ui.strong("Value range");
    if let Some(new_min) = value_row(ui, "Min value", state.criteria.min_value) {
        state.set_min_value(new_min);
    }
    if let Some(new_max) = value_row(ui, "Max value", state.criteria.max_value) {
        state.set_max_value(new_max);
    }
    ui.separator();

    if ui.button("Clear Filters").clicked() {
        state.clear_filters();
    }

    if let Some(msg) = &state.error_message {
        ui.add_space(4.0);
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

/// One date bound: an enable checkbox plus a date picker when enabled.
/// Returns `Some(new_bound)` when the user changed anything.
fn date_row(
    ui: &mut Ui,
    label: &str,
    current: Option<NaiveDate>,
    default_date: impl FnOnce() -> NaiveDate,
) -> Option<Option<NaiveDate>> {
    let mut change = None;

    let mut enabled = current.is_some();
    if ui.checkbox(&mut enabled, label).changed() {
        change = Some(enabled.then(default_date));
    }
    if let Some(mut date) = current {
        if ui
            .add(DatePickerButton::new(&mut date).id_salt(label))
            .changed()
        {
            change = Some(Some(date));
        }
    }
    change
}

/// One value bound: an enable checkbox plus a drag value when enabled.
fn value_row(ui: &mut Ui, label: &str, current: Option<f64>) -> Option<Option<f64>> {
    let mut change = None;

    let mut enabled = current.is_some();
    if ui.checkbox(&mut enabled, label).changed() {
        change = Some(enabled.then_some(0.0));
    }
    if let Some(mut value) = current {
        if ui.add(DragValue::new(&mut value).speed(1.0)).changed() {
            change = Some(Some(value));
        }
    }
    change
}

fn first_timestamp(state: &AppState) -> NaiveDate {
    state
        .observations
        .first()
        .map(|o| o.timestamp)
        .unwrap_or_else(|| Utc::now().date_naive())
}

fn last_timestamp(state: &AppState) -> NaiveDate {
    state
        .observations
        .last()
        .map(|o| o.timestamp)
        .unwrap_or_else(|| Utc::now().date_naive())
}
