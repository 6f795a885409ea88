use std::sync::Arc;

use eframe::egui;

use crate::data::model::Observation;
use crate::export::{self, ExportFormat};
use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TimeframeChartApp {
    pub state: AppState,
    applied_theme: Option<Theme>,
}

impl TimeframeChartApp {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            state: AppState::new(observations),
            applied_theme: None,
        }
    }

    /// Pick up screenshots requested by the export buttons and write them
    /// out. Failures are logged and otherwise dropped.
    fn handle_screenshots(&mut self, ctx: &egui::Context) {
        let shots: Vec<(Arc<egui::ColorImage>, ExportFormat)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Screenshot {
                        image, user_data, ..
                    } => {
                        let format = user_data
                            .data
                            .as_ref()?
                            .downcast_ref::<ExportFormat>()
                            .copied()?;
                        Some((image.clone(), format))
                    }
                    _ => None,
                })
                .collect()
        });

        for (image, format) in shots {
            match export::save_chart(&image, format) {
                Ok(filename) => log::info!("Exported chart to {filename}"),
                Err(e) => log::error!("Failed to export chart as image: {e}"),
            }
        }
    }
}

impl eframe::App for TimeframeChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.state.theme) {
            self.state.theme.apply(ctx);
            self.applied_theme = Some(self.state.theme);
        }

        self.handle_screenshots(ctx);

        // ---- Top panel: timeframe, theme, export, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.state);
        });
    }
}
