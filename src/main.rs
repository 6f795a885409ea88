mod app;
mod data;
mod export;
mod state;
mod theme;
mod ui;

use std::path::PathBuf;

use app::TimeframeChartApp;
use eframe::egui;

const DEFAULT_DATA_PATH: &str = "assets/chartData.json";

fn main() -> eframe::Result {
    env_logger::init();

    // One-shot load at startup. A failure degrades to an empty dataset:
    // the chart simply renders with no data.
    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    let observations = match data::loader::load_file(&data_path) {
        Ok(obs) => {
            log::info!("Loaded {} observations from {}", obs.len(), data_path.display());
            obs
        }
        Err(e) => {
            log::error!("Failed to load chart data: {e:#}");
            Vec::new()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Timeframe Chart",
        options,
        Box::new(move |_cc| Ok(Box::new(TimeframeChartApp::new(observations)))),
    )
}
