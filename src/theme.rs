use eframe::egui;

// ---------------------------------------------------------------------------
// Light/Dark presentation theme
// ---------------------------------------------------------------------------

/// Presentation theme. Carried in [`crate::state::AppState`] and applied to
/// the egui context when it changes; it never affects the data pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle label, mirroring the current mode.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        ctx.set_visuals(match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });
    }
}
