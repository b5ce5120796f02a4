use eframe::egui::{self, RichText};

use super::style;
use crate::egui_app::state::FeatureState;

/// Render the loading/error half of a feature bucket, handing the success
/// payload back to the caller for feature-specific layout.
pub(super) fn show_result<'a, T>(
    ui: &mut egui::Ui,
    result: &'a FeatureState<T>,
) -> Option<&'a T> {
    match result {
        FeatureState::Idle => None,
        FeatureState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Working…");
            });
            None
        }
        FeatureState::Error(message) => {
            let palette = style::palette();
            egui::Frame::new()
                .fill(palette.bg_tertiary)
                .stroke(egui::Stroke::new(1.0, palette.negative))
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.colored_label(palette.negative, RichText::new(message));
                });
            None
        }
        FeatureState::Success(value) => Some(value),
    }
}
