use eframe::egui::{self, RichText};

use super::{EguiApp, style};

impl EguiApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(7.0, 10.0),
                    6.0,
                    style::status_badge_color(status.tone),
                );
                ui.add_space(18.0);
                ui.label(RichText::new(&status.badge_label).strong());
                ui.separator();
                ui.label(&status.text);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_health_dot(ui);
                });
            });
        });
    }

    fn render_health_dot(&self, ui: &mut egui::Ui) {
        use crate::egui_app::state::FeatureState;
        let palette = style::palette();
        let (color, text) = match &self.controller.ui.backend.health {
            FeatureState::Success(()) => (palette.positive, "Backend online".to_string()),
            FeatureState::Loading => (palette.accent_ice, "Checking backend…".to_string()),
            FeatureState::Error(message) => (palette.negative, format!("Backend offline: {message}")),
            FeatureState::Idle => (palette.text_muted, "Backend not probed".to_string()),
        };
        ui.label(RichText::new(self.controller.api_base()).color(palette.text_muted))
            .on_hover_text(&text);
        ui.colored_label(color, "●").on_hover_text(text);
    }
}
