use eframe::egui::{self, RichText};

use super::{EguiApp, results, style};

impl EguiApp {
    pub(super) fn render_sentiment_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading("Sentiment analysis");
        ui.add_space(6.0);
        ui.label(RichText::new("Text to classify").color(palette.text_muted));
        egui::TextEdit::multiline(&mut self.controller.ui.sentiment.text)
            .id_salt("sentiment_input")
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .show(ui);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let enabled = self.controller.can_submit_sentiment();
            if ui
                .add_enabled(enabled, egui::Button::new("Analyze"))
                .clicked()
            {
                self.controller.submit_sentiment();
            }
            if ui.button("Clear").clicked() {
                self.controller.ui.sentiment.text.clear();
                self.controller.ui.sentiment.result = Default::default();
            }
        });
        ui.add_space(10.0);
        let Some(view) = results::show_result(ui, &self.controller.ui.sentiment.result) else {
            return;
        };
        let view = view.clone();
        egui::Frame::new()
            .fill(palette.bg_tertiary)
            .stroke(egui::Stroke::new(1.0, palette.panel_outline))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&view.label)
                            .color(style::label_color(view.tone))
                            .size(22.0)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&view.score_text).size(22.0));
                });
                ui.label(RichText::new(&view.model_name).color(palette.text_muted));
                if !view.all_scores.is_empty() {
                    ui.add_space(8.0);
                    egui::Grid::new("sentiment_scores")
                        .num_columns(2)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            for (label, percent) in &view.all_scores {
                                ui.label(
                                    RichText::new(label)
                                        .color(style::label_color(
                                            crate::egui_app::view_model::label_tone(label),
                                        )),
                                );
                                ui.label(percent);
                                ui.end_row();
                            }
                        });
                }
            });
    }
}
