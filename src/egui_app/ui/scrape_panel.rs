use eframe::egui::{self, RichText};

use super::{EguiApp, results, style};
use crate::scrape;

impl EguiApp {
    pub(super) fn render_scrape_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading("Scrape comments");
        ui.add_space(6.0);
        ui.label(
            RichText::new("Public page URL (login-walled pages are rejected)")
                .color(palette.text_muted),
        );
        ui.horizontal(|ui| {
            egui::TextEdit::singleline(&mut self.controller.ui.scrape.url)
                .id_salt("scrape_url")
                .hint_text("example.com/post")
                .desired_width(ui.available_width() - 220.0)
                .show(ui);
            ui.label(RichText::new("Limit").color(palette.text_muted));
            ui.add(
                egui::DragValue::new(&mut self.controller.ui.scrape.limit)
                    .range(1..=scrape::MAX_ITEMS),
            );
            let enabled = self.controller.can_submit_scrape();
            if ui.add_enabled(enabled, egui::Button::new("Fetch")).clicked() {
                self.controller.submit_scrape();
            }
        });
        ui.add_space(10.0);
        let Some(view) = results::show_result(ui, &self.controller.ui.scrape.result) else {
            return;
        };
        let view = view.clone();
        if view.rows.is_empty() {
            ui.label(RichText::new("No comment-like text found on this page.").color(palette.text_muted));
            return;
        }
        if let Some(summary) = &view.summary {
            ui.label(RichText::new(summary).color(palette.accent_ice));
            ui.add_space(4.0);
        }
        egui::ScrollArea::vertical()
            .id_salt("scrape_rows")
            .show(ui, |ui| {
                egui::Grid::new("scrape_grid")
                    .num_columns(4)
                    .striped(true)
                    .spacing([18.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("#").color(palette.text_muted));
                        ui.label(RichText::new("Text").color(palette.text_muted));
                        ui.label(RichText::new("Label").color(palette.text_muted));
                        ui.label(RichText::new("Score").color(palette.text_muted));
                        ui.end_row();
                        for row in &view.rows {
                            ui.label(row.rank.to_string());
                            ui.add(egui::Label::new(&row.text).wrap());
                            ui.label(
                                RichText::new(&row.label).color(style::label_color(row.tone)),
                            );
                            ui.label(row.score_text.as_deref().unwrap_or("-"));
                            ui.end_row();
                        }
                    });
            });
    }
}
