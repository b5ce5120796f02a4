use eframe::egui::{self, RichText};

use super::{EguiApp, results, style};
use crate::egui_app::state::{MASK_TOKEN, TOP_K_RANGE};

impl EguiApp {
    pub(super) fn render_fill_mask_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading("Fill mask");
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("Sentence with a {MASK_TOKEN} placeholder"))
                .color(palette.text_muted),
        );
        self.render_mask_input(ui);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let enabled = self.controller.can_submit_fill_mask();
            if ui
                .add_enabled(enabled, egui::Button::new("Predict"))
                .clicked()
            {
                self.controller.submit_fill_mask();
            }
            if ui.button(format!("Insert {MASK_TOKEN}")).clicked() {
                self.controller.insert_mask_token();
            }
            ui.add_space(12.0);
            ui.label(RichText::new("Suggestions").color(palette.text_muted));
            ui.add(
                egui::DragValue::new(&mut self.controller.ui.fill_mask.top_k)
                    .range(TOP_K_RANGE),
            );
            if !enabled && !self.controller.ui.fill_mask.text.contains(MASK_TOKEN) {
                ui.label(
                    RichText::new(format!("Add {MASK_TOKEN} to enable prediction"))
                        .color(palette.warning),
                );
            }
        });
        ui.add_space(10.0);
        let Some(view) = results::show_result(ui, &self.controller.ui.fill_mask.result) else {
            return;
        };
        let view = view.clone();
        ui.label(RichText::new(&view.model_name).color(palette.text_muted));
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .id_salt("fill_mask_rows")
            .show(ui, |ui| {
                egui::Grid::new("fill_mask_grid")
                    .num_columns(4)
                    .striped(true)
                    .spacing([18.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("#").color(palette.text_muted));
                        ui.label(RichText::new("Token").color(palette.text_muted));
                        ui.label(RichText::new("Score").color(palette.text_muted));
                        ui.label(RichText::new("Sequence").color(palette.text_muted));
                        ui.end_row();
                        for row in &view.rows {
                            ui.label(row.rank.to_string());
                            ui.label(RichText::new(&row.token).color(palette.accent_ice));
                            ui.label(&row.score_text);
                            ui.label(row.sequence.as_deref().unwrap_or(""));
                            ui.end_row();
                        }
                    });
            });
    }

    /// The mask input tracks its caret so the insert button can splice at
    /// the cursor, and restores it after a programmatic splice.
    fn render_mask_input(&mut self, ui: &mut egui::Ui) {
        let output = egui::TextEdit::multiline(&mut self.controller.ui.fill_mask.text)
            .id_salt("fill_mask_input")
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .show(ui);
        if let Some(caret) = self.controller.ui.fill_mask.pending_caret.take() {
            let mut state = output.state;
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::one(
                    egui::text::CCursor::new(caret),
                )));
            state.store(ui.ctx(), output.response.id);
            output.response.request_focus();
            self.controller.ui.fill_mask.caret = caret;
        } else if let Some(range) = output.state.cursor.char_range() {
            self.controller.ui.fill_mask.caret = range.primary.index;
        }
    }
}
