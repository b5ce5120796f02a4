//! egui renderer for the dashboard.

use eframe::egui::{self, RichText};

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::ActiveTab;

mod chart_panel;
mod fill_mask_panel;
mod results;
mod scrape_panel;
mod sentiment_panel;
mod status_bar;
pub mod style;

/// Smallest window the layout stays usable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(860.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = EguiController::from_saved_config()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        controller.start_startup_probe();
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Vietnamese NLP Dashboard")
                        .color(palette.text_primary)
                        .strong(),
                );
                ui.add_space(12.0);
                ui.separator();
                let active = self.controller.ui.active_tab;
                for tab in ActiveTab::ALL {
                    if ui.selectable_label(active == tab, tab.label()).clicked() {
                        self.controller.select_tab(tab);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let visible = self.controller.ui.chart.visible;
                    let chart_label = if visible { "Hide chart" } else { "Show chart" };
                    if ui.button(chart_label).clicked() {
                        self.controller.ui.chart.visible = !visible;
                    }
                    ui.add_space(8.0);
                    self.render_model_picker(ui);
                });
            });
        });
    }

    fn render_model_picker(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.controller.ui.model_type;
        let hover = match &self.controller.ui.backend.catalog {
            crate::egui_app::state::FeatureState::Success(catalog) => {
                let mut lines = Vec::new();
                if let Some(name) = &catalog.sentiment_default {
                    lines.push(format!("Sentiment: {name}"));
                }
                if let Some(name) = &catalog.fill_mask_default {
                    lines.push(format!("Fill mask: {name}"));
                }
                lines.join("\n")
            }
            _ => String::new(),
        };
        let response = egui::ComboBox::from_id_salt("model_picker")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for model in crate::api::ModelType::ALL {
                    ui.selectable_value(&mut selected, model, model.label());
                }
            })
            .response;
        if !hover.is_empty() {
            response.on_hover_text(hover);
        }
        self.controller.select_model(selected);
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        match self.controller.ui.active_tab {
            ActiveTab::Sentiment => self.render_sentiment_panel(ui),
            ActiveTab::FillMask => self.render_fill_mask_panel(ui),
            ActiveTab::Scrape => self.render_scrape_panel(ui),
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        if self.controller.ui.chart.visible {
            egui::SidePanel::right("benchmark_chart")
                .resizable(false)
                .min_width(300.0)
                .max_width(340.0)
                .show(ctx, |ui| self.render_chart_panel(ui));
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_center(ui);
        });
        if self.controller.any_job_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
