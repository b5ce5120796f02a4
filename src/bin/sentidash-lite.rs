#![deny(missing_docs)]
#![deny(warnings)]

//! Deprecated single-page front end for the legacy analyze endpoint.
//!
//! Kept for deployments still running the older backend contract. The
//! main dashboard binary supersedes this.

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText};
use sentidash::api::ApiError;
use sentidash::api::legacy::{self, AnalyzeResponse};
use sentidash::config;
use sentidash::logging;

const ERROR_TOAST_DURATION: Duration = Duration::from_secs(4);
const BAR_ANIMATION_RATE: f32 = 0.18;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(640.0, 560.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Sentidash Lite",
        native_options,
        Box::new(|_cc| match LiteApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

enum LiteMessage {
    ExamplesLoaded(Result<Vec<String>, ApiError>),
    AnalyzeDone(Result<AnalyzeResponse, ApiError>),
}

struct LiteApp {
    base: String,
    text: String,
    examples: Vec<String>,
    result: Option<AnalyzeResponse>,
    /// Bar fill animated toward the reported confidence each frame.
    bar_fraction: f32,
    error: Option<(String, Instant)>,
    analyzing: bool,
    message_tx: Sender<LiteMessage>,
    message_rx: Receiver<LiteMessage>,
    visuals_set: bool,
}

impl LiteApp {
    fn new() -> Result<Self, String> {
        let config =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        let (message_tx, message_rx) = std::sync::mpsc::channel();
        let app = Self {
            base: config.api_base,
            text: String::new(),
            examples: Vec::new(),
            result: None,
            bar_fraction: 0.0,
            error: None,
            analyzing: false,
            message_tx,
            message_rx,
            visuals_set: false,
        };
        app.fetch_examples();
        Ok(app)
    }

    fn fetch_examples(&self) {
        let base = self.base.clone();
        let tx = self.message_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(LiteMessage::ExamplesLoaded(legacy::examples(&base)));
        });
    }

    fn submit(&mut self) {
        if self.analyzing || self.text.trim().is_empty() {
            return;
        }
        self.analyzing = true;
        self.error = None;
        let base = self.base.clone();
        let text = self.text.trim().to_string();
        let tx = self.message_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(LiteMessage::AnalyzeDone(legacy::analyze(&base, &text)));
        });
    }

    fn clear(&mut self) {
        self.text.clear();
        self.result = None;
        self.bar_fraction = 0.0;
        self.error = None;
    }

    fn drain_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                LiteMessage::ExamplesLoaded(Ok(examples)) => self.examples = examples,
                LiteMessage::ExamplesLoaded(Err(err)) => {
                    tracing::warn!("Failed to load examples: {err}");
                }
                LiteMessage::AnalyzeDone(result) => {
                    self.analyzing = false;
                    match result {
                        Ok(response) => {
                            self.result = Some(response);
                            self.bar_fraction = 0.0;
                        }
                        Err(err) => {
                            self.result = None;
                            self.error = Some((err.to_string(), Instant::now()));
                        }
                    }
                }
            }
        }
    }

    fn expire_error_toast(&mut self) {
        if let Some((_, since)) = &self.error {
            if since.elapsed() >= ERROR_TOAST_DURATION {
                self.error = None;
            }
        }
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.result.clone() else {
            return;
        };
        let color = color_for_class(&result.color_class);
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(&result.sentiment_emoji).size(30.0));
            ui.label(RichText::new(&result.sentiment).color(color).size(24.0).strong());
        });
        ui.add_space(6.0);
        let target = (result.confidence_percent / 100.0).clamp(0.0, 1.0);
        self.bar_fraction += (target - self.bar_fraction) * BAR_ANIMATION_RATE;
        if (target - self.bar_fraction).abs() < 0.002 {
            self.bar_fraction = target;
        } else {
            ui.ctx().request_repaint();
        }
        let desired = egui::vec2(ui.available_width(), 18.0);
        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, Color32::from_rgb(34, 36, 42));
        let fill = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * self.bar_fraction, rect.height()),
        );
        painter.rect_filled(fill, 4.0, color);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{:.1}%", result.confidence_percent),
            egui::FontId::proportional(12.0),
            Color32::WHITE,
        );
    }

    fn render_error_toast(&self, ctx: &egui::Context) {
        let Some((message, _)) = &self.error else {
            return;
        };
        egui::Area::new("error_toast".into())
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(Color32::from_rgb(120, 46, 42))
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.colored_label(Color32::WHITE, message);
                    });
            });
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl eframe::App for LiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_set {
            ctx.set_visuals(egui::Visuals::dark());
            self.visuals_set = true;
        }
        self.drain_messages();
        self.expire_error_toast();
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Enter)) {
            self.submit();
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Phân tích cảm xúc");
            ui.add_space(8.0);
            egui::TextEdit::multiline(&mut self.text)
                .id_salt("lite_input")
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .hint_text("Nhập văn bản tiếng Việt…")
                .show(ui);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let enabled = !self.analyzing && !self.text.trim().is_empty();
                if ui
                    .add_enabled(enabled, egui::Button::new("Phân tích"))
                    .clicked()
                {
                    self.submit();
                }
                if ui.button("Xóa").clicked() {
                    self.clear();
                }
                if self.analyzing {
                    ui.spinner();
                }
            });
            if !self.examples.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new("Ví dụ").color(Color32::GRAY));
                let examples = self.examples.clone();
                for example in examples {
                    if ui.button(&example).clicked() {
                        self.text = example;
                    }
                }
            }
            self.render_result(ui);
        });
        self.render_error_toast(ctx);
        if self.analyzing {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn color_for_class(class: &str) -> Color32 {
    match class {
        "positive" => Color32::from_rgb(110, 190, 140),
        "negative" => Color32::from_rgb(220, 110, 100),
        _ => Color32::from_rgb(150, 155, 165),
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
