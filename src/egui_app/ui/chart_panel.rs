use eframe::egui::{self, Align2, FontId, RichText, Stroke};

use super::{EguiApp, style};
use crate::benchmarks::{self, BENCHMARKS, BenchmarkMetric};

const BAR_WIDTH: f32 = 26.0;
const CHART_HEIGHT: f32 = 220.0;
const AXIS_STEPS: u32 = 5;

impl EguiApp {
    pub(super) fn render_chart_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading("Model benchmarks");
        ui.label(RichText::new("Reference numbers, not live measurements").color(palette.text_muted));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let current = self.controller.ui.chart.metric;
            for metric in BenchmarkMetric::ALL {
                if ui.selectable_label(current == metric, metric.label()).clicked() {
                    self.controller.ui.chart.metric = metric;
                }
            }
        });
        ui.add_space(8.0);
        let metric = self.controller.ui.chart.metric;
        draw_bars(ui, metric);
        ui.add_space(6.0);
        egui::Grid::new("benchmark_table")
            .num_columns(4)
            .striped(true)
            .spacing([14.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Model").color(palette.text_muted));
                ui.label(RichText::new("Acc").color(palette.text_muted));
                ui.label(RichText::new("F1").color(palette.text_muted));
                ui.label(RichText::new("ms").color(palette.text_muted));
                ui.end_row();
                for row in &BENCHMARKS {
                    ui.label(row.model);
                    ui.label(format!("{:.0}%", row.accuracy_pct));
                    ui.label(format!("{:.0}%", row.f1_pct));
                    ui.label(format!("{:.0}", row.latency_ms));
                    ui.end_row();
                }
            });
    }
}

/// Paint the bar chart for the selected metric.
///
/// Percent metrics share a fixed 0-100 axis; latency uses its own axis
/// scaled to the data so the bars stay comparable within a metric.
fn draw_bars(ui: &mut egui::Ui, metric: BenchmarkMetric) {
    let palette = style::palette();
    let desired = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.bg_primary);
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(1.0, palette.panel_outline),
        egui::StrokeKind::Inside,
    );

    let axis_max = match metric {
        BenchmarkMetric::Latency => benchmarks::latency_axis_max(&BENCHMARKS),
        _ => 100.0,
    };
    let label_band = 18.0;
    let plot = egui::Rect::from_min_max(
        rect.min + egui::vec2(34.0, 8.0),
        rect.max - egui::vec2(8.0, label_band),
    );

    for step in 0..=AXIS_STEPS {
        let fraction = step as f32 / AXIS_STEPS as f32;
        let y = plot.bottom() - plot.height() * fraction;
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, palette.grid_soft),
        );
        painter.text(
            egui::pos2(rect.left() + 4.0, y),
            Align2::LEFT_CENTER,
            format!("{:.0}", axis_max * fraction),
            FontId::proportional(10.0),
            palette.text_muted,
        );
    }

    let count = BENCHMARKS.len();
    for (index, row) in BENCHMARKS.iter().enumerate() {
        let value = match metric {
            BenchmarkMetric::Accuracy => row.accuracy_pct,
            BenchmarkMetric::F1 => row.f1_pct,
            BenchmarkMetric::Latency => row.latency_ms,
        };
        let fraction = match metric {
            BenchmarkMetric::Latency => benchmarks::latency_fraction(value, axis_max),
            _ => benchmarks::percent_fraction(value),
        };
        let center_x = plot.left() + benchmarks::slot_center(index, count, plot.width());
        let bar_height = plot.height() * fraction;
        let bar = egui::Rect::from_min_max(
            egui::pos2(center_x - BAR_WIDTH / 2.0, plot.bottom() - bar_height),
            egui::pos2(center_x + BAR_WIDTH / 2.0, plot.bottom()),
        );
        let fill = match metric {
            BenchmarkMetric::Latency => palette.warning,
            _ => palette.accent_ice,
        };
        painter.rect_filled(bar, 0.0, fill);
        painter.text(
            egui::pos2(center_x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            format!("{value:.0}"),
            FontId::proportional(10.0),
            palette.text_primary,
        );
        painter.text(
            egui::pos2(center_x, rect.bottom() - label_band / 2.0),
            Align2::CENTER_CENTER,
            row.model,
            FontId::proportional(10.0),
            palette.text_muted,
        );
    }
}
