use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::StatusTone;
use crate::egui_app::view_model::LabelTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_ice: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(11, 12, 16),
        bg_secondary: Color32::from_rgb(24, 26, 32),
        bg_tertiary: Color32::from_rgb(38, 41, 48),
        panel_outline: Color32::from_rgb(44, 48, 56),
        grid_soft: Color32::from_rgb(30, 33, 39),
        text_primary: Color32::from_rgb(190, 196, 204),
        text_muted: Color32::from_rgb(138, 144, 153),
        accent_ice: Color32::from_rgb(150, 205, 255),
        positive: Color32::from_rgb(110, 190, 140),
        negative: Color32::from_rgb(220, 110, 100),
        warning: Color32::from_rgb(210, 160, 80),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.negative;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Badge color for a footer status tone.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.bg_tertiary,
        StatusTone::Busy => palette.accent_ice,
        StatusTone::Info => palette.positive,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.negative,
    }
}

/// Text color for a classifier label tone.
pub fn label_color(tone: LabelTone) -> Color32 {
    let palette = palette();
    match tone {
        LabelTone::Positive => palette.positive,
        LabelTone::Negative => palette.negative,
        LabelTone::Neutral => palette.text_muted,
    }
}
