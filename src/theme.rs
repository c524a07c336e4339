//! Centralized theme constants for the demo shell
//! Colors, sizes and frame/button helpers used by the views

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x11, 0x20); // slate-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x11, 0x18, 0x27); // gray-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x12, 0x2a, 0x24);

// =============================================================================
// COLORS - Accent (Emerald)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(0x02, 0x2c, 0x22);

// =============================================================================
// COLORS - Borders / Buttons
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800

pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700
pub const BTN_DEFAULT_HOVER: Color32 = Color32::from_rgb(0x47, 0x55, 0x69); // slate-600
pub const BTN_DEFAULT_ACTIVE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800

// =============================================================================
// TYPOGRAPHY / DIMENSIONS
// =============================================================================
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 12.0;
pub const FONT_CAPTION: f32 = 11.0;

pub const BUTTON_HEIGHT: f32 = 32.0;
pub const TAB_HEIGHT: f32 = 28.0;
pub const TAB_MIN_WIDTH: f32 = 96.0;

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32,
                  weak_bg_fill: Color32,
                  bg_stroke: egui::Stroke,
                  fg: Color32| egui::style::WidgetVisuals {
        bg_fill,
        weak_bg_fill,
        bg_stroke,
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };
    let outline = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x1f, 0x4e, 0x42),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, BG_SURFACE, outline, TEXT_SECONDARY),
            inactive: widget(BTN_DEFAULT, BTN_DEFAULT, outline, TEXT_SECONDARY),
            hovered: widget(BG_HOVER, BTN_DEFAULT_HOVER, egui::Stroke::NONE, TEXT_PRIMARY),
            active: widget(BTN_DEFAULT_ACTIVE, BTN_DEFAULT_ACTIVE, egui::Stroke::NONE, TEXT_PRIMARY),
            open: widget(BG_SURFACE, BG_ELEVATED, outline, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::symmetric(24, 20))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).size(FONT_BODY).color(TEXT_PRIMARY))
        .fill(BTN_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).size(FONT_BODY).color(TEXT_ON_ACCENT))
        .fill(ACCENT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Hover/press fill for custom-painted buttons, with a slight press inset
pub fn button_visual(
    response: &egui::Response,
    fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (BTN_DEFAULT_ACTIVE, rect.shrink(1.0))
    } else if response.hovered() {
        (BTN_DEFAULT_HOVER, rect)
    } else {
        (fill, rect)
    }
}
