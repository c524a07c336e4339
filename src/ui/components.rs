//! Reusable UI components
//!
//! Standalone widgets shared by the views.

use crate::theme;
use eframe::egui;

/// Small caption shown above a field
pub fn field_caption(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Read-only text box; the text stays selectable for copying
pub fn readonly_field(ui: &mut egui::Ui, caption: &str, value: &str, rows: usize) {
    field_caption(ui, caption);
    let mut text = value;
    let edit = if rows > 1 {
        egui::TextEdit::multiline(&mut text).desired_rows(rows)
    } else {
        egui::TextEdit::singleline(&mut text)
    };
    ui.add(edit.desired_width(ui.available_width()));
}

/// Row of tab buttons; a click selects that tab
pub fn tab_bar(ui: &mut egui::Ui, tabs: &[&str], active: &mut usize) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        for (idx, title) in tabs.iter().enumerate() {
            let selected = *active == idx;
            let galley = ui.painter().layout_no_wrap(
                title.to_string(),
                egui::FontId::proportional(theme::FONT_BODY),
                theme::TEXT_PRIMARY,
            );
            let width = (galley.size().x + 2.0 * theme::SPACING_LG).max(theme::TAB_MIN_WIDTH);
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(width, theme::TAB_HEIGHT), egui::Sense::click());

            if ui.is_rect_visible(rect) {
                let base = if selected { theme::BG_SURFACE } else { theme::BG_BASE };
                let (fill, draw_rect) = theme::button_visual(&response, base, rect);
                ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                if selected {
                    let underline = egui::Rect::from_min_max(
                        egui::pos2(draw_rect.left(), draw_rect.bottom() - 2.0),
                        draw_rect.right_bottom(),
                    );
                    ui.painter().rect_filled(underline, 0.0, theme::ACCENT);
                }
                let color = if selected { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED };
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    *title,
                    egui::FontId::proportional(theme::FONT_BODY),
                    color,
                );
            }

            if response.clicked() {
                *active = idx;
            }
        }
    });
}
