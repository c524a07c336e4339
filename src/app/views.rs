//! View rendering (header, load row, tabs, footer)
//!
//! Views never call the demo functions directly: buttons fire events and
//! fields are rendered from `App::fields`.

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::{Event, Field};
use crate::ui::components::{field_caption, readonly_field, tab_bar};
use eframe::egui;

const TABS: [&str; 1] = [TAB_CLASSIFY];

impl App {
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            self.render_header(ui);
            ui.add_space(theme::SPACING_XL);
            self.render_load_row(ui);
            ui.add_space(theme::SPACING_XL);

            tab_bar(ui, &TABS, &mut self.active_tab);
            ui.add_space(theme::SPACING_SM);
            theme::card_frame().show(ui, |ui| self.render_classify_tab(ui));

            ui.add_space(theme::SPACING_XL);
            self.render_footer(ui);
        });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(PAGE_HEADING)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(PAGE_INTRO)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_SECONDARY),
        );
    }

    fn render_load_row(&mut self, ui: &mut egui::Ui) {
        let mut clicked = false;
        ui.horizontal(|ui| {
            let label = format!("{} {}", egui_phosphor::regular::CPU, LOAD_BUTTON);
            clicked = ui
                .add_sized([180.0, theme::BUTTON_HEIGHT], theme::button_accent(label))
                .clicked();
            ui.vertical(|ui| {
                readonly_field(ui, STATUS_LABEL, self.fields.get(Field::Status), 1);
            });
        });
        if clicked {
            self.fire(Event::LoadModel);
        }
    }

    fn render_classify_tab(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(CLASSIFY_HINT)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(theme::SPACING_MD);

        field_caption(ui, INPUT_LABEL);
        ui.add(
            egui::TextEdit::multiline(self.fields.buffer_mut(Field::Input))
                .hint_text(INPUT_PLACEHOLDER)
                .desired_rows(INPUT_ROWS)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme::SPACING_MD);

        ui.columns(2, |cols| {
            readonly_field(&mut cols[0], LABEL_OUTPUT, self.fields.get(Field::Label), 1);
            readonly_field(
                &mut cols[1],
                DETAIL_OUTPUT,
                self.fields.get(Field::Detail),
                DETAIL_ROWS,
            );
        });
        ui.add_space(theme::SPACING_MD);

        let label = format!("{} {}", egui_phosphor::regular::PLAY, CLASSIFY_BUTTON);
        if ui
            .add_sized([ui.available_width(), theme::BUTTON_HEIGHT], theme::button(label))
            .clicked()
        {
            self.fire(Event::Classify);
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.label(
            egui::RichText::new(FOOTER_NOTE)
                .italics()
                .size(theme::FONT_CAPTION)
                .color(theme::TEXT_DIM),
        );
    }
}
