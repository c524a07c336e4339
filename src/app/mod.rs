//! App module - contains the main application state and logic

mod views;

use crate::binding::{Binder, Fields};
use crate::constants::STATUS_INITIAL;
use crate::demo;
use crate::fonts;
use crate::settings::Settings;
use crate::theme;
use crate::types::{Event, Field};
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, error};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) fields: Fields<Field>,
    pub(crate) bindings: Binder<Event, Field>,
    pub(crate) active_tab: usize,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

/// Wire both demo actions to their display fields
pub fn wire_bindings() -> Binder<Event, Field> {
    let mut bindings = Binder::new();
    bindings.bind(Event::LoadModel, &[], &[Field::Status], |_: &[&str]| {
        demo::load_model()
    });
    bindings.bind(
        Event::Classify,
        &[Field::Input],
        &[Field::Label, Field::Detail],
        |args: &[&str]| demo::classify(args.first().copied().unwrap_or("")),
    );
    bindings
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        fonts::install(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self::with_state(data_dir);
        app.window_pos = settings.window_pos();
        app.window_size = settings.window_size();
        app
    }

    /// Fresh shell state without any egui context
    pub fn with_state(data_dir: PathBuf) -> Self {
        Self {
            fields: Fields::new().with_initial(Field::Status, STATUS_INITIAL),
            bindings: wire_bindings(),
            active_tab: 0,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Fire an event; on a binding failure the display is left as it was
    pub fn fire(&mut self, event: Event) {
        debug!(event = ?event, "Event fired");
        if let Err(e) = self.bindings.dispatch(event, &mut self.fields) {
            error!(event = ?event, error = %e, "Event handling failed");
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
