//! Font setup
//!
//! egui's bundled fonts have no CJK glyphs, so the first system CJK font found
//! is appended as a fallback to both families. Phosphor icons are added too.

use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

const CJK_FONT_NAME: &str = "cjk-fallback";

#[cfg(target_os = "windows")]
const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttf",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "C:\\Windows\\Fonts\\simsun.ttc",
];

#[cfg(target_os = "macos")]
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
];

/// Read the first candidate that exists and is non-empty
pub fn find_font<P: AsRef<Path>>(candidates: &[P]) -> Option<(PathBuf, Vec<u8>)> {
    candidates.iter().find_map(|p| {
        let path = p.as_ref();
        match std::fs::read(path) {
            Ok(bytes) if !bytes.is_empty() => Some((path.to_path_buf(), bytes)),
            _ => None,
        }
    })
}

/// Build font definitions with icons and, when given, a CJK fallback
pub fn font_definitions(cjk: Option<Vec<u8>>) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    if let Some(bytes) = cjk {
        fonts.font_data.insert(
            CJK_FONT_NAME.to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(CJK_FONT_NAME.to_owned());
        }
    }

    fonts
}

pub fn install(ctx: &egui::Context) {
    let cjk = match find_font(CJK_FONT_CANDIDATES) {
        Some((path, bytes)) => {
            info!(path = %path.display(), "Using CJK fallback font");
            Some(bytes)
        }
        None => {
            warn!("No CJK font found, Chinese text may not render");
            None
        }
    };
    ctx.set_fonts(font_definitions(cjk));
}
