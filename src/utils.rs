//! Utility functions

use crate::constants::APP_DIR_NAME;
use std::path::PathBuf;

// Shield with a check mark, square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path fill="#34d399" d="M32 4 8 13v17c0 14.5 10.2 26.6 24 30 13.8-3.4 24-15.5 24-30V13Z"/><path fill="none" stroke="#0b1120" stroke-width="6" stroke-linecap="round" stroke-linejoin="round" d="m21 33 8 8 15-17"/></svg>"##;

/// App data directory (settings and logs)
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Rasterize the icon SVG to a square straight-alpha RGBA image
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_rgba_square() {
        let (pixels, w, h) = rasterize_icon(64).unwrap();
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
        // shield body covers the centre
        let centre = ((32 * 64 + 32) * 4) as usize;
        assert!(pixels[centre + 3] > 0);
    }

    #[test]
    fn zero_size_icon_is_rejected() {
        assert!(rasterize_icon(0).is_none());
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with(APP_DIR_NAME));
    }
}
