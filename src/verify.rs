//! Reads a generated icon back and checks it against its configuration.

use crate::config::{glyph_margin, IconConfig};
use anyhow::{Context, Result};
use image::Rgba;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCheck {
    pub width: u32,
    pub height: u32,
    /// Pixel at the top left corner.
    pub top_pixel: Rgba<u8>,
    /// Row 0 matches the gradient top color at full opacity.
    pub top_row_matches: bool,
    /// The foreground color sits at `(margin, margin)`.
    pub glyph_present: bool,
}

impl IconCheck {
    pub fn is_square_of(&self, size: u32) -> bool {
        self.width == size && self.height == size
    }
}

pub fn check_icon(path: &Path, config: &IconConfig) -> Result<IconCheck> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load icon {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("Icon {} has no pixels", path.display());
    }

    let [r, g, b] = config.top_color.0;
    let expected_top = Rgba([r, g, b, 255]);
    let top_row_matches = (0..width).all(|x| *img.get_pixel(x, 0) == expected_top);

    let [r, g, b] = config.fg_color.0;
    let margin = glyph_margin(width.min(height));
    let glyph_present = *img.get_pixel(margin, margin) == Rgba([r, g, b, 255]);

    Ok(IconCheck {
        width,
        height,
        top_pixel: *img.get_pixel(0, 0),
        top_row_matches,
        glyph_present,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_gen::generate;
    use tempfile::TempDir;

    #[test]
    fn test_check_generated_icons() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = IconConfig::with_output_dir(temp_dir.path()).with_sizes(vec![8, 128]);
        generate(&config).unwrap();

        let large = check_icon(&config.icon_path(128), &config).unwrap();
        assert!(large.is_square_of(128));
        assert!(large.top_row_matches);
        assert!(large.glyph_present);
        assert_eq!(large.top_pixel, Rgba([52, 152, 219, 255]));

        let small = check_icon(&config.icon_path(8), &config).unwrap();
        assert!(small.is_square_of(8));
        assert!(small.top_row_matches);
        assert!(!small.glyph_present);
    }

    #[test]
    fn test_check_missing_icon() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let err = check_icon(&temp_dir.path().join("nope.png"), &IconConfig::default());
        assert!(err.is_err());
    }
}
