use anyhow::Result;
use image::Rgb;
use std::path::PathBuf;

/// Icon sizes generated by default.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Gradient color at the top row.
pub const TOP_COLOR: Rgb<u8> = Rgb([52, 152, 219]);

/// Gradient color the bottom row approaches.
pub const BOTTOM_COLOR: Rgb<u8> = Rgb([41, 128, 185]);

/// Stroke color of the glyph.
pub const FG_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Smallest side length that still gets a glyph.
pub const MIN_GLYPH_SIZE: u32 = 16;

/// Everything the generator needs to produce a set of icons.
///
/// `Default` reproduces the fixed set: `./icons/icon{16,48,128}.png` in
/// the blue gradient with a white glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub top_color: Rgb<u8>,
    pub bottom_color: Rgb<u8>,
    pub fg_color: Rgb<u8>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            top_color: TOP_COLOR,
            bottom_color: BOTTOM_COLOR,
            fg_color: FG_COLOR,
        }
    }
}

impl IconConfig {
    /// Same colors and sizes as the default, written somewhere else.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Rejects sizes that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.sizes.iter().position(|&size| size == 0) {
            anyhow::bail!("Icon size at position {} must be at least 1 pixel", pos);
        }
        Ok(())
    }

    /// File the icon of `size` is written to.
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(format!("icon{size}.png"))
    }
}

/// Inset of the glyph outline from the canvas edges.
pub fn glyph_margin(size: u32) -> u32 {
    (size as f64 * 0.2) as u32
}

/// Stroke width of the glyph, never thinner than one pixel.
pub fn stroke_width(size: u32) -> u32 {
    ((size as f64 * 0.05) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./icons"));
        assert_eq!(config.sizes, vec![16, 48, 128]);
        assert_eq!(config.top_color, Rgb([52, 152, 219]));
        assert_eq!(config.bottom_color, Rgb([41, 128, 185]));
        assert_eq!(config.fg_color, Rgb([255, 255, 255]));
    }

    #[test]
    fn test_icon_path() {
        let config = IconConfig::with_output_dir("out");
        assert_eq!(config.icon_path(48), PathBuf::from("out").join("icon48.png"));
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = IconConfig::default().with_sizes(vec![16, 0]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("position 1"));
        assert!(IconConfig::default().validate().is_ok());
    }

    #[test]
    fn test_glyph_metrics() {
        assert_eq!(glyph_margin(16), 3);
        assert_eq!(glyph_margin(48), 9);
        assert_eq!(glyph_margin(128), 25);
        assert_eq!(stroke_width(16), 1);
        assert_eq!(stroke_width(48), 2);
        assert_eq!(stroke_width(128), 6);
    }
}
