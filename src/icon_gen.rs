use crate::config::{IconConfig, MIN_GLYPH_SIZE};
use crate::draw::{draw_glyph, fill_vertical_gradient, new_canvas};
use crate::error::DrawError;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Paints one icon onto a fresh canvas.
///
/// A painter may fail part way; whatever it drew before failing is kept.
pub trait IconPainter {
    fn paint(&self, canvas: &mut RgbaImage, config: &IconConfig) -> Result<(), DrawError>;
}

/// Gradient background, plus the book glyph on canvases of at least 16px.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPainter;

impl IconPainter for DefaultPainter {
    fn paint(&self, canvas: &mut RgbaImage, config: &IconConfig) -> Result<(), DrawError> {
        fill_vertical_gradient(canvas, config.top_color, config.bottom_color)?;

        if canvas.width() >= MIN_GLYPH_SIZE {
            draw_glyph(canvas, config.fg_color)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IconStatus {
    Complete,
    /// Drawing failed; the file holds the partially painted canvas.
    Degraded(DrawError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconOutcome {
    pub size: u32,
    pub path: PathBuf,
    pub status: IconStatus,
}

/// One outcome per requested size, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub icons: Vec<IconOutcome>,
}

impl GenerationReport {
    pub fn paths(&self) -> Vec<&Path> {
        self.icons.iter().map(|icon| icon.path.as_path()).collect()
    }

    pub fn degraded(&self) -> impl Iterator<Item = &IconOutcome> {
        self.icons
            .iter()
            .filter(|icon| matches!(icon.status, IconStatus::Degraded(_)))
    }

    pub fn is_clean(&self) -> bool {
        self.degraded().next().is_none()
    }
}

/// Generates every configured icon with the default artwork.
pub fn generate(config: &IconConfig) -> Result<GenerationReport> {
    generate_with(config, &DefaultPainter)
}

/// Generates every configured icon using `painter`.
///
/// Drawing failures are logged and recorded per size. Filesystem and
/// encoding failures abort the run; icons already written stay on disk.
pub fn generate_with<P: IconPainter + ?Sized>(
    config: &IconConfig,
    painter: &P,
) -> Result<GenerationReport> {
    config.validate()?;

    // Ensure the output directory exists
    create_dir_all(&config.output_dir).context("Can't create output directory")?;
    log::debug!("Writing icons to {}", config.output_dir.display());

    let mut report = GenerationReport::default();
    for &size in &config.sizes {
        report.icons.push(generate_one(config, painter, size)?);
    }

    Ok(report)
}

fn generate_one<P: IconPainter + ?Sized>(
    config: &IconConfig,
    painter: &P,
    size: u32,
) -> Result<IconOutcome> {
    let mut canvas = new_canvas(size);

    let status = match painter.paint(&mut canvas, config) {
        Ok(()) => IconStatus::Complete,
        Err(err) => {
            log::warn!("Drawing error for size {}: {}", size, err);
            IconStatus::Degraded(err)
        }
    };

    let path = config.icon_path(size);
    save_png(&canvas, &path)?;
    log::info!("Generated {}", path.display());

    Ok(IconOutcome { size, path, status })
}

fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas, &mut out_file).context("Failed to write PNG")?;
    out_file.flush()?;
    Ok(())
}

// Fixed encoder settings keep the output byte-for-byte reproducible
fn write_png<W: Write>(canvas: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8,
    )?;
    Ok(())
}
