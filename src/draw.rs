//! Raster primitives for the placeholder icons.
//!
//! Shapes take signed coordinates and are clipped to the canvas, so a
//! stroke hanging over the edge is cut off rather than rejected. Only
//! geometry that is inverted (far corner before near corner) is an error.

use crate::config::{glyph_margin, stroke_width};
use crate::error::DrawError;
use image::{Rgb, Rgba, RgbaImage};

/// Fresh, fully transparent square canvas.
pub fn new_canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b] = color.0;
    Rgba([r, g, b, 255])
}

/// Color of row `y` in a gradient of `size` rows.
///
/// The factor is `y / size`, so the last row stops just short of `bottom`.
/// `(b - a) * y` is exact in integers and divided once before flooring.
pub fn gradient_color(top: Rgb<u8>, bottom: Rgb<u8>, y: u32, size: u32) -> Rgb<u8> {
    let mix = |a: u8, b: u8| -> u8 {
        let delta = (b as i64 - a as i64) * y as i64;
        (a as f64 + delta as f64 / size as f64).floor() as u8
    };

    Rgb([
        mix(top[0], bottom[0]),
        mix(top[1], bottom[1]),
        mix(top[2], bottom[2]),
    ])
}

/// Paints every row opaque with its gradient color.
pub fn fill_vertical_gradient(
    canvas: &mut RgbaImage,
    top: Rgb<u8>,
    bottom: Rgb<u8>,
) -> Result<(), DrawError> {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return Err(DrawError::EmptyCanvas);
    }

    for y in 0..height {
        let pixel = opaque(gradient_color(top, bottom, y, height));
        for x in 0..width {
            canvas.put_pixel(x, y, pixel);
        }
    }
    Ok(())
}

/// Fills the inclusive box `(x0, y0)..=(x1, y1)`, clipped to the canvas.
fn fill_box(canvas: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, pixel: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(width as i64 - 1);
    let y1 = y1.min(height as i64 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put_pixel(x as u32, y as u32, pixel);
        }
    }
}

/// Draws an unfilled rectangle with inclusive corners.
///
/// The outline grows inward: ring `i` is inset by `i` pixels. A rectangle
/// too thin to hold two strokes ends up filled.
pub fn stroke_rectangle(
    canvas: &mut RgbaImage,
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    color: Rgb<u8>,
    width: u32,
) -> Result<(), DrawError> {
    if x1 < x0 || y1 < y0 {
        return Err(DrawError::InvalidGeometry { x0, y0, x1, y1 });
    }

    let pixel = opaque(color);
    for i in 0..width as i64 {
        let (left, top, right, bottom) = (x0 + i, y0 + i, x1 - i, y1 - i);
        if left > right || top > bottom {
            break;
        }
        fill_box(canvas, left, top, right, top, pixel);
        fill_box(canvas, left, bottom, right, bottom, pixel);
        fill_box(canvas, left, top, left, bottom, pixel);
        fill_box(canvas, right, top, right, bottom, pixel);
    }
    Ok(())
}

/// Draws a vertical line `width` pixels wide, centered on column `x`.
///
/// Even widths put the extra column on the right.
pub fn vertical_line(
    canvas: &mut RgbaImage,
    x: i64,
    (y0, y1): (i64, i64),
    color: Rgb<u8>,
    width: u32,
) -> Result<(), DrawError> {
    if y1 < y0 {
        return Err(DrawError::InvalidGeometry { x0: x, y0, x1: x, y1 });
    }
    if width == 0 {
        return Ok(());
    }

    let left = x - (width as i64 - 1) / 2;
    let right = left + width as i64 - 1;
    fill_box(canvas, left, y0, right, y1, opaque(color));
    Ok(())
}

/// Outlined square with a vertical divider: a closed book seen from above.
pub fn draw_glyph(canvas: &mut RgbaImage, color: Rgb<u8>) -> Result<(), DrawError> {
    let size = canvas.width();
    let margin = glyph_margin(size) as i64;
    let far = size as i64 - margin;
    let width = stroke_width(size);

    stroke_rectangle(canvas, (margin, margin), (far, far), color, width)?;
    vertical_line(canvas, size as i64 / 2, (margin, far), color, width)
}
