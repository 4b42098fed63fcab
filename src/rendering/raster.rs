//! Dot rasterizer
//!
//! Per-pixel circle rendering onto an RGBA canvas, then PNG encoding. Each dot
//! is tested against the implicit circle `(dx - r)^2 + (dy - r)^2 <= r^2` over
//! its bounding square; past dots get a 1-px ring on top of the fill.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba};

use crate::error::{Error, Result};
use crate::rendering::layout::grid_layout;
use crate::rendering::ProgressImage;
use crate::timeline::Status;
use crate::DotStyle;

type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Rasterize a status sequence into a PNG.
pub fn rasterize(units: &[Status], style: &DotStyle) -> Result<ProgressImage> {
    let layout = grid_layout(units.len(), style);
    let (r, g, b, a) = style.background;
    let mut canvas = Canvas::from_pixel(layout.width, layout.height, Rgba([r, g, b, a]));

    for (i, status) in units.iter().enumerate() {
        let (x, y) = layout.origin(i, style);
        fill_dot(&mut canvas, x, y, style.dot_size, style.fill_for(*status));
        if *status == Status::Past {
            ring_dot(&mut canvas, x, y, style.dot_size, style.ring);
        }
    }

    let mut png_data = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)
        .map_err(|e| Error::Render(e.to_string()))?;

    Ok(ProgressImage {
        width: layout.width,
        height: layout.height,
        png_data,
    })
}

fn fill_dot(canvas: &mut Canvas, x: u32, y: u32, size: u32, color: crate::Rgba) {
    let r = (size / 2) as i32;
    for dy in 0..size {
        for dx in 0..size {
            let cx = dx as i32 - r;
            let cy = dy as i32 - r;
            if cx * cx + cy * cy <= r * r {
                put_pixel(canvas, x + dx, y + dy, color);
            }
        }
    }
}

fn ring_dot(canvas: &mut Canvas, x: u32, y: u32, size: u32, color: crate::Rgba) {
    let r = (size / 2) as i32;
    for dy in 0..size {
        for dx in 0..size {
            let cx = dx as i32 - r;
            let cy = dy as i32 - r;
            let dist = cx * cx + cy * cy;
            if dist >= (r - 1) * (r - 1) && dist <= r * r {
                put_pixel(canvas, x + dx, y + dy, color);
            }
        }
    }
}

// Writes off the canvas edge are dropped.
fn put_pixel(canvas: &mut Canvas, x: u32, y: u32, (r, g, b, a): crate::Rgba) {
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, Rgba([r, g, b, a]));
    }
}
