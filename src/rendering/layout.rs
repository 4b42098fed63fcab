//! Grid layout for the dot canvas

use crate::DotStyle;

/// Computed placement grid for a unit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Pixel footprint of one dot including margin
    pub dot_step: u32,
    /// Dots per row before wrapping
    pub dots_per_row: u32,
    /// Number of rows
    pub rows: u32,
    /// Canvas width, never above `DotStyle::max_width`
    pub width: u32,
    /// Canvas height
    pub height: u32,
}

impl GridLayout {
    /// Top-left origin of the dot at sequence index `i`.
    pub fn origin(&self, i: usize, style: &DotStyle) -> (u32, u32) {
        let row = i as u32 / self.dots_per_row;
        let col = i as u32 % self.dots_per_row;
        (
            col * self.dot_step + style.margin / 2,
            row * self.dot_step + style.margin / 2,
        )
    }
}

/// Compute the grid for `unit_count` dots.
///
/// Rows wrap once another dot step would exceed `max_width`; a single row
/// narrower than the cap shrinks the canvas to fit.
pub fn grid_layout(unit_count: usize, style: &DotStyle) -> GridLayout {
    let unit_count = unit_count as u32;
    let dot_step = style.dot_step();
    let dots_per_row = (style.max_width / dot_step).max(1);
    let rows = unit_count.div_ceil(dots_per_row);
    GridLayout {
        dot_step,
        dots_per_row,
        rows,
        width: (unit_count * dot_step).min(style.max_width),
        height: rows * dot_step,
    }
}
