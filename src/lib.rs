//! timedots
//!
//! Renders elapsed/remaining time as a grid of colored dots: one dot per day
//! (or per week), colored by whether that time unit is past, current, or
//! future. The output is a PNG byte buffer, ready to be served over HTTP.
//!
//! # Example
//!
//! ```
//! use timedots::RenderQuery;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let query = RenderQuery {
//!     start_date: Some("20260101".into()),
//!     end_date: Some("20260401".into()),
//!     ..Default::default()
//! };
//! let png = timedots::render(&query)?;
//! assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
//! # Ok(())
//! # }
//! ```

use chrono::{Local, NaiveDate};

pub mod error;
pub use error::{Error, Result};

pub mod timeline;

pub mod rendering;

// HTTP front-end (thin adapter over `render`)
#[cfg(feature = "server")]
pub mod server;

/// An RGBA color, one byte per channel
pub type Rgba = (u8, u8, u8, u8);

/// Query parameters of a render request
///
/// Exactly one of two modes applies: a custom date range (`start_date` and
/// `end_date`, both literal `YYYYMMDD` strings) or a whole-year view
/// (`view_type` of `"day"` or `"week"`). Empty strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct RenderQuery {
    /// Range mode: first day, inclusive (`YYYYMMDD`)
    pub start_date: Option<String>,
    /// Range mode: last day, inclusive (`YYYYMMDD`)
    pub end_date: Option<String>,
    /// Year mode: `"day"` or `"week"`
    pub view_type: Option<String>,
}

/// Fixed style configuration for the dot grid
///
/// One process-wide instance exists (`DOT_STYLE`); nothing mutates it.
#[derive(Debug, Clone, Copy)]
pub struct DotStyle {
    /// Dot diameter in pixels
    pub dot_size: u32,
    /// Spacing around each dot; a dot's footprint is `dot_size + margin`
    pub margin: u32,
    /// Canvas width cap; rows wrap once they would exceed this
    pub max_width: u32,
    /// Fill color for past dots
    pub past: Rgba,
    /// Fill color for today's dot
    pub current: Rgba,
    /// Fill color for future dots
    pub future: Rgba,
    /// Canvas background
    pub background: Rgba,
    /// 1-px ring drawn over past dots
    pub ring: Rgba,
}

impl DotStyle {
    /// Total pixel footprint of one dot including its margin.
    pub fn dot_step(&self) -> u32 {
        self.dot_size + self.margin
    }

    /// Fill color for a time unit status.
    pub fn fill_for(&self, status: timeline::Status) -> Rgba {
        match status {
            timeline::Status::Past => self.past,
            timeline::Status::Current => self.current,
            timeline::Status::Future => self.future,
        }
    }
}

/// The process-wide dot style
pub const DOT_STYLE: DotStyle = DotStyle {
    dot_size: 16,
    margin: 8,
    max_width: 1200,
    past: (250, 250, 210, 255),    // #fafad2
    current: (255, 20, 147, 255),  // #ff1493
    future: (204, 204, 204, 255),  // #cccccc
    background: (245, 245, 245, 255),
    ring: (204, 204, 204, 255),
};

/// Render a progress image for the given query, relative to today's local date.
///
/// This is the whole contract with any transport adapter: query parameters in,
/// PNG bytes out, or a user-input error.
pub fn render(query: &RenderQuery) -> Result<Vec<u8>> {
    render_at(query, Local::now().date_naive())
}

/// Render a progress image with an explicit "today".
///
/// `render` delegates here; tests and golden fixtures inject a fixed date so
/// the output is deterministic.
pub fn render_at(query: &RenderQuery, today: NaiveDate) -> Result<Vec<u8>> {
    let units = timeline::time_units(query, today)?;
    log::debug!("rendering {} time units", units.len());
    let image = rendering::raster::rasterize(&units, &DOT_STYLE)?;
    Ok(image.png_data)
}
