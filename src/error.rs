//! Error types for progress image rendering

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting a request or rendering the image
#[derive(Error, Debug)]
pub enum Error {
    /// Neither a date range nor a view type was supplied
    #[error("Missing parameters: pass startDate=YYYYMMDD&endDate=YYYYMMDD, or viewType=day|week")]
    MissingParameters,

    /// A date failed to parse as YYYYMMDD, or the end date precedes the start
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// An unsupported viewType value
    #[error("Invalid view type {0:?}: only \"day\" and \"week\" are supported")]
    InvalidViewType(String),

    /// Failed to encode the finished canvas
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl Error {
    /// True for errors caused by the caller's input rather than the renderer.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Error::Render(_))
    }
}
