//! Rendering module

pub mod layout;
pub mod raster;

// Small public API: take a status sequence and produce a PNG.

#[derive(Debug, Clone)]
pub struct ProgressImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}
