//! Export module for saving sampled grids to image and RAW files.
//!
//! Colour grids go to 8-bit RGB PNG; scalar fields go to 16-bit grayscale
//! PNG or RAW heightmap formats.

mod png;
mod raw;

use thiserror::Error;

pub use png::{export_color_png, export_scalar_png16};
pub use raw::{expected_file_size, export_raw, RawFormat};

/// Errors that can occur during export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid value range: min ({0}) >= max ({1})")]
    InvalidRange(f32, f32),
    #[error("Data length {actual} does not match expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Maps `value` from `[min, max]` onto the full `u16` range.
fn quantize_u16(value: f32, min: f32, range: f32) -> u16 {
    (((value - min) / range).clamp(0.0, 1.0) * 65535.0) as u16
}
