//! PNG export for sampled grids and scalar fields.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma, Rgb, RgbImage};

use super::{quantize_u16, ExportError};
use crate::sampling::SampleGrid;

/// Writes the grid's point colours as an 8-bit RGB PNG.
///
/// Row `y` of the image holds points `y * resolution .. (y + 1) * resolution`.
/// Channels outside [0, 1] are clamped.
pub fn export_color_png(grid: &SampleGrid, path: &Path) -> Result<(), ExportError> {
    let resolution = grid.resolution;
    let expected = (resolution as usize) * (resolution as usize);
    if grid.points.len() != expected {
        return Err(ExportError::LengthMismatch {
            expected,
            actual: grid.points.len(),
        });
    }

    let img: RgbImage = ImageBuffer::from_fn(resolution, resolution, |x, y| {
        let color = grid.points[(y * resolution + x) as usize].color;
        Rgb(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
    });

    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Export an arbitrary scalar field (f32) as a 16-bit grayscale PNG.
///
/// `data` must be length `resolution*resolution` in row-major order.
pub fn export_scalar_png16(
    resolution: u32,
    data: &[f32],
    path: &Path,
    min_value: f32,
    max_value: f32,
) -> Result<(), ExportError> {
    if min_value >= max_value {
        return Err(ExportError::InvalidRange(min_value, max_value));
    }
    let expected = (resolution as usize) * (resolution as usize);
    if data.len() != expected {
        return Err(ExportError::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let range = max_value - min_value;
    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_fn(resolution, resolution, |x, y| {
        Luma([quantize_u16(data[(y * resolution + x) as usize], min_value, range)])
    });

    let writer = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    let byte_slice: &[u8] = bytemuck::cast_slice(img.as_raw());
    encoder.write_image(byte_slice, resolution, resolution, image::ExtendedColorType::L16)?;

    Ok(())
}
