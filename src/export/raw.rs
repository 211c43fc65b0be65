//! RAW format export for game engine compatibility.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{quantize_u16, ExportError};

/// RAW export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum RawFormat {
    /// 16-bit unsigned integer, little-endian (Unity default).
    #[default]
    R16LittleEndian,
    /// 16-bit unsigned integer, big-endian.
    R16BigEndian,
    /// 32-bit float, little-endian (high precision).
    R32Float,
}

/// Writes `data` as headerless RAW samples.
///
/// `min_value` and `max_value` normalize the R16 formats and are ignored for
/// [`RawFormat::R32Float`], which stores values unchanged.
pub fn export_raw(
    data: &[f32],
    path: &Path,
    format: RawFormat,
    min_value: f32,
    max_value: f32,
) -> Result<(), ExportError> {
    if format != RawFormat::R32Float && min_value >= max_value {
        return Err(ExportError::InvalidRange(min_value, max_value));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let range = max_value - min_value;

    match format {
        RawFormat::R16LittleEndian => {
            for &value in data {
                writer.write_all(&quantize_u16(value, min_value, range).to_le_bytes())?;
            }
        }
        RawFormat::R16BigEndian => {
            for &value in data {
                writer.write_all(&quantize_u16(value, min_value, range).to_be_bytes())?;
            }
        }
        RawFormat::R32Float => {
            for &value in data {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Returns the expected file size for a RAW export.
pub fn expected_file_size(samples: usize, format: RawFormat) -> u64 {
    let samples = samples as u64;
    match format {
        RawFormat::R16LittleEndian | RawFormat::R16BigEndian => samples * 2,
        RawFormat::R32Float => samples * 4,
    }
}
