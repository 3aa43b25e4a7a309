use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{ImageFormat, ImageReader, RgbaImage, imageops, imageops::FilterType};

use crate::error::TatamiError;
use crate::sheet::Sheet;

/// Save the sheet as PNG at `path`.
///
/// The encoded bytes land in a sibling temp file first and are renamed
/// into place, so a reader never observes a half-written sheet.
pub fn save_sheet_image(sheet: &Sheet, path: &Path) -> Result<()> {
    let mut png_data = Cursor::new(Vec::new());
    sheet
        .image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| TatamiError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    write_atomic(path, &png_data.into_inner())?;

    Ok(())
}

/// Parse and normalize a raw scale argument.
///
/// Values above 1.0 are read as tenths ("3" means 0.3), a convenience
/// carried over from the original tool. Non-numeric or non-positive
/// input fails with `InvalidScale`.
pub fn normalize_scale(raw: &str) -> Result<f32, TatamiError> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| TatamiError::InvalidScale {
            value: raw.to_string(),
        })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(TatamiError::InvalidScale {
            value: raw.to_string(),
        });
    }

    Ok(if value > 1.0 { value / 10.0 } else { value })
}

/// Rescale the already-written sheet at `path` in place, returning the
/// effective scale factor applied.
///
/// Runs strictly after the base sheet exists on disk. Any failure here
/// leaves the unscaled sheet untouched: the resized image is written to
/// a temp path and renamed over the original only once fully encoded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rescale_sheet(path: &Path, raw_scale: &str) -> Result<f32> {
    let scale = normalize_scale(raw_scale)?;

    let img = ImageReader::open(path)
        .map_err(|e| TatamiError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| TatamiError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    let (width, height) = img.dimensions();
    let new_width = (f64::from(width) * f64::from(scale)).round().max(1.0) as u32;
    let new_height = (f64::from(height) * f64::from(scale)).round().max(1.0) as u32;

    let resized: RgbaImage = imageops::resize(&img, new_width, new_height, FilterType::Lanczos3);

    let mut png_data = Cursor::new(Vec::new());
    resized
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| TatamiError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    write_atomic(path, &png_data.into_inner())?;

    Ok(scale)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), TatamiError> {
    let tmp = temp_sibling(path);

    fs::write(&tmp, bytes).map_err(|e| TatamiError::OutputWrite {
        path: tmp.clone(),
        source: e,
    })?;

    fs::rename(&tmp, path).map_err(|e| TatamiError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

// Suffix includes the pid so concurrent runs targeting the same output
// path cannot clobber each other's in-flight temp file
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".tmp-{}", std::process::id()));
    path.with_file_name(name)
}
