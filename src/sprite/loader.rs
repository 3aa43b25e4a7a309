use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;
use log::info;
use rayon::prelude::*;

use super::{Sprite, trim_image};
use crate::error::TatamiError;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Load every eligible image in `input_dir`, optionally trimming
/// transparent borders.
///
/// The directory listing is sorted by file name so that each sprite's
/// index, and therefore its cell in the sheet, is stable across runs.
/// Any decode failure aborts the whole run.
pub fn load_sprites(input_dir: &Path, trim: bool) -> Result<Vec<Sprite>> {
    let paths = collect_image_paths(input_dir)?;

    if paths.is_empty() {
        return Err(TatamiError::NoImages.into());
    }

    info!("Loading {} images...", paths.len());

    let sprites: Result<Vec<_>> = paths
        .par_iter()
        .map(|path| load_single_sprite(path, trim))
        .collect();

    sprites
}

fn collect_image_paths(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.exists() {
        return Err(TatamiError::InputNotFound(input_dir.to_path_buf()).into());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(input_dir).context("Failed to read input directory")? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort();

    Ok(paths)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_single_sprite(path: &Path, trim: bool) -> Result<Sprite> {
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

    let image = if trim { trim_image(&img) } else { img };

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Sprite {
        path: path.to_path_buf(),
        name,
        image,
    })
}
