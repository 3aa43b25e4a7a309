use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TatamiError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No valid images found in input")]
    NoImages,

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error(
        "Image '{path}' is {width}x{height} but {expected_width}x{expected_height} was expected \
         (all images must share one size unless trimming or cropping is enabled)"
    )]
    SizeMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("Invalid crop spec '{spec}': {reason}")]
    InvalidCropSpec { spec: String, reason: String },

    #[error("Invalid scale '{value}': expected a positive number")]
    InvalidScale { value: String },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
