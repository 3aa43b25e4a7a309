use image::RgbaImage;
use std::path::PathBuf;

/// A decoded input image paired with its identity.
///
/// Dimensions are always read from the current pixel buffer, so every
/// transformation (trim, crop) that replaces `image` re-derives them
/// for free.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Original file path
    pub path: PathBuf,
    /// File name, used in error reporting
    pub name: String,
    /// Current pixel data
    pub image: RgbaImage,
}

impl Sprite {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel area, used by the crop-skip heuristic
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}
