mod builder;

pub use builder::SheetBuilder;

use image::RgbaImage;

/// A finished sprite sheet.
#[derive(Debug)]
pub struct Sheet {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Rendered canvas (transparent background)
    pub image: RgbaImage,
    /// Where each sprite landed, in input order
    pub sprites: Vec<PlacedSprite>,
}

/// Final position of one sprite on the sheet.
#[derive(Debug, Clone)]
pub struct PlacedSprite {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}
