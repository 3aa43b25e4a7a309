use anyhow::Result;
use image::{RgbaImage, imageops};
use log::{debug, info};

use super::{PlacedSprite, Sheet};
use crate::error::TatamiError;
use crate::layout::{Bounds, CropSpec, GridLayout};
use crate::sprite::{Sprite, crop_sprites};

/// Assembles a sprite set into a single sheet.
pub struct SheetBuilder {
    crop: Option<CropSpec>,
    require_uniform: bool,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self {
            crop: None,
            require_uniform: false,
        }
    }

    pub fn crop(mut self, crop: Option<CropSpec>) -> Self {
        self.crop = crop;
        self
    }

    /// Require every sprite to share one size. Enabled when neither
    /// trimming nor cropping runs, since the layout then has no way to
    /// reconcile mixed sizes.
    pub fn require_uniform(mut self, require_uniform: bool) -> Self {
        self.require_uniform = require_uniform;
        self
    }

    /// Build the sheet from the given sprites.
    pub fn build(&self, sprites: Vec<Sprite>) -> Result<Sheet> {
        if sprites.is_empty() {
            return Err(TatamiError::NoImages.into());
        }

        if self.require_uniform {
            check_uniform_sizes(&sprites)?;
        }

        let bounds = Bounds::measure(&sprites);
        debug!(
            "Measured bounds: smallest {}x{}, biggest {}x{}",
            bounds.smallest.width, bounds.smallest.height, bounds.biggest.width,
            bounds.biggest.height
        );

        let sprites = if let Some(spec) = &self.crop {
            let region = spec.resolve(&sprites, &bounds)?;
            info!(
                "Cropping to {}x{} at ({}, {})",
                region.width, region.height, region.left, region.top
            );
            crop_sprites(sprites, region)
        } else {
            sprites
        };

        // Cropping changes dimensions, so the cell size comes from a
        // fresh measurement of the working set
        let bounds = Bounds::measure(&sprites);
        let layout = GridLayout::new(sprites.len(), bounds.biggest);
        let canvas = layout.canvas();

        info!(
            "Laying out {} sprites on a {}x{} grid ({}x{} px)",
            sprites.len(),
            layout.dim,
            layout.dim,
            canvas.width,
            canvas.height
        );

        let mut image = RgbaImage::new(canvas.width, canvas.height);
        let mut placed = Vec::with_capacity(sprites.len());

        for (index, sprite) in sprites.iter().enumerate() {
            let (x, y) = layout.place(index, sprite.width(), sprite.height());
            imageops::overlay(&mut image, &sprite.image, x, y);
            placed.push(PlacedSprite {
                name: sprite.name.clone(),
                x,
                y,
                width: sprite.width(),
                height: sprite.height(),
            });
        }

        Ok(Sheet {
            width: canvas.width,
            height: canvas.height,
            image,
            sprites: placed,
        })
    }
}

impl Default for SheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_uniform_sizes(sprites: &[Sprite]) -> Result<()> {
    let Some(first) = sprites.first() else {
        return Ok(());
    };
    let (expected_width, expected_height) = (first.width(), first.height());

    for sprite in sprites.iter().skip(1) {
        if sprite.width() != expected_width || sprite.height() != expected_height {
            return Err(TatamiError::SizeMismatch {
                path: sprite.path.clone(),
                width: sprite.width(),
                height: sprite.height(),
                expected_width,
                expected_height,
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;

    fn sprite(name: &str, width: u32, height: u32) -> Sprite {
        Sprite {
            path: PathBuf::from(name),
            name: name.to_string(),
            image: RgbaImage::new(width, height),
        }
    }

    fn uniform_set(count: usize, width: u32, height: u32) -> Vec<Sprite> {
        (0..count)
            .map(|i| sprite(&format!("frame_{i}.png"), width, height))
            .collect()
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let result = SheetBuilder::new().build(Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_uniform_grid_placement() {
        let sheet = SheetBuilder::new().build(uniform_set(8, 100, 100)).unwrap();

        // floor(sqrt(9)) = 3
        assert_eq!(sheet.width, 300);
        assert_eq!(sheet.height, 300);
        assert_eq!(sheet.sprites.len(), 8);

        for (i, placed) in sheet.sprites.iter().enumerate() {
            let col = (i % 3) as i64;
            let row = (i / 3) as i64;
            assert_eq!(placed.x, col * 100);
            assert_eq!(placed.y, row * 100);
        }
    }

    #[test]
    fn test_five_uniform_sprites_match_original_formula() {
        let sheet = SheetBuilder::new().build(uniform_set(5, 100, 100)).unwrap();

        // floor(sqrt(6)) = 2, so the canvas only holds four cells and
        // the fifth sprite is placed one row past the bottom edge
        assert_eq!(sheet.width, 200);
        assert_eq!(sheet.height, 200);
        assert_eq!(sheet.sprites[4].x, 0);
        assert_eq!(sheet.sprites[4].y, 200);
    }

    #[test]
    fn test_mixed_sizes_are_centered() {
        let sprites = vec![
            sprite("big.png", 100, 100),
            sprite("small.png", 40, 20),
            sprite("tall.png", 20, 100),
        ];

        let sheet = SheetBuilder::new().build(sprites).unwrap();

        // biggest = 100x100, dim = floor(sqrt(4)) = 2
        assert_eq!(sheet.width, 200);
        assert_eq!(sheet.height, 200);
        assert_eq!((sheet.sprites[0].x, sheet.sprites[0].y), (0, 0));
        assert_eq!((sheet.sprites[1].x, sheet.sprites[1].y), (130, 40));
        assert_eq!((sheet.sprites[2].x, sheet.sprites[2].y), (40, 100));
    }

    #[test]
    fn test_size_mismatch_in_uniform_mode() {
        let sprites = vec![
            sprite("a.png", 100, 100),
            sprite("b.png", 100, 100),
            sprite("c.png", 90, 100),
        ];

        let result = SheetBuilder::new().require_uniform(true).build(sprites);

        let err = result.unwrap_err();
        match err.downcast_ref::<TatamiError>() {
            Some(TatamiError::SizeMismatch { path, width, .. }) => {
                assert_eq!(path, &PathBuf::from("c.png"));
                assert_eq!(*width, 90);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_crop_changes_cell_size() {
        let sprites = vec![
            sprite("a.png", 100, 100),
            sprite("b.png", 100, 100),
            sprite("c.png", 100, 100),
        ];

        let sheet = SheetBuilder::new()
            .crop(Some(CropSpec::Explicit(Rect::new(0, 0, 40, 40))))
            .build(sprites)
            .unwrap();

        // All sprites crop to 40x40; dim = floor(sqrt(4)) = 2
        assert_eq!(sheet.width, 80);
        assert_eq!(sheet.height, 80);
        assert_eq!(sheet.sprites[0].width, 40);
    }

    #[test]
    fn test_out_of_range_crop_index_fails() {
        let result = SheetBuilder::new()
            .crop(Some(CropSpec::Index(5)))
            .build(uniform_set(3, 10, 10));

        assert!(result.is_err());
    }

    #[test]
    fn test_sprite_pixels_land_on_canvas() {
        let mut img = RgbaImage::new(10, 10);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([0, 0, 255, 255]);
        }
        let sprites = vec![
            Sprite {
                path: PathBuf::from("a.png"),
                name: "a.png".to_string(),
                image: img,
            },
            sprite("b.png", 10, 10),
            sprite("c.png", 10, 10),
        ];

        let sheet = SheetBuilder::new().build(sprites).unwrap();

        assert_eq!(*sheet.image.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(*sheet.image.get_pixel(9, 9), Rgba([0, 0, 255, 255]));
        // Cell (0, 1) holds a fully transparent sprite
        assert_eq!(*sheet.image.get_pixel(10, 0), Rgba([0, 0, 0, 0]));
    }
}
