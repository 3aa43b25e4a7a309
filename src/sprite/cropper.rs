use rayon::prelude::*;

use super::Sprite;
use crate::layout::Rect;

/// Crop every sprite to `region`.
///
/// Sprites whose pixel area is smaller than the region's area are kept
/// as-is. Note this is an area comparison, not a containment check: a
/// sprite can pass it and still not cover the region, in which case the
/// codec clips the extraction to the sprite's bounds. Preserved for
/// compatibility with the original tool.
pub fn crop_sprites(sprites: Vec<Sprite>, region: Rect) -> Vec<Sprite> {
    sprites
        .into_par_iter()
        .map(|sprite| crop_sprite(sprite, region))
        .collect()
}

fn crop_sprite(sprite: Sprite, region: Rect) -> Sprite {
    if region.area() > sprite.area() {
        return sprite;
    }

    let cropped = image::imageops::crop_imm(
        &sprite.image,
        region.left,
        region.top,
        region.width,
        region.height,
    )
    .to_image();

    Sprite {
        image: cropped,
        ..sprite
    }
}
