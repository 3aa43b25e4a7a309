use crate::sprite::Sprite;

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Smallest and biggest dimensions observed across a sprite set.
///
/// Each axis is tracked independently, so neither extent needs to match
/// any single sprite: a set of 10x50 and 50x10 images measures
/// smallest 10x10 and biggest 50x50.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub smallest: Extent,
    pub biggest: Extent,
}

impl Bounds {
    pub fn measure(sprites: &[Sprite]) -> Self {
        let mut smallest = Extent::new(u32::MAX, u32::MAX);
        let mut biggest = Extent::new(0, 0);

        for sprite in sprites {
            smallest.width = smallest.width.min(sprite.width());
            smallest.height = smallest.height.min(sprite.height());
            biggest.width = biggest.width.max(sprite.width());
            biggest.height = biggest.height.max(sprite.height());
        }

        Self { smallest, biggest }
    }
}
