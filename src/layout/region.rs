use super::Bounds;
use crate::error::TatamiError;
use crate::sprite::Sprite;

/// A crop region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A parsed crop directive, not yet bound to a sprite set.
///
/// Syntax errors are caught by [`CropSpec::parse`] at startup; errors
/// that depend on the sprite set (an out-of-range index) surface in
/// [`CropSpec::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropSpec {
    /// Crop to the smallest observed width/height
    Smallest,
    /// Crop to the biggest observed width/height
    Biggest,
    /// Crop to an explicit rectangle
    Explicit(Rect),
    /// Crop to the full size of the sprite at this index
    Index(usize),
}

impl CropSpec {
    /// Parse a crop directive. Named policies are case-insensitive and
    /// tolerate surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, TatamiError> {
        let spec = raw.trim();

        match spec.to_ascii_lowercase().as_str() {
            "smallest" => return Ok(CropSpec::Smallest),
            "biggest" => return Ok(CropSpec::Biggest),
            _ => {}
        }

        if spec.contains(',') {
            return parse_quadruple(raw, spec);
        }

        if let Ok(index) = spec.parse::<usize>() {
            return Ok(CropSpec::Index(index));
        }

        Err(TatamiError::InvalidCropSpec {
            spec: raw.to_string(),
            reason: "expected 'smallest', 'biggest', 'left,top,width,height', or an image index"
                .to_string(),
        })
    }

    /// Resolve this directive into a concrete rectangle for the given
    /// sprite set.
    pub fn resolve(&self, sprites: &[Sprite], bounds: &Bounds) -> Result<Rect, TatamiError> {
        match *self {
            CropSpec::Smallest => Ok(Rect::new(
                0,
                0,
                bounds.smallest.width,
                bounds.smallest.height,
            )),
            CropSpec::Biggest => Ok(Rect::new(0, 0, bounds.biggest.width, bounds.biggest.height)),
            CropSpec::Explicit(rect) => Ok(rect),
            CropSpec::Index(index) => {
                let sprite = sprites.get(index).ok_or_else(|| TatamiError::InvalidCropSpec {
                    spec: index.to_string(),
                    reason: format!("image index out of range (have {} images)", sprites.len()),
                })?;
                Ok(Rect::new(0, 0, sprite.width(), sprite.height()))
            }
        }
    }
}

fn parse_quadruple(raw: &str, spec: &str) -> Result<CropSpec, TatamiError> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(TatamiError::InvalidCropSpec {
            spec: raw.to_string(),
            reason: format!("expected 4 comma-separated integers, got {}", parts.len()),
        });
    }

    let mut values = [0u32; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| TatamiError::InvalidCropSpec {
            spec: raw.to_string(),
            reason: format!("'{part}' is not a valid non-negative integer"),
        })?;
    }

    let [left, top, width, height] = values;
    if width == 0 || height == 0 {
        return Err(TatamiError::InvalidCropSpec {
            spec: raw.to_string(),
            reason: "width and height must be greater than zero".to_string(),
        });
    }

    Ok(CropSpec::Explicit(Rect::new(left, top, width, height)))
}
