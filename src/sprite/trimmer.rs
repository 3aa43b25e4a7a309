use image::RgbaImage;

/// Remove fully-transparent borders from an image.
///
/// Returns the smallest sub-image containing every pixel with nonzero
/// alpha. A fully transparent (or empty) input collapses to a 1x1
/// transparent image rather than a zero-sized one.
pub fn trim_image(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return RgbaImage::new(1, 1);
    }

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;

    for y in 0..height {
        for x in 0..width {
            if image.get_pixel(x, y)[3] > 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    // No opaque pixels at all
    if max_x < min_x || max_y < min_y {
        return RgbaImage::new(1, 1);
    }

    let trimmed_width = max_x - min_x + 1;
    let trimmed_height = max_y - min_y + 1;

    image::imageops::crop_imm(image, min_x, min_y, trimmed_width, trimmed_height).to_image()
}
