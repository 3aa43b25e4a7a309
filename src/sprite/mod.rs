mod cropper;
mod loader;
mod sprite;
mod trimmer;

pub use cropper::crop_sprites;
pub use loader::load_sprites;
pub use sprite::Sprite;
pub use trimmer::trim_image;
