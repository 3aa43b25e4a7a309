pub mod cli;
pub mod error;
pub mod layout;
pub mod output;
pub mod sheet;
pub mod sprite;

pub use cli::{CliArgs, Options};
pub use error::TatamiError;
pub use layout::{Bounds, CropSpec, Extent, GridLayout, Rect};
pub use sheet::{PlacedSprite, Sheet, SheetBuilder};
pub use sprite::{Sprite, load_sprites};
