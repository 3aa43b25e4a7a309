mod bounds;
mod grid;
mod region;

pub use bounds::{Bounds, Extent};
pub use grid::GridLayout;
pub use region::{CropSpec, Rect};
