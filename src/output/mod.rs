mod format;

pub use format::{normalize_scale, rescale_sheet, save_sheet_image};
