//! Text post-processing: OCR repair and keyword filtering of label lines

pub mod filter;
pub mod normalize;

pub use filter::is_zone_label;
pub use normalize::normalize_line;
