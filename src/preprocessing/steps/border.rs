use crate::preprocessing::{Geometry, Mask, PreparedBitmap, BACKGROUND};
use image::{imageops, GrayImage, Luma};

/// Pad the mask with background on every side and flip to dark-on-light
/// Glyphs touching the image edge are recognized poorly
pub fn apply(mask: Mask, geometry: &Geometry) -> PreparedBitmap {
    let pad = geometry.padding;
    let mut canvas = GrayImage::from_pixel(
        mask.width() + 2 * pad,
        mask.height() + 2 * pad,
        Luma([BACKGROUND]),
    );
    imageops::replace(&mut canvas, mask.as_image(), i64::from(pad), i64::from(pad));
    imageops::invert(&mut canvas);
    PreparedBitmap::new(canvas)
}
