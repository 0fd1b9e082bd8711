use crate::preprocessing::{Geometry, Mask};
use image::{GrayImage, Luma};
use imageproc::morphology::{grayscale_open, Mask as StructuringElement};

/// Remove horizontal then vertical gridlines from a text mask
/// A line is any run at least as long as the structuring element
pub fn apply(mask: Mask, geometry: &Geometry) -> Mask {
    let mask = remove_runs(mask, geometry.horizontal_kernel);
    remove_runs(mask, geometry.vertical_kernel)
}

/// Morphological opening with a `width` x `height` rectangle, subtracted from the mask
fn remove_runs(mask: Mask, (width, height): (u32, u32)) -> Mask {
    let element = rectangle(width, height);
    let lines = grayscale_open(mask.as_image(), &element);
    subtract(&mask, &lines)
}

/// Rectangular structuring element anchored at its center
fn rectangle(width: u32, height: u32) -> StructuringElement {
    let shape = GrayImage::from_pixel(width.max(1), height.max(1), Luma([255u8]));
    let center_x = (width / 2).min(u32::from(u8::MAX)) as u8;
    let center_y = (height / 2).min(u32::from(u8::MAX)) as u8;
    StructuringElement::from_image(&shape, center_x, center_y)
}

/// Saturating `mask - lines`, still two-level
fn subtract(mask: &Mask, lines: &GrayImage) -> Mask {
    Mask::from_fn(mask.width(), mask.height(), |x, y| {
        mask.as_image().get_pixel(x, y).0[0].saturating_sub(lines.get_pixel(x, y).0[0]) > 0
    })
}
