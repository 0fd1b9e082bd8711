use crate::error::ZoneError;
use crate::preprocessing::{Geometry, Mask};
use image::imageops;

/// Pixel window `(x, y, width, height)` holding the label column
/// Fractional bounds are truncated and clamped to the image
pub fn window(width: u32, height: u32, geometry: &Geometry) -> Result<(u32, u32, u32, u32), ZoneError> {
    let (x_start, x_end) = span(width, geometry.crop_x);
    let (y_start, y_end) = span(height, geometry.crop_y);

    if x_end <= x_start || y_end <= y_start {
        return Err(ZoneError::ImageTooSmall { width, height });
    }

    Ok((x_start, y_start, x_end - x_start, y_end - y_start))
}

fn span(extent: u32, (start, end): (f64, f64)) -> (u32, u32) {
    let at = |fraction: f64| ((f64::from(extent) * fraction.clamp(0.0, 1.0)) as u32).min(extent);
    (at(start), at(end))
}

/// Crop the mask to the label column
pub fn apply(mask: Mask, geometry: &Geometry) -> Result<Mask, ZoneError> {
    let (x, y, width, height) = window(mask.width(), mask.height(), geometry)?;
    let cropped = imageops::crop_imm(mask.as_image(), x, y, width, height).to_image();
    Ok(Mask::threshold(&cropped, 0))
}
