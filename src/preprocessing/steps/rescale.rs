use crate::error::ZoneError;
use crate::preprocessing::{Geometry, Mask};
use image::imageops::{self, FilterType};

/// Upscale the crop with cubic interpolation, then re-binarize
/// Small chart fonts are below the size OCR engines read reliably
pub fn apply(mask: Mask, geometry: &Geometry) -> Result<Mask, ZoneError> {
    let scale = geometry.scale.max(1);
    let (width, height) = (mask.width(), mask.height());

    let (new_width, new_height) = match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(ZoneError::ImageTooSmall { width, height }),
    };

    let scaled = imageops::resize(mask.as_image(), new_width, new_height, FilterType::CatmullRom);
    Ok(Mask::threshold(&scaled, geometry.binarize_threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_multiplies_dimensions() {
        let mask = Mask::from_fn(30, 12, |_, _| false);
        let result = apply(mask, &Geometry::default()).unwrap();
        assert_eq!((result.width(), result.height()), (120, 48));
    }

    #[test]
    fn test_rescale_preserves_solid_block() {
        // 10x10 block in a 30x30 mask; interior survives interpolation and re-binarization
        let mask = Mask::from_fn(30, 30, |x, y| (10..20).contains(&x) && (10..20).contains(&y));
        let result = apply(mask, &Geometry::default()).unwrap();

        assert!(result.is_set(60, 60));
        assert!(!result.is_set(5, 5));
        assert!(!result.is_set(115, 115));
        assert!(result
            .as_image()
            .pixels()
            .all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
