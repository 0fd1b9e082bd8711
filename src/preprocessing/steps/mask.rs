use crate::preprocessing::{Geometry, Mask};
use image::{Rgb, RgbImage};

/// Mark near-white, near-gray pixels as text candidates
/// Colored candle bodies and tinted gridlines fail the saturation test
pub fn apply(image: &RgbImage, geometry: &Geometry) -> Mask {
    Mask::from_fn(image.width(), image.height(), |x, y| {
        let (value, saturation) = value_saturation(image.get_pixel(x, y));
        value > geometry.brightness_min && saturation < geometry.saturation_max
    })
}

/// HSV value and saturation on the 8-bit scale
fn value_saturation(pixel: &Rgb<u8>) -> (u8, u8) {
    let [r, g, b] = pixel.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == 0 {
        return (0, 0);
    }

    let saturation = (255.0 * f32::from(max - min) / f32::from(max)).round() as u8;
    (max, saturation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_white_and_light_gray() {
        let mut img = RgbImage::new(4, 1);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([230, 228, 232]));
        img.put_pixel(2, 0, Rgb([200, 200, 200])); // too dark
        img.put_pixel(3, 0, Rgb([20, 20, 30])); // background

        let mask = apply(&img, &Geometry::default());

        assert!(mask.is_set(0, 0));
        assert!(mask.is_set(1, 0));
        assert!(!mask.is_set(2, 0));
        assert!(!mask.is_set(3, 0));
    }

    #[test]
    fn test_mask_rejects_bright_colors() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([38, 166, 154])); // green candle
        img.put_pixel(1, 0, Rgb([239, 83, 80])); // red candle
        img.put_pixel(2, 0, Rgb([255, 235, 200])); // warm tint, saturation ~55

        let mask = apply(&img, &Geometry::default());
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_value_saturation_matches_hsv_scale() {
        assert_eq!(value_saturation(&Rgb([0, 0, 0])), (0, 0));
        assert_eq!(value_saturation(&Rgb([255, 0, 0])), (255, 255));
        assert_eq!(value_saturation(&Rgb([240, 240, 240])), (240, 0));
    }
}
