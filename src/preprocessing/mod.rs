//! Image preprocessing for chart label OCR
//!
//! Turns a decoded chart screenshot into a clean, dark-on-light bitmap of the
//! right-hand label column. Every intermediate image is strictly two-level.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult};

use image::{GrayImage, Luma};

/// Foreground value of a mask pixel
pub const FOREGROUND: u8 = 255;
/// Background value of a mask pixel
pub const BACKGROUND: u8 = 0;

/// Binary text-candidate bitmap (white text on black)
#[derive(Debug, Clone, PartialEq)]
pub struct Mask(GrayImage);

impl Mask {
    /// Build a mask from a per-pixel predicate
    pub fn from_fn<F>(width: u32, height: u32, mut is_foreground: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        Self(GrayImage::from_fn(width, height, |x, y| {
            Luma([if is_foreground(x, y) { FOREGROUND } else { BACKGROUND }])
        }))
    }

    /// Re-binarize a grayscale image: values strictly above `threshold` become foreground
    pub fn threshold(image: &GrayImage, threshold: u8) -> Self {
        Self::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y).0[0] > threshold
        })
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[cfg(test)]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.0.get_pixel(x, y).0[0] == FOREGROUND
    }

    /// Number of foreground pixels
    pub fn count(&self) -> usize {
        self.0.pixels().filter(|p| p.0[0] == FOREGROUND).count()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.0
    }
}

/// OCR-ready bitmap: upscaled, padded, dark glyphs on a light background
#[derive(Debug, Clone)]
pub struct PreparedBitmap(GrayImage);

impl PreparedBitmap {
    pub(crate) fn new(image: GrayImage) -> Self {
        Self(image)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.0
    }
}

/// Fixed geometric and photometric constants of the extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Pixels brighter than this (HSV value) may be text
    pub brightness_min: u8,
    /// Pixels less saturated than this (HSV saturation) may be text
    pub saturation_max: u8,
    /// Structuring element (width, height) for horizontal gridlines
    pub horizontal_kernel: (u32, u32),
    /// Structuring element (width, height) for vertical gridlines
    pub vertical_kernel: (u32, u32),
    /// Horizontal crop window as fractions of the image width
    pub crop_x: (f64, f64),
    /// Vertical crop window as fractions of the image height
    pub crop_y: (f64, f64),
    /// Integer upscale factor applied to the crop
    pub scale: u32,
    /// Midpoint used to re-binarize after interpolation
    pub binarize_threshold: u8,
    /// Background margin added on every side
    pub padding: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            brightness_min: 220,
            saturation_max: 40,
            horizontal_kernel: (60, 1),
            vertical_kernel: (1, 25),
            crop_x: (0.50, 0.96),
            crop_y: (0.01, 0.96),
            scale: 4,
            binarize_threshold: 127,
            padding: 50,
        }
    }
}
