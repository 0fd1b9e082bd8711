use crate::error::ZoneError;
use image::RgbImage;
use std::time::Instant;

use super::{steps, Geometry, PreparedBitmap};

/// Timing information for a single preprocessing step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult {
    /// Prepared bitmap
    pub bitmap: PreparedBitmap,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Preprocessing pipeline: text mask, gridline removal, crop, upscale, border
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    geometry: Geometry,
}

impl Pipeline {
    /// Turn a decoded screenshot into an OCR-ready bitmap
    pub fn process(&self, image: &RgbImage) -> Result<PreprocessingResult, ZoneError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();
        let geometry = &self.geometry;

        // Fail fast before any per-pixel work
        steps::region::window(image.width(), image.height(), geometry)?;

        let mask = self.run_step("mask", image, &mut steps_timing, |img| {
            Ok(steps::mask::apply(img, geometry))
        })?;
        let mask = self.run_step("lines", mask, &mut steps_timing, |m| {
            Ok(steps::lines::apply(m, geometry))
        })?;
        tracing::debug!("{} text candidate pixels after gridline removal", mask.count());
        let mask = self.run_step("region", mask, &mut steps_timing, |m| {
            steps::region::apply(m, geometry)
        })?;
        let mask = self.run_step("rescale", mask, &mut steps_timing, |m| {
            steps::rescale::apply(m, geometry)
        })?;
        let bitmap = self.run_step("border", mask, &mut steps_timing, |m| {
            Ok(steps::border::apply(m, geometry))
        })?;

        Ok(PreprocessingResult {
            bitmap,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<I, O, F>(
        &self,
        name: &str,
        input: I,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<O, ZoneError>
    where
        F: FnOnce(I) -> Result<O, ZoneError>,
    {
        let step_start = Instant::now();
        let result = step_fn(input)?;
        let time_ms = step_start.elapsed().as_millis() as u64;
        tracing::debug!("Preprocessing step '{}' took {}ms", name, time_ms);
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms,
        });
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_pipeline_runs_all_steps_in_order() {
        let img = RgbImage::from_pixel(200, 100, Rgb([19, 23, 34]));
        let result = Pipeline::default().process(&img).unwrap();

        let names: Vec<_> = result.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["mask", "lines", "region", "rescale", "border"]);
    }

    #[test]
    fn test_pipeline_output_dimensions() {
        // crop 100..192 x 1..96 -> 92x95, x4 -> 368x380, +100 margin
        let img = RgbImage::from_pixel(200, 100, Rgb([19, 23, 34]));
        let result = Pipeline::default().process(&img).unwrap();

        assert_eq!(result.bitmap.width(), 468);
        assert_eq!(result.bitmap.height(), 480);
    }

    #[test]
    fn test_blank_chart_yields_all_light_bitmap() {
        let img = RgbImage::from_pixel(200, 100, Rgb([19, 23, 34]));
        let result = Pipeline::default().process(&img).unwrap();
        assert!(result.bitmap.as_image().pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_white_label_becomes_dark_glyph() {
        let mut img = RgbImage::from_pixel(200, 100, Rgb([19, 23, 34]));
        for x in 150..155 {
            for y in 40..47 {
                img.put_pixel(x, y, Rgb([250, 250, 250]));
            }
        }

        let result = Pipeline::default().process(&img).unwrap();
        // (152, 43) -> crop (52, 42) -> scaled (208, 168) -> padded (258, 218)
        assert_eq!(result.bitmap.as_image().get_pixel(258, 218).0[0], 0);
    }

    #[test]
    fn test_tiny_image_fails_before_processing() {
        let img = RgbImage::new(1, 1);
        let err = Pipeline::default().process(&img).unwrap_err();
        assert!(matches!(err, ZoneError::ImageTooSmall { .. }));
    }
}
