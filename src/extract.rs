//! Stage composition: image file -> prepared bitmap -> raw OCR text -> zone labels

use crate::engine::{OcrConfig, OcrEngine};
use crate::error::ZoneError;
use crate::preprocessing::{Pipeline, PreparedBitmap, PreprocessingResult};
use crate::text::{is_zone_label, normalize_line};
use image::RgbImage;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// One cleaned chart annotation, in OCR line order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZoneLabel(String);

impl ZoneLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a screenshot; the file is closed before this returns
pub fn load_image(path: &Path) -> Result<RgbImage, ZoneError> {
    let img = image::open(path).map_err(|e| ZoneError::SourceNotFound {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(img.into_rgb8())
}

/// Load and preprocess a screenshot into an OCR-ready bitmap
pub fn prepare(path: &Path, pipeline: &Pipeline) -> Result<PreprocessingResult, ZoneError> {
    let image = load_image(path)?;
    tracing::debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    pipeline.process(&image)
}

/// Run OCR on a prepared bitmap and keep the zone labels
pub fn recognize_labels(
    bitmap: &PreparedBitmap,
    engine: &dyn OcrEngine,
    config: &OcrConfig,
) -> Result<Vec<ZoneLabel>, ZoneError> {
    tracing::debug!(
        "Running {} (oem {}, psm {}) on {}x{} bitmap",
        engine.name(),
        config.engine_mode.as_tesseract_value(),
        config.page_seg_mode.as_tesseract_value(),
        bitmap.width(),
        bitmap.height()
    );
    let result = engine.recognize(bitmap, config)?;
    Ok(labels_from_text(&result.text))
}

/// Normalize each non-empty raw line and keep those naming a zone
pub fn labels_from_text(raw: &str) -> Vec<ZoneLabel> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let cleaned = normalize_line(line);
            match cleaned {
                Some(cleaned) if is_zone_label(&cleaned) => Some(ZoneLabel(cleaned)),
                _ => {
                    tracing::debug!("Dropped OCR line: {:?}", line);
                    None
                }
            }
        })
        .collect()
}

/// Full pipeline for one screenshot
///
/// The engine is only created once the image has been loaded and prepared,
/// so an unreadable source fails without initializing OCR.
pub fn extract_zones<F>(
    path: &Path,
    pipeline: &Pipeline,
    ocr: &OcrConfig,
    make_engine: F,
) -> Result<Vec<ZoneLabel>, ZoneError>
where
    F: FnOnce() -> Result<Box<dyn OcrEngine>, ZoneError>,
{
    let prepared = prepare(path, pipeline)?;
    let breakdown = prepared
        .steps
        .iter()
        .map(|step| format!("{} {}ms", step.name, step.time_ms))
        .collect::<Vec<_>>()
        .join(", ");
    tracing::debug!(
        "Preprocessing took {}ms ({})",
        prepared.total_time_ms,
        breakdown
    );

    let engine = make_engine()?;
    recognize_labels(&prepared.bitmap, engine.as_ref(), ocr)
}
