//! Tesseract engine implementation
//!
//! Uses tesseract-static crate for static linking (no system dependencies).
//! Downloads tessdata (training data) automatically on first use unless a
//! tessdata directory is configured.

use crate::config::Config;
use crate::engine::{EngineMode, OcrConfig, OcrEngine, OcrResult};
use crate::error::ZoneError;
use crate::preprocessing::PreparedBitmap;
use tesseract_static::tesseract::Tesseract;

/// Tesseract OCR Engine
pub struct TesseractEngine {
    /// Path to tessdata directory
    tessdata_path: String,
    /// Recognition language
    language: String,
}

impl TesseractEngine {
    /// Create a new Tesseract-based OCR engine
    pub fn new(config: &Config) -> Result<Self, ZoneError> {
        let language = config.language.clone();

        let tessdata_path = match &config.tessdata_path {
            Some(path) => path.clone(),
            None => ensure_tessdata_available(&language)?,
        };

        // Fail at startup rather than on the first bitmap
        let test_tess = Tesseract::new(Some(&tessdata_path), Some(&language)).map_err(|e| {
            ZoneError::InitializationError(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(test_tess);

        tracing::info!(
            "Tesseract engine initialized (tessdata: {}, language: {})",
            tessdata_path,
            language
        );

        Ok(Self {
            tessdata_path,
            language,
        })
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn description(&self) -> &'static str {
        "Tesseract OCR engine with explicit engine mode and page segmentation"
    }

    fn recognize(&self, bitmap: &PreparedBitmap, config: &OcrConfig) -> Result<OcrResult, ZoneError> {
        let (width, height) = (bitmap.width(), bitmap.height());

        // BMP is always supported by leptonica
        let mut bmp_data = Vec::new();
        bitmap
            .as_image()
            .write_to(&mut std::io::Cursor::new(&mut bmp_data), image::ImageFormat::Bmp)
            .map_err(|e| {
                ZoneError::RecognitionError(format!("Failed to convert to BMP: {}", e))
            })?;

        tracing::debug!(
            "Tesseract input: {}x{}, BMP size: {} bytes, oem {}, psm {}",
            width,
            height,
            bmp_data.len(),
            config.engine_mode.as_tesseract_value(),
            config.page_seg_mode.as_tesseract_value()
        );

        let tess = match config.engine_mode {
            // Init3 selects OEM_DEFAULT; the mode can't be changed after init
            EngineMode::Default => Tesseract::new(Some(&self.tessdata_path), Some(&self.language)),
        }
        .map_err(|e| ZoneError::RecognitionError(format!("Failed to create Tesseract: {}", e)))?;

        let tess = tess
            .set_variable(
                "tessedit_pageseg_mode",
                config.page_seg_mode.as_tesseract_value(),
            )
            .map_err(|e| {
                ZoneError::RecognitionError(format!("Failed to set page segmentation: {}", e))
            })?;

        let tess = tess.set_image_from_mem(&bmp_data).map_err(|e| {
            ZoneError::RecognitionError(format!(
                "Failed to set image ({}x{}, {} bytes): {}",
                width,
                height,
                bmp_data.len(),
                e
            ))
        })?;

        let mut tess = tess
            .recognize()
            .map_err(|e| ZoneError::RecognitionError(format!("Failed to recognize text: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| ZoneError::RecognitionError(format!("Failed to get text: {}", e)))?;

        Ok(OcrResult { text })
    }
}

/// Ensure tessdata is available, downloading if needed
fn ensure_tessdata_available(language: &str) -> Result<String, ZoneError> {
    let cache_dir = super::cache_dir("tessdata")?;
    let traineddata_path = cache_dir.join(format!("{}.traineddata", language));

    if !traineddata_path.exists() {
        tracing::info!(
            "Downloading tessdata for '{}' (this may take a moment)...",
            language
        );
        super::download_file(&tessdata_url(language), &traineddata_path)?;
        tracing::info!("Downloaded tessdata to {:?}", traineddata_path);
    } else {
        tracing::debug!("Using cached tessdata from {:?}", cache_dir);
    }

    // Tesseract expects the directory, not the file
    cache_dir
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ZoneError::InitializationError("Invalid tessdata path".to_string()))
}

/// Get tessdata download URL for a language
fn tessdata_url(language: &str) -> String {
    // The LSTM "best" models back the default engine mode
    format!(
        "https://github.com/tesseract-ocr/tessdata_best/raw/main/{}.traineddata",
        language
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tessdata_url_names_language() {
        assert!(tessdata_url("eng").ends_with("/eng.traineddata"));
    }
}
