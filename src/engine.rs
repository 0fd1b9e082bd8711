use crate::error::ZoneError;
use crate::preprocessing::PreparedBitmap;

/// Tesseract OCR engine mode (`--oem`)
///
/// OEM 3 is what `TessBaseAPIInit3` selects, so engines that initialize
/// through it get this mode without setting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    /// Whatever the installed engine considers most accurate (OEM 3)
    Default,
}

impl EngineMode {
    pub fn as_tesseract_value(&self) -> &'static str {
        match self {
            Self::Default => "3",
        }
    }
}

/// Page segmentation mode (`--psm`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSegMode {
    /// Treat the bitmap as a single uniform block of text (PSM 6)
    SingleBlock,
}

impl PageSegMode {
    pub fn as_tesseract_value(&self) -> &'static str {
        match self {
            Self::SingleBlock => "6",
        }
    }
}

/// Fixed recognition settings handed to the engine on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OcrConfig {
    pub engine_mode: EngineMode,
    pub page_seg_mode: PageSegMode,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine_mode: EngineMode::Default,
            page_seg_mode: PageSegMode::SingleBlock,
        }
    }
}

/// Raw engine output: newline separated lines, possibly empty or garbled
#[derive(Debug, Clone)]
pub struct OcrResult {
    pub text: String,
}

/// Trait that all OCR engines must implement
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize text in a prepared dark-on-light bitmap
    fn recognize(&self, bitmap: &PreparedBitmap, config: &OcrConfig) -> Result<OcrResult, ZoneError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_oem_3_psm_6() {
        let config = OcrConfig::default();
        assert_eq!(config.engine_mode.as_tesseract_value(), "3");
        assert_eq!(config.page_seg_mode.as_tesseract_value(), "6");
    }
}
