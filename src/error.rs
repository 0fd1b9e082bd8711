use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Could not load image: {} ({reason})", path.display())]
    SourceNotFound { path: PathBuf, reason: String },

    #[error("Image too small for the label region: {width}x{height}")]
    ImageTooSmall { width: u32, height: u32 },

    #[error("Failed to initialize OCR engine: {0}")]
    InitializationError(String),

    #[error("Failed to recognize text: {0}")]
    RecognitionError(String),

    #[error("Unknown OCR engine '{name}' (available: {available})")]
    UnknownEngine { name: String, available: String },
}

impl ZoneError {
    /// Stable identifier for the error class, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            ZoneError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            ZoneError::ImageTooSmall { .. } => "IMAGE_TOO_SMALL",
            ZoneError::InitializationError(_) => "INIT_ERROR",
            ZoneError::RecognitionError(_) => "RECOGNITION_ERROR",
            ZoneError::UnknownEngine { .. } => "UNKNOWN_ENGINE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_message_names_path() {
        let err = ZoneError::SourceNotFound {
            path: PathBuf::from("/tmp/missing.png"),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(err.code(), "SOURCE_NOT_FOUND");
        assert!(err.to_string().starts_with("Could not load image: /tmp/missing.png"));
    }
}
