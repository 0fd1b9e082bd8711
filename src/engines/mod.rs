//! OCR engine implementations
//!
//! This module contains implementations of the OcrEngine trait for different
//! OCR backends. Engines are conditionally compiled based on feature flags.

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::ZoneError;
use std::path::PathBuf;

/// Registry of available OCR engines
///
/// Engines download models on first use, so nothing is initialized until
/// `create` is called.
pub struct EngineRegistry {
    names: Vec<&'static str>,
}

impl EngineRegistry {
    /// Collect the engines compiled into this binary, in preference order
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut names = Vec::new();

        #[cfg(feature = "engine-tesseract")]
        names.push("tesseract");

        Self { names }
    }

    /// List all available engine names
    pub fn list(&self) -> Vec<&str> {
        self.names.clone()
    }

    /// Get the default engine name
    pub fn default_name(&self) -> Option<&'static str> {
        self.names.first().copied()
    }

    /// Resolve a requested engine name (or the default) to a compiled engine
    pub fn resolve(&self, requested: Option<&str>) -> Result<&'static str, ZoneError> {
        let available = || {
            if self.names.is_empty() {
                "none; build with --features engine-tesseract".to_string()
            } else {
                self.names.join(", ")
            }
        };

        match requested {
            Some(name) => self
                .names
                .iter()
                .find(|n| n.eq_ignore_ascii_case(name))
                .copied()
                .ok_or_else(|| ZoneError::UnknownEngine {
                    name: name.to_string(),
                    available: available(),
                }),
            None => self.default_name().ok_or_else(|| ZoneError::UnknownEngine {
                name: "default".to_string(),
                available: available(),
            }),
        }
    }

    /// Initialize the requested engine
    pub fn create(&self, config: &Config) -> Result<Box<dyn OcrEngine>, ZoneError> {
        let name = self.resolve(config.engine.as_deref())?;
        tracing::info!("Initializing {} engine...", name);

        match name {
            #[cfg(feature = "engine-tesseract")]
            "tesseract" => Ok(Box::new(tesseract::TesseractEngine::new(config)?)),
            other => Err(ZoneError::UnknownEngine {
                name: other.to_string(),
                available: self.names.join(", "),
            }),
        }
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-user cache directory for downloaded models and training data
pub(crate) fn cache_dir(kind: &str) -> Result<PathBuf, ZoneError> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("chart-zones")
        .join(kind);

    std::fs::create_dir_all(&dir).map_err(|e| {
        ZoneError::InitializationError(format!("Failed to create cache directory: {}", e))
    })?;

    Ok(dir)
}

/// Download a file from URL to path using ureq
pub(crate) fn download_file(url: &str, path: &std::path::Path) -> Result<(), ZoneError> {
    use std::io::Write;

    let response = ureq::get(url).call().map_err(|e| {
        ZoneError::InitializationError(format!("Failed to download {}: {}", url, e))
    })?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        ZoneError::InitializationError(format!("Failed to read response from {}: {}", url, e))
    })?;

    let mut file = std::fs::File::create(path).map_err(|e| {
        ZoneError::InitializationError(format!("Failed to create {}: {}", path.display(), e))
    })?;

    file.write_all(&buffer).map_err(|e| {
        ZoneError::InitializationError(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_engine_is_rejected() {
        let registry = EngineRegistry::new();
        let err = registry.resolve(Some("paddle")).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_ENGINE");
        assert!(err.to_string().contains("paddle"));
    }

    #[cfg(feature = "engine-tesseract")]
    #[test]
    fn test_tesseract_is_default_and_case_insensitive() {
        let registry = EngineRegistry::new();
        assert_eq!(registry.default_name(), Some("tesseract"));
        assert_eq!(registry.resolve(None).unwrap(), "tesseract");
        assert_eq!(registry.resolve(Some("Tesseract")).unwrap(), "tesseract");
    }
}
