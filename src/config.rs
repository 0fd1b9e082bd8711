use crate::{Args, OutputFormat};
use std::path::PathBuf;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub image: PathBuf,
    /// Requested OCR engine; `None` picks the first compiled one
    pub engine: Option<String>,
    #[allow(dead_code)]
    pub language: String,
    #[allow(dead_code)]
    pub tessdata_path: Option<String>,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            image: args.image,
            engine: args.engine,
            language: args.language,
            tessdata_path: args.tessdata_path,
            format: args.format,
        }
    }
}
