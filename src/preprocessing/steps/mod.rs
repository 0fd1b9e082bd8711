//! Individual preprocessing steps

pub mod border;
pub mod lines;
pub mod mask;
pub mod region;
pub mod rescale;
