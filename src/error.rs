use pixelator_engine::{EngineError, MatrixError, PaletteError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Image too large: {0}")]
    Dimensions(String),
}
