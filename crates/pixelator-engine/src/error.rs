//! Umbrella error for callers that drive several engine components.

use thiserror::Error;

use crate::color::{ParseColorError, UnknownFormula};
use crate::filter::{UnknownFilter, UnknownStrategy};
use crate::matrix::MatrixError;
use crate::palette::PaletteError;

/// Any error the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
    #[error(transparent)]
    UnknownFormula(#[from] UnknownFormula),
    #[error(transparent)]
    UnknownFilter(#[from] UnknownFilter),
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
}
