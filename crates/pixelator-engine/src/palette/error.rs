//! Error types for palette construction.

use thiserror::Error;

/// Error type for palette construction.
///
/// Lookups never fail: an empty adaptive palette simply has no match. Only
/// building a fixed-size cluster palette can be rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A cluster palette was requested with zero colors
    #[error("cluster palette size must be at least 1")]
    ZeroClusters,
    /// The image to cluster has no pixels
    #[error("cannot build a cluster palette from an empty image")]
    EmptyImage,
}
