//! Pixelator
//!
//! PNG front end for the `pixelator-engine` color quantization filters.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
