//! Configuration, types, and shared structures for inkgrid.
//!
//! This crate contains the pixel buffer, output grid, gradient, configuration
//! and error types used across the inkgrid workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::Gradient;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{Channels, OutputGrid, PixelBuffer};
