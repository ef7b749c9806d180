//! Image source boundary for inkgrid: decoding and path resolution.

pub mod image;
pub mod locate;

pub use crate::image::{ImageFileSource, load_pixels};
pub use crate::locate::ResourceLocator;
