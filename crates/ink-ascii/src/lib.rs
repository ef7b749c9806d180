//! ASCII conversion engine for inkgrid.
//!
//! Converts pixel buffers to character grids: brightness extraction,
//! box-filter resampling, gradient quantization and line rendering.

pub mod compositor;
pub mod luminance;
pub mod quantize;
pub mod render;
pub mod resample;
pub mod shapes;

pub use compositor::Converter;
pub use quantize::Quantizer;
