//! Canvas Illustrator
//!
//! Validation and rasterization of rectangular canvases into text grids.
//!
//! This library provides:
//! - Canvas and drawing value types with JSON/TOML decoding
//! - An accumulating validator for size and content rules
//! - A deterministic rasterizer producing text or HTML output
//! - Configuration management for the command-line renderer

pub mod canvas;
pub mod config;
pub mod error;
pub mod render;
pub mod validation;

// Re-exports for clean public API
pub use canvas::{Canvas, CanvasFormat, Drawing};
pub use config::Config;
pub use error::{Error, Result};
pub use render::{render_canvas, OutputFormat, RenderOptions};
pub use validation::{validate_canvas, Limits, ValidationResult, Validator};
