//! Canvas Model
//!
//! Value types for canvases and drawings, plus their wire formats.

pub mod codec;
pub mod model;

pub use codec::{decode, CanvasFormat};
pub use model::{
    is_printable, Canvas, Drawing, CANVAS_MAX_HEIGHT, CANVAS_MAX_NAME_SIZE, CANVAS_MAX_WIDTH,
};
