//! Canvas Rendering
//!
//! Rasterization of validated canvases into text grids.

pub mod grid;
pub mod raster;

pub use grid::Grid;
pub use raster::{paint_drawing, rasterize, render_canvas, OutputFormat, RenderOptions};
