//! Rasterizer
//!
//! Paints drawings onto a [`Grid`] in list order and serializes the result.

use serde::Deserialize;

use crate::canvas::{Canvas, Drawing};
use crate::error::{Error, Result};
use crate::render::grid::Grid;
use crate::validation::Validator;

/// How the painted grid is turned into a string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Characters written verbatim
    #[default]
    Text,
    /// Characters HTML-escaped, for embedding in a page
    Html,
}

/// Filler character, row separator and output format for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub filler: char,
    pub separator: String,
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::text()
    }
}

impl RenderOptions {
    /// Plain text: blank filler, one row per line
    pub fn text() -> Self {
        Self {
            filler: ' ',
            separator: "\n".to_string(),
            format: OutputFormat::Text,
        }
    }

    /// HTML fragment: blank filler, rows split by `<br>`
    pub fn html() -> Self {
        Self {
            filler: ' ',
            separator: "<br>".to_string(),
            format: OutputFormat::Html,
        }
    }

    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::text(),
            OutputFormat::Html => Self::html(),
        }
    }

    pub fn with_filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Inclusive cell bounds of a drawing, before clipping to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    top: i64,
    left: i64,
    bottom: i64,
    right: i64,
}

impl Rect {
    fn new(row: i64, col: i64, width: i64, height: i64) -> Self {
        Self {
            top: row,
            left: col,
            bottom: row.saturating_add(height).saturating_sub(1),
            right: col.saturating_add(width).saturating_sub(1),
        }
    }

    fn on_border(&self, row: i64, col: i64) -> bool {
        row == self.top || row == self.bottom || col == self.left || col == self.right
    }
}

/// Render a canvas to a string, validating it first when a validator is given
pub fn render_canvas(
    canvas: &Canvas,
    options: &RenderOptions,
    validator: Option<&Validator>,
) -> Result<String> {
    if let Some(validator) = validator {
        let result = validator.validate(canvas);
        for warning in result.warnings() {
            log::warn!(
                "canvas '{}': {}: {}",
                canvas.name,
                warning.field,
                warning.message
            );
        }
        if !result.is_valid() {
            return Err(Error::Validation(result));
        }
    }

    let grid = rasterize(canvas, options.filler)?;
    Ok(match options.format {
        OutputFormat::Text => grid.to_text(&options.separator),
        OutputFormat::Html => grid.to_html(&options.separator),
    })
}

/// Paint every drawing of `canvas` onto a fresh grid
///
/// Negative canvas dimensions produce an empty grid. A drawing whose
/// coordinates don't have exactly two components is an error, and so is a
/// canvas too large to allocate.
pub fn rasterize(canvas: &Canvas, filler: char) -> Result<Grid> {
    let too_large = || Error::CanvasTooLarge {
        width: canvas.width,
        height: canvas.height,
    };
    let width = usize::try_from(canvas.width.max(0)).map_err(|_| too_large())?;
    let height = usize::try_from(canvas.height.max(0)).map_err(|_| too_large())?;
    let mut grid = Grid::try_new(width, height, filler).ok_or_else(too_large)?;

    for (index, drawing) in canvas.drawings.iter().enumerate() {
        paint_drawing(&mut grid, index, drawing, filler)?;
    }

    Ok(grid)
}

/// Paint one drawing. Border cells take the outline, interior cells the
/// fill; an absent character falls back to `filler`.
pub fn paint_drawing(
    grid: &mut Grid,
    index: usize,
    drawing: &Drawing,
    filler: char,
) -> Result<()> {
    let (row, col) = drawing.origin().ok_or(Error::MalformedCoordinates {
        index,
        len: drawing.coordinates.len(),
    })?;
    let fill = drawing.fill.unwrap_or(filler);
    let outline = drawing.outline.unwrap_or(filler);
    let rect = Rect::new(row, col, drawing.width, drawing.height);

    log::debug!(
        "painting drawing {} at ({}, {}) size {}x{}",
        index,
        row,
        col,
        drawing.width,
        drawing.height
    );

    // Only the part of the rectangle that overlaps the grid is visited
    let first_row = rect.top.max(0);
    let last_row = rect.bottom.min(grid.height() as i64 - 1);
    let first_col = rect.left.max(0);
    let last_col = rect.right.min(grid.width() as i64 - 1);

    for i in first_row..=last_row {
        for j in first_col..=last_col {
            let c = if rect.on_border(i, j) { outline } else { fill };
            grid.set(i, j, c);
        }
    }

    Ok(())
}
