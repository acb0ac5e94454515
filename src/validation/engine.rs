//! Validation Engine
//!
//! Size and content rules for canvases and their drawings. Every rule runs;
//! violations are accumulated rather than returned on the first failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::canvas::{
    is_printable, Canvas, Drawing, CANVAS_MAX_HEIGHT, CANVAS_MAX_NAME_SIZE, CANVAS_MAX_WIDTH,
};

/// Severity of a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single rule violation attached to a field path such as `Drawings[0].Fill`
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: String) {
        self.violations.push(Violation {
            field: field.into(),
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: String) {
        self.violations.push(Violation {
            field: field.into(),
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
    }

    /// Error messages grouped by field path
    pub fn by_field(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut fields: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for violation in self.errors() {
            fields
                .entry(violation.field.as_str())
                .or_default()
                .push(violation.message.as_str());
        }
        fields
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.errors().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

/// Size limits applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_width: i64,
    pub max_height: i64,
    pub max_name_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: CANVAS_MAX_WIDTH,
            max_height: CANVAS_MAX_HEIGHT,
            max_name_len: CANVAS_MAX_NAME_SIZE,
        }
    }
}

/// Canvas validator, handed to the renderer to run before painting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn validate(&self, canvas: &Canvas) -> ValidationResult {
        validate_canvas(canvas, &self.limits)
    }
}

/// Validate a canvas and all of its drawings
pub fn validate_canvas(canvas: &Canvas, limits: &Limits) -> ValidationResult {
    let mut result = ValidationResult::new();

    let name_len = canvas.name.chars().count();
    if name_len > limits.max_name_len {
        result.add_error(
            "Name",
            format!(
                "canvas name is {} characters long, max. {} allowed",
                name_len, limits.max_name_len
            ),
        );
    }

    if canvas.width < 0 {
        result.add_error("Width", "canvas width must not be negative".to_string());
    } else if canvas.width > limits.max_width {
        result.add_error(
            "Width",
            format!("canvas width max. value {} exceeded", limits.max_width),
        );
    }
    if canvas.height < 0 {
        result.add_error("Height", "canvas height must not be negative".to_string());
    } else if canvas.height > limits.max_height {
        result.add_error(
            "Height",
            format!("canvas height max. value {} exceeded", limits.max_height),
        );
    }

    for (index, drawing) in canvas.drawings.iter().enumerate() {
        validate_drawing(index, drawing, limits, &mut result);
        check_drawing_visible(index, drawing, canvas, &mut result);
    }

    result
}

/// Validate one drawing, reporting under `Drawings[index]`
pub fn validate_drawing(
    index: usize,
    drawing: &Drawing,
    limits: &Limits,
    result: &mut ValidationResult,
) {
    let field = |name: &str| format!("Drawings[{}].{}", index, name);

    if drawing.fill.is_none() && drawing.outline.is_none() {
        result.add_error(
            field("Fill/Outline"),
            "at least one field must be set".to_string(),
        );
    }
    for (name, value) in [("Fill", drawing.fill), ("Outline", drawing.outline)] {
        if let Some(c) = value.filter(|c| !is_printable(*c)) {
            result.add_error(
                field(name),
                format!(
                    "character code {} is not printable ASCII (32 to 126)",
                    c as u32
                ),
            );
        }
    }

    if drawing.coordinates.len() != 2 {
        result.add_error(field("Coordinates"), "only two entries allowed".to_string());
    }
    if let Some(&row) = drawing.coordinates.first() {
        if row < 0 {
            result.add_error(
                field("Coordinates"),
                "invalid 'i' coordinate value, must not be negative".to_string(),
            );
        } else if row > limits.max_height {
            result.add_error(
                field("Coordinates"),
                format!(
                    "invalid 'i' coordinate value, must be less or equal than {}",
                    limits.max_height
                ),
            );
        }
    }
    if let Some(&col) = drawing.coordinates.get(1) {
        if col < 0 {
            result.add_error(
                field("Coordinates"),
                "invalid 'j' coordinate value, must not be negative".to_string(),
            );
        } else if col > limits.max_width {
            result.add_error(
                field("Coordinates"),
                format!(
                    "invalid 'j' coordinate value, must be less or equal than {}",
                    limits.max_width
                ),
            );
        }
    }

    if drawing.width < 0 {
        result.add_error(field("Width"), "drawing width must not be negative".to_string());
    } else if drawing.width > limits.max_width {
        result.add_error(
            field("Width"),
            format!("drawing width max. value {} exceeded", limits.max_width),
        );
    }
    if drawing.height < 0 {
        result.add_error(
            field("Height"),
            "drawing height must not be negative".to_string(),
        );
    } else if drawing.height > limits.max_height {
        result.add_error(
            field("Height"),
            format!("drawing height max. value {} exceeded", limits.max_height),
        );
    }
}

/// Coordinates are only bounded by the global maxima, so a drawing can pass
/// validation and still miss its own canvas entirely. Flag it, don't reject.
fn check_drawing_visible(
    index: usize,
    drawing: &Drawing,
    canvas: &Canvas,
    result: &mut ValidationResult,
) {
    let Some((row, col)) = drawing.origin() else {
        return;
    };
    if row >= canvas.height || col >= canvas.width {
        result.add_warning(
            format!("Drawings[{}].Coordinates", index),
            format!(
                "drawing starts outside the {}x{} canvas and paints nothing",
                canvas.width, canvas.height
            ),
        );
    }
}
