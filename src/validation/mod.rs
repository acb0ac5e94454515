//! Validation Engine
//!
//! Checks a canvas against size and content rules before it is rendered.

pub mod engine;

pub use engine::{
    validate_canvas, validate_drawing, Limits, Severity, ValidationResult, Validator, Violation,
};
