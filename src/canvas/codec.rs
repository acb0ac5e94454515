//! Canvas decoding from JSON request bodies and TOML files.

use std::path::Path;

use super::model::Canvas;
use crate::error::Result;

/// Serialized form of a canvas definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasFormat {
    Json,
    Toml,
}

impl CanvasFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => CanvasFormat::Toml,
            _ => CanvasFormat::Json,
        }
    }
}

/// Decode a canvas in the given format
pub fn decode(content: &str, format: CanvasFormat) -> Result<Canvas> {
    match format {
        CanvasFormat::Json => Ok(serde_json::from_str(content)?),
        CanvasFormat::Toml => Ok(toml::from_str(content)?),
    }
}

impl Canvas {
    pub fn from_json(content: &str) -> Result<Self> {
        decode(content, CanvasFormat::Json)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        decode(content, CanvasFormat::Toml)
    }

    /// Encode with fill and outline as integer code points
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
