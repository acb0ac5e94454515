//! Canvas and Drawing Types
//!
//! Plain data as it arrives from a request or a file. Nothing here checks
//! limits; that is the job of the validation engine.

use serde::{Deserialize, Serialize};

/// Maximum canvas width in characters
pub const CANVAS_MAX_WIDTH: i64 = 50;
/// Maximum canvas height in characters
pub const CANVAS_MAX_HEIGHT: i64 = 100;
/// Maximum canvas name length in characters
pub const CANVAS_MAX_NAME_SIZE: usize = 15;

/// Lowest code point accepted for a fill or outline character (space)
pub const PRINTABLE_MIN: u32 = 32;
/// Highest code point accepted for a fill or outline character (tilde)
pub const PRINTABLE_MAX: u32 = 126;

/// A named rectangular grid and the drawings painted onto it, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default)]
    pub name: String,
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub drawings: Vec<Drawing>,
}

/// A rectangle placed on a canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Top-left corner as `[row, column]`
    #[serde(default)]
    pub coordinates: Vec<i64>,
    pub width: i64,
    pub height: i64,
    /// Interior character
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "code_point"
    )]
    pub fill: Option<char>,
    /// Border character
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "code_point"
    )]
    pub outline: Option<char>,
}

impl Canvas {
    pub fn new(name: impl Into<String>, width: i64, height: i64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            drawings: Vec::new(),
        }
    }

    /// Append a drawing; later drawings paint over earlier ones
    pub fn with_drawing(mut self, drawing: Drawing) -> Self {
        self.drawings.push(drawing);
        self
    }
}

impl Drawing {
    /// A `width` x `height` rectangle with its top-left corner at `(row, col)`
    pub fn new(row: i64, col: i64, width: i64, height: i64) -> Self {
        Self {
            coordinates: vec![row, col],
            width,
            height,
            fill: None,
            outline: None,
        }
    }

    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_outline(mut self, outline: char) -> Self {
        self.outline = Some(outline);
        self
    }

    /// `(row, col)` when the coordinates have exactly two components
    pub fn origin(&self) -> Option<(i64, i64)> {
        match self.coordinates.as_slice() {
            [row, col] => Some((*row, *col)),
            _ => None,
        }
    }
}

/// Whether `c` lies in the printable ASCII range
pub fn is_printable(c: char) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&(c as u32))
}

/// Fill and outline travel as integer code points on the wire; a
/// one-character string is accepted as well.
mod code_point {
    use std::fmt;

    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<char>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(c) => serializer.serialize_some(&(*c as u32)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalCodePoint)
    }

    struct OptionalCodePoint;

    impl<'de> Visitor<'de> for OptionalCodePoint {
        type Value = Option<char>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a character, its code point, or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(CodePoint).map(Some)
        }
    }

    struct CodePoint;

    impl<'de> Visitor<'de> for CodePoint {
        type Value = char;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a single character or a Unicode code point")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<char, E> {
            u32::try_from(v)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<char, E> {
            match u64::try_from(v) {
                Ok(v) => self.visit_u64(v),
                Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
            }
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<char, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<char, E> {
            let mut chars = v.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_requires_two_components() {
        assert_eq!(Drawing::new(3, 5, 1, 1).origin(), Some((3, 5)));

        let mut drawing = Drawing::new(0, 0, 1, 1);
        drawing.coordinates = vec![0, 0, 1];
        assert_eq!(drawing.origin(), None);

        drawing.coordinates = vec![4];
        assert_eq!(drawing.origin(), None);
    }

    #[test]
    fn test_printable_range() {
        assert!(is_printable(' '));
        assert!(is_printable('~'));
        assert!(is_printable('@'));
        assert!(!is_printable('\u{1f}'));
        assert!(!is_printable('\u{7f}'));
        assert!(!is_printable('\u{8a}'));
    }

    #[test]
    fn test_builder() {
        let canvas = Canvas::new("demo", 15, 7)
            .with_drawing(Drawing::new(3, 5, 4, 4).with_fill('*').with_outline('@'));

        assert_eq!(canvas.drawings.len(), 1);
        assert_eq!(canvas.drawings[0].fill, Some('*'));
        assert_eq!(canvas.drawings[0].outline, Some('@'));
    }
}
