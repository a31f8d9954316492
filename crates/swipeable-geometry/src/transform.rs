//! Parsing of computed CSS transforms.
//!
//! A transition that is interrupted by a new gesture leaves the slide container
//! somewhere between two slides. Browsers report that position through the
//! computed `transform` style as a `matrix(...)` or `matrix3d(...)` function;
//! only the translation part matters here.

use crate::geometry::Point;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformParseError {
    /// The transform is `none` or empty.
    Identity,
    /// Not a `matrix(...)` / `matrix3d(...)` function.
    UnsupportedFunction(String),
    /// Wrong number of components for the function.
    Arity { expected: usize, found: usize },
    /// A component is not a finite number.
    InvalidComponent(String),
}

impl fmt::Display for TransformParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformParseError::Identity => write!(f, "transform is the identity"),
            TransformParseError::UnsupportedFunction(name) => {
                write!(f, "unsupported transform function `{name}`")
            }
            TransformParseError::Arity { expected, found } => {
                write!(f, "expected {expected} matrix components, found {found}")
            }
            TransformParseError::InvalidComponent(component) => {
                write!(f, "invalid matrix component `{component}`")
            }
        }
    }
}

impl std::error::Error for TransformParseError {}

/// Extracts the translation from a computed `matrix(a, b, c, d, tx, ty)` or
/// `matrix3d(...)` transform.
pub fn try_parse_matrix_translation(css: &str) -> Result<Point, TransformParseError> {
    let css = css.trim();
    if css.is_empty() || css == "none" {
        return Err(TransformParseError::Identity);
    }

    let (name, rest) = css
        .split_once('(')
        .ok_or_else(|| TransformParseError::UnsupportedFunction(css.to_string()))?;
    let body = rest
        .strip_suffix(')')
        .ok_or_else(|| TransformParseError::UnsupportedFunction(css.to_string()))?;

    let (expected, tx_index, ty_index) = match name.trim() {
        "matrix" => (6, 4, 5),
        "matrix3d" => (16, 12, 13),
        other => return Err(TransformParseError::UnsupportedFunction(other.to_string())),
    };

    let components: Vec<&str> = body.split(',').map(str::trim).collect();
    if components.len() != expected {
        return Err(TransformParseError::Arity {
            expected,
            found: components.len(),
        });
    }

    let parse = |raw: &str| -> Result<f32, TransformParseError> {
        raw.parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| TransformParseError::InvalidComponent(raw.to_string()))
    };

    Ok(Point::new(
        parse(components[tx_index])?,
        parse(components[ty_index])?,
    ))
}

/// Like [`try_parse_matrix_translation`], treating every failure as "no live
/// transform".
pub fn parse_matrix_translation(css: &str) -> Option<Point> {
    try_parse_matrix_translation(css).ok()
}
