//! Typed property values and their persisted text forms.
//!
//! Every tunable property has one of four kinds: a boolean flag, a
//! number, an RGBA color, or an enumerated choice. The codec stores each
//! value as text; `PropertyValue::parse` and the `Display` impls define
//! that text form in one place so save/load round-trips stay stable.

use std::fmt;

use thiserror::Error;

/// Errors produced when parsing a persisted value back into its kind.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Not a `true`/`false` literal.
    #[error("invalid boolean literal '{0}'")]
    InvalidFlag(String),

    /// Not a decimal number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Not four comma-separated color components.
    #[error("invalid color '{0}': expected 'r,g,b,a'")]
    InvalidColor(String),

    /// Empty choice token.
    #[error("empty choice name")]
    EmptyChoice,
}

/// The semantic kind of a tunable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Boolean on/off flag.
    Flag,
    /// Numeric value (stored as `f64`).
    Number,
    /// RGBA color.
    Color,
    /// Enumerated string, validated against an allowed set at assignment.
    Choice,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Flag => "flag",
            PropertyKind::Number => "number",
            PropertyKind::Color => "color",
            PropertyKind::Choice => "choice",
        };
        f.write_str(name)
    }
}

/// An RGBA color with `f32` components.
///
/// The persisted form is `r,g,b,a` with fixed three-decimal components,
/// so a value that has been saved once reparses to the identical text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse the `r,g,b,a` text form. Components may carry surrounding
    /// whitespace.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != 4 {
            return Err(ValueError::InvalidColor(text.to_string()));
        }

        let mut components = [0.0f32; 4];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse::<f32>()
                .map_err(|_| ValueError::InvalidColor(text.to_string()))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3},{:.3},{:.3},{:.3}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Flag(bool),
    Number(f64),
    Color(Rgba),
    Choice(String),
}

impl PropertyValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Flag(_) => PropertyKind::Flag,
            PropertyValue::Number(_) => PropertyKind::Number,
            PropertyValue::Color(_) => PropertyKind::Color,
            PropertyValue::Choice(_) => PropertyKind::Choice,
        }
    }

    /// Parse persisted text into a value of the given kind.
    pub fn parse(kind: PropertyKind, text: &str) -> Result<Self, ValueError> {
        match kind {
            PropertyKind::Flag => match text.trim() {
                "true" => Ok(PropertyValue::Flag(true)),
                "false" => Ok(PropertyValue::Flag(false)),
                other => Err(ValueError::InvalidFlag(other.to_string())),
            },
            PropertyKind::Number => text
                .trim()
                .parse::<f64>()
                .map(PropertyValue::Number)
                .map_err(|_| ValueError::InvalidNumber(text.to_string())),
            PropertyKind::Color => Rgba::parse(text).map(PropertyValue::Color),
            PropertyKind::Choice => {
                let token = text.trim();
                if token.is_empty() {
                    Err(ValueError::EmptyChoice)
                } else {
                    Ok(PropertyValue::Choice(token.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Flag(v) => write!(f, "{v}"),
            PropertyValue::Number(v) => write!(f, "{v}"),
            PropertyValue::Color(v) => write!(f, "{v}"),
            PropertyValue::Choice(v) => f.write_str(v),
        }
    }
}
