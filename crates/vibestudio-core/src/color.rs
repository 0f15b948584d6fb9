//! Hex colors for palette definitions.
//!
//! Catalog colors are built with [`HexColor::new`], a `const fn` that rejects
//! malformed literals during constant evaluation. Runtime text goes through
//! [`HexColor::parse`] instead.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{StudioError, StudioResult};

/// An opaque sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Build a color from a `#rrggbb` literal.
    ///
    /// # Panics
    ///
    /// Panics when `value` is not a `#` followed by six hex digits. In a
    /// `const` context this is a compile error.
    pub const fn new(value: &str) -> Self {
        match decode(value.as_bytes()) {
            Some(color) => color,
            None => panic!("color literal must be #rrggbb"),
        }
    }

    /// Build a color from its channel bytes.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse user-supplied color text.
    pub fn parse(value: &str) -> StudioResult<Self> {
        decode(value.trim().as_bytes()).ok_or_else(|| StudioError::InvalidColor(value.to_string()))
    }

    /// The `(r, g, b)` channel bytes.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Render as `#rrggbbaa`, the eight-digit CSS form with an alpha channel.
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{:02x}", self, alpha)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const fn decode(bytes: &[u8]) -> Option<HexColor> {
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }
    let r = match byte_at(bytes, 1) {
        Some(v) => v,
        None => return None,
    };
    let g = match byte_at(bytes, 3) {
        Some(v) => v,
        None => return None,
    };
    let b = match byte_at(bytes, 5) {
        Some(v) => v,
        None => return None,
    };
    Some(HexColor { r, g, b })
}

const fn byte_at(bytes: &[u8], at: usize) -> Option<u8> {
    match (nibble(bytes[at]), nibble(bytes[at + 1])) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}

const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
