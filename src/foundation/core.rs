use std::fmt;

use crate::foundation::error::{WeightboxError, WeightboxResult};

pub use kurbo::{Point, Rect, RoundedRect, Size};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as a hex string: `#RRGGBB` or `#AARRGGBB` (alpha first, matching the
/// color notation most UI toolkits accept in style sheets).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(0xff, 0xff, 0xff, 0xff);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0x00, 0x00, 0x00, 0xff);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from straight channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn parse_hex(s: &str) -> WeightboxResult<Self> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| WeightboxError::validation(format!("color '{s}' must start with '#'")))?;
        let byte = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| WeightboxError::validation(format!("invalid hex color '{s}'")))
        };
        match hex.len() {
            6 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, 0xff)),
            8 => Ok(Self::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(WeightboxError::validation(format!(
                "color '{s}' must be #RRGGBB or #AARRGGBB"
            ))),
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.a, self.r, self.g, self.b
        )
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = WeightboxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
