use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// An RGBA color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    /// The valid range of values for each component
    const COMPONENT_RANGE: RangeInclusive<f32> = 0.0..=1.0;

    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Create a new color. Returns an error if any of the components are out
    /// of the range [0.0, 1.0].
    pub fn new(
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
    ) -> anyhow::Result<Self> {
        fn check_component(
            component_name: &str,
            value: f32,
        ) -> anyhow::Result<f32> {
            if Color::COMPONENT_RANGE.contains(&value) {
                Ok(value)
            } else {
                Err(anyhow!(
                    "Color component {} must be in {:?}, but was {}",
                    component_name,
                    Color::COMPONENT_RANGE,
                    value
                ))
            }
        }

        Ok(Self {
            red: check_component("red", red)?,
            green: check_component("green", green)?,
            blue: check_component("blue", blue)?,
            alpha: check_component("alpha", alpha)?,
        })
    }

    /// Create a new opaque color from integer components in the [0,255]
    /// range.
    pub fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Read a color from a hex string like `#FFE7CC`. This never fails:
    /// surrounding whitespace and a leading `#` (or `0x`) are skipped, then
    /// as many hex digits as are present are read and the low 24 bits taken
    /// as `rrggbb`. Input without any leading hex digits comes out black.
    /// Alpha is always 1.
    ///
    /// Use [is_hex_color] to check a string up front.
    pub fn from_hex(hex: &str) -> Self {
        let upper = hex.trim().to_uppercase();
        let digits = upper.strip_prefix('#').unwrap_or(&upper);
        let digits = digits.strip_prefix("0X").unwrap_or(digits);
        // Saturate rather than wrap on absurdly long input
        let value = digits
            .chars()
            .map_while(|c| c.to_digit(16))
            .fold(0u64, |acc, digit| {
                acc.saturating_mul(16).saturating_add(u64::from(digit))
            });

        Self::new_int(
            ((value & 0xFF0000) >> 16) as u8,
            ((value & 0x00FF00) >> 8) as u8,
            (value & 0x0000FF) as u8,
        )
    }

    /// Convert this color to a set of 3 bytes: `(red, green, blue)`
    pub fn to_ints(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Convert this color to an HTML color code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Is this exactly 6 hex digits, optionally preceded by `#`? Surrounding
/// whitespace is allowed.
pub fn is_hex_color(hex: &str) -> bool {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
