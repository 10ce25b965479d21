//! Hex color parsing and formatting.

use std::fmt;

use ft_palette::{PaletteError, Result};

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a 6-hex-digit color string, case-insensitive, with an optional
    /// leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColorFormat`] for anything that is not
    /// exactly 6 hex digits after the optional `#`.
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColorFormat(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| PaletteError::InvalidColorFormat(value.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(
            Rgb::parse("#990f3d").unwrap(),
            Rgb {
                r: 0x99,
                g: 0x0f,
                b: 0x3d
            }
        );
        assert_eq!(Rgb::parse("990f3d").unwrap(), Rgb::parse("#990f3d").unwrap());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Rgb::parse("#FFF1E5").unwrap(), Rgb::parse("#fff1e5").unwrap());
    }

    #[test]
    fn rejects_short_and_long_strings() {
        assert!(Rgb::parse("#fff").is_err());
        assert!(Rgb::parse("#fff1e5ff").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(Rgb::parse("#gggggg").is_err());
        assert!(Rgb::parse("rgba(204, 0, 0, 0.06)").is_err());
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Rgb::parse("#FFF1E5").unwrap().to_string(), "#fff1e5");
    }
}
