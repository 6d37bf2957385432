//! RGBA colors used for text and symbol tinting.
//!
//! Colors are stored as 8-bit channels so attribute runs can compare and
//! hash them exactly; adjacent runs with equal colors coalesce.
//!
//! # Examples
//!
//! ```
//! use markstyle::Rgba;
//!
//! let accent = Rgba::from_hex("#1e90ff").unwrap();
//! assert_eq!(accent.to_string(), "#1e90ff");
//!
//! let faded = Rgba::BLUE.with_alpha(128);
//! assert!(!faded.is_opaque());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque light gray, the default link color.
    pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, idx) in out.iter_mut().zip(0..3) {
                    *slot = channel(&hex[idx..=idx])? * 17;
                }
                Some(Self::rgb(out[0], out[1], out[2]))
            }
            6 | 8 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    channel(&hex[6..8])?
                } else {
                    255
                };
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Return this color with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if this color is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Rgba::from_hex("#f00"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("0000ff"), Some(Rgba::BLUE));
        assert_eq!(
            Rgba::from_hex("#11223344"),
            Some(Rgba::new(0x11, 0x22, 0x33, 0x44))
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#12"), None);
        assert_eq!(Rgba::from_hex("#gggggg"), None);
        // Multi-byte input must not panic on slicing.
        assert_eq!(Rgba::from_hex("é12"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<Rgba>().unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "nope"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::LIGHT_GRAY.to_string(), "#aaaaaa");
        assert_eq!(Rgba::BLACK.with_alpha(0x80).to_string(), "#00000080");
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(r: u8, g: u8, b: u8, a: u8) {
            let color = Rgba::new(r, g, b, a);
            prop_assert_eq!(Rgba::from_hex(&color.to_string()), Some(color));
        }

        #[test]
        fn from_hex_never_panics(s in "\\PC{0,12}") {
            let _ = Rgba::from_hex(&s);
        }
    }
}
