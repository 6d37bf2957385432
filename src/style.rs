//! Fonts and text attributes.
//!
//! This module provides the value types styling is expressed in:
//!
//! - [`FontTraits`]: Bitflags for bold, italic and monospace
//! - [`Font`]: Family, point size, traits and dynamic sizing
//! - [`AttributeKey`] / [`AttributeValue`]: One styling instruction
//! - [`Attributes`]: The resolved attribute set of a run of text
//!
//! # Examples
//!
//! ```
//! use markstyle::{Font, FontTraits};
//!
//! let body = Font::system(14.0);
//! let strong = body.clone().adding(FontTraits::BOLD);
//! let both = strong.adding(FontTraits::ITALIC);
//! assert!(both.traits.contains(FontTraits::BOLD | FontTraits::ITALIC));
//! ```

use bitflags::bitflags;

use crate::color::Rgba;

bitflags! {
    /// Symbolic font traits.
    ///
    /// Traits compose by union: applying bold to an italic run yields a
    /// bold italic run.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FontTraits: u8 {
        /// Heavier weight.
        const BOLD      = 0x01;
        /// Slanted.
        const ITALIC    = 0x02;
        /// Fixed advance width.
        const MONOSPACE = 0x04;
    }
}

/// Font family selector.
///
/// Concrete resolution to a platform face is the renderer's business.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Platform UI font.
    #[default]
    System,
    /// Platform fixed-width font.
    Monospace,
    /// A face by name, e.g. `"Menlo-Regular"`.
    Named(String),
}

/// A font request.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    pub traits: FontTraits,
    /// Scales with the user's preferred text size when rendered.
    pub dynamic: bool,
}

impl Font {
    /// Create a font with no traits.
    #[must_use]
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            traits: FontTraits::empty(),
            dynamic: false,
        }
    }

    /// Platform UI font at `size`.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self::new(FontFamily::System, size)
    }

    /// Platform monospace font at `size`.
    #[must_use]
    pub fn monospace(size: f32) -> Self {
        Self::new(FontFamily::Monospace, size).adding(FontTraits::MONOSPACE)
    }

    /// Union `traits` into this font's traits.
    #[must_use]
    pub fn adding(mut self, traits: FontTraits) -> Self {
        self.traits |= traits;
        self
    }

    /// Same font at another size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Mark as scaling with the preferred text size.
    #[must_use]
    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    /// `dynamic()` when `enabled`, unchanged otherwise.
    #[must_use]
    pub fn dynamic_if(self, enabled: bool) -> Self {
        if enabled { self.dynamic() } else { self }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(14.0)
    }
}

/// Kind of styling instruction carried by a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Traits to union into the font already in place.
    FontTraits,
    ForegroundColor,
    Strikethrough,
    /// Font substitution (family and size replace, traits accumulate).
    Font,
    /// Link target.
    Link,
}

/// Payload of a styling instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    FontTraits(FontTraits),
    ForegroundColor(Rgba),
    Strikethrough(bool),
    Font(Font),
    Link(String),
}

impl AttributeValue {
    /// The key this value belongs to.
    #[must_use]
    pub const fn key(&self) -> AttributeKey {
        match self {
            Self::FontTraits(_) => AttributeKey::FontTraits,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::Strikethrough(_) => AttributeKey::Strikethrough,
            Self::Font(_) => AttributeKey::Font,
            Self::Link(_) => AttributeKey::Link,
        }
    }
}

/// Resolved attributes of a run of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    pub font: Option<Font>,
    pub foreground: Option<Rgba>,
    pub strikethrough: bool,
    pub link: Option<String>,
}

impl Attributes {
    /// Attributes with a font and a foreground color.
    #[must_use]
    pub fn new(font: Font, foreground: Rgba) -> Self {
        Self {
            font: Some(font),
            foreground: Some(foreground),
            strikethrough: false,
            link: None,
        }
    }

    /// Store `value`, overwriting the slot it addresses.
    ///
    /// `FontTraits` unions into the current font and is a no-op without one;
    /// callers that must fail loudly check for a font first.
    pub fn set(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::FontTraits(traits) => {
                if let Some(font) = self.font.take() {
                    self.font = Some(font.adding(traits));
                }
            }
            AttributeValue::ForegroundColor(color) => self.foreground = Some(color),
            AttributeValue::Strikethrough(on) => self.strikethrough = on,
            AttributeValue::Font(font) => self.font = Some(font),
            AttributeValue::Link(target) => self.link = Some(target),
        }
    }

    /// Traits of the current font, empty when there is none.
    #[must_use]
    pub fn traits(&self) -> FontTraits {
        self.font
            .as_ref()
            .map_or(FontTraits::empty(), |font| font.traits)
    }
}
