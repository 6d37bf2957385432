//! Styling configuration shared by every recognizer.
//!
//! A [`StylesConfiguration`] is immutable. Changing the look of a buffer
//! means building a new configuration and handing it to the storage, which
//! rebuilds its recognizers and re-styles everything.
//!
//! # Examples
//!
//! ```
//! use markstyle::{Font, StylesConfiguration};
//!
//! let config = StylesConfiguration::builder()
//!     .base_font(Font::system(16.0))
//!     .text_color_hex("#222222")
//!     .unwrap()
//!     .symbols_color_hex("#7f7f7f")
//!     .unwrap()
//!     .use_dynamic_sizing(false)
//!     .build();
//! assert_eq!(config.base_font().size, 16.0);
//! ```

use crate::color::Rgba;
use crate::error::Result;
use crate::style::{Attributes, Font};

/// Common look and feel of markdown text.
#[derive(Clone, Debug, PartialEq)]
pub struct StylesConfiguration {
    base_font: Font,
    text_color: Rgba,
    symbols_color: Rgba,
    links_color: Rgba,
    use_dynamic_sizing: bool,
}

impl StylesConfiguration {
    /// Create a configuration; links use [`Rgba::LIGHT_GRAY`].
    #[must_use]
    pub fn new(
        base_font: Font,
        text_color: Rgba,
        symbols_color: Rgba,
        use_dynamic_sizing: bool,
    ) -> Self {
        Self {
            base_font,
            text_color,
            symbols_color,
            links_color: Rgba::LIGHT_GRAY,
            use_dynamic_sizing,
        }
    }

    /// Create a configuration builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> StylesConfigurationBuilder {
        StylesConfigurationBuilder::default()
    }

    /// Base font used to display the markdown content.
    #[must_use]
    pub fn base_font(&self) -> &Font {
        &self.base_font
    }

    /// Default color for the markdown text.
    #[must_use]
    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    /// Color of the markdown symbols.
    #[must_use]
    pub fn symbols_color(&self) -> Rgba {
        self.symbols_color
    }

    /// Color of link text.
    #[must_use]
    pub fn links_color(&self) -> Rgba {
        self.links_color
    }

    #[must_use]
    pub fn use_dynamic_sizing(&self) -> bool {
        self.use_dynamic_sizing
    }

    /// Base font, marked dynamic when dynamic sizing is on.
    #[must_use]
    pub fn body_font(&self) -> Font {
        self.base_font.clone().dynamic_if(self.use_dynamic_sizing)
    }

    /// Attributes a region is reset to before it is re-styled.
    #[must_use]
    pub fn default_attributes(&self) -> Attributes {
        Attributes::new(self.body_font(), self.text_color)
    }
}

impl Default for StylesConfiguration {
    fn default() -> Self {
        Self::new(Font::system(14.0), Rgba::BLACK, Rgba::BLUE, true)
    }
}

/// Builder for [`StylesConfiguration`].
#[derive(Clone, Debug, Default)]
pub struct StylesConfigurationBuilder {
    config: StylesConfiguration,
}

impl StylesConfigurationBuilder {
    #[must_use]
    pub fn base_font(mut self, font: Font) -> Self {
        self.config.base_font = font;
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Rgba) -> Self {
        self.config.text_color = color;
        self
    }

    /// Set the text color from a hex string.
    pub fn text_color_hex(self, hex: &str) -> Result<Self> {
        Ok(self.text_color(hex.parse()?))
    }

    #[must_use]
    pub fn symbols_color(mut self, color: Rgba) -> Self {
        self.config.symbols_color = color;
        self
    }

    /// Set the symbols color from a hex string.
    pub fn symbols_color_hex(self, hex: &str) -> Result<Self> {
        Ok(self.symbols_color(hex.parse()?))
    }

    #[must_use]
    pub fn links_color(mut self, color: Rgba) -> Self {
        self.config.links_color = color;
        self
    }

    #[must_use]
    pub fn use_dynamic_sizing(mut self, enabled: bool) -> Self {
        self.config.use_dynamic_sizing = enabled;
        self
    }

    /// Build the final configuration.
    #[must_use]
    pub fn build(self) -> StylesConfiguration {
        self.config
    }
}
