//! Injected localization and theming lookups.

use serde::Serialize;

/// RGB color resolved from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Unpacks a `0xRRGGBB` value, the form theme files store colors in.
    pub const fn from_rgb_value(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xff) as u8,
            green: ((value >> 8) & 0xff) as u8,
            blue: (value & 0xff) as u8,
        }
    }
}

/// Resolves localized strings and theme colors for the presentation layer.
///
/// Passed to view constructors explicitly; views re-query it when the theme
/// is reloaded.
pub trait ResourceProvider: Send + Sync {
    /// Localized string for `key`. Implementations return the key itself
    /// when no translation exists.
    fn i18n_string(&self, key: &str) -> String;

    /// Theme color for `key`, if the active theme defines one.
    fn color(&self, key: &str) -> Option<Color>;
}
