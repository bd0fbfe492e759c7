//! Color tokens, opacity suffixes and the table that resolves them.
//!
//! Icons never carry literal colors. A request names a [`ColorToken`] and an
//! [`Opacity`]; the [`ColorTable`] resolves the token to a base hex value and
//! the opacity is appended verbatim, giving a [`ComposedColor`] such as
//! `FF000044`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::RenderError;

/// Token used for both color slots when a request does not name one.
pub const DEFAULT_TOKEN: &str = "purple-secondary";

// ============================================================================
// ColorToken
// ============================================================================

/// A symbolic color name, resolved through a [`ColorTable`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColorToken {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// ============================================================================
// Opacity
// ============================================================================

/// A two hex character alpha suffix such as `"44"` or `"FF"`.
///
/// The characters are kept exactly as given so composition stays verbatim;
/// only their shape is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Opacity {
    raw: [u8; 2],
    value: u8,
}

impl Opacity {
    /// Fully opaque, the default for the secondary slot.
    pub const OPAQUE: Self = Self {
        raw: *b"FF",
        value: 0xFF,
    };

    /// Default alpha of the primary slot.
    pub const TINT: Self = Self {
        raw: *b"44",
        value: 0x44,
    };

    pub fn new(suffix: &str) -> Result<Self, RenderError> {
        let bytes = suffix.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(RenderError::InvalidOpacity(suffix.to_string()));
        }
        let value = u8::from_str_radix(suffix, 16)
            .map_err(|_| RenderError::InvalidOpacity(suffix.to_string()))?;
        Ok(Self {
            raw: [bytes[0], bytes[1]],
            value,
        })
    }

    /// Numeric alpha, `0x00..=0xFF`.
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.raw[0] as char, self.raw[1] as char)
    }
}

impl FromStr for Opacity {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Opacity {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Opacity> for String {
    fn from(opacity: Opacity) -> Self {
        opacity.to_string()
    }
}

// ============================================================================
// BaseColor / ComposedColor
// ============================================================================

/// A color table entry: the hex text as configured plus its parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColor {
    hex: String,
    rgb: Srgb<u8>,
}

impl BaseColor {
    /// Parses a six digit hex color, with or without a leading `#`.
    pub fn parse(token: &str, hex: &str) -> Result<Self, RenderError> {
        let invalid = || RenderError::InvalidBaseColor {
            token: token.to_string(),
            value: hex.to_string(),
        };

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = Srgb::<u8>::from_str(digits).map_err(|_| invalid())?;

        Ok(Self {
            hex: hex.to_string(),
            rgb,
        })
    }

    /// The hex text exactly as configured.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }
}

/// A base color with its opacity suffix appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedColor {
    value: String,
    rgba: Srgba<u8>,
}

impl ComposedColor {
    pub fn compose(base: &BaseColor, opacity: Opacity) -> Self {
        let rgb = base.rgb();
        Self {
            value: format!("{}{}", base.hex(), opacity),
            rgba: Srgba::new(rgb.red, rgb.green, rgb.blue, opacity.value()),
        }
    }

    /// The composed text, e.g. `FF000044`.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn rgba(&self) -> Srgba<u8> {
        self.rgba
    }

    /// The opaque part as a CSS `#RRGGBB` value.
    pub fn rgb_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            self.rgba.red, self.rgba.green, self.rgba.blue
        )
    }

    /// Alpha as a `0.0..=1.0` ratio, for `fill-opacity`.
    pub fn alpha_ratio(&self) -> f32 {
        f32::from(self.rgba.alpha) / 255.0
    }
}

impl fmt::Display for ComposedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for ComposedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

// ============================================================================
// ColorTable
// ============================================================================

/// Resolves [`ColorToken`]s to base colors.
///
/// Lookups are strict: a token missing from the table is an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: BTreeMap<ColorToken, BaseColor>,
}

impl ColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The palette shipped with the crate.
    pub fn default_theme() -> Self {
        const THEME: &[(&str, &str)] = &[
            ("purple-primary", "6D28D9"),
            ("purple-secondary", "8B5CF6"),
            ("white", "FFFFFF"),
            ("black", "000000"),
            ("gray-1", "F9FAFB"),
            ("gray-2", "E5E7EB"),
            ("gray-3", "D1D5DB"),
            ("gray-4", "9CA3AF"),
            ("gray-5", "6B7280"),
            ("gray-6", "374151"),
            ("red", "EF4444"),
            ("green", "22C55E"),
            ("orange", "F97316"),
        ];

        let entries = THEME
            .iter()
            .filter_map(|(token, hex)| {
                BaseColor::parse(token, hex)
                    .ok()
                    .map(|base| (ColorToken::from(*token), base))
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from `token -> hex` pairs, rejecting malformed colors.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (token, hex) in pairs {
            table.insert(token, hex.as_ref())?;
        }
        Ok(table)
    }

    /// Adds or replaces a token.
    pub fn insert(&mut self, token: impl Into<String>, hex: &str) -> Result<(), RenderError> {
        let token = ColorToken::new(token);
        let base = BaseColor::parse(token.as_str(), hex)?;
        self.entries.insert(token, base);
        Ok(())
    }

    pub fn resolve(&self, token: &ColorToken) -> Result<&BaseColor, RenderError> {
        self.entries
            .get(token)
            .ok_or_else(|| RenderError::UnknownColorToken(token.to_string()))
    }

    /// Resolves `token` and appends `opacity`.
    pub fn compose(
        &self,
        token: &ColorToken,
        opacity: Opacity,
    ) -> Result<ComposedColor, RenderError> {
        Ok(ComposedColor::compose(self.resolve(token)?, opacity))
    }

    pub fn contains(&self, token: &ColorToken) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColorToken, &BaseColor)> {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_appends_suffix_verbatim() {
        let table = ColorTable::from_pairs([("red", "FF0000")]).unwrap();
        let color = table
            .compose(&"red".into(), Opacity::new("44").unwrap())
            .unwrap();

        assert_eq!(color.as_str(), "FF000044");
        assert_eq!(color.rgb_hex(), "#FF0000");
        assert_eq!(color.rgba().alpha, 0x44);
    }

    #[test]
    fn compose_keeps_hash_and_case() {
        let table = ColorTable::from_pairs([("accent", "#a1B2c3")]).unwrap();
        let color = table
            .compose(&"accent".into(), Opacity::new("aB").unwrap())
            .unwrap();

        assert_eq!(color.as_str(), "#a1B2c3aB");
        assert_eq!(color.rgb_hex(), "#A1B2C3");
        assert_eq!(color.rgba().alpha, 0xAB);
    }

    #[test]
    fn unknown_token_is_an_error() {
        let table = ColorTable::default_theme();
        let err = table.resolve(&"no-such-color".into()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownColorToken(ref t) if t == "no-such-color"));
    }

    #[test]
    fn opacity_shape_is_checked() {
        assert!(Opacity::new("FF").is_ok());
        assert!(Opacity::new("0a").is_ok());
        assert!(matches!(Opacity::new("F"), Err(RenderError::InvalidOpacity(_))));
        assert!(matches!(Opacity::new("FFF"), Err(RenderError::InvalidOpacity(_))));
        assert!(matches!(Opacity::new("GG"), Err(RenderError::InvalidOpacity(_))));
        assert!(matches!(Opacity::new("+F"), Err(RenderError::InvalidOpacity(_))));
    }

    #[test]
    fn opacity_constants_match_parsed_values() {
        assert_eq!(Opacity::new("FF").unwrap(), Opacity::OPAQUE);
        assert_eq!(Opacity::new("44").unwrap(), Opacity::TINT);
        assert_eq!(Opacity::TINT.to_string(), "44");
    }

    #[test]
    fn base_colors_must_have_six_digits() {
        assert!(BaseColor::parse("short", "F00").is_err());
        assert!(BaseColor::parse("long", "FF000000").is_err());
        assert!(BaseColor::parse("junk", "ZZZZZZ").is_err());
        assert!(matches!(
            BaseColor::parse("accent", "a\u{e9}\u{e9}b"),
            Err(RenderError::InvalidBaseColor { ref token, .. }) if token == "accent"
        ));
        assert!(BaseColor::parse("ok", "#00ff00").is_ok());
    }

    #[test]
    fn default_theme_contains_default_token() {
        let table = ColorTable::default_theme();
        assert!(table.contains(&ColorToken::default()));
        assert_eq!(table.len(), 13);
    }
}
