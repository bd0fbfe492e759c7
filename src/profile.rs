//! Serializable theme profile: color table plus icon defaults.
//!
//! A [`ThemeProfile`] is the configuration surface of the crate. It is read
//! from JSON, turned into a [`ColorTable`] and a set of request defaults,
//! and can be exported back from a configured engine.
//!
//! # Example
//!
//! ```
//! use duotone_ui::{IconVariant, ThemeProfile};
//!
//! let profile = ThemeProfile::from_json(
//!     r#"{ "colors": { "red": "FF0000" }, "icon": { "primaryColor": "red" } }"#,
//! )
//! .unwrap();
//!
//! let table = profile.color_table().unwrap();
//! let request = profile.request(IconVariant::Tag);
//! assert_eq!(request.primary_color.as_str(), "red");
//! assert!(table.contains(&request.primary_color));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{ColorTable, ColorToken, Opacity};
use crate::error::RenderError;
use crate::icon::{Cursor, IconRenderRequest, IconVariant};

// ============================================================================
// IconDefaults
// ============================================================================

/// Request parameters applied when a caller only names a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconDefaults {
    #[serde(default)]
    pub primary_color: ColorToken,

    /// `None` lets the secondary slot reuse the primary token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<ColorToken>,

    #[serde(default = "default_primary_opacity")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub primary_opacity: Opacity,

    #[serde(default = "default_secondary_opacity")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub secondary_opacity: Opacity,

    #[serde(default)]
    pub cursor: Cursor,
}

impl Default for IconDefaults {
    fn default() -> Self {
        Self {
            primary_color: ColorToken::default(),
            secondary_color: None,
            primary_opacity: default_primary_opacity(),
            secondary_opacity: default_secondary_opacity(),
            cursor: Cursor::default(),
        }
    }
}

impl IconDefaults {
    /// Builds a request for `variant` with these defaults and no size.
    pub fn request(&self, variant: IconVariant) -> IconRenderRequest {
        IconRenderRequest {
            variant,
            width: None,
            height: None,
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            primary_opacity: self.primary_opacity,
            secondary_opacity: self.secondary_opacity,
            cursor: self.cursor,
        }
    }
}

fn default_primary_opacity() -> Opacity {
    Opacity::TINT
}

fn default_secondary_opacity() -> Opacity {
    Opacity::OPAQUE
}

// ============================================================================
// ThemeProfile
// ============================================================================

/// A serializable theme.
///
/// # JSON Format
///
/// ```json
/// {
///   "colors": { "red": "FF0000", "ink": "#111827" },
///   "icon": {
///     "primaryColor": "red",
///     "secondaryColor": "ink",
///     "primaryOpacity": "44",
///     "secondaryOpacity": "FF",
///     "cursor": "pointer"
///   }
/// }
/// ```
///
/// Without a `colors` object the built-in palette
/// ([`ColorTable::default_theme`]) is used. A `colors` object replaces the
/// palette entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ThemeProfile {
    /// Token to hex color map. `None` means the built-in palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub icon: IconDefaults,
}

impl ThemeProfile {
    /// Creates a profile using the built-in palette and default icon settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color, switching the profile to an explicit palette.
    pub fn with_color(mut self, token: impl Into<String>, hex: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(BTreeMap::new)
            .insert(token.into(), hex.into());
        self
    }

    /// Sets icon defaults.
    pub fn with_icon_defaults(mut self, defaults: IconDefaults) -> Self {
        self.icon = defaults;
        self
    }

    /// Builds the color table described by this profile.
    pub fn color_table(&self) -> Result<ColorTable, RenderError> {
        match &self.colors {
            Some(colors) => ColorTable::from_pairs(colors.iter().map(|(k, v)| (k.clone(), v))),
            None => Ok(ColorTable::default_theme()),
        }
    }

    /// Builds a request for `variant` using the profile's icon defaults.
    pub fn request(&self, variant: IconVariant) -> IconRenderRequest {
        self.icon.request(variant)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// JSON schema of the profile format.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ThemeProfile)
    }
}

// ============================================================================
// Tests
// ============================================================================
