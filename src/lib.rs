//! duotone-ui: dual-tone icons and a responsive navigation shell
//!
//! This crate provides the presentation primitives of a web front-end: an
//! engine that turns icon requests into fully resolved dual-tone SVG
//! drawings, and a view model for a navigation bar that reacts to session,
//! login providers and viewport size.
//!
//! # Icons
//!
//! ```
//! use duotone_ui::{ColorTable, IconEngine, IconRenderRequest, IconVariant, Opacity};
//!
//! let colors = ColorTable::from_pairs([("red", "FF0000"), ("ink", "111827")]).unwrap();
//! let engine = IconEngine::new(colors);
//!
//! let request = IconRenderRequest::new(IconVariant::CheckCircle)
//!     .with_width(24.0)
//!     .with_primary("red")
//!     .with_secondary("ink")
//!     .with_primary_opacity(Opacity::OPAQUE);
//!
//! let drawing = engine.render(&request).unwrap();
//! assert_eq!((drawing.display_width(), drawing.display_height()), (24.0, 24.0));
//! assert_eq!(drawing.layers.len(), 2);
//!
//! let svg = drawing.to_svg();
//! assert!(svg.contains(r#"viewBox="0 0 512 512""#));
//! ```
//!
//! # Themes
//!
//! Colors and request defaults can be loaded from a JSON [`ThemeProfile`]
//! with the [`Configurable`] trait:
//!
//! ```
//! use duotone_ui::{Configurable, IconEngine, ThemeProfile};
//!
//! let mut engine = IconEngine::default();
//! let profile = ThemeProfile::from_json(r#"{ "colors": { "purple-secondary": "7C3AED" } }"#).unwrap();
//! engine.apply_profile(&profile).unwrap();
//!
//! let drawing = engine.render_named("tag").unwrap();
//! assert_eq!(drawing.layers[0].fill.as_str(), "7C3AED44");
//! ```
//!
//! # Navigation
//!
//! See [`nav`] for the navigation shell.

mod color;
mod engine;
mod error;
mod icon;
mod layer;
pub mod nav;
mod profile;

pub use color::{BaseColor, ColorTable, ColorToken, ComposedColor, Opacity, DEFAULT_TOKEN};
pub use engine::{CachedIconEngine, Configurable, IconEngine, RenderKey};
pub use error::RenderError;
pub use icon::{
    Cursor, DisplaySize, IconDrawing, IconRenderRequest, IconVariant, PathLayer, ViewBox,
};
pub use layer::svg::{rasterize, to_svg};
pub use layer::{layers_for, ColorSlot, LayerSpec, SlotColors};
pub use profile::{IconDefaults, ThemeProfile};
