//! Icon rendering engine.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::color::{ColorTable, ColorToken, Opacity};
use crate::error::RenderError;
use crate::icon::{Cursor, DisplaySize, IconDrawing, IconRenderRequest, IconVariant};
use crate::layer::{layers_for, SlotColors};
use crate::profile::{IconDefaults, ThemeProfile};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`ThemeProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &ThemeProfile) -> Result<(), RenderError>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> ThemeProfile;
}

// ============================================================================
// IconEngine
// ============================================================================

/// Turns [`IconRenderRequest`]s into [`IconDrawing`]s.
///
/// Rendering is a pure function of the request and the color table: the
/// same input always yields an equal drawing, and `render` never mutates the
/// engine.
///
/// # Example
///
/// ```
/// use duotone_ui::{ColorTable, IconEngine, IconRenderRequest, IconVariant, Opacity};
///
/// let colors = ColorTable::from_pairs([("red", "FF0000")]).unwrap();
/// let engine = IconEngine::new(colors);
///
/// let drawing = engine
///     .render(&IconRenderRequest::new(IconVariant::Circle).with_primary("red").with_width(100.0))
///     .unwrap();
///
/// assert_eq!(drawing.display_height(), 100.0);
/// assert_eq!(drawing.layers[0].fill.as_str(), "FF000044");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IconEngine {
    colors: ColorTable,
    defaults: IconDefaults,
}

impl Default for IconEngine {
    fn default() -> Self {
        Self::new(ColorTable::default_theme())
    }
}

impl IconEngine {
    /// Creates an engine over `colors` with default request settings.
    pub fn new(colors: ColorTable) -> Self {
        Self {
            colors,
            defaults: IconDefaults::default(),
        }
    }

    /// Creates an engine from a theme profile.
    pub fn from_profile(profile: &ThemeProfile) -> Result<Self, RenderError> {
        Ok(Self {
            colors: profile.color_table()?,
            defaults: profile.icon.clone(),
        })
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn defaults(&self) -> &IconDefaults {
        &self.defaults
    }

    /// A request for `variant` carrying this engine's defaults.
    pub fn request(&self, variant: IconVariant) -> IconRenderRequest {
        self.defaults.request(variant)
    }

    /// Renders one icon.
    ///
    /// Fails only when a color token is missing from the table.
    pub fn render(&self, request: &IconRenderRequest) -> Result<IconDrawing, RenderError> {
        let view_box = request.variant.view_box();
        let size = DisplaySize::infer(view_box, request.width, request.height);

        let colors = SlotColors {
            primary: self
                .colors
                .compose(&request.primary_color, request.primary_opacity)?,
            secondary: self
                .colors
                .compose(request.effective_secondary(), request.secondary_opacity)?,
            explicit_secondary: request.secondary_color.is_some(),
        };

        let layers = layers_for(request.variant)
            .iter()
            .map(|spec| spec.paint(&colors))
            .collect();

        trace!(
            variant = %request.variant,
            width = size.width,
            height = size.height,
            "rendered icon"
        );

        Ok(IconDrawing {
            variant: request.variant,
            view_box,
            display: size,
            cursor: request.cursor,
            layers,
        })
    }

    /// Renders an icon by name using the engine defaults.
    ///
    /// Names outside the variant set fail with [`RenderError::UnknownVariant`].
    pub fn render_named(&self, name: &str) -> Result<IconDrawing, RenderError> {
        let variant: IconVariant = name.parse()?;
        self.render(&self.request(variant))
    }

    /// Renders every variant with the parameters of `template`.
    pub fn render_all(&self, template: &IconRenderRequest) -> Result<Vec<IconDrawing>, RenderError> {
        IconVariant::ALL
            .iter()
            .map(|variant| {
                self.render(&IconRenderRequest {
                    variant: *variant,
                    ..template.clone()
                })
            })
            .collect()
    }

    /// Replaces the color table.
    pub fn set_colors(&mut self, colors: ColorTable) {
        self.colors = colors;
    }
}

impl Configurable for IconEngine {
    fn apply_profile(&mut self, profile: &ThemeProfile) -> Result<(), RenderError> {
        let colors = profile.color_table()?;
        self.colors = colors;
        self.defaults = profile.icon.clone();
        Ok(())
    }

    fn export_profile(&self) -> ThemeProfile {
        let colors = self
            .colors
            .iter()
            .map(|(token, base)| (token.to_string(), base.hex().to_string()))
            .collect();

        ThemeProfile {
            colors: Some(colors),
            icon: self.defaults.clone(),
        }
    }
}

// ============================================================================
// RenderKey
// ============================================================================

/// Key for memoized drawings: the full request tuple.
///
/// Sizes are keyed by their bit patterns, so `Some(24.0)` and `None` never
/// collide even when they render to the same size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderKey {
    variant: IconVariant,
    width_bits: Option<u32>,
    height_bits: Option<u32>,
    primary_color: ColorToken,
    secondary_color: Option<ColorToken>,
    primary_opacity: Opacity,
    secondary_opacity: Opacity,
    cursor: Cursor,
}

impl RenderKey {
    pub fn from_request(request: &IconRenderRequest) -> Self {
        Self {
            variant: request.variant,
            width_bits: request.width.map(f32::to_bits),
            height_bits: request.height.map(f32::to_bits),
            primary_color: request.primary_color.clone(),
            secondary_color: request.secondary_color.clone(),
            primary_opacity: request.primary_opacity,
            secondary_opacity: request.secondary_opacity,
            cursor: request.cursor,
        }
    }
}

// ============================================================================
// CachedIconEngine
// ============================================================================

/// An [`IconEngine`] that memoizes drawings per request.
///
/// Icons are requested many times with identical parameters across a view
/// tree. The cache holds one drawing per distinct [`RenderKey`] and is
/// dropped whenever the configuration changes; the version counter
/// increments on every such change.
///
/// The cache is unbounded. Every distinct width or height adds an entry, and
/// nothing is evicted until the configuration changes or
/// [`clear_cache`](Self::clear_cache) is called. Callers rendering arbitrary
/// sizes should clear it periodically.
#[derive(Debug, Default)]
pub struct CachedIconEngine {
    engine: IconEngine,
    version: u64,
    cache: HashMap<RenderKey, IconDrawing>,
}

impl CachedIconEngine {
    pub fn new(engine: IconEngine) -> Self {
        Self {
            engine,
            version: 0,
            cache: HashMap::new(),
        }
    }

    pub fn engine(&self) -> &IconEngine {
        &self.engine
    }

    /// Returns the current version number.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of memoized drawings.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Renders through the cache. Errors are not cached.
    pub fn render(&mut self, request: &IconRenderRequest) -> Result<IconDrawing, RenderError> {
        let key = RenderKey::from_request(request);

        if let Some(cached) = self.cache.get(&key) {
            debug!(variant = %request.variant, "icon cache hit");
            return Ok(cached.clone());
        }

        debug!(variant = %request.variant, "icon cache miss");
        let drawing = self.engine.render(request)?;
        self.cache.insert(key, drawing.clone());
        Ok(drawing)
    }

    /// Replaces the color table and drops every cached drawing.
    pub fn set_colors(&mut self, colors: ColorTable) {
        self.engine.set_colors(colors);
        self.invalidate();
    }

    /// Clears the cache. Useful for freeing memory.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.cache.clear();
    }
}

impl Configurable for CachedIconEngine {
    fn apply_profile(&mut self, profile: &ThemeProfile) -> Result<(), RenderError> {
        self.engine.apply_profile(profile)?;
        self.invalidate();
        Ok(())
    }

    fn export_profile(&self) -> ThemeProfile {
        self.engine.export_profile()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::ViewBox;

    fn test_engine() -> IconEngine {
        IconEngine::new(
            ColorTable::from_pairs([("red", "FF0000"), ("blue", "0000FF"), ("ink", "111827")])
                .unwrap(),
        )
    }

    fn circle() -> IconRenderRequest {
        IconRenderRequest::new(IconVariant::Circle).with_primary("red")
    }

    #[test]
    fn every_variant_renders_with_defaults() {
        let engine = IconEngine::default();

        for variant in IconVariant::ALL {
            let drawing = engine.render(&IconRenderRequest::new(*variant)).unwrap();
            assert!(!drawing.layers.is_empty(), "{variant} rendered no layers");
            assert_eq!(drawing.view_box, ViewBox::CANONICAL);
            assert_eq!(drawing.view_box.width, 512.0);
            assert_eq!(drawing.view_box.height, 512.0);
        }
    }

    #[test]
    fn dimension_inference() {
        let engine = test_engine();

        let d = engine.render(&circle().with_width(100.0)).unwrap();
        assert_eq!((d.display_width(), d.display_height()), (100.0, 100.0));

        let d = engine.render(&circle().with_height(200.0)).unwrap();
        assert_eq!((d.display_width(), d.display_height()), (200.0, 200.0));

        let d = engine.render(&circle()).unwrap();
        assert_eq!((d.display_width(), d.display_height()), (512.0, 512.0));

        let d = engine.render(&circle().with_size(50.0, 80.0)).unwrap();
        assert_eq!((d.display_width(), d.display_height()), (50.0, 80.0));
    }

    #[test]
    fn primary_composition() {
        let engine = test_engine();
        let drawing = engine
            .render(&circle().with_primary_opacity(Opacity::new("44").unwrap()))
            .unwrap();

        assert_eq!(drawing.layers.len(), 1);
        assert_eq!(drawing.layers[0].fill.as_str(), "FF000044");
    }

    #[test]
    fn compound_icon_uses_both_slots() {
        let engine = test_engine();
        let drawing = engine
            .render(
                &IconRenderRequest::new(IconVariant::CheckCircle)
                    .with_primary("red")
                    .with_secondary("blue")
                    .with_secondary_opacity(Opacity::new("80").unwrap()),
            )
            .unwrap();

        let fills: Vec<_> = drawing.layers.iter().map(|l| l.fill.as_str()).collect();
        assert_eq!(fills, ["0000FF80", "FF000044"]);
    }

    #[test]
    fn secondary_defaults_to_primary_token() {
        let engine = test_engine();
        let drawing = engine
            .render(&IconRenderRequest::new(IconVariant::Radio).with_primary("red"))
            .unwrap();

        let fills: Vec<_> = drawing.layers.iter().map(|l| l.fill.as_str()).collect();
        assert_eq!(fills, ["FF0000FF", "FF000044"]);
    }

    #[test]
    fn github_falls_back_to_primary_without_secondary() {
        let engine = test_engine();

        let implicit = engine
            .render(&IconRenderRequest::new(IconVariant::Github).with_primary("ink"))
            .unwrap();
        assert_eq!(implicit.layers.len(), 1);
        assert_eq!(implicit.layers[0].fill.as_str(), "11182744");

        let explicit = engine
            .render(
                &IconRenderRequest::new(IconVariant::Github)
                    .with_primary("ink")
                    .with_secondary("blue"),
            )
            .unwrap();
        assert_eq!(explicit.layers[0].fill.as_str(), "0000FFFF");
    }

    #[test]
    fn unknown_color_token_fails() {
        let engine = test_engine();
        let err = engine
            .render(&IconRenderRequest::new(IconVariant::Tag).with_primary("chartreuse"))
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownColorToken(ref t) if t == "chartreuse"));

        let err = engine
            .render(&circle().with_secondary("mauve"))
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownColorToken(ref t) if t == "mauve"));
    }

    #[test]
    fn render_named_rejects_unknown_variant() {
        let engine = IconEngine::default();
        assert!(engine.render_named("cloud-check").is_ok());
        assert!(matches!(
            engine.render_named("cloud-rain"),
            Err(RenderError::UnknownVariant(_))
        ));
    }

    #[test]
    fn render_is_idempotent() {
        let engine = test_engine();
        let request = IconRenderRequest::new(IconVariant::CloudBinary)
            .with_primary("red")
            .with_secondary("blue")
            .with_width(32.0);

        let first = engine.render(&request).unwrap();
        let second = engine.render(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_svg(), second.to_svg());
    }

    #[test]
    fn render_all_covers_every_variant() {
        let engine = test_engine();
        let drawings = engine.render_all(&circle().with_width(16.0)).unwrap();

        assert_eq!(drawings.len(), IconVariant::ALL.len());
        for (drawing, variant) in drawings.iter().zip(IconVariant::ALL) {
            assert_eq!(drawing.variant, *variant);
            assert_eq!(drawing.display_width(), 16.0);
        }
    }

    #[test]
    fn profile_round_trip_through_engine() {
        let profile = ThemeProfile::new()
            .with_color("red", "FF0000")
            .with_icon_defaults(IconDefaults {
                primary_color: "red".into(),
                ..IconDefaults::default()
            });

        let mut engine = IconEngine::default();
        engine.apply_profile(&profile).unwrap();
        assert_eq!(engine.colors().len(), 1);

        let drawing = engine.render_named("circle").unwrap();
        assert_eq!(drawing.layers[0].fill.as_str(), "FF000044");

        assert_eq!(engine.export_profile(), profile);
    }

    #[test]
    fn failed_profile_leaves_engine_unchanged() {
        let mut engine = test_engine();
        let before = engine.clone();

        let bad = ThemeProfile::new().with_color("red", "#12");
        assert!(engine.apply_profile(&bad).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn cache_reuse_same_request() {
        let mut cached = CachedIconEngine::new(test_engine());

        let first = cached.render(&circle().with_width(24.0)).unwrap();
        let second = cached.render(&circle().with_width(24.0)).unwrap();
        assert_eq!(first, second);
        assert_eq!(cached.cached_len(), 1);

        // Same output size, different request tuple
        cached.render(&circle().with_size(24.0, 24.0)).unwrap();
        assert_eq!(cached.cached_len(), 2);
    }

    #[test]
    fn cache_matches_uncached_output() {
        let engine = test_engine();
        let mut cached = CachedIconEngine::new(engine.clone());
        let request = IconRenderRequest::new(IconVariant::Tags)
            .with_primary("blue")
            .with_height(48.0);

        assert_eq!(cached.render(&request).unwrap(), engine.render(&request).unwrap());
        assert_eq!(cached.render(&request).unwrap(), engine.render(&request).unwrap());
    }

    #[test]
    fn cache_invalidation_on_color_change() {
        let mut cached = CachedIconEngine::new(test_engine());
        let before = cached.render(&circle()).unwrap();
        assert_eq!(cached.version(), 0);

        cached.set_colors(ColorTable::from_pairs([("red", "AA0000")]).unwrap());
        assert_eq!(cached.version(), 1);
        assert_eq!(cached.cached_len(), 0);

        let after = cached.render(&circle()).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.layers[0].fill.as_str(), "AA000044");
    }

    #[test]
    fn cache_skips_errors() {
        let mut cached = CachedIconEngine::new(test_engine());
        assert!(cached.render(&circle().with_primary("nope")).is_err());
        assert_eq!(cached.cached_len(), 0);
    }

    #[test]
    fn cache_grows_per_size_until_cleared() {
        let mut cached = CachedIconEngine::new(test_engine());
        for width in [16.0, 24.0, 32.0, 48.0] {
            cached.render(&circle().with_width(width)).unwrap();
        }
        assert_eq!(cached.cached_len(), 4);

        cached.clear_cache();
        assert_eq!(cached.cached_len(), 0);
        assert_eq!(cached.version(), 0);
    }

    #[test]
    fn render_reports_inferred_size() {
        let drawing = test_engine()
            .render(&circle().with_height(40.0))
            .unwrap();
        assert_eq!(drawing.display.width, 40.0);
        assert_eq!(drawing.display.height, 40.0);
    }
}
