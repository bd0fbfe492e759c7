//! Icon types: the closed variant set, render requests and drawings.
//!
//! An [`IconRenderRequest`] names a variant plus optional sizing and color
//! parameters. Rendering it produces an [`IconDrawing`], a fully resolved
//! description of the SVG to emit.

use std::fmt;
use std::str::FromStr;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::{ColorToken, ComposedColor, Opacity};
use crate::error::RenderError;
use crate::layer::svg;

// ============================================================================
// IconVariant
// ============================================================================

macro_rules! icon_variants {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)+) => {
        /// Every icon the engine can draw.
        ///
        /// The set is closed. Adding a variant means adding its path table
        /// entry in [`layers_for`](crate::layer::layers_for), which the
        /// exhaustive match there enforces.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[derive(Serialize, Deserialize)]
        #[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
        #[serde(rename_all = "kebab-case")]
        pub enum IconVariant {
            $($(#[$meta])* $variant,)+
        }

        impl IconVariant {
            /// All variants, in declaration order.
            pub const ALL: &'static [IconVariant] = &[
                $(IconVariant::$variant,)+
            ];

            /// The kebab-case identifier, e.g. `cloud-arrow-up`.
            pub fn name(self) -> &'static str {
                match self {
                    $(IconVariant::$variant => $name,)+
                }
            }
        }
    };
}

icon_variants! {
    CheckCircle => "check-circle",
    #[default]
    CheckSquare => "check-square",
    Radio => "radio",
    Circle => "circle",
    Square => "square",
    Tick => "tick",
    Cloud => "cloud",
    CloudArrowUp => "cloud-arrow-up",
    CloudCheck => "cloud-check",
    CloudBinary => "cloud-binary",
    Clipboard => "clipboard",
    ClipboardCheck => "clipboard-check",
    Tag => "tag",
    Tags => "tags",
    UpRightFromSquare => "up-right-from-square",
    Link => "link",
    MessageLines => "message-lines",
    Brush => "brush",
    Trash => "trash",
    TrashCheck => "trash-check",
    BroomBall => "broom-ball",
    Broom => "broom",
    BroomWide => "broom-wide",
    Github => "github",
}

impl IconVariant {
    /// The coordinate space the variant's paths are authored in.
    pub fn view_box(self) -> ViewBox {
        ViewBox::CANONICAL
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconVariant {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| RenderError::UnknownVariant(s.to_string()))
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// The viewbox a variant's paths are authored in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    /// 512x512, shared by every current variant.
    pub const CANONICAL: Self = Self {
        width: 512.0,
        height: 512.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Final on-screen size of a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

impl DisplaySize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fills in whichever dimension is missing.
    ///
    /// - neither given: the viewbox size
    /// - one given: the other follows the viewbox aspect ratio
    /// - both given: used as-is, even if the ratio differs from the viewbox
    pub fn infer(view_box: ViewBox, width: Option<f32>, height: Option<f32>) -> Self {
        match (width, height) {
            (None, None) => Self::new(view_box.width, view_box.height),
            (Some(width), None) => Self::new(width, width * (view_box.height / view_box.width)),
            (None, Some(height)) => Self::new(height * (view_box.width / view_box.height), height),
            (Some(width), Some(height)) => Self::new(width, height),
        }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// CSS cursor shown over the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Pointer,
    Default,
    Inherit,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Default => "default",
            Self::Inherit => "inherit",
        }
    }
}

// ============================================================================
// IconRenderRequest
// ============================================================================

/// Parameters for one icon render.
///
/// Only `variant` is required; [`IconRenderRequest::new`] fills the rest
/// with the documented defaults.
///
/// # Example
///
/// ```
/// use duotone_ui::{IconRenderRequest, IconVariant, Opacity};
///
/// let request = IconRenderRequest::new(IconVariant::Cloud)
///     .with_width(24.0)
///     .with_primary("red")
///     .with_primary_opacity(Opacity::OPAQUE);
/// assert_eq!(request.height, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IconRenderRequest {
    pub variant: IconVariant,

    /// Display width. Inferred from `height` when absent.
    pub width: Option<f32>,

    /// Display height. Inferred from `width` when absent.
    pub height: Option<f32>,

    /// Token for the outline/background slot.
    pub primary_color: ColorToken,

    /// Token for the glyph/foreground slot. `None` reuses `primary_color`.
    pub secondary_color: Option<ColorToken>,

    pub primary_opacity: Opacity,
    pub secondary_opacity: Opacity,
    pub cursor: Cursor,
}

impl IconRenderRequest {
    pub fn new(variant: IconVariant) -> Self {
        Self {
            variant,
            width: None,
            height: None,
            primary_color: ColorToken::default(),
            secondary_color: None,
            primary_opacity: Opacity::TINT,
            secondary_opacity: Opacity::OPAQUE,
            cursor: Cursor::default(),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_primary(mut self, token: impl Into<ColorToken>) -> Self {
        self.primary_color = token.into();
        self
    }

    pub fn with_secondary(mut self, token: impl Into<ColorToken>) -> Self {
        self.secondary_color = Some(token.into());
        self
    }

    pub fn with_primary_opacity(mut self, opacity: Opacity) -> Self {
        self.primary_opacity = opacity;
        self
    }

    pub fn with_secondary_opacity(mut self, opacity: Opacity) -> Self {
        self.secondary_opacity = opacity;
        self
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// The token actually used for the secondary slot.
    pub fn effective_secondary(&self) -> &ColorToken {
        self.secondary_color.as_ref().unwrap_or(&self.primary_color)
    }
}

impl Default for IconRenderRequest {
    fn default() -> Self {
        Self::new(IconVariant::default())
    }
}

// ============================================================================
// IconDrawing
// ============================================================================

/// One filled path of a drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLayer {
    pub path_data: &'static str,
    pub fill: ComposedColor,
}

/// A fully resolved icon, ready to serialize.
///
/// Layers are painted in order, so later layers sit on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDrawing {
    pub variant: IconVariant,
    pub view_box: ViewBox,
    pub display: DisplaySize,
    pub cursor: Cursor,
    pub layers: Vec<PathLayer>,
}

impl IconDrawing {
    pub fn display_width(&self) -> f32 {
        self.display.width
    }

    pub fn display_height(&self) -> f32 {
        self.display.height
    }

    /// Serializes the drawing as SVG markup.
    pub fn to_svg(&self) -> String {
        svg::to_svg(self)
    }

    /// Renders the drawing to pixels at its display size.
    pub fn rasterize(&self) -> Result<RgbaImage, RenderError> {
        svg::rasterize(self)
    }

    /// Pixel dimensions used when rasterizing (rounded up).
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.display.width.ceil().max(0.0) as u32,
            self.display.height.ceil().max(0.0) as u32,
        )
    }
}
