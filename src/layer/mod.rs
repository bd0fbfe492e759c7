//! Path layers and the per-variant path table.
//!
//! Each variant maps to a fixed, ordered list of [`LayerSpec`]s. A spec pairs
//! a literal SVG path with the [`ColorSlot`] that fills it; the engine swaps
//! each slot for a composed color to produce the final
//! [`PathLayer`](crate::PathLayer)s.
//!
//! # Layer order
//!
//! Compound icons (outline plus glyph) list the glyph first, filled from the
//! secondary slot, and the outline second, filled from the primary slot.
//! `trash-check` is the exception and lists the outline first.

pub mod svg;
mod table;

use crate::color::ComposedColor;
use crate::icon::{IconVariant, PathLayer};

// ============================================================================
// ColorSlot
// ============================================================================

/// Which composed color fills a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// Primary token with primary opacity.
    Primary,
    /// Secondary token (or the primary token when none is set) with
    /// secondary opacity.
    Secondary,
    /// Secondary when a secondary token was given explicitly, primary
    /// otherwise. Used by single-glyph brand marks.
    ///
    /// The fallback takes the primary opacity too, so with default
    /// parameters the mark draws as a faint `44` tint rather than opaque.
    /// Pass a secondary token to get a solid mark.
    SecondaryOrPrimary,
}

/// The composed colors available to a variant's layers.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotColors {
    pub primary: ComposedColor,
    pub secondary: ComposedColor,

    /// Whether the request named its own secondary token.
    pub explicit_secondary: bool,
}

impl SlotColors {
    pub fn pick(&self, slot: ColorSlot) -> &ComposedColor {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::SecondaryOrPrimary if self.explicit_secondary => &self.secondary,
            ColorSlot::SecondaryOrPrimary => &self.primary,
        }
    }
}

// ============================================================================
// LayerSpec
// ============================================================================

/// One uncolored layer of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub slot: ColorSlot,
    pub path: &'static str,
}

impl LayerSpec {
    pub const fn new(slot: ColorSlot, path: &'static str) -> Self {
        Self { slot, path }
    }

    /// Binds this layer to a concrete fill.
    pub fn paint(&self, colors: &SlotColors) -> PathLayer {
        PathLayer {
            path_data: self.path,
            fill: colors.pick(self.slot).clone(),
        }
    }
}

/// The ordered layer list of `variant`.
pub fn layers_for(variant: IconVariant) -> &'static [LayerSpec] {
    match variant {
        IconVariant::CheckCircle => table::CHECK_CIRCLE,
        IconVariant::CheckSquare => table::CHECK_SQUARE,
        IconVariant::Radio => table::RADIO,
        IconVariant::Circle => table::CIRCLE,
        IconVariant::Square => table::SQUARE,
        IconVariant::Tick => table::TICK,
        IconVariant::Cloud => table::CLOUD,
        IconVariant::CloudArrowUp => table::CLOUD_ARROW_UP,
        IconVariant::CloudCheck => table::CLOUD_CHECK,
        IconVariant::CloudBinary => table::CLOUD_BINARY,
        IconVariant::Clipboard => table::CLIPBOARD,
        IconVariant::ClipboardCheck => table::CLIPBOARD_CHECK,
        IconVariant::Tag => table::TAG,
        IconVariant::Tags => table::TAGS,
        IconVariant::UpRightFromSquare => table::UP_RIGHT_FROM_SQUARE,
        IconVariant::Link => table::LINK,
        IconVariant::MessageLines => table::MESSAGE_LINES,
        IconVariant::Brush => table::BRUSH,
        IconVariant::Trash => table::TRASH,
        IconVariant::TrashCheck => table::TRASH_CHECK,
        IconVariant::BroomBall => table::BROOM_BALL,
        IconVariant::Broom => table::BROOM,
        IconVariant::BroomWide => table::BROOM_WIDE,
        IconVariant::Github => table::GITHUB,
    }
}
