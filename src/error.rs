//! Error type shared by the icon engine, theme profiles and SVG output.

use thiserror::Error;

/// Errors surfaced by icon rendering and theme loading.
///
/// Unknown variants and unknown color tokens are contract violations on the
/// caller's side. They are reported, never replaced with a fallback.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An icon name outside the closed [`IconVariant`](crate::IconVariant) set.
    #[error("unknown icon variant `{0}`")]
    UnknownVariant(String),

    /// A color token with no entry in the color table.
    #[error("unknown color token `{0}`")]
    UnknownColorToken(String),

    /// An opacity suffix that is not exactly two hex characters.
    #[error("invalid opacity `{0}`: expected two hex characters")]
    InvalidOpacity(String),

    /// A color table entry that is not a six digit hex color.
    #[error("invalid base color `{value}` for token `{token}`")]
    InvalidBaseColor { token: String, value: String },

    /// The drawing could not be turned into pixels.
    #[error("failed to rasterize icon: {0}")]
    Rasterize(String),

    /// A theme profile failed to (de)serialize.
    #[error("invalid theme profile: {0}")]
    Profile(#[from] serde_json::Error),
}
