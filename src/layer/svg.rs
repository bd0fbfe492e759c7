//! SVG markup output and rasterization using resvg/usvg.

use std::fmt::Write as _;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::RenderError;
use crate::icon::IconDrawing;

// ============================================================================
// Markup
// ============================================================================

/// Serializes a drawing to a standalone `<svg>` element.
///
/// Each layer becomes one `<path>`. The composed color is split into an
/// opaque `fill` and a `fill-opacity` ratio so every SVG consumer reads the
/// alpha the same way.
pub fn to_svg(drawing: &IconDrawing) -> String {
    let path_bytes: usize = drawing.layers.iter().map(|l| l.path_data.len() + 64).sum();
    let mut out = String::with_capacity(256 + path_bytes);

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" width="{}" height="{}" viewBox="0 0 {} {}" style="cursor: {}">"#,
        drawing.display.width,
        drawing.display.height,
        drawing.view_box.width,
        drawing.view_box.height,
        drawing.cursor.as_css(),
    );

    for layer in &drawing.layers {
        let _ = write!(
            out,
            r#"<path d="{}" fill="{}" fill-opacity="{:.3}"/>"#,
            layer.path_data,
            layer.fill.rgb_hex(),
            layer.fill.alpha_ratio(),
        );
    }

    out.push_str("</svg>");
    out
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders a drawing to an RGBA image at its display size (rounded up).
pub fn rasterize(drawing: &IconDrawing) -> Result<RgbaImage, RenderError> {
    let markup = to_svg(drawing);
    let (width, height) = drawing.pixel_size();

    let tree = Tree::from_str(&markup, &Options::default())
        .map_err(|e| RenderError::Rasterize(e.to_string()))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| RenderError::Rasterize(format!("cannot allocate a {width}x{height} pixmap")))?;

    // Stretch the parsed document onto the rounded pixel grid
    let size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap (premultiplied) to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let color = pixel.demultiply();
        let x = i as u32 % width;
        let y = i as u32 / width;
        img.put_pixel(
            x,
            y,
            Rgba([color.red(), color.green(), color.blue(), color.alpha()]),
        );
    }

    img
}

// ============================================================================
// Tests
// ============================================================================
