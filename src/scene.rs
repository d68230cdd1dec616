//! Lays out the badge artwork.
//!
//! Each layer composites over what came before it, so the order of the
//! drawing calls in [`paint_pixels`] is part of the artwork.

use crate::{palette, Canvas, IconError, IconSpec};

/// Alpha of the highlight disc tint.
pub const HIGHLIGHT_ALPHA: u8 = 180;
/// Opacity of the accent bar on maskable icons.
pub const MASKABLE_BAR_ALPHA: f32 = 230.0 / 255.0;
/// Opacity of the primary colored border on apple icons.
pub const APPLE_BORDER_ALPHA: f32 = 120.0 / 255.0;
/// Opacity of the light border on every other icon.
pub const BORDER_ALPHA: f32 = 80.0 / 255.0;
pub const MASKABLE_SOFTEN_ALPHA: f32 = 0.18;
pub const SOFTEN_ALPHA: f32 = 0.12;

/// Radius of the big centered disc.
#[inline]
#[must_use]
pub fn accent_radius(spec: &IconSpec) -> f32 {
  spec.size as f32 * if spec.maskable { 0.44 } else { 0.38 }
}

/// Height of the bar along the bottom edge.
#[inline]
#[must_use]
pub fn bar_height(spec: &IconSpec) -> u32 {
  (spec.size as f32 * 0.17).round().max(6.0) as u32
}

/// Distance from each canvas edge to the outside of the border.
#[inline]
#[must_use]
pub fn border_inset(spec: &IconSpec) -> u32 {
  (spec.size as f32 * 0.08).round().max(4.0) as u32
}

/// Paints a fresh canvas for the icon described by `spec`.
pub fn paint_pixels(spec: &IconSpec) -> Result<Canvas, IconError> {
  let mut canvas = Canvas::new(spec.size)?;
  let size = spec.size as f32;
  let center = size / 2.0;

  // field
  canvas.fill(if spec.apple { palette::BACKGROUND } else { palette::PRIMARY });

  // accent disc, then a translucent highlight nudged up and left
  let accent_r = accent_radius(spec);
  canvas.draw_circle(center, center, accent_r, palette::ACCENT);
  let highlight = palette::BACKGROUND.with_alpha(HIGHLIGHT_ALPHA);
  let nudge = accent_r * 0.12;
  canvas.draw_circle(center - nudge, center - nudge, accent_r * 0.82, highlight);

  // status dot
  canvas.draw_circle(size * 0.70, size * 0.66, size * 0.19, palette::SUCCESS);

  // bottom bar
  let bar_top = size - bar_height(spec) as f32;
  if spec.maskable {
    canvas.fill_rect(0.0, bar_top, size, size, palette::ACCENT, Some(MASKABLE_BAR_ALPHA));
  } else {
    canvas.fill_rect(0.0, bar_top, size, size, palette::CTA, None);
  }

  // inset border
  let inset = border_inset(spec) as f32;
  let corner = (size * 0.16).round().max(8.0);
  let (border, border_alpha) = if spec.apple {
    (palette::PRIMARY, APPLE_BORDER_ALPHA)
  } else {
    (palette::BACKGROUND, BORDER_ALPHA)
  };
  canvas.draw_rounded_rect_stroke(
    inset,
    inset,
    size - inset * 2.0,
    size - inset * 2.0,
    corner,
    border,
    Some(border_alpha),
  );

  // soften the outer edge
  let soften = if spec.apple { palette::PRIMARY } else { palette::BACKGROUND };
  let soften_alpha = if spec.maskable { MASKABLE_SOFTEN_ALPHA } else { SOFTEN_ALPHA };
  canvas.blend_border(canvas.edge_thickness(), soften, Some(soften_alpha));

  Ok(canvas)
}
