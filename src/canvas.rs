//! An owned RGBA8 drawing surface and the compositing primitives used to
//! paint icons.
//!
//! Every primitive reduces to [`Canvas::blend_pixel`], which is the usual
//! "source over" operator on straight alpha. Opacity overrides are always
//! given as `f32` values in `0.0 ..= 1.0`.

use core::ops::Range;

use crate::{Color, IconError};

/// The largest canvas size this crate will allocate.
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// pixel index.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// A square RGBA8 image being painted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
  size: u32,
  pixels: Vec<Color>,
}
impl Canvas {
  /// Makes a fully transparent `size` by `size` canvas.
  ///
  /// ## Failure
  /// * `size` is 0.
  /// * `size` is more than [`MAX_CANVAS_SIZE`].
  pub fn new(size: u32) -> Result<Self, IconError> {
    if size == 0 {
      return Err(IconError::WidthOrHeightZero);
    }
    if size > MAX_CANVAS_SIZE {
      return Err(IconError::DimensionsTooLarge);
    }
    let side = usize::try_from(size)?;
    let count = side.checked_mul(side).ok_or(IconError::CheckedMath)?;
    Ok(Self { size, pixels: vec![Color::TRANSPARENT; count] })
  }

  /// Width and height in pixels.
  #[inline]
  #[must_use]
  pub const fn size(&self) -> u32 {
    self.size
  }

  /// Line thickness for strokes and the edge soften pass: 2% of the size,
  /// never less than one pixel.
  #[inline]
  #[must_use]
  pub fn edge_thickness(&self) -> u32 {
    (self.size as f32 * 0.02).round().max(1.0) as u32
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
    if x < self.size && y < self.size {
      self.pixels.get(xy_width_to_index(x, y, self.size)).copied()
    } else {
      None
    }
  }

  #[inline]
  fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Color> {
    if x < self.size && y < self.size {
      self.pixels.get_mut(xy_width_to_index(x, y, self.size))
    } else {
      None
    }
  }

  /// The raw RGBA8 bytes, `size * size * 4` of them, row major.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }

  /// Composites `color` over the pixel at `(x,y)`.
  ///
  /// `alpha` replaces the color's own alpha when given. Out of bounds
  /// positions are ignored.
  pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color, alpha: Option<f32>) {
    let src_a = alpha.unwrap_or_else(|| color.opacity()).clamp(0.0, 1.0);
    let Some(dst) = self.get_mut(x, y) else {
      return;
    };
    let d = *dst;
    let dst_a = d.opacity();
    let out_a = src_a + dst_a * (1.0 - src_a);
    let channel = |s: u8, d: u8| -> u8 {
      if out_a > 0.0 {
        ((f32::from(s) * src_a + f32::from(d) * dst_a * (1.0 - src_a)) / out_a).round() as u8
      } else {
        0
      }
    };
    *dst = Color {
      r: channel(color.r, d.r),
      g: channel(color.g, d.g),
      b: channel(color.b, d.b),
      a: (out_a * 255.0).round() as u8,
    };
  }

  /// Blends `color` over every pixel in the rectangle from `(x0,y0)` to
  /// `(x1,y1)`.
  ///
  /// Fractional edges are rounded outward, then the area is clamped to the
  /// canvas.
  pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, alpha: Option<f32>) {
    let xs = clamped_span(x0, x1, self.size);
    for y in clamped_span(y0, y1, self.size) {
      for x in xs.clone() {
        self.blend_pixel(x, y, color, alpha);
      }
    }
  }

  /// Blends `color` over the whole canvas.
  #[inline]
  pub fn fill(&mut self, color: Color) {
    let size = self.size as f32;
    self.fill_rect(0.0, 0.0, size, size, color, None);
  }

  /// Blends `color` over every pixel whose center is inside the circle.
  ///
  /// The boundary is inclusive and there's no anti-aliasing.
  pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
    let r_sq = radius * radius;
    let xs = clamped_span(cx - radius, cx + radius, self.size);
    for y in clamped_span(cy - radius, cy + radius, self.size) {
      let dy = y as f32 + 0.5 - cy;
      for x in xs.clone() {
        let dx = x as f32 + 0.5 - cx;
        if dx * dx + dy * dy <= r_sq {
          self.blend_pixel(x, y, color, None);
        }
      }
    }
  }

  /// Blends the outline of a rounded rectangle, [`edge_thickness`](Self::edge_thickness)
  /// pixels wide. The inside is left alone.
  #[allow(clippy::too_many_arguments)]
  pub fn draw_rounded_rect_stroke(
    &mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, color: Color,
    alpha: Option<f32>,
  ) {
    let t = self.edge_thickness() as f32;
    let (left, top, right, bottom) = (x, y, x + width, y + height);
    let xs = clamped_span(left, right, self.size);
    for py in clamped_span(top, bottom, self.size) {
      let cy = py as f32 + 0.5;
      let near_top = cy < top + radius;
      let near_bottom = cy > bottom - radius;
      for px in xs.clone() {
        let cx = px as f32 + 0.5;
        let near_left = cx < left + radius;
        let near_right = cx > right - radius;
        let on_edge = if (near_left || near_right) && (near_top || near_bottom) {
          let ox = if near_left { left + radius } else { right - radius };
          let oy = if near_top { top + radius } else { bottom - radius };
          let distance = (cx - ox).hypot(cy - oy);
          distance >= radius - t && distance <= radius
        } else {
          cx < left + t || cx > right - t || cy < top + t || cy > bottom - t
        };
        if on_edge {
          self.blend_pixel(px, py, color, alpha);
        }
      }
    }
  }

  /// Blends `color` over every pixel within `thickness` of any canvas edge.
  pub fn blend_border(&mut self, thickness: u32, color: Color, alpha: Option<f32>) {
    let far = self.size.saturating_sub(thickness);
    for y in 0..self.size {
      for x in 0..self.size {
        if x < thickness || y < thickness || x >= far || y >= far {
          self.blend_pixel(x, y, color, alpha);
        }
      }
    }
  }
}

/// `floor(lo) .. ceil(hi)`, clamped to `0 .. size`.
#[inline]
fn clamped_span(lo: f32, hi: f32, size: u32) -> Range<u32> {
  let start = lo.floor().max(0.0);
  let end = hi.ceil().min(size as f32);
  if start < end {
    start as u32..end as u32
  } else {
    0..0
  }
}
