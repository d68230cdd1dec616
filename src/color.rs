//! The color type used by the canvas.
//!
//! Everything in this crate is 8-bits per channel RGBA, stored as
//! straight (not premultiplied) alpha. The memory layout of [`Color`] matches
//! one pixel of PNG color type 6 at bit depth 8, so a slice of colors can be
//! cast directly to the bytes of a scanline.

use bytemuck::{Pod, Zeroable};

/// An 8-bits per channel RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Zeroable, Pod)]
#[repr(C)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}
impl Color {
  /// Fully transparent black, what a fresh canvas is filled with.
  pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// A color with alpha 255.
  #[inline]
  #[must_use]
  pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
    Self::new(r, g, b, u8::MAX)
  }

  /// Parses `#RRGGBB` (the `#` is optional) into an opaque color.
  ///
  /// Works in `const` context, which is how the brand palette gets built.
  #[must_use]
  pub const fn from_hex(hex: &str) -> Option<Self> {
    let bytes = hex.as_bytes();
    let digits = match bytes {
      [b'#', rest @ ..] => rest,
      _ => bytes,
    };
    if digits.len() != 6 {
      return None;
    }
    let r = match hex_pair(digits[0], digits[1]) {
      Some(r) => r,
      None => return None,
    };
    let g = match hex_pair(digits[2], digits[3]) {
      Some(g) => g,
      None => return None,
    };
    let b = match hex_pair(digits[4], digits[5]) {
      Some(b) => b,
      None => return None,
    };
    Some(Self::opaque(r, g, b))
  }

  /// Copy of this color with the alpha channel replaced.
  #[inline]
  #[must_use]
  pub const fn with_alpha(self, a: u8) -> Self {
    Self { a, ..self }
  }

  /// The alpha channel as a `0.0 ..= 1.0` opacity.
  #[inline]
  #[must_use]
  pub fn opacity(self) -> f32 {
    f32::from(self.a) / 255.0
  }
}

const fn hex_digit(u: u8) -> Option<u8> {
  match u {
    b'0'..=b'9' => Some(u - b'0'),
    b'a'..=b'f' => Some(u - b'a' + 10),
    b'A'..=b'F' => Some(u - b'A' + 10),
    _ => None,
  }
}

const fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
  match (hex_digit(hi), hex_digit(lo)) {
    (Some(hi), Some(lo)) => Some((hi << 4) | lo),
    _ => None,
  }
}
