use bytemuck::{Pod, Zeroable};

use crate::U32BE;

/// Color type 6: red, green, blue, alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Image Header chunk data.
///
/// The layout is exactly the 13 bytes stored in the file, so it can be cast
/// to and from bytes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
pub struct Ihdr {
  pub width: U32BE,
  pub height: U32BE,
  pub bit_depth: u8,
  pub color_type: u8,
  pub compression_method: u8,
  pub filter_method: u8,
  pub interlace_method: u8,
}
impl Ihdr {
  /// Header for non-interlaced 8-bits per channel RGBA data.
  #[inline]
  #[must_use]
  pub const fn rgba8(width: u32, height: u32) -> Self {
    Self {
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth: 8,
      color_type: COLOR_TYPE_RGBA,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  /// Reads the header out of IHDR chunk data, `None` if the length is wrong.
  #[inline]
  #[must_use]
  pub fn from_chunk_data(data: &[u8]) -> Option<Self> {
    bytemuck::try_pod_read_unaligned(data).ok()
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width.to_u32()
  }

  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height.to_u32()
  }
}
