use bytemuck::{Pod, Zeroable};

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1, and it can sit in the middle of a `repr(C)` file header
/// without adding padding.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}
