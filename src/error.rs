use core::num::TryFromIntError;

/// An error from the `ck_icons` crate.
///
/// None of these can happen for the built in catalog. Seeing one means the
/// constant tables were edited into something the renderer can't handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
  /// The requested canvas is larger than [`MAX_CANVAS_SIZE`](crate::MAX_CANVAS_SIZE).
  ///
  /// This limit exists to prevent accidental out-of-memory problems.
  #[error("canvas dimensions are too large")]
  DimensionsTooLarge,

  /// The requested canvas size is 0.
  #[error("canvas width or height is zero")]
  WidthOrHeightZero,

  /// A checked math operation failed.
  #[error("checked math operation failed")]
  CheckedMath,
}
impl From<TryFromIntError> for IconError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}
