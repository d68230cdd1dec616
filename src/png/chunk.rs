use core::fmt::{Debug, Write};

use super::crc32::chunk_crc;

/// The four byte tag naming a chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkType(pub [u8; 4]);
impl PngChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
}
impl Debug for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

/// Appends one framed chunk: length, type, data, CRC.
pub fn write_chunk(out: &mut Vec<u8>, chunk_ty: PngChunkType, data: &[u8]) {
  // canvas limits keep every chunk far below 2^31 bytes
  debug_assert!(data.len() <= i32::MAX as usize);
  let crc = chunk_crc(chunk_ty.0, data);
  tracing::trace!(chunk = ?chunk_ty, len = data.len(), crc, "writing chunk");
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(&chunk_ty.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&crc.to_be_bytes());
}

/// One chunk read back out of PNG bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngChunk<'b> {
  pub chunk_ty: PngChunkType,
  pub data: &'b [u8],
  pub declared_crc: u32,
}
impl Debug for PngChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngChunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl PngChunk<'_> {
  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    chunk_crc(self.chunk_ty.0, self.data)
  }
  /// If the CRC stored after the data matches the data.
  #[inline]
  #[must_use]
  pub fn crc_is_valid(&self) -> bool {
    self.compute_crc() == self.declared_crc
  }
}

/// An iterator that produces successive chunks from PNG bytes.
///
/// This only walks the framing. Truncated input just ends the iteration, it
/// never panics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkIter<'b>(&'b [u8]);
impl<'b> PngChunkIter<'b> {
  /// Pass the full PNG bytes, it will remove the PNG signature automatically.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }

  fn pull_u32(&mut self) -> Option<u32> {
    if self.0.len() < 4 {
      self.0 = &[];
      return None;
    }
    let (head, rest) = self.0.split_at(4);
    self.0 = rest;
    Some(u32::from_be_bytes(head.try_into().ok()?))
  }
}
impl<'b> Iterator for PngChunkIter<'b> {
  type Item = PngChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let chunk_len = self.pull_u32()? as usize;
    let chunk_ty = PngChunkType(self.pull_u32()?.to_be_bytes());
    if self.0.len() < chunk_len {
      self.0 = &[];
      return None;
    }
    let (data, rest) = self.0.split_at(chunk_len);
    self.0 = rest;
    let declared_crc = self.pull_u32()?;
    Some(PngChunk { chunk_ty, data, declared_crc })
  }
}
