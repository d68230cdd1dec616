//! Writes PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! Only the smallest useful subset of the format is written:
//!
//! * The 8 byte signature.
//! * An `IHDR` for 8-bits per channel RGBA, no interlacing.
//! * A single `IDAT` holding the whole image as one Zlib stream. Every
//!   scanline uses filter type 0 (None).
//! * An empty `IEND`.
//!
//! There are no ancillary chunks. Reading support is limited to walking the
//! chunk framing with [`PngChunkIter`], which is enough to check a file that
//! was written here.

mod chunk;
pub use chunk::*;

mod crc32;
pub use crc32::*;

mod ihdr;
pub use ihdr::*;

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::Canvas;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Zlib compression level used for `IDAT` ("best").
pub const DEFLATE_LEVEL: u8 = 9;

/// Scanline filter type 0: bytes are stored as-is.
pub const FILTER_NONE: u8 = 0;

/// Checks if the PNG's initial 8 bytes are correct.
#[inline]
#[must_use]
pub fn is_png_signature_correct(bytes: &[u8]) -> bool {
  bytes.starts_with(&PNG_SIGNATURE)
}

/// Gets the header from PNG bytes, if the first chunk is a valid `IHDR`.
#[must_use]
pub fn png_get_header(bytes: &[u8]) -> Option<Ihdr> {
  PngChunkIter::new(bytes)
    .next()
    .filter(|chunk| chunk.chunk_ty == PngChunkType::IHDR)
    .and_then(|chunk| Ihdr::from_chunk_data(chunk.data))
}

/// Gets the payload of every `IDAT` chunk, in order.
pub fn png_get_idat(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
  PngChunkIter::new(bytes)
    .filter(|chunk| chunk.chunk_ty == PngChunkType::IDAT)
    .map(|chunk| chunk.data)
}

/// Prefixes each `stride` byte row with a [`FILTER_NONE`] byte.
///
/// `rows` should be a whole number of rows, any leftover partial row is
/// dropped.
#[must_use]
pub fn filter_scanlines(rows: &[u8], stride: usize) -> Vec<u8> {
  if stride == 0 {
    return Vec::new();
  }
  let row_count = rows.len() / stride;
  let mut out = Vec::with_capacity((stride + 1) * row_count);
  for row in rows.chunks_exact(stride) {
    out.push(FILTER_NONE);
    out.extend_from_slice(row);
  }
  out
}

/// Encodes a finished canvas as a complete PNG file.
#[must_use]
pub fn encode_canvas(canvas: &Canvas) -> Vec<u8> {
  let size = canvas.size();
  let filtered = filter_scanlines(canvas.as_bytes(), size as usize * 4);
  let idat = compress_to_vec_zlib(&filtered, DEFLATE_LEVEL);
  tracing::trace!(size, filtered = filtered.len(), compressed = idat.len(), "deflated image data");

  let ihdr = Ihdr::rgba8(size, size);
  // signature, then 12 bytes of framing per chunk
  let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + ihdr.as_bytes().len() + idat.len());
  out.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut out, PngChunkType::IHDR, ihdr.as_bytes());
  write_chunk(&mut out, PngChunkType::IDAT, &idat);
  write_chunk(&mut out, PngChunkType::IEND, &[]);
  out
}
