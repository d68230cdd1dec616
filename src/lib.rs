//! Renders the ck-wallet app icons at runtime instead of shipping image
//! files.
//!
//! Each icon in the fixed [catalog](list_icon_names) is a small badge painted
//! onto an RGBA8 [`Canvas`] by [`paint_pixels`], then written out as a PNG by
//! [`png::encode_canvas`]. The only outside help is `miniz_oxide` for the
//! Zlib stream inside the PNG.
//!
//! ```
//! let bytes = ck_icons::generate_icon("ck-wallet-icon-192.v1.png").unwrap();
//! assert!(ck_icons::png::is_png_signature_correct(&bytes));
//! assert!(ck_icons::generate_icon("favicon.ico").is_none());
//! ```
//!
//! Output is a pure function of the icon name, so results are cached forever.
//! Use an [`IconCache`] you own, or the process-wide one behind
//! [`generate_icon`].

use std::sync::{Arc, OnceLock};

mod color;
pub use color::*;

mod error;
pub use error::*;

mod int_endian;
pub use int_endian::*;

pub mod palette;

mod registry;
pub use registry::*;

mod canvas;
pub use canvas::*;

mod scene;
pub use scene::*;

pub mod png;

mod cache;
pub use cache::*;

/// The media type of every icon this crate makes.
pub const ICON_CONTENT_TYPE: &str = "image/png";

/// Paints and encodes one icon, skipping any cache.
pub fn render_icon(spec: &IconSpec) -> Result<Vec<u8>, IconError> {
  let canvas = paint_pixels(spec)?;
  let bytes = png::encode_canvas(&canvas);
  tracing::debug!(size = spec.size, len = bytes.len(), "rendered icon");
  Ok(bytes)
}

/// Gets the PNG bytes for `name` from a process-wide [`IconCache`], or `None`
/// if there's no such icon.
///
/// ## Panics
/// Same as [`IconCache::generate_icon`].
#[must_use]
pub fn generate_icon(name: &str) -> Option<Arc<[u8]>> {
  static SHARED: OnceLock<IconCache> = OnceLock::new();
  SHARED.get_or_init(IconCache::new).generate_icon(name)
}
