//! Memoized icon bytes.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{icon_specs, render_icon, IconError};

/// Remembers the PNG bytes of every icon after it's first rendered.
///
/// Rendering is deterministic, so entries never go stale and are never
/// evicted. The lock only protects the map itself and is not held while an
/// icon renders: two threads asking for the same new icon at once may both
/// render it, and they'll produce identical bytes.
#[derive(Debug, Default)]
pub struct IconCache {
  entries: Mutex<HashMap<&'static str, Arc<[u8]>>>,
}
impl IconCache {
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<&'static str, Arc<[u8]>>> {
    // every write is a single insert, a panicking holder can't leave the map
    // half updated
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Gets the PNG bytes for `name`, rendering them on first use.
  ///
  /// * `Ok(None)`: there's no icon with that name.
  /// * `Err(_)`: the icon's spec can't be rendered.
  pub fn try_generate_icon(&self, name: &str) -> Result<Option<Arc<[u8]>>, IconError> {
    let Some((name, spec)) = icon_specs().find(|(n, _)| *n == name) else {
      tracing::debug!(icon = name, "unknown icon");
      return Ok(None);
    };
    if let Some(bytes) = self.lock().get(name) {
      tracing::debug!(icon = name, "icon cache hit");
      return Ok(Some(Arc::clone(bytes)));
    }
    tracing::debug!(icon = name, size = spec.size, "icon cache miss, rendering");
    let rendered: Arc<[u8]> = render_icon(&spec)?.into();
    let bytes = Arc::clone(self.lock().entry(name).or_insert(rendered));
    tracing::debug!(icon = name, len = bytes.len(), "icon cached");
    Ok(Some(bytes))
  }

  /// Gets the PNG bytes for `name`, or `None` if there's no such icon.
  ///
  /// ## Panics
  /// If the catalog holds a spec that can't be rendered. That's a bug in the
  /// catalog, not something a caller can recover from.
  #[must_use]
  pub fn generate_icon(&self, name: &str) -> Option<Arc<[u8]>> {
    match self.try_generate_icon(name) {
      Ok(bytes) => bytes,
      Err(e) => panic!("icon {name:?} failed to render: {e}"),
    }
  }

  /// Renders every icon in the catalog that isn't cached yet.
  pub fn warm(&self) -> Result<(), IconError> {
    for (name, _) in icon_specs() {
      self.try_generate_icon(name)?;
    }
    Ok(())
  }

  /// If the bytes for `name` are already cached.
  #[inline]
  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.lock().contains_key(name)
  }

  /// Number of cached icons.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.lock().len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }
}
