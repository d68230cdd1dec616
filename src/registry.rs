//! The fixed icon catalog.
//!
//! Names are the exact file names the web manifest and `<link>` tags point
//! at, so they can't change without breaking clients.

/// Geometry flags for one icon in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
  /// Width and height in pixels. Icons are always square.
  pub size: u32,
  /// Extra safe-area margin for platforms that crop icons to a shape.
  pub maskable: bool,
  /// Light field variant for iOS home screen bookmarks.
  pub apple: bool,
}

static ICON_SPECS: [(&str, IconSpec); 5] = [
  ("ck-wallet-icon-192.v1.png", IconSpec { size: 192, maskable: false, apple: false }),
  ("ck-wallet-icon-512.v1.png", IconSpec { size: 512, maskable: false, apple: false }),
  ("ck-wallet-icon-maskable-512.v1.png", IconSpec { size: 512, maskable: true, apple: false }),
  ("ck-wallet-apple-touch-152.v1.png", IconSpec { size: 152, maskable: false, apple: true }),
  ("ck-wallet-apple-touch-180.v1.png", IconSpec { size: 180, maskable: false, apple: true }),
];

/// Iterates `(name, spec)` for the whole catalog, in catalog order.
#[inline]
pub fn icon_specs() -> impl Iterator<Item = (&'static str, IconSpec)> {
  ICON_SPECS.iter().copied()
}

/// Gets the spec for an icon name, or `None` if there's no such icon.
#[inline]
#[must_use]
pub fn icon_spec(name: &str) -> Option<IconSpec> {
  ICON_SPECS.iter().find(|(n, _)| *n == name).map(|(_, spec)| *spec)
}

/// If `name` is in the catalog.
#[inline]
#[must_use]
pub fn known_icon(name: &str) -> bool {
  icon_spec(name).is_some()
}

/// All icon names, in catalog order.
#[inline]
#[must_use]
pub fn list_icon_names() -> Vec<&'static str> {
  icon_specs().map(|(name, _)| name).collect()
}
