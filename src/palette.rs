//! The brand palette.

use crate::Color;

const fn brand(hex: &str) -> Color {
  match Color::from_hex(hex) {
    Some(c) => c,
    None => panic!("brand colors must be written as #RRGGBB"),
  }
}

pub const PRIMARY: Color = brand("#2D2A6A");
pub const ACCENT: Color = brand("#7C4DFF");
pub const SUCCESS: Color = brand("#10B981");
pub const CTA: Color = brand("#2563EB");
pub const BACKGROUND: Color = brand("#FAFAFA");
/// Not painted by the current badge layout.
pub const TEXT: Color = brand("#0F172A");

/// Every brand color by name.
pub const BRAND_COLORS: [(&str, Color); 6] = [
  ("primary", PRIMARY),
  ("accent", ACCENT),
  ("success", SUCCESS),
  ("cta", CTA),
  ("background", BACKGROUND),
  ("text", TEXT),
];

/// Looks up a brand color by name.
#[inline]
#[must_use]
pub fn lookup(name: &str) -> Option<Color> {
  BRAND_COLORS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}
