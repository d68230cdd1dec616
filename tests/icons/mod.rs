use std::sync::Arc;

use ck_icons::{
  generate_icon, icon_spec, known_icon, list_icon_names, paint_pixels, palette, render_icon,
  png::{png_get_idat, FILTER_NONE},
  IconCache, IconSpec, ICON_CONTENT_TYPE,
};

const MASKABLE_512: &str = "ck-wallet-icon-maskable-512.v1.png";
const PLAIN_512: &str = "ck-wallet-icon-512.v1.png";

/// Pixel `(x,y)` of a PNG written by this crate.
fn sample(png: &[u8], size: usize, x: usize, y: usize) -> [u8; 4] {
  let idat: Vec<u8> = png_get_idat(png).flatten().copied().collect();
  let raw = miniz_oxide::inflate::decompress_to_vec_zlib(&idat).unwrap();
  let stride = size * 4 + 1;
  let line = &raw[y * stride..(y + 1) * stride];
  assert_eq!(line[0], FILTER_NONE);
  line[1 + x * 4..1 + x * 4 + 4].try_into().unwrap()
}

#[test]
fn test_catalog_matches_table() {
  let expected = [
    ("ck-wallet-icon-192.v1.png", 192, false, false),
    ("ck-wallet-icon-512.v1.png", 512, false, false),
    ("ck-wallet-icon-maskable-512.v1.png", 512, true, false),
    ("ck-wallet-apple-touch-152.v1.png", 152, false, true),
    ("ck-wallet-apple-touch-180.v1.png", 180, false, true),
  ];
  assert_eq!(list_icon_names().len(), expected.len());
  for (name, size, maskable, apple) in expected {
    assert_eq!(icon_spec(name), Some(IconSpec { size, maskable, apple }));
  }
  assert_eq!(ICON_CONTENT_TYPE, "image/png");
}

#[test]
fn test_known_icon_iff_listed() {
  let names = list_icon_names();
  for name in &names {
    assert!(known_icon(name));
  }
  for name in ["not-a-real-icon.png", "ck-wallet-icon-192.png", "CK-WALLET-ICON-192.V1.PNG", ""] {
    assert!(!known_icon(name));
    assert!(!names.contains(&name));
  }
}

#[test]
fn test_unknown_icon_is_none() {
  assert!(generate_icon("not-a-real-icon.png").is_none());
  assert!(!known_icon("not-a-real-icon.png"));
  assert!(IconCache::new().generate_icon("not-a-real-icon.png").is_none());
}

#[test]
fn test_generation_is_deterministic() {
  for name in list_icon_names() {
    let a = generate_icon(name).unwrap();
    let b = generate_icon(name).unwrap();
    assert_eq!(a, b, "{name}");
    // a separate cache renders from scratch and still agrees
    let fresh = IconCache::new().generate_icon(name).unwrap();
    assert_eq!(a, fresh, "{name}");
    let uncached: Arc<[u8]> = render_icon(&icon_spec(name).unwrap()).unwrap().into();
    assert_eq!(a, uncached, "{name}");
  }
}

#[test]
fn test_maskable_differs_from_plain() {
  let maskable = generate_icon(MASKABLE_512).unwrap();
  let plain = generate_icon(PLAIN_512).unwrap();
  assert_ne!(maskable, plain);

  // accent disc radius: 200px right of center is only inside the bigger disc
  let [r, g, b, a] = sample(&maskable, 512, 456, 256);
  assert_eq!((r, g, b, a), (palette::ACCENT.r, palette::ACCENT.g, palette::ACCENT.b, 255));
  let [r, g, b, a] = sample(&plain, 512, 456, 256);
  assert_eq!((r, g, b, a), (palette::PRIMARY.r, palette::PRIMARY.g, palette::PRIMARY.b, 255));

  // bottom bar: solid CTA, or accent at 230/255 over the field
  let [r, g, b, a] = sample(&plain, 512, 256, 500);
  assert_eq!((r, g, b, a), (palette::CTA.r, palette::CTA.g, palette::CTA.b, 255));
  assert_eq!(sample(&maskable, 512, 256, 500), [116, 74, 240, 255]);
}

#[test]
fn test_png_pixels_match_canvas() {
  let name = "ck-wallet-apple-touch-152.v1.png";
  let spec = icon_spec(name).unwrap();
  let canvas = paint_pixels(&spec).unwrap();
  let png = generate_icon(name).unwrap();
  for (x, y) in [(0, 0), (76, 76), (151, 151), (20, 140), (140, 20)] {
    let c = canvas.pixel(x, y).unwrap();
    assert_eq!(sample(&png, 152, x as usize, y as usize), [c.r, c.g, c.b, c.a], "({x},{y})");
  }
}
