use ck_icons::{
  generate_icon, list_icon_names,
  png::{png_crc, png_get_header, png_get_idat, PngChunkIter, PngChunkType, PNG_SIGNATURE},
};

#[test]
fn test_every_icon_starts_with_signature() {
  for name in list_icon_names() {
    let bytes = generate_icon(name).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE, "{name}");
    assert_eq!(bytes[..8], [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
  }
}

#[test]
fn test_icon_192_header() {
  let bytes = generate_icon("ck-wallet-icon-192.v1.png").unwrap();
  let ihdr = png_get_header(&bytes).unwrap();
  assert_eq!(ihdr.width(), 192);
  assert_eq!(ihdr.height(), 192);
  assert_eq!(ihdr.bit_depth, 8);
  assert_eq!(ihdr.color_type, 6);
  assert_eq!((ihdr.compression_method, ihdr.filter_method, ihdr.interlace_method), (0, 0, 0));
  // and straight from the bytes, big-endian
  assert_eq!(bytes[8..16], [0, 0, 0, 13, b'I', b'H', b'D', b'R']);
  assert_eq!(bytes[16..20], 192_u32.to_be_bytes());
}

#[test]
fn test_every_chunk_crc_matches() {
  for name in list_icon_names() {
    let bytes = generate_icon(name).unwrap();
    // walk the framing by hand rather than trusting the chunk iterator
    let mut types = Vec::new();
    let mut rest = &bytes[8..];
    while !rest.is_empty() {
      let len = u32::from_be_bytes(rest[..4].try_into().unwrap()) as usize;
      let type_and_data = &rest[4..8 + len];
      let stored = u32::from_be_bytes(rest[8 + len..12 + len].try_into().unwrap());
      assert_eq!(png_crc(type_and_data.iter().copied()), stored, "{name}");
      types.push(PngChunkType(type_and_data[..4].try_into().unwrap()));
      rest = &rest[12 + len..];
    }
    assert_eq!(types, [PngChunkType::IHDR, PngChunkType::IDAT, PngChunkType::IEND], "{name}");
    assert!(PngChunkIter::new(&bytes).all(|chunk| chunk.crc_is_valid()), "{name}");
  }
}

#[test]
fn test_idat_holds_every_scanline() {
  for name in list_icon_names() {
    let bytes = generate_icon(name).unwrap();
    let size = png_get_header(&bytes).unwrap().width() as usize;
    let idat: Vec<&[u8]> = png_get_idat(&bytes).collect();
    assert_eq!(idat.len(), 1, "{name}");
    let raw = miniz_oxide::inflate::decompress_to_vec_zlib(idat[0]).unwrap();
    assert_eq!(raw.len(), (size * 4 + 1) * size, "{name}");
    assert!(raw.chunks_exact(size * 4 + 1).all(|line| line[0] == 0), "{name}");
  }
}

#[test]
fn test_PngChunkIter_no_panics() {
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngChunkIter::new(&v) {
      //
    }
  }
}
