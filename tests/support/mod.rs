#![allow(dead_code)]

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn gif(width: u16, height: u16) -> Vec<u8> {
    let mut gif = Vec::new();
    gif.extend_from_slice(b"GIF89a");
    gif.extend_from_slice(&width.to_le_bytes());
    gif.extend_from_slice(&height.to_le_bytes());
    gif.extend_from_slice(&[0xF7, 0x00, 0x00]);
    gif.extend_from_slice(&[0x00; 3]);
    gif
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    png.extend_from_slice(&13u32.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&width.to_be_bytes());
    png.extend_from_slice(&height.to_be_bytes());
    png.extend_from_slice(&[0x08, 0x02, 0x00, 0x00, 0x00]);
    png.extend_from_slice(&[0x00; 4]);
    png
}

pub fn bmp_info(width: i32, height: i32) -> Vec<u8> {
    let mut bmp = Vec::new();
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&54u32.to_le_bytes());
    bmp.extend_from_slice(&[0x00; 4]);
    bmp.extend_from_slice(&54u32.to_le_bytes());
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&width.to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&24u16.to_le_bytes());
    bmp.resize(54, 0);
    bmp
}

pub fn bmp_core(width: u16, height: u16) -> Vec<u8> {
    let mut bmp = Vec::new();
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&32u32.to_le_bytes());
    bmp.extend_from_slice(&[0x00; 4]);
    bmp.extend_from_slice(&26u32.to_le_bytes());
    bmp.extend_from_slice(&12u32.to_le_bytes());
    bmp.extend_from_slice(&width.to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&24u16.to_le_bytes());
    bmp.resize(32, 0);
    bmp
}

/// SOI, a 16-byte APP0/JFIF segment. Ends at offset 20.
pub fn jfif_header() -> Vec<u8> {
    let mut jpeg = Vec::new();
    jpeg.extend_from_slice(&[0xFF, 0xD8]);
    jpeg.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    jpeg.extend_from_slice(b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00");
    jpeg
}

pub fn sof0(width: u16, height: u16) -> Vec<u8> {
    let mut sof = Vec::new();
    sof.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    sof.extend_from_slice(&height.to_be_bytes());
    sof.extend_from_slice(&width.to_be_bytes());
    sof.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    sof
}

pub fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut seg = vec![0xFF, marker];
    seg.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    seg.extend_from_slice(payload);
    seg
}

/// JFIF header immediately followed by SOF0. SOF fields end at offset 29.
pub fn jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut jpeg = jfif_header();
    jpeg.extend_from_slice(&sof0(width, height));
    jpeg
}

/// JFIF header, an Exif APP1 block and a quantization table before SOF0.
pub fn jpeg_with_segments(width: u16, height: u16, exif_len: usize) -> Vec<u8> {
    let mut jpeg = jfif_header();

    let mut exif = b"Exif\x00\x00".to_vec();
    exif.extend((0..exif_len).map(|i| (i % 251) as u8));
    jpeg.extend_from_slice(&segment(0xE1, &exif));

    let mut dqt = vec![0x00];
    dqt.extend_from_slice(&[10u8; 64]);
    jpeg.extend_from_slice(&segment(0xDB, &dqt));

    jpeg.extend_from_slice(&sof0(width, height));
    jpeg
}
