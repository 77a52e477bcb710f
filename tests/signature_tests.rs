use imgprobe::signature::{classify, Classification, SIGNATURE_LEN};
use imgprobe::SupportedFormat;

#[test]
fn test_classify_known_magics() {
    assert_eq!(
        classify(&[0xFF, 0xD8]),
        Classification::Format(SupportedFormat::Jpeg)
    );
    assert_eq!(
        classify(&[0x89, 0x50, 0x4E, 0x47]),
        Classification::Format(SupportedFormat::Png)
    );
    assert_eq!(
        classify(b"GIF87a"),
        Classification::Format(SupportedFormat::Gif)
    );
    assert_eq!(classify(b"BM"), Classification::Format(SupportedFormat::Bmp));
}

#[test]
fn test_classify_short_buffers() {
    assert_eq!(classify(&[]), Classification::NeedMoreData);
    assert_eq!(classify(&[0xFF]), Classification::NeedMoreData);
    assert_eq!(
        classify(&[0xFF, 0xD8][..SIGNATURE_LEN - 1]),
        Classification::NeedMoreData
    );
}

#[test]
fn test_classify_unknown_magic() {
    assert_eq!(classify(b"RIFF"), Classification::Unsupported);
    assert_eq!(classify(&[0xD8, 0xFF]), Classification::Unsupported);
    assert_eq!(classify(&[0x00, 0x00]), Classification::Unsupported);
}

#[test]
fn test_magic_table_round_trips() {
    for format in SupportedFormat::ALL {
        let magic = format.magic().to_be_bytes();
        assert_eq!(classify(&magic), Classification::Format(format));
        assert_eq!(SupportedFormat::from_magic(format.magic()), Some(format));
    }
}

#[test]
fn test_minimum_samples() {
    assert_eq!(SupportedFormat::Jpeg.minimum_sample(), None);
    assert_eq!(SupportedFormat::Png.minimum_sample(), Some(25));
    assert_eq!(SupportedFormat::Gif.minimum_sample(), Some(11));
    assert_eq!(SupportedFormat::Bmp.minimum_sample(), Some(29));
}

#[test]
fn test_format_labels() {
    assert_eq!(SupportedFormat::Jpeg.extension(), "jpg");
    assert_eq!(SupportedFormat::Bmp.mime_type(), "image/bmp");
    assert_eq!(SupportedFormat::Png.to_string(), "PNG");
}
