use std::io::Write;

use medivoice::domain::{EncodedImage, ImageAttachment, ImageCodecError, ImageFormat};

const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x01, 0x02, 0x03];

#[test]
fn given_image_bytes_when_encoding_and_decoding_then_round_trips_byte_identical() {
    let attachment = ImageAttachment::new(PNG_HEADER.to_vec(), ImageFormat::Png);

    let encoded = EncodedImage::encode(&attachment);
    let decoded = encoded.decode().expect("decode succeeds");

    assert_eq!(decoded, PNG_HEADER);
}

#[test]
fn given_encoded_image_when_rendering_data_uri_then_carries_mime_prefix() {
    let attachment = ImageAttachment::new(vec![0xff, 0xd8, 0xff], ImageFormat::Jpeg);

    let encoded = EncodedImage::encode(&attachment);

    assert!(encoded.data_uri().starts_with("data:image/jpeg;base64,"));
}

#[test]
fn given_image_file_when_encoding_from_file_then_round_trips_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("skin-photo.png");
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(PNG_HEADER).expect("write file");

    let encoded = EncodedImage::from_file(&path).expect("encode succeeds");

    assert_eq!(encoded.format(), ImageFormat::Png);
    assert_eq!(encoded.decode().expect("decode succeeds"), PNG_HEADER);
}

#[test]
fn given_missing_file_when_encoding_then_returns_unreadable_error() {
    let result = EncodedImage::from_file(std::path::Path::new("/nonexistent/photo.jpg"));

    assert!(matches!(result, Err(ImageCodecError::Unreadable(_))));
}

#[test]
fn given_unsupported_extension_when_encoding_then_returns_unsupported_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"not an image").expect("write file");

    let result = EncodedImage::from_file(&path);

    assert!(matches!(result, Err(ImageCodecError::UnsupportedFormat(_))));
}

#[test]
fn given_known_mimes_when_parsing_format_then_maps_correctly() {
    assert_eq!(ImageFormat::from_mime("image/jpeg"), Some(ImageFormat::Jpeg));
    assert_eq!(ImageFormat::from_mime("image/png"), Some(ImageFormat::Png));
    assert_eq!(ImageFormat::from_mime("image/webp"), Some(ImageFormat::Webp));
    assert_eq!(ImageFormat::from_mime("application/pdf"), None);
}

#[test]
fn given_mixed_case_extension_when_parsing_format_then_maps_correctly() {
    assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
    assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
    assert_eq!(ImageFormat::from_extension("gif"), None);
}
