use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

/// Raw image bytes as received from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

impl ImageAttachment {
    pub fn new(bytes: Vec<u8>, format: ImageFormat) -> Self {
        Self { bytes, format }
    }
}

/// Transport-safe representation of an image for the vision capability.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    format: ImageFormat,
    payload: String,
}

impl EncodedImage {
    pub fn encode(attachment: &ImageAttachment) -> Self {
        Self {
            format: attachment.format,
            payload: general_purpose::STANDARD.encode(&attachment.bytes),
        }
    }

    /// Reads and encodes an image file, inferring the format from the
    /// file extension.
    pub fn from_file(path: &Path) -> Result<Self, ImageCodecError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| ImageCodecError::UnsupportedFormat(path.display().to_string()))?;

        let bytes = std::fs::read(path)
            .map_err(|e| ImageCodecError::Unreadable(format!("{}: {}", path.display(), e)))?;

        Ok(Self::encode(&ImageAttachment::new(bytes, format)))
    }

    pub fn decode(&self) -> Result<Vec<u8>, ImageCodecError> {
        general_purpose::STANDARD
            .decode(&self.payload)
            .map_err(|e| ImageCodecError::InvalidPayload(e.to_string()))
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Data URI form expected inside an `image_url` content part.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.format.as_mime(), self.payload)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageCodecError {
    #[error("image file not found or unreadable: {0}")]
    Unreadable(String),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid encoded payload: {0}")]
    InvalidPayload(String),
}
