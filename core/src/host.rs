//! Transport seam to the hosted image service.
//!
//! An [`ImageHost`] turns one selected file into one multipart POST:
//!
//! | Field           | Content                          |
//! |-----------------|----------------------------------|
//! | `file`          | raw file bytes                   |
//! | `upload_preset` | [`crate::UploadTarget::upload_preset`] |
//!
//! and interprets the answer. Non-2xx statuses become
//! [`UploadError::Status`], unparseable bodies [`UploadError::Decode`].

use serde::{Deserialize, Serialize};

use crate::error::{UploadError, UploadResult};

/// Sends one file to the image service.
///
/// The returned future carries no `Send` bound so browser hosts can hold
/// JS handles across the await.
#[allow(async_fn_in_trait)]
pub trait ImageHost {
    /// What the platform's file picker hands over.
    type File;

    /// Upload `file` and return the service's description of the stored asset.
    async fn upload(&self, file: Self::File) -> UploadResult<UploadedImage>;
}

/// Success body from the image service.
///
/// Only `secure_url` is required; the service sends many more fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// HTTPS address of the stored asset
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Stored size in bytes
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UploadedImage {
    /// Parse a success body.
    pub fn from_json(body: &str) -> UploadResult<Self> {
        serde_json::from_str(body).map_err(UploadError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "asset_id": "3515c6000a548515f1134043f9785c2f",
            "public_id": "gotjephlnz2jgiu20zni",
            "version": 1719307544,
            "width": 1920,
            "height": 1441,
            "format": "jpg",
            "resource_type": "image",
            "created_at": "2024-06-25T09:25:44Z",
            "bytes": 896738,
            "type": "upload",
            "url": "http://res.cloudinary.com/demo/image/upload/v1719307544/gotjephlnz2jgiu20zni.jpg",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1719307544/gotjephlnz2jgiu20zni.jpg",
            "original_filename": "sample"
        }"#;

        let image = UploadedImage::from_json(json).unwrap();
        assert_eq!(
            image.secure_url,
            "https://res.cloudinary.com/demo/image/upload/v1719307544/gotjephlnz2jgiu20zni.jpg"
        );
        assert_eq!(image.width, Some(1920));
        assert_eq!(image.format.as_deref(), Some("jpg"));
        assert_eq!(image.bytes, Some(896738));
    }

    #[test]
    fn test_minimal_response() {
        let image = UploadedImage::from_json(r#"{"secure_url": "https://x/y.png"}"#).unwrap();
        assert_eq!(image.secure_url, "https://x/y.png");
        assert!(image.public_id.is_none());
    }

    #[test]
    fn test_missing_secure_url_is_decode_error() {
        let result = UploadedImage::from_json(r#"{"url": "http://x/y.png"}"#);
        assert!(matches!(result, Err(UploadError::Decode(_))));
    }
}
