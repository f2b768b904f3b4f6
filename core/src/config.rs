//! Upload target configuration.
//!
//! The browser widget always uploads to the compiled-in account below.
//! The CLI may point the same handler somewhere else (see `imgdrop-cli`).

use std::fmt;

/// Hosting service API root.
pub const API_BASE: &str = "https://api.cloudinary.com";

/// Hosting account identifier.
pub const CLOUD_NAME: &str = "df8xpyycv";

/// Asset type the widget uploads as.
pub const ASSET_TYPE: AssetType = AssetType::Image;

/// Server-side upload preset applied to every upload.
pub const UPLOAD_PRESET: &str = "d-code_trail";

/// Resource kind segment of the upload endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetType {
    Image,
    Video,
    Raw,
    /// Let the service detect the kind.
    Auto,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::Video => "video",
            AssetType::Raw => "raw",
            AssetType::Auto => "auto",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how an upload is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadTarget {
    /// API root, without trailing slash
    pub api_base: String,
    /// Account identifier
    pub cloud_name: String,
    /// Endpoint resource kind
    pub asset_type: AssetType,
    /// Value sent in the `upload_preset` field
    pub upload_preset: String,
}

impl UploadTarget {
    /// Full upload URL: `{api_base}/v1_1/{cloud_name}/{asset_type}/upload`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1_1/{}/{}/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name,
            self.asset_type
        )
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.to_string();
        self
    }

    pub fn with_cloud_name(mut self, cloud_name: &str) -> Self {
        self.cloud_name = cloud_name.to_string();
        self
    }

    pub fn with_upload_preset(mut self, upload_preset: &str) -> Self {
        self.upload_preset = upload_preset.to_string();
        self
    }
}

impl Default for UploadTarget {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            cloud_name: CLOUD_NAME.to_string(),
            asset_type: ASSET_TYPE,
            upload_preset: UPLOAD_PRESET.to_string(),
        }
    }
}
