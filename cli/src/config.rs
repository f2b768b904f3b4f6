//! Upload target resolution for the CLI.
//!
//! Precedence: command-line flags, then environment (including a `.env`
//! file), then the compiled-in [`UploadTarget::default`].

use imgdrop::UploadTarget;
use std::env;

/// Overrides the API root.
pub const ENV_API_BASE: &str = "IMGDROP_API_BASE";

/// Overrides the account identifier.
pub const ENV_CLOUD_NAME: &str = "IMGDROP_CLOUD_NAME";

/// Overrides the upload preset.
pub const ENV_UPLOAD_PRESET: &str = "IMGDROP_UPLOAD_PRESET";

/// Partial target; unset fields fall through to the next source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetOverrides {
    pub api_base: Option<String>,
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
}

impl TargetOverrides {
    /// Read overrides from the process environment, loading `.env` first.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            api_base: read(ENV_API_BASE),
            cloud_name: read(ENV_CLOUD_NAME),
            upload_preset: read(ENV_UPLOAD_PRESET),
        }
    }

    /// Fields of `self`, filling gaps from `fallback`.
    pub fn or(self, fallback: TargetOverrides) -> Self {
        Self {
            api_base: self.api_base.or(fallback.api_base),
            cloud_name: self.cloud_name.or(fallback.cloud_name),
            upload_preset: self.upload_preset.or(fallback.upload_preset),
        }
    }

    pub fn apply(&self, mut target: UploadTarget) -> UploadTarget {
        if let Some(ref api_base) = self.api_base {
            target = target.with_api_base(api_base);
        }
        if let Some(ref cloud_name) = self.cloud_name {
            target = target.with_cloud_name(cloud_name);
        }
        if let Some(ref upload_preset) = self.upload_preset {
            target = target.with_upload_preset(upload_preset);
        }
        target
    }
}

/// Final target for this run.
pub fn resolve_target(flags: TargetOverrides) -> UploadTarget {
    flags
        .or(TargetOverrides::from_env())
        .apply(UploadTarget::default())
}
