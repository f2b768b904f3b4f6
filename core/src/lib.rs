//! # imgdrop - single-file image upload to a hosted image service
//!
//! A user picks a file, it is POSTed as multipart form data straight to the
//! hosting service, and the returned secure URL is shown as a thumbnail.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  File pick  │────▶│ UploadHandler │────▶│  ImageHost  │────▶│ secure_url  │
//! │ (or cancel) │     │ (busy guard)  │     │ (multipart) │     │ / error msg │
//! └─────────────┘     └───────┬───────┘     └─────────────┘     └─────────────┘
//!                             │ update
//!                     ┌───────▼───────┐     ┌─────────────┐
//!                     │  StateStore   │────▶│ WidgetView  │
//!                     │ (UploadState) │     │ (renderers) │
//!                     └───────────────┘     └─────────────┘
//! ```
//!
//! The browser widget (`imgdrop-frontend`) and the command line tool
//! (`imgdrop-cli`) each bring their own [`ImageHost`] and [`StateStore`].
//!
//! ## Modules
//!
//! - [`config`] - Compiled-in upload target
//! - [`error`] - Upload error taxonomy
//! - [`state`] - The three view-state fields and their transitions
//! - [`host`] - Transport seam and the service's response type
//! - [`handler`] - Drives one upload attempt
//! - [`view`] - What a renderer should draw for a given state

pub mod config;
pub mod error;
pub mod state;
pub mod host;
pub mod handler;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{AssetType, UploadTarget};
pub use error::{UploadError, UploadResult, USER_FACING_ERROR};
pub use state::{StateStore, UploadPhase, UploadState};
pub use host::{ImageHost, UploadedImage};
pub use handler::{PendingUpload, UploadHandler};
pub use view::{Control, WidgetView, LOADING_TEXT, THUMBNAIL_ALT, THUMBNAIL_SIZE};
