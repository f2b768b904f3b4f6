//! # imgdrop CLI - the upload widget on the command line
//!
//! Same handler and view state as the browser widget, with a `reqwest`
//! transport and a plain-text renderer.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use imgdrop::UploadTarget;
//! use imgdrop_cli::upload_file;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let state = upload_file(UploadTarget::default(), Some("cat.png".into())).await;
//!     println!("{:?}", state.result_url);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Target overrides from flags, env and `.env`
//! - [`host`] - Multipart upload over `reqwest`
//! - [`mime`] - Content type label for the `file` part
//! - [`render`] - Text rendering of the widget
//! - [`logging`] - `tracing` setup

pub mod config;
pub mod host;
pub mod mime;
pub mod render;
pub mod logging;

use imgdrop::{UploadHandler, UploadState, UploadTarget};
use std::cell::RefCell;
use std::path::PathBuf;

pub use config::{resolve_target, TargetOverrides};
pub use host::ReqwestHost;
pub use logging::init_logging;
pub use render::render_text;

/// Run one attempt against `target` from a fresh state.
///
/// `None` behaves like a cancelled file picker: nothing is sent and the
/// returned state is the default one.
pub async fn upload_file(target: UploadTarget, file: Option<PathBuf>) -> UploadState {
    let handler = UploadHandler::new(ReqwestHost::new(target));
    let store = RefCell::new(UploadState::default());

    handler.handle_selection(&store, file).await;

    store.into_inner()
}
