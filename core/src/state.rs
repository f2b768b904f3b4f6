//! View state for the upload widget.
//!
//! Three fields, written only by the [`crate::UploadHandler`] and read only
//! by renderers. Where they live is up to the caller through [`StateStore`]:
//! a Leptos signal in the browser, an `Rc<RefCell<_>>` in the CLI and tests.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::USER_FACING_ERROR;

// =============================================================================
// State
// =============================================================================

/// The widget's view state.
///
/// `Default` is the never-attempted state: not busy, no result, no error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadState {
    /// True while a request is in flight
    pub busy: bool,
    /// Secure URL of the last successful upload
    pub result_url: Option<String>,
    /// Last failure's user-facing message, empty when none
    pub error_text: String,
}

impl UploadState {
    /// An attempt starts. The previous result is kept.
    pub fn begin(&mut self) {
        self.busy = true;
        self.error_text.clear();
    }

    /// The attempt produced a secure URL.
    pub fn succeed(&mut self, url: String) {
        self.result_url = Some(url);
        self.error_text.clear();
    }

    /// The attempt failed. The previous result is kept.
    pub fn fail(&mut self) {
        self.error_text = USER_FACING_ERROR.to_string();
    }

    /// The attempt is over, whatever its outcome.
    pub fn settle(&mut self) {
        self.busy = false;
    }

    pub fn has_error(&self) -> bool {
        !self.error_text.is_empty()
    }

    pub fn phase(&self) -> UploadPhase {
        if self.busy {
            UploadPhase::Uploading
        } else if self.has_error() {
            UploadPhase::Failed
        } else if self.result_url.is_some() {
            UploadPhase::Succeeded
        } else {
            UploadPhase::Idle
        }
    }
}

/// Where the widget is in `idle → uploading → {succeeded | failed}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadPhase {
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

// =============================================================================
// Store
// =============================================================================

/// Somewhere an [`UploadState`] lives.
pub trait StateStore {
    /// Copy of the current state.
    fn snapshot(&self) -> UploadState;

    /// Apply one transition in place.
    fn update(&self, f: impl FnOnce(&mut UploadState));
}

impl StateStore for RefCell<UploadState> {
    fn snapshot(&self) -> UploadState {
        self.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut UploadState)) {
        f(&mut self.borrow_mut());
    }
}

impl<S: StateStore + ?Sized> StateStore for Rc<S> {
    fn snapshot(&self) -> UploadState {
        (**self).snapshot()
    }

    fn update(&self, f: impl FnOnce(&mut UploadState)) {
        (**self).update(f)
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn snapshot(&self) -> UploadState {
        (**self).snapshot()
    }

    fn update(&self, f: impl FnOnce(&mut UploadState)) {
        (**self).update(f)
    }
}
