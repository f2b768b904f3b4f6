//! View state held in a Leptos signal.

use imgdrop::{StateStore, UploadState};
use leptos::*;

/// [`StateStore`] over the widget's `RwSignal`.
///
/// `Copy`, so it can be moved into every event closure and spawned task.
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<UploadState>);

impl SignalStore {
    pub fn signal(&self) -> RwSignal<UploadState> {
        self.0
    }
}

impl StateStore for SignalStore {
    fn snapshot(&self) -> UploadState {
        self.0.get_untracked()
    }

    fn update(&self, f: impl FnOnce(&mut UploadState)) {
        self.0.update(f);
    }
}
