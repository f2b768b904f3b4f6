//! Upload handler.
//!
//! Drives one attempt from a file selection to either a secure URL or the
//! generic error text. The attempt is split in two so that `busy` is set
//! synchronously inside the selection event, before the future is even
//! polled:
//!
//! ```rust,ignore
//! if let Some(pending) = handler.select(store, file) {
//!     spawn_local(async move {
//!         pending.send().await;
//!     });
//! }
//! ```

use crate::host::ImageHost;
use crate::state::{StateStore, UploadPhase, UploadState};

/// Reacts to file selections by uploading through `H`.
#[derive(Clone, Debug)]
pub struct UploadHandler<H> {
    host: H,
}

impl<H: ImageHost> UploadHandler<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ImageHost + Clone> UploadHandler<H> {
    /// Start an attempt for `file`.
    ///
    /// A cancelled selection (`None`) leaves the store untouched and returns
    /// `None`. Otherwise the store is marked busy with its error cleared
    /// before this returns.
    pub fn select<S: StateStore>(
        &self,
        store: S,
        file: Option<H::File>,
    ) -> Option<PendingUpload<H, S>> {
        let Some(file) = file else {
            log::debug!("No file selected, nothing to upload");
            return None;
        };

        store.update(UploadState::begin);

        Some(PendingUpload {
            host: self.host.clone(),
            store,
            file,
        })
    }

    /// [`select`](Self::select) and [`PendingUpload::send`] in one go.
    pub async fn handle_selection<S: StateStore>(
        &self,
        store: S,
        file: Option<H::File>,
    ) -> Option<UploadPhase> {
        match self.select(store, file) {
            Some(pending) => Some(pending.send().await),
            None => None,
        }
    }
}

/// An attempt whose state is already busy, waiting to hit the network.
pub struct PendingUpload<H: ImageHost, S> {
    host: H,
    store: S,
    file: H::File,
}

impl<H: ImageHost, S: StateStore> PendingUpload<H, S> {
    /// Perform the request and record its outcome.
    ///
    /// `busy` is cleared on every exit path, including when this future is
    /// dropped before completing. Returns the phase the store settled in.
    pub async fn send(self) -> UploadPhase {
        let PendingUpload { host, store, file } = self;
        let settle = SettleGuard { store: &store };

        match host.upload(file).await {
            Ok(image) => {
                log::info!("Uploaded image URL: {}", image.secure_url);
                store.update(|state| state.succeed(image.secure_url));
            }
            Err(err) => {
                log::error!("Upload failed: {}", err);
                store.update(UploadState::fail);
            }
        }

        drop(settle);
        store.snapshot().phase()
    }
}

/// Clears `busy` when dropped.
struct SettleGuard<'a, S: StateStore> {
    store: &'a S,
}

impl<S: StateStore> Drop for SettleGuard<'_, S> {
    fn drop(&mut self) {
        self.store.update(UploadState::settle);
    }
}
