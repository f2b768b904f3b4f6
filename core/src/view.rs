//! What to draw for a given [`UploadState`].
//!
//! Each renderer (Leptos component, terminal) draws the same three
//! independent parts: the control, the error line, and the thumbnail.

use crate::state::UploadState;

/// Shown in place of the picker while a request is in flight.
pub const LOADING_TEXT: &str = "Uploading...";

/// Thumbnail edge length, as a CSS length.
pub const THUMBNAIL_SIZE: &str = "4rem";

/// Alt text of the thumbnail.
pub const THUMBNAIL_ALT: &str = "Uploaded";

/// Either the loading indicator or the picker, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Loading,
    /// Upload icon plus file input
    Picker,
}

/// Render plan for the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetView<'a> {
    pub control: Control,
    pub error: Option<&'a str>,
    pub thumbnail: Option<&'a str>,
}

impl UploadState {
    pub fn view(&self) -> WidgetView<'_> {
        WidgetView {
            control: if self.busy { Control::Loading } else { Control::Picker },
            error: self.has_error().then_some(self.error_text.as_str()),
            thumbnail: self.result_url.as_deref(),
        }
    }
}
