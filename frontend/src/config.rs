//! Page configuration.
//!
//! The upload destination itself is compiled into `imgdrop::config` and is
//! not configurable from the browser.

/// Document title.
pub const APP_TITLE: &str = "Image Upload";

/// Icon shown next to the file picker.
pub const UPLOAD_ICON: &str = "☁️";

/// Corner radius of the thumbnail.
pub const THUMBNAIL_RADIUS: &str = "8px";
