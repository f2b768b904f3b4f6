//! UI Components for imgdrop.
//!
//! - [`UploadWidget`] - File picker, loading indicator, error line and thumbnail

mod upload;

pub use upload::*;
