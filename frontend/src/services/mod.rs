//! Browser services.
//!
//! # Services
//!
//! - [`cloudinary`] - Multipart upload to the hosted image service via `fetch`

pub mod cloudinary;

pub use cloudinary::*;
