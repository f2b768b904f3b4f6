//! Content type label for the uploaded part.
//!
//! Labels only: an unknown extension is still uploaded, as
//! `application/octet-stream`.

use std::path::Path;

/// Guess a MIME type from the file extension.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "svg"          => "image/svg+xml",
        "avif"         => "image/avif",
        "bmp"          => "image/bmp",
        "ico"          => "image/x-icon",
        "tiff" | "tif" => "image/tiff",
        "heic"         => "image/heic",
        _              => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        assert_eq!(guess_mime(Path::new("cat.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("/tmp/photo.jpeg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("icon.svg")), "image/svg+xml");
    }

    #[test]
    fn test_unknown_is_octet_stream() {
        assert_eq!(guess_mime(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(guess_mime(Path::new("no_extension")), "application/octet-stream");
    }
}
