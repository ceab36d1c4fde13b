use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("unsupported image extension {0:?} (png/jpg/jpeg only)")]
    UnsupportedExtension(String),
    #[error("could not read the image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode a PNG/JPEG from disk as an RGBA8 grid, origin top-left.
pub fn load_rgba(path: &Path) -> Result<image::RgbaImage, ImageError> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" => Ok(image::open(path)?.to_rgba8()),
        other => Err(ImageError::UnsupportedExtension(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_extensions() {
        let err = load_rgba(Path::new("clip.gif")).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedExtension(e) if e == "gif"));
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load_rgba(Path::new("no-such-image.png")).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
