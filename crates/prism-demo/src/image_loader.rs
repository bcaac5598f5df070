//! Image loading for the gallery.

use std::path::Path;

use prism_core::{FilterImage, GalleryEntry, PrismError};

/// File extensions offered in the open dialog and picked up from the
/// gallery directory.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "tif", "tiff", "webp"];

/// Load an image from disk and convert it to a `FilterImage`.
///
/// Decoding goes through the `image` crate. Pixels stay in their display
/// encoding. Images larger than `max_dim` on either side are downscaled.
pub fn load_image(path: &Path, max_dim: u32) -> Result<FilterImage, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let image = FilterImage::from_dynamic(&img);
    if image.width.max(image.height) > max_dim {
        tracing::debug!(
            "downscaling {} from {}x{} to fit {max_dim}px",
            path.display(),
            image.width,
            image.height
        );
    }
    Ok(image.fit_within(max_dim))
}

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`].
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Gallery entry name for `path`: the file stem.
pub fn entry_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load every supported image in `dir`, sorted by file name.
///
/// Files that fail to decode are logged and skipped. A directory without any
/// loadable image is an error.
pub fn load_gallery_dir(dir: &Path, max_dim: u32) -> Result<Vec<GalleryEntry>, ImageLoadError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        match load_image(&path, max_dim) {
            Ok(image) => entries.push(GalleryEntry::new(entry_name(&path), image)),
            Err(e) => tracing::warn!("skipping {}: {e}", path.display()),
        }
    }

    if entries.is_empty() {
        return Err(PrismError::EmptyGallery.into());
    }
    tracing::info!("loaded {} image(s) from {}", entries.len(), dir.display());
    Ok(entries)
}

/// Errors that can occur during image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] PrismError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("prism-demo-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        let buf = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 128, 0, 255]));
        buf.save(path).unwrap();
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a/photo.JPG")));
        assert!(is_supported(Path::new("b.webp")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("no_extension")));
    }

    #[test]
    fn test_load_image_downscales() {
        let dir = scratch_dir("downscale");
        let path = dir.join("wide.png");
        write_png(&path, 200, 50);

        let img = load_image(&path, 100).unwrap();
        assert_eq!((img.width, img.height), (100, 25));
        assert!((img.pixels[0][0] - 1.0).abs() < 1e-4);

        let full = load_image(&path, 1280).unwrap();
        assert_eq!((full.width, full.height), (200, 50));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_gallery_dir_skips_bad_files() {
        let dir = scratch_dir("gallery");
        write_png(&dir.join("b.png"), 4, 4);
        write_png(&dir.join("a.png"), 2, 2);
        std::fs::write(dir.join("broken.png"), b"not a png").unwrap();
        std::fs::write(dir.join("readme.txt"), b"ignored").unwrap();

        let entries = load_gallery_dir(&dir, 1280).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_dir_is_an_error() {
        let dir = scratch_dir("empty");
        assert!(matches!(
            load_gallery_dir(&dir, 1280),
            Err(ImageLoadError::Core(PrismError::EmptyGallery))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = load_image(Path::new("/nonexistent/prism.png"), 64).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }
}
