//! Image detection by file extension

use std::path::Path;

/// Extensions accepted by the images-only filter, lowercase
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "gif", "png", "bmp", "webp"];

/// Whether `path` ends in one of [`IMAGE_EXTENSIONS`], ignoring case
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
