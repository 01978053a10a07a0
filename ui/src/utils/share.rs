//! Getting the generated image out of the app.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: "Share…" writes a PNG through a native
//!   save dialog (`rfd`); "Copy image" puts the bitmap on the clipboard
//!   (`arboard`).
//! - **Web (WASM)**: not supported; both actions report an error.

use quickqr_business::{ImageSharer, QrRaster, ShareError};

/// Saves the image as PNG to a location picked in the system save dialog.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FileDialogSharer {
    start_dir: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileDialogSharer {
    pub fn new(start_dir: Option<&std::path::Path>) -> Self {
        Self {
            start_dir: start_dir.map(std::path::Path::to_path_buf),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ImageSharer for FileDialogSharer {
    fn share(&self, image: &QrRaster, file_name: &str) -> Result<(), ShareError> {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(file_name)
            .set_title("Save QR code");
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let path = dialog.save_file().ok_or(ShareError::Cancelled)?;
        save_png(image, &path)
    }
}

/// Writes `image` to `path` as PNG.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(image: &QrRaster, path: &std::path::Path) -> Result<(), ShareError> {
    let png = image
        .to_png()
        .map_err(|e| ShareError::failed(e.to_string()))?;
    std::fs::write(path, &png)
        .map_err(|e| ShareError::failed(format!("{}: {e}", path.display())))?;

    log::info!(
        "Saved QR code to {}: {}x{}, bytes={}",
        path.display(),
        image.width(),
        image.height(),
        png.len()
    );
    Ok(())
}

/// Copies the image to the system clipboard.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct ClipboardSharer;

#[cfg(not(target_arch = "wasm32"))]
impl ImageSharer for ClipboardSharer {
    fn share(&self, image: &QrRaster, _file_name: &str) -> Result<(), ShareError> {
        use arboard::{Clipboard, ImageData};

        let mut clipboard = Clipboard::new().map_err(|e| {
            log::warn!("Failed to access clipboard: {e}");
            ShareError::failed(e.to_string())
        })?;

        clipboard
            .set_image(ImageData {
                width: image.width() as usize,
                height: image.height() as usize,
                bytes: image.to_rgba().into(),
            })
            .map_err(|e| ShareError::failed(e.to_string()))?;

        log::info!(
            "Copied QR code to clipboard: width={}, height={}",
            image.width(),
            image.height()
        );
        Ok(())
    }
}

/// Stand-in for targets without an export path.
#[derive(Debug, Default)]
pub struct UnavailableSharer;

impl ImageSharer for UnavailableSharer {
    fn share(&self, _image: &QrRaster, _file_name: &str) -> Result<(), ShareError> {
        Err(ShareError::failed("not supported on this platform"))
    }
}
