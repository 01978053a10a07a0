//! Host capabilities the generator depends on.
//!
//! The generator never talks to the OS directly. The UI crate supplies real
//! implementations; tests supply recording fakes.

use crate::encode::{ErrorCorrection, QrRaster, QrSymbol};
use crate::error::ShareError;

/// Builds a QR symbol at native module resolution.
///
/// Returns `None` when the data cannot be encoded at `level`, most commonly
/// because it exceeds the symbol capacity.
pub trait QrEncoder {
    fn encode_symbol(&self, data: &[u8], level: ErrorCorrection) -> Option<QrSymbol>;
}

/// Hands a URI to whatever the platform uses to open it.
pub trait LinkOpener {
    /// Returns `false` if the platform cannot open `uri`.
    fn open_uri(&self, uri: &str) -> bool;
}

/// Exports a generated image out of the app (save dialog, clipboard, share sheet).
pub trait ImageSharer {
    fn share(&self, image: &QrRaster, file_name: &str) -> Result<(), ShareError>;
}

impl<T: QrEncoder + ?Sized> QrEncoder for Box<T> {
    fn encode_symbol(&self, data: &[u8], level: ErrorCorrection) -> Option<QrSymbol> {
        (**self).encode_symbol(data, level)
    }
}

impl<T: LinkOpener + ?Sized> LinkOpener for Box<T> {
    fn open_uri(&self, uri: &str) -> bool {
        (**self).open_uri(uri)
    }
}

impl<T: ImageSharer + ?Sized> ImageSharer for Box<T> {
    fn share(&self, image: &QrRaster, file_name: &str) -> Result<(), ShareError> {
        (**self).share(image, file_name)
    }
}
