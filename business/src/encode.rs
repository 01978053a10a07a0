//! QR encoding and rasterization.
//!
//! Symbol construction is delegated to a [`QrEncoder`]. This module only
//! turns the native module grid into a display bitmap by nearest-neighbor
//! upscaling, so module edges stay sharp at any display size.

use image::{ExtendedColorType, GrayImage, ImageBuffer, ImageEncoder, Luma, codecs::png::PngEncoder};
use qrcode::{EcLevel, QrCode};

use crate::error::EncodeError;
use crate::platform::QrEncoder;

/// Pixels per module in the rendered bitmap.
pub const SCALE_FACTOR: u32 = 12;

/// Correction level used by the generator. Not exposed to the user.
pub const DEFAULT_CORRECTION: ErrorCorrection = ErrorCorrection::Medium;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// QR error correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCorrection {
    /// ~7% recovery.
    Low,
    /// ~15% recovery.
    #[default]
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => Self::L,
            ErrorCorrection::Medium => Self::M,
            ErrorCorrection::Quartile => Self::Q,
            ErrorCorrection::High => Self::H,
        }
    }
}

/// A QR symbol at native resolution: one entry per module, row-major,
/// `true` for dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    width: usize,
    version: i16,
    modules: Vec<bool>,
}

impl QrSymbol {
    pub fn new(width: usize, version: i16, modules: Vec<bool>) -> Self {
        Self {
            width,
            version,
            modules,
        }
    }

    /// Number of modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

impl QrEncoder for QrcodeEncoder {
    fn encode_symbol(&self, data: &[u8], level: ErrorCorrection) -> Option<QrSymbol> {
        let code = match QrCode::with_error_correction_level(data, EcLevel::from(level)) {
            Ok(code) => code,
            Err(err) => {
                log::warn!(
                    "qrcode rejected {} bytes at {level:?}: {err}",
                    data.len()
                );
                return None;
            }
        };

        let version = match code.version() {
            qrcode::Version::Normal(v) | qrcode::Version::Micro(v) => v,
        };
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();

        Some(QrSymbol::new(code.width(), version, modules))
    }
}

/// The display-ready bitmap of a QR symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRaster {
    image: GrayImage,
    module_count: usize,
    version: i16,
    scale: u32,
}

impl QrRaster {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Modules per side of the underlying symbol.
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        *self.image.get_pixel(x, y) == DARK
    }

    /// Luma bytes, one per pixel, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Opaque RGBA bytes, four per pixel, row-major.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.image
            .as_raw()
            .iter()
            .flat_map(|&l| [l, l, l, u8::MAX])
            .collect()
    }

    pub fn to_png(&self) -> Result<Vec<u8>, EncodeError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| EncodeError::render_failed(e.to_string()))?;
        Ok(png)
    }
}

/// Encodes `payload` and renders it at [`SCALE_FACTOR`].
pub fn encode(
    encoder: &dyn QrEncoder,
    payload: &str,
    level: ErrorCorrection,
) -> Result<QrRaster, EncodeError> {
    if payload.is_empty() {
        return Err(EncodeError::encode_failed("payload is empty"));
    }

    let symbol = encoder
        .encode_symbol(payload.as_bytes(), level)
        .ok_or_else(|| {
            EncodeError::encode_failed(format!(
                "{} bytes do not fit in a QR symbol at {level:?} correction",
                payload.len()
            ))
        })?;

    render(&symbol, SCALE_FACTOR)
}

/// Rasterizes `symbol`, replicating each module into a `scale` x `scale` block.
pub fn render(symbol: &QrSymbol, scale: u32) -> Result<QrRaster, EncodeError> {
    if scale == 0 {
        return Err(EncodeError::render_failed("scale must be positive"));
    }

    let modules = symbol.width();
    if modules == 0 || symbol.modules().len() != modules * modules {
        return Err(EncodeError::render_failed(format!(
            "symbol of width {modules} has {} modules",
            symbol.modules().len()
        )));
    }

    let native_size = u32::try_from(modules)
        .map_err(|_| EncodeError::render_failed("symbol too wide"))?;
    let size = native_size
        .checked_mul(scale)
        .ok_or_else(|| EncodeError::render_failed("raster dimensions overflow"))?;

    let luma = symbol
        .modules()
        .iter()
        .map(|&dark| if dark { DARK.0[0] } else { LIGHT.0[0] })
        .collect::<Vec<_>>();
    let native: GrayImage = ImageBuffer::from_raw(native_size, native_size, luma)
        .ok_or_else(|| EncodeError::render_failed("module buffer does not match symbol size"))?;

    let image = ImageBuffer::from_fn(size, size, |x, y| *native.get_pixel(x / scale, y / scale));

    Ok(QrRaster {
        image,
        module_count: modules,
        version: symbol.version(),
        scale,
    })
}
