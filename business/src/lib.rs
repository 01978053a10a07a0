//! Payload building, QR encoding and the generator view model.
//!
//! This crate has no UI dependency. The `quickqr-ui` crate renders
//! [`GeneratorState`] and supplies the [`platform`] capabilities.

pub mod config;
pub mod encode;
pub mod error;
pub mod generator;
pub mod payload;
pub mod platform;

pub use config::AppConfig;
pub use encode::{
    DEFAULT_CORRECTION, ErrorCorrection, QrRaster, QrSymbol, QrcodeEncoder, SCALE_FACTOR, encode,
    render,
};
pub use error::{AppError, EncodeError, Field, LinkError, ShareError, ValidationError};
pub use generator::{GeneratorState, Phase};
pub use payload::{FormFields, Mode, build_mailto, build_payload, build_url};
pub use platform::{ImageSharer, LinkOpener, QrEncoder};
