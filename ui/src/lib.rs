#![warn(clippy::all, rust_2018_idioms)]

//! The QuickQR egui app: one screen that turns a URL or an email draft into a
//! QR code.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::QuickQrApp;
