mod action_bar;
mod error_dialog;
mod mode_picker;
mod payload_form;
mod qr_view;
mod screen;

pub use action_bar::action_bar;
pub use error_dialog::error_dialog;
pub use mode_picker::mode_picker;
pub use payload_form::payload_form;
pub use qr_view::{QR_DISPLAY_SIZE, qr_view};
pub use screen::generator_screen;
