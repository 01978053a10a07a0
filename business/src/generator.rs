//! State of the generator screen.
//!
//! `GeneratorState` is the whole view model: the selected mode, the four form
//! fields, the last successful payload with its image, and the error waiting
//! to be shown. It changes only through the methods below, each of which is
//! triggered by exactly one user action.

use url::Url;

use crate::encode::{DEFAULT_CORRECTION, QrRaster, encode};
use crate::error::{AppError, Field, LinkError, ShareError};
use crate::payload::{FormFields, Mode, build_payload};
use crate::platform::{ImageSharer, LinkOpener, QrEncoder};

/// Coarse state of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing generated yet, or the last result was invalidated.
    Idle,
    /// An image is on screen.
    Ready,
}

/// A payload together with its encoding. They are stored and dropped as one
/// value so the image can never outlive or disagree with its payload.
#[derive(Debug, Clone)]
struct Generated {
    payload: String,
    image: QrRaster,
}

#[derive(Debug, Default)]
pub struct GeneratorState {
    mode: Mode,
    fields: FormFields,
    generated: Option<Generated>,
    error: Option<AppError>,
    generation: u64,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Payload of the last successful generate, if still valid.
    pub fn payload(&self) -> Option<&str> {
        self.generated.as_ref().map(|g| g.payload.as_str())
    }

    pub fn image(&self) -> Option<&QrRaster> {
        self.generated.as_ref().map(|g| &g.image)
    }

    /// Error waiting to be shown to the user.
    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.generated.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn can_share(&self) -> bool {
        self.generated.is_some()
    }

    /// Incremented on every successful generate.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switches the active form. Always drops the generated result, even when
    /// `mode` is already selected.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("Mode changed: {} -> {mode}", self.mode);
        }
        self.mode = mode;
        self.clear_generated();
    }

    /// Replaces one field. A changed value invalidates the generated result.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = self.fields.get_mut(field);
        if *slot == value {
            return;
        }
        *slot = value;
        self.clear_generated();
    }

    /// Builds the payload from the active form and encodes it.
    ///
    /// On failure the previous result stays as it was and the error is kept
    /// for display.
    pub fn generate(&mut self, encoder: &dyn QrEncoder) -> Result<(), AppError> {
        match self.build_and_encode(encoder) {
            Ok(generated) => {
                log::info!(
                    "Generated QR code: mode={}, payload_len={}, version={}, size={}x{}",
                    self.mode,
                    generated.payload.len(),
                    generated.image.version(),
                    generated.image.width(),
                    generated.image.height()
                );
                self.generated = Some(generated);
                self.generation += 1;
                self.error = None;
                Ok(())
            }
            Err(err) => Err(self.fail("generate", err)),
        }
    }

    /// Opens the stored payload with `opener`.
    ///
    /// Nothing is opened unless a payload has been generated and it parses as
    /// an absolute URI.
    pub fn test_link(&mut self, opener: &dyn LinkOpener) -> Result<(), AppError> {
        let uri = match self.link_target() {
            Ok(uri) => uri,
            Err(err) => return Err(self.fail("test", err.into())),
        };

        if opener.open_uri(&uri) {
            log::info!("Opened {uri}");
            Ok(())
        } else {
            Err(self.fail("test", LinkError::UnsupportedLink { uri }.into()))
        }
    }

    /// Hands the generated image to `sharer`.
    pub fn share(&mut self, sharer: &dyn ImageSharer) -> Result<(), AppError> {
        let result = match &self.generated {
            Some(generated) => sharer.share(&generated.image, self.mode.share_file_name()),
            None => Err(ShareError::NothingToShare),
        };

        match result {
            Ok(()) => {
                log::info!("Shared QR code");
                Ok(())
            }
            Err(err) => Err(self.fail("share", err.into())),
        }
    }

    /// Starts over: clears the fields, the result and any pending error. The
    /// selected mode is kept.
    pub fn reset(&mut self) {
        log::info!("Reset generator");
        self.fields = FormFields::default();
        self.generated = None;
        self.error = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn build_and_encode(&self, encoder: &dyn QrEncoder) -> Result<Generated, AppError> {
        let payload = build_payload(self.mode, &self.fields)?;
        let image = encode(encoder, &payload, DEFAULT_CORRECTION)?;
        Ok(Generated { payload, image })
    }

    fn link_target(&self) -> Result<String, LinkError> {
        let target = self.payload().unwrap_or_default();
        match Url::parse(target) {
            Ok(_) => Ok(target.to_owned()),
            Err(err) => {
                log::debug!("{target:?} is not a URI: {err}");
                Err(LinkError::InvalidTestTarget {
                    target: target.to_owned(),
                })
            }
        }
    }

    fn clear_generated(&mut self) {
        if self.generated.take().is_some() {
            log::debug!("Cleared generated QR code");
        }
    }

    fn fail(&mut self, action: &str, err: AppError) -> AppError {
        if err.is_silent() {
            log::debug!("{action} ended without result: {err}");
        } else {
            log::warn!("{action} failed: {err}");
            self.error = Some(err.clone());
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::encode::QrcodeEncoder;
    use crate::error::{EncodeError, ValidationError};

    #[derive(Default)]
    struct Opener {
        accept: bool,
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for Opener {
        fn open_uri(&self, uri: &str) -> bool {
            self.opened.borrow_mut().push(uri.to_owned());
            self.accept
        }
    }

    fn generated_url(url: &str) -> GeneratorState {
        let mut state = GeneratorState::new();
        state.set_field(Field::Url, url);
        state.generate(&QrcodeEncoder).unwrap();
        state
    }

    #[test]
    fn test_starts_idle_in_url_mode() {
        let state = GeneratorState::new();
        assert_eq!(state.mode(), Mode::Url);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.payload().is_none());
        assert!(state.image().is_none());
        assert!(!state.can_share());
    }

    #[test]
    fn test_generate_stores_payload_and_image() {
        let state = generated_url("  https://example.com  ");
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.payload(), Some("https://example.com"));
        assert!(state.image().is_some());
        assert_eq!(state.generation(), 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_generate_keeps_state_and_records_error() {
        let mut state = GeneratorState::new();
        let err = state.generate(&QrcodeEncoder).unwrap_err();
        assert_eq!(err, AppError::from(ValidationError::empty(Field::Url)));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.error(), Some(&err));

        state.dismiss_error();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_oversized_payload_records_encode_error() {
        let mut state = GeneratorState::new();
        state.set_field(Field::Url, "z".repeat(5000));
        let err = state.generate(&QrcodeEncoder).unwrap_err();
        assert!(matches!(
            err,
            AppError::Encode(EncodeError::EncodeFailed { .. })
        ));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_mode_change_clears_result() {
        let mut state = generated_url("https://example.com");
        state.set_mode(Mode::Email);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.payload().is_none());

        let mut state = generated_url("https://example.com");
        state.set_mode(Mode::Url);
        assert_eq!(state.phase(), Phase::Idle, "same mode still resets");
    }

    #[test]
    fn test_unchanged_field_keeps_result() {
        let mut state = generated_url("https://example.com");
        state.set_field(Field::Url, "https://example.com");
        assert_eq!(state.phase(), Phase::Ready);

        state.set_field(Field::Url, "https://example.org");
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_link_without_payload_opens_nothing() {
        let mut state = GeneratorState::new();
        let opener = Opener {
            accept: true,
            ..Default::default()
        };
        let err = state.test_link(&opener).unwrap_err();
        assert!(matches!(
            err,
            AppError::Link(LinkError::InvalidTestTarget { .. })
        ));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_link_opens_stored_payload() {
        let mut state = generated_url("https://example.com/a b");
        let opener = Opener {
            accept: true,
            ..Default::default()
        };
        state.test_link(&opener).unwrap();
        assert_eq!(*opener.opened.borrow(), vec!["https://example.com/a b"]);
    }

    #[test]
    fn test_rejected_link_is_unsupported() {
        let mut state = generated_url("https://example.com");
        let opener = Opener::default();
        let err = state.test_link(&opener).unwrap_err();
        assert_eq!(
            err,
            AppError::from(LinkError::UnsupportedLink {
                uri: "https://example.com".to_owned()
            })
        );
        assert!(state.error().is_some());
    }
}
