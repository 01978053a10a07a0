//! Error taxonomy for payload building, encoding, link testing and sharing.
//!
//! Every error is terminal for the action that produced it. The generator
//! state catches it, logs it and keeps it as the pending modal message.

use thiserror::Error;

/// The form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    EmailTo,
    EmailSubject,
    EmailBody,
}

impl Field {
    /// Label shown next to the field in the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::EmailTo => "To",
            Self::EmailSubject => "Subject",
            Self::EmailBody => "Body",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyInput { field: Field },
}

impl ValidationError {
    pub fn empty(field: Field) -> Self {
        Self::EmptyInput { field }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The encoder produced no symbol, typically because the payload does not
    /// fit at the requested correction level.
    #[error("QR encoding failed: {reason}")]
    EncodeFailed { reason: String },
    #[error("QR rendering failed: {reason}")]
    RenderFailed { reason: String },
}

impl EncodeError {
    pub fn encode_failed(reason: impl Into<String>) -> Self {
        Self::EncodeFailed {
            reason: reason.into(),
        }
    }

    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("not a valid link: {target:?}")]
    InvalidTestTarget { target: String },
    #[error("no application can open {uri}")]
    UnsupportedLink { uri: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("there is no QR code to share")]
    NothingToShare,
    /// The user dismissed the share/save dialog.
    #[error("share cancelled")]
    Cancelled,
    #[error("sharing failed: {reason}")]
    ShareFailed { reason: String },
}

impl ShareError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::ShareFailed {
            reason: reason.into(),
        }
    }
}

/// Any error an action on the generator screen can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Share(#[from] ShareError),
}

impl AppError {
    /// Title of the modal that reports this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Missing input",
            Self::Encode(_) => "Could not create QR code",
            Self::Link(_) => "Cannot open link",
            Self::Share(_) => "Could not share",
        }
    }

    /// Message shown to the user.
    ///
    /// Encoder and renderer failures share one message: the user can only
    /// react to either by shortening the input.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::EmptyInput { field: Field::Url }) => {
                "Please enter a URL.".to_owned()
            }
            Self::Validation(ValidationError::EmptyInput { field }) => {
                format!("Please enter the {} field.", field.label())
            }
            Self::Encode(_) => {
                "The QR code could not be generated. The text may be too long.".to_owned()
            }
            Self::Link(LinkError::InvalidTestTarget { .. }) => {
                "Generate a valid link before testing it.".to_owned()
            }
            Self::Link(LinkError::UnsupportedLink { uri }) => {
                format!("No application is available to open {uri}.")
            }
            Self::Share(ShareError::NothingToShare) => "Generate a QR code first.".to_owned(),
            Self::Share(ShareError::Cancelled) => "Sharing was cancelled.".to_owned(),
            Self::Share(ShareError::ShareFailed { reason }) => {
                format!("The QR code could not be shared: {reason}")
            }
        }
    }

    /// Whether the error warrants a modal at all.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Share(ShareError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_render_failures_share_user_message() {
        let encode: AppError = EncodeError::encode_failed("data too long").into();
        let render: AppError = EncodeError::render_failed("buffer mismatch").into();
        assert_eq!(encode.user_message(), render.user_message());
        assert_eq!(encode.title(), render.title());
    }

    #[test]
    fn test_empty_url_message() {
        let err: AppError = ValidationError::empty(Field::Url).into();
        assert_eq!(err.user_message(), "Please enter a URL.");
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn test_empty_recipient_message_names_field() {
        let err: AppError = ValidationError::empty(Field::EmailTo).into();
        assert_eq!(err.user_message(), "Please enter the To field.");
    }

    #[test]
    fn test_only_cancel_is_silent() {
        assert!(AppError::from(ShareError::Cancelled).is_silent());
        assert!(!AppError::from(ShareError::NothingToShare).is_silent());
        assert!(
            !AppError::from(LinkError::UnsupportedLink {
                uri: "ftp://x".to_owned()
            })
            .is_silent()
        );
    }
}
