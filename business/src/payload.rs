//! Payload construction from the form fields.
//!
//! The payload is the exact text that gets encoded into the QR symbol: either
//! a trimmed URL string or a `mailto:` URI.

use std::borrow::Cow;

use url::Url;

use crate::error::{Field, ValidationError};

/// Which form is active on the generator screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Url,
    Email,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Url, Self::Email];

    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Email => "Email",
        }
    }

    /// File name suggested when the generated image is shared.
    pub fn share_file_name(self) -> &'static str {
        match self {
            Self::Url => "qr-url.png",
            Self::Email => "qr-email.png",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text as typed by the user. Nothing is validated until generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub url: String,
    pub email_to: String,
    pub email_subject: String,
    pub email_body: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::EmailTo => &self.email_to,
            Field::EmailSubject => &self.email_subject,
            Field::EmailBody => &self.email_body,
        }
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Url => &mut self.url,
            Field::EmailTo => &mut self.email_to,
            Field::EmailSubject => &mut self.email_subject,
            Field::EmailBody => &mut self.email_body,
        }
    }
}

/// Builds the payload for `mode` from the current field values.
pub fn build_payload(mode: Mode, fields: &FormFields) -> Result<String, ValidationError> {
    match mode {
        Mode::Url => build_url(&fields.url),
        Mode::Email => build_mailto(&fields.email_to, &fields.email_subject, &fields.email_body),
    }
}

/// Returns the trimmed URL unchanged. No scheme is added and no URL syntax is
/// checked.
pub fn build_url(url: &str) -> Result<String, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::empty(Field::Url));
    }
    Ok(url.to_owned())
}

/// Builds a `mailto:` URI with optional `subject` and `body` query parameters,
/// in that order. Blank optional values are left out entirely.
pub fn build_mailto(to: &str, subject: &str, body: &str) -> Result<String, ValidationError> {
    let to = to.trim();
    if to.is_empty() {
        return Err(ValidationError::empty(Field::EmailTo));
    }

    let params = [("subject", subject.trim()), ("body", body.trim())]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>();

    match mailto_uri(to, &params) {
        Some(uri) => Ok(uri),
        None => {
            log::warn!("Could not build a mailto URI for {to:?}, falling back to the bare address");
            Ok(format!("mailto:{to}"))
        }
    }
}

/// Characters a recipient may carry into the URI path unescaped. `?` and `#`
/// stay raw so a recipient that already holds a query or fragment is caught
/// below.
fn keeps_raw(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@?#".contains(ch)
}

/// Percent-encodes everything outside the path character set, so spaces,
/// brackets and control characters survive instead of being left invalid or
/// dropped by the URI parser.
fn encode_recipient(to: &str) -> Cow<'_, str> {
    if to.chars().all(keeps_raw) {
        return Cow::Borrowed(to);
    }

    let mut encoded = String::with_capacity(to.len() + 8);
    let mut buf = [0; 4];
    for ch in to.chars() {
        if keeps_raw(ch) {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    Cow::Owned(encoded)
}

/// A recipient that the parser splits into a query or fragment is rejected,
/// since appending the parameters would silently drop part of it.
fn mailto_uri(to: &str, params: &[String]) -> Option<String> {
    let mut uri = Url::parse(&format!("mailto:{}", encode_recipient(to))).ok()?;
    if uri.query().is_some() || uri.fragment().is_some() {
        return None;
    }
    if !params.is_empty() {
        uri.set_query(Some(&params.join("&")));
    }
    Some(uri.into())
}
