//! `data:` URL parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::config::DATA_URL_SCHEME;

/// A parsed `data:[<mime>][;base64],<payload>` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub base64: bool,
    pub payload: String,
}

/// Errors from [`DataUrl::parse`] and [`DataUrl::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,
    #[error("data URL has no ',' separator")]
    MissingPayload,
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

impl DataUrl {
    pub fn parse(url: &str) -> Result<Self, DataUrlError> {
        let rest = strip_scheme(url).ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;

        let (mime, base64) = match header.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (header, false),
        };

        Ok(Self {
            mime: mime.to_ascii_lowercase(),
            base64,
            payload: payload.to_string(),
        })
    }

    /// Decode the payload into raw bytes.
    ///
    /// Non-base64 payloads are returned as their UTF-8 bytes without
    /// percent-decoding; canvas output is always base64.
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        if !self.base64 {
            return Ok(self.payload.as_bytes().to_vec());
        }
        STANDARD
            .decode(self.payload.as_bytes())
            .map_err(|e| DataUrlError::InvalidBase64(e.to_string()))
    }
}

/// Check that `url` is a data URL of the given type.
///
/// Browsers fall back to PNG for types the canvas cannot encode, so callers
/// asking for e.g. `image/webp` should not assume the prefix matches.
pub fn has_data_prefix(url: &str, mime: &str) -> bool {
    strip_scheme(url).is_some_and(|rest| {
        rest.get(..mime.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(mime))
            && rest[mime.len()..].starts_with([';', ','])
    })
}

fn strip_scheme(url: &str) -> Option<&str> {
    let head = url.get(..DATA_URL_SCHEME.len())?;
    head.eq_ignore_ascii_case(DATA_URL_SCHEME)
        .then(|| &url[DATA_URL_SCHEME.len()..])
}
