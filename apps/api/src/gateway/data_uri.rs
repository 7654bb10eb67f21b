//! `data:` URI parsing for documents passed by reference (resume PDFs).
//!
//! Only the base64 form is accepted: `data:<media-type>[;param]*;base64,<payload>`.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

use crate::llm_client::Document;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUriError {
    #[error("document reference must start with 'data:'")]
    MissingScheme,

    #[error("document reference has no ',' separating header and payload")]
    MissingPayloadSeparator,

    #[error("document reference must declare a media type")]
    MissingMediaType,

    #[error("document payload must be base64-encoded")]
    NotBase64,

    #[error("document payload is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("document payload is empty")]
    EmptyPayload,
}

/// A parsed `data:` URI. The payload is kept in its base64 form since that is
/// what the oracle consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    media_type: String,
    payload: String,
}

impl DataUri {
    pub fn parse(raw: &str) -> Result<Self, DataUriError> {
        let rest = raw
            .trim()
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(DataUriError::MissingPayloadSeparator)?;

        let mut params = header.split(';');
        let media_type = params.next().unwrap_or_default().trim().to_ascii_lowercase();
        if media_type.is_empty() {
            return Err(DataUriError::MissingMediaType);
        }
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(DataUriError::NotBase64);
        }

        let payload = payload.trim();
        if payload.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }
        let decoded = STANDARD
            .decode(payload)
            .map_err(|e| DataUriError::InvalidBase64(e.to_string()))?;
        if decoded.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }

        Ok(Self {
            media_type,
            payload: payload.to_string(),
        })
    }

    /// Builds a data URI from raw bytes, e.g. an uploaded file.
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> Result<Self, DataUriError> {
        let media_type = media_type.trim().to_ascii_lowercase();
        if media_type.is_empty() {
            return Err(DataUriError::MissingMediaType);
        }
        if bytes.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }
        Ok(Self {
            media_type,
            payload: STANDARD.encode(bytes),
        })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }

    pub fn into_document(self) -> Document {
        Document {
            media_type: self.media_type,
            data: self.payload,
        }
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "data:{};base64,{}", self.media_type, self.payload)
    }
}
