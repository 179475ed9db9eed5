//! Base64 encoding and decoding utilities.
//!
//! Serialized transactions travel inside action POST responses as standard
//! (padded) base64 text. [`Base64Bytes`] wraps that text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use std::fmt::Display;

/// A wrapper for base64-encoded byte data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Bytes(String);

impl Base64Bytes {
    /// Encodes raw binary data into base64 text.
    pub fn encode<T: AsRef<[u8]>>(input: T) -> Self {
        Self(b64.encode(input.as_ref()))
    }

    /// Decodes the base64 text to raw binary data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        b64.decode(&self.0)
    }

    /// Returns the encoded text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the encoded text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Base64Bytes {
    fn from(encoded: String) -> Self {
        Self(encoded)
    }
}

impl AsRef<[u8]> for Base64Bytes {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Display for Base64Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
