//! Base64 and UTF-8 buffer conversions.

use data_encoding::BASE64;

use crate::error::CryptoError;

/// Encode bytes as standard padded base64.
#[must_use]
pub fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode standard padded base64.
///
/// # Errors
///
/// Returns `CryptoError::Encoding` if `encoded` is not valid base64.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    BASE64
        .decode(encoded.as_bytes())
        .map_err(|e| CryptoError::Encoding(format!("invalid base64: {e}")))
}

/// Decode UTF-8 bytes into an owned `String`.
///
/// # Errors
///
/// Returns `CryptoError::Encoding` if `bytes` is not valid UTF-8.
pub fn utf8_to_string(bytes: Vec<u8>) -> Result<String, CryptoError> {
    String::from_utf8(bytes).map_err(|e| CryptoError::Encoding(format!("invalid utf-8: {e}")))
}
