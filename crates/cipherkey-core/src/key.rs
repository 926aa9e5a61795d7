//! Derived symmetric key bundle.

use std::fmt;

use secrecy::{ExposeSecret, SecretSlice};
use zeroize::Zeroizing;

use crate::encoding::{from_base64, to_base64};
use crate::error::CryptoError;
use crate::params::KEY_LEN;

/// Key bundle produced by [`CryptoHelper::make_key`](crate::CryptoHelper::make_key).
///
/// - `hash_key` — password-verification hash of the master key; never used to encrypt
/// - `enc_key` — AES-CBC key
/// - `mac_key` — HMAC-SHA-256 key
///
/// `enc_key` and `mac_key` are expanded from one master secret under disjoint
/// HKDF labels, so they are always independent. An empty field means "not
/// set". All fields are zeroized on drop and masked in `Debug`.
pub struct SymmetricCryptoKey {
    hash_key: SecretSlice<u8>,
    enc_key: SecretSlice<u8>,
    mac_key: SecretSlice<u8>,
}

impl SymmetricCryptoKey {
    /// Build a key bundle from its three parts.
    #[must_use]
    pub fn new(hash_key: Vec<u8>, enc_key: Vec<u8>, mac_key: Vec<u8>) -> Self {
        Self {
            hash_key: hash_key.into(),
            enc_key: enc_key.into(),
            mac_key: mac_key.into(),
        }
    }

    /// Build an encryption-only bundle (no `hash_key`), e.g. after import.
    #[must_use]
    pub fn from_enc_mac(enc_key: Vec<u8>, mac_key: Vec<u8>) -> Self {
        Self::new(Vec::new(), enc_key, mac_key)
    }

    /// Restore an encryption-only bundle from [`to_base64`](Self::to_base64) output.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Encoding` for invalid base64 and
    /// `CryptoError::InvalidArgument` if the decoded length is not 64 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(from_base64(encoded)?);
        if bytes.len() != KEY_LEN.saturating_mul(2) {
            return Err(CryptoError::InvalidArgument(format!(
                "serialized key must be {} bytes, got {}",
                KEY_LEN.saturating_mul(2),
                bytes.len()
            )));
        }
        let (enc, mac) = bytes.split_at(KEY_LEN);
        Ok(Self::from_enc_mac(enc.to_vec(), mac.to_vec()))
    }

    /// Export `enc_key ‖ mac_key` as base64. `hash_key` is not included.
    #[must_use]
    pub fn to_base64(&self) -> String {
        let mut joined = Zeroizing::new(Vec::with_capacity(
            self.enc_key().len().saturating_add(self.mac_key().len()),
        ));
        joined.extend_from_slice(self.enc_key());
        joined.extend_from_slice(self.mac_key());
        to_base64(&joined)
    }

    /// Base64 of `hash_key`, for server-side password verification.
    /// `None` when the bundle carries no hash key.
    #[must_use]
    pub fn hash_key_base64(&self) -> Option<String> {
        let hash_key = self.hash_key();
        (!hash_key.is_empty()).then(|| to_base64(hash_key))
    }

    #[must_use]
    pub fn hash_key(&self) -> &[u8] {
        self.hash_key.expose_secret()
    }

    #[must_use]
    pub fn enc_key(&self) -> &[u8] {
        self.enc_key.expose_secret()
    }

    #[must_use]
    pub fn mac_key(&self) -> &[u8] {
        self.mac_key.expose_secret()
    }

    /// `true` if both `enc_key` and `mac_key` are set.
    #[must_use]
    pub fn can_encrypt(&self) -> bool {
        !self.enc_key().is_empty() && !self.mac_key().is_empty()
    }
}

impl Clone for SymmetricCryptoKey {
    fn clone(&self) -> Self {
        Self::new(
            self.hash_key().to_vec(),
            self.enc_key().to_vec(),
            self.mac_key().to_vec(),
        )
    }
}

// Key material: never log.
impl fmt::Debug for SymmetricCryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricCryptoKey(***)")
    }
}
