//! Output of a single encrypt-then-MAC operation.

use crate::key::SymmetricCryptoKey;
use crate::params::IV_LEN;

/// One ciphertext unit produced by [`CryptoHelper::aes_encrypt`](crate::CryptoHelper::aes_encrypt).
///
/// `mac` is HMAC-SHA-256 over `iv ‖ data` under `key.mac_key()`, in exactly
/// that order. The key is borrowed, never copied or serialized.
#[must_use = "encrypted data must be stored or transmitted"]
#[derive(Clone, Debug)]
pub struct EncryptedObject<'k> {
    key: &'k SymmetricCryptoKey,
    iv: [u8; IV_LEN],
    data: Vec<u8>,
    mac: Vec<u8>,
}

impl<'k> EncryptedObject<'k> {
    pub(crate) const fn new(
        key: &'k SymmetricCryptoKey,
        iv: [u8; IV_LEN],
        data: Vec<u8>,
        mac: Vec<u8>,
    ) -> Self {
        Self { key, iv, data, mac }
    }

    /// The key this object was sealed with.
    #[must_use]
    pub const fn key(&self) -> &'k SymmetricCryptoKey {
        self.key
    }

    #[must_use]
    pub const fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    /// AES-CBC ciphertext.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn mac(&self) -> &[u8] {
        &self.mac
    }
}
