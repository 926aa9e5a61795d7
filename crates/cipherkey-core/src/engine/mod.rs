//! Primitive cryptography provider.
//!
//! This module provides:
//! - [`CryptoEngine`] — the capability trait every primitive backend implements
//! - [`Pbkdf2Params`] / [`ScryptParams`] — KDF parameter sets passed to the engine
//! - [`SoftwareEngine`] — the default backend (feature `software-engine`)
//!
//! [`CryptoHelper`](crate::CryptoHelper) never performs primitive cryptography
//! itself; every AES, HMAC, KDF and randomness call goes through an engine.

#[cfg(feature = "software-engine")]
mod software;

#[cfg(feature = "software-engine")]
pub use software::SoftwareEngine;

use std::sync::Arc;

use crate::error::CryptoError;

/// PBKDF2-HMAC-SHA-256 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pbkdf2Params {
    /// Iteration count (must be at least 1).
    pub iterations: u32,
    /// Output length in bytes.
    pub key_len: usize,
}

/// scrypt parameters.
///
/// `iterations` is the cost parameter `N` itself (a power of two), not its
/// logarithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    /// Cost parameter `N`.
    pub iterations: u32,
    /// Block size `r`.
    pub block_size: u32,
    /// Parallelism `p`.
    pub parallelism: u32,
    /// Output length in bytes.
    pub key_length: usize,
}

/// Low-level primitive provider.
///
/// Implementations must be deterministic for identical inputs, except
/// [`random_bytes`](Self::random_bytes). Failures are reported as
/// `CryptoError::Engine` and are propagated unchanged by the helper.
pub trait CryptoEngine: Send + Sync {
    /// Return `len` cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Engine` if the CSPRNG fails.
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, CryptoError>;

    /// HMAC-SHA-256 of `data` under `key` (32-byte output).
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Engine` if the backend fails.
    fn hmac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// AES-CBC encryption with PKCS#7 padding.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Engine` on invalid key or IV length.
    fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// AES-CBC decryption; inverse of [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Engine` on invalid key/IV length, ciphertext that
    /// is not block-aligned, or malformed padding.
    fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// PBKDF2-HMAC-SHA-256.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Engine` on invalid parameters.
    fn pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &Pbkdf2Params,
    ) -> Result<Vec<u8>, CryptoError>;

    /// scrypt key derivation.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Engine` on invalid parameters.
    fn scrypt(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &ScryptParams,
    ) -> Result<Vec<u8>, CryptoError>;
}

// ---------------------------------------------------------------------------
// Forwarding impls so a helper can borrow or share an engine.
// ---------------------------------------------------------------------------

macro_rules! forward_engine {
    ($($ptr:ty),*) => {$(
        impl<E: CryptoEngine + ?Sized> CryptoEngine for $ptr {
            fn random_bytes(&self, len: usize) -> Result<Vec<u8>, CryptoError> {
                (**self).random_bytes(len)
            }

            fn hmac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
                (**self).hmac(data, key)
            }

            fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
                (**self).encrypt(data, key, iv)
            }

            fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
                (**self).decrypt(data, key, iv)
            }

            fn pbkdf2(
                &self,
                password: &[u8],
                salt: &[u8],
                params: &Pbkdf2Params,
            ) -> Result<Vec<u8>, CryptoError> {
                (**self).pbkdf2(password, salt, params)
            }

            fn scrypt(
                &self,
                password: &[u8],
                salt: &[u8],
                params: &ScryptParams,
            ) -> Result<Vec<u8>, CryptoError> {
                (**self).scrypt(password, salt, params)
            }
        }
    )*};
}

forward_engine!(&E, Box<E>, Arc<E>);
