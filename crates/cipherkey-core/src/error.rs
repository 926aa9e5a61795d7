//! Error types for `cipherkey-core`.

use thiserror::Error;

/// Errors produced by [`CryptoHelper`](crate::CryptoHelper) and the engines it drives.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Missing, empty, or wrongly shaped input (empty data, missing IV/MAC,
    /// incomplete key, empty password or email). Raised before any engine call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// MAC verification failed — ciphertext tampered, corrupt, or wrong key.
    #[error("authentication failed: tampered or corrupt data")]
    AuthenticationFailure,

    /// The primitive engine itself failed (bad key length, padding, CSPRNG, KDF).
    #[error("engine failure: {0}")]
    Engine(String),

    /// Base64, CipherString layout, or UTF-8 decoding failure.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The BIP-39 transform rejected the entropy or phrase.
    #[error("mnemonic error: {0}")]
    Mnemonic(String),
}
