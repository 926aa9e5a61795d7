//! `cipherkey-core` — password-derived authenticated encryption.
//!
//! Turns `(password, email)` into a deterministic [`SymmetricCryptoKey`] and
//! uses it for AES-CBC + HMAC-SHA-256 encrypt-then-MAC. All primitive
//! cryptography comes from a pluggable [`CryptoEngine`]; [`CryptoHelper`]
//! only sequences it.
//!
//! ```no_run
//! use cipherkey_core::{CryptoHelper, SoftwareEngine};
//!
//! # fn main() -> Result<(), cipherkey_core::CryptoError> {
//! let helper = CryptoHelper::new(SoftwareEngine::new());
//! let key = helper.make_key("correcthorse", "user@example.com")?;
//! let sealed = helper.encrypt("hello world", &key)?;
//! assert_eq!(helper.decrypt(&sealed, &key)?, "hello world");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod params;

pub mod encoding;
pub mod engine;

pub mod cipher_string;
pub mod encrypted;
pub mod key;

pub mod helper;
pub mod mnemonic;

pub use cipher_string::CipherString;
pub use encrypted::EncryptedObject;
#[cfg(feature = "software-engine")]
pub use engine::SoftwareEngine;
pub use engine::{CryptoEngine, Pbkdf2Params, ScryptParams};
pub use error::CryptoError;
pub use helper::CryptoHelper;
pub use key::SymmetricCryptoKey;
pub use mnemonic::{entropy_to_mnemonic, validate_mnemonic};
