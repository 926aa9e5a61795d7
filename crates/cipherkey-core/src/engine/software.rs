//! Default [`CryptoEngine`] built from audited primitive crates.
//!
//! - randomness: `OsRng`
//! - HMAC-SHA-256 and PBKDF2-HMAC-SHA-256: `ring`
//! - AES block cipher: `aes`, chained here in CBC mode with PKCS#7 padding
//! - scrypt: `scrypt`

use std::num::NonZeroU32;

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block as AesBlock};
use rand::rngs::OsRng;
use rand::RngCore;
use ring::{hmac, pbkdf2};

use super::{CryptoEngine, Pbkdf2Params, ScryptParams};
use crate::error::CryptoError;
use crate::params::{BLOCK_LEN, IV_LEN, KEY_LEN};

/// Software engine: OS CSPRNG plus pure-Rust / `ring` primitives.
///
/// Stateless and cheap to construct; share one instance or create as needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareEngine;

impl SoftwareEngine {
    /// Create a new software engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

// ---------------------------------------------------------------------------
// AES key-size dispatch
// ---------------------------------------------------------------------------

enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let invalid = |_| {
            CryptoError::Engine(format!(
                "invalid AES key length: {} bytes (expected 16, 24 or 32)",
                key.len()
            ))
        };
        match key.len() {
            16 => Aes128::new_from_slice(key).map(Self::Aes128).map_err(invalid),
            24 => Aes192::new_from_slice(key).map(Self::Aes192).map_err(invalid),
            32 => Aes256::new_from_slice(key).map(Self::Aes256).map_err(invalid),
            other => Err(CryptoError::Engine(format!(
                "invalid AES key length: {other} bytes (expected 16, 24 or 32)"
            ))),
        }
    }

    fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

fn check_iv(iv: &[u8]) -> Result<[u8; IV_LEN], CryptoError> {
    <[u8; IV_LEN]>::try_from(iv).map_err(|_| {
        CryptoError::Engine(format!(
            "invalid IV length: {} bytes (expected {IV_LEN})",
            iv.len()
        ))
    })
}

fn xor_into(block: &mut [u8; BLOCK_LEN], other: &[u8]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// Append PKCS#7 padding: 1..=16 bytes, each equal to the pad length.
fn pad(data: &[u8]) -> Vec<u8> {
    #[allow(clippy::arithmetic_side_effects)]
    let pad_len = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len().saturating_add(pad_len));
    padded.extend_from_slice(data);
    // pad_len is in 1..=16.
    #[allow(clippy::cast_possible_truncation)]
    padded.resize(data.len().saturating_add(pad_len), pad_len as u8);
    padded
}

/// Strip and validate PKCS#7 padding.
fn unpad(mut data: Vec<u8>) -> Result<Vec<u8>, CryptoError> {
    let malformed = || CryptoError::Engine("malformed padding".into());
    let pad_len = usize::from(*data.last().ok_or_else(malformed)?);
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > data.len() {
        return Err(malformed());
    }
    let body_len = data.len().saturating_sub(pad_len);
    if data[body_len..].iter().any(|&b| usize::from(b) != pad_len) {
        return Err(malformed());
    }
    data.truncate(body_len);
    Ok(data)
}

/// Convert scrypt's `N` to the `log_n` the `scrypt` crate expects.
fn log2(n: u32) -> Result<u8, CryptoError> {
    if n < 2 || (n & n.wrapping_sub(1)) != 0 {
        return Err(CryptoError::Engine(format!(
            "scrypt N must be a power of 2 greater than 1, got {n}"
        )));
    }
    // n is a u32 power of two, so trailing_zeros <= 31 fits u8.
    #[allow(clippy::cast_possible_truncation)]
    Ok(n.trailing_zeros() as u8)
}

// ---------------------------------------------------------------------------
// CryptoEngine
// ---------------------------------------------------------------------------

impl CryptoEngine for SoftwareEngine {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, CryptoError> {
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::Engine(format!("CSPRNG fill failed: {e}")))?;
        Ok(bytes)
    }

    fn hmac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = hmac::Key::new(hmac::HMAC_SHA256, key);
        Ok(hmac::sign(&key, data).as_ref().to_vec())
    }

    fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let cipher = AesCipher::new(key)?;
        let mut prev = check_iv(iv)?;

        let padded = pad(data);
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_LEN) {
            xor_into(&mut prev, chunk);
            let mut block = AesBlock::from(prev);
            cipher.encrypt_block(&mut block);
            prev.copy_from_slice(&block);
            out.extend_from_slice(&prev);
        }
        Ok(out)
    }

    fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let cipher = AesCipher::new(key)?;
        let mut prev = check_iv(iv)?;

        if data.is_empty() || data.len() % BLOCK_LEN != 0 {
            return Err(CryptoError::Engine(format!(
                "ciphertext length {} is not a positive multiple of {BLOCK_LEN}",
                data.len()
            )));
        }

        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(BLOCK_LEN) {
            let mut block = AesBlock::clone_from_slice(chunk);
            cipher.decrypt_block(&mut block);
            let mut plain = [0u8; BLOCK_LEN];
            plain.copy_from_slice(&block);
            xor_into(&mut plain, &prev);
            out.extend_from_slice(&plain);
            prev.copy_from_slice(chunk);
        }
        unpad(out)
    }

    fn pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &Pbkdf2Params,
    ) -> Result<Vec<u8>, CryptoError> {
        let iterations = NonZeroU32::new(params.iterations)
            .ok_or_else(|| CryptoError::Engine("pbkdf2 iterations must be at least 1".into()))?;
        if params.key_len == 0 {
            return Err(CryptoError::Engine("pbkdf2 key length must be non-zero".into()));
        }
        let mut out = vec![0u8; params.key_len];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            salt,
            password,
            &mut out,
        );
        Ok(out)
    }

    fn scrypt(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &ScryptParams,
    ) -> Result<Vec<u8>, CryptoError> {
        // `len` only shapes PHC-string output; `scrypt()` fills `out` to its own length.
        let scrypt_params = scrypt::Params::new(
            log2(params.iterations)?,
            params.block_size,
            params.parallelism,
            KEY_LEN,
        )
        .map_err(|e| CryptoError::Engine(format!("invalid scrypt params: {e}")))?;

        let mut out = vec![0u8; params.key_length];
        scrypt::scrypt(password, salt, &scrypt_params, &mut out)
            .map_err(|e| CryptoError::Engine(format!("scrypt derivation failed: {e}")))?;
        Ok(out)
    }
}
