//! Password-derived encrypt-then-MAC orchestration.
//!
//! [`CryptoHelper`] sequences engine primitives into the protocol:
//! - [`make_key`](CryptoHelper::make_key) — scrypt master key, PBKDF2 hash key,
//!   HKDF-separated encryption and MAC keys
//! - [`aes_encrypt`](CryptoHelper::aes_encrypt) / [`aes_decrypt`](CryptoHelper::aes_decrypt)
//!   — AES-CBC with HMAC-SHA-256 over `iv ‖ data`, MAC checked before decrypting
//! - [`compare`](CryptoHelper::compare) — double-HMAC constant-time comparison
//! - [`hkdf_expand`](CryptoHelper::hkdf_expand) — RFC 5869 expand step
//! - [`generate_mnemonic`](CryptoHelper::generate_mnemonic) — BIP-39 phrase from engine entropy
//!
//! Every input check runs before the first engine call. Engine errors are
//! returned unchanged and nothing is retried.

use zeroize::Zeroizing;

use crate::cipher_string::CipherString;
use crate::encoding::utf8_to_string;
use crate::encrypted::EncryptedObject;
use crate::engine::{CryptoEngine, Pbkdf2Params, ScryptParams};
use crate::error::CryptoError;
use crate::key::SymmetricCryptoKey;
use crate::mnemonic;
use crate::params::{
    COMPARE_KEY_LEN, ENC_KEY_INFO, HASH_KEY_ITERATIONS, HKDF_MAX_OUTPUT, IV_LEN, KEY_LEN,
    MAC_KEY_INFO, MAC_LEN, PBKDF2_KEY_LEN, SCRYPT_BLOCK_SIZE, SCRYPT_ITERATIONS,
    SCRYPT_PARALLELISM,
};

/// scrypt parameters for [`CryptoHelper::make_key`].
const MASTER_KEY_PARAMS: ScryptParams = ScryptParams {
    iterations: SCRYPT_ITERATIONS,
    block_size: SCRYPT_BLOCK_SIZE,
    parallelism: SCRYPT_PARALLELISM,
    key_length: KEY_LEN,
};

/// Stateless protocol layer over a [`CryptoEngine`].
///
/// Holds nothing but its engine, so it is `Send + Sync` whenever the engine
/// is and may be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct CryptoHelper<E> {
    engine: E,
}

impl<E: CryptoEngine> CryptoHelper<E> {
    /// Wrap an engine. Pass `&engine` or an `Arc` to share one engine.
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The underlying engine.
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    // -----------------------------------------------------------------------
    // Comparison
    // -----------------------------------------------------------------------

    /// Compare two buffers without leaking where they first differ.
    ///
    /// Both inputs are MAC'd under a fresh random 32-byte key and the
    /// fixed-length MACs are compared byte by byte, visiting every byte. A
    /// MAC length mismatch returns `false` once both MACs exist; MAC length
    /// is public.
    ///
    /// # Errors
    ///
    /// Propagates engine failures from `random_bytes` or `hmac`.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Result<bool, CryptoError> {
        let key = Zeroizing::new(self.engine.random_bytes(COMPARE_KEY_LEN)?);
        let mac_a = self.engine.hmac(a, &key)?;
        let mac_b = self.engine.hmac(b, &key)?;

        if mac_a.len() != mac_b.len() {
            return Ok(false);
        }

        let mut diff = 0u8;
        for (x, y) in mac_a.iter().zip(mac_b.iter()) {
            diff |= x ^ y;
        }
        Ok(std::hint::black_box(diff) == 0)
    }

    // -----------------------------------------------------------------------
    // Encrypt-then-MAC
    // -----------------------------------------------------------------------

    /// Encrypt `data` under `key.enc_key()` with a fresh random IV and MAC
    /// `iv ‖ ciphertext` under `key.mac_key()`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidArgument` if `data` is empty or the key
    /// lacks an encryption or MAC key. Propagates engine failures.
    pub fn aes_encrypt<'k>(
        &self,
        data: &[u8],
        key: &'k SymmetricCryptoKey,
    ) -> Result<EncryptedObject<'k>, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "data to encrypt must not be empty".into(),
            ));
        }
        require_encryption_key(key)?;

        let iv: [u8; IV_LEN] = self
            .engine
            .random_bytes(IV_LEN)?
            .try_into()
            .map_err(|v: Vec<u8>| {
                CryptoError::Engine(format!(
                    "engine returned {} random bytes (expected {IV_LEN})",
                    v.len()
                ))
            })?;
        let ciphertext = self.engine.encrypt(data, key.enc_key(), &iv)?;
        let mac = self.mac_iv_data(&iv, &ciphertext, key)?;

        tracing::debug!(
            plaintext_len = data.len(),
            ciphertext_len = ciphertext.len(),
            "payload sealed"
        );
        Ok(EncryptedObject::new(key, iv, ciphertext, mac))
    }

    /// Verify `mac` over `iv ‖ data`, then decrypt.
    ///
    /// Decryption is never attempted unless the MAC matches.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidArgument` if any input is empty or the key
    /// is incomplete, `CryptoError::AuthenticationFailure` on MAC mismatch,
    /// and propagates engine failures.
    pub fn aes_decrypt(
        &self,
        data: &[u8],
        iv: &[u8],
        mac: &[u8],
        key: &SymmetricCryptoKey,
    ) -> Result<Vec<u8>, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::InvalidArgument("ciphertext must not be empty".into()));
        }
        if iv.is_empty() {
            return Err(CryptoError::InvalidArgument("iv must not be empty".into()));
        }
        if mac.is_empty() {
            return Err(CryptoError::InvalidArgument("mac must not be empty".into()));
        }
        require_encryption_key(key)?;

        let expected = self.mac_iv_data(iv, data, key)?;
        if !self.compare(&expected, mac)? {
            tracing::warn!(ciphertext_len = data.len(), "mac verification failed");
            return Err(CryptoError::AuthenticationFailure);
        }

        let plaintext = self.engine.decrypt(data, key.enc_key(), iv)?;
        tracing::debug!(plaintext_len = plaintext.len(), "payload opened");
        Ok(plaintext)
    }

    /// HMAC-SHA-256 over `iv ‖ data` with the key's MAC key.
    fn mac_iv_data(
        &self,
        iv: &[u8],
        data: &[u8],
        key: &SymmetricCryptoKey,
    ) -> Result<Vec<u8>, CryptoError> {
        let mut mac_input = Vec::with_capacity(iv.len().saturating_add(data.len()));
        mac_input.extend_from_slice(iv);
        mac_input.extend_from_slice(data);
        self.engine.hmac(&mac_input, key.mac_key())
    }

    // -----------------------------------------------------------------------
    // Key derivation
    // -----------------------------------------------------------------------

    /// RFC 5869 HKDF-Expand with SHA-256 (no extract step).
    ///
    /// `T(i) = HMAC(T(i-1) ‖ info ‖ i, prk)` for `i = 1..=ceil(size / 32)`,
    /// concatenated and truncated to `size` bytes. `prk` must already be a
    /// pseudorandom key.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidArgument` if `size` exceeds `255 * 32`.
    /// Propagates engine failures.
    pub fn hkdf_expand(&self, prk: &[u8], info: &[u8], size: usize) -> Result<Vec<u8>, CryptoError> {
        if size > HKDF_MAX_OUTPUT {
            return Err(CryptoError::InvalidArgument(format!(
                "hkdf output of {size} bytes exceeds maximum {HKDF_MAX_OUTPUT}"
            )));
        }

        let rounds = size.div_ceil(MAC_LEN);
        let mut okm = Vec::with_capacity(rounds.saturating_mul(MAC_LEN));
        let mut previous = Zeroizing::new(Vec::new());
        for i in 1..=rounds {
            // rounds <= 255, checked above.
            #[allow(clippy::cast_possible_truncation)]
            let counter = i as u8;
            let mut input = Zeroizing::new(Vec::with_capacity(
                previous.len().saturating_add(info.len()).saturating_add(1),
            ));
            input.extend_from_slice(&previous);
            input.extend_from_slice(info);
            input.push(counter);
            previous = Zeroizing::new(self.engine.hmac(&input, prk)?);
            okm.extend_from_slice(&previous);
        }
        okm.truncate(size);
        Ok(okm)
    }

    /// PBKDF2-HMAC-SHA-256 with a fixed 32-byte output.
    ///
    /// `password` and `salt` may be text or raw bytes; text is used as its
    /// UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Propagates engine failures (e.g. zero iterations).
    pub fn pbkdf2(
        &self,
        password: impl AsRef<[u8]>,
        salt: impl AsRef<[u8]>,
        iterations: u32,
    ) -> Result<Vec<u8>, CryptoError> {
        self.engine.pbkdf2(
            password.as_ref(),
            salt.as_ref(),
            &Pbkdf2Params {
                iterations,
                key_len: PBKDF2_KEY_LEN,
            },
        )
    }

    /// Derive the key bundle for `(password, email)`.
    ///
    /// - master key: scrypt(password, email) with `N = 16384, r = 8, p = 1`, 32 bytes
    /// - `hash_key`: PBKDF2(master, password, 1 iteration)
    /// - `enc_key`: HKDF-Expand(master, `"enc"`, 32)
    /// - `mac_key`: HKDF-Expand(master, `"mac"`, 32)
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidArgument` if `password` or `email` is
    /// empty. Propagates engine failures.
    pub fn make_key(&self, password: &str, email: &str) -> Result<SymmetricCryptoKey, CryptoError> {
        if password.is_empty() {
            return Err(CryptoError::InvalidArgument("password must not be empty".into()));
        }
        if email.is_empty() {
            return Err(CryptoError::InvalidArgument("email must not be empty".into()));
        }

        tracing::debug!("deriving master key");
        let master = Zeroizing::new(self.engine.scrypt(
            password.as_bytes(),
            email.as_bytes(),
            &MASTER_KEY_PARAMS,
        )?);

        let hash_key = self.pbkdf2(&*master, password, HASH_KEY_ITERATIONS)?;
        let enc_key = self.hkdf_expand(&master, ENC_KEY_INFO, KEY_LEN)?;
        let mac_key = self.hkdf_expand(&master, MAC_KEY_INFO, KEY_LEN)?;
        tracing::debug!("key bundle derived");

        Ok(SymmetricCryptoKey::new(hash_key, enc_key, mac_key))
    }

    // -----------------------------------------------------------------------
    // CipherString level
    // -----------------------------------------------------------------------

    /// Encrypt UTF-8 text and encode the result as a [`CipherString`].
    ///
    /// # Errors
    ///
    /// Same as [`aes_encrypt`](Self::aes_encrypt).
    pub fn encrypt(&self, plaintext: &str, key: &SymmetricCryptoKey) -> Result<CipherString, CryptoError> {
        let sealed = self.aes_encrypt(plaintext.as_bytes(), key)?;
        Ok(CipherString::from(&sealed))
    }

    /// Decode a [`CipherString`], verify and decrypt it, and return the raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Encoding` for invalid base64, otherwise the
    /// errors of [`aes_decrypt`](Self::aes_decrypt).
    pub fn decrypt_to_bytes(
        &self,
        cipher_string: &CipherString,
        key: &SymmetricCryptoKey,
    ) -> Result<Vec<u8>, CryptoError> {
        let (iv, data, mac) = cipher_string.decode()?;
        self.aes_decrypt(&data, &iv, &mac, key)
    }

    /// Decode a [`CipherString`], verify and decrypt it, and return UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`decrypt_to_bytes`](Self::decrypt_to_bytes), plus
    /// `CryptoError::Encoding` if the plaintext is not UTF-8.
    pub fn decrypt(
        &self,
        cipher_string: &CipherString,
        key: &SymmetricCryptoKey,
    ) -> Result<String, CryptoError> {
        utf8_to_string(self.decrypt_to_bytes(cipher_string, key)?)
    }

    // -----------------------------------------------------------------------
    // Mnemonic
    // -----------------------------------------------------------------------

    /// Generate an English BIP-39 phrase from `strength_bits / 8` engine bytes.
    ///
    /// `strength_bits` should be a multiple of 32 in `128..=256`; other values
    /// are rejected by the BIP-39 transform, not checked here.
    ///
    /// # Errors
    ///
    /// Propagates engine failures and returns `CryptoError::Mnemonic` if the
    /// entropy length is not accepted.
    pub fn generate_mnemonic(&self, strength_bits: usize) -> Result<String, CryptoError> {
        #[allow(clippy::arithmetic_side_effects)]
        let entropy = Zeroizing::new(self.engine.random_bytes(strength_bits / 8)?);
        mnemonic::entropy_to_mnemonic(&entropy)
    }
}

fn require_encryption_key(key: &SymmetricCryptoKey) -> Result<(), CryptoError> {
    if key.can_encrypt() {
        Ok(())
    } else {
        Err(CryptoError::InvalidArgument(
            "key must have both an encryption key and a MAC key".into(),
        ))
    }
}
