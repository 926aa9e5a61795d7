//! Validation happens before the first engine call, and the MAC gates decryption.

use cipherkey_core::{CryptoError, CryptoHelper, SymmetricCryptoKey};

use crate::common::RecordingEngine;

fn key() -> SymmetricCryptoKey {
    SymmetricCryptoKey::from_enc_mac(vec![0x0e; 32], vec![0x0f; 32])
}

#[test]
fn empty_data_makes_no_engine_call() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    assert!(matches!(
        h.aes_encrypt(&[], &key()),
        Err(CryptoError::InvalidArgument(_))
    ));
    assert_eq!(engine.calls.total(), 0);
}

#[test]
fn incomplete_key_makes_no_engine_call() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    let enc_only = SymmetricCryptoKey::from_enc_mac(vec![0x0e; 32], Vec::new());
    assert!(matches!(
        h.aes_encrypt(b"data", &enc_only),
        Err(CryptoError::InvalidArgument(_))
    ));
    assert!(matches!(
        h.aes_decrypt(&[1; 16], &[2; 16], &[3; 32], &enc_only),
        Err(CryptoError::InvalidArgument(_))
    ));
    assert_eq!(engine.calls.total(), 0);
}

#[test]
fn empty_credentials_make_no_engine_call() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    assert!(h.make_key("", "user@example.com").is_err());
    assert!(h.make_key("password", "").is_err());
    assert_eq!(engine.calls.total(), 0);
}

#[test]
fn encrypt_consumes_exactly_one_iv() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    let key = key();
    let _sealed = h.aes_encrypt(b"payload", &key).unwrap();
    assert_eq!(RecordingEngine::count(&engine.calls.random_bytes), 1);
    assert_eq!(RecordingEngine::count(&engine.calls.random_len), 16);
    assert_eq!(RecordingEngine::count(&engine.calls.encrypt), 1);
    assert_eq!(RecordingEngine::count(&engine.calls.hmac), 1);
}

#[test]
fn mac_failure_never_reaches_decrypt() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    let key = key();
    let sealed = h.aes_encrypt(b"payload", &key).unwrap();
    let mut mac = sealed.mac().to_vec();
    mac[31] ^= 0x01;

    assert!(matches!(
        h.aes_decrypt(sealed.data(), sealed.iv(), &mac, &key),
        Err(CryptoError::AuthenticationFailure)
    ));
    assert_eq!(RecordingEngine::count(&engine.calls.decrypt), 0);

    h.aes_decrypt(sealed.data(), sealed.iv(), sealed.mac(), &key)
        .unwrap();
    assert_eq!(RecordingEngine::count(&engine.calls.decrypt), 1);
}

#[test]
fn compare_uses_fresh_key_and_two_macs() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    assert!(h.compare(b"left", b"left").unwrap());
    assert_eq!(RecordingEngine::count(&engine.calls.random_bytes), 1);
    assert_eq!(RecordingEngine::count(&engine.calls.random_len), 32);
    assert_eq!(RecordingEngine::count(&engine.calls.hmac), 2);
}

#[test]
fn mnemonic_draws_strength_over_eight_bytes() {
    let engine = RecordingEngine::new();
    let h = CryptoHelper::new(&engine);
    let phrase = h.generate_mnemonic(256).unwrap();
    assert_eq!(phrase.split(' ').count(), 24);
    assert_eq!(RecordingEngine::count(&engine.calls.random_len), 32);
}
