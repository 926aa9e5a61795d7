//! Integration tests for the CipherString text/serde forms.

use cipherkey_core::{CipherString, CryptoError, CryptoHelper, SoftwareEngine, SymmetricCryptoKey};

fn helper() -> CryptoHelper<SoftwareEngine> {
    CryptoHelper::new(SoftwareEngine::new())
}

fn key() -> SymmetricCryptoKey {
    SymmetricCryptoKey::from_enc_mac(vec![0x10; 32], vec![0x20; 32])
}

#[test]
fn encrypt_to_text_and_back() {
    let h = helper();
    let key = key();
    let text = h.encrypt("entry: bank pin 1234", &key).unwrap().to_string();
    let parsed: CipherString = text.parse().unwrap();
    assert_eq!(h.decrypt(&parsed, &key).unwrap(), "entry: bank pin 1234");
}

#[test]
fn json_transport_roundtrip() {
    let h = helper();
    let key = key();
    let sealed = h.encrypt("über-secret ✓", &key).unwrap();
    let json = serde_json::to_string(&vec![sealed.clone()]).unwrap();
    let back: Vec<CipherString> = serde_json::from_str(&json).unwrap();
    assert_eq!(back[0], sealed);
    assert_eq!(h.decrypt(&back[0], &key).unwrap(), "über-secret ✓");
}

#[test]
fn swapped_fields_fail_authentication() {
    let h = helper();
    let key = key();
    let a = h.encrypt("first", &key).unwrap();
    let b = h.encrypt("second", &key).unwrap();
    let mixed: CipherString = format!("2.{}|{}|{}", a.iv(), b.data(), b.mac())
        .parse()
        .unwrap();
    assert!(matches!(
        h.decrypt(&mixed, &key),
        Err(CryptoError::AuthenticationFailure)
    ));
}

#[test]
fn malformed_base64_is_an_encoding_error() {
    let h = helper();
    let cs: CipherString = "2.!!!!|AAAA|AAAA".parse().unwrap();
    assert!(matches!(h.decrypt(&cs, &key()), Err(CryptoError::Encoding(_))));
}

#[test]
fn untagged_text_is_accepted() {
    let h = helper();
    let key = key();
    let sealed = h.encrypt("legacy", &key).unwrap();
    let untagged = format!("{}|{}|{}", sealed.iv(), sealed.data(), sealed.mac());
    let parsed: CipherString = untagged.parse().unwrap();
    assert_eq!(h.decrypt(&parsed, &key).unwrap(), "legacy");
}
