//! NIST SP 800-38A F.2 CBC vectors.
//!
//! The engine always appends PKCS#7 padding, so a block-aligned plaintext
//! yields the published ciphertext followed by one extra padding block.

use cipherkey_core::{CryptoEngine, SoftwareEngine};

use crate::common::hex;

const IV: &str = "000102030405060708090a0b0c0d0e0f";

const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a\
                         ae2d8a571e03ac9c9eb76fac45af8e51\
                         30c81c46a35ce411e5fbc1191a0a52ef\
                         f69f2445df4f9b17ad2b417be66c3710";

#[test]
fn cbc_aes256_encrypt() {
    let key = hex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let ct = SoftwareEngine
        .encrypt(&hex(PLAINTEXT), &key, &hex(IV))
        .unwrap();
    assert_eq!(ct.len(), 80);
    assert_eq!(
        ct[..64],
        hex("f58c4c04d6e5f1ba779eabfb5f7bfbd6\
             9cfc4e967edb808d679f777bc6702c7d\
             39f23369a9d9bacfa530e26304231461\
             b2eb05e2c39be9fcda6c19078c6a9d1b")[..]
    );
    assert_eq!(ct[64..], hex("3f461796d6b0d6b2e0c2a72b4d80e644")[..]);
}

#[test]
fn cbc_aes256_decrypt() {
    let key = hex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let ct = hex(
        "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
         9cfc4e967edb808d679f777bc6702c7d\
         39f23369a9d9bacfa530e26304231461\
         b2eb05e2c39be9fcda6c19078c6a9d1b\
         3f461796d6b0d6b2e0c2a72b4d80e644",
    );
    let pt = SoftwareEngine.decrypt(&ct, &key, &hex(IV)).unwrap();
    assert_eq!(pt, hex(PLAINTEXT));
}

#[test]
fn cbc_aes128_first_block() {
    let key = hex("2b7e151628aed2a6abf7158809cf4f3c");
    let ct = SoftwareEngine
        .encrypt(&hex(PLAINTEXT)[..16], &key, &hex(IV))
        .unwrap();
    assert_eq!(
        ct,
        hex("7649abac8119b246cee98e9b12e9197d8964e0b149c10b7b682e6e39aaeb731c")
    );
}
