//! RFC 5869 HKDF-Expand (SHA-256) vectors.
//!
//! Only the expand step is exercised, so each vector feeds the published PRK
//! directly. Cross-checked against `ring::hkdf` for arbitrary lengths.

use cipherkey_core::{CryptoHelper, SoftwareEngine};
use ring::hkdf;

use crate::common::hex;

fn helper() -> CryptoHelper<SoftwareEngine> {
    CryptoHelper::new(SoftwareEngine::new())
}

#[test]
fn rfc5869_test_case_1() {
    let prk = hex("077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5");
    let info = hex("f0f1f2f3f4f5f6f7f8f9");
    let okm = helper().hkdf_expand(&prk, &info, 42).unwrap();
    assert_eq!(
        okm,
        hex("3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865")
    );
}

#[test]
fn rfc5869_test_case_3_empty_info() {
    let prk = hex("19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04");
    let okm = helper().hkdf_expand(&prk, &[], 42).unwrap();
    assert_eq!(
        okm,
        hex("8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8")
    );
}

struct Len(usize);

impl hkdf::KeyType for Len {
    fn len(&self) -> usize {
        self.0
    }
}

#[test]
fn matches_ring_for_assorted_lengths() {
    let prk_bytes = [0x42u8; 32];
    let prk = hkdf::Prk::new_less_safe(hkdf::HKDF_SHA256, &prk_bytes);
    for size in [1, 31, 32, 33, 64, 100, 255 * 32] {
        let info: &[&[u8]] = &[b"mac"];
        let mut expected = vec![0u8; size];
        prk.expand(info, Len(size))
            .expect("ring expand should succeed")
            .fill(&mut expected)
            .expect("ring fill should succeed");
        let actual = helper().hkdf_expand(&prk_bytes, b"mac", size).unwrap();
        assert_eq!(actual, expected, "mismatch at size {size}");
    }
}
