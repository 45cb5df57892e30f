// tests/provider_tests.rs
mod common;

use common::*;
use symcrypt::enums::Field;
use symcrypt::key_ops::decode_field;
use symcrypt::{
    Algorithm, AesEngine, CipherMode, CipherSpec, CryptoError, Engine, SymmetricProvider,
    TripleDesEngine,
};

fn b64(field: Field, text: &str) -> Vec<u8> {
    decode_field(field, text).unwrap().expose_secret().clone()
}

#[test]
fn test_aes_rejects_invalid_key_sizes() {
    for bits in [150, 289, 56] {
        let err = AesEngine.generate_key(bits).unwrap_err();
        assert!(
            matches!(err, CryptoError::InvalidKeySize { algorithm: Algorithm::Aes, bits: b, .. } if b == bits),
            "{bits} bits accepted: {err:?}"
        );
    }
}

#[test]
fn test_tdes_rejects_invalid_key_sizes() {
    for bits in [120, 256, 56] {
        let err = TripleDesEngine.generate_key(bits).unwrap_err();
        assert!(
            matches!(err, CryptoError::InvalidKeySize { algorithm: Algorithm::TripleDes, bits: b, .. } if b == bits),
            "{bits} bits accepted: {err:?}"
        );
    }
}

#[test]
fn test_generated_key_and_iv_lengths() {
    for bits in [128, 192, 256] {
        assert_eq!(AesEngine.generate_key(bits).unwrap().expose_secret().len(), bits / 8);
    }
    for bits in [128, 192] {
        assert_eq!(TripleDesEngine.generate_key(bits).unwrap().expose_secret().len(), bits / 8);
    }
    assert_eq!(AesEngine.generate_iv().unwrap().expose_secret().len(), 16);
    assert_eq!(TripleDesEngine.generate_iv().unwrap().expose_secret().len(), 8);
}

#[test]
fn test_generated_ivs_differ() {
    let a = AesEngine.generate_iv().unwrap();
    let b = AesEngine.generate_iv().unwrap();
    assert_ne!(a.expose_secret(), b.expose_secret());
}

#[test]
fn test_aes_256_cbc_known_vectors_decrypt() {
    common::setup();

    let cases = [
        (HELLO_CIPHERTEXT, HELLO_KEY, HELLO_IV, HELLO_PLAINTEXT),
        (GUID_CIPHERTEXT, GUID_KEY, GUID_IV, GUID_PLAINTEXT),
    ];
    for (ct, key, iv, expected) in cases {
        let ct = b64(Field::Content, ct);
        let key = b64(Field::Key, key);
        let iv = b64(Field::Iv, iv);
        let plaintext = AesEngine
            .decrypt(&ct, Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
            .unwrap();
        assert_eq!(plaintext, expected);
    }
}

#[test]
fn test_aes_256_cbc_known_vector_encrypt() {
    let key = b64(Field::Key, GUID_KEY);
    let iv = b64(Field::Iv, GUID_IV);
    let ct = AesEngine
        .encrypt(UNIT_TEST_PLAINTEXT, Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
        .unwrap();
    assert_eq!(ct, b64(Field::Content, UNIT_TEST_CIPHERTEXT));
}

#[test]
fn test_roundtrip_every_preset() {
    let message = "Ünïcödé payload spanning more than one block ✓";
    for spec in CipherSpec::presets() {
        let engine = Engine::for_algorithm(spec.algorithm());
        let key = engine.generate_key(spec.key_size_bits()).unwrap();
        let fresh_iv = engine.generate_iv().unwrap();
        let iv = spec.mode().uses_iv().then(|| fresh_iv.expose_secret().as_slice());

        let ct = engine
            .encrypt(message, Some(key.expose_secret().as_slice()), iv, spec.mode())
            .unwrap();
        assert_eq!(ct.len() % engine.block_size(), 0, "{spec}");

        let pt = engine
            .decrypt(&ct, Some(key.expose_secret().as_slice()), iv, spec.mode())
            .unwrap();
        assert_eq!(pt, message, "{spec}");
    }
}

/// Printable ASCII run of `len` characters starting at `offset` into 0x20..=0x7E
fn printable(len: usize, offset: usize) -> String {
    (0..len)
        .map(|i| char::from(0x20 + ((i + offset) % 95) as u8))
        .collect()
}

#[test]
fn test_roundtrip_printable_ascii_across_block_boundaries() {
    let every_printable: String = (0x20u8..=0x7E).map(char::from).collect();

    for spec in CipherSpec::presets() {
        let engine = Engine::for_algorithm(spec.algorithm());
        let key = engine.generate_key(spec.key_size_bits()).unwrap();
        let key = Some(key.expose_secret().as_slice());
        let fresh_iv = engine.generate_iv().unwrap();
        let iv = spec.mode().uses_iv().then(|| fresh_iv.expose_secret().as_slice());

        let mut messages: Vec<String> = (1..=33).map(|len| printable(len, len * 7)).collect();
        messages.push("Test string![]{}%".to_owned());
        messages.push(every_printable.clone());

        for message in &messages {
            let ct = engine.encrypt(message, key, iv, spec.mode()).unwrap();
            assert_eq!(ct.len(), (message.len() / engine.block_size() + 1) * engine.block_size());

            let pt = engine.decrypt(&ct, key, iv, spec.mode()).unwrap();
            assert_eq!(&pt, message, "{spec}: {message:?}");
        }
    }
}

#[test]
fn test_padding_adds_full_block_on_exact_multiple() {
    let tdes_key: Vec<u8> = (1..=16).collect();
    let ct = TripleDesEngine
        .encrypt("8 bytes!", Some(tdes_key.as_slice()), None, CipherMode::Ecb)
        .unwrap();
    assert_eq!(ct.len(), 16);

    let aes_key = [0x42u8; 16];
    let ct = AesEngine
        .encrypt("sixteen bytes!!!", Some(&aes_key[..]), None, CipherMode::Ecb)
        .unwrap();
    assert_eq!(ct.len(), 32);
}

#[test]
fn test_ecb_ignores_iv() {
    let key = [7u8; 24];
    let plain = AesEngine.encrypt("same input", Some(&key[..]), None, CipherMode::Ecb).unwrap();
    let with_iv = AesEngine
        .encrypt("same input", Some(&key[..]), Some(&[1u8; 16][..]), CipherMode::Ecb)
        .unwrap();
    let with_bad_iv = AesEngine
        .encrypt("same input", Some(&key[..]), Some(&[1u8; 3][..]), CipherMode::Ecb)
        .unwrap();
    assert_eq!(plain, with_iv);
    assert_eq!(plain, with_bad_iv);
}

#[test]
fn test_ecb_repeats_identical_blocks() {
    let key = [9u8; 16];
    let ct = AesEngine
        .encrypt(&"A".repeat(32), Some(&key[..]), None, CipherMode::Ecb)
        .unwrap();
    assert_eq!(ct[..16], ct[16..32]);
}

#[test]
fn test_cbc_iv_changes_ciphertext() {
    let key = [3u8; 32];
    let a = AesEngine
        .encrypt("hello", Some(&key[..]), Some(&[0u8; 16][..]), CipherMode::Cbc)
        .unwrap();
    let b = AesEngine
        .encrypt("hello", Some(&key[..]), Some(&[1u8; 16][..]), CipherMode::Cbc)
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_empty_plaintext_is_rejected() {
    let err = AesEngine
        .encrypt("", Some(&[1u8; 16][..]), None, CipherMode::Ecb)
        .unwrap_err();
    assert!(matches!(err, CryptoError::EmptyInput));
}

#[test]
fn test_missing_or_empty_key() {
    let err = AesEngine.encrypt("x", None, None, CipherMode::Ecb).unwrap_err();
    assert!(matches!(err, CryptoError::MissingKey));

    let err = TripleDesEngine
        .decrypt(&[0u8; 8], Some(&[][..]), None, CipherMode::Ecb)
        .unwrap_err();
    assert!(matches!(err, CryptoError::MissingKey));
}

#[test]
fn test_supplied_key_of_wrong_length() {
    let err = AesEngine
        .encrypt("x", Some(&[1u8; 20][..]), None, CipherMode::Ecb)
        .unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKeySize { bits: 160, .. }));
}

#[test]
fn test_cbc_requires_block_sized_iv() {
    let key = [5u8; 16];
    let err = AesEngine.encrypt("x", Some(&key[..]), None, CipherMode::Cbc).unwrap_err();
    assert!(matches!(err, CryptoError::MissingRequiredField(Field::Iv)));

    let err = AesEngine
        .encrypt("x", Some(&key[..]), Some(&[0u8; 8][..]), CipherMode::Cbc)
        .unwrap_err();
    assert!(matches!(
        err,
        CryptoError::InvalidIvLength { expected: 16, actual: 8, .. }
    ));
}

#[test]
fn test_tdes_rejects_degenerate_key() {
    let err = TripleDesEngine
        .encrypt("x", Some(&[0x5Au8; 16][..]), None, CipherMode::Ecb)
        .unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKeySize { bits: 128, .. }));
}

#[test]
fn test_truncated_ciphertext_is_invalid() {
    let key = b64(Field::Key, HELLO_KEY);
    let iv = b64(Field::Iv, HELLO_IV);
    let mut ct = b64(Field::Content, HELLO_CIPHERTEXT);
    ct.pop();

    let err = AesEngine
        .decrypt(&ct, Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
        .unwrap_err();
    assert!(matches!(err, CryptoError::InvalidCiphertext(_)));

    let err = AesEngine
        .decrypt(&[], Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
        .unwrap_err();
    assert!(matches!(err, CryptoError::InvalidCiphertext(_)));
}

#[test]
fn test_wrong_key_fails_to_decrypt() {
    let key = b64(Field::Key, GUID_KEY);
    let iv = b64(Field::Iv, HELLO_IV);
    let ct = b64(Field::Content, HELLO_CIPHERTEXT);

    let err = AesEngine
        .decrypt(&ct, Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
        .unwrap_err();
    assert!(matches!(err, CryptoError::InvalidCiphertext(_)));
}

#[test]
fn test_engine_dispatch_by_name() {
    assert_eq!(Engine::by_name("AES").unwrap().algorithm(), Algorithm::Aes);
    assert_eq!(Engine::by_name("tdes").unwrap().algorithm(), Algorithm::TripleDes);
    assert_eq!(Engine::by_name("3des").unwrap().valid_key_sizes(), &[128, 192]);

    let err = Engine::by_name("rc4").unwrap_err();
    assert!(matches!(err, CryptoError::UnsupportedAlgorithm(name) if name == "rc4"));
}
