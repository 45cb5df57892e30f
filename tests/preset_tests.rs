// tests/preset_tests.rs
use symcrypt::{Algorithm, CipherMode, CipherSpec, CryptoError};

#[test]
fn test_catalog_has_ten_presets() {
    let labels: Vec<String> = CipherSpec::presets().iter().map(CipherSpec::label).collect();
    assert_eq!(
        labels,
        [
            "aes-128-cbc",
            "aes-192-cbc",
            "aes-256-cbc",
            "aes-128-ecb",
            "aes-192-ecb",
            "aes-256-ecb",
            "tdes-128-cbc",
            "tdes-192-cbc",
            "tdes-128-ecb",
            "tdes-192-ecb",
        ]
    );
}

#[test]
fn test_preset_lookup() {
    let spec = CipherSpec::from_preset("tdes-128-cbc").unwrap();
    assert_eq!(spec.algorithm(), Algorithm::TripleDes);
    assert_eq!(spec.key_size_bits(), 128);
    assert_eq!(spec.key_len(), 16);
    assert_eq!(spec.mode(), CipherMode::Cbc);

    let spec: CipherSpec = " AES-192-ECB ".parse().unwrap();
    assert_eq!(spec.label(), "aes-192-ecb");
}

#[test]
fn test_every_preset_has_a_valid_key_size() {
    for spec in CipherSpec::presets() {
        let valid: &[usize] = match spec.algorithm() {
            Algorithm::Aes => &[128, 192, 256],
            Algorithm::TripleDes => &[128, 192],
        };
        assert!(valid.contains(&spec.key_size_bits()), "{spec}");
    }
}

#[test]
fn test_unknown_presets_are_rejected() {
    for id in ["aes-512-cbc", "tdes-256-cbc", "aes-128-ctr", "des-64-cbc", ""] {
        let err = CipherSpec::from_preset(id).unwrap_err();
        assert!(matches!(err, CryptoError::UnknownPreset(_)), "{id:?} accepted");
    }
}
