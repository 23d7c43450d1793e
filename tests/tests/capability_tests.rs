//! Behaviour with no cryptography backend
//!
//! An unavailable capability must win over every other failure, whatever
//! the input looks like.

use gpgdsa_api::{Capability, DsaBackend, DsaPublicKeyInfo, DsaPublicParams, DsaSignatureInfo, Error, NO_CRYPTO_MSG};
use gpgdsa_packet::{get_pubkey_params, get_signature_params};
use gpgdsa_tests::vectors::{CONTENT, SHA256};
use gpgdsa_tests::{pubkey_body, signature_body, unhex, vector_key, vector_signature};
use gpgdsa_verify::{create_pubkey, crypto, verify_signature, NoBackend, RustCryptoDsa};

fn assert_unsupported<T: std::fmt::Debug>(result: Result<T, Error>) {
    match result {
        Err(Error::UnsupportedLibrary { message }) => assert_eq!(message, NO_CRYPTO_MSG),
        other => panic!("expected UnsupportedLibrary, got {:?}", other),
    }
}

#[test]
fn test_compiled_in_backend_is_available() {
    assert!(crypto().is_available());
    assert_eq!(crypto().require().map(|b| b.name()).ok(), Some("RustCrypto dsa"));
}

#[test]
fn test_signature_extraction_without_backend() {
    let crypto = Capability::<RustCryptoDsa>::unavailable();

    let valid = signature_body(&unhex(SHA256.r), &unhex(SHA256.s));
    assert_unsupported(get_signature_params(&crypto, &valid));
    assert_unsupported(get_signature_params(&crypto, &[]));
    assert_unsupported(get_signature_params(&crypto, &[0xFF, 0xFF, 0x01]));
}

#[test]
fn test_create_pubkey_without_backend() {
    let crypto = Capability::<RustCryptoDsa>::unavailable();

    assert_unsupported(create_pubkey(&crypto, &vector_key()));

    let garbage = DsaPublicKeyInfo::new(
        "",
        DsaPublicParams {
            p: "zz".into(),
            ..Default::default()
        },
    );
    assert_unsupported(create_pubkey(&crypto, &garbage));
}

#[test]
fn test_verify_without_backend() {
    let crypto = Capability::<RustCryptoDsa>::unavailable();

    assert_unsupported(verify_signature(&crypto, &vector_signature(&SHA256), &vector_key(), CONTENT, 8));

    // Unknown hash id, bad hex everywhere: still the missing backend first
    let garbage = DsaSignatureInfo {
        keyid: String::new(),
        other_headers: "x".into(),
        signature: "y".into(),
    };
    let mut key = vector_key();
    key.keyval.public.p = "not hex".into();
    assert_unsupported(verify_signature(&crypto, &garbage, &key, b"", 0));
}

#[test]
fn test_no_backend_type() {
    let crypto = Capability::<NoBackend>::unavailable();
    assert!(!crypto.is_available());
    assert_unsupported(verify_signature(&crypto, &vector_signature(&SHA256), &vector_key(), CONTENT, 8));
}

#[test]
fn test_pubkey_parsing_needs_no_backend() {
    let body = pubkey_body(&[23], &[11], &[4], &[18]);
    let params = get_pubkey_params(&body).unwrap();
    assert_eq!(params.p, "17");
    assert_eq!(params.y, "12");
}

#[test]
fn test_unsupported_library_display() {
    let err = Capability::<RustCryptoDsa>::unavailable().require().unwrap_err();
    assert!(err.is_unsupported_library());
    assert!(err.to_string().contains(NO_CRYPTO_MSG));
}
