use natrium_core::crypto::aead::{self, Aead};
use natrium_core::crypto::random;
use natrium_core::SodiumError;

const CHACHA_FAMILY: [Aead; 2] = [Aead::ChaCha20Poly1305Ietf, Aead::XChaCha20Poly1305Ietf];

fn nonce_for(alg: Aead) -> Vec<u8> {
    random::random_bytes(alg.nonce_bytes()).unwrap()
}

#[test]
fn chacha_family_is_always_available() {
    for alg in CHACHA_FAMILY {
        assert!(aead::is_available(alg).unwrap());
    }
}

#[test]
fn round_trip_with_additional_data() {
    for alg in CHACHA_FAMILY {
        let key = aead::keygen(alg).unwrap();
        let nonce = nonce_for(alg);
        let ct = aead::encrypt(alg, b"body", b"header", &nonce, &key).unwrap();
        assert_eq!(ct.len(), 4 + aead::ABYTES);

        let pt = aead::decrypt(alg, &ct, b"header", &nonce, &key).unwrap();
        assert_eq!(&pt[..], b"body");
    }
}

#[test]
fn additional_data_mismatch_fails() {
    for alg in CHACHA_FAMILY {
        let key = aead::keygen(alg).unwrap();
        let nonce = nonce_for(alg);
        let ct = aead::encrypt(alg, b"body", b"header", &nonce, &key).unwrap();
        assert_eq!(
            aead::decrypt(alg, &ct, b"HEADER", &nonce, &key).unwrap_err(),
            SodiumError::Authentication
        );
    }
}

#[test]
fn tampered_tag_fails() {
    for alg in CHACHA_FAMILY {
        let key = aead::keygen(alg).unwrap();
        let nonce = nonce_for(alg);
        let mut ct = aead::encrypt(alg, b"body", b"", &nonce, &key).unwrap();
        let last = ct.len() - 1;
        ct[last] ^= 0x01;
        assert_eq!(
            aead::decrypt(alg, &ct, b"", &nonce, &key).unwrap_err(),
            SodiumError::Authentication
        );
    }
}

#[test]
fn nonce_length_is_per_construction() {
    let key = [0u8; aead::KEY_BYTES];
    let short = [0u8; aead::CHACHA20POLY1305_IETF_NPUB_BYTES];
    let err = aead::encrypt(Aead::XChaCha20Poly1305Ietf, b"m", b"", &short, &key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "nonce", actual: 12, .. }));

    let long = [0u8; aead::XCHACHA20POLY1305_IETF_NPUB_BYTES];
    let err = aead::encrypt(Aead::ChaCha20Poly1305Ietf, b"m", b"", &long, &key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "nonce", actual: 24, .. }));
}

#[test]
fn ciphertext_shorter_than_tag_is_rejected() {
    let key = [0u8; aead::KEY_BYTES];
    let nonce = [0u8; aead::XCHACHA20POLY1305_IETF_NPUB_BYTES];
    let err = aead::decrypt(Aead::XChaCha20Poly1305Ietf, &[0u8; 15], b"", &nonce, &key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "ciphertext", actual: 15, .. }));
}

#[test]
fn aes256gcm_follows_hardware_support() {
    let alg = Aead::Aes256Gcm;
    let key = aead::keygen(alg).unwrap();
    let nonce = nonce_for(alg);
    let sealed = aead::encrypt(alg, b"gcm", b"ad", &nonce, &key);

    if aead::is_available(alg).unwrap() {
        let ct = sealed.unwrap();
        assert_eq!(&aead::decrypt(alg, &ct, b"ad", &nonce, &key).unwrap()[..], b"gcm");
    } else {
        assert_eq!(
            sealed.unwrap_err(),
            SodiumError::Unavailable { primitive: "aead_aes256gcm" }
        );
    }
}
