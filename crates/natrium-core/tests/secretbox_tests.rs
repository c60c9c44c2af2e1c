use natrium_core::crypto::{random, secretbox};
use natrium_core::{ExpectedLength, SodiumError};

fn key_and_nonce() -> (Vec<u8>, [u8; secretbox::NONCE_BYTES]) {
    let key = secretbox::keygen().unwrap();
    let nonce = random::random_nonce::<{ secretbox::NONCE_BYTES }>().unwrap();
    (key.to_vec(), nonce)
}

#[test]
fn seal_open_round_trip() {
    let (key, nonce) = key_and_nonce();
    let ct = secretbox::seal(b"attack at dawn", &nonce, &key).unwrap();
    assert_eq!(ct.len(), 14 + secretbox::MAC_BYTES);

    let pt = secretbox::open(&ct, &nonce, &key).unwrap();
    assert_eq!(&pt[..], b"attack at dawn");
}

#[test]
fn empty_message_round_trip() {
    let (key, nonce) = key_and_nonce();
    let ct = secretbox::seal(b"", &nonce, &key).unwrap();
    assert_eq!(ct.len(), secretbox::MAC_BYTES);
    assert!(secretbox::open(&ct, &nonce, &key).unwrap().is_empty());
}

#[test]
fn sealing_is_deterministic_for_fixed_inputs() {
    let key = [7u8; secretbox::KEY_BYTES];
    let nonce = [9u8; secretbox::NONCE_BYTES];
    let a = secretbox::seal(b"same", &nonce, &key).unwrap();
    let b = secretbox::seal(b"same", &nonce, &key).unwrap();
    assert_eq!(a, b);
}

#[test]
fn tampered_ciphertext_fails() {
    let (key, nonce) = key_and_nonce();
    let mut ct = secretbox::seal(b"payload", &nonce, &key).unwrap();
    ct[secretbox::MAC_BYTES] ^= 0x01;
    assert_eq!(secretbox::open(&ct, &nonce, &key).unwrap_err(), SodiumError::Authentication);
}

#[test]
fn wrong_key_fails() {
    let (key, nonce) = key_and_nonce();
    let ct = secretbox::seal(b"payload", &nonce, &key).unwrap();
    let other = secretbox::keygen().unwrap();
    assert_eq!(secretbox::open(&ct, &nonce, &other).unwrap_err(), SodiumError::Authentication);
}

#[test]
fn short_nonce_is_rejected() {
    let key = [0u8; secretbox::KEY_BYTES];
    let err = secretbox::seal(b"x", &[0u8; 23], &key).unwrap_err();
    assert_eq!(
        err,
        SodiumError::InvalidLength {
            argument: "nonce",
            expected: ExpectedLength::Exact(24),
            actual: 23,
        }
    );
}

#[test]
fn long_key_is_rejected() {
    let nonce = [0u8; secretbox::NONCE_BYTES];
    let err = secretbox::seal(b"x", &nonce, &[0u8; 33]).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "key", actual: 33, .. }));
}

#[test]
fn ciphertext_shorter_than_mac_is_rejected() {
    let (key, nonce) = key_and_nonce();
    let err = secretbox::open(&[0u8; 15], &nonce, &key).unwrap_err();
    assert_eq!(
        err,
        SodiumError::InvalidLength {
            argument: "ciphertext",
            expected: ExpectedLength::AtLeast(16),
            actual: 15,
        }
    );
}

#[test]
fn detached_round_trip() {
    let (key, nonce) = key_and_nonce();
    let (ct, mac) = secretbox::seal_detached(b"detached", &nonce, &key).unwrap();
    assert_eq!(ct.len(), 8);

    let pt = secretbox::open_detached(&ct, &mac, &nonce, &key).unwrap();
    assert_eq!(&pt[..], b"detached");

    let mut bad_mac = mac;
    bad_mac[0] ^= 0xff;
    assert_eq!(
        secretbox::open_detached(&ct, &bad_mac, &nonce, &key).unwrap_err(),
        SodiumError::Authentication
    );
}

#[test]
fn detached_matches_combined() {
    let (key, nonce) = key_and_nonce();
    let combined = secretbox::seal(b"layout", &nonce, &key).unwrap();
    let (ct, mac) = secretbox::seal_detached(b"layout", &nonce, &key).unwrap();
    assert_eq!(&combined[..secretbox::MAC_BYTES], &mac[..]);
    assert_eq!(&combined[secretbox::MAC_BYTES..], &ct[..]);
}

#[test]
fn prefixed_round_trip() {
    let (key, nonce) = key_and_nonce();
    let data = secretbox::seal_prefixed(b"self-contained", &nonce, &key).unwrap();
    assert_eq!(&data[..secretbox::NONCE_BYTES], &nonce[..]);
    assert_eq!(&secretbox::open_prefixed(&data, &key).unwrap()[..], b"self-contained");
}

#[test]
fn prefixed_too_short_is_rejected() {
    let key = [0u8; secretbox::KEY_BYTES];
    let err = secretbox::open_prefixed(&[0u8; 39], &key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "data", actual: 39, .. }));
}
