use natrium_core::crypto::{public_box, sign};
use natrium_core::SodiumError;

// RFC 8032, section 7.1, test 1.
const RFC8032_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
const RFC8032_PK: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
const RFC8032_SIG: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

#[test]
fn rfc8032_empty_message() {
    let seed = hex::decode(RFC8032_SEED).unwrap();
    let kp = sign::seed_keypair(&seed).unwrap();
    assert_eq!(hex::encode(&kp.public_key), RFC8032_PK);

    let sig = sign::sign_detached(b"", &kp.secret_key).unwrap();
    assert_eq!(hex::encode(sig), RFC8032_SIG);
    assert!(sign::verify_detached(&sig, b"", &kp.public_key).unwrap());
}

#[test]
fn detached_sign_verify() {
    let kp = sign::keypair().unwrap();
    let sig = sign::sign_detached(b"message", &kp.secret_key).unwrap();
    assert!(sign::verify_detached(&sig, b"message", &kp.public_key).unwrap());
    assert!(!sign::verify_detached(&sig, b"messagf", &kp.public_key).unwrap());
    sign::verify(&sig, b"message", &kp.public_key).unwrap();
}

#[test]
fn verification_fails_under_mutated_public_key() {
    let kp = sign::keypair().unwrap();
    let sig = sign::sign_detached(b"message", &kp.secret_key).unwrap();
    let mut pk = kp.public_key.clone();
    pk[0] ^= 0x01;
    assert!(!sign::verify_detached(&sig, b"message", &pk).unwrap());
    assert_eq!(sign::verify(&sig, b"message", &pk).unwrap_err(), SodiumError::Authentication);
}

#[test]
fn combined_sign_open() {
    let kp = sign::keypair().unwrap();
    let signed = sign::sign(b"combined", &kp.secret_key).unwrap();
    assert_eq!(signed.len(), 8 + sign::SIGNATURE_BYTES);
    assert_eq!(sign::open(&signed, &kp.public_key).unwrap(), b"combined");
}

#[test]
fn combined_tampered_fails() {
    let kp = sign::keypair().unwrap();
    let mut signed = sign::sign(b"combined", &kp.secret_key).unwrap();
    let last = signed.len() - 1;
    signed[last] ^= 0x80;
    assert_eq!(sign::open(&signed, &kp.public_key).unwrap_err(), SodiumError::Authentication);
}

#[test]
fn combined_too_short_is_rejected() {
    let kp = sign::keypair().unwrap();
    let err = sign::open(&[0u8; 63], &kp.public_key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "signed", actual: 63, .. }));
}

#[test]
fn short_signature_is_rejected() {
    let kp = sign::keypair().unwrap();
    let err = sign::verify_detached(&[0u8; 63], b"m", &kp.public_key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "signature", actual: 63, .. }));
}

#[test]
fn secret_key_decomposes() {
    let seed = [5u8; sign::SEED_BYTES];
    let kp = sign::seed_keypair(&seed).unwrap();
    assert_eq!(&sign::sk_to_seed(&kp.secret_key).unwrap()[..], &seed[..]);
    assert_eq!(sign::sk_to_pk(&kp.secret_key).unwrap(), kp.public_key);
}

#[test]
fn curve25519_conversion_is_consistent() {
    let kp = sign::keypair().unwrap();
    let curve_pk = sign::pk_to_curve25519(&kp.public_key).unwrap();
    let curve_sk = sign::sk_to_curve25519(&kp.secret_key).unwrap();
    assert_eq!(curve_pk.len(), sign::CURVE25519_PUBLIC_KEY_BYTES);
    assert_eq!(public_box::public_from_secret(&curve_sk).unwrap(), curve_pk);
}
