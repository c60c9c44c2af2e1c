use natrium_core::crypto::{kdf, pwhash};
use natrium_core::crypto::pwhash::{Limits, PwHashAlgorithm};
use natrium_core::{ExpectedLength, SodiumError};

const CONTEXT: &[u8; 8] = b"natrium_";

#[test]
fn subkeys_are_deterministic_and_distinct() {
    let key = kdf::keygen().unwrap();
    let a1 = kdf::derive_from_key(32, 1, CONTEXT, &key).unwrap();
    let a2 = kdf::derive_from_key(32, 1, CONTEXT, &key).unwrap();
    let b = kdf::derive_from_key(32, 2, CONTEXT, &key).unwrap();
    assert_eq!(&a1[..], &a2[..]);
    assert_ne!(&a1[..], &b[..]);
}

#[test]
fn context_separates_subkeys() {
    let key = [9u8; kdf::KEY_BYTES];
    let a = kdf::derive_from_key(16, 0, b"context1", &key).unwrap();
    let b = kdf::derive_from_key(16, 0, b"context2", &key).unwrap();
    assert_ne!(&a[..], &b[..]);
}

#[test]
fn subkey_length_bounds() {
    let key = [0u8; kdf::KEY_BYTES];
    assert_eq!(kdf::derive_from_key(64, 0, CONTEXT, &key).unwrap().len(), 64);
    assert_eq!(
        kdf::derive_from_key(15, 0, CONTEXT, &key).unwrap_err(),
        SodiumError::InvalidLength {
            argument: "subkey_len",
            expected: ExpectedLength::Range { min: 16, max: 64 },
            actual: 15,
        }
    );
    assert!(kdf::derive_from_key(65, 0, CONTEXT, &key).is_err());
}

#[test]
fn context_must_be_eight_bytes() {
    let key = [0u8; kdf::KEY_BYTES];
    let err = kdf::derive_from_key(32, 0, b"short", &key).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "context", actual: 5, .. }));
}

#[test]
fn argon2id_derive_key_is_deterministic() {
    let limits = Limits::minimum(PwHashAlgorithm::Argon2id13);
    let salt = [1u8; pwhash::ARGON2_SALT_BYTES];
    let a = pwhash::derive_key(32, b"hunter2", &salt, &limits).unwrap();
    let b = pwhash::derive_key(32, b"hunter2", &salt, &limits).unwrap();
    let c = pwhash::derive_key(32, b"hunter3", &salt, &limits).unwrap();
    assert_eq!(&a[..], &b[..]);
    assert_ne!(&a[..], &c[..]);
}

#[test]
fn argon2i_and_argon2id_differ() {
    let salt = [2u8; pwhash::ARGON2_SALT_BYTES];
    let id = pwhash::derive_key(32, b"pw", &salt, &Limits::minimum(PwHashAlgorithm::Argon2id13))
        .unwrap();
    let limits_i = Limits {
        opslimit: 3,
        ..Limits::minimum(PwHashAlgorithm::Argon2i13)
    };
    let i = pwhash::derive_key(32, b"pw", &salt, &limits_i).unwrap();
    assert_ne!(&id[..], &i[..]);
}

#[test]
fn scrypt_uses_its_own_salt_length() {
    let limits = Limits::minimum(PwHashAlgorithm::Scrypt);
    let err = pwhash::derive_key(32, b"pw", &[0u8; 16], &limits).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "salt", actual: 16, .. }));

    let key = pwhash::derive_key(32, b"pw", &[0u8; pwhash::SCRYPT_SALT_BYTES], &limits).unwrap();
    assert_eq!(key.len(), 32);
}

#[test]
fn oversized_memlimit_is_a_caller_error() {
    let salt = [0u8; pwhash::ARGON2_SALT_BYTES];
    let limits = Limits {
        memlimit: usize::MAX,
        ..Limits::minimum(PwHashAlgorithm::Argon2id13)
    };
    let err = pwhash::derive_key(32, b"pw", &salt, &limits).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidArgument { argument: "memlimit", .. }));
    assert!(matches!(
        pwhash::hash_str(b"pw", &limits),
        Err(SodiumError::InvalidArgument { argument: "memlimit", .. })
    ));
}

#[test]
fn output_length_below_minimum_is_rejected() {
    let salt = [0u8; pwhash::ARGON2_SALT_BYTES];
    let err = pwhash::derive_key(8, b"pw", &salt, &Limits::minimum(PwHashAlgorithm::Argon2id13))
        .unwrap_err();
    assert!(matches!(err, SodiumError::InvalidLength { argument: "len", actual: 8, .. }));
}

#[test]
fn memlimit_below_minimum_is_rejected() {
    let limits = Limits {
        memlimit: 1024,
        ..Limits::minimum(PwHashAlgorithm::Argon2id13)
    };
    let err = pwhash::hash_str(b"pw", &limits).unwrap_err();
    assert!(matches!(err, SodiumError::InvalidArgument { argument: "memlimit", .. }));
}

#[test]
fn hash_str_verify_argon2id() {
    let limits = Limits::minimum(PwHashAlgorithm::Argon2id13);
    let stored = pwhash::hash_str(b"correct horse", &limits).unwrap();
    assert!(stored.starts_with("$argon2id$"));
    assert!(pwhash::verify_str(&stored, b"correct horse").unwrap());
    assert!(!pwhash::verify_str(&stored, b"battery staple").unwrap());
}

#[test]
fn hash_str_is_salted() {
    let limits = Limits::minimum(PwHashAlgorithm::Argon2id13);
    let a = pwhash::hash_str(b"same", &limits).unwrap();
    let b = pwhash::hash_str(b"same", &limits).unwrap();
    assert_ne!(a, b);
}

#[test]
fn hash_str_verify_argon2i() {
    let limits = Limits::minimum(PwHashAlgorithm::Argon2i13);
    let stored = pwhash::hash_str(b"pw", &limits).unwrap();
    assert_eq!(pwhash::algorithm_of(&stored).unwrap(), PwHashAlgorithm::Argon2i13);
    assert!(pwhash::verify_str(&stored, b"pw").unwrap());
}

#[test]
fn hash_str_verify_scrypt() {
    let limits = Limits::minimum(PwHashAlgorithm::Scrypt);
    let stored = pwhash::hash_str(b"pw", &limits).unwrap();
    assert!(stored.starts_with("$7$"));
    assert!(pwhash::verify_str(&stored, b"pw").unwrap());
    assert!(!pwhash::verify_str(&stored, b"pW").unwrap());
}

#[test]
fn verify_str_rejects_unknown_format() {
    assert!(matches!(
        pwhash::verify_str("$2b$12$notsupported", b"pw"),
        Err(SodiumError::UnknownPrimitive(_))
    ));
}

#[test]
fn verify_str_rejects_truncated_hash() {
    let stored = pwhash::hash_str(b"pw", &Limits::minimum(PwHashAlgorithm::Argon2id13)).unwrap();
    assert!(!pwhash::verify_str(&stored[..stored.len() - 4], b"pw").unwrap());
}
