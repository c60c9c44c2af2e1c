use natrium_core::crypto::{random, stream, util};
use natrium_core::SodiumError;

#[test]
fn random_bytes_has_requested_length() {
    assert_eq!(random::random_bytes(0).unwrap().len(), 0);
    let buf = random::random_bytes(64).unwrap();
    assert_eq!(buf.len(), 64);
    assert!(!buf.iter().all(|&b| b == 0));
}

#[test]
fn random_bytes_differ_between_calls() {
    assert_ne!(random::random_bytes(32).unwrap(), random::random_bytes(32).unwrap());
}

#[test]
fn fill_overwrites_buffer() {
    let mut buf = [0u8; 48];
    random::fill(&mut buf).unwrap();
    assert!(!buf.iter().all(|&b| b == 0));
}

#[test]
fn uniform_stays_below_bound() {
    for _ in 0..1000 {
        assert!(random::uniform(10).unwrap() < 10);
    }
    assert_eq!(random::uniform(1).unwrap(), 0);
}

#[test]
fn deterministic_output_depends_only_on_seed() {
    let seed = [4u8; random::SEED_BYTES];
    let a = random::deterministic(100, &seed).unwrap();
    let b = random::deterministic(100, &seed).unwrap();
    let c = random::deterministic(100, &[5u8; random::SEED_BYTES]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(&random::deterministic(10, &seed).unwrap()[..], &a[..10]);
}

#[test]
fn deterministic_rejects_short_seed() {
    assert!(matches!(
        random::deterministic(8, &[0u8; 31]),
        Err(SodiumError::InvalidLength { argument: "seed", actual: 31, .. })
    ));
}

#[test]
fn stream_xor_is_an_involution() {
    let key = [8u8; stream::KEY_BYTES];
    let nonce = [6u8; stream::NONCE_BYTES];
    let ct = stream::xor(b"stream cipher", &nonce, &key).unwrap();
    assert_ne!(&ct[..], b"stream cipher");
    assert_eq!(stream::xor(&ct, &nonce, &key).unwrap(), b"stream cipher");
}

#[test]
fn keystream_equals_xor_of_zeros() {
    let key = [8u8; stream::KEY_BYTES];
    let nonce = [6u8; stream::NONCE_BYTES];
    assert_eq!(
        stream::keystream(40, &nonce, &key).unwrap(),
        stream::xor(&[0u8; 40], &nonce, &key).unwrap()
    );
}

#[test]
fn constant_time_eq_behaves() {
    assert!(util::constant_time_eq(b"abc", b"abc").unwrap());
    assert!(!util::constant_time_eq(b"abc", b"abd").unwrap());
    assert!(!util::constant_time_eq(b"abc", b"abcd").unwrap());
    assert!(util::constant_time_eq(b"", b"").unwrap());
}

#[test]
fn fixed_size_verifiers() {
    assert!(util::verify16(&[1u8; 16], &[1u8; 16]).unwrap());
    assert!(!util::verify32(&[1u8; 32], &[2u8; 32]).unwrap());
    assert!(util::verify64(&[0u8; 64], &[0u8; 64]).unwrap());
    assert!(matches!(
        util::verify16(&[0u8; 15], &[0u8; 16]),
        Err(SodiumError::InvalidLength { argument: "x", .. })
    ));
}

#[test]
fn increment_carries_little_endian() {
    let mut n = [0xff, 0x00, 0x00];
    util::increment(&mut n).unwrap();
    assert_eq!(n, [0x00, 0x01, 0x00]);

    let mut wrap = [0xff; 4];
    util::increment(&mut wrap).unwrap();
    assert_eq!(wrap, [0u8; 4]);
}

#[test]
fn is_zero_detects_any_set_bit() {
    assert!(util::is_zero(&[0u8; 32]).unwrap());
    let mut data = [0u8; 32];
    data[31] = 1;
    assert!(!util::is_zero(&data).unwrap());
}
