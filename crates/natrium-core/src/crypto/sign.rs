// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Ed25519 signatures.

use libc::c_ulonglong;
use zeroize::Zeroizing;

use crate::crypto::api;
use crate::types::{
    authentic, bounded, fixed, status, ExpectedLength, KeyPair, SecureBytes, SodiumError,
    SodiumResult,
};

pub use crate::registry::public_box::{
    PUBLIC_KEY_BYTES as CURVE25519_PUBLIC_KEY_BYTES,
    SECRET_KEY_BYTES as CURVE25519_SECRET_KEY_BYTES,
};
pub use crate::registry::sign::{PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SEED_BYTES, SIGNATURE_BYTES};

/// Generates a random signing key pair.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keypair() -> SodiumResult<KeyPair> {
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    let mut sk = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    status("crypto_sign_keypair", api.sign_keypair(&mut pk, &mut sk))?;
    Ok(KeyPair {
        public_key: pk.to_vec(),
        secret_key: SecureBytes::from_slice(&*sk),
    })
}

/// Derives a signing key pair from a 32-byte seed.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `seed` is not [`SEED_BYTES`] long.
pub fn seed_keypair(seed: &[u8]) -> SodiumResult<KeyPair> {
    let seed = fixed::<SEED_BYTES>("seed", seed)?;
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    let mut sk = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    status("crypto_sign_seed_keypair", api.sign_seed_keypair(&mut pk, &mut sk, seed))?;
    Ok(KeyPair {
        public_key: pk.to_vec(),
        secret_key: SecureBytes::from_slice(&*sk),
    })
}

/// Returns signature ‖ message.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long.
pub fn sign(message: &[u8], secret_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;

    let mut signed = vec![0u8; message.len() + SIGNATURE_BYTES];
    let mut signed_len: c_ulonglong = 0;
    // SAFETY: signed holds message.len() + SIGNATURE_BYTES.
    let rc = unsafe { api.sign_combined(&mut signed, &mut signed_len, message, sk) };
    status("crypto_sign", rc)?;
    signed.truncate(signed_len as usize);
    Ok(signed)
}

/// Verifies a signed message produced by [`sign`] and returns the message.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized key or input
/// shorter than a signature, and [`SodiumError::Authentication`] if the
/// signature does not verify.
pub fn open(signed: &[u8], public_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    bounded("signed", signed, ExpectedLength::AtLeast(SIGNATURE_BYTES))?;
    let api = api()?;

    let mut message = vec![0u8; signed.len() - SIGNATURE_BYTES];
    let mut message_len: c_ulonglong = 0;
    // SAFETY: signed holds at least SIGNATURE_BYTES and message is exactly the remainder.
    let rc = unsafe { api.sign_open(&mut message, &mut message_len, signed, pk) };
    authentic(rc)?;
    message.truncate(message_len as usize);
    Ok(message)
}

/// Signs `message`, returning a detached signature.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long.
pub fn sign_detached(message: &[u8], secret_key: &[u8]) -> SodiumResult<[u8; SIGNATURE_BYTES]> {
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;
    let mut signature = [0u8; SIGNATURE_BYTES];
    status("crypto_sign_detached", api.sign_detached(&mut signature, message, sk))?;
    Ok(signature)
}

/// Checks a detached signature, returning `Ok(true)` only if it is authentic.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized signature or key.
pub fn verify_detached(signature: &[u8], message: &[u8], public_key: &[u8]) -> SodiumResult<bool> {
    let sig = fixed::<SIGNATURE_BYTES>("signature", signature)?;
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let api = api()?;
    Ok(api.sign_verify_detached(sig, message, pk) == 0)
}

/// Like [`verify_detached`], but a forged signature is an error.
///
/// # Errors
///
/// Returns [`SodiumError::Authentication`] if the signature does not verify.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> SodiumResult<()> {
    if verify_detached(signature, message, public_key)? {
        Ok(())
    } else {
        Err(SodiumError::Authentication)
    }
}

/// Extracts the seed a secret key was derived from.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long.
pub fn sk_to_seed(secret_key: &[u8]) -> SodiumResult<SecureBytes> {
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;
    let mut seed = Zeroizing::new([0u8; SEED_BYTES]);
    status("crypto_sign_ed25519_sk_to_seed", api.sign_sk_to_seed(&mut seed, sk))?;
    Ok(SecureBytes::from_slice(&*seed))
}

/// Extracts the public key embedded in a secret key.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long.
pub fn sk_to_pk(secret_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    status("crypto_sign_ed25519_sk_to_pk", api.sign_sk_to_pk(&mut pk, sk))?;
    Ok(pk.to_vec())
}

/// Converts an Ed25519 public key into an X25519 public key.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized key and
/// [`SodiumError::InvalidArgument`] if the key is not a valid curve point.
pub fn pk_to_curve25519(public_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let api = api()?;
    let mut curve_pk = [0u8; CURVE25519_PUBLIC_KEY_BYTES];
    if api.sign_pk_to_curve25519(&mut curve_pk, pk) != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "public_key",
            reason: "not a valid Ed25519 point",
        });
    }
    Ok(curve_pk.to_vec())
}

/// Converts an Ed25519 secret key into an X25519 secret key.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long.
pub fn sk_to_curve25519(secret_key: &[u8]) -> SodiumResult<SecureBytes> {
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;
    let mut curve_sk = Zeroizing::new([0u8; CURVE25519_SECRET_KEY_BYTES]);
    status(
        "crypto_sign_ed25519_sk_to_curve25519",
        api.sign_sk_to_curve25519(&mut curve_sk, sk),
    )?;
    Ok(SecureBytes::from_slice(&*curve_sk))
}
