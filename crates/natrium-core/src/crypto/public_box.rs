// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Curve25519-XSalsa20-Poly1305 public-key authenticated encryption.

use zeroize::Zeroizing;

use crate::crypto::api;
use crate::types::{
    authentic, bounded, fixed, status, ExpectedLength, KeyPair, SecureBytes, SodiumError,
    SodiumResult,
};

pub use crate::registry::public_box::{
    BEFORENM_BYTES, MAC_BYTES, NONCE_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SEED_BYTES,
};

/// Generates a random key pair.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keypair() -> SodiumResult<KeyPair> {
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    let mut sk = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    status("crypto_box_keypair", api.box_keypair(&mut pk, &mut sk))?;
    Ok(KeyPair {
        public_key: pk.to_vec(),
        secret_key: SecureBytes::from_slice(&*sk),
    })
}

/// Derives a key pair deterministically from `seed`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `seed` is not [`SEED_BYTES`] long.
pub fn seed_keypair(seed: &[u8]) -> SodiumResult<KeyPair> {
    let seed = fixed::<SEED_BYTES>("seed", seed)?;
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    let mut sk = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    status("crypto_box_seed_keypair", api.box_seed_keypair(&mut pk, &mut sk, seed))?;
    Ok(KeyPair {
        public_key: pk.to_vec(),
        secret_key: SecureBytes::from_slice(&*sk),
    })
}

/// Recomputes the public key belonging to `secret_key`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `secret_key` is not
/// [`SECRET_KEY_BYTES`] long.
pub fn public_from_secret(secret_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    status("crypto_scalarmult_base", api.scalarmult_base(&mut pk, sk))?;
    Ok(pk.to_vec())
}

/// Encrypts `message` from the owner of `secret_key` to the owner of `public_key`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized nonce or key.
/// Returns [`SodiumError::InvalidArgument`] if the engine rejects the key pair.
pub fn seal(
    message: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> SodiumResult<Vec<u8>> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;

    let mut ciphertext = vec![0u8; message.len() + MAC_BYTES];
    // SAFETY: ciphertext is exactly message.len() + MAC_BYTES.
    let rc = unsafe { api.box_easy(&mut ciphertext, message, nonce, pk, sk) };
    if rc != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "public_key",
            reason: "shared secret is degenerate",
        });
    }
    Ok(ciphertext)
}

/// Verifies and decrypts a ciphertext sent by the owner of `public_key`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized nonce or key or a
/// ciphertext shorter than [`MAC_BYTES`], and [`SodiumError::Authentication`]
/// if verification fails.
pub fn open(
    ciphertext: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> SodiumResult<SecureBytes> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    bounded("ciphertext", ciphertext, ExpectedLength::AtLeast(MAC_BYTES))?;
    let api = api()?;

    let mut message = SecureBytes::new(ciphertext.len() - MAC_BYTES);
    // SAFETY: ciphertext holds at least MAC_BYTES and message is exactly the remainder.
    let rc = unsafe { api.box_open_easy(&mut message, ciphertext, nonce, pk, sk) };
    authentic(rc)?;
    Ok(message)
}

/// Computes the shared key for a peer once, for use with [`seal_precomputed`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized key and
/// [`SodiumError::InvalidArgument`] if the peer key yields a degenerate secret.
pub fn precompute(public_key: &[u8], secret_key: &[u8]) -> SodiumResult<SecureBytes> {
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    let api = api()?;

    let mut shared = Zeroizing::new([0u8; BEFORENM_BYTES]);
    if api.box_beforenm(&mut shared, pk, sk) != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "public_key",
            reason: "shared secret is degenerate",
        });
    }
    Ok(SecureBytes::from_slice(&*shared))
}

/// Encrypts `message` under a key from [`precompute`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized nonce or shared key.
pub fn seal_precomputed(message: &[u8], nonce: &[u8], shared_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let k = fixed::<BEFORENM_BYTES>("shared_key", shared_key)?;
    let api = api()?;

    let mut ciphertext = vec![0u8; message.len() + MAC_BYTES];
    // SAFETY: ciphertext is exactly message.len() + MAC_BYTES.
    let rc = unsafe { api.box_easy_afternm(&mut ciphertext, message, nonce, k) };
    status("crypto_box_easy_afternm", rc)?;
    Ok(ciphertext)
}

/// Verifies and decrypts a ciphertext under a key from [`precompute`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for wrong-sized arguments and
/// [`SodiumError::Authentication`] if verification fails.
pub fn open_precomputed(
    ciphertext: &[u8],
    nonce: &[u8],
    shared_key: &[u8],
) -> SodiumResult<SecureBytes> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let k = fixed::<BEFORENM_BYTES>("shared_key", shared_key)?;
    bounded("ciphertext", ciphertext, ExpectedLength::AtLeast(MAC_BYTES))?;
    let api = api()?;

    let mut message = SecureBytes::new(ciphertext.len() - MAC_BYTES);
    // SAFETY: ciphertext holds at least MAC_BYTES and message is exactly the remainder.
    let rc = unsafe { api.box_open_easy_afternm(&mut message, ciphertext, nonce, k) };
    authentic(rc)?;
    Ok(message)
}

/// Like [`seal_precomputed`], but prepends the nonce to the ciphertext.
///
/// # Errors
///
/// Same as [`seal_precomputed`].
pub fn seal_precomputed_prefixed(
    message: &[u8],
    nonce: &[u8],
    shared_key: &[u8],
) -> SodiumResult<Vec<u8>> {
    let sealed = seal_precomputed(message, nonce, shared_key)?;
    let mut out = Vec::with_capacity(NONCE_BYTES + sealed.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Opens the output of [`seal_precomputed_prefixed`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `data` cannot hold a nonce and
/// a MAC, otherwise the errors of [`open_precomputed`].
pub fn open_precomputed_prefixed(data: &[u8], shared_key: &[u8]) -> SodiumResult<SecureBytes> {
    fixed::<BEFORENM_BYTES>("shared_key", shared_key)?;
    bounded("data", data, ExpectedLength::AtLeast(NONCE_BYTES + MAC_BYTES))?;
    let (nonce, ciphertext) = data.split_at(NONCE_BYTES);
    open_precomputed(ciphertext, nonce, shared_key)
}
