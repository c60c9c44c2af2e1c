// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! XSalsa20-Poly1305 secret-key authenticated encryption.

use crate::crypto::{api, random};
use crate::types::{authentic, bounded, fixed, status, ExpectedLength, SecureBytes, SodiumResult};

pub use crate::registry::secretbox::{KEY_BYTES, MAC_BYTES, NONCE_BYTES};

/// Generates a random secret-box key.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keygen() -> SodiumResult<SecureBytes> {
    random::secure_bytes(KEY_BYTES)
}

/// Encrypts and authenticates `message`, returning MAC ‖ ciphertext.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `nonce` is not [`NONCE_BYTES`] or `key` is not [`KEY_BYTES`] long.
pub fn seal(message: &[u8], nonce: &[u8], key: &[u8]) -> SodiumResult<Vec<u8>> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    let api = api()?;

    let mut ciphertext = vec![0u8; message.len() + MAC_BYTES];
    // SAFETY: ciphertext is exactly message.len() + MAC_BYTES.
    let rc = unsafe { api.secretbox_easy(&mut ciphertext, message, nonce, key) };
    status("crypto_secretbox_easy", rc)?;
    Ok(ciphertext)
}

/// Verifies and decrypts a ciphertext produced by [`seal`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// for a wrong-sized nonce or key, or a ciphertext shorter than [`MAC_BYTES`].
/// Returns [`SodiumError::Authentication`](crate::SodiumError::Authentication)
/// if the ciphertext was forged or tampered with.
pub fn open(ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> SodiumResult<SecureBytes> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    bounded("ciphertext", ciphertext, ExpectedLength::AtLeast(MAC_BYTES))?;
    let api = api()?;

    let mut message = SecureBytes::new(ciphertext.len() - MAC_BYTES);
    // SAFETY: ciphertext holds at least MAC_BYTES and message is exactly the remainder.
    let rc = unsafe { api.secretbox_open_easy(&mut message, ciphertext, nonce, key) };
    authentic(rc)?;
    Ok(message)
}

/// Encrypts `message`, returning the ciphertext and the MAC separately.
///
/// # Errors
///
/// Same as [`seal`].
pub fn seal_detached(
    message: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> SodiumResult<(Vec<u8>, [u8; MAC_BYTES])> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    let api = api()?;

    let mut ciphertext = vec![0u8; message.len()];
    let mut mac = [0u8; MAC_BYTES];
    // SAFETY: ciphertext is exactly message.len().
    let rc = unsafe { api.secretbox_detached(&mut ciphertext, &mut mac, message, nonce, key) };
    status("crypto_secretbox_detached", rc)?;
    Ok((ciphertext, mac))
}

/// Verifies `mac` and decrypts a detached ciphertext.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// for a wrong-sized MAC, nonce or key, and
/// [`SodiumError::Authentication`](crate::SodiumError::Authentication) on forgery.
pub fn open_detached(
    ciphertext: &[u8],
    mac: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> SodiumResult<SecureBytes> {
    let mac = fixed::<MAC_BYTES>("mac", mac)?;
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    let api = api()?;

    let mut message = SecureBytes::new(ciphertext.len());
    // SAFETY: message is exactly ciphertext.len().
    let rc = unsafe { api.secretbox_open_detached(&mut message, ciphertext, mac, nonce, key) };
    authentic(rc)?;
    Ok(message)
}

/// Like [`seal`], but prepends the nonce so the output is self-contained.
///
/// # Errors
///
/// Same as [`seal`].
pub fn seal_prefixed(message: &[u8], nonce: &[u8], key: &[u8]) -> SodiumResult<Vec<u8>> {
    let sealed = seal(message, nonce, key)?;
    let mut out = Vec::with_capacity(NONCE_BYTES + sealed.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Opens the output of [`seal_prefixed`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `data` cannot hold a nonce and a MAC, otherwise the errors of [`open`].
pub fn open_prefixed(data: &[u8], key: &[u8]) -> SodiumResult<SecureBytes> {
    fixed::<KEY_BYTES>("key", key)?;
    bounded("data", data, ExpectedLength::AtLeast(NONCE_BYTES + MAC_BYTES))?;
    let (nonce, ciphertext) = data.split_at(NONCE_BYTES);
    open(ciphertext, nonce, key)
}
