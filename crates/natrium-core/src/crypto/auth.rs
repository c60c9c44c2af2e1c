// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Secret-key message authentication: HMAC-SHA-512-256 and one-time Poly1305.

use crate::crypto::api;
use crate::types::{fixed, status, SecureBytes, SodiumResult};

pub use crate::registry::auth::{AUTH_BYTES, AUTH_KEY_BYTES, ONETIMEAUTH_BYTES, ONETIMEAUTH_KEY_BYTES};

/// Generates a random HMAC key.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keygen() -> SodiumResult<SecureBytes> {
    crate::crypto::random::secure_bytes(AUTH_KEY_BYTES)
}

/// Computes an HMAC-SHA-512-256 tag over `message`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `key` is not [`AUTH_KEY_BYTES`] long.
pub fn auth(message: &[u8], key: &[u8]) -> SodiumResult<[u8; AUTH_BYTES]> {
    let key = fixed::<AUTH_KEY_BYTES>("key", key)?;
    let api = api()?;
    let mut tag = [0u8; AUTH_BYTES];
    status("crypto_auth", api.auth(&mut tag, message, key))?;
    Ok(tag)
}

/// Returns `Ok(true)` only if `tag` authenticates `message` under `key`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// for a wrong-sized tag or key.
pub fn auth_verify(tag: &[u8], message: &[u8], key: &[u8]) -> SodiumResult<bool> {
    let tag = fixed::<AUTH_BYTES>("tag", tag)?;
    let key = fixed::<AUTH_KEY_BYTES>("key", key)?;
    let api = api()?;
    Ok(api.auth_verify(tag, message, key) == 0)
}

/// Computes a Poly1305 tag. A key must never authenticate two messages.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `key` is not [`ONETIMEAUTH_KEY_BYTES`] long.
pub fn onetimeauth(message: &[u8], key: &[u8]) -> SodiumResult<[u8; ONETIMEAUTH_BYTES]> {
    let key = fixed::<ONETIMEAUTH_KEY_BYTES>("key", key)?;
    let api = api()?;
    let mut tag = [0u8; ONETIMEAUTH_BYTES];
    status("crypto_onetimeauth", api.onetimeauth(&mut tag, message, key))?;
    Ok(tag)
}

/// Returns `Ok(true)` only if the Poly1305 `tag` authenticates `message`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// for a wrong-sized tag or key.
pub fn onetimeauth_verify(tag: &[u8], message: &[u8], key: &[u8]) -> SodiumResult<bool> {
    let tag = fixed::<ONETIMEAUTH_BYTES>("tag", tag)?;
    let key = fixed::<ONETIMEAUTH_KEY_BYTES>("key", key)?;
    let api = api()?;
    Ok(api.onetimeauth_verify(tag, message, key) == 0)
}
