// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Unauthenticated XSalsa20 stream cipher.

use crate::crypto::api;
use crate::types::{fixed, status, SodiumResult};

pub use crate::registry::stream::{KEY_BYTES, NONCE_BYTES};

/// Returns `len` bytes of keystream.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// for a wrong-sized nonce or key.
pub fn keystream(len: usize, nonce: &[u8], key: &[u8]) -> SodiumResult<Vec<u8>> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    let api = api()?;
    let mut out = vec![0u8; len];
    status("crypto_stream", api.stream(&mut out, nonce, key))?;
    Ok(out)
}

/// XORs `message` with the keystream. Applying it twice restores the input.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// for a wrong-sized nonce or key.
pub fn xor(message: &[u8], nonce: &[u8], key: &[u8]) -> SodiumResult<Vec<u8>> {
    let nonce = fixed::<NONCE_BYTES>("nonce", nonce)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    let api = api()?;
    let mut out = vec![0u8; message.len()];
    // SAFETY: out is exactly message.len().
    let rc = unsafe { api.stream_xor(&mut out, message, nonce, key) };
    status("crypto_stream_xor", rc)?;
    Ok(out)
}
