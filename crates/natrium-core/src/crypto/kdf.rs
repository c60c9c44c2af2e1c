// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! BLAKE2b subkey derivation from a master key.

use crate::crypto::{api, random};
use crate::types::{fixed, length, status, ExpectedLength, SecureBytes, SodiumResult};

pub use crate::registry::kdf::{BYTES_MAX, BYTES_MIN, CONTEXT_BYTES, KEY_BYTES};

/// Generates a random master key.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keygen() -> SodiumResult<SecureBytes> {
    random::secure_bytes(KEY_BYTES)
}

/// Derives subkey number `subkey_id` of length `subkey_len` within `context`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `context` is not [`CONTEXT_BYTES`] long, `key` is not [`KEY_BYTES`] long,
/// or `subkey_len` is outside [`BYTES_MIN`]`..=`[`BYTES_MAX`].
pub fn derive_from_key(
    subkey_len: usize,
    subkey_id: u64,
    context: &[u8],
    key: &[u8],
) -> SodiumResult<SecureBytes> {
    let context = fixed::<CONTEXT_BYTES>("context", context)?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    length(
        "subkey_len",
        subkey_len,
        ExpectedLength::Range {
            min: BYTES_MIN,
            max: BYTES_MAX,
        },
    )?;
    let api = api()?;

    let mut subkey = SecureBytes::new(subkey_len);
    // SAFETY: subkey_len was checked against the engine's bounds.
    let rc = unsafe { api.kdf_derive_from_key(&mut subkey, subkey_id, context, key) };
    status("crypto_kdf_derive_from_key", rc)?;
    Ok(subkey)
}
