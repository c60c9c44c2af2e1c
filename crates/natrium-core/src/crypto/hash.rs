// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! SHA-256, SHA-512, BLAKE2b and SipHash-2-4.

use crate::crypto::api;
use crate::types::{bounded, fixed, length, status, ExpectedLength, SodiumResult};

pub use crate::registry::hash::{
    GENERICHASH_BYTES, GENERICHASH_BYTES_MAX, GENERICHASH_BYTES_MIN, GENERICHASH_KEY_BYTES,
    GENERICHASH_KEY_BYTES_MAX, GENERICHASH_KEY_BYTES_MIN, SHA256_BYTES, SHA512_BYTES,
    SHORTHASH_BYTES, SHORTHASH_KEY_BYTES,
};

const OUTPUT_RANGE: ExpectedLength = ExpectedLength::Range {
    min: GENERICHASH_BYTES_MIN,
    max: GENERICHASH_BYTES_MAX,
};

const KEY_RANGE: ExpectedLength = ExpectedLength::Range {
    min: GENERICHASH_KEY_BYTES_MIN,
    max: GENERICHASH_KEY_BYTES_MAX,
};

/// SHA-256 digest of `message`.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn sha256(message: &[u8]) -> SodiumResult<[u8; SHA256_BYTES]> {
    let api = api()?;
    let mut digest = [0u8; SHA256_BYTES];
    status("crypto_hash_sha256", api.sha256(&mut digest, message))?;
    Ok(digest)
}

/// SHA-512 digest of `message`.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn sha512(message: &[u8]) -> SodiumResult<[u8; SHA512_BYTES]> {
    let api = api()?;
    let mut digest = [0u8; SHA512_BYTES];
    status("crypto_hash_sha512", api.sha512(&mut digest, message))?;
    Ok(digest)
}

/// BLAKE2b digest of `message` with a caller-chosen length and optional key.
///
/// `output_len` must lie in [`GENERICHASH_BYTES_MIN`]`..=`[`GENERICHASH_BYTES_MAX`]
/// and a key, when given, in [`GENERICHASH_KEY_BYTES_MIN`]`..=`[`GENERICHASH_KEY_BYTES_MAX`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if the key or the requested output length is out of bounds.
pub fn generichash(message: &[u8], key: Option<&[u8]>, output_len: usize) -> SodiumResult<Vec<u8>> {
    if let Some(key) = key {
        bounded("key", key, KEY_RANGE)?;
    }
    length("output_len", output_len, OUTPUT_RANGE)?;
    let api = api()?;

    let mut digest = vec![0u8; output_len];
    // SAFETY: output and key lengths were checked against the engine's bounds.
    let rc = unsafe { api.generichash(&mut digest, message, key) };
    status("crypto_generichash", rc)?;
    Ok(digest)
}

/// Unkeyed BLAKE2b digest of the default length, [`GENERICHASH_BYTES`].
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn blake2b(message: &[u8]) -> SodiumResult<Vec<u8>> {
    generichash(message, None, GENERICHASH_BYTES)
}

/// SipHash-2-4 of `message`, for hash tables keyed against flooding.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `key` is not [`SHORTHASH_KEY_BYTES`] long.
pub fn shorthash(message: &[u8], key: &[u8]) -> SodiumResult<[u8; SHORTHASH_BYTES]> {
    let key = fixed::<SHORTHASH_KEY_BYTES>("key", key)?;
    let api = api()?;
    let mut out = [0u8; SHORTHASH_BYTES];
    status("crypto_shorthash", api.shorthash(&mut out, message, key))?;
    Ok(out)
}
