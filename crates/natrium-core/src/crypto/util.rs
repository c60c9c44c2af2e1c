// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Constant-time comparisons and nonce arithmetic.

use crate::crypto::api;
use crate::types::{fixed, SodiumResult};

/// Compares two byte strings in time independent of their contents.
///
/// Slices of different lengths compare unequal without touching the engine's
/// comparison routine; only the length leaks.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> SodiumResult<bool> {
    let api = api()?;
    if a.len() != b.len() {
        return Ok(false);
    }
    Ok(api.memcmp(a, b) == 0)
}

/// Constant-time equality of two 16-byte values.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// unless both inputs are 16 bytes.
pub fn verify16(x: &[u8], y: &[u8]) -> SodiumResult<bool> {
    let x = fixed::<16>("x", x)?;
    let y = fixed::<16>("y", y)?;
    Ok(api()?.verify_16(x, y) == 0)
}

/// Constant-time equality of two 32-byte values.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// unless both inputs are 32 bytes.
pub fn verify32(x: &[u8], y: &[u8]) -> SodiumResult<bool> {
    let x = fixed::<32>("x", x)?;
    let y = fixed::<32>("y", y)?;
    Ok(api()?.verify_32(x, y) == 0)
}

/// Constant-time equality of two 64-byte values.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// unless both inputs are 64 bytes.
pub fn verify64(x: &[u8], y: &[u8]) -> SodiumResult<bool> {
    let x = fixed::<64>("x", x)?;
    let y = fixed::<64>("y", y)?;
    Ok(api()?.verify_64(x, y) == 0)
}

/// Increments `number` in place as a little-endian integer, wrapping on
/// overflow. Runs in constant time for a given length.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn increment(number: &mut [u8]) -> SodiumResult<()> {
    api()?.increment(number);
    Ok(())
}

/// Returns `Ok(true)` if every byte of `data` is zero, in constant time.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn is_zero(data: &[u8]) -> SodiumResult<bool> {
    Ok(api()?.is_zero(data) == 1)
}
