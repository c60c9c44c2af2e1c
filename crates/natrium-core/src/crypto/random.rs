// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Random bytes from libsodium's process-wide generator.

use crate::crypto::api;
use crate::types::{fixed, SecureBytes, SodiumResult};

pub use crate::registry::random::SEED_BYTES;

/// Returns `len` random bytes.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn random_bytes(len: usize) -> SodiumResult<Vec<u8>> {
    let mut buf = vec![0u8; len];
    fill(&mut buf)?;
    Ok(buf)
}

/// Returns `len` random bytes in a zeroize-on-drop buffer, for key material.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn secure_bytes(len: usize) -> SodiumResult<SecureBytes> {
    let mut buf = SecureBytes::new(len);
    fill(&mut buf)?;
    Ok(buf)
}

/// Overwrites `buf` with random bytes.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn fill(buf: &mut [u8]) -> SodiumResult<()> {
    api()?.random_fill(buf);
    Ok(())
}

/// Returns a random nonce of a statically known length.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn random_nonce<const N: usize>() -> SodiumResult<[u8; N]> {
    let mut nonce = [0u8; N];
    fill(&mut nonce)?;
    Ok(nonce)
}

/// Returns a random 32-bit value.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn random_u32() -> SodiumResult<u32> {
    Ok(api()?.random_u32())
}

/// Returns a uniformly distributed value in `0..upper_bound`, without modulo bias.
///
/// An `upper_bound` below 2 always yields 0.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn uniform(upper_bound: u32) -> SodiumResult<u32> {
    Ok(api()?.random_uniform(upper_bound))
}

/// Expands `seed` into `len` reproducible pseudo-random bytes.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`](crate::SodiumError::InvalidLength)
/// if `seed` is not [`SEED_BYTES`] long.
pub fn deterministic(len: usize, seed: &[u8]) -> SodiumResult<Vec<u8>> {
    let seed = fixed::<SEED_BYTES>("seed", seed)?;
    let api = api()?;
    let mut buf = vec![0u8; len];
    api.random_deterministic(&mut buf, seed);
    Ok(buf)
}
