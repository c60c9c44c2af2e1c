// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Raw X25519 scalar multiplication.

use zeroize::Zeroizing;

use crate::crypto::api;
use crate::types::{fixed, status, SecureBytes, SodiumError, SodiumResult};

pub use crate::registry::scalarmult::{BYTES, SCALAR_BYTES};

/// Multiplies the base point by `scalar`, giving the public key of `scalar`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `scalar` is not [`SCALAR_BYTES`]
/// long.
pub fn base(scalar: &[u8]) -> SodiumResult<[u8; BYTES]> {
    let scalar = fixed::<SCALAR_BYTES>("scalar", scalar)?;
    let api = api()?;
    let mut q = [0u8; BYTES];
    status("crypto_scalarmult_base", api.scalarmult_base(&mut q, scalar))?;
    Ok(q)
}

/// Multiplies `point` by `scalar`. The result is a raw shared secret and must
/// be hashed before use as a key.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for wrong-sized inputs and
/// [`SodiumError::InvalidArgument`] if `point` has small order, which would
/// make the result all zeros.
pub fn scalarmult(scalar: &[u8], point: &[u8]) -> SodiumResult<SecureBytes> {
    let scalar = fixed::<SCALAR_BYTES>("scalar", scalar)?;
    let point = fixed::<BYTES>("point", point)?;
    let api = api()?;

    let mut q = Zeroizing::new([0u8; BYTES]);
    if api.scalarmult(&mut q, scalar, point) != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "point",
            reason: "small-order point yields an all-zero result",
        });
    }
    Ok(SecureBytes::from_slice(&*q))
}
