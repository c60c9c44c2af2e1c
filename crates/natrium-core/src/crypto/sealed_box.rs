// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Anonymous sealed boxes: encryption to a public key with an ephemeral sender.

use crate::crypto::api;
use crate::types::{authentic, bounded, fixed, ExpectedLength, SecureBytes, SodiumError, SodiumResult};

pub use crate::registry::public_box::{PUBLIC_KEY_BYTES, SECRET_KEY_BYTES};
pub use crate::registry::sealed_box::SEAL_BYTES;

/// Encrypts `message` so that only the owner of `public_key` can open it.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `public_key` is not
/// [`PUBLIC_KEY_BYTES`] long and [`SodiumError::InvalidArgument`] if the
/// engine rejects it.
pub fn seal(message: &[u8], public_key: &[u8]) -> SodiumResult<Vec<u8>> {
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let api = api()?;

    let mut ciphertext = vec![0u8; message.len() + SEAL_BYTES];
    // SAFETY: ciphertext is exactly message.len() + SEAL_BYTES.
    let rc = unsafe { api.box_seal(&mut ciphertext, message, pk) };
    if rc != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "public_key",
            reason: "rejected by the engine",
        });
    }
    Ok(ciphertext)
}

/// Opens a sealed box addressed to the key pair (`public_key`, `secret_key`).
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for wrong-sized keys or a ciphertext
/// shorter than [`SEAL_BYTES`], and [`SodiumError::Authentication`] if the box
/// was not sealed for this key pair or was modified.
pub fn open(ciphertext: &[u8], public_key: &[u8], secret_key: &[u8]) -> SodiumResult<SecureBytes> {
    let pk = fixed::<PUBLIC_KEY_BYTES>("public_key", public_key)?;
    let sk = fixed::<SECRET_KEY_BYTES>("secret_key", secret_key)?;
    bounded("ciphertext", ciphertext, ExpectedLength::AtLeast(SEAL_BYTES))?;
    let api = api()?;

    let mut message = SecureBytes::new(ciphertext.len() - SEAL_BYTES);
    // SAFETY: ciphertext holds at least SEAL_BYTES and message is exactly the remainder.
    let rc = unsafe { api.box_seal_open(&mut message, ciphertext, pk, sk) };
    authentic(rc)?;
    Ok(message)
}
