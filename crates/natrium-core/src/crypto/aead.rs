// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Authenticated encryption with additional data.

use crate::crypto::{api, random};
use crate::ffi::AeadFn;
use crate::registry::{self, PrimitiveDescriptor};
use crate::types::{
    authentic, bounded, fixed, status, ExpectedLength, SecureBytes, SodiumError, SodiumResult,
};

pub use crate::registry::aead::{
    ABYTES, AES256GCM_NPUB_BYTES, CHACHA20POLY1305_IETF_NPUB_BYTES, KEY_BYTES,
    XCHACHA20POLY1305_IETF_NPUB_BYTES,
};

/// The AEAD constructions libsodium provides with the IETF argument layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aead {
    /// ChaCha20-Poly1305 with a 96-bit nonce.
    ChaCha20Poly1305Ietf,
    /// XChaCha20-Poly1305 with a 192-bit nonce, safe for random nonces.
    XChaCha20Poly1305Ietf,
    /// AES-256-GCM; needs hardware AES support.
    Aes256Gcm,
}

impl Aead {
    /// Size contract of this construction.
    pub fn descriptor(self) -> &'static PrimitiveDescriptor {
        match self {
            Aead::ChaCha20Poly1305Ietf => &registry::AEAD_CHACHA20POLY1305_IETF,
            Aead::XChaCha20Poly1305Ietf => &registry::AEAD_XCHACHA20POLY1305_IETF,
            Aead::Aes256Gcm => &registry::AEAD_AES256GCM,
        }
    }

    /// Nonce length for this construction.
    pub fn nonce_bytes(self) -> usize {
        match self {
            Aead::ChaCha20Poly1305Ietf => CHACHA20POLY1305_IETF_NPUB_BYTES,
            Aead::XChaCha20Poly1305Ietf => XCHACHA20POLY1305_IETF_NPUB_BYTES,
            Aead::Aes256Gcm => AES256GCM_NPUB_BYTES,
        }
    }

    fn function(self) -> AeadFn {
        match self {
            Aead::ChaCha20Poly1305Ietf => AeadFn::ChaCha20Poly1305Ietf,
            Aead::XChaCha20Poly1305Ietf => AeadFn::XChaCha20Poly1305Ietf,
            Aead::Aes256Gcm => AeadFn::Aes256Gcm,
        }
    }

    fn encrypt_symbol(self) -> &'static str {
        match self {
            Aead::ChaCha20Poly1305Ietf => "crypto_aead_chacha20poly1305_ietf_encrypt",
            Aead::XChaCha20Poly1305Ietf => "crypto_aead_xchacha20poly1305_ietf_encrypt",
            Aead::Aes256Gcm => "crypto_aead_aes256gcm_encrypt",
        }
    }
}

/// Returns `Ok(true)` if the engine can run `alg` on this CPU.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn is_available(alg: Aead) -> SodiumResult<bool> {
    let api = api()?;
    Ok(match alg {
        Aead::Aes256Gcm => api.aes256gcm_is_available(),
        Aead::ChaCha20Poly1305Ietf | Aead::XChaCha20Poly1305Ietf => true,
    })
}

/// Generates a random key for any AEAD construction.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keygen(_alg: Aead) -> SodiumResult<SecureBytes> {
    random::secure_bytes(KEY_BYTES)
}

fn require_available(alg: Aead) -> SodiumResult<()> {
    if is_available(alg)? {
        Ok(())
    } else {
        Err(SodiumError::Unavailable {
            primitive: alg.descriptor().name,
        })
    }
}

/// Encrypts `message` and authenticates it together with `additional_data`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized nonce or key and
/// [`SodiumError::Unavailable`] if the CPU cannot run `alg`.
pub fn encrypt(
    alg: Aead,
    message: &[u8],
    additional_data: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> SodiumResult<Vec<u8>> {
    bounded("nonce", nonce, ExpectedLength::Exact(alg.nonce_bytes()))?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    require_available(alg)?;
    let api = api()?;

    let mut ciphertext = vec![0u8; message.len() + ABYTES];
    // SAFETY: ciphertext is exactly message.len() + ABYTES and the nonce length
    // matches the construction.
    let rc = unsafe {
        api.aead_encrypt(alg.function(), &mut ciphertext, message, additional_data, nonce, key)
    };
    status(alg.encrypt_symbol(), rc)?;
    Ok(ciphertext)
}

/// Verifies and decrypts a ciphertext produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a wrong-sized nonce or key or a
/// ciphertext shorter than [`ABYTES`], [`SodiumError::Unavailable`] if the CPU
/// cannot run `alg`, and [`SodiumError::Authentication`] if verification fails.
pub fn decrypt(
    alg: Aead,
    ciphertext: &[u8],
    additional_data: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> SodiumResult<SecureBytes> {
    bounded("nonce", nonce, ExpectedLength::Exact(alg.nonce_bytes()))?;
    let key = fixed::<KEY_BYTES>("key", key)?;
    bounded("ciphertext", ciphertext, ExpectedLength::AtLeast(ABYTES))?;
    require_available(alg)?;
    let api = api()?;

    let mut message = SecureBytes::new(ciphertext.len() - ABYTES);
    // SAFETY: ciphertext holds at least ABYTES, message is exactly the remainder
    // and the nonce length matches the construction.
    let rc = unsafe {
        api.aead_decrypt(alg.function(), &mut message, ciphertext, additional_data, nonce, key)
    };
    authentic(rc)?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_sizes_match_descriptors() {
        for alg in [Aead::ChaCha20Poly1305Ietf, Aead::XChaCha20Poly1305Ietf, Aead::Aes256Gcm] {
            assert_eq!(alg.descriptor().nonce_bytes, Some(alg.nonce_bytes()));
            assert_eq!(alg.descriptor().mac_bytes, Some(ABYTES));
            assert!(alg.descriptor().symbols.contains(&alg.encrypt_symbol()));
        }
    }
}
