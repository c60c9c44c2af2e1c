// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::crypto::sealed_box;
use natrium_core::{SecureBytes, SodiumError, SodiumResult};

use crate::keys::{PublicKey, SecretKey};

/// Anonymous encryption to a recipient's public key.
///
/// A box built with [`for_recipient`](Self::for_recipient) can only encrypt.
#[derive(Debug, Clone)]
pub struct SealedBox {
    public: PublicKey,
    secret: Option<SecretKey>,
}

impl SealedBox {
    pub fn for_recipient(public_key: &PublicKey) -> Self {
        Self {
            public: *public_key,
            secret: None,
        }
    }

    pub fn from_secret(secret_key: SecretKey) -> Self {
        Self {
            public: *secret_key.public_key(),
            secret: Some(secret_key),
        }
    }

    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn encrypt(&self, message: &[u8]) -> SodiumResult<Vec<u8>> {
        sealed_box::seal(message, self.public.as_bytes())
    }

    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidArgument`] if this box holds no secret
    /// key, [`SodiumError::InvalidLength`] for truncated input and
    /// [`SodiumError::Authentication`] if verification fails.
    pub fn decrypt(&self, ciphertext: &[u8]) -> SodiumResult<SecureBytes> {
        let secret = self.secret.as_ref().ok_or(SodiumError::InvalidArgument {
            argument: "secret_key",
            reason: "sealed box was built for encryption only",
        })?;
        sealed_box::open(ciphertext, self.public.as_bytes(), secret.as_bytes())
    }

    pub fn can_decrypt(&self) -> bool {
        self.secret.is_some()
    }
}
