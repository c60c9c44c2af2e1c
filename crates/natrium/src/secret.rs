// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::crypto::secretbox;
use natrium_core::{fixed, SecureBytes, SodiumResult};

use crate::nonce::{NonceStrategy, Nonces};

/// Secret-key authenticated encryption with an owned key.
///
/// [`encrypt`](Self::encrypt) returns `nonce ‖ ciphertext`, which
/// [`decrypt`](Self::decrypt) accepts as is.
#[derive(Debug)]
pub struct SecretBox {
    key: SecureBytes,
    nonces: Nonces,
}

impl SecretBox {
    /// Creates a box with a freshly generated key and random nonces.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn new() -> SodiumResult<Self> {
        Ok(Self {
            key: secretbox::keygen()?,
            nonces: Nonces::Random,
        })
    }

    /// Creates a box around an existing key.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// unless `key` is 32 bytes long.
    pub fn from_key(key: &[u8]) -> SodiumResult<Self> {
        let key = fixed::<{ secretbox::KEY_BYTES }>("key", key)?;
        Ok(Self {
            key: SecureBytes::from_slice(key),
            nonces: Nonces::Random,
        })
    }

    /// Switches the nonce strategy. A counter starts from a random value.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn with_strategy(mut self, strategy: NonceStrategy) -> SodiumResult<Self> {
        self.nonces = Nonces::new(strategy)?;
        Ok(self)
    }

    pub fn strategy(&self) -> NonceStrategy {
        self.nonces.strategy()
    }

    /// Copies the box. A counter copy restarts from a fresh random nonce so
    /// the two never encrypt under the same nonce.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn try_clone(&self) -> SodiumResult<Self> {
        Ok(Self {
            key: self.key.clone(),
            nonces: self.nonces.fork()?,
        })
    }

    /// Encrypts `message` under the next nonce.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn encrypt(&mut self, message: &[u8]) -> SodiumResult<Vec<u8>> {
        let nonce = self.nonces.next()?;
        secretbox::seal_prefixed(message, &nonce, &self.key)
    }

    /// Verifies and decrypts `nonce ‖ ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// for input shorter than a nonce plus MAC and
    /// [`SodiumError::Authentication`](natrium_core::SodiumError::Authentication)
    /// if the data was altered or sealed under another key.
    pub fn decrypt(&self, data: &[u8]) -> SodiumResult<SecureBytes> {
        secretbox::open_prefixed(data, &self.key)
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }
}
