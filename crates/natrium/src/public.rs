// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::crypto::public_box;
use natrium_core::{SecureBytes, SodiumResult};

use crate::keys::{PublicKey, SecretKey};
use crate::nonce::{NonceStrategy, Nonces};

/// Public-key authenticated encryption between one local key pair and one
/// peer. The shared key is computed once at construction.
#[derive(Debug)]
pub struct PublicBox {
    shared: SecureBytes,
    peer: PublicKey,
    nonces: Nonces,
}

impl PublicBox {
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn new(secret_key: &SecretKey, peer: &PublicKey) -> SodiumResult<Self> {
        Ok(Self {
            shared: public_box::precompute(peer.as_bytes(), secret_key.as_bytes())?,
            peer: *peer,
            nonces: Nonces::Random,
        })
    }

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

    pub fn peer(&self) -> &PublicKey {
        &self.peer
    }

    /// Copies the box, reseeding a counter from a fresh random nonce.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn try_clone(&self) -> SodiumResult<Self> {
        Ok(Self {
            shared: self.shared.clone(),
            peer: self.peer,
            nonces: self.nonces.fork()?,
        })
    }

    /// Encrypts `message` for the peer and returns `nonce ‖ ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn encrypt(&mut self, message: &[u8]) -> SodiumResult<Vec<u8>> {
        let nonce = self.nonces.next()?;
        public_box::seal_precomputed_prefixed(message, &nonce, &self.shared)
    }

    /// Verifies and decrypts `nonce ‖ ciphertext` from the peer.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// for input shorter than a nonce plus MAC and
    /// [`SodiumError::Authentication`](natrium_core::SodiumError::Authentication)
    /// if verification fails.
    pub fn decrypt(&self, data: &[u8]) -> SodiumResult<SecureBytes> {
        public_box::open_precomputed_prefixed(data, &self.shared)
    }
}
