// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::SodiumResult;

use crate::keys::{PublicKey, SecretKey};
use crate::sign::{Signer, Verifier};

/// One encryption key pair and one signing key pair held together.
#[derive(Debug, Clone)]
pub struct DualSecret {
    encryption: SecretKey,
    signing: Signer,
}

impl DualSecret {
    /// Generates both key pairs.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn new() -> SodiumResult<Self> {
        Ok(Self {
            encryption: SecretKey::new()?,
            signing: Signer::new()?,
        })
    }

    /// Rebuilds both key pairs from an encryption secret key and a signing seed.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// if either input has the wrong size.
    pub fn from_parts(secret_key: &[u8], signing_seed: &[u8]) -> SodiumResult<Self> {
        Ok(Self {
            encryption: SecretKey::from_bytes(secret_key)?,
            signing: Signer::from_seed(signing_seed)?,
        })
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.encryption
    }

    pub fn public_key(&self) -> &PublicKey {
        self.encryption.public_key()
    }

    pub fn signer(&self) -> &Signer {
        &self.signing
    }

    pub fn verifier(&self) -> Verifier {
        self.signing.verifier()
    }
}
