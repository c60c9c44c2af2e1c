// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::crypto::sign;
use natrium_core::{fixed, SecureBytes, SodiumResult};
use zeroize::Zeroizing;

use crate::keys::decode_hex;

/// An Ed25519 signing key.
#[derive(Debug, Clone)]
pub struct Signer {
    secret: SecureBytes,
    verifier: Verifier,
}

impl Signer {
    /// Generates a fresh signing key.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn new() -> SodiumResult<Self> {
        let pair = sign::keypair()?;
        Ok(Self {
            verifier: Verifier::from_public_key(&pair.public_key)?,
            secret: pair.secret_key,
        })
    }

    /// Derives a signing key from a 32-byte seed.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// for a seed of the wrong size.
    pub fn from_seed(seed: &[u8]) -> SodiumResult<Self> {
        let pair = sign::seed_keypair(seed)?;
        Ok(Self {
            verifier: Verifier::from_public_key(&pair.public_key)?,
            secret: pair.secret_key,
        })
    }

    /// Returns `signature ‖ message`.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn sign(&self, message: &[u8]) -> SodiumResult<Vec<u8>> {
        sign::sign(message, &self.secret)
    }

    /// Returns a detached signature over `message`.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn signature(&self, message: &[u8]) -> SodiumResult<[u8; sign::SIGNATURE_BYTES]> {
        sign::sign_detached(message, &self.secret)
    }

    /// The seed this key can be rebuilt from.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn seed(&self) -> SodiumResult<SecureBytes> {
        sign::sk_to_seed(&self.secret)
    }

    /// Hex encoding of the seed, wiped when dropped.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn seed_hex(&self) -> SodiumResult<Zeroizing<String>> {
        Ok(Zeroizing::new(hex::encode(&self.seed()?[..])))
    }

    pub fn verifier(&self) -> Verifier {
        self.verifier.clone()
    }
}

/// An Ed25519 public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verifier {
    public: [u8; sign::PUBLIC_KEY_BYTES],
}

impl Verifier {
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// unless `public_key` is 32 bytes long.
    pub fn from_public_key(public_key: &[u8]) -> SodiumResult<Self> {
        Ok(Self {
            public: *fixed("public_key", public_key)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidArgument`](natrium_core::SodiumError::InvalidArgument)
    /// for malformed hex and
    /// [`SodiumError::InvalidLength`](natrium_core::SodiumError::InvalidLength)
    /// for a key of the wrong size.
    pub fn from_hex(encoded: &str) -> SodiumResult<Self> {
        Self::from_public_key(&decode_hex(encoded)?)
    }

    /// Checks a detached signature.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::Authentication`](natrium_core::SodiumError::Authentication)
    /// if the signature does not match.
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> SodiumResult<()> {
        sign::verify(signature, message, &self.public)
    }

    /// Checks `signature ‖ message` and returns the message.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::Authentication`](natrium_core::SodiumError::Authentication)
    /// if the signature does not match.
    pub fn open(&self, signed: &[u8]) -> SodiumResult<Vec<u8>> {
        sign::open(signed, &self.public)
    }

    pub fn public_key(&self) -> &[u8; sign::PUBLIC_KEY_BYTES] {
        &self.public
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.public)
    }
}
