// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::crypto::public_box;
use natrium_core::{fixed, SecureBytes, SodiumError, SodiumResult};
use zeroize::Zeroizing;

pub(crate) fn decode_hex(encoded: &str) -> SodiumResult<Zeroizing<Vec<u8>>> {
    hex::decode(encoded)
        .map(Zeroizing::new)
        .map_err(|_| SodiumError::InvalidArgument {
            argument: "hex",
            reason: "not valid hexadecimal",
        })
}

/// A Curve25519 public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; public_box::PUBLIC_KEY_BYTES]);

impl PublicKey {
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`] unless `bytes` is 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> SodiumResult<Self> {
        fixed("public_key", bytes).map(|key| Self(*key))
    }

    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidArgument`] for malformed hex and
    /// [`SodiumError::InvalidLength`] for a key of the wrong size.
    pub fn from_hex(encoded: &str) -> SodiumResult<Self> {
        Self::from_bytes(&decode_hex(encoded)?)
    }

    pub fn as_bytes(&self) -> &[u8; public_box::PUBLIC_KEY_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A Curve25519 key pair. The secret half is wiped on drop.
#[derive(Debug, Clone)]
pub struct SecretKey {
    secret: SecureBytes,
    public: PublicKey,
}

impl SecretKey {
    /// Generates a fresh key pair.
    ///
    /// # Errors
    ///
    /// Returns the engine load error if libsodium is unavailable.
    pub fn new() -> SodiumResult<Self> {
        let pair = public_box::keypair()?;
        Ok(Self {
            public: PublicKey::from_bytes(&pair.public_key)?,
            secret: pair.secret_key,
        })
    }

    /// Derives a key pair deterministically from a 32-byte seed.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`] for a seed of the wrong size.
    pub fn from_seed(seed: &[u8]) -> SodiumResult<Self> {
        let pair = public_box::seed_keypair(seed)?;
        Ok(Self {
            public: PublicKey::from_bytes(&pair.public_key)?,
            secret: pair.secret_key,
        })
    }

    /// Rebuilds a key pair from its secret half.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidLength`] for a key of the wrong size.
    pub fn from_bytes(secret: &[u8]) -> SodiumResult<Self> {
        let public = public_box::public_from_secret(secret)?;
        Ok(Self {
            secret: SecureBytes::from_slice(secret),
            public: PublicKey::from_bytes(&public)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`SodiumError::InvalidArgument`] for malformed hex and
    /// [`SodiumError::InvalidLength`] for a key of the wrong size.
    pub fn from_hex(encoded: &str) -> SodiumResult<Self> {
        Self::from_bytes(&decode_hex(encoded)?)
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }

    /// Hex encoding of the secret half, wiped when dropped.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.secret[..]))
    }
}
