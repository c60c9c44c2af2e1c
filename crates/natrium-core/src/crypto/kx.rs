// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! X25519 key exchange producing a pair of directional session keys.

use zeroize::Zeroizing;

use crate::crypto::api;
use crate::types::{fixed, status, KeyPair, SecureBytes, SodiumError, SodiumResult};

pub use crate::registry::kx::{PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SEED_BYTES, SESSION_KEY_BYTES};

/// Session keys for one side of an exchange.
#[derive(Debug, Clone)]
pub struct SessionKeys {
    /// Key for data received from the peer.
    pub rx: SecureBytes,
    /// Key for data sent to the peer.
    pub tx: SecureBytes,
}

/// Generates a random key-exchange key pair.
///
/// # Errors
///
/// Returns the engine load error if libsodium is unavailable.
pub fn keypair() -> SodiumResult<KeyPair> {
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    let mut sk = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    status("crypto_kx_keypair", api.kx_keypair(&mut pk, &mut sk))?;
    Ok(KeyPair {
        public_key: pk.to_vec(),
        secret_key: SecureBytes::from_slice(&*sk),
    })
}

/// Derives a key-exchange key pair from `seed`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] if `seed` is not [`SEED_BYTES`] long.
pub fn seed_keypair(seed: &[u8]) -> SodiumResult<KeyPair> {
    let seed = fixed::<SEED_BYTES>("seed", seed)?;
    let api = api()?;
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    let mut sk = Zeroizing::new([0u8; SECRET_KEY_BYTES]);
    status("crypto_kx_seed_keypair", api.kx_seed_keypair(&mut pk, &mut sk, seed))?;
    Ok(KeyPair {
        public_key: pk.to_vec(),
        secret_key: SecureBytes::from_slice(&*sk),
    })
}

/// Computes the client's session keys.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for wrong-sized keys and
/// [`SodiumError::InvalidArgument`] if `server_pk` is rejected by the engine.
pub fn client_session_keys(
    client_pk: &[u8],
    client_sk: &[u8],
    server_pk: &[u8],
) -> SodiumResult<SessionKeys> {
    let client_pk = fixed::<PUBLIC_KEY_BYTES>("client_pk", client_pk)?;
    let client_sk = fixed::<SECRET_KEY_BYTES>("client_sk", client_sk)?;
    let server_pk = fixed::<PUBLIC_KEY_BYTES>("server_pk", server_pk)?;
    let api = api()?;

    let mut rx = Zeroizing::new([0u8; SESSION_KEY_BYTES]);
    let mut tx = Zeroizing::new([0u8; SESSION_KEY_BYTES]);
    if api.kx_client_session_keys(&mut rx, &mut tx, client_pk, client_sk, server_pk) != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "server_pk",
            reason: "rejected by the engine",
        });
    }
    Ok(SessionKeys {
        rx: SecureBytes::from_slice(&*rx),
        tx: SecureBytes::from_slice(&*tx),
    })
}

/// Computes the server's session keys.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for wrong-sized keys and
/// [`SodiumError::InvalidArgument`] if `client_pk` is rejected by the engine.
pub fn server_session_keys(
    server_pk: &[u8],
    server_sk: &[u8],
    client_pk: &[u8],
) -> SodiumResult<SessionKeys> {
    let server_pk = fixed::<PUBLIC_KEY_BYTES>("server_pk", server_pk)?;
    let server_sk = fixed::<SECRET_KEY_BYTES>("server_sk", server_sk)?;
    let client_pk = fixed::<PUBLIC_KEY_BYTES>("client_pk", client_pk)?;
    let api = api()?;

    let mut rx = Zeroizing::new([0u8; SESSION_KEY_BYTES]);
    let mut tx = Zeroizing::new([0u8; SESSION_KEY_BYTES]);
    if api.kx_server_session_keys(&mut rx, &mut tx, server_pk, server_sk, client_pk) != 0 {
        return Err(SodiumError::InvalidArgument {
            argument: "client_pk",
            reason: "rejected by the engine",
        });
    }
    Ok(SessionKeys {
        rx: SecureBytes::from_slice(&*rx),
        tx: SecureBytes::from_slice(&*tx),
    })
}
