// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Key-holding convenience objects built on [`natrium_core`].
//!
//! Each type owns its key material and delegates every cryptographic
//! operation, and the validation that goes with it, to the core crate.

mod dual;
mod keys;
mod nonce;
mod public;
mod sealed;
mod secret;
mod sign;

pub use dual::DualSecret;
pub use keys::{PublicKey, SecretKey};
pub use nonce::{NonceStrategy, NONCE_BYTES};
pub use public::PublicBox;
pub use sealed::SealedBox;
pub use secret::SecretBox;
pub use sign::{Signer, Verifier};

pub use natrium_core::{initialize, initialize_with, EngineConfig, SecureBytes, SodiumError, SodiumResult};
