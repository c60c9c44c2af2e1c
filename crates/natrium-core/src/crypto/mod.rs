// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Validating wrappers, one module per primitive family.
//!
//! Every operation checks fixed-size arguments first, then variable-length
//! arguments, then scalar parameters. Only after all checks pass is the
//! engine acquired and the native function called. A failure status always
//! discards the output buffer.

pub mod aead;
pub mod auth;
pub mod hash;
pub mod kdf;
pub mod kx;
pub mod public_box;
pub mod pwhash;
pub mod random;
pub mod scalarmult;
pub mod sealed_box;
pub mod secretbox;
pub mod sign;
pub mod stream;
pub mod util;

use crate::engine;
use crate::ffi::SodiumApi;
use crate::types::SodiumResult;

/// Returns the function table of the process-wide engine.
pub(crate) fn api() -> SodiumResult<&'static SodiumApi> {
    engine::sodium().map(|sodium| sodium.api())
}
