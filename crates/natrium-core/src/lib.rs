// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Safe bindings to a libsodium shared library loaded at run time.
//!
//! The library image is located on first use (or through [`initialize`]),
//! its exports are resolved into a typed function table, and its size
//! constants are checked against the compiled-in registry. Every public
//! operation validates argument lengths before touching native code and
//! reports failures through [`SodiumError`].
//!
//! # Crate layout
//!
//! * [`engine`] -- locating, loading and one-time initialization of libsodium.
//! * [`crypto`] -- validating wrappers, one module per primitive family.
//! * [`registry`] -- size constants and per-primitive descriptors.
//! * [`types`] -- error type, expected-length descriptions and secret buffers.

/// Locating, loading and initializing the libsodium image.
pub mod engine;
/// Validating wrappers around every bound primitive.
pub mod crypto;
/// Compiled-in size constants and descriptors.
pub mod registry;
/// Shared error types and secure byte containers.
pub mod types;

mod ffi;

pub use engine::{
    initialize, initialize_with, sodium, state, EngineCell, EngineConfig, EngineState,
    EngineVersion, Sodium, LIBRARY_PATH_ENV,
};
pub use registry::{sizes_for, PrimitiveDescriptor, SizeField};
pub use types::{fixed, ExpectedLength, KeyPair, SecureBytes, SodiumError, SodiumResult};
