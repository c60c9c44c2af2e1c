// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The length a buffer argument was required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedLength {
    /// Exactly this many bytes.
    Exact(usize),
    /// Any length in `min..=max`.
    Range { min: usize, max: usize },
    /// At least this many bytes.
    AtLeast(usize),
    /// At most this many bytes.
    AtMost(usize),
}

impl ExpectedLength {
    /// Returns `true` if `len` satisfies this expectation.
    pub fn accepts(self, len: usize) -> bool {
        match self {
            ExpectedLength::Exact(n) => len == n,
            ExpectedLength::Range { min, max } => (min..=max).contains(&len),
            ExpectedLength::AtLeast(n) => len >= n,
            ExpectedLength::AtMost(n) => len <= n,
        }
    }
}

impl fmt::Display for ExpectedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedLength::Exact(n) => write!(f, "exactly {n}"),
            ExpectedLength::Range { min, max } => write!(f, "between {min} and {max}"),
            ExpectedLength::AtLeast(n) => write!(f, "at least {n}"),
            ExpectedLength::AtMost(n) => write!(f, "at most {n}"),
        }
    }
}

/// Enumerates all error conditions surfaced by the engine loader and the
/// primitive wrappers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SodiumError {
    /// No candidate shared library could be loaded, or `sodium_init` failed.
    #[error("failed to load libsodium (tried: {}): {reason}", attempted.join(", "))]
    EngineLoad {
        attempted: Vec<String>,
        reason: String,
    },
    /// The loaded library does not export a required symbol.
    #[error("libsodium does not export required symbol `{symbol}`")]
    SymbolResolution { symbol: &'static str },
    /// The loaded library reports a size constant different from the compiled-in one.
    #[error("incompatible libsodium: {primitive}.{constant} is {actual}, expected {expected}")]
    IncompatibleEngine {
        primitive: &'static str,
        constant: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A buffer argument has the wrong length.
    #[error("invalid length for `{argument}`: expected {expected} bytes, got {actual}")]
    InvalidLength {
        argument: &'static str,
        expected: ExpectedLength,
        actual: usize,
    },
    /// A scalar argument is out of range or otherwise unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
    /// Decryption or verification failed.
    #[error("authentication failed")]
    Authentication,
    /// libsodium returned a failure status that has no more specific meaning.
    #[error("{function} returned unexpected status {status}")]
    NativeOperation { function: &'static str, status: i32 },
    /// The registry has no primitive with this name.
    #[error("unknown primitive `{0}`")]
    UnknownPrimitive(String),
    /// The loaded engine cannot run this primitive on the current CPU.
    #[error("{primitive} is not available on this platform")]
    Unavailable { primitive: &'static str },
}

impl SodiumError {
    /// Returns `true` for failures that make every operation impossible.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SodiumError::EngineLoad { .. }
                | SodiumError::SymbolResolution { .. }
                | SodiumError::IncompatibleEngine { .. }
        )
    }
}

/// Convenience alias for `Result<T, SodiumError>`.
pub type SodiumResult<T> = Result<T, SodiumError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// Secret keys, seeds, derived keys and decrypted plaintexts are handed back
/// in this container. The `Debug` implementation redacts the contents.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a zero-filled buffer of the given length.
    pub fn new(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    /// Creates a buffer by copying the given slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer contains no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shortens the buffer, zeroizing the removed tail first.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.0.len() {
            self.0[new_len..].zeroize();
            self.0.truncate(new_len);
        }
    }
}

impl std::ops::Deref for SecureBytes {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl std::ops::DerefMut for SecureBytes {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

/// A public key and the secret key it belongs to.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub secret_key: SecureBytes,
}

/// Checks that `value` is exactly `N` bytes and views it as an array.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] naming `argument` otherwise.
pub fn fixed<'a, const N: usize>(
    argument: &'static str,
    value: &'a [u8],
) -> SodiumResult<&'a [u8; N]> {
    value.try_into().map_err(|_| SodiumError::InvalidLength {
        argument,
        expected: ExpectedLength::Exact(N),
        actual: value.len(),
    })
}

/// Checks that `value.len()` satisfies `expected`.
pub(crate) fn bounded(
    argument: &'static str,
    value: &[u8],
    expected: ExpectedLength,
) -> SodiumResult<()> {
    length(argument, value.len(), expected)
}

/// Checks that a requested length satisfies `expected`.
pub(crate) fn length(
    argument: &'static str,
    actual: usize,
    expected: ExpectedLength,
) -> SodiumResult<()> {
    if expected.accepts(actual) {
        Ok(())
    } else {
        Err(SodiumError::InvalidLength {
            argument,
            expected,
            actual,
        })
    }
}

/// Maps a zero status to `Ok(())` and anything else to [`SodiumError::NativeOperation`].
pub(crate) fn status(function: &'static str, status: libc::c_int) -> SodiumResult<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(SodiumError::NativeOperation { function, status })
    }
}

/// Maps a zero status to `Ok(())` and anything else to [`SodiumError::Authentication`].
pub(crate) fn authentic(status: libc::c_int) -> SodiumResult<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(SodiumError::Authentication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_accepts_exact_length() {
        let data = [7u8; 24];
        let arr: &[u8; 24] = fixed("nonce", &data).unwrap();
        assert_eq!(arr, &data);
    }

    #[test]
    fn fixed_names_the_argument() {
        let err = fixed::<32>("key", &[0u8; 31]).unwrap_err();
        assert_eq!(
            err,
            SodiumError::InvalidLength {
                argument: "key",
                expected: ExpectedLength::Exact(32),
                actual: 31,
            }
        );
        assert!(err.to_string().contains("`key`"));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = ExpectedLength::Range { min: 16, max: 64 };
        assert!(range.accepts(16));
        assert!(range.accepts(64));
        assert!(!range.accepts(15));
        assert!(!range.accepts(65));
    }

    #[test]
    fn status_maps_nonzero_to_native_error() {
        assert!(status("crypto_sign_detached", 0).is_ok());
        assert_eq!(
            status("crypto_sign_detached", -1),
            Err(SodiumError::NativeOperation {
                function: "crypto_sign_detached",
                status: -1
            })
        );
        assert_eq!(authentic(-1), Err(SodiumError::Authentication));
    }

    #[test]
    fn secure_bytes_debug_is_redacted() {
        let secret = SecureBytes::from_slice(b"hunter2");
        assert_eq!(format!("{secret:?}"), "SecureBytes([REDACTED; 7])");
    }

    #[test]
    fn secure_bytes_truncate_keeps_prefix() {
        let mut secret = SecureBytes::from_slice(&[1, 2, 3, 4]);
        secret.truncate(2);
        assert_eq!(&*secret, &[1, 2]);
    }

    #[test]
    fn engine_errors_are_fatal() {
        assert!(SodiumError::SymbolResolution { symbol: "sodium_init" }.is_fatal());
        assert!(!SodiumError::Authentication.is_fatal());
    }
}
