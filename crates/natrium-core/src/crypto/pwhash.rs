// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Password hashing: Argon2id, Argon2i and scrypt.
//!
//! [`derive_key`] stretches a password and salt into key material.
//! [`hash_str`] produces a self-describing string suitable for storage, which
//! [`verify_str`] checks later without the caller tracking parameters.

use crate::crypto::api;
use crate::types::{
    bounded, length, status, ExpectedLength, SecureBytes, SodiumError, SodiumResult,
};

pub use crate::registry::pwhash::*;

const ARGON2I13_ALG: libc::c_int = 1;
const ARGON2ID13_ALG: libc::c_int = 2;

const ARGON2ID_PREFIX: &str = "$argon2id$";
const ARGON2I_PREFIX: &str = "$argon2i$";
const SCRYPT_PREFIX: &str = "$7$";

/// Password hashing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwHashAlgorithm {
    /// Argon2id version 1.3, the default.
    Argon2id13,
    /// Argon2i version 1.3.
    Argon2i13,
    /// scrypt with Salsa20/8 and SHA-256.
    Scrypt,
}

impl PwHashAlgorithm {
    /// Required salt length.
    pub fn salt_bytes(self) -> usize {
        match self {
            PwHashAlgorithm::Argon2id13 | PwHashAlgorithm::Argon2i13 => ARGON2_SALT_BYTES,
            PwHashAlgorithm::Scrypt => SCRYPT_SALT_BYTES,
        }
    }

    /// Buffer length of a hash string, including the terminating NUL.
    pub fn str_bytes(self) -> usize {
        match self {
            PwHashAlgorithm::Argon2id13 | PwHashAlgorithm::Argon2i13 => ARGON2_STR_BYTES,
            PwHashAlgorithm::Scrypt => SCRYPT_STR_BYTES,
        }
    }

    fn output_range(self) -> ExpectedLength {
        match self {
            PwHashAlgorithm::Argon2id13 | PwHashAlgorithm::Argon2i13 => ExpectedLength::Range {
                min: ARGON2_BYTES_MIN,
                max: ARGON2_BYTES_MAX,
            },
            PwHashAlgorithm::Scrypt => ExpectedLength::Range {
                min: SCRYPT_BYTES_MIN,
                max: SCRYPT_BYTES_MAX,
            },
        }
    }

    fn opslimit_range(self) -> (u64, u64) {
        match self {
            PwHashAlgorithm::Argon2id13 => (ARGON2ID_OPSLIMIT_MIN, ARGON2_OPSLIMIT_MAX),
            PwHashAlgorithm::Argon2i13 => (ARGON2I_OPSLIMIT_MIN, ARGON2_OPSLIMIT_MAX),
            PwHashAlgorithm::Scrypt => (SCRYPT_OPSLIMIT_MIN, SCRYPT_OPSLIMIT_MAX),
        }
    }

    fn memlimit_range(self) -> (usize, usize) {
        match self {
            PwHashAlgorithm::Argon2id13 | PwHashAlgorithm::Argon2i13 => {
                (ARGON2_MEMLIMIT_MIN, ARGON2_MEMLIMIT_MAX)
            }
            PwHashAlgorithm::Scrypt => (SCRYPT_MEMLIMIT_MIN, SCRYPT_MEMLIMIT_MAX),
        }
    }

    fn password_range(self) -> ExpectedLength {
        match self {
            PwHashAlgorithm::Argon2id13 | PwHashAlgorithm::Argon2i13 => {
                ExpectedLength::AtMost(ARGON2_PASSWD_MAX)
            }
            PwHashAlgorithm::Scrypt => ExpectedLength::AtMost(SCRYPT_PASSWD_MAX),
        }
    }

    fn argon2_alg(self) -> Option<libc::c_int> {
        match self {
            PwHashAlgorithm::Argon2id13 => Some(ARGON2ID13_ALG),
            PwHashAlgorithm::Argon2i13 => Some(ARGON2I13_ALG),
            PwHashAlgorithm::Scrypt => None,
        }
    }
}

/// Work factors for one password hashing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// CPU cost (passes for Argon2, operations for scrypt).
    pub opslimit: u64,
    /// Memory cost in bytes.
    pub memlimit: usize,
    pub algorithm: PwHashAlgorithm,
}

impl Limits {
    /// Fast enough for interactive logins.
    pub const fn interactive(algorithm: PwHashAlgorithm) -> Self {
        let (opslimit, memlimit) = match algorithm {
            PwHashAlgorithm::Argon2id13 => (2, 67_108_864),
            PwHashAlgorithm::Argon2i13 => (4, 33_554_432),
            PwHashAlgorithm::Scrypt => (524_288, 16_777_216),
        };
        Self { opslimit, memlimit, algorithm }
    }

    /// Between interactive and sensitive. scrypt has no such level and gets
    /// its interactive parameters.
    pub const fn moderate(algorithm: PwHashAlgorithm) -> Self {
        let (opslimit, memlimit) = match algorithm {
            PwHashAlgorithm::Argon2id13 => (3, 268_435_456),
            PwHashAlgorithm::Argon2i13 => (6, 134_217_728),
            PwHashAlgorithm::Scrypt => (524_288, 16_777_216),
        };
        Self { opslimit, memlimit, algorithm }
    }

    /// For long-lived secrets where seconds of work per hash are acceptable.
    pub const fn sensitive(algorithm: PwHashAlgorithm) -> Self {
        let (opslimit, memlimit) = match algorithm {
            PwHashAlgorithm::Argon2id13 => (4, 1_073_741_824),
            PwHashAlgorithm::Argon2i13 => (8, 536_870_912),
            PwHashAlgorithm::Scrypt => (33_554_432, 1_073_741_824),
        };
        Self { opslimit, memlimit, algorithm }
    }

    /// Smallest work factors the engine accepts. Too weak for real
    /// passwords; useful to keep tests and benches fast.
    pub const fn minimum(algorithm: PwHashAlgorithm) -> Self {
        let (opslimit, memlimit) = match algorithm {
            PwHashAlgorithm::Argon2id13 => (ARGON2ID_OPSLIMIT_MIN, ARGON2_MEMLIMIT_MIN),
            PwHashAlgorithm::Argon2i13 => (ARGON2I_OPSLIMIT_MIN, ARGON2_MEMLIMIT_MIN),
            PwHashAlgorithm::Scrypt => (SCRYPT_OPSLIMIT_MIN, SCRYPT_MEMLIMIT_MIN),
        };
        Self { opslimit, memlimit, algorithm }
    }

    fn check(&self) -> SodiumResult<()> {
        let (ops_min, ops_max) = self.algorithm.opslimit_range();
        if self.opslimit < ops_min || self.opslimit > ops_max {
            return Err(SodiumError::InvalidArgument {
                argument: "opslimit",
                reason: "outside the range the algorithm accepts",
            });
        }
        let (mem_min, mem_max) = self.algorithm.memlimit_range();
        if self.memlimit < mem_min || self.memlimit > mem_max {
            return Err(SodiumError::InvalidArgument {
                argument: "memlimit",
                reason: "outside the range the algorithm accepts",
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::interactive(PwHashAlgorithm::Argon2id13)
    }
}

/// Derives `len` bytes of key material from `password` and `salt`.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for a salt of the wrong size, an
/// overlong password or a `len` outside the algorithm's bounds,
/// [`SodiumError::InvalidArgument`] for
/// limits outside the accepted ranges, and [`SodiumError::NativeOperation`] if
/// the engine cannot satisfy the request (typically out of memory).
pub fn derive_key(
    len: usize,
    password: &[u8],
    salt: &[u8],
    limits: &Limits,
) -> SodiumResult<SecureBytes> {
    let algorithm = limits.algorithm;
    bounded("salt", salt, ExpectedLength::Exact(algorithm.salt_bytes()))?;
    length("len", len, algorithm.output_range())?;
    length("password", password.len(), algorithm.password_range())?;
    limits.check()?;
    let api = api()?;

    let mut key = SecureBytes::new(len);
    let rc = match algorithm.argon2_alg() {
        // SAFETY: key length and salt length were validated above.
        Some(alg) => unsafe {
            api.pwhash_argon2(&mut key, password, salt, limits.opslimit, limits.memlimit, alg)
        },
        // SAFETY: as above.
        None => unsafe {
            api.pwhash_scrypt(&mut key, password, salt, limits.opslimit, limits.memlimit)
        },
    };
    let function = match algorithm {
        PwHashAlgorithm::Scrypt => "crypto_pwhash_scryptsalsa208sha256",
        _ => "crypto_pwhash",
    };
    status(function, rc)?;
    Ok(key)
}

/// Hashes `password` into an ASCII string that embeds the algorithm, limits
/// and a fresh random salt.
///
/// # Errors
///
/// Returns [`SodiumError::InvalidLength`] for an overlong password,
/// [`SodiumError::InvalidArgument`] for limits outside the accepted ranges
/// and [`SodiumError::NativeOperation`] if hashing fails.
pub fn hash_str(password: &[u8], limits: &Limits) -> SodiumResult<String> {
    let algorithm = limits.algorithm;
    length("password", password.len(), algorithm.password_range())?;
    limits.check()?;
    let api = api()?;

    let mut out = vec![0u8; algorithm.str_bytes()];
    let (function, rc) = match algorithm.argon2_alg() {
        // SAFETY: out is exactly the string buffer size the engine writes.
        Some(alg) => ("crypto_pwhash_str_alg", unsafe {
            api.pwhash_argon2_str(&mut out, password, limits.opslimit, limits.memlimit, alg)
        }),
        // SAFETY: as above.
        None => ("crypto_pwhash_scryptsalsa208sha256_str", unsafe {
            api.pwhash_scrypt_str(&mut out, password, limits.opslimit, limits.memlimit)
        }),
    };
    status(function, rc)?;

    let end = out.iter().position(|&b| b == 0).unwrap_or(out.len());
    out.truncate(end);
    String::from_utf8(out).map_err(|_| SodiumError::NativeOperation { function, status: -1 })
}

/// Identifies the algorithm a hash string was produced with.
///
/// # Errors
///
/// Returns [`SodiumError::UnknownPrimitive`] for an unrecognised prefix.
pub fn algorithm_of(hash: &str) -> SodiumResult<PwHashAlgorithm> {
    if hash.starts_with(ARGON2ID_PREFIX) {
        Ok(PwHashAlgorithm::Argon2id13)
    } else if hash.starts_with(ARGON2I_PREFIX) {
        Ok(PwHashAlgorithm::Argon2i13)
    } else if hash.starts_with(SCRYPT_PREFIX) {
        Ok(PwHashAlgorithm::Scrypt)
    } else {
        let prefix: String = hash.chars().take(10).collect();
        Err(SodiumError::UnknownPrimitive(prefix))
    }
}

/// Returns `Ok(true)` only if `hash` was produced by [`hash_str`] for
/// `password`.
///
/// # Errors
///
/// Returns [`SodiumError::UnknownPrimitive`] if `hash` does not carry a known
/// algorithm prefix and [`SodiumError::InvalidLength`] if it is longer than
/// the algorithm's string buffer.
pub fn verify_str(hash: &str, password: &[u8]) -> SodiumResult<bool> {
    let algorithm = algorithm_of(hash)?;
    length("hash", hash.len(), ExpectedLength::AtMost(algorithm.str_bytes() - 1))?;
    if hash.as_bytes().contains(&0) {
        return Ok(false);
    }
    let api = api()?;

    let mut terminated = Vec::with_capacity(hash.len() + 1);
    terminated.extend_from_slice(hash.as_bytes());
    terminated.push(0);
    let rc = match algorithm {
        // SAFETY: terminated ends with NUL and holds no interior NUL.
        PwHashAlgorithm::Scrypt => unsafe { api.pwhash_scrypt_str_verify(&terminated, password) },
        // SAFETY: as above.
        _ => unsafe { api.pwhash_argon2_str_verify(&terminated, password) },
    };
    Ok(rc == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_pass_range_checks() {
        for alg in [PwHashAlgorithm::Argon2id13, PwHashAlgorithm::Argon2i13, PwHashAlgorithm::Scrypt] {
            for limits in [
                Limits::interactive(alg),
                Limits::moderate(alg),
                Limits::sensitive(alg),
                Limits::minimum(alg),
            ] {
                assert!(limits.check().is_ok(), "{limits:?}");
            }
        }
    }

    #[test]
    fn rejects_opslimit_below_minimum() {
        let limits = Limits {
            opslimit: 2,
            ..Limits::minimum(PwHashAlgorithm::Argon2i13)
        };
        assert!(matches!(
            limits.check(),
            Err(SodiumError::InvalidArgument { argument: "opslimit", .. })
        ));
    }

    #[test]
    fn rejects_memlimit_above_maximum() {
        for alg in [PwHashAlgorithm::Argon2id13, PwHashAlgorithm::Scrypt] {
            let limits = Limits {
                memlimit: usize::MAX,
                ..Limits::minimum(alg)
            };
            assert!(matches!(
                limits.check(),
                Err(SodiumError::InvalidArgument { argument: "memlimit", .. })
            ));
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn argon2_password_length_is_bounded() {
        let range = PwHashAlgorithm::Argon2id13.password_range();
        assert!(length("password", ARGON2_PASSWD_MAX, range).is_ok());
        let err = length("password", ARGON2_PASSWD_MAX + 1, range).unwrap_err();
        assert!(matches!(err, SodiumError::InvalidLength { argument: "password", .. }));
        assert!(PwHashAlgorithm::Scrypt.password_range().accepts(usize::MAX));
    }

    #[test]
    fn recognises_hash_prefixes() {
        assert_eq!(algorithm_of("$argon2id$v=19$m=65536").unwrap(), PwHashAlgorithm::Argon2id13);
        assert_eq!(algorithm_of("$argon2i$v=19$m=32768").unwrap(), PwHashAlgorithm::Argon2i13);
        assert_eq!(algorithm_of("$7$C6..../....").unwrap(), PwHashAlgorithm::Scrypt);
        assert!(matches!(algorithm_of("$2b$12$abc"), Err(SodiumError::UnknownPrimitive(_))));
    }

    #[test]
    fn salt_is_checked_before_the_engine() {
        let err = derive_key(32, b"pw", &[0u8; 3], &Limits::default()).unwrap_err();
        assert!(matches!(err, SodiumError::InvalidLength { argument: "salt", actual: 3, .. }));
    }
}
