// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Compiled-in size constants for every bound primitive.
//!
//! The per-primitive constant modules are the values the wrappers validate
//! against. Each [`PrimitiveDescriptor`] also lists the libsodium size
//! functions reporting the same values, so the loader can refuse an engine
//! whose ABI disagrees.

use crate::types::{SodiumError, SodiumResult};

/// XSalsa20-Poly1305 secret-key authenticated encryption.
pub mod secretbox {
    pub const KEY_BYTES: usize = 32;
    pub const NONCE_BYTES: usize = 24;
    pub const MAC_BYTES: usize = 16;
}

/// Curve25519-XSalsa20-Poly1305 public-key authenticated encryption.
pub mod public_box {
    pub const PUBLIC_KEY_BYTES: usize = 32;
    pub const SECRET_KEY_BYTES: usize = 32;
    pub const SEED_BYTES: usize = 32;
    pub const NONCE_BYTES: usize = 24;
    pub const MAC_BYTES: usize = 16;
    /// Length of a precomputed shared key.
    pub const BEFORENM_BYTES: usize = 32;
}

/// Anonymous sealed boxes.
pub mod sealed_box {
    /// Ciphertext overhead: ephemeral public key plus MAC.
    pub const SEAL_BYTES: usize = super::public_box::PUBLIC_KEY_BYTES + super::public_box::MAC_BYTES;
}

/// Ed25519 signatures.
pub mod sign {
    pub const PUBLIC_KEY_BYTES: usize = 32;
    pub const SECRET_KEY_BYTES: usize = 64;
    pub const SEED_BYTES: usize = 32;
    pub const SIGNATURE_BYTES: usize = 64;
}

/// SHA-2 and BLAKE2b hashing, SipHash short hashing.
pub mod hash {
    pub const SHA256_BYTES: usize = 32;
    pub const SHA512_BYTES: usize = 64;
    pub const GENERICHASH_BYTES: usize = 32;
    pub const GENERICHASH_BYTES_MIN: usize = 16;
    pub const GENERICHASH_BYTES_MAX: usize = 64;
    pub const GENERICHASH_KEY_BYTES: usize = 32;
    pub const GENERICHASH_KEY_BYTES_MIN: usize = 16;
    pub const GENERICHASH_KEY_BYTES_MAX: usize = 64;
    pub const SHORTHASH_BYTES: usize = 8;
    pub const SHORTHASH_KEY_BYTES: usize = 16;
}

/// HMAC-SHA-512-256 and Poly1305 message authentication.
pub mod auth {
    pub const AUTH_KEY_BYTES: usize = 32;
    pub const AUTH_BYTES: usize = 32;
    pub const ONETIMEAUTH_KEY_BYTES: usize = 32;
    pub const ONETIMEAUTH_BYTES: usize = 16;
}

/// AEAD constructions.
pub mod aead {
    pub const KEY_BYTES: usize = 32;
    pub const ABYTES: usize = 16;
    pub const CHACHA20POLY1305_IETF_NPUB_BYTES: usize = 12;
    pub const XCHACHA20POLY1305_IETF_NPUB_BYTES: usize = 24;
    pub const AES256GCM_NPUB_BYTES: usize = 12;
}

/// XSalsa20 stream cipher.
pub mod stream {
    pub const KEY_BYTES: usize = 32;
    pub const NONCE_BYTES: usize = 24;
}

/// X25519 key exchange producing directional session keys.
pub mod kx {
    pub const PUBLIC_KEY_BYTES: usize = 32;
    pub const SECRET_KEY_BYTES: usize = 32;
    pub const SEED_BYTES: usize = 32;
    pub const SESSION_KEY_BYTES: usize = 32;
}

/// BLAKE2b subkey derivation.
pub mod kdf {
    pub const KEY_BYTES: usize = 32;
    pub const CONTEXT_BYTES: usize = 8;
    pub const BYTES_MIN: usize = 16;
    pub const BYTES_MAX: usize = 64;
}

/// Password hashing.
pub mod pwhash {
    const fn size_min(limit: u64) -> usize {
        if (usize::MAX as u64) < limit {
            usize::MAX
        } else {
            limit as usize
        }
    }

    pub const ARGON2_SALT_BYTES: usize = 16;
    pub const ARGON2_STR_BYTES: usize = 128;
    pub const ARGON2_BYTES_MIN: usize = 16;
    pub const ARGON2_BYTES_MAX: usize = size_min(4_294_967_295);
    pub const ARGON2_PASSWD_MAX: usize = size_min(4_294_967_295);
    pub const ARGON2_MEMLIMIT_MIN: usize = 8192;
    pub const ARGON2_MEMLIMIT_MAX: usize = if usize::MAX as u64 >= 4_398_046_510_080 {
        size_min(4_398_046_510_080)
    } else if usize::MAX as u64 >= 2_147_483_648 {
        size_min(2_147_483_648)
    } else {
        32_768
    };
    pub const ARGON2_OPSLIMIT_MAX: u64 = 4_294_967_295;
    pub const ARGON2ID_OPSLIMIT_MIN: u64 = 1;
    pub const ARGON2I_OPSLIMIT_MIN: u64 = 3;

    pub const SCRYPT_SALT_BYTES: usize = 32;
    pub const SCRYPT_STR_BYTES: usize = 102;
    pub const SCRYPT_BYTES_MIN: usize = 16;
    pub const SCRYPT_BYTES_MAX: usize = size_min(0x1f_ffff_ffe0);
    pub const SCRYPT_PASSWD_MAX: usize = usize::MAX;
    pub const SCRYPT_OPSLIMIT_MIN: u64 = 32_768;
    pub const SCRYPT_OPSLIMIT_MAX: u64 = 4_294_967_295;
    pub const SCRYPT_MEMLIMIT_MIN: usize = 16_777_216;
    pub const SCRYPT_MEMLIMIT_MAX: usize = size_min(68_719_476_736);
}

/// X25519 scalar multiplication.
pub mod scalarmult {
    pub const BYTES: usize = 32;
    pub const SCALAR_BYTES: usize = 32;
}

/// Random generation.
pub mod random {
    pub const SEED_BYTES: usize = 32;
}

/// A descriptor attribute that can be cross-checked against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    Key,
    KeyMin,
    KeyMax,
    PublicKey,
    SecretKey,
    Seed,
    Nonce,
    Mac,
    Salt,
    Context,
    Shared,
    Overhead,
    Output,
    OutputMin,
    OutputMax,
    Str,
}

impl SizeField {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            SizeField::Key => "key_bytes",
            SizeField::KeyMin => "key_bytes_min",
            SizeField::KeyMax => "key_bytes_max",
            SizeField::PublicKey => "public_key_bytes",
            SizeField::SecretKey => "secret_key_bytes",
            SizeField::Seed => "seed_bytes",
            SizeField::Nonce => "nonce_bytes",
            SizeField::Mac => "mac_bytes",
            SizeField::Salt => "salt_bytes",
            SizeField::Context => "context_bytes",
            SizeField::Shared => "shared_bytes",
            SizeField::Overhead => "overhead_bytes",
            SizeField::Output => "output_bytes",
            SizeField::OutputMin => "output_bytes_min",
            SizeField::OutputMax => "output_bytes_max",
            SizeField::Str => "str_bytes",
        }
    }
}

/// Static size contract of one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveDescriptor {
    pub name: &'static str,
    pub key_bytes: Option<usize>,
    pub key_range: Option<(usize, usize)>,
    pub public_key_bytes: Option<usize>,
    pub secret_key_bytes: Option<usize>,
    pub seed_bytes: Option<usize>,
    pub nonce_bytes: Option<usize>,
    pub mac_bytes: Option<usize>,
    pub salt_bytes: Option<usize>,
    pub context_bytes: Option<usize>,
    /// Precomputed shared key or session key length.
    pub shared_bytes: Option<usize>,
    /// Fixed ciphertext expansion beyond the MAC, e.g. sealed boxes.
    pub overhead_bytes: Option<usize>,
    /// Fixed digest, signature or point length.
    pub output_bytes: Option<usize>,
    pub output_range: Option<(usize, usize)>,
    /// Length of an encoded password hash string, including the NUL.
    pub str_bytes: Option<usize>,
    /// Native exports the primitive's operations call.
    pub symbols: &'static [&'static str],
    /// Engine size functions that must report the same value as the descriptor.
    pub size_checks: &'static [(SizeField, &'static str)],
}

impl PrimitiveDescriptor {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            key_bytes: None,
            key_range: None,
            public_key_bytes: None,
            secret_key_bytes: None,
            seed_bytes: None,
            nonce_bytes: None,
            mac_bytes: None,
            salt_bytes: None,
            context_bytes: None,
            shared_bytes: None,
            overhead_bytes: None,
            output_bytes: None,
            output_range: None,
            str_bytes: None,
            symbols: &[],
            size_checks: &[],
        }
    }

    const fn key(self, n: usize) -> Self {
        Self { key_bytes: Some(n), ..self }
    }

    const fn key_range(self, min: usize, max: usize) -> Self {
        Self { key_range: Some((min, max)), ..self }
    }

    const fn keypair(self, public: usize, secret: usize) -> Self {
        Self {
            public_key_bytes: Some(public),
            secret_key_bytes: Some(secret),
            ..self
        }
    }

    const fn seed(self, n: usize) -> Self {
        Self { seed_bytes: Some(n), ..self }
    }

    const fn nonce(self, n: usize) -> Self {
        Self { nonce_bytes: Some(n), ..self }
    }

    const fn mac(self, n: usize) -> Self {
        Self { mac_bytes: Some(n), ..self }
    }

    const fn salt(self, n: usize) -> Self {
        Self { salt_bytes: Some(n), ..self }
    }

    const fn context(self, n: usize) -> Self {
        Self { context_bytes: Some(n), ..self }
    }

    const fn shared(self, n: usize) -> Self {
        Self { shared_bytes: Some(n), ..self }
    }

    const fn overhead(self, n: usize) -> Self {
        Self { overhead_bytes: Some(n), ..self }
    }

    const fn output(self, n: usize) -> Self {
        Self { output_bytes: Some(n), ..self }
    }

    const fn output_range(self, min: usize, max: usize) -> Self {
        Self { output_range: Some((min, max)), ..self }
    }

    const fn str_len(self, n: usize) -> Self {
        Self { str_bytes: Some(n), ..self }
    }

    const fn symbols(self, symbols: &'static [&'static str]) -> Self {
        Self { symbols, ..self }
    }

    const fn checks(self, size_checks: &'static [(SizeField, &'static str)]) -> Self {
        Self { size_checks, ..self }
    }

    /// Returns the value of one attribute, if the primitive has it.
    pub fn get(&self, field: SizeField) -> Option<usize> {
        match field {
            SizeField::Key => self.key_bytes,
            SizeField::KeyMin => self.key_range.map(|(min, _)| min),
            SizeField::KeyMax => self.key_range.map(|(_, max)| max),
            SizeField::PublicKey => self.public_key_bytes,
            SizeField::SecretKey => self.secret_key_bytes,
            SizeField::Seed => self.seed_bytes,
            SizeField::Nonce => self.nonce_bytes,
            SizeField::Mac => self.mac_bytes,
            SizeField::Salt => self.salt_bytes,
            SizeField::Context => self.context_bytes,
            SizeField::Shared => self.shared_bytes,
            SizeField::Overhead => self.overhead_bytes,
            SizeField::Output => self.output_bytes,
            SizeField::OutputMin => self.output_range.map(|(min, _)| min),
            SizeField::OutputMax => self.output_range.map(|(_, max)| max),
            SizeField::Str => self.str_bytes,
        }
    }
}

pub const SECRETBOX: PrimitiveDescriptor = PrimitiveDescriptor::new("secretbox")
    .key(secretbox::KEY_BYTES)
    .nonce(secretbox::NONCE_BYTES)
    .mac(secretbox::MAC_BYTES)
    .symbols(&[
        "crypto_secretbox_easy",
        "crypto_secretbox_open_easy",
        "crypto_secretbox_detached",
        "crypto_secretbox_open_detached",
    ])
    .checks(&[
        (SizeField::Key, "crypto_secretbox_keybytes"),
        (SizeField::Nonce, "crypto_secretbox_noncebytes"),
        (SizeField::Mac, "crypto_secretbox_macbytes"),
    ]);

pub const BOX: PrimitiveDescriptor = PrimitiveDescriptor::new("box")
    .keypair(public_box::PUBLIC_KEY_BYTES, public_box::SECRET_KEY_BYTES)
    .seed(public_box::SEED_BYTES)
    .nonce(public_box::NONCE_BYTES)
    .mac(public_box::MAC_BYTES)
    .shared(public_box::BEFORENM_BYTES)
    .symbols(&[
        "crypto_box_keypair",
        "crypto_box_seed_keypair",
        "crypto_scalarmult_base",
        "crypto_box_easy",
        "crypto_box_open_easy",
        "crypto_box_beforenm",
        "crypto_box_easy_afternm",
        "crypto_box_open_easy_afternm",
    ])
    .checks(&[
        (SizeField::PublicKey, "crypto_box_publickeybytes"),
        (SizeField::SecretKey, "crypto_box_secretkeybytes"),
        (SizeField::Seed, "crypto_box_seedbytes"),
        (SizeField::Nonce, "crypto_box_noncebytes"),
        (SizeField::Mac, "crypto_box_macbytes"),
        (SizeField::Shared, "crypto_box_beforenmbytes"),
    ]);

pub const SEALEDBOX: PrimitiveDescriptor = PrimitiveDescriptor::new("sealedbox")
    .keypair(public_box::PUBLIC_KEY_BYTES, public_box::SECRET_KEY_BYTES)
    .overhead(sealed_box::SEAL_BYTES)
    .symbols(&["crypto_box_seal", "crypto_box_seal_open"])
    .checks(&[(SizeField::Overhead, "crypto_box_sealbytes")]);

pub const SIGN: PrimitiveDescriptor = PrimitiveDescriptor::new("sign")
    .keypair(sign::PUBLIC_KEY_BYTES, sign::SECRET_KEY_BYTES)
    .seed(sign::SEED_BYTES)
    .output(sign::SIGNATURE_BYTES)
    .symbols(&[
        "crypto_sign_keypair",
        "crypto_sign_seed_keypair",
        "crypto_sign",
        "crypto_sign_open",
        "crypto_sign_detached",
        "crypto_sign_verify_detached",
        "crypto_sign_ed25519_sk_to_seed",
        "crypto_sign_ed25519_sk_to_pk",
        "crypto_sign_ed25519_pk_to_curve25519",
        "crypto_sign_ed25519_sk_to_curve25519",
    ])
    .checks(&[
        (SizeField::PublicKey, "crypto_sign_publickeybytes"),
        (SizeField::SecretKey, "crypto_sign_secretkeybytes"),
        (SizeField::Seed, "crypto_sign_seedbytes"),
        (SizeField::Output, "crypto_sign_bytes"),
    ]);

pub const SHA256: PrimitiveDescriptor = PrimitiveDescriptor::new("sha256")
    .output(hash::SHA256_BYTES)
    .symbols(&["crypto_hash_sha256"])
    .checks(&[(SizeField::Output, "crypto_hash_sha256_bytes")]);

pub const SHA512: PrimitiveDescriptor = PrimitiveDescriptor::new("sha512")
    .output(hash::SHA512_BYTES)
    .symbols(&["crypto_hash_sha512"])
    .checks(&[(SizeField::Output, "crypto_hash_sha512_bytes")]);

pub const GENERICHASH: PrimitiveDescriptor = PrimitiveDescriptor::new("generichash")
    .key(hash::GENERICHASH_KEY_BYTES)
    .key_range(hash::GENERICHASH_KEY_BYTES_MIN, hash::GENERICHASH_KEY_BYTES_MAX)
    .output(hash::GENERICHASH_BYTES)
    .output_range(hash::GENERICHASH_BYTES_MIN, hash::GENERICHASH_BYTES_MAX)
    .symbols(&["crypto_generichash"])
    .checks(&[
        (SizeField::Key, "crypto_generichash_keybytes"),
        (SizeField::KeyMin, "crypto_generichash_keybytes_min"),
        (SizeField::KeyMax, "crypto_generichash_keybytes_max"),
        (SizeField::Output, "crypto_generichash_bytes"),
        (SizeField::OutputMin, "crypto_generichash_bytes_min"),
        (SizeField::OutputMax, "crypto_generichash_bytes_max"),
    ]);

pub const SHORTHASH: PrimitiveDescriptor = PrimitiveDescriptor::new("shorthash")
    .key(hash::SHORTHASH_KEY_BYTES)
    .output(hash::SHORTHASH_BYTES)
    .symbols(&["crypto_shorthash"])
    .checks(&[
        (SizeField::Key, "crypto_shorthash_keybytes"),
        (SizeField::Output, "crypto_shorthash_bytes"),
    ]);

pub const AUTH: PrimitiveDescriptor = PrimitiveDescriptor::new("auth")
    .key(auth::AUTH_KEY_BYTES)
    .mac(auth::AUTH_BYTES)
    .symbols(&["crypto_auth", "crypto_auth_verify"])
    .checks(&[
        (SizeField::Key, "crypto_auth_keybytes"),
        (SizeField::Mac, "crypto_auth_bytes"),
    ]);

pub const ONETIMEAUTH: PrimitiveDescriptor = PrimitiveDescriptor::new("onetimeauth")
    .key(auth::ONETIMEAUTH_KEY_BYTES)
    .mac(auth::ONETIMEAUTH_BYTES)
    .symbols(&["crypto_onetimeauth", "crypto_onetimeauth_verify"])
    .checks(&[
        (SizeField::Key, "crypto_onetimeauth_keybytes"),
        (SizeField::Mac, "crypto_onetimeauth_bytes"),
    ]);

pub const AEAD_CHACHA20POLY1305_IETF: PrimitiveDescriptor =
    PrimitiveDescriptor::new("aead_chacha20poly1305_ietf")
        .key(aead::KEY_BYTES)
        .nonce(aead::CHACHA20POLY1305_IETF_NPUB_BYTES)
        .mac(aead::ABYTES)
        .symbols(&[
            "crypto_aead_chacha20poly1305_ietf_encrypt",
            "crypto_aead_chacha20poly1305_ietf_decrypt",
        ])
        .checks(&[
            (SizeField::Key, "crypto_aead_chacha20poly1305_ietf_keybytes"),
            (SizeField::Nonce, "crypto_aead_chacha20poly1305_ietf_npubbytes"),
            (SizeField::Mac, "crypto_aead_chacha20poly1305_ietf_abytes"),
        ]);

pub const AEAD_XCHACHA20POLY1305_IETF: PrimitiveDescriptor =
    PrimitiveDescriptor::new("aead_xchacha20poly1305_ietf")
        .key(aead::KEY_BYTES)
        .nonce(aead::XCHACHA20POLY1305_IETF_NPUB_BYTES)
        .mac(aead::ABYTES)
        .symbols(&[
            "crypto_aead_xchacha20poly1305_ietf_encrypt",
            "crypto_aead_xchacha20poly1305_ietf_decrypt",
        ])
        .checks(&[
            (SizeField::Key, "crypto_aead_xchacha20poly1305_ietf_keybytes"),
            (SizeField::Nonce, "crypto_aead_xchacha20poly1305_ietf_npubbytes"),
            (SizeField::Mac, "crypto_aead_xchacha20poly1305_ietf_abytes"),
        ]);

pub const AEAD_AES256GCM: PrimitiveDescriptor = PrimitiveDescriptor::new("aead_aes256gcm")
    .key(aead::KEY_BYTES)
    .nonce(aead::AES256GCM_NPUB_BYTES)
    .mac(aead::ABYTES)
    .symbols(&[
        "crypto_aead_aes256gcm_is_available",
        "crypto_aead_aes256gcm_encrypt",
        "crypto_aead_aes256gcm_decrypt",
    ])
    .checks(&[
        (SizeField::Key, "crypto_aead_aes256gcm_keybytes"),
        (SizeField::Nonce, "crypto_aead_aes256gcm_npubbytes"),
        (SizeField::Mac, "crypto_aead_aes256gcm_abytes"),
    ]);

pub const STREAM: PrimitiveDescriptor = PrimitiveDescriptor::new("stream")
    .key(stream::KEY_BYTES)
    .nonce(stream::NONCE_BYTES)
    .symbols(&["crypto_stream", "crypto_stream_xor"])
    .checks(&[
        (SizeField::Key, "crypto_stream_keybytes"),
        (SizeField::Nonce, "crypto_stream_noncebytes"),
    ]);

pub const KX: PrimitiveDescriptor = PrimitiveDescriptor::new("kx")
    .keypair(kx::PUBLIC_KEY_BYTES, kx::SECRET_KEY_BYTES)
    .seed(kx::SEED_BYTES)
    .shared(kx::SESSION_KEY_BYTES)
    .symbols(&[
        "crypto_kx_keypair",
        "crypto_kx_seed_keypair",
        "crypto_kx_client_session_keys",
        "crypto_kx_server_session_keys",
    ])
    .checks(&[
        (SizeField::PublicKey, "crypto_kx_publickeybytes"),
        (SizeField::SecretKey, "crypto_kx_secretkeybytes"),
        (SizeField::Seed, "crypto_kx_seedbytes"),
        (SizeField::Shared, "crypto_kx_sessionkeybytes"),
    ]);

pub const KDF: PrimitiveDescriptor = PrimitiveDescriptor::new("kdf")
    .key(kdf::KEY_BYTES)
    .context(kdf::CONTEXT_BYTES)
    .output_range(kdf::BYTES_MIN, kdf::BYTES_MAX)
    .symbols(&["crypto_kdf_derive_from_key"])
    .checks(&[
        (SizeField::Key, "crypto_kdf_keybytes"),
        (SizeField::Context, "crypto_kdf_contextbytes"),
        (SizeField::OutputMin, "crypto_kdf_bytes_min"),
        (SizeField::OutputMax, "crypto_kdf_bytes_max"),
    ]);

pub const PWHASH_ARGON2: PrimitiveDescriptor = PrimitiveDescriptor::new("pwhash_argon2")
    .salt(pwhash::ARGON2_SALT_BYTES)
    .output_range(pwhash::ARGON2_BYTES_MIN, pwhash::ARGON2_BYTES_MAX)
    .str_len(pwhash::ARGON2_STR_BYTES)
    .symbols(&[
        "crypto_pwhash",
        "crypto_pwhash_str_alg",
        "crypto_pwhash_str_verify",
    ])
    .checks(&[
        (SizeField::Salt, "crypto_pwhash_saltbytes"),
        (SizeField::OutputMin, "crypto_pwhash_bytes_min"),
        (SizeField::Str, "crypto_pwhash_strbytes"),
    ]);

pub const PWHASH_SCRYPT: PrimitiveDescriptor = PrimitiveDescriptor::new("pwhash_scrypt")
    .salt(pwhash::SCRYPT_SALT_BYTES)
    .output_range(pwhash::SCRYPT_BYTES_MIN, pwhash::SCRYPT_BYTES_MAX)
    .str_len(pwhash::SCRYPT_STR_BYTES)
    .symbols(&[
        "crypto_pwhash_scryptsalsa208sha256",
        "crypto_pwhash_scryptsalsa208sha256_str",
        "crypto_pwhash_scryptsalsa208sha256_str_verify",
    ])
    .checks(&[
        (SizeField::Salt, "crypto_pwhash_scryptsalsa208sha256_saltbytes"),
        (SizeField::OutputMin, "crypto_pwhash_scryptsalsa208sha256_bytes_min"),
        (SizeField::Str, "crypto_pwhash_scryptsalsa208sha256_strbytes"),
    ]);

pub const SCALARMULT: PrimitiveDescriptor = PrimitiveDescriptor::new("scalarmult")
    .keypair(scalarmult::BYTES, scalarmult::SCALAR_BYTES)
    .output(scalarmult::BYTES)
    .symbols(&["crypto_scalarmult_base", "crypto_scalarmult"])
    .checks(&[
        (SizeField::Output, "crypto_scalarmult_bytes"),
        (SizeField::SecretKey, "crypto_scalarmult_scalarbytes"),
    ]);

pub const RANDOMBYTES: PrimitiveDescriptor = PrimitiveDescriptor::new("randombytes")
    .seed(random::SEED_BYTES)
    .symbols(&[
        "randombytes_buf",
        "randombytes_random",
        "randombytes_uniform",
        "randombytes_buf_deterministic",
    ])
    .checks(&[(SizeField::Seed, "randombytes_seedbytes")]);

static REGISTRY: [PrimitiveDescriptor; 20] = [
    SECRETBOX,
    BOX,
    SEALEDBOX,
    SIGN,
    SHA256,
    SHA512,
    GENERICHASH,
    SHORTHASH,
    AUTH,
    ONETIMEAUTH,
    AEAD_CHACHA20POLY1305_IETF,
    AEAD_XCHACHA20POLY1305_IETF,
    AEAD_AES256GCM,
    STREAM,
    KX,
    KDF,
    PWHASH_ARGON2,
    PWHASH_SCRYPT,
    SCALARMULT,
    RANDOMBYTES,
];

/// Returns every registered descriptor.
pub fn all() -> &'static [PrimitiveDescriptor] {
    &REGISTRY
}

/// Looks up the size contract of a primitive by name.
///
/// # Errors
///
/// Returns [`SodiumError::UnknownPrimitive`] if no primitive has this name.
pub fn sizes_for(name: &str) -> SodiumResult<&'static PrimitiveDescriptor> {
    REGISTRY
        .iter()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| SodiumError::UnknownPrimitive(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = all().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn lookup_by_name() {
        let d = sizes_for("secretbox").unwrap();
        assert_eq!(d.key_bytes, Some(32));
        assert_eq!(d.nonce_bytes, Some(24));
        assert_eq!(d.mac_bytes, Some(16));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            sizes_for("rot13"),
            Err(SodiumError::UnknownPrimitive("rot13".into()))
        );
    }

    #[test]
    fn every_size_check_targets_a_present_field() {
        for descriptor in all() {
            for (field, symbol) in descriptor.size_checks {
                assert!(
                    descriptor.get(*field).is_some(),
                    "{}: {symbol} checks missing {}",
                    descriptor.name,
                    field.name()
                );
            }
        }
    }

    #[test]
    fn every_descriptor_binds_symbols() {
        for descriptor in all() {
            assert!(!descriptor.symbols.is_empty(), "{}", descriptor.name);
        }
    }

    #[test]
    fn sealed_box_overhead_is_key_plus_mac() {
        assert_eq!(SEALEDBOX.overhead_bytes, Some(48));
    }

    #[test]
    fn ranges_are_ordered() {
        for descriptor in all() {
            if let Some((min, max)) = descriptor.output_range {
                assert!(min <= max, "{}", descriptor.name);
            }
            if let Some((min, max)) = descriptor.key_range {
                assert!(min <= max, "{}", descriptor.name);
            }
        }
    }
}
