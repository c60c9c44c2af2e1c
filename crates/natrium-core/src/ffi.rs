// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Typed libsodium function table and per-call marshaling.
//!
//! Nothing in this module validates input. Fixed-size arguments are typed
//! as arrays so their length is proven by the caller; functions whose
//! output slice must be sized relative to an input are `unsafe` and state
//! the required length in their `# Safety` section.

use libc::{c_char, c_int, c_uchar, c_ulonglong, c_void, size_t};
use libloading::Library;

use crate::registry::{
    aead, auth, hash, kdf, kx, public_box, random, scalarmult, secretbox, sign, stream,
};
use crate::types::{SodiumError, SodiumResult};

macro_rules! sodium_api {
    ($( fn $name:ident( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)?; )*) => {
        /// Resolved libsodium exports, one field per bound symbol.
        pub(crate) struct SodiumApi {
            $( $name: unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?, )*
        }

        impl SodiumApi {
            /// Names of every symbol the table binds.
            pub(crate) const SYMBOLS: &'static [&'static str] = &[$(stringify!($name)),*];

            /// Resolves every export, failing on the first missing one.
            ///
            /// # Safety
            ///
            /// `library` must be libsodium 1.0.x, whose exports have the
            /// signatures declared here, and must outlive the returned table.
            pub(crate) unsafe fn resolve(library: &Library) -> SodiumResult<Self> {
                Ok(Self {
                    $( $name: symbol(library, stringify!($name))?, )*
                })
            }
        }
    };
}

/// Resolves one export and copies the function pointer out of the guard.
///
/// # Safety
///
/// `T` must be the exact function-pointer type of the export, and the
/// library must stay loaded for as long as the pointer is used.
pub(crate) unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> SodiumResult<T> {
    library
        .get::<T>(name.as_bytes())
        .map(|resolved| *resolved)
        .map_err(|_| SodiumError::SymbolResolution { symbol: name })
}

/// Signature shared by every `crypto_*_bytes()` style size function.
pub(crate) type SizeFn = unsafe extern "C" fn() -> size_t;

sodium_api! {
    fn sodium_init() -> c_int;
    fn sodium_version_string() -> *const c_char;
    fn sodium_library_version_major() -> c_int;
    fn sodium_library_version_minor() -> c_int;
    fn sodium_memcmp(b1: *const c_void, b2: *const c_void, len: size_t) -> c_int;
    fn sodium_is_zero(n: *const c_uchar, nlen: size_t) -> c_int;
    fn sodium_increment(n: *mut c_uchar, nlen: size_t);
    fn crypto_verify_16(x: *const c_uchar, y: *const c_uchar) -> c_int;
    fn crypto_verify_32(x: *const c_uchar, y: *const c_uchar) -> c_int;
    fn crypto_verify_64(x: *const c_uchar, y: *const c_uchar) -> c_int;

    fn randombytes_buf(buf: *mut c_void, size: size_t);
    fn randombytes_random() -> u32;
    fn randombytes_uniform(upper_bound: u32) -> u32;
    fn randombytes_buf_deterministic(buf: *mut c_void, size: size_t, seed: *const c_uchar);

    fn crypto_secretbox_easy(
        c: *mut c_uchar, m: *const c_uchar, mlen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_secretbox_open_easy(
        m: *mut c_uchar, c: *const c_uchar, clen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_secretbox_detached(
        c: *mut c_uchar, mac: *mut c_uchar, m: *const c_uchar, mlen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_secretbox_open_detached(
        m: *mut c_uchar, c: *const c_uchar, mac: *const c_uchar, clen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;

    fn crypto_box_keypair(pk: *mut c_uchar, sk: *mut c_uchar) -> c_int;
    fn crypto_box_seed_keypair(pk: *mut c_uchar, sk: *mut c_uchar, seed: *const c_uchar) -> c_int;
    fn crypto_box_easy(
        c: *mut c_uchar, m: *const c_uchar, mlen: c_ulonglong,
        n: *const c_uchar, pk: *const c_uchar, sk: *const c_uchar,
    ) -> c_int;
    fn crypto_box_open_easy(
        m: *mut c_uchar, c: *const c_uchar, clen: c_ulonglong,
        n: *const c_uchar, pk: *const c_uchar, sk: *const c_uchar,
    ) -> c_int;
    fn crypto_box_beforenm(k: *mut c_uchar, pk: *const c_uchar, sk: *const c_uchar) -> c_int;
    fn crypto_box_easy_afternm(
        c: *mut c_uchar, m: *const c_uchar, mlen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_box_open_easy_afternm(
        m: *mut c_uchar, c: *const c_uchar, clen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_box_seal(c: *mut c_uchar, m: *const c_uchar, mlen: c_ulonglong, pk: *const c_uchar) -> c_int;
    fn crypto_box_seal_open(
        m: *mut c_uchar, c: *const c_uchar, clen: c_ulonglong,
        pk: *const c_uchar, sk: *const c_uchar,
    ) -> c_int;

    fn crypto_scalarmult_base(q: *mut c_uchar, n: *const c_uchar) -> c_int;
    fn crypto_scalarmult(q: *mut c_uchar, n: *const c_uchar, p: *const c_uchar) -> c_int;

    fn crypto_sign_keypair(pk: *mut c_uchar, sk: *mut c_uchar) -> c_int;
    fn crypto_sign_seed_keypair(pk: *mut c_uchar, sk: *mut c_uchar, seed: *const c_uchar) -> c_int;
    fn crypto_sign(
        sm: *mut c_uchar, smlen_p: *mut c_ulonglong,
        m: *const c_uchar, mlen: c_ulonglong, sk: *const c_uchar,
    ) -> c_int;
    fn crypto_sign_open(
        m: *mut c_uchar, mlen_p: *mut c_ulonglong,
        sm: *const c_uchar, smlen: c_ulonglong, pk: *const c_uchar,
    ) -> c_int;
    fn crypto_sign_detached(
        sig: *mut c_uchar, siglen_p: *mut c_ulonglong,
        m: *const c_uchar, mlen: c_ulonglong, sk: *const c_uchar,
    ) -> c_int;
    fn crypto_sign_verify_detached(
        sig: *const c_uchar, m: *const c_uchar, mlen: c_ulonglong, pk: *const c_uchar,
    ) -> c_int;
    fn crypto_sign_ed25519_sk_to_seed(seed: *mut c_uchar, sk: *const c_uchar) -> c_int;
    fn crypto_sign_ed25519_sk_to_pk(pk: *mut c_uchar, sk: *const c_uchar) -> c_int;
    fn crypto_sign_ed25519_pk_to_curve25519(curve25519_pk: *mut c_uchar, ed25519_pk: *const c_uchar) -> c_int;
    fn crypto_sign_ed25519_sk_to_curve25519(curve25519_sk: *mut c_uchar, ed25519_sk: *const c_uchar) -> c_int;

    fn crypto_hash_sha256(out: *mut c_uchar, input: *const c_uchar, inlen: c_ulonglong) -> c_int;
    fn crypto_hash_sha512(out: *mut c_uchar, input: *const c_uchar, inlen: c_ulonglong) -> c_int;
    fn crypto_generichash(
        out: *mut c_uchar, outlen: size_t, input: *const c_uchar, inlen: c_ulonglong,
        key: *const c_uchar, keylen: size_t,
    ) -> c_int;
    fn crypto_shorthash(out: *mut c_uchar, input: *const c_uchar, inlen: c_ulonglong, k: *const c_uchar) -> c_int;

    fn crypto_auth(out: *mut c_uchar, input: *const c_uchar, inlen: c_ulonglong, k: *const c_uchar) -> c_int;
    fn crypto_auth_verify(h: *const c_uchar, input: *const c_uchar, inlen: c_ulonglong, k: *const c_uchar) -> c_int;
    fn crypto_onetimeauth(out: *mut c_uchar, input: *const c_uchar, inlen: c_ulonglong, k: *const c_uchar) -> c_int;
    fn crypto_onetimeauth_verify(h: *const c_uchar, input: *const c_uchar, inlen: c_ulonglong, k: *const c_uchar) -> c_int;

    fn crypto_aead_chacha20poly1305_ietf_encrypt(
        c: *mut c_uchar, clen_p: *mut c_ulonglong, m: *const c_uchar, mlen: c_ulonglong,
        ad: *const c_uchar, adlen: c_ulonglong, nsec: *const c_uchar,
        npub: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_aead_chacha20poly1305_ietf_decrypt(
        m: *mut c_uchar, mlen_p: *mut c_ulonglong, nsec: *mut c_uchar,
        c: *const c_uchar, clen: c_ulonglong, ad: *const c_uchar, adlen: c_ulonglong,
        npub: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_aead_xchacha20poly1305_ietf_encrypt(
        c: *mut c_uchar, clen_p: *mut c_ulonglong, m: *const c_uchar, mlen: c_ulonglong,
        ad: *const c_uchar, adlen: c_ulonglong, nsec: *const c_uchar,
        npub: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_aead_xchacha20poly1305_ietf_decrypt(
        m: *mut c_uchar, mlen_p: *mut c_ulonglong, nsec: *mut c_uchar,
        c: *const c_uchar, clen: c_ulonglong, ad: *const c_uchar, adlen: c_ulonglong,
        npub: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_aead_aes256gcm_is_available() -> c_int;
    fn crypto_aead_aes256gcm_encrypt(
        c: *mut c_uchar, clen_p: *mut c_ulonglong, m: *const c_uchar, mlen: c_ulonglong,
        ad: *const c_uchar, adlen: c_ulonglong, nsec: *const c_uchar,
        npub: *const c_uchar, k: *const c_uchar,
    ) -> c_int;
    fn crypto_aead_aes256gcm_decrypt(
        m: *mut c_uchar, mlen_p: *mut c_ulonglong, nsec: *mut c_uchar,
        c: *const c_uchar, clen: c_ulonglong, ad: *const c_uchar, adlen: c_ulonglong,
        npub: *const c_uchar, k: *const c_uchar,
    ) -> c_int;

    fn crypto_stream(c: *mut c_uchar, clen: c_ulonglong, n: *const c_uchar, k: *const c_uchar) -> c_int;
    fn crypto_stream_xor(
        c: *mut c_uchar, m: *const c_uchar, mlen: c_ulonglong,
        n: *const c_uchar, k: *const c_uchar,
    ) -> c_int;

    fn crypto_kx_keypair(pk: *mut c_uchar, sk: *mut c_uchar) -> c_int;
    fn crypto_kx_seed_keypair(pk: *mut c_uchar, sk: *mut c_uchar, seed: *const c_uchar) -> c_int;
    fn crypto_kx_client_session_keys(
        rx: *mut c_uchar, tx: *mut c_uchar, client_pk: *const c_uchar,
        client_sk: *const c_uchar, server_pk: *const c_uchar,
    ) -> c_int;
    fn crypto_kx_server_session_keys(
        rx: *mut c_uchar, tx: *mut c_uchar, server_pk: *const c_uchar,
        server_sk: *const c_uchar, client_pk: *const c_uchar,
    ) -> c_int;

    fn crypto_kdf_derive_from_key(
        subkey: *mut c_uchar, subkey_len: size_t, subkey_id: u64,
        ctx: *const c_char, key: *const c_uchar,
    ) -> c_int;

    fn crypto_pwhash(
        out: *mut c_uchar, outlen: c_ulonglong, passwd: *const c_char, passwdlen: c_ulonglong,
        salt: *const c_uchar, opslimit: c_ulonglong, memlimit: size_t, alg: c_int,
    ) -> c_int;
    fn crypto_pwhash_str_alg(
        out: *mut c_char, passwd: *const c_char, passwdlen: c_ulonglong,
        opslimit: c_ulonglong, memlimit: size_t, alg: c_int,
    ) -> c_int;
    fn crypto_pwhash_str_verify(hashed: *const c_char, passwd: *const c_char, passwdlen: c_ulonglong) -> c_int;
    fn crypto_pwhash_scryptsalsa208sha256(
        out: *mut c_uchar, outlen: c_ulonglong, passwd: *const c_char, passwdlen: c_ulonglong,
        salt: *const c_uchar, opslimit: c_ulonglong, memlimit: size_t,
    ) -> c_int;
    fn crypto_pwhash_scryptsalsa208sha256_str(
        out: *mut c_char, passwd: *const c_char, passwdlen: c_ulonglong,
        opslimit: c_ulonglong, memlimit: size_t,
    ) -> c_int;
    fn crypto_pwhash_scryptsalsa208sha256_str_verify(
        hashed: *const c_char, passwd: *const c_char, passwdlen: c_ulonglong,
    ) -> c_int;
}

/// AEAD constructions sharing the IETF argument layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AeadFn {
    ChaCha20Poly1305Ietf,
    XChaCha20Poly1305Ietf,
    Aes256Gcm,
}

impl SodiumApi {
    pub(crate) fn init(&self) -> c_int {
        // SAFETY: sodium_init takes no arguments and is safe to call repeatedly.
        unsafe { (self.sodium_init)() }
    }

    /// Returns the engine version string, major and minor ABI numbers.
    pub(crate) fn version(&self) -> (String, i32, i32) {
        // SAFETY: libsodium returns a pointer to a static NUL-terminated string.
        let string = unsafe {
            let raw = (self.sodium_version_string)();
            if raw.is_null() {
                String::new()
            } else {
                std::ffi::CStr::from_ptr(raw).to_string_lossy().into_owned()
            }
        };
        // SAFETY: both functions take no arguments.
        let (major, minor) = unsafe {
            (
                (self.sodium_library_version_major)(),
                (self.sodium_library_version_minor)(),
            )
        };
        (string, major, minor)
    }

    /// Caller guarantees `a.len() == b.len()`.
    pub(crate) fn memcmp(&self, a: &[u8], b: &[u8]) -> c_int {
        debug_assert_eq!(a.len(), b.len());
        let len = a.len().min(b.len());
        // SAFETY: both pointers are valid for `len` bytes.
        unsafe { (self.sodium_memcmp)(a.as_ptr().cast(), b.as_ptr().cast(), len) }
    }

    pub(crate) fn is_zero(&self, data: &[u8]) -> c_int {
        // SAFETY: pointer and length come from the same slice.
        unsafe { (self.sodium_is_zero)(data.as_ptr(), data.len()) }
    }

    pub(crate) fn increment(&self, data: &mut [u8]) {
        // SAFETY: pointer and length come from the same slice.
        unsafe { (self.sodium_increment)(data.as_mut_ptr(), data.len()) }
    }

    pub(crate) fn verify_16(&self, x: &[u8; 16], y: &[u8; 16]) -> c_int {
        // SAFETY: both arrays are exactly 16 bytes.
        unsafe { (self.crypto_verify_16)(x.as_ptr(), y.as_ptr()) }
    }

    pub(crate) fn verify_32(&self, x: &[u8; 32], y: &[u8; 32]) -> c_int {
        // SAFETY: both arrays are exactly 32 bytes.
        unsafe { (self.crypto_verify_32)(x.as_ptr(), y.as_ptr()) }
    }

    pub(crate) fn verify_64(&self, x: &[u8; 64], y: &[u8; 64]) -> c_int {
        // SAFETY: both arrays are exactly 64 bytes.
        unsafe { (self.crypto_verify_64)(x.as_ptr(), y.as_ptr()) }
    }

    pub(crate) fn random_fill(&self, buf: &mut [u8]) {
        // SAFETY: pointer and length come from the same slice.
        unsafe { (self.randombytes_buf)(buf.as_mut_ptr().cast(), buf.len()) }
    }

    pub(crate) fn random_u32(&self) -> u32 {
        // SAFETY: no arguments.
        unsafe { (self.randombytes_random)() }
    }

    pub(crate) fn random_uniform(&self, upper_bound: u32) -> u32 {
        // SAFETY: scalar argument only.
        unsafe { (self.randombytes_uniform)(upper_bound) }
    }

    pub(crate) fn random_deterministic(&self, buf: &mut [u8], seed: &[u8; random::SEED_BYTES]) {
        // SAFETY: pointer and length come from the same slice; seed is SEED_BYTES.
        unsafe { (self.randombytes_buf_deterministic)(buf.as_mut_ptr().cast(), buf.len(), seed.as_ptr()) }
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len() + secretbox::MAC_BYTES`.
    pub(crate) unsafe fn secretbox_easy(
        &self,
        c: &mut [u8],
        m: &[u8],
        n: &[u8; secretbox::NONCE_BYTES],
        k: &[u8; secretbox::KEY_BYTES],
    ) -> c_int {
        (self.crypto_secretbox_easy)(c.as_mut_ptr(), m.as_ptr(), m.len() as c_ulonglong, n.as_ptr(), k.as_ptr())
    }

    /// # Safety
    ///
    /// `c.len() >= secretbox::MAC_BYTES` and `m.len() == c.len() - secretbox::MAC_BYTES`.
    pub(crate) unsafe fn secretbox_open_easy(
        &self,
        m: &mut [u8],
        c: &[u8],
        n: &[u8; secretbox::NONCE_BYTES],
        k: &[u8; secretbox::KEY_BYTES],
    ) -> c_int {
        (self.crypto_secretbox_open_easy)(m.as_mut_ptr(), c.as_ptr(), c.len() as c_ulonglong, n.as_ptr(), k.as_ptr())
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len()`.
    pub(crate) unsafe fn secretbox_detached(
        &self,
        c: &mut [u8],
        mac: &mut [u8; secretbox::MAC_BYTES],
        m: &[u8],
        n: &[u8; secretbox::NONCE_BYTES],
        k: &[u8; secretbox::KEY_BYTES],
    ) -> c_int {
        (self.crypto_secretbox_detached)(
            c.as_mut_ptr(),
            mac.as_mut_ptr(),
            m.as_ptr(),
            m.len() as c_ulonglong,
            n.as_ptr(),
            k.as_ptr(),
        )
    }

    /// # Safety
    ///
    /// `m.len()` must equal `c.len()`.
    pub(crate) unsafe fn secretbox_open_detached(
        &self,
        m: &mut [u8],
        c: &[u8],
        mac: &[u8; secretbox::MAC_BYTES],
        n: &[u8; secretbox::NONCE_BYTES],
        k: &[u8; secretbox::KEY_BYTES],
    ) -> c_int {
        (self.crypto_secretbox_open_detached)(
            m.as_mut_ptr(),
            c.as_ptr(),
            mac.as_ptr(),
            c.len() as c_ulonglong,
            n.as_ptr(),
            k.as_ptr(),
        )
    }

    pub(crate) fn box_keypair(
        &self,
        pk: &mut [u8; public_box::PUBLIC_KEY_BYTES],
        sk: &mut [u8; public_box::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both outputs are exactly the sizes libsodium writes.
        unsafe { (self.crypto_box_keypair)(pk.as_mut_ptr(), sk.as_mut_ptr()) }
    }

    pub(crate) fn box_seed_keypair(
        &self,
        pk: &mut [u8; public_box::PUBLIC_KEY_BYTES],
        sk: &mut [u8; public_box::SECRET_KEY_BYTES],
        seed: &[u8; public_box::SEED_BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_box_seed_keypair)(pk.as_mut_ptr(), sk.as_mut_ptr(), seed.as_ptr()) }
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len() + public_box::MAC_BYTES`.
    pub(crate) unsafe fn box_easy(
        &self,
        c: &mut [u8],
        m: &[u8],
        n: &[u8; public_box::NONCE_BYTES],
        pk: &[u8; public_box::PUBLIC_KEY_BYTES],
        sk: &[u8; public_box::SECRET_KEY_BYTES],
    ) -> c_int {
        (self.crypto_box_easy)(
            c.as_mut_ptr(),
            m.as_ptr(),
            m.len() as c_ulonglong,
            n.as_ptr(),
            pk.as_ptr(),
            sk.as_ptr(),
        )
    }

    /// # Safety
    ///
    /// `c.len() >= public_box::MAC_BYTES` and `m.len() == c.len() - public_box::MAC_BYTES`.
    pub(crate) unsafe fn box_open_easy(
        &self,
        m: &mut [u8],
        c: &[u8],
        n: &[u8; public_box::NONCE_BYTES],
        pk: &[u8; public_box::PUBLIC_KEY_BYTES],
        sk: &[u8; public_box::SECRET_KEY_BYTES],
    ) -> c_int {
        (self.crypto_box_open_easy)(
            m.as_mut_ptr(),
            c.as_ptr(),
            c.len() as c_ulonglong,
            n.as_ptr(),
            pk.as_ptr(),
            sk.as_ptr(),
        )
    }

    pub(crate) fn box_beforenm(
        &self,
        k: &mut [u8; public_box::BEFORENM_BYTES],
        pk: &[u8; public_box::PUBLIC_KEY_BYTES],
        sk: &[u8; public_box::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_box_beforenm)(k.as_mut_ptr(), pk.as_ptr(), sk.as_ptr()) }
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len() + public_box::MAC_BYTES`.
    pub(crate) unsafe fn box_easy_afternm(
        &self,
        c: &mut [u8],
        m: &[u8],
        n: &[u8; public_box::NONCE_BYTES],
        k: &[u8; public_box::BEFORENM_BYTES],
    ) -> c_int {
        (self.crypto_box_easy_afternm)(c.as_mut_ptr(), m.as_ptr(), m.len() as c_ulonglong, n.as_ptr(), k.as_ptr())
    }

    /// # Safety
    ///
    /// `c.len() >= public_box::MAC_BYTES` and `m.len() == c.len() - public_box::MAC_BYTES`.
    pub(crate) unsafe fn box_open_easy_afternm(
        &self,
        m: &mut [u8],
        c: &[u8],
        n: &[u8; public_box::NONCE_BYTES],
        k: &[u8; public_box::BEFORENM_BYTES],
    ) -> c_int {
        (self.crypto_box_open_easy_afternm)(m.as_mut_ptr(), c.as_ptr(), c.len() as c_ulonglong, n.as_ptr(), k.as_ptr())
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len() + sealed_box::SEAL_BYTES`.
    pub(crate) unsafe fn box_seal(
        &self,
        c: &mut [u8],
        m: &[u8],
        pk: &[u8; public_box::PUBLIC_KEY_BYTES],
    ) -> c_int {
        (self.crypto_box_seal)(c.as_mut_ptr(), m.as_ptr(), m.len() as c_ulonglong, pk.as_ptr())
    }

    /// # Safety
    ///
    /// `c.len() >= sealed_box::SEAL_BYTES` and `m.len() == c.len() - sealed_box::SEAL_BYTES`.
    pub(crate) unsafe fn box_seal_open(
        &self,
        m: &mut [u8],
        c: &[u8],
        pk: &[u8; public_box::PUBLIC_KEY_BYTES],
        sk: &[u8; public_box::SECRET_KEY_BYTES],
    ) -> c_int {
        (self.crypto_box_seal_open)(m.as_mut_ptr(), c.as_ptr(), c.len() as c_ulonglong, pk.as_ptr(), sk.as_ptr())
    }

    pub(crate) fn scalarmult_base(
        &self,
        q: &mut [u8; scalarmult::BYTES],
        n: &[u8; scalarmult::SCALAR_BYTES],
    ) -> c_int {
        // SAFETY: both buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_scalarmult_base)(q.as_mut_ptr(), n.as_ptr()) }
    }

    pub(crate) fn scalarmult(
        &self,
        q: &mut [u8; scalarmult::BYTES],
        n: &[u8; scalarmult::SCALAR_BYTES],
        p: &[u8; scalarmult::BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_scalarmult)(q.as_mut_ptr(), n.as_ptr(), p.as_ptr()) }
    }

    pub(crate) fn sign_keypair(
        &self,
        pk: &mut [u8; sign::PUBLIC_KEY_BYTES],
        sk: &mut [u8; sign::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both outputs are exactly the sizes libsodium writes.
        unsafe { (self.crypto_sign_keypair)(pk.as_mut_ptr(), sk.as_mut_ptr()) }
    }

    pub(crate) fn sign_seed_keypair(
        &self,
        pk: &mut [u8; sign::PUBLIC_KEY_BYTES],
        sk: &mut [u8; sign::SECRET_KEY_BYTES],
        seed: &[u8; sign::SEED_BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_sign_seed_keypair)(pk.as_mut_ptr(), sk.as_mut_ptr(), seed.as_ptr()) }
    }

    /// # Safety
    ///
    /// `sm.len()` must be at least `m.len() + sign::SIGNATURE_BYTES`.
    pub(crate) unsafe fn sign_combined(
        &self,
        sm: &mut [u8],
        smlen: &mut c_ulonglong,
        m: &[u8],
        sk: &[u8; sign::SECRET_KEY_BYTES],
    ) -> c_int {
        (self.crypto_sign)(sm.as_mut_ptr(), smlen, m.as_ptr(), m.len() as c_ulonglong, sk.as_ptr())
    }

    /// # Safety
    ///
    /// `sm.len() >= sign::SIGNATURE_BYTES` and `m.len() >= sm.len() - sign::SIGNATURE_BYTES`.
    pub(crate) unsafe fn sign_open(
        &self,
        m: &mut [u8],
        mlen: &mut c_ulonglong,
        sm: &[u8],
        pk: &[u8; sign::PUBLIC_KEY_BYTES],
    ) -> c_int {
        (self.crypto_sign_open)(m.as_mut_ptr(), mlen, sm.as_ptr(), sm.len() as c_ulonglong, pk.as_ptr())
    }

    pub(crate) fn sign_detached(
        &self,
        sig: &mut [u8; sign::SIGNATURE_BYTES],
        m: &[u8],
        sk: &[u8; sign::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: signature buffer is SIGNATURE_BYTES; message pointer and length
        // come from the same slice. A null siglen_p is permitted by libsodium.
        unsafe {
            (self.crypto_sign_detached)(
                sig.as_mut_ptr(),
                std::ptr::null_mut(),
                m.as_ptr(),
                m.len() as c_ulonglong,
                sk.as_ptr(),
            )
        }
    }

    pub(crate) fn sign_verify_detached(
        &self,
        sig: &[u8; sign::SIGNATURE_BYTES],
        m: &[u8],
        pk: &[u8; sign::PUBLIC_KEY_BYTES],
    ) -> c_int {
        // SAFETY: fixed-size inputs; message pointer and length come from the same slice.
        unsafe { (self.crypto_sign_verify_detached)(sig.as_ptr(), m.as_ptr(), m.len() as c_ulonglong, pk.as_ptr()) }
    }

    pub(crate) fn sign_sk_to_seed(
        &self,
        seed: &mut [u8; sign::SEED_BYTES],
        sk: &[u8; sign::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_sign_ed25519_sk_to_seed)(seed.as_mut_ptr(), sk.as_ptr()) }
    }

    pub(crate) fn sign_sk_to_pk(
        &self,
        pk: &mut [u8; sign::PUBLIC_KEY_BYTES],
        sk: &[u8; sign::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_sign_ed25519_sk_to_pk)(pk.as_mut_ptr(), sk.as_ptr()) }
    }

    pub(crate) fn sign_pk_to_curve25519(
        &self,
        curve_pk: &mut [u8; public_box::PUBLIC_KEY_BYTES],
        ed_pk: &[u8; sign::PUBLIC_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_sign_ed25519_pk_to_curve25519)(curve_pk.as_mut_ptr(), ed_pk.as_ptr()) }
    }

    pub(crate) fn sign_sk_to_curve25519(
        &self,
        curve_sk: &mut [u8; public_box::SECRET_KEY_BYTES],
        ed_sk: &[u8; sign::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_sign_ed25519_sk_to_curve25519)(curve_sk.as_mut_ptr(), ed_sk.as_ptr()) }
    }

    pub(crate) fn sha256(&self, out: &mut [u8; hash::SHA256_BYTES], input: &[u8]) -> c_int {
        // SAFETY: output is SHA256_BYTES; input pointer and length come from the same slice.
        unsafe { (self.crypto_hash_sha256)(out.as_mut_ptr(), input.as_ptr(), input.len() as c_ulonglong) }
    }

    pub(crate) fn sha512(&self, out: &mut [u8; hash::SHA512_BYTES], input: &[u8]) -> c_int {
        // SAFETY: output is SHA512_BYTES; input pointer and length come from the same slice.
        unsafe { (self.crypto_hash_sha512)(out.as_mut_ptr(), input.as_ptr(), input.len() as c_ulonglong) }
    }

    /// # Safety
    ///
    /// `out.len()` must lie within the generichash output bounds and `key`,
    /// when present, within the generichash key bounds.
    pub(crate) unsafe fn generichash(&self, out: &mut [u8], input: &[u8], key: Option<&[u8]>) -> c_int {
        let (key_ptr, key_len) = match key {
            Some(key) => (key.as_ptr(), key.len()),
            None => (std::ptr::null(), 0),
        };
        (self.crypto_generichash)(
            out.as_mut_ptr(),
            out.len(),
            input.as_ptr(),
            input.len() as c_ulonglong,
            key_ptr,
            key_len,
        )
    }

    pub(crate) fn shorthash(
        &self,
        out: &mut [u8; hash::SHORTHASH_BYTES],
        input: &[u8],
        k: &[u8; hash::SHORTHASH_KEY_BYTES],
    ) -> c_int {
        // SAFETY: fixed-size output and key; input pointer and length come from the same slice.
        unsafe { (self.crypto_shorthash)(out.as_mut_ptr(), input.as_ptr(), input.len() as c_ulonglong, k.as_ptr()) }
    }

    pub(crate) fn auth(
        &self,
        out: &mut [u8; auth::AUTH_BYTES],
        input: &[u8],
        k: &[u8; auth::AUTH_KEY_BYTES],
    ) -> c_int {
        // SAFETY: fixed-size output and key; input pointer and length come from the same slice.
        unsafe { (self.crypto_auth)(out.as_mut_ptr(), input.as_ptr(), input.len() as c_ulonglong, k.as_ptr()) }
    }

    pub(crate) fn auth_verify(
        &self,
        h: &[u8; auth::AUTH_BYTES],
        input: &[u8],
        k: &[u8; auth::AUTH_KEY_BYTES],
    ) -> c_int {
        // SAFETY: fixed-size tag and key; input pointer and length come from the same slice.
        unsafe { (self.crypto_auth_verify)(h.as_ptr(), input.as_ptr(), input.len() as c_ulonglong, k.as_ptr()) }
    }

    pub(crate) fn onetimeauth(
        &self,
        out: &mut [u8; auth::ONETIMEAUTH_BYTES],
        input: &[u8],
        k: &[u8; auth::ONETIMEAUTH_KEY_BYTES],
    ) -> c_int {
        // SAFETY: fixed-size output and key; input pointer and length come from the same slice.
        unsafe { (self.crypto_onetimeauth)(out.as_mut_ptr(), input.as_ptr(), input.len() as c_ulonglong, k.as_ptr()) }
    }

    pub(crate) fn onetimeauth_verify(
        &self,
        h: &[u8; auth::ONETIMEAUTH_BYTES],
        input: &[u8],
        k: &[u8; auth::ONETIMEAUTH_KEY_BYTES],
    ) -> c_int {
        // SAFETY: fixed-size tag and key; input pointer and length come from the same slice.
        unsafe {
            (self.crypto_onetimeauth_verify)(h.as_ptr(), input.as_ptr(), input.len() as c_ulonglong, k.as_ptr())
        }
    }

    pub(crate) fn aes256gcm_is_available(&self) -> bool {
        // SAFETY: no arguments.
        unsafe { (self.crypto_aead_aes256gcm_is_available)() == 1 }
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len() + aead::ABYTES`, `npub` must be the
    /// construction's nonce length and `k` must be `aead::KEY_BYTES` long.
    pub(crate) unsafe fn aead_encrypt(
        &self,
        which: AeadFn,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8; aead::KEY_BYTES],
    ) -> c_int {
        let f = match which {
            AeadFn::ChaCha20Poly1305Ietf => self.crypto_aead_chacha20poly1305_ietf_encrypt,
            AeadFn::XChaCha20Poly1305Ietf => self.crypto_aead_xchacha20poly1305_ietf_encrypt,
            AeadFn::Aes256Gcm => self.crypto_aead_aes256gcm_encrypt,
        };
        let mut clen: c_ulonglong = 0;
        f(
            c.as_mut_ptr(),
            &mut clen,
            m.as_ptr(),
            m.len() as c_ulonglong,
            ad.as_ptr(),
            ad.len() as c_ulonglong,
            std::ptr::null(),
            npub.as_ptr(),
            k.as_ptr(),
        )
    }

    /// # Safety
    ///
    /// `c.len() >= aead::ABYTES`, `m.len() == c.len() - aead::ABYTES`, `npub`
    /// must be the construction's nonce length.
    pub(crate) unsafe fn aead_decrypt(
        &self,
        which: AeadFn,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8; aead::KEY_BYTES],
    ) -> c_int {
        let f = match which {
            AeadFn::ChaCha20Poly1305Ietf => self.crypto_aead_chacha20poly1305_ietf_decrypt,
            AeadFn::XChaCha20Poly1305Ietf => self.crypto_aead_xchacha20poly1305_ietf_decrypt,
            AeadFn::Aes256Gcm => self.crypto_aead_aes256gcm_decrypt,
        };
        let mut mlen: c_ulonglong = 0;
        f(
            m.as_mut_ptr(),
            &mut mlen,
            std::ptr::null_mut(),
            c.as_ptr(),
            c.len() as c_ulonglong,
            ad.as_ptr(),
            ad.len() as c_ulonglong,
            npub.as_ptr(),
            k.as_ptr(),
        )
    }

    pub(crate) fn stream(
        &self,
        c: &mut [u8],
        n: &[u8; stream::NONCE_BYTES],
        k: &[u8; stream::KEY_BYTES],
    ) -> c_int {
        // SAFETY: output pointer and length come from the same slice.
        unsafe { (self.crypto_stream)(c.as_mut_ptr(), c.len() as c_ulonglong, n.as_ptr(), k.as_ptr()) }
    }

    /// # Safety
    ///
    /// `c.len()` must equal `m.len()`.
    pub(crate) unsafe fn stream_xor(
        &self,
        c: &mut [u8],
        m: &[u8],
        n: &[u8; stream::NONCE_BYTES],
        k: &[u8; stream::KEY_BYTES],
    ) -> c_int {
        (self.crypto_stream_xor)(c.as_mut_ptr(), m.as_ptr(), m.len() as c_ulonglong, n.as_ptr(), k.as_ptr())
    }

    pub(crate) fn kx_keypair(
        &self,
        pk: &mut [u8; kx::PUBLIC_KEY_BYTES],
        sk: &mut [u8; kx::SECRET_KEY_BYTES],
    ) -> c_int {
        // SAFETY: both outputs are exactly the sizes libsodium writes.
        unsafe { (self.crypto_kx_keypair)(pk.as_mut_ptr(), sk.as_mut_ptr()) }
    }

    pub(crate) fn kx_seed_keypair(
        &self,
        pk: &mut [u8; kx::PUBLIC_KEY_BYTES],
        sk: &mut [u8; kx::SECRET_KEY_BYTES],
        seed: &[u8; kx::SEED_BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe { (self.crypto_kx_seed_keypair)(pk.as_mut_ptr(), sk.as_mut_ptr(), seed.as_ptr()) }
    }

    pub(crate) fn kx_client_session_keys(
        &self,
        rx: &mut [u8; kx::SESSION_KEY_BYTES],
        tx: &mut [u8; kx::SESSION_KEY_BYTES],
        client_pk: &[u8; kx::PUBLIC_KEY_BYTES],
        client_sk: &[u8; kx::SECRET_KEY_BYTES],
        server_pk: &[u8; kx::PUBLIC_KEY_BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe {
            (self.crypto_kx_client_session_keys)(
                rx.as_mut_ptr(),
                tx.as_mut_ptr(),
                client_pk.as_ptr(),
                client_sk.as_ptr(),
                server_pk.as_ptr(),
            )
        }
    }

    pub(crate) fn kx_server_session_keys(
        &self,
        rx: &mut [u8; kx::SESSION_KEY_BYTES],
        tx: &mut [u8; kx::SESSION_KEY_BYTES],
        server_pk: &[u8; kx::PUBLIC_KEY_BYTES],
        server_sk: &[u8; kx::SECRET_KEY_BYTES],
        client_pk: &[u8; kx::PUBLIC_KEY_BYTES],
    ) -> c_int {
        // SAFETY: all buffers are exactly the sizes libsodium reads and writes.
        unsafe {
            (self.crypto_kx_server_session_keys)(
                rx.as_mut_ptr(),
                tx.as_mut_ptr(),
                server_pk.as_ptr(),
                server_sk.as_ptr(),
                client_pk.as_ptr(),
            )
        }
    }

    /// # Safety
    ///
    /// `subkey.len()` must lie within `kdf::BYTES_MIN..=kdf::BYTES_MAX`.
    pub(crate) unsafe fn kdf_derive_from_key(
        &self,
        subkey: &mut [u8],
        subkey_id: u64,
        ctx: &[u8; kdf::CONTEXT_BYTES],
        key: &[u8; kdf::KEY_BYTES],
    ) -> c_int {
        (self.crypto_kdf_derive_from_key)(subkey.as_mut_ptr(), subkey.len(), subkey_id, ctx.as_ptr().cast(), key.as_ptr())
    }

    /// # Safety
    ///
    /// `out.len()` must lie within the Argon2 output bounds and `salt` must be
    /// `pwhash::ARGON2_SALT_BYTES` long.
    pub(crate) unsafe fn pwhash_argon2(
        &self,
        out: &mut [u8],
        passwd: &[u8],
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
        alg: c_int,
    ) -> c_int {
        (self.crypto_pwhash)(
            out.as_mut_ptr(),
            out.len() as c_ulonglong,
            passwd.as_ptr().cast(),
            passwd.len() as c_ulonglong,
            salt.as_ptr(),
            opslimit as c_ulonglong,
            memlimit,
            alg,
        )
    }

    /// # Safety
    ///
    /// `out` must be `pwhash::ARGON2_STR_BYTES` long.
    pub(crate) unsafe fn pwhash_argon2_str(
        &self,
        out: &mut [u8],
        passwd: &[u8],
        opslimit: u64,
        memlimit: usize,
        alg: c_int,
    ) -> c_int {
        (self.crypto_pwhash_str_alg)(
            out.as_mut_ptr().cast(),
            passwd.as_ptr().cast(),
            passwd.len() as c_ulonglong,
            opslimit as c_ulonglong,
            memlimit,
            alg,
        )
    }

    /// # Safety
    ///
    /// `hashed` must be NUL-terminated.
    pub(crate) unsafe fn pwhash_argon2_str_verify(&self, hashed: &[u8], passwd: &[u8]) -> c_int {
        (self.crypto_pwhash_str_verify)(hashed.as_ptr().cast(), passwd.as_ptr().cast(), passwd.len() as c_ulonglong)
    }

    /// # Safety
    ///
    /// `out.len()` must lie within the scrypt output bounds and `salt` must be
    /// `pwhash::SCRYPT_SALT_BYTES` long.
    pub(crate) unsafe fn pwhash_scrypt(
        &self,
        out: &mut [u8],
        passwd: &[u8],
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
    ) -> c_int {
        (self.crypto_pwhash_scryptsalsa208sha256)(
            out.as_mut_ptr(),
            out.len() as c_ulonglong,
            passwd.as_ptr().cast(),
            passwd.len() as c_ulonglong,
            salt.as_ptr(),
            opslimit as c_ulonglong,
            memlimit,
        )
    }

    /// # Safety
    ///
    /// `out` must be `pwhash::SCRYPT_STR_BYTES` long.
    pub(crate) unsafe fn pwhash_scrypt_str(
        &self,
        out: &mut [u8],
        passwd: &[u8],
        opslimit: u64,
        memlimit: usize,
    ) -> c_int {
        (self.crypto_pwhash_scryptsalsa208sha256_str)(
            out.as_mut_ptr().cast(),
            passwd.as_ptr().cast(),
            passwd.len() as c_ulonglong,
            opslimit as c_ulonglong,
            memlimit,
        )
    }

    /// # Safety
    ///
    /// `hashed` must be NUL-terminated.
    pub(crate) unsafe fn pwhash_scrypt_str_verify(&self, hashed: &[u8], passwd: &[u8]) -> c_int {
        (self.crypto_pwhash_scryptsalsa208sha256_str_verify)(
            hashed.as_ptr().cast(),
            passwd.as_ptr().cast(),
            passwd.len() as c_ulonglong,
        )
    }
}
