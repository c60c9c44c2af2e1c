use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use natrium_core::crypto::aead::{self, Aead};
use natrium_core::crypto::pwhash::{self, Limits, PwHashAlgorithm};
use natrium_core::crypto::{hash, public_box, scalarmult, secretbox, sign};

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

fn bench_secretbox(c: &mut Criterion) {
    let key = secretbox::keygen().unwrap();
    let nonce = [0u8; secretbox::NONCE_BYTES];
    let mut group = c.benchmark_group("secretbox/seal");
    for size in SIZES {
        let msg = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &msg, |b, msg| {
            b.iter(|| secretbox::seal(msg, &nonce, &key).unwrap())
        });
    }
    group.finish();
}

fn bench_aead(c: &mut Criterion) {
    let alg = Aead::XChaCha20Poly1305Ietf;
    let key = aead::keygen(alg).unwrap();
    let nonce = vec![0u8; alg.nonce_bytes()];
    let mut group = c.benchmark_group("xchacha20poly1305/encrypt");
    for size in SIZES {
        let msg = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &msg, |b, msg| {
            b.iter(|| aead::encrypt(alg, msg, b"", &nonce, &key).unwrap())
        });
    }
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let kp = sign::keypair().unwrap();
    let sig = sign::sign_detached(b"benchmark message", &kp.secret_key).unwrap();

    c.bench_function("ed25519/sign", |b| {
        b.iter(|| sign::sign_detached(b"benchmark message", &kp.secret_key).unwrap())
    });
    c.bench_function("ed25519/verify", |b| {
        b.iter(|| sign::verify_detached(&sig, b"benchmark message", &kp.public_key).unwrap())
    });
}

fn bench_box(c: &mut Criterion) {
    let alice = public_box::keypair().unwrap();
    let bob = public_box::keypair().unwrap();
    let nonce = [0u8; public_box::NONCE_BYTES];
    let shared = public_box::precompute(&bob.public_key, &alice.secret_key).unwrap();

    c.bench_function("box/seal", |b| {
        b.iter(|| public_box::seal(b"hello", &nonce, &bob.public_key, &alice.secret_key).unwrap())
    });
    c.bench_function("box/seal_precomputed", |b| {
        b.iter(|| public_box::seal_precomputed(b"hello", &nonce, &shared).unwrap())
    });
}

fn bench_x25519(c: &mut Criterion) {
    let kp = public_box::keypair().unwrap();
    let peer = public_box::keypair().unwrap();
    c.bench_function("x25519/scalarmult", |b| {
        b.iter(|| scalarmult::scalarmult(&kp.secret_key, &peer.public_key).unwrap())
    });
}

fn bench_hash(c: &mut Criterion) {
    let msg = vec![0x5au8; 1024];
    c.bench_function("sha256/1KiB", |b| b.iter(|| hash::sha256(&msg).unwrap()));
    c.bench_function("sha512/1KiB", |b| b.iter(|| hash::sha512(&msg).unwrap()));
    c.bench_function("blake2b/1KiB", |b| b.iter(|| hash::blake2b(&msg).unwrap()));
}

fn bench_pwhash(c: &mut Criterion) {
    let salt = [0u8; pwhash::ARGON2_SALT_BYTES];
    let limits = Limits::interactive(PwHashAlgorithm::Argon2id13);
    let mut group = c.benchmark_group("argon2id");
    group.sample_size(10);
    group.bench_function("interactive", |b| {
        b.iter(|| pwhash::derive_key(32, b"password", &salt, &limits).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_secretbox,
    bench_aead,
    bench_sign,
    bench_box,
    bench_x25519,
    bench_hash,
    bench_pwhash,
);
criterion_main!(benches);
