use std::sync::Arc;
use std::thread;

use natrium_core::engine::{self, EngineCell, EngineConfig, EngineState};
use natrium_core::registry;
use natrium_core::SodiumError;

#[test]
fn process_engine_initializes() {
    engine::initialize().unwrap();
    assert_eq!(engine::state(), EngineState::Ready);
}

#[test]
fn initialize_is_idempotent() {
    engine::initialize().unwrap();
    engine::initialize().unwrap();
    let first = engine::sodium().unwrap() as *const _;
    let second = engine::sodium().unwrap() as *const _;
    assert_eq!(first, second);
}

#[test]
fn reports_a_version() {
    let sodium = engine::sodium().unwrap();
    let version = sodium.version();
    assert!(!version.string.is_empty());
    assert!(version.major >= 9);
    assert!(!sodium.source().is_empty());
}

#[test]
fn concurrent_first_use_loads_once() {
    let cell = Arc::new(EngineCell::new());
    let config = Arc::new(EngineConfig::from_env());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let config = Arc::clone(&config);
            thread::spawn(move || cell.get_or_init(&config).map(|s| s.version().clone()))
        })
        .collect();

    let versions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert!(versions.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(cell.load_attempts(), 1);
    assert_eq!(cell.state(), EngineState::Ready);
}

#[cfg(target_os = "linux")]
#[test]
fn foreign_library_lacks_sodium_exports() {
    let cell = EngineCell::new();
    let err = cell.get_or_init(&EngineConfig::with_path("libc.so.6")).unwrap_err();
    assert_eq!(err, SodiumError::SymbolResolution { symbol: "sodium_init" });
    assert_eq!(cell.state(), EngineState::Failed);
}

#[test]
fn missing_library_fails_for_every_caller() {
    let cell = Arc::new(EngineCell::new());
    let config = Arc::new(EngineConfig::with_path("/nonexistent/natrium/libsodium.so"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let config = Arc::clone(&config);
            thread::spawn(move || cell.get_or_init(&config).map(|_| ()))
        })
        .collect();

    let errors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap_err()).collect();
    for err in &errors {
        assert_eq!(err, &errors[0]);
        assert!(err.is_fatal());
        match err {
            SodiumError::EngineLoad { attempted, .. } => {
                assert_eq!(attempted, &vec!["/nonexistent/natrium/libsodium.so".to_owned()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(cell.load_attempts(), 1);
    assert_eq!(cell.state(), EngineState::Failed);
}

#[test]
fn failure_is_cached_even_with_a_better_config() {
    let cell = EngineCell::new();
    let bad = EngineConfig::with_path("/nonexistent/libsodium.so");
    assert!(cell.get_or_init(&bad).is_err());
    assert!(cell.get_or_init(&EngineConfig::default()).is_err());
    assert_eq!(cell.load_attempts(), 1);
}

#[test]
fn search_list_skips_missing_names() {
    let mut config = EngineConfig::default();
    config.search_names.insert(0, "libnatrium-does-not-exist.so".to_owned());
    let cell = EngineCell::new();
    if let Ok(explicit) = std::env::var(engine::LIBRARY_PATH_ENV) {
        config.search_names.push(explicit);
    }
    cell.get_or_init(&config).unwrap();
    assert_eq!(cell.state(), EngineState::Ready);
}

#[test]
fn registry_is_complete() {
    let names: Vec<_> = registry::all().iter().map(|d| d.name).collect();
    for expected in [
        "secretbox",
        "box",
        "sealedbox",
        "sign",
        "sha256",
        "sha512",
        "generichash",
        "shorthash",
        "auth",
        "onetimeauth",
        "aead_chacha20poly1305_ietf",
        "aead_xchacha20poly1305_ietf",
        "aead_aes256gcm",
        "stream",
        "kx",
        "kdf",
        "pwhash_argon2",
        "pwhash_scrypt",
        "scalarmult",
        "randombytes",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn sizes_for_matches_module_constants() {
    let d = natrium_core::sizes_for("sign").unwrap();
    assert_eq!(d.public_key_bytes, Some(registry::sign::PUBLIC_KEY_BYTES));
    assert_eq!(d.secret_key_bytes, Some(registry::sign::SECRET_KEY_BYTES));
    assert_eq!(d.output_bytes, Some(registry::sign::SIGNATURE_BYTES));

    assert!(matches!(
        natrium_core::sizes_for("nonexistent"),
        Err(SodiumError::UnknownPrimitive(_))
    ));
}
