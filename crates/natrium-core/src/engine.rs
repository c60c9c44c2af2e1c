// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

//! Locates, loads and initializes the libsodium shared library.
//!
//! The engine is loaded at most once per [`EngineCell`]. The process-wide
//! cell behind [`sodium`] is initialized lazily from the environment, or
//! eagerly through [`initialize`] / [`initialize_with`]. A failed load is
//! cached and replayed to every later caller.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;

use libloading::Library;
use tracing::{debug, error, info, warn};

use crate::ffi::{self, SizeFn, SodiumApi};
use crate::registry::{self, PrimitiveDescriptor};
use crate::types::{SodiumError, SodiumResult};

/// Environment variable naming an explicit libsodium image to load.
pub const LIBRARY_PATH_ENV: &str = "SODIUM_LIBRARY_PATH";

#[cfg(target_os = "linux")]
const DEFAULT_SEARCH_NAMES: &[&str] = &[
    "libsodium.so",
    "libsodium.so.26",
    "libsodium.so.23",
    "libsodium.so.18",
];

#[cfg(target_os = "macos")]
const DEFAULT_SEARCH_NAMES: &[&str] = &[
    "libsodium.dylib",
    "libsodium.26.dylib",
    "libsodium.23.dylib",
    "/usr/local/lib/libsodium.dylib",
    "/opt/homebrew/lib/libsodium.dylib",
];

#[cfg(target_os = "windows")]
const DEFAULT_SEARCH_NAMES: &[&str] = &["libsodium.dll", "sodium.dll"];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const DEFAULT_SEARCH_NAMES: &[&str] = &["libsodium.so", "libsodium.so.26", "libsodium.so.23"];

/// Where to look for the libsodium image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Explicit image path. When set, it is the only candidate tried.
    pub library_path: Option<PathBuf>,
    /// Library names or paths tried in order when no explicit path is set.
    pub search_names: Vec<String>,
}

impl EngineConfig {
    /// Builds a configuration from [`LIBRARY_PATH_ENV`], falling back to the
    /// platform search list when the variable is unset or empty.
    pub fn from_env() -> Self {
        match std::env::var_os(LIBRARY_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::with_path(path),
            _ => Self::default(),
        }
    }

    /// Loads exactly the image at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: Some(path.into()),
            search_names: Vec::new(),
        }
    }

    /// Returns the candidates in the order they will be tried.
    pub fn candidates(&self) -> Vec<OsString> {
        match &self.library_path {
            Some(path) => vec![path.clone().into_os_string()],
            None => self.search_names.iter().map(OsString::from).collect(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            search_names: DEFAULT_SEARCH_NAMES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Version reported by the loaded engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineVersion {
    /// e.g. `"1.0.18"`.
    pub string: String,
    /// ABI major number (`sodium_library_version_major`).
    pub major: i32,
    /// ABI minor number (`sodium_library_version_minor`).
    pub minor: i32,
}

/// A loaded, initialized libsodium with its resolved function table.
pub struct Sodium {
    api: SodiumApi,
    version: EngineVersion,
    source: String,
    // Declared last so the table is dropped before the image is unloaded.
    _library: Library,
}

impl Sodium {
    /// Loads the first candidate of `config` that opens, resolves every
    /// bound export, runs `sodium_init` and cross-checks the size registry.
    ///
    /// # Errors
    ///
    /// Returns [`SodiumError::EngineLoad`] if no candidate opens or
    /// `sodium_init` fails, [`SodiumError::SymbolResolution`] if an export is
    /// missing, and [`SodiumError::IncompatibleEngine`] if a size constant
    /// disagrees with the registry.
    pub fn load(config: &EngineConfig) -> SodiumResult<Self> {
        let (library, source) = open_library(config)?;

        // SAFETY: the image was located as libsodium and the table is stored
        // alongside the `Library`, which is never unloaded while it is in use.
        let api = unsafe { SodiumApi::resolve(&library) }?;
        debug!(symbols = SodiumApi::SYMBOLS.len(), %source, "resolved libsodium exports");

        if api.init() < 0 {
            return Err(SodiumError::EngineLoad {
                attempted: vec![source],
                reason: "sodium_init() failed".to_owned(),
            });
        }

        verify_sizes(&library, registry::all())?;

        let (string, major, minor) = api.version();
        info!(version = %string, major, minor, %source, "libsodium loaded");

        Ok(Self {
            api,
            version: EngineVersion {
                string,
                major,
                minor,
            },
            source,
            _library: library,
        })
    }

    /// Version of the loaded engine.
    pub fn version(&self) -> &EngineVersion {
        &self.version
    }

    /// The candidate the engine was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn api(&self) -> &SodiumApi {
        &self.api
    }
}

impl fmt::Debug for Sodium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sodium")
            .field("version", &self.version)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

fn open_library(config: &EngineConfig) -> SodiumResult<(Library, String)> {
    let candidates = config.candidates();
    let mut attempted = Vec::with_capacity(candidates.len());
    let mut reason = String::from("no candidate library names configured");

    for candidate in candidates {
        let shown = candidate.to_string_lossy().into_owned();
        debug!(candidate = %shown, "trying libsodium candidate");
        // SAFETY: loading runs the image's initializers; libsodium's only
        // set up CPU feature detection.
        match unsafe { Library::new(&candidate) } {
            Ok(library) => return Ok((library, shown)),
            Err(e) => {
                warn!(candidate = %shown, error = %e, "libsodium candidate rejected");
                reason = e.to_string();
                attempted.push(shown);
            }
        }
    }

    Err(SodiumError::EngineLoad { attempted, reason })
}

fn verify_sizes(library: &Library, descriptors: &[PrimitiveDescriptor]) -> SodiumResult<()> {
    for descriptor in descriptors {
        for &(field, symbol) in descriptor.size_checks {
            let Some(expected) = descriptor.get(field) else {
                continue;
            };
            // SAFETY: every size check names a `size_t f(void)` export.
            let size_fn: SizeFn = unsafe { ffi::symbol(library, symbol) }?;
            // SAFETY: size functions take no arguments and return a constant.
            let actual = unsafe { size_fn() };
            if actual != expected {
                return Err(SodiumError::IncompatibleEngine {
                    primitive: descriptor.name,
                    constant: field.name(),
                    expected,
                    actual,
                });
            }
        }
    }
    Ok(())
}

/// Initialization progress of an [`EngineCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No load has started.
    Uninitialized,
    /// A load is running on another thread.
    Initializing,
    /// The engine loaded and passed every check.
    Ready,
    /// Loading failed; the error is cached.
    Failed,
}

/// One-time holder for a loaded engine.
///
/// Concurrent first use runs exactly one load; the other callers block
/// until it finishes and then observe the same outcome.
pub struct EngineCell {
    slot: OnceLock<SodiumResult<Sodium>>,
    started: AtomicBool,
    loads: AtomicUsize,
}

impl EngineCell {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            started: AtomicBool::new(false),
            loads: AtomicUsize::new(0),
        }
    }

    /// Returns the engine, loading it with `config` if this is the first call.
    ///
    /// Later calls ignore `config` and replay the first outcome.
    pub fn get_or_init(&self, config: &EngineConfig) -> SodiumResult<&Sodium> {
        self.slot
            .get_or_init(|| {
                self.started.store(true, Ordering::Release);
                self.loads.fetch_add(1, Ordering::AcqRel);
                let loaded = Sodium::load(config);
                if let Err(e) = &loaded {
                    error!(error = %e, "libsodium initialization failed");
                }
                loaded
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the outcome of a completed initialization, if any.
    pub fn get(&self) -> Option<SodiumResult<&Sodium>> {
        self.slot.get().map(|loaded| loaded.as_ref().map_err(Clone::clone))
    }

    pub fn state(&self) -> EngineState {
        match self.slot.get() {
            Some(Ok(_)) => EngineState::Ready,
            Some(Err(_)) => EngineState::Failed,
            None if self.started.load(Ordering::Acquire) => EngineState::Initializing,
            None => EngineState::Uninitialized,
        }
    }

    /// Number of load sequences this cell has executed (0 or 1).
    pub fn load_attempts(&self) -> usize {
        self.loads.load(Ordering::Acquire)
    }
}

impl Default for EngineCell {
    fn default() -> Self {
        Self::new()
    }
}

static ENGINE: EngineCell = EngineCell::new();

/// Initializes the process-wide engine from the environment.
///
/// Idempotent: once the engine is ready or failed, this replays that outcome.
///
/// # Errors
///
/// Returns the fatal load error, if any.
pub fn initialize() -> SodiumResult<()> {
    sodium().map(|_| ())
}

/// Initializes the process-wide engine with an explicit configuration.
///
/// Only the first initialization in the process uses its configuration.
///
/// # Errors
///
/// Returns the fatal load error, if any.
pub fn initialize_with(config: &EngineConfig) -> SodiumResult<()> {
    ENGINE.get_or_init(config).map(|_| ())
}

/// Returns the process-wide engine, loading it on first use.
///
/// # Errors
///
/// Returns the fatal load error, if any.
pub fn sodium() -> SodiumResult<&'static Sodium> {
    match ENGINE.get() {
        Some(loaded) => loaded,
        None => ENGINE.get_or_init(&EngineConfig::from_env()),
    }
}

/// Initialization state of the process-wide engine.
pub fn state() -> EngineState {
    ENGINE.state()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_the_only_candidate() {
        let config = EngineConfig::with_path("/opt/sodium/libsodium.so");
        assert_eq!(config.candidates(), vec![OsString::from("/opt/sodium/libsodium.so")]);
    }

    #[test]
    fn default_config_searches_platform_names() {
        let config = EngineConfig::default();
        assert!(config.library_path.is_none());
        assert!(!config.candidates().is_empty());
    }

    #[test]
    fn registry_symbols_are_bound() {
        for descriptor in registry::all() {
            for symbol in descriptor.symbols {
                assert!(
                    SodiumApi::SYMBOLS.contains(symbol),
                    "{} lists unbound symbol {symbol}",
                    descriptor.name
                );
            }
        }
    }

    #[test]
    fn empty_search_list_fails_without_loading() {
        let cell = EngineCell::new();
        let config = EngineConfig {
            library_path: None,
            search_names: Vec::new(),
        };
        let err = cell.get_or_init(&config).unwrap_err();
        assert!(matches!(err, SodiumError::EngineLoad { ref attempted, .. } if attempted.is_empty()));
        assert_eq!(cell.state(), EngineState::Failed);
    }

    #[test]
    fn mismatched_descriptor_is_incompatible() {
        let (library, _) = open_library(&EngineConfig::from_env()).unwrap();
        verify_sizes(&library, registry::all()).unwrap();

        let skewed = PrimitiveDescriptor {
            key_bytes: Some(31),
            ..registry::SECRETBOX
        };
        let err = verify_sizes(&library, &[skewed]).unwrap_err();
        assert_eq!(
            err,
            SodiumError::IncompatibleEngine {
                primitive: "secretbox",
                constant: "key_bytes",
                expected: 31,
                actual: 32,
            }
        );
    }

    #[test]
    fn fresh_cell_is_uninitialized() {
        let cell = EngineCell::new();
        assert_eq!(cell.state(), EngineState::Uninitialized);
        assert_eq!(cell.load_attempts(), 0);
        assert!(cell.get().is_none());
    }
}
