use log::{debug, warn};

use crate::mode::Mode;
use crate::store::{EnvStore, FileStore, KeyValueStore};

/// Environment variable holding the Google AI API key.
pub const API_KEY_VAR: &str = "GOOGLE_AI_API_KEY";
/// Environment variable selecting the deployment mode.
pub const MODE_VAR: &str = "FASHIONAIRE_ENV";
/// Key under which an overridden API key is persisted.
pub const STORAGE_KEY: &str = "fashionaire_api_key";
/// Keys must be strictly longer than this to pass `is_valid_api_key`.
pub const DEFAULT_MIN_KEY_LEN: usize = 10;

/// Where the current API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    Storage,
    Override,
    Missing,
}

/// Application configuration
pub struct Config {
    api_key: Option<String>,
    source: KeySource,
    mode: Mode,
    min_key_len: usize,
    storage: Option<Box<dyn KeyValueStore>>,
}

impl Config {
    /// Load configuration from the process environment, persisting
    /// overrides under the platform data directory.
    pub fn from_env() -> Self {
        let mut builder = ConfigBuilder::new();

        match FileStore::default_path() {
            Ok(path) => {
                let store = FileStore::open_or_reset(path);
                debug!("using persistent store {}", store.path().display());
                builder = builder.storage(store);
            }
            Err(e) => warn!("Running without persistent store: {e:#}"),
        }

        builder.build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Resolve the API key: environment first, then the persistent store.
    ///
    /// Logs one warning and returns `None` when neither has a value.
    pub fn resolve_api_key(
        env: &dyn KeyValueStore,
        storage: Option<&dyn KeyValueStore>,
    ) -> (Option<String>, KeySource) {
        if let Some(key) = env.get(API_KEY_VAR) {
            return (Some(key), KeySource::Environment);
        }

        if let Some(key) = storage.and_then(|s| s.get(STORAGE_KEY)) {
            return (Some(key), KeySource::Storage);
        }

        warn!("No API key found. Please set your {API_KEY_VAR} environment variable.");
        (None, KeySource::Missing)
    }

    pub fn resolve_mode(env: &dyn KeyValueStore) -> Mode {
        Mode::from_env_value(env.get(MODE_VAR).as_deref())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn source(&self) -> KeySource {
        self.source
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_development(&self) -> bool {
        self.mode == Mode::Development
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }

    pub fn min_key_len(&self) -> usize {
        self.min_key_len
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Replace the API key and persist it if a store is attached.
    ///
    /// A failed write is logged; the in-memory key is updated regardless.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        let key = key.into();

        if let Some(storage) = self.storage.as_mut() {
            if let Err(e) = storage.set(STORAGE_KEY, &key) {
                warn!("Failed to persist API key: {e:#}");
            }
        }

        self.api_key = Some(key);
        self.source = KeySource::Override;
    }

    /// Forget the API key, both in memory and in the persistent store.
    pub fn clear_api_key(&mut self) {
        if let Some(storage) = self.storage.as_mut() {
            if let Err(e) = storage.remove(STORAGE_KEY) {
                warn!("Failed to remove persisted API key: {e:#}");
            }
        }

        self.api_key = None;
        self.source = KeySource::Missing;
    }

    /// Shape check only: present and longer than `min_key_len` characters.
    ///
    /// Length counts `char`s, not UTF-16 units, so a key containing
    /// characters outside the Basic Multilingual Plane counts each of them
    /// once where a JavaScript `length` would count two.
    pub fn is_valid_api_key(&self, key: Option<&str>) -> bool {
        key.is_some_and(|k| k.chars().count() > self.min_key_len)
    }

    pub fn has_valid_api_key(&self) -> bool {
        self.is_valid_api_key(self.api_key())
    }
}

/// Builds a [`Config`] from explicit stores.
pub struct ConfigBuilder {
    env: Box<dyn KeyValueStore>,
    storage: Option<Box<dyn KeyValueStore>>,
    min_key_len: usize,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            env: Box::new(EnvStore::new()),
            storage: None,
            min_key_len: DEFAULT_MIN_KEY_LEN,
        }
    }

    pub fn env(mut self, env: impl KeyValueStore + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn storage(mut self, storage: impl KeyValueStore + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn min_key_len(mut self, min_key_len: usize) -> Self {
        self.min_key_len = min_key_len;
        self
    }

    pub fn build(self) -> Config {
        let (api_key, source) = Config::resolve_api_key(&*self.env, self.storage.as_deref());
        let mode = Config::resolve_mode(&*self.env);

        debug!("resolved mode {mode}, api key source {source:?}");

        Config {
            api_key,
            source,
            mode,
            min_key_len: self.min_key_len,
            storage: self.storage,
        }
    }
}

/// Initialize the logger, verbose in development.
pub fn init_logger(mode: Mode) {
    let level = match mode {
        Mode::Development => log::LevelFilter::Debug,
        Mode::Production => log::LevelFilter::Info,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
