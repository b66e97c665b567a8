use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A string key/value store the configuration reads from and writes to.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, treating empty values as absent.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Process environment. Read-only.
#[derive(Debug, Clone, Default)]
pub struct EnvStore;

impl EnvStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for EnvStore {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("cannot write {key}: process environment is read-only"))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Err(anyhow!("cannot remove {key}: process environment is read-only"))
    }
}

/// In-memory store, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Persistent store backed by a flat JSON object on disk.
///
/// Every write replaces the whole file through a rename, so a new `FileStore`
/// opened on the same path sees everything written before it and never a
/// partial file. On Unix the file is readable by its owner only.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store {}", path.display()))?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse store {}", path.display()))?
            }
        } else {
            debug!("store {} does not exist yet", path.display());
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Open the store at `path`, starting empty if the file is unreadable.
    ///
    /// The damaged file is left alone until the next write replaces it.
    pub fn open_or_reset(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Ignoring unreadable store, it will be replaced on next write: {e:#}");
                Self {
                    path: path.to_path_buf(),
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    /// `<data_dir>/fashionaire/storage.json` for the current platform.
    pub fn default_path() -> Result<PathBuf> {
        use etcetera::BaseStrategy;

        let strategy = etcetera::choose_base_strategy()
            .map_err(|e| anyhow!("Failed to locate home directory: {e}"))?;
        Ok(strategy.data_dir().join("fashionaire").join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        let json = serde_json::to_string_pretty(&self.entries)?;

        // tempfile creates the file with mode 0600 on Unix
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write store {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
