//! Engine settings and persisted flags
//!
//! Only the mouse-mode flag outlives a session. Everything else in
//! [`Settings`] is fixed when the engine is built.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::errors::{FLAG_ENCODE_ERROR, FLAG_PARSE_ERROR, FLAG_STORE_IO};
use crate::constants::motion::MAX_NODES;
use crate::error::{ErrorType, Result, WalkError};
use crate::scroll::ScrollBand;

/// Runtime settings of an [`Engine`](crate::engine::Engine)
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Text nodes a single motion may visit before reporting "not found"
    pub max_nodes: usize,
    /// Reading band the active block is kept in
    pub scroll: ScrollBand,
    /// Whether pointer clicks trigger motions, unless a persisted flag says otherwise
    pub mouse_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_nodes: MAX_NODES,
            scroll: ScrollBand::default(),
            mouse_mode: false,
        }
    }
}

/// Persistent key-value storage for boolean flags
pub trait FlagStore {
    /// Stored value of `name`, `None` if it was never set
    fn get_flag(&self, name: &str) -> Result<Option<bool>>;

    fn set_flag(&mut self, name: &str, value: bool) -> Result<()>;
}

/// Flags kept in memory for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    flags: HashMap<String, bool>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get_flag(&self, name: &str) -> Result<Option<bool>> {
        Ok(self.flags.get(name).copied())
    }

    fn set_flag(&mut self, name: &str, value: bool) -> Result<()> {
        self.flags.insert(name.to_string(), value);
        Ok(())
    }
}

/// On-disk shape of the flag file: a flat TOML table of booleans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct FlagFile(BTreeMap<String, bool>);

/// Flags persisted as a TOML table (`mouseModeEnabled = true`)
///
/// A missing file holds no flags.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<FlagFile> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(FlagFile::default()),
            Err(err) => return Err(storage_error(&self.path, err)),
        };

        toml::from_str(&content).map_err(|e| {
            WalkError::new(
                ErrorType::Parse,
                FLAG_PARSE_ERROR,
                format!("Failed to parse {}: {e}", self.path.display()),
            )
        })
    }

    fn save(&self, file: &FlagFile) -> Result<()> {
        let content = toml::to_string_pretty(file).map_err(|e| {
            WalkError::new(
                ErrorType::Internal,
                FLAG_ENCODE_ERROR,
                format!("Failed to serialize flags: {e}"),
            )
        })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| storage_error(&self.path, e))?;
        }
        fs::write(&self.path, content).map_err(|e| storage_error(&self.path, e))
    }
}

fn storage_error(path: &Path, err: io::Error) -> WalkError {
    WalkError::new(
        ErrorType::Storage,
        FLAG_STORE_IO,
        format!("{}: {err}", path.display()),
    )
}

impl FlagStore for FileFlagStore {
    fn get_flag(&self, name: &str) -> Result<Option<bool>> {
        Ok(self.load()?.0.get(name).copied())
    }

    fn set_flag(&mut self, name: &str, value: bool) -> Result<()> {
        let mut file = self.load()?;
        file.0.insert(name.to_string(), value);
        self.save(&file)?;
        tracing::debug!(path = %self.path.display(), name, value, "flag saved");
        Ok(())
    }
}
