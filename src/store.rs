//! High score persistence.
//!
//! Scores live in a string-keyed store, the same shape a browser's local
//! storage has. Only the high score is ever written there.

use log::{debug, warn};
use std::{
	collections::{BTreeMap, HashMap},
	error, fmt, fs, io,
	path::{Path, PathBuf},
};

/// Key the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Error returned when a store can't be written.
#[derive(Debug)]
pub enum StoreError {
	/// Reading or writing the backing file failed.
	Io(io::Error),

	/// The backing file isn't a JSON object of strings.
	Format(serde_json::Error),
}

impl fmt::Display for StoreError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(e) => write!(f, "score store i/o failed: {}", e),
			Self::Format(e) => write!(f, "score store is malformed: {}", e),
		}
	}
}

impl error::Error for StoreError {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			Self::Format(e) => Some(e),
		}
	}
}

impl From<io::Error> for StoreError {
	fn from(e: io::Error) -> Self {
		Self::Io(e)
	}
}

impl From<serde_json::Error> for StoreError {
	fn from(e: serde_json::Error) -> Self {
		Self::Format(e)
	}
}

/// String-keyed persistent storage.
pub trait ScoreStore {
	/// Return value stored under `key`.
	fn get(&self, key: &str) -> Option<String>;

	/// Store `value` under `key`.
	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Store which forgets everything when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	/// Return an empty [`MemoryStore`].
	pub fn new() -> Self {
		Self::default()
	}
}

impl ScoreStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
		self.entries.insert(key.to_string(), value);
		Ok(())
	}
}

/// Store backed by a JSON object file. The whole file is rewritten on every
/// [`set`](ScoreStore::set).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
	entries: BTreeMap<String, String>,
}

impl JsonFileStore {
	/// Open the store at `path`.
	///
	/// A missing file gives an empty store. So does an unreadable or malformed
	/// one, after a warning: losing a high score is better than not starting.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let entries = match Self::read(&path) {
			Ok(entries) => entries,
			Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
				debug!("no score store at {}, starting empty", path.display());
				BTreeMap::new()
			}
			Err(e) => {
				warn!("ignoring score store at {}: {}", path.display(), e);
				BTreeMap::new()
			}
		};
		Self { path, entries }
	}

	/// Return path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
		let data = fs::read_to_string(path)?;
		Ok(serde_json::from_str(&data)?)
	}
}

impl ScoreStore for JsonFileStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
		self.entries.insert(key.to_string(), value);
		fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
		Ok(())
	}
}

/// Read the high score from `store`. Missing or unparsable values give 0.
pub fn load_high_score(store: &impl ScoreStore) -> u32 {
	match store.get(HIGH_SCORE_KEY) {
		Some(value) => value.trim().parse().unwrap_or_else(|e| {
			warn!("stored high score {:?} is not a number: {}", value, e);
			0
		}),
		None => 0,
	}
}

/// Write `score` as the high score.
pub fn save_high_score(store: &mut impl ScoreStore, score: u32) -> Result<(), StoreError> {
	store.set(HIGH_SCORE_KEY, score.to_string())
}
