//! The persistence boundary of a config handler.
//!
//! The core prescribes only the lifecycle: the generated tree's save hook
//! fires the serializer exactly once per apply pass that committed
//! something. The byte format is the serializer's business; a JSON file
//! implementation ships here because nearly every consumer wants one.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Serializer failure.
#[derive(Debug, Error)]
pub enum SerializeError {
	/// Reading or writing the backing file failed.
	#[error("I/O error on {path}: {source}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The payload could not be encoded or decoded.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Outcome of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadResult {
	/// The instance was replaced with persisted state.
	Loaded,
	/// Nothing persisted yet; the instance was left untouched. Not an
	/// error — the caller typically saves defaults in response.
	Missing,
}

/// Persists and restores a config instance.
pub trait ConfigSerializer<T> {
	/// Persists the instance.
	fn save(&self, instance: &T) -> Result<(), SerializeError>;

	/// Restores persisted state into the instance, if any exists.
	fn load(&self, instance: &mut T) -> Result<LoadResult, SerializeError>;
}

/// Serializer that persists nothing. The default for handlers that only
/// want in-memory editing.
pub struct NoopSerializer;

impl<T> ConfigSerializer<T> for NoopSerializer {
	fn save(&self, _instance: &T) -> Result<(), SerializeError> {
		Ok(())
	}

	fn load(&self, _instance: &mut T) -> Result<LoadResult, SerializeError> {
		Ok(LoadResult::Missing)
	}
}

/// Pretty-printed JSON file serializer.
pub struct JsonFileSerializer {
	path: PathBuf,
}

impl JsonFileSerializer {
	/// Serializer backed by the given file path.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// The backing file path.
	pub fn path(&self) -> &std::path::Path {
		&self.path
	}
}

impl<T: Serialize + DeserializeOwned> ConfigSerializer<T> for JsonFileSerializer {
	fn save(&self, instance: &T) -> Result<(), SerializeError> {
		let payload = serde_json::to_string_pretty(instance)?;
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(|source| SerializeError::Io {
				path: parent.to_path_buf(),
				source,
			})?;
		}
		fs::write(&self.path, payload).map_err(|source| SerializeError::Io {
			path: self.path.clone(),
			source,
		})?;
		debug!(path = %self.path.display(), "saved config");
		Ok(())
	}

	fn load(&self, instance: &mut T) -> Result<LoadResult, SerializeError> {
		if !self.path.exists() {
			return Ok(LoadResult::Missing);
		}
		let payload = fs::read_to_string(&self.path).map_err(|source| SerializeError::Io {
			path: self.path.clone(),
			source,
		})?;
		*instance = serde_json::from_str(&payload)?;
		debug!(path = %self.path.display(), "loaded config");
		Ok(LoadResult::Loaded)
	}
}
