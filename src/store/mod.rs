use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::Snapshot;

/// Shown to callers and operators whenever the data file cannot be used.
pub const REFRESH_HINT: &str = "Please run the scraper to regenerate the data file";

/// Why the backing document could not be turned into a [`Snapshot`].
#[derive(Debug, thiserror::Error)]
pub enum Absent {
    #[error("data file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("data file has unexpected shape: {0}")]
    Shape(String),
}

/// Reads the scraper's output file. Holds no data between calls; each
/// `load` re-reads the file so external rewrites are seen immediately.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Snapshot, Absent> {
        let result = match tokio::fs::read(&self.path).await {
            Ok(bytes) => parse(&bytes),
            Err(e) => Err(Absent::from(e)),
        };

        match &result {
            Ok(snapshot) if !snapshot.count_matches() => debug!(
                stored = %snapshot.count,
                actual = snapshot.len(),
                "Stored count disagrees with product list; using list length"
            ),
            Ok(_) => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "Backing data unavailable. {}",
                REFRESH_HINT
            ),
        }

        result
    }
}

/// Parse and validate a raw document. The root must be an object with a
/// numeric `count`, a string `lastUpdate` and a `products` array. Elements
/// of `products` are not inspected.
pub fn parse(bytes: &[u8]) -> Result<Snapshot, Absent> {
    let value: Value = serde_json::from_slice(bytes)?;

    // serde would also accept a positional array for a struct
    if !value.is_object() {
        return Err(Absent::Shape("root is not an object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| Absent::Shape(e.to_string()))
}
