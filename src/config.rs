//! Application configuration.
//!
//! The storage backend is built from this config once at startup and passed
//! by reference into the services; nothing in the crate reaches for ambient
//! global state to find its data.

use anyhow::Result;
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "ROTATION_DATA_DIR";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the member/task/assignment collections and the
    /// holiday calendars
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Config rooted at an explicit data directory (used by tests and tools)
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the config from the environment: `ROTATION_DATA_DIR` if set,
    /// otherwise `rotation-tracker` under the platform data directory.
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(Self::with_data_dir(dir));
        }

        let base = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;
        Ok(Self::with_data_dir(base.join("rotation-tracker")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir() {
        let config = AppConfig::with_data_dir("/tmp/rotation-test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/rotation-test"));
    }
}
