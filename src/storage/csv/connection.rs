//! File-system connection shared by the CSV repositories.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvConnection manages the data directory and the paths of the collection
/// files inside it. Cheap to clone; every repository holds its own copy.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at the given data directory, creating the
    /// directory if it does not exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// The data directory this connection is rooted at
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn members_file_path(&self) -> PathBuf {
        self.base_directory.join("members.csv")
    }

    pub fn tasks_file_path(&self) -> PathBuf {
        self.base_directory.join("tasks.csv")
    }

    pub fn assignments_file_path(&self) -> PathBuf {
        self.base_directory.join("assignments.csv")
    }

    /// Holiday calendar file for a single year, e.g. `holidays/2026.yaml`
    pub fn holidays_file_path(&self, year: i32) -> PathBuf {
        self.base_directory.join("holidays").join(format!("{year}.yaml"))
    }
}
