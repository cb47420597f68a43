use crate::domain::ports::Storage;
use crate::utils::error::{EolError, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "eol-finder")]
#[command(about = "Fetch software products reaching end-of-life in a given year")]
pub struct CliConfig {
    /// Output folder for the CSV file (default: ~/eol)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Writes files below a base directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EolError::filesystem(parent, e))?;
        }

        // The handle is closed when `writer` goes out of scope, on error paths too.
        let file = File::create(&full_path).map_err(|e| EolError::filesystem(&full_path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(data)
            .map_err(|e| EolError::filesystem(&full_path, e))?;
        writer
            .flush()
            .map_err(|e| EolError::filesystem(&full_path, e))?;

        Ok(full_path)
    }
}
