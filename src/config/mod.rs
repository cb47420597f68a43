pub mod cli;
pub mod prompt;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EolError, Result};
use crate::utils::validation::{validate_path, validate_url, Validate};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://endoflife.date/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT_FOLDER: &str = "eol";
/// Environment variable that points the tool at another API host.
pub const BASE_URL_ENV: &str = "EOL_API_BASE_URL";

/// `~/eol`, or `./eol` when no home directory can be determined.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_OUTPUT_FOLDER)
}

/// Pick the configured directory (or the default) and make sure it exists.
pub fn resolve_output_dir(configured: Option<&Path>) -> Result<PathBuf> {
    let dir = configured
        .map(Path::to_path_buf)
        .unwrap_or_else(default_output_dir);

    std::fs::create_dir_all(&dir).map_err(|e| EolError::filesystem(&dir, e))?;
    tracing::debug!("Output directory ready: {}", dir.display());

    Ok(dir)
}

/// Run configuration, resolved once at startup and passed down.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Defaults plus the `EOL_API_BASE_URL` override, if set.
    pub fn from_env(output_dir: PathBuf) -> Self {
        Self::new(output_dir).with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replace the base URL unless the override is missing or blank.
    pub fn with_base_url_override(self, value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_dir_ends_with_eol() {
        assert!(default_output_dir().ends_with(DEFAULT_OUTPUT_FOLDER));
    }

    #[test]
    fn test_resolve_output_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("eol");

        let dir = resolve_output_dir(Some(&nested)).unwrap();

        assert_eq!(dir, nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn test_resolve_output_dir_existing_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let dir = resolve_output_dir(Some(temp_dir.path())).unwrap();
        assert_eq!(dir, temp_dir.path());
    }

    #[test]
    fn test_resolve_output_dir_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        let err = resolve_output_dir(Some(&file.join("eol"))).unwrap_err();
        assert!(matches!(err, EolError::Filesystem { .. }));
    }

    #[test]
    fn test_app_config_defaults_validate() {
        let config = AppConfig::new(PathBuf::from("/tmp/eol"));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_override() {
        let config = AppConfig::new(PathBuf::from("/tmp/eol"))
            .with_base_url_override(Some(" http://127.0.0.1:9000/api ".to_string()));
        assert_eq!(config.base_url(), "http://127.0.0.1:9000/api");

        let config = AppConfig::new(PathBuf::from("/tmp/eol")).with_base_url_override(None);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        let config =
            AppConfig::new(PathBuf::from("/tmp/eol")).with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_app_config_rejects_bad_base_url() {
        let config = AppConfig::new(PathBuf::from("/tmp/eol")).with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }
}
