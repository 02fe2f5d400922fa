use crate::error::CatalogError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub tick: Duration,
    pub debug: bool,
    pub cache_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigDefaults {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    tick_ms: Option<u64>,
}

impl AppConfig {
    pub fn load(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        debug: bool,
    ) -> Result<Self, CatalogError> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("catalog-cli");
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("catalog-cli");

        let file_config = load_config_file(&config_dir);

        // Priority: CLI flags → env vars → config file → defaults
        let base_url_env = std::env::var("CATALOG_BASE_URL").ok();
        let timeout_env = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok());

        let base_url = base_url
            .or(base_url_env)
            .or(file_config.defaults.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = timeout_secs
            .or(timeout_env)
            .or(file_config.defaults.timeout_secs)
            .map(Duration::from_secs);

        let tick_ms = file_config.defaults.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(10);

        Ok(AppConfig {
            base_url: Self::validate_base_url(&base_url)?,
            timeout,
            tick: Duration::from_millis(tick_ms),
            debug,
            cache_dir,
        })
    }

    /// Parses the API root and normalises it to end with `/` so endpoint paths
    /// join underneath it instead of replacing its last segment.
    pub fn validate_base_url(raw: &str) -> Result<Url, CatalogError> {
        let mut url = Url::parse(raw.trim())
            .map_err(|e| CatalogError::Config(format!("Invalid base URL '{}': {}", raw, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::Config(format!(
                "Unsupported scheme '{}' in base URL. Use http or https",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn log_file(&self) -> PathBuf {
        self.cache_dir.join("catalog-cli.log")
    }
}

fn load_config_file(config_dir: &Path) -> ConfigFile {
    let config_path = config_dir.join("config.toml");
    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed {}: {}", config_path.display(), e);
                ConfigFile::default()
            }),
            Err(_) => ConfigFile::default(),
        }
    } else {
        ConfigFile::default()
    }
}
