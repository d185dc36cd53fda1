use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Built-in defaults, lowest priority layer
const DEFAULT_CONFIG: &str = r#"
[catalog]
path = ""  # Empty uses the bundled catalog; set via SKILLBOARD_CATALOG

[logging]
level = "warn"  # trace, debug, info, warn, error; set via SKILLBOARD_LOG
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillboard/skillboard.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillboard").join("skillboard.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.skillboard/skillboard.toml (optional)
    /// 3. Local override: ./skillboard.toml (optional)
    /// 4. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));

        if let Some(global) = Self::global_config_path() {
            config_builder = config_builder.add_source(config::File::from(global).required(false));
        }

        config_builder = config_builder
            .add_source(config::File::with_name("skillboard").required(false))
            .add_source(config::Environment::with_prefix("SKILLBOARD").separator("__"));

        // Convenience env var overrides
        if let Ok(path) = env::var("SKILLBOARD_CATALOG") {
            config_builder = config_builder.set_override("catalog.path", path)?;
        }

        if let Ok(level) = env::var("SKILLBOARD_LOG") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Catalog file to load, `None` for the bundled catalog
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.path.trim();
        if path.is_empty() {
            return None;
        }

        // Expand tilde to home directory
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(home.join(rest));
            }
        }

        Some(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_path(path: &str) -> Config {
        Config {
            catalog: CatalogConfig {
                path: path.to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
        }
    }

    #[test]
    fn test_empty_path_uses_bundled_catalog() {
        assert!(with_path("").catalog_path().is_none());
        assert!(with_path("   ").catalog_path().is_none());
    }

    #[test]
    fn test_explicit_path() {
        assert_eq!(
            with_path("data/skills.yaml").catalog_path(),
            Some(PathBuf::from("data/skills.yaml"))
        );
    }

    #[test]
    fn test_defaults_parse() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.catalog_path().is_none());
    }
}
