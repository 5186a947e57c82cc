//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use cellviz::{CellvizError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for CellvizError {
    fn from(err: ConfigError) -> Self {
        CellvizError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (cellviz/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - A configured class name is empty
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CellvizError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("cellviz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "cellviz", "cellviz") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CellvizError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    Ok(parse_config(&content)?)
}

fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Rejects empty class names and separators, which would silently match
/// nothing.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let markers = config.markers();
    let highlight = config.highlight();
    let fields = [
        ("markers.node", markers.node()),
        ("markers.edge", markers.edge()),
        ("markers.cell", markers.cell()),
        ("markers.function", markers.function()),
        ("markers.rectify", markers.rectify()),
        ("markers.hit_path", markers.hit_path()),
        ("markers.sentinel", markers.sentinel()),
        ("markers.edge_separator", markers.edge_separator()),
        ("highlight.selected", highlight.selected()),
        ("highlight.fade", highlight.fade()),
        ("highlight.incoming", highlight.incoming()),
        ("highlight.outgoing", highlight.outgoing()),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("`{name}` must not be empty")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/definitely/not/here/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[highlight]\nfade = \"dim\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.highlight().fade(), "dim");
        assert_eq!(config.markers().edge(), "edge");
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[markers\nnode = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_class_is_rejected() {
        let err = parse_config("[markers]\nfunction = \"\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: `markers.function` must not be empty"
        );
    }

    #[test]
    fn test_empty_id_prefix_is_allowed() {
        let config = parse_config("[markers]\nid_prefix = \"\"").unwrap();
        assert_eq!(config.markers().id_prefix(), "");
    }
}
