//! User configuration (`config.toml`).
//!
//! Problems with the file never stop the program: they are returned as
//! warnings and the built-in defaults are used instead.

use directories::ProjectDirs;
use log::LevelFilter;
use serde::Deserialize;
use sheetlink_core::SnapshotMode;
use std::path::PathBuf;

const MAX_CONFIG_FILE_BYTES: u64 = 65_536;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    snapshot_mode: Option<SnapshotMode>,
    log_level: Option<String>,
    pretty: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub snapshot_mode: SnapshotMode,
    pub log_level: LevelFilter,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_mode: SnapshotMode::Resolved,
            log_level: LevelFilter::Warn,
            pretty: false,
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheetlink")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load configuration from `explicit`, or from the user config dir.
///
/// A missing default file is silent; a missing explicit file is a warning.
pub fn load_config(explicit: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = explicit.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let content = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            return (Config::default(), warnings);
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                return (Config::default(), warnings);
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            return (Config::default(), warnings);
        }
    };

    let config = parse_config(&content, &mut warnings).unwrap_or_else(|err| {
        warnings.push(format!("Failed to parse {}: {}", path.display(), err));
        Config::default()
    });
    (config, warnings)
}

fn parse_config(content: &str, warnings: &mut Vec<String>) -> Result<Config, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = Config::default();

    if let Some(mode) = file.snapshot_mode {
        config.snapshot_mode = mode;
    }
    if let Some(pretty) = file.pretty {
        config.pretty = pretty;
    }
    if let Some(level) = file.log_level.as_deref() {
        match level.parse::<LevelFilter>() {
            Ok(level) => config.log_level = level,
            Err(_) => warnings.push(format!("Unknown log_level '{}', using 'warn'", level)),
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let mut warnings = Vec::new();
        let config = parse_config(
            "snapshot_mode = \"raw\"\nlog_level = \"debug\"\npretty = true\n",
            &mut warnings,
        )
        .unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.snapshot_mode, SnapshotMode::Raw);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.pretty);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let mut warnings = Vec::new();
        assert_eq!(parse_config("", &mut warnings).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_is_error() {
        let mut warnings = Vec::new();
        assert!(parse_config("colour = true", &mut warnings).is_err());
    }

    #[test]
    fn test_bad_log_level_warns() {
        let mut warnings = Vec::new();
        let config = parse_config("log_level = \"loud\"", &mut warnings).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_missing_explicit_file_warns() {
        let path = PathBuf::from("/definitely/not/here/config.toml");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_user_config_path_is_deterministic() {
        assert_eq!(user_config_path(), user_config_path());
    }
}
