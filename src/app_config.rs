//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// TOML-style file configuration for credentials and networking defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Application key.
    pub app_key: Option<String>,
    /// User key, sent only by operations that need user auth.
    pub user_key: Option<String>,
    /// URL scheme (`https` or `http`).
    pub scheme: Option<String>,
    /// Optional connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Optional read timeout in seconds.
    pub read_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Validates config values against runtime constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(scheme) = self.scheme.as_deref()
            && !matches!(scheme, "https" | "http")
        {
            bail!("Invalid config value for `scheme`: {scheme}. Expected: https, http");
        }
        validate_timeout_secs("connect_timeout_secs", self.connect_timeout_secs)?;
        validate_timeout_secs("read_timeout_secs", self.read_timeout_secs)?;
        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/wykop/config.toml`
/// 2. `$HOME/.config/wykop/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config_home).join("wykop").join("config.toml"));
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("wykop")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the default path; a missing file yields defaults.
pub fn load_default_file_config() -> Result<FileConfig> {
    match resolve_default_config_path() {
        Some(path) if path.exists() => load_file_config(&path),
        _ => Ok(FileConfig::default()),
    }
}

/// Loads and validates config from `path`.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config = parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_number = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_number}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();

        match key {
            "app_key" => {
                cfg.app_key = Some(
                    parse_string_literal(value)
                        .with_context(|| format!("Invalid `app_key` value on line {line_number}"))?,
                );
            }
            "user_key" => {
                cfg.user_key = Some(
                    parse_string_literal(value)
                        .with_context(|| format!("Invalid `user_key` value on line {line_number}"))?,
                );
            }
            "scheme" => {
                cfg.scheme = Some(
                    parse_string_literal(value)
                        .with_context(|| format!("Invalid `scheme` value on line {line_number}"))?,
                );
            }
            "connect_timeout_secs" => {
                cfg.connect_timeout_secs = Some(parse_integer_u64(value).with_context(|| {
                    format!("Invalid `connect_timeout_secs` value on line {line_number}")
                })?);
            }
            "read_timeout_secs" => {
                cfg.read_timeout_secs = Some(parse_integer_u64(value).with_context(|| {
                    format!("Invalid `read_timeout_secs` value on line {line_number}")
                })?);
            }
            _ => bail!("Unknown config key `{key}` on line {line_number}"),
        }
    }
    Ok(cfg)
}

/// Drops a trailing `# comment`, ignoring `#` inside quoted strings.
fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(value: &str) -> Result<String> {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        bail!("expected a double-quoted string, got `{value}`");
    };
    if inner.contains('"') {
        bail!("unexpected quote inside string `{value}`");
    }
    Ok(inner.to_string())
}

fn parse_integer_u64(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .with_context(|| format!("expected a non-negative integer, got `{value}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_all_keys() {
        let raw = r#"
            # credentials
            app_key = "app-123"
            user_key = "user-456" # trailing comment
            scheme = "http"
            connect_timeout_secs = 5
            read_timeout_secs = 60
        "#;
        let cfg = parse_config_str(raw).unwrap();
        assert_eq!(cfg.app_key.as_deref(), Some("app-123"));
        assert_eq!(cfg.user_key.as_deref(), Some("user-456"));
        assert_eq!(cfg.scheme.as_deref(), Some("http"));
        assert_eq!(cfg.connect_timeout_secs, Some(5));
        assert_eq!(cfg.read_timeout_secs, Some(60));
    }

    #[test]
    fn test_parse_config_keeps_hash_inside_string() {
        let cfg = parse_config_str(r#"app_key = "a#b""#).unwrap();
        assert_eq!(cfg.app_key.as_deref(), Some("a#b"));
    }

    #[test]
    fn test_parse_config_rejects_unknown_key() {
        let err = parse_config_str("sort = \"day\"").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_missing_equals() {
        let err = parse_config_str("app_key").unwrap_err();
        assert!(err.to_string().contains("line 1"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_unquoted_string() {
        assert!(parse_config_str("app_key = app").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scheme_and_timeouts() {
        let cfg = FileConfig {
            scheme: Some("ftp".to_string()),
            ..FileConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = FileConfig {
            read_timeout_secs: Some(0),
            ..FileConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_file_config_reads_and_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "app_key = \"k\"\nconnect_timeout_secs = 9999\n").unwrap();
        let err = load_file_config(&path).unwrap_err();
        assert!(err.to_string().contains("connect_timeout_secs"), "got: {err}");

        fs::write(&path, "app_key = \"k\"\n").unwrap();
        let cfg = load_file_config(&path).unwrap();
        assert_eq!(cfg.app_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_load_file_config_missing_file_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        let err = load_file_config(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"), "got: {err}");
    }
}
