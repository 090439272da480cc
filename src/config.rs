//! Configuration file support for solar-verify.
//!
//! Provides YAML-based configuration through `solar-verify.config.yml`
//! files, and the merge of config values with command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use solar_verify::application::dto::OutputFormat;
use solar_verify::brand_catalog::policies::MatchPolicy;
use solar_verify::shared::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

const CONFIG_FILENAME: &str = "solar-verify.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Catalog file, relative to the working directory
    pub catalog: Option<PathBuf>,
    pub policy: Option<String>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|s| s.parse::<OutputFormat>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
    }

    pub fn match_policy(&self) -> Result<Option<MatchPolicy>> {
        self.policy
            .as_deref()
            .map(|s| s.parse::<MatchPolicy>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
    }

    /// One message per unknown key, sorted for stable output
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;
    config.match_policy()?;

    if let Some(ref catalog) = config.catalog {
        if catalog.as_os_str().is_empty() {
            bail!(
                "Invalid config: catalog must not be empty.\n\n\
                 💡 Hint: Remove the 'catalog' field to use the built-in catalog."
            );
        }
    }
    Ok(())
}

/// Effective settings after merging CLI > config file > defaults
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub policy: MatchPolicy,
    pub catalog: Option<PathBuf>,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let (config_format, config_policy, config_catalog, config_quiet) = match config {
            Some(config) => (
                config.output_format()?,
                config.match_policy()?,
                config.catalog.clone(),
                config.quiet.unwrap_or(false),
            ),
            None => (None, None, None, false),
        };

        Ok(Self {
            format: args.format.or(config_format).unwrap_or_default(),
            policy: args.policy.or(config_policy).unwrap_or_default(),
            catalog: args.catalog.clone().or(config_catalog),
            quiet: args.quiet || config_quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(
            ["solar-verify"]
                .into_iter()
                .chain(extra.iter().copied())
                .chain(["audit"]),
        )
        .unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
catalog: brands.yml
policy: longest-prefix
quiet: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Markdown));
        assert_eq!(
            config.match_policy().unwrap(),
            Some(MatchPolicy::LongestPrefix)
        );
        assert_eq!(config.catalog, Some(PathBuf::from("brands.yml")));
        assert_eq!(config.quiet, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid config file"));
        assert!(chain.contains("Invalid format: xml"));
    }

    #[test]
    fn test_invalid_policy_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "policy: best-guess\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid match policy"));
    }

    #[test]
    fn test_empty_catalog_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "catalog: \"\"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("catalog must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.unknown_field_warnings(),
            vec![
                "Unknown config field 'another_unknown' will be ignored.".to_string(),
                "Unknown config field 'unknown_field' will be ignored.".to_string(),
            ]
        );
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&[]), None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.policy, MatchPolicy::FirstMatch);
    }

    #[test]
    fn test_settings_config_fills_missing_cli_values() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            policy: Some("longest".to_string()),
            catalog: Some(PathBuf::from("brands.toml")),
            quiet: Some(true),
            ..Default::default()
        };
        let settings = Settings::resolve(&args(&[]), Some(&config)).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.policy, MatchPolicy::LongestPrefix);
        assert_eq!(settings.catalog, Some(PathBuf::from("brands.toml")));
        assert!(settings.quiet);
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            policy: Some("longest-prefix".to_string()),
            catalog: Some(PathBuf::from("brands.toml")),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &args(&[
                "-f",
                "markdown",
                "--policy",
                "first-match",
                "--catalog",
                "other.json",
            ]),
            Some(&config),
        )
        .unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.policy, MatchPolicy::FirstMatch);
        assert_eq!(settings.catalog, Some(PathBuf::from("other.json")));
        assert!(!settings.quiet);
    }
}
