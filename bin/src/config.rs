//! Configuration file for the `weft` binary.
//!
//! ```toml
//! [wrap]
//! mode = "fixed_column"
//! column = 80
//! ```
//!
//! Command-line flags win over the file, the file wins over defaults.

use crate::cli::Cli;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use weft_display_map::WrapConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub wrap: WrapConfig,
}

impl Config {
    /// Read and deserialize a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .wrap
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Load the file named on the command line, if any, then apply flag overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if cli.no_wrap {
            self.wrap = WrapConfig::none();
        } else if let Some(column) = cli.wrap_column {
            self.wrap = WrapConfig::fixed_column(column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use weft_display_map::WrapMode;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_wrap_table() {
        let (_dir, path) = write_config("[wrap]\nmode = \"fixed_column\"\ncolumn = 13\n");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.wrap, WrapConfig::fixed_column(13));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let (_dir, path) = write_config("");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.wrap.mode, WrapMode::None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let (_dir, path) = write_config("[wrap]\nwidth = 10\n");

        let error = Config::load(&path).unwrap_err();
        assert!(format!("{error:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn zero_column_is_rejected() {
        let (_dir, path) = write_config("[wrap]\nmode = \"fixed_column\"\ncolumn = 0\n");

        let error = Config::load(&path).unwrap_err();
        assert!(format!("{error:#}").contains("Invalid wrap column 0"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let error = Config::load(&path).unwrap_err();
        assert!(error.to_string().contains("absent.toml"));
    }

    #[test]
    fn flags_override_file() {
        let (_dir, path) = write_config("[wrap]\nmode = \"fixed_column\"\ncolumn = 40\n");
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["weft", "f", "--config", &path, "-w", "13"]).unwrap();
        assert_eq!(
            Config::from_cli(&cli).unwrap().wrap,
            WrapConfig::fixed_column(13)
        );

        let cli = Cli::try_parse_from(["weft", "f", "--config", &path, "--no-wrap"]).unwrap();
        assert_eq!(Config::from_cli(&cli).unwrap().wrap, WrapConfig::none());

        let cli = Cli::try_parse_from(["weft", "f", "--config", &path]).unwrap();
        assert_eq!(
            Config::from_cli(&cli).unwrap().wrap,
            WrapConfig::fixed_column(40)
        );
    }
}
