//! Command line and configuration file
//!
//! Effective configuration is built in three layers, later layers winning:
//! built-in defaults, the optional JSON file given with `--config`, then the
//! positional arguments in the order `WIDTH HEIGHT LOOP_COUNT MAX_LEVEL`.

use std::path::{Path, PathBuf};

use clap::Parser;
use prng_engines::SamplingConfig;

use crate::error::DemoError;

/// Printed after any configuration error
pub const USAGE: &str = "<width> <height> <loop_count> <level>";

/// Render PRNG output distributions as BMP heatmaps
#[derive(Debug, Clone, Parser)]
#[command(name = "prng-demo", version)]
pub struct Args {
    /// Grid width in pixels
    #[arg(value_name = "WIDTH")]
    pub width: Option<u32>,

    /// Grid height in pixels
    #[arg(value_name = "HEIGHT")]
    pub height: Option<u32>,

    /// Number of draws per engine
    #[arg(value_name = "LOOP_COUNT")]
    pub loop_count: Option<u64>,

    /// Hit count rendered fully black
    #[arg(value_name = "MAX_LEVEL")]
    pub max_level: Option<u32>,

    /// JSON file with any of width, height, loop_count, max_level
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fixed seed for reproducible runs (default: OS entropy)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Directory the bitmaps are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Only render the named engine (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Defaults, then the config file, then positional overrides
    ///
    /// Not validated: the caller prints the result first.
    pub fn sampling_config(&self) -> Result<SamplingConfig, DemoError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SamplingConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(loop_count) = self.loop_count {
            config.loop_count = loop_count;
        }
        if let Some(max_level) = self.max_level {
            config.max_level = max_level;
        }

        Ok(config)
    }
}

/// Read a `SamplingConfig` from a JSON file; missing fields take defaults
pub fn load_config(path: &Path) -> Result<SamplingConfig, DemoError> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["prng-demo"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let args = parse(&[]);
        assert_eq!(args.sampling_config().unwrap(), SamplingConfig::default());
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(args.only.is_empty());
        assert!(!args.json);
    }

    #[test]
    fn test_positional_arguments_in_order() {
        let args = parse(&["640", "480"]);
        let config = args.sampling_config().unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.loop_count, 1_000_000);
        assert_eq!(config.max_level, 10);

        let config = parse(&["8", "4", "500", "3"]).sampling_config().unwrap();
        assert_eq!(config.loop_count, 500);
        assert_eq!(config.max_level, 3);
    }

    #[test]
    fn test_non_numeric_positional_rejected() {
        assert!(Args::try_parse_from(["prng-demo", "wide"]).is_err());
        assert!(Args::try_parse_from(["prng-demo", "-5"]).is_err());
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "--seed", "42", "--out-dir", "out", "--only", "well512", "--only", "mt19937",
            "--json",
        ]);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert_eq!(args.only, vec!["well512", "mt19937"]);
        assert!(args.json);
    }

    #[test]
    fn test_config_file_then_positional_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        std::fs::write(&path, r#"{"width": 64, "height": 32, "max_level": 5}"#).unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let args = parse(&["--config", &path_arg, "128"]);
        let config = args.sampling_config().unwrap();

        assert_eq!(config.width, 128);
        assert_eq!(config.height, 32);
        assert_eq!(config.loop_count, 1_000_000);
        assert_eq!(config.max_level, 5);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DemoError::ReadConfig { .. }));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"width": "wide"}"#).unwrap();

        assert!(matches!(load_config(&path), Err(DemoError::Config(_))));
    }
}
