//! Startup configuration.
//!
//! Values come from built-in defaults, then the `[life]` section of the
//! settings file, then command-line flags.
//!
//! # Settings File Format
//!
//! ```ini
//! [life]
//! size = 25
//! alive_probability = 0.3
//! tick_ms = 200
//!
//! [preferences]
//! synestia-theme = dark
//! ```

use std::path::PathBuf;

use clap::Parser;
use configparser::ini::Ini;
use log::info;

use crate::domain::{DEFAULT_ALIVE_PROBABILITY, DEFAULT_GRID_SIZE, ThemeId};

const DEFAULT_TICK_MS: u64 = 200;
const DEFAULT_SETTINGS_PATH: &str = "./synestia.ini";
const MAX_GRID_SIZE: usize = 1000;

/// Synestia - themeable tile canvas with a Game of Life tile
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Cli {
    /// Edge length of the life grid
    #[arg(long, value_name = "N")]
    pub grid_size: Option<usize>,

    /// Probability that a cell starts alive, in [0, 1]
    #[arg(long, value_name = "P")]
    pub alive_probability: Option<f64>,

    /// Milliseconds between life generations
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Start with this theme (dark, light, win95) and save it
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Settings file holding life defaults and the saved theme
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Seed for reproducible grids
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Resolved startup settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub grid_size: usize,
    pub alive_probability: f64,
    pub tick_ms: u64,
    /// Theme forced from the command line, if any
    pub theme: Option<ThemeId>,
    pub seed: Option<u64>,
    pub settings_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            tick_ms: DEFAULT_TICK_MS,
            theme: None,
            seed: None,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }

    /// Defaults, then settings file (if present), then flags
    pub fn from_cli(cli: &Cli) -> Result<Self, String> {
        let mut config = Self::new();
        if let Some(path) = &cli.settings {
            config.settings_path = path.clone();
        }
        if config.settings_path.exists() {
            config.load_from_file()?;
        } else {
            info!("No settings file at {:?}, using defaults", config.settings_path);
        }
        config.apply_cli(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the `[life]` section. Missing values keep their current value.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.settings_path)
            .map_err(|e| format!("Failed to load settings file: {}", e))?;

        if let Some(size) = ini.getuint("life", "size")? {
            self.grid_size = size as usize;
        }
        if let Some(p) = ini.getfloat("life", "alive_probability")? {
            self.alive_probability = p;
        }
        if let Some(ms) = ini.getuint("life", "tick_ms")? {
            self.tick_ms = ms;
        }

        info!(
            "Loaded settings: {}x{} grid, p={}, tick={}ms",
            self.grid_size, self.grid_size, self.alive_probability, self.tick_ms
        );
        Ok(())
    }

    /// Override with any flags that were given
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<(), String> {
        if let Some(size) = cli.grid_size {
            self.grid_size = size;
        }
        if let Some(p) = cli.alive_probability {
            self.alive_probability = p;
        }
        if let Some(ms) = cli.tick_ms {
            self.tick_ms = ms;
        }
        if let Some(name) = &cli.theme {
            let theme =
                ThemeId::parse(name).ok_or_else(|| format!("Unknown theme '{}'", name))?;
            self.theme = Some(theme);
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        Ok(())
    }

    /// Reject settings the life engine would refuse
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "grid size must be between 1 and {}, got {}",
                MAX_GRID_SIZE, self.grid_size
            ));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(format!(
                "alive probability must be within [0, 1], got {}",
                self.alive_probability
            ));
        }
        if self.tick_ms == 0 {
            return Err("tick interval must be at least 1 ms".to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "synestia-config-{}-{}.ini",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.alive_probability, 0.3);
        assert_eq!(config.tick_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let path = temp_file("layering", "[life]\nsize = 40\ntick_ms = 50\n");
        let cli = Cli {
            grid_size: Some(30),
            settings: Some(path.clone()),
            theme: Some("win95".to_owned()),
            ..Default::default()
        };

        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.alive_probability, 0.3);
        assert_eq!(config.theme, Some(ThemeId::Win95));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bad_file_value_is_an_error() {
        let path = temp_file("bad", "[life]\nsize = huge\n");
        let mut config = Config::new();
        config.settings_path = path.clone();
        assert!(config.load_from_file().is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_theme_flag_rejected() {
        let cli = Cli {
            theme: Some("neon".to_owned()),
            ..Default::default()
        };
        assert!(Config::new().apply_cli(&cli).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = Config::new();
        config.grid_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.alive_probability = 1.01;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "synestia",
            "--grid-size",
            "50",
            "--alive-probability",
            "0.5",
            "--seed",
            "7",
        ]);
        assert_eq!(cli.grid_size, Some(50));
        assert_eq!(cli.alive_probability, Some(0.5));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.theme, None);
    }
}
