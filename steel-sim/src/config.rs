//! Simulation configuration.
//!
//! Read from a JSON5 file. When the file is missing, the bundled default is
//! written in its place and used.

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../package-content/sim_config.json5");

/// Where the config is read from when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "sim_config.json5";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file {}", path.display())]
    Io {
        /// The file that was accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid JSON5 or does not match the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// The multiface block a simulation grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Glow lichen, grown by bonemeal.
    GlowLichen,
    /// Sculk veins, which also convert their substrate to sculk.
    SculkVein,
}

impl Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GlowLichen => "glow_lichen",
            Self::SculkVein => "sculk_vein",
        })
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Seed of the random source.
    pub seed: u64,
    /// Number of growth steps.
    pub ticks: u32,
    /// Half-width of the cave.
    pub radius: i32,
    /// What to grow.
    pub material: Material,
    /// Mark grown faces for post-processing.
    pub world_generation: bool,
    /// Spread until nothing can grow after ticking.
    pub saturate: bool,
}

impl SimConfig {
    /// Loads the config at `path`, writing the default there first if the
    /// file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(io_error)?;
            return Self::parse(&config_str);
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(Self::default())
    }

    /// Parses and validates a JSON5 config.
    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json5::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=64).contains(&self.radius) {
            return Err(ConfigError::Invalid("Radius must be in range 1..=64"));
        }
        if self.ticks == 0 {
            return Err(ConfigError::Invalid("Ticks must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            ticks: 200,
            radius: 8,
            material: Material::GlowLichen,
            world_generation: false,
            saturate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn test_bundled_default_matches_default() {
        assert_eq!(SimConfig::parse(DEFAULT_CONFIG).unwrap(), SimConfig::default());
    }

    #[test]
    fn test_parse() {
        let config = SimConfig::parse(
            "{ seed: 7, ticks: 10, radius: 3, material: 'sculk_vein', \
             world_generation: true, saturate: true }",
        )
        .unwrap();
        assert_eq!(config.material, Material::SculkVein);
        assert_eq!(config.radius, 3);
        assert!(config.world_generation);
    }

    #[test]
    fn test_validate() {
        let mut config = SimConfig::default();
        assert!(config.validate().is_ok());

        config.radius = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid config: Radius must be in range 1..=64");
        config.radius = 65;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.radius = 64;
        config.ticks = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SimConfig::parse("{ seed: 1 }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SimConfig::parse(
                "{ seed: 1, ticks: 1, radius: 1, material: 'vines', \
                 world_generation: false, saturate: false }"
            ),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_create() {
        let dir = env::temp_dir().join(format!("steel-sim-config-{}", process::id()));
        let path = dir.join("nested").join("sim_config.json5");
        let _ = fs::remove_dir_all(&dir);

        let created = SimConfig::load_or_create(&path).unwrap();
        assert_eq!(created, SimConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs::write(
            &path,
            "{ seed: 3, ticks: 5, radius: 2, material: 'glow_lichen', \
             world_generation: false, saturate: true }",
        )
        .unwrap();
        let loaded = SimConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded.seed, 3);
        assert!(loaded.saturate);

        fs::remove_dir_all(&dir).unwrap();
    }
}
