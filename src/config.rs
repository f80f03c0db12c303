use crate::cli::Cli;
use crate::constants::{
    DEFAULT_BRANCH_FACTOR, DEFAULT_DEPTH, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES,
    DEFAULT_MAX_TAGS, DEFAULT_TAG_DENSITY, DEFAULT_TEST_ROOT,
};
use crate::error::{GenerateError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Parameters that fully determine one generated fixture (together with the
/// seed and the fixture name).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// `None` draws a seed and reports it.
    pub seed: Option<u64>,
    pub depth: usize,
    pub branch_factor: usize,
    pub max_files: usize,
    pub max_file_size: usize,
    pub max_tags: usize,
    /// Probability of reusing a pooled tag instead of minting a new one.
    pub tag_density: f64,
    /// When set every file gets at least one tag.
    pub untagged_files_disallowed: bool,
    /// Directory holding fixtures and their ledgers.
    pub root: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            depth: DEFAULT_DEPTH,
            branch_factor: DEFAULT_BRANCH_FACTOR,
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_tags: DEFAULT_MAX_TAGS,
            tag_density: DEFAULT_TAG_DENSITY,
            untagged_files_disallowed: false,
            root: PathBuf::from(DEFAULT_TEST_ROOT),
        }
    }
}

impl GeneratorConfig {
    pub fn min_tags(&self) -> usize {
        usize::from(self.untagged_files_disallowed)
    }

    /// Rejects parameter combinations no run could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.branch_factor == 0 {
            return Err(GenerateError::invalid(
                "branch_factor",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.tag_density) {
            return Err(GenerateError::invalid(
                "tag_density",
                format!("must lie in [0, 1], got {}", self.tag_density),
            ));
        }
        if self.max_tags < self.min_tags() {
            return Err(GenerateError::invalid(
                "max_tags",
                format!(
                    "is {} but untagged files are disallowed, so at least {} tag is required",
                    self.max_tags,
                    self.min_tags()
                ),
            ));
        }
        if self.root.as_os_str().is_empty() {
            return Err(GenerateError::invalid("root", "must not be empty"));
        }
        Ok(())
    }
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub quiet: bool,
    pub generator: GeneratorConfig,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Self::from(Cli::parse())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            name: cli.name,
            quiet: cli.quiet,
            generator: GeneratorConfig {
                seed: cli.seed,
                depth: cli.depth,
                branch_factor: cli.branch_factor,
                max_files: cli.max_files,
                max_file_size: cli.max_file_size,
                max_tags: cli.max_tags,
                tag_density: cli.tag_density,
                untagged_files_disallowed: cli.untagged_files_disallowed,
                root: cli.root,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_tags(), 0);
    }

    #[test]
    fn zero_max_tags_conflicts_with_disallowing_untagged_files() {
        let config = GeneratorConfig {
            max_tags: 0,
            untagged_files_disallowed: true,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidConfiguration {
                parameter: "max_tags",
                ..
            }
        ));

        let allowed = GeneratorConfig {
            max_tags: 0,
            ..GeneratorConfig::default()
        };
        assert!(allowed.validate().is_ok());
    }

    #[test]
    fn density_must_be_a_probability() {
        for density in [-0.1, 1.5, f64::NAN] {
            let config = GeneratorConfig {
                tag_density: density,
                ..GeneratorConfig::default()
            };
            assert!(config.validate().is_err(), "{density} accepted");
        }
    }

    #[test]
    fn branch_factor_must_allow_a_child() {
        let config = GeneratorConfig {
            branch_factor: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn cli_maps_onto_generator_config() {
        let cli = Cli::parse_from([
            "fixture-forge",
            "-n",
            "demo",
            "--seed",
            "9",
            "--tag-density",
            "1.0",
            "--untagged-files-disallowed",
        ]);
        let config = Config::from(cli);
        assert_eq!(config.name, "demo");
        assert_eq!(config.generator.seed, Some(9));
        assert_eq!(config.generator.tag_density, 1.0);
        assert_eq!(config.generator.min_tags(), 1);
        assert_eq!(config.generator.depth, DEFAULT_DEPTH);
    }
}
