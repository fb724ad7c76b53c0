//! Player configuration: TOML file plus command-line overrides

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use checkers_core::{Engine, EvalConfig, SearchLimits};
use minimax_engine::MiniMaxEngine;
use random_engine::RandomEngine;
use serde::Deserialize;
use tracing::warn;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CHECKERS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Minimax,
    Random,
}

impl FromStr for EngineKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minimax" | "mm" => Ok(EngineKind::Minimax),
            "random" | "rand" => Ok(EngineKind::Random),
            _ => Err(anyhow!("Unknown engine: {}", s)),
        }
    }
}

/// Settings for one run of the player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub engine: EngineKind,
    /// Plies searched by the minimax engine
    pub depth: u8,
    /// Optional wall-clock budget per move
    pub move_time_ms: Option<u64>,
    /// Enable the centroid-distance bonus in evaluation
    pub positional_term: bool,
    /// Seed for the random engine
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Minimax,
            depth: 5,
            move_time_ms: None,
            positional_term: false,
            seed: None,
        }
    }
}

impl PlayerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PlayerConfig = toml::from_str(text).context("Failed to parse config")?;
        if config.depth == 0 {
            bail!("depth must be at least 1");
        }
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("In {}", path.display()))
    }

    /// File named by the arguments or the environment, then argument overrides.
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let path = args
            .config_path
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let mut config = match path {
            Some(p) => Self::load(&p)?,
            None => Self::default(),
        };
        config.apply(args);
        Ok(config)
    }

    pub fn apply(&mut self, args: &CliArgs) {
        if let Some(depth) = args.depth {
            self.depth = depth;
        }
        if let Some(engine) = args.engine {
            self.engine = engine;
        }
    }

    pub fn search_limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }

    pub fn build_engine(&self) -> Box<dyn Engine> {
        match self.engine {
            EngineKind::Minimax => Box::new(MiniMaxEngine::with_eval(EvalConfig {
                positional_term: self.positional_term,
            })),
            EngineKind::Random => match self.seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
        }
    }
}

/// Command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub depth: Option<u8>,
    pub engine: Option<EngineKind>,
    pub help: bool,
}

impl CliArgs {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut out = CliArgs::default();
        let mut i = 0;
        while i < args.len() {
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("{} requires a value", args[i]))
            };
            match args[i].as_str() {
                "--config" | "-c" => {
                    out.config_path = Some(PathBuf::from(value()?));
                    i += 1;
                }
                "--depth" | "-d" => {
                    let raw = value()?;
                    let depth: u8 = raw
                        .parse()
                        .with_context(|| format!("Invalid depth: {}", raw))?;
                    if depth == 0 {
                        bail!("depth must be at least 1");
                    }
                    out.depth = Some(depth);
                    i += 1;
                }
                "--engine" | "-e" => {
                    out.engine = Some(value()?.parse()?);
                    i += 1;
                }
                "--help" | "-h" => out.help = true,
                other => bail!("Unknown argument: {}", other),
            }
            i += 1;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
