//! Run configuration: built-in defaults, optional JSON file, `--key=value` flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SieveError};

/// Largest sieve bound accepted for `z_max` and `disturbance_q_max`.
/// The sieve holds one flag byte per integer up to the bound.
pub const MAX_SIEVE_BOUND: u64 = 1 << 32;

/// Bounds and output destinations of one inverse sieve run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    /// Largest prime z tested.
    pub z_max: u64,
    /// Raw solutions are searched for 1 <= n <= n_search_max.
    pub n_search_max: u64,
    /// Forward orbit steps evaluated per canonical seed.
    pub steps_per_seed: u32,
    /// Largest prime q considered as a disturbance prime. Values below 5
    /// leave the disturbance set empty and switch that filter off.
    pub disturbance_q_max: u64,
    /// Survivors stream destination.
    pub survivors_path: PathBuf,
    /// Surface stream destination.
    pub surface_path: PathBuf,
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            z_max: 1000,
            n_search_max: 1000,
            steps_per_seed: 10,
            disturbance_q_max: 1000,
            survivors_path: PathBuf::from("inverse_sieve_survivors.csv"),
            surface_path: PathBuf::from("surface_F.csv"),
        }
    }
}

impl SieveConfig {
    /// Load a (possibly partial) JSON config; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SieveError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| SieveError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a config from command-line arguments (program name excluded).
    ///
    /// `--config=<file>` is applied first, then the individual flags
    /// override it. Unknown arguments are ignored.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = match flag_value(args, "--config=") {
            Some(path) => SieveConfig::from_json_file(path)?,
            None => SieveConfig::default(),
        };

        if let Some(v) = parse_flag::<u64>(args, "--z-max=")? {
            config.z_max = v;
        }
        if let Some(v) = parse_flag::<u64>(args, "--n-max=")? {
            config.n_search_max = v;
        }
        if let Some(v) = parse_flag::<u32>(args, "--steps=")? {
            config.steps_per_seed = v;
        }
        if let Some(v) = parse_flag::<u64>(args, "--q-max=")? {
            config.disturbance_q_max = v;
        }
        if let Some(v) = flag_value(args, "--survivors=") {
            config.survivors_path = PathBuf::from(v);
        }
        if let Some(v) = flag_value(args, "--surface=") {
            config.surface_path = PathBuf::from(v);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.z_max > MAX_SIEVE_BOUND {
            return Err(SieveError::Config(format!(
                "z_max = {} exceeds the sieve bound {}",
                self.z_max, MAX_SIEVE_BOUND
            )));
        }
        if self.disturbance_q_max > MAX_SIEVE_BOUND {
            return Err(SieveError::Config(format!(
                "disturbance_q_max = {} exceeds the sieve bound {}",
                self.disturbance_q_max, MAX_SIEVE_BOUND
            )));
        }
        if self.survivors_path == self.surface_path {
            return Err(SieveError::Config(format!(
                "survivors and surface streams share the destination {}",
                self.survivors_path.display()
            )));
        }
        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], prefix: &str) -> Option<&'a str> {
    args.iter().rev().find_map(|a| a.strip_prefix(prefix))
}

fn parse_flag<T: std::str::FromStr>(args: &[String], prefix: &str) -> Result<Option<T>> {
    match flag_value(args, prefix) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            SieveError::Config(format!("cannot parse {}{:?}", prefix, raw))
        }),
    }
}
