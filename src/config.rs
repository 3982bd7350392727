use crate::error::{TgResult, TienGowError};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do when a hand or known card names a tile with no copy left in
/// the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolPolicy {
    /// Skip the removal; only a warning is logged.
    #[default]
    Lenient,
    /// Fail with `PoolUnderflow`.
    Strict,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    #[arg(long, value_enum, default_value_t = PoolPolicy::Lenient)]
    pub pool_policy: PoolPolicy,

    /// Evaluate the hand's own arrangements on the rayon pool.
    #[arg(long = "no-parallel", action = clap::ArgAction::SetFalse)]
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pool_policy: PoolPolicy::Lenient,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TgResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TienGowError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays values the user typed on the command line onto a config
    /// loaded from a file. Defaults filled in by clap do not override.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(pool_policy, "pool_policy");
        update_if_present!(parallel, "parallel");
    }

    pub fn strict() -> Self {
        Self {
            pool_policy: PoolPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: AnalysisConfig = serde_json::from_str(r#"{"pool_policy":"strict"}"#).unwrap();
        assert_eq!(cfg.pool_policy, PoolPolicy::Strict);
        assert!(cfg.parallel);
    }
}
