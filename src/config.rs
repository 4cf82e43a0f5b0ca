use crate::consts::{KEY_TOLERANCE, MAX_FACTOR, MAX_KEY_LENGTH, MIN_FACTOR, MIN_KEY_LENGTH};
use crate::error::{CfResult, CipherError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub kasiski: KasiskiParams,
    #[command(flatten)]
    #[serde(default)]
    pub friedman: FriedmanParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KasiskiParams {
    /// Shortest repeated fragment and smallest divisor examined
    #[arg(long, default_value_t = MIN_FACTOR)]
    pub kasiski_min_factor: usize,
    /// Longest repeated fragment and largest divisor examined
    #[arg(long, default_value_t = MAX_FACTOR)]
    pub kasiski_max_factor: usize,
    /// Percentage points below the best divisor still reported as candidates
    #[arg(long, default_value_t = KEY_TOLERANCE)]
    pub key_tolerance: f64,
}

impl Default for KasiskiParams {
    fn default() -> Self {
        Self {
            kasiski_min_factor: MIN_FACTOR,
            kasiski_max_factor: MAX_FACTOR,
            key_tolerance: KEY_TOLERANCE,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FriedmanParams {
    #[arg(long, default_value_t = MIN_KEY_LENGTH)]
    pub friedman_min_length: usize,
    #[arg(long, default_value_t = MAX_KEY_LENGTH)]
    pub friedman_max_length: usize,
}

impl Default for FriedmanParams {
    fn default() -> Self {
        Self {
            friedman_min_length: MIN_KEY_LENGTH,
            friedman_max_length: MAX_KEY_LENGTH,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path).map_err(CipherError::SourceRead)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies over only the values the user typed on the command line,
    /// leaving file-provided values in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(kasiski.kasiski_min_factor);
        update_if_present!(kasiski.kasiski_max_factor);
        update_if_present!(kasiski.key_tolerance);

        update_if_present!(friedman.friedman_min_length);
        update_if_present!(friedman.friedman_max_length);
    }

    pub fn validate(&self) -> CfResult<()> {
        let k = &self.kasiski;
        if k.kasiski_min_factor < 1 || k.kasiski_max_factor < k.kasiski_min_factor {
            return Err(CipherError::Config(format!(
                "Kasiski factor range [{}, {}] is invalid",
                k.kasiski_min_factor, k.kasiski_max_factor
            )));
        }
        if !(k.key_tolerance.is_finite() && k.key_tolerance >= 0.0) {
            return Err(CipherError::Config(format!(
                "Key tolerance must be a non-negative number, got {}",
                k.key_tolerance
            )));
        }

        let f = &self.friedman;
        if f.friedman_min_length < 1 || f.friedman_max_length < f.friedman_min_length {
            return Err(CipherError::Config(format!(
                "Friedman length range [{}, {}] is invalid",
                f.friedman_min_length, f.friedman_max_length
            )));
        }
        Ok(())
    }
}
