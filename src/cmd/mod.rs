pub mod caesar;
pub mod crack;
pub mod friedman;
pub mod kasiski;
pub mod profile;
pub mod vigenere;

use cipherforge::config::Config;
use cipherforge::error::{CfResult, CipherError};
use cipherforge::profile::{Corpus, LetterProfile};
use clap::ArgMatches;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Settings shared by every subcommand, resolved once in `main`.
pub struct Context {
    pub reference: LetterProfile,
    pub config_path: Option<String>,
    pub json: bool,
}

impl Context {
    /// Applies the JSON config file (if any) under the subcommand's explicit CLI values.
    pub fn resolve_config(&self, cli: &Config, matches: &ArgMatches) -> CfResult<Config> {
        let config = match &self.config_path {
            Some(path) => {
                info!("⚙️  Loading Config from: {}", path);
                let mut file_config = Config::load_from_file(path)?;
                file_config.merge_from_cli(cli, matches);
                file_config
            }
            None => cli.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn open_input<P: AsRef<Path>>(path: P) -> CfResult<File> {
    File::open(path).map_err(CipherError::SourceRead)
}

pub fn create_output<P: AsRef<Path>>(path: P) -> CfResult<File> {
    File::create(path).map_err(CipherError::SinkWrite)
}

/// Loads a ciphertext file reduced to lowercase letters.
pub fn load_cipher_letters(path: &str) -> CfResult<Corpus> {
    info!("📂 Loading Ciphertext: {}", path);
    let corpus = Corpus::from_reader(open_input(path)?)?;
    info!("Total number of letters: {}", corpus.profile.total());
    Ok(corpus)
}
