//! Full Vigenère break: key length estimate, column split, per-column attack.

use crate::config::Config;
use crate::error::CfResult;
use crate::friedman::{self, FriedmanReport};
use crate::kasiski::{self, KasiskiReport};
use crate::profile::LetterProfile;
use crate::vigenere::{self, Keyword, VigenereAnalysis};
use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, ValueEnum, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum KeyLengthMethod {
    #[default]
    Friedman,
    Kasiski,
}

/// Progress notifications emitted while cracking.
#[derive(Debug, Clone, PartialEq)]
pub enum CrackEvent<'a> {
    KeyLengthEstimated {
        method: KeyLengthMethod,
        key_length: usize,
    },
    ColumnsBuilt {
        columns: &'a [String],
    },
    KeywordRecovered {
        keyword: &'a Keyword,
    },
}

/// Receives [`CrackEvent`]s. Implementations must not assume any timing
/// beyond the order the stages run in.
pub trait CrackObserver: Send + Sync {
    fn on_event(&self, event: &CrackEvent<'_>);
}

pub struct NoopObserver;

impl CrackObserver for NoopObserver {
    fn on_event(&self, _event: &CrackEvent<'_>) {}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackReport {
    pub method: KeyLengthMethod,
    pub key_length: usize,
    pub kasiski: Option<KasiskiReport>,
    pub friedman: Option<FriedmanReport>,
    pub analysis: VigenereAnalysis,
}

impl CrackReport {
    pub fn keyword(&self) -> &Keyword {
        &self.analysis.keyword
    }
}

/// Breaks a letters-only Vigenère ciphertext against `reference`.
pub fn crack(
    cipher_letters: &str,
    reference: &LetterProfile,
    method: KeyLengthMethod,
    config: &Config,
    observer: &dyn CrackObserver,
) -> CfResult<CrackReport> {
    config.validate()?;

    let (key_length, kasiski, friedman) = match method {
        KeyLengthMethod::Kasiski => {
            let report = kasiski::examine(cipher_letters, &config.kasiski)?;
            (report.best, Some(report), None)
        }
        KeyLengthMethod::Friedman => {
            let report = friedman::examine(
                cipher_letters,
                reference.index_of_coincidence(),
                &config.friedman,
            )?;
            (report.best, None, Some(report))
        }
    };
    observer.on_event(&CrackEvent::KeyLengthEstimated { method, key_length });

    let columns = vigenere::break_down_cipher(cipher_letters, key_length)?;
    observer.on_event(&CrackEvent::ColumnsBuilt { columns: &columns });

    let analysis = vigenere::crypt_analyse(reference, &columns)?;
    observer.on_event(&CrackEvent::KeywordRecovered {
        keyword: &analysis.keyword,
    });

    info!(
        "[{}] key length {} -> keyword '{}'",
        method, key_length, analysis.keyword
    );

    Ok(CrackReport {
        method,
        key_length,
        kasiski,
        friedman,
        analysis,
    })
}
