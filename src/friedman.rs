//! Friedman's key length estimate from averaged indices of coincidence.

use crate::config::FriedmanParams;
use crate::error::{CfResult, CipherError};
use crate::profile::LetterProfile;
use crate::vigenere::break_down_cipher;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthScore {
    pub key_length: usize,
    pub average_ioc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriedmanReport {
    pub reference_ioc: f64,
    /// One entry per candidate length, ascending.
    pub averages: Vec<LengthScore>,
    pub best: usize,
}

/// Mean index of coincidence over the `key_length` columns of `cipher`.
pub fn average_ioc(cipher: &str, key_length: usize) -> CfResult<f64> {
    let columns = break_down_cipher(cipher, key_length)?;
    let sum: f64 = columns
        .iter()
        .map(|c| LetterProfile::from_text(c).index_of_coincidence())
        .sum();
    Ok(sum / key_length as f64)
}

/// Picks the key length in `min_len..=max_len` whose average column IoC is
/// closest to `reference_ioc`. The first (shortest) length wins ties.
///
/// `cipher` should be non-empty and letters only; an empty ciphertext averages
/// to 0 everywhere and the shortest length is returned.
pub fn estimate(
    cipher: &str,
    reference_ioc: f64,
    min_len: usize,
    max_len: usize,
) -> CfResult<FriedmanReport> {
    if min_len == 0 {
        return Err(CipherError::InvalidKeyLength(min_len));
    }
    if max_len < min_len {
        return Err(CipherError::Config(format!(
            "Friedman range [{}, {}] is empty",
            min_len, max_len
        )));
    }

    let averages: Vec<LengthScore> = (min_len..=max_len)
        .into_par_iter()
        .map(|key_length| {
            average_ioc(cipher, key_length).map(|average_ioc| LengthScore {
                key_length,
                average_ioc,
            })
        })
        .collect::<CfResult<_>>()?;

    for s in &averages {
        debug!(
            "Key length: {:2} | Avg Index of Coincidence: {:.6}",
            s.key_length, s.average_ioc
        );
    }

    let best = averages
        .iter()
        .fold(None::<&LengthScore>, |closest, s| match closest {
            Some(c) if (c.average_ioc - reference_ioc).abs() <= (s.average_ioc - reference_ioc).abs() => {
                Some(c)
            }
            _ => Some(s),
        })
        .map(|s| s.key_length)
        .unwrap_or(min_len);

    info!("Friedman: most congruent key length {}", best);

    Ok(FriedmanReport {
        reference_ioc,
        averages,
        best,
    })
}

pub fn examine(cipher: &str, reference_ioc: f64, params: &FriedmanParams) -> CfResult<FriedmanReport> {
    estimate(
        cipher,
        reference_ioc,
        params.friedman_min_length,
        params.friedman_max_length,
    )
}

/// Most congruent key length with the default length range.
pub fn friedman_test(cipher: &str, reference_ioc: f64) -> CfResult<usize> {
    examine(cipher, reference_ioc, &FriedmanParams::default()).map(|r| r.best)
}
