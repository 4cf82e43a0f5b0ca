//! Repeating-keyword cipher and its column-wise attack.

use crate::alphabet::{fold_case, index_letter, letter_index, shift_backward, shift_forward};
use crate::caesar::{self, CaesarAnalysis};
use crate::consts::ALPHABET_SIZE;
use crate::error::{CfResult, CipherError};
use crate::profile::LetterProfile;
use crate::transform::Mode;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Non-empty lowercase keyword. Letter `k` stands for a shift of `k - 'a'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Accepts ASCII letters of either case and lowercases them.
    pub fn new(raw: &str) -> CfResult<Self> {
        if raw.is_empty() {
            return Err(CipherError::InvalidKeyword("keyword is empty".to_string()));
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(CipherError::InvalidKeyword(format!(
                "'{}' contains non-letter character {:?}",
                raw, bad
            )));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn from_shifts(shifts: &[usize]) -> CfResult<Self> {
        if shifts.is_empty() {
            return Err(CipherError::InvalidKeyword("no shifts given".to_string()));
        }
        Ok(Self(shifts.iter().map(|&s| index_letter(s)).collect()))
    }

    pub fn random(rng: &mut fastrand::Rng, len: usize) -> CfResult<Self> {
        if len == 0 {
            return Err(CipherError::InvalidKeyword(
                "keyword length must be at least 1".to_string(),
            ));
        }
        Ok(Self((0..len).map(|_| rng.lowercase()).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shifts(&self) -> Vec<usize> {
        self.0.chars().filter_map(letter_index).collect()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Keyword {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::new(s)
    }
}

/// Lazy Vigenère transform over a character stream.
///
/// Only letters advance the key position; everything else passes through
/// unchanged. All output is lowercase.
#[derive(Debug, Clone)]
pub struct VigenereStream<I> {
    inner: I,
    shifts: Vec<usize>,
    mode: Mode,
    pos: usize,
}

impl<I> VigenereStream<I> {
    /// Number of letters transformed so far, counting from the starting position.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<I: Iterator<Item = char>> Iterator for VigenereStream<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = fold_case(self.inner.next()?);
        if letter_index(c).is_none() {
            return Some(c);
        }

        let shift = self.shifts[self.pos % self.shifts.len()];
        self.pos += 1;
        Some(match self.mode {
            Mode::Encrypt => shift_forward(c, shift),
            Mode::Decrypt => shift_backward(c, shift),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub fn transform<I>(chars: I, key: &Keyword, mode: Mode) -> VigenereStream<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    transform_from(chars, key, mode, 0)
}

/// Like [`transform`], resuming at key position `start` (letters already consumed).
pub fn transform_from<I>(chars: I, key: &Keyword, mode: Mode, start: usize) -> VigenereStream<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    VigenereStream {
        inner: chars.into_iter(),
        shifts: key.shifts(),
        mode,
        pos: start,
    }
}

pub fn encrypt(text: &str, key: &Keyword) -> String {
    transform(text.chars(), key, Mode::Encrypt).collect()
}

pub fn decrypt(text: &str, key: &Keyword) -> String {
    transform(text.chars(), key, Mode::Decrypt).collect()
}

/// Deals every character of `cipher` into `key_length` columns by position.
///
/// Unlike the transform, non-letters are dealt too and do occupy a position,
/// so the ciphertext should be reduced to letters first.
pub fn break_down_cipher(cipher: &str, key_length: usize) -> CfResult<Vec<String>> {
    if key_length == 0 {
        return Err(CipherError::InvalidKeyLength(key_length));
    }

    let mut columns = vec![String::new(); key_length];
    for (i, c) in cipher.chars().enumerate() {
        columns[i % key_length].push(c);
    }
    Ok(columns)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VigenereAnalysis {
    pub keyword: Keyword,
    pub shifts: Vec<usize>,
    pub columns: Vec<CaesarAnalysis>,
}

/// Recovers the keyword by attacking each column as a Caesar cipher.
pub fn crypt_analyse<S>(reference: &LetterProfile, columns: &[S]) -> CfResult<VigenereAnalysis>
where
    S: AsRef<str> + Sync,
{
    if columns.is_empty() {
        return Err(CipherError::InvalidKeyLength(0));
    }

    let analyses: Vec<CaesarAnalysis> = columns
        .par_iter()
        .map(|column| {
            let profile = LetterProfile::from_text(column.as_ref());
            caesar::crypt_analyse(reference, &profile)
        })
        .collect();

    let shifts: Vec<usize> = analyses.iter().map(|a| a.best_shift).collect();
    let keyword = shifts
        .iter()
        .fold(String::with_capacity(shifts.len()), |mut key, &s| {
            key.push(index_letter(s % ALPHABET_SIZE));
            key
        });

    debug!("Shift values used: {:?}", shifts);
    info!("Recovered keyword '{}'", keyword);

    Ok(VigenereAnalysis {
        keyword: Keyword::new(&keyword)?,
        shifts,
        columns: analyses,
    })
}
