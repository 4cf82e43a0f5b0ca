//! Letter frequency model shared by every analysis.
//!
//! A [`LetterProfile`] is a 26-slot histogram plus a running total. It is built
//! once from a text source and then only queried. Two construction modes exist
//! and they disagree on what `total` means:
//!
//! * [`LetterProfile::from_text`] sets `total` to the number of characters in the
//!   string, letters or not. Column streams handed to the cryptanalysis are built
//!   this way, so callers should pre-filter them to letters.
//! * [`LetterProfile::from_reader`] sets `total` to the number of letters counted.
//!
//! Frequencies and the index of coincidence divide by `total`, so the two modes
//! give different numbers for text containing non-letters.

use crate::alphabet::{fold_case, index_letter, letter_index, percentage};
use crate::consts::{ALPHABET_SIZE, ENGLISH_FREQUENCIES, ENGLISH_SAMPLE_SIZE};
use crate::error::{CfResult, CipherError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterProfile {
    counts: [u64; ALPHABET_SIZE],
    total: u64,
}

/// Row ordering for a frequency listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, ValueEnum, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisOrder {
    Alphabetical,
    #[default]
    ByFrequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub letter: char,
    pub count: u64,
    pub frequency: f64,
}

/// A profile together with the letters-only, lowercased text it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pub profile: LetterProfile,
    pub letters: String,
}

impl Default for LetterProfile {
    fn default() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            total: 0,
        }
    }
}

impl LetterProfile {
    /// Builds a profile from explicit counts. `total` becomes the sum of the counts.
    pub fn from_counts(counts: [u64; ALPHABET_SIZE]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Counts letters in `text`. The total is the character length of `text`,
    /// non-letters included.
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        let mut length = 0u64;
        for c in text.chars() {
            length += 1;
            if let Some(idx) = letter_index(fold_case(c)) {
                counts[idx] += 1;
            }
        }
        Self {
            counts,
            total: length,
        }
    }

    /// Counts letters read from a stream. The total is the number of letters counted.
    pub fn from_reader<R: Read>(reader: R) -> CfResult<Self> {
        scan_reader(reader, false).map(|(profile, _)| profile)
    }

    /// Loads a monogram count table: one `letter<TAB>count` pair per line, no header.
    /// Rows that are not a single letter with an integer count are skipped.
    pub fn from_counts_reader<R: Read>(reader: R) -> CfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut counts = [0u64; ALPHABET_SIZE];
        let mut skipped = 0usize;

        for result in rdr.records() {
            let rec = result?;
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }

            let key = rec[0].trim().to_ascii_lowercase();
            let mut chars = key.chars();
            let idx = match (chars.next(), chars.next()) {
                (Some(c), None) => letter_index(c),
                _ => None,
            };

            match (idx, rec[1].trim().parse::<u64>()) {
                (Some(i), Ok(count)) => counts[i] += count,
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} rows in letter count table", skipped);
        }

        Ok(Self::from_counts(counts))
    }

    /// Reference profile of English prose, scaled to counts per 100 000 letters.
    pub fn english() -> Self {
        let scale = ENGLISH_SAMPLE_SIZE as f64 / 100.0;
        let mut counts = [0u64; ALPHABET_SIZE];
        for (slot, pct) in counts.iter_mut().zip(ENGLISH_FREQUENCIES.iter()) {
            *slot = (pct * scale).round() as u64;
        }
        Self::from_counts(counts)
    }

    pub fn counts(&self) -> &[u64; ALPHABET_SIZE] {
        &self.counts
    }

    pub fn count(&self, idx: usize) -> u64 {
        self.counts[idx % ALPHABET_SIZE]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of the letter counts. Never exceeds [`total`](Self::total).
    pub fn letter_total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of letter `idx` in percent of `total`; 0 for an empty profile.
    pub fn frequency(&self, idx: usize) -> f64 {
        percentage(self.count(idx), self.total)
    }

    /// Sum of squared letter frequencies (as fractions).
    ///
    /// This is the plain sum-of-squares form without the `n(n-1)` sample
    /// correction. Key-length thresholds elsewhere are calibrated against it.
    pub fn index_of_coincidence(&self) -> f64 {
        (0..ALPHABET_SIZE)
            .map(|i| {
                let f = self.frequency(i) / 100.0;
                f * f
            })
            .sum()
    }

    pub fn entries(&self, order: AnalysisOrder) -> Vec<FrequencyEntry> {
        let mut rows: Vec<FrequencyEntry> = (0..ALPHABET_SIZE)
            .map(|i| FrequencyEntry {
                letter: index_letter(i),
                count: self.counts[i],
                frequency: self.frequency(i),
            })
            .collect();

        if order == AnalysisOrder::ByFrequency {
            // Stable: equal counts stay in alphabetical order.
            rows.sort_by(|a, b| b.count.cmp(&a.count));
        }
        rows
    }
}

impl Corpus {
    /// Reads a stream, counting letters and keeping them (lowercased) in order.
    pub fn from_reader<R: Read>(reader: R) -> CfResult<Self> {
        let (profile, letters) = scan_reader(reader, true)?;
        Ok(Self {
            profile,
            letters: letters.unwrap_or_default(),
        })
    }

    /// Same as [`Corpus::from_reader`] for in-memory text.
    pub fn from_text(text: &str) -> Self {
        let letters: String = text
            .chars()
            .map(fold_case)
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        let mut counts = [0u64; ALPHABET_SIZE];
        for c in letters.chars() {
            if let Some(idx) = letter_index(c) {
                counts[idx] += 1;
            }
        }
        Self {
            profile: LetterProfile::from_counts(counts),
            letters,
        }
    }
}

fn scan_reader<R: Read>(reader: R, keep: bool) -> CfResult<(LetterProfile, Option<String>)> {
    let mut reader = BufReader::new(reader);
    let mut counts = [0u64; ALPHABET_SIZE];
    let mut kept = keep.then(String::new);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(CipherError::SourceRead)?;
        if n == 0 {
            break;
        }

        // Undecodable bytes become U+FFFD and are skipped like any other non-letter.
        for c in String::from_utf8_lossy(&buf).chars().map(fold_case) {
            if let Some(idx) = letter_index(c) {
                counts[idx] += 1;
                if let Some(text) = kept.as_mut() {
                    text.push(c);
                }
            }
        }
    }

    let profile = LetterProfile::from_counts(counts);
    debug!("Scanned stream: {} letters", profile.total());
    Ok((profile, kept))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_reference_is_roughly_normalized() {
        let english = LetterProfile::english();
        assert!((english.total() as i64 - ENGLISH_SAMPLE_SIZE as i64).abs() < 50);
        let ioc = english.index_of_coincidence();
        assert!(ioc > 0.060 && ioc < 0.070, "ioc = {}", ioc);
    }

    #[test]
    fn test_empty_profile_degenerates_to_zero() {
        let p = LetterProfile::from_text("");
        assert_eq!(p.frequency(0), 0.0);
        assert_eq!(p.index_of_coincidence(), 0.0);
    }
}
