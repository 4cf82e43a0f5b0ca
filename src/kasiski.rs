//! Kasiski examination.
//!
//! Repeated fragments of a Vigenère ciphertext tend to sit a multiple of the key
//! length apart. The examination runs in four stages, each exposed on its own:
//!
//! 1. [`find_repeats`] collects fragments of `min..=max` characters that occur again later.
//! 2. [`compute_distances`] measures the gap from each first occurrence to the next one.
//! 3. [`factorize`] tallies, for every divisor in `min..=max`, how many gaps it divides.
//! 4. [`estimate_key_length`] / [`estimate_key_lengths`] rank the divisors.
//!
//! All offsets and distances are in characters (not bytes).

use crate::alphabet::percentage;
use crate::config::KasiskiParams;
use crate::error::{CfResult, CipherError};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatRecord {
    pub word: String,
    /// Character offset of the first occurrence.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceRecord {
    pub word: String,
    pub distance: usize,
}

/// How many distances each divisor in `min_factor..=max_factor` divides evenly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorTally {
    min_factor: usize,
    counts: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedFactor {
    pub divisor: usize,
    pub count: usize,
    /// Share of repeated words whose distance this divisor divides.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KasiskiReport {
    pub repeats: Vec<RepeatRecord>,
    pub distances: Vec<DistanceRecord>,
    pub tally: FactorTally,
    pub ranked: Vec<RankedFactor>,
    pub best: usize,
    pub candidates: Vec<usize>,
}

impl FactorTally {
    pub fn min_factor(&self) -> usize {
        self.min_factor
    }

    pub fn max_factor(&self) -> usize {
        self.min_factor + self.counts.len().saturating_sub(1)
    }

    /// Tally for `divisor`, or 0 outside the tallied range.
    pub fn count(&self, divisor: usize) -> usize {
        divisor
            .checked_sub(self.min_factor)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// `(divisor, count)` pairs from the largest divisor down.
    pub fn iter_desc(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .rev()
            .map(move |(i, &c)| (self.min_factor + i, c))
    }

    /// Divisors by descending count; equal counts keep the larger divisor first.
    pub fn ranked(&self, total_words: usize) -> Vec<RankedFactor> {
        let mut ranked: Vec<RankedFactor> = self
            .iter_desc()
            .map(|(divisor, count)| RankedFactor {
                divisor,
                count,
                percentage: percentage(count as u64, total_words as u64),
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(b.divisor.cmp(&a.divisor)));
        ranked
    }
}

// `\s` in the classic regex dialect: ASCII whitespace only.
#[inline(always)]
fn is_pattern_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

// Characters a `.` refuses to cross.
#[inline(always)]
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn check_range(min_len: usize, max_len: usize) -> CfResult<()> {
    if min_len == 0 {
        return Err(CipherError::InvalidKeyLength(min_len));
    }
    if max_len < min_len {
        return Err(CipherError::Config(format!(
            "Kasiski range [{}, {}] is empty",
            min_len, max_len
        )));
    }
    Ok(())
}

/// For each index, the first index at or after it where `stop` holds (or `len`).
fn next_stop(chars: &[char], stop: fn(char) -> bool) -> Vec<usize> {
    let mut table = vec![chars.len(); chars.len() + 1];
    for i in (0..chars.len()).rev() {
        table[i] = if stop(chars[i]) { i } else { table[i + 1] };
    }
    table
}

/// Finds every fragment of `min_len..=max_len` non-whitespace characters that
/// occurs again later on the same line, scanning left to right.
///
/// At each position the longest fragment with a later occurrence (starting
/// after the fragment ends) is taken and the scan resumes behind it; otherwise
/// the scan moves one character on. Each distinct fragment is recorded once,
/// with the offset where it was first taken.
pub fn find_repeats(text: &str, min_len: usize, max_len: usize) -> CfResult<Vec<RepeatRecord>> {
    check_range(min_len, max_len)?;

    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let run_end = next_stop(&chars, is_pattern_space);
    let line_end = next_stop(&chars, is_line_terminator);

    // Start offsets of every whitespace-free fragment, per length, ascending.
    let mut index: Vec<HashMap<&[char], Vec<usize>>> = vec![HashMap::new(); max_len - min_len + 1];
    for (slot, len) in index.iter_mut().zip(min_len..=max_len) {
        for start in 0..n.saturating_sub(len - 1) {
            if run_end[start] >= start + len {
                slot.entry(&chars[start..start + len])
                    .or_default()
                    .push(start);
            }
        }
    }

    let mut seen: HashSet<&[char]> = HashSet::new();
    let mut repeats = Vec::new();
    let mut pos = 0;

    while pos + min_len <= n {
        let longest = (run_end[pos] - pos).min(max_len);
        let matched = (min_len..=longest).rev().find(|&len| {
            let after = pos + len;
            let limit = line_end[after];
            index[len - min_len]
                .get(&chars[pos..after])
                .map(|starts| {
                    let i = starts.partition_point(|&s| s < after);
                    i < starts.len() && starts[i] < limit
                })
                .unwrap_or(false)
        });

        match matched {
            Some(len) => {
                let word = &chars[pos..pos + len];
                if seen.insert(word) {
                    repeats.push(RepeatRecord {
                        word: word.iter().collect(),
                        offset: pos,
                    });
                }
                pos += len;
            }
            None => pos += 1,
        }
    }

    debug!(
        "Found {} repeating words of length [{}, {}]",
        repeats.len(),
        min_len,
        max_len
    );
    Ok(repeats)
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Distance from each first occurrence to the next occurrence starting after it ends.
///
/// A record with no such occurrence in `text` is an invariant violation: the
/// records must come from [`find_repeats`] on the same text.
pub fn compute_distances(text: &str, repeats: &[RepeatRecord]) -> CfResult<Vec<DistanceRecord>> {
    let chars: Vec<char> = text.chars().collect();

    repeats
        .iter()
        .map(|rec| {
            let word: Vec<char> = rec.word.chars().collect();
            let next = find_from(&chars, &word, rec.offset + word.len()).ok_or_else(|| {
                CipherError::InvariantViolation(format!(
                    "repeat '{}' at offset {} has no later occurrence",
                    rec.word, rec.offset
                ))
            })?;
            Ok(DistanceRecord {
                word: rec.word.clone(),
                distance: next - rec.offset,
            })
        })
        .collect()
}

pub fn factorize(distances: &[DistanceRecord], min_factor: usize, max_factor: usize) -> FactorTally {
    let counts = (min_factor..=max_factor)
        .map(|d| distances.iter().filter(|r| r.distance % d == 0).count())
        .collect();
    FactorTally { min_factor, counts }
}

/// The divisor with the highest tally (larger divisor on ties).
pub fn estimate_key_length(tally: &FactorTally, total_words: usize) -> usize {
    match tally.ranked(total_words).first() {
        Some(best) => {
            debug!(
                "Most congruent divisor {} ({} words, {:.2} %)",
                best.divisor, best.count, best.percentage
            );
            best.divisor
        }
        None => tally.min_factor,
    }
}

/// Every divisor whose share of repeated words is within `tolerance`
/// percentage points of the best share, in ranking order.
///
/// Empty when no repeated words were found at all.
pub fn estimate_key_lengths(tally: &FactorTally, total_words: usize, tolerance: f64) -> Vec<usize> {
    if total_words == 0 {
        return Vec::new();
    }

    let ranked = tally.ranked(total_words);
    let mut best = 0.0;
    ranked
        .iter()
        .filter(|f| {
            if best == 0.0 {
                best = f.percentage;
            }
            best <= f.percentage + tolerance
        })
        .map(|f| f.divisor)
        .collect()
}

/// Runs all four stages and collects their intermediate results.
pub fn examine(text: &str, params: &KasiskiParams) -> CfResult<KasiskiReport> {
    let (min, max) = (params.kasiski_min_factor, params.kasiski_max_factor);

    let repeats = find_repeats(text, min, max)?;
    let distances = compute_distances(text, &repeats)?;
    let tally = factorize(&distances, min, max);
    let total_words = repeats.len();

    let ranked = tally.ranked(total_words);
    let best = estimate_key_length(&tally, total_words);
    let candidates = estimate_key_lengths(&tally, total_words, params.key_tolerance);

    info!(
        "Kasiski: {} repeats, best key length {}, candidates {:?}",
        total_words, best, candidates
    );

    Ok(KasiskiReport {
        repeats,
        distances,
        tally,
        ranked,
        best,
        candidates,
    })
}

/// Most congruent key length with the default parameters.
pub fn kasiski_test(text: &str) -> CfResult<usize> {
    examine(text, &KasiskiParams::default()).map(|r| r.best)
}
