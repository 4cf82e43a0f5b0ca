//! Shift cipher and its frequency attack.

use crate::alphabet::{fold_case, shift_backward, shift_forward};
use crate::consts::ALPHABET_SIZE;
use crate::profile::LetterProfile;
use crate::transform::Mode;
use serde::Serialize;
use tracing::debug;

/// Lowercases `c` and rotates it forward if it is a letter.
#[inline(always)]
pub fn encrypt_char(c: char, shift: usize) -> char {
    shift_forward(fold_case(c), shift)
}

/// Lowercases `c` and rotates it backward if it is a letter.
#[inline(always)]
pub fn decrypt_char(c: char, shift: usize) -> char {
    shift_backward(fold_case(c), shift)
}

/// Lazy Caesar transform over a character stream.
///
/// Cloning the adapter (when the source iterator is `Clone`) restarts it
/// from the same position.
#[derive(Debug, Clone)]
pub struct CaesarStream<I> {
    inner: I,
    shift: usize,
    mode: Mode,
}

impl<I: Iterator<Item = char>> Iterator for CaesarStream<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.inner.next()?;
        Some(match self.mode {
            Mode::Encrypt => encrypt_char(c, self.shift),
            Mode::Decrypt => decrypt_char(c, self.shift),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub fn transform<I>(chars: I, shift: usize, mode: Mode) -> CaesarStream<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    CaesarStream {
        inner: chars.into_iter(),
        shift: shift % ALPHABET_SIZE,
        mode,
    }
}

pub fn encrypt(text: &str, shift: usize) -> String {
    transform(text.chars(), shift, Mode::Encrypt).collect()
}

pub fn decrypt(text: &str, shift: usize) -> String {
    transform(text.chars(), shift, Mode::Decrypt).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviationScore {
    pub shift: usize,
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaesarAnalysis {
    pub best_shift: usize,
    /// Every shift, ascending by deviation, equal deviations by smaller shift.
    pub ranked: Vec<DeviationScore>,
}

/// Total absolute difference, in percentage points, between the reference
/// frequencies and the cipher frequencies read `shift` letters further on.
pub fn deviation(reference: &LetterProfile, cipher: &LetterProfile, shift: usize) -> f64 {
    (0..ALPHABET_SIZE)
        .map(|l| (reference.frequency(l) - cipher.frequency((l + shift) % ALPHABET_SIZE)).abs())
        .sum()
}

/// Scores all 26 shifts and picks the one whose shifted cipher distribution
/// deviates least from the reference.
///
/// An empty cipher profile has all-zero frequencies, so every shift scores the
/// sum of the reference frequencies and shift 0 wins.
pub fn crypt_analyse(reference: &LetterProfile, cipher: &LetterProfile) -> CaesarAnalysis {
    let mut ranked: Vec<DeviationScore> = (0..ALPHABET_SIZE)
        .map(|shift| DeviationScore {
            shift,
            deviation: deviation(reference, cipher, shift),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.deviation
            .total_cmp(&b.deviation)
            .then(a.shift.cmp(&b.shift))
    });

    let best_shift = ranked[0].shift;
    debug!(
        "Caesar analysis: best shift {} (deviation {:.2})",
        best_shift, ranked[0].deviation
    );

    CaesarAnalysis { best_shift, ranked }
}
