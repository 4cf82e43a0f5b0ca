use crate::consts::ALPHABET_SIZE;

/// Position of a lowercase ASCII letter in the alphabet, or `None` for anything else.
#[inline(always)]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Letter at the given alphabet position, wrapping out-of-range positions.
#[inline(always)]
pub fn index_letter(idx: usize) -> char {
    (b'a' + (idx % ALPHABET_SIZE) as u8) as char
}

/// Wraps an arbitrary code offset from 'a' back into 'a'..='z'.
pub fn normalize_letter(offset: i64) -> char {
    let wrapped = offset.rem_euclid(ALPHABET_SIZE as i64) as usize;
    index_letter(wrapped)
}

/// Rotates a lowercase letter forward by `shift` positions. Other characters pass through.
#[inline(always)]
pub fn shift_forward(c: char, shift: usize) -> char {
    match letter_index(c) {
        Some(idx) => index_letter(idx + shift % ALPHABET_SIZE),
        None => c,
    }
}

/// Rotates a lowercase letter backward by `shift` positions. Other characters pass through.
#[inline(always)]
pub fn shift_backward(c: char, shift: usize) -> char {
    match letter_index(c) {
        Some(idx) => normalize_letter(idx as i64 - (shift % ALPHABET_SIZE) as i64),
        None => c,
    }
}

/// Single-character lowercase fold. Characters whose lowercase form
/// expands to several code points are left untouched.
#[inline(always)]
pub fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// `amount / total * 100`, or 0 when there is nothing to divide by.
pub fn percentage(amount: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        amount as f64 / total as f64 * 100.0
    }
}
