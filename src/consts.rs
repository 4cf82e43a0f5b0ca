/// Number of letters in the Latin alphabet handled by every cipher here.
pub const ALPHABET_SIZE: usize = 26;

/// Smallest repeat length and divisor considered by the Kasiski examination.
pub const MIN_FACTOR: usize = 2;

/// Largest repeat length and divisor considered by the Kasiski examination.
/// Raising it allows longer keys to be detected.
pub const MAX_FACTOR: usize = 10;

/// Percentage band below the best divisor within which other divisors
/// are still reported as candidate key lengths.
pub const KEY_TOLERANCE: f64 = 15.0;

/// Key length range scanned by the Friedman test.
pub const MIN_KEY_LENGTH: usize = 2;
pub const MAX_KEY_LENGTH: usize = 10;

/// Scale of the built-in English reference: counts per this many letters.
pub const ENGLISH_SAMPLE_SIZE: u64 = 100_000;

/// Relative letter frequencies of English prose, in percent, 'a' through 'z'.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];
