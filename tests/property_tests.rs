use cipherforge::caesar;
use cipherforge::kasiski::{compute_distances, find_repeats};
use cipherforge::profile::{Corpus, LetterProfile};
use cipherforge::vigenere::{self, break_down_cipher, Keyword};
use proptest::prelude::*;
use std::io::Cursor;

// --- STRATEGIES ---

prop_compose! {
    fn arb_keyword()(raw in "[a-zA-Z]{1,12}") -> Keyword {
        Keyword::new(&raw).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn letter_counts_never_exceed_total(text in "\\PC{0,200}") {
        let p = LetterProfile::from_text(&text);
        prop_assert!(p.letter_total() <= p.total());
        prop_assert_eq!(p.total(), text.chars().count() as u64);

        let streamed = LetterProfile::from_reader(Cursor::new(text.as_bytes())).unwrap();
        prop_assert_eq!(streamed.total(), streamed.letter_total());
        prop_assert_eq!(streamed.counts(), p.counts());
    }

    #[test]
    fn frequencies_sum_to_letter_share(text in "[a-zA-Z ,.]{1,200}") {
        let p = LetterProfile::from_text(&text);
        let sum: f64 = (0..26).map(|i| p.frequency(i)).sum();
        let expected = 100.0 * p.letter_total() as f64 / p.total() as f64;
        prop_assert!((sum - expected).abs() < 1e-6);
    }

    #[test]
    fn caesar_roundtrip(text in "[ -~\n]{0,200}", shift in 0usize..100) {
        let back = caesar::decrypt(&caesar::encrypt(&text, shift), shift);
        prop_assert_eq!(back, text.to_ascii_lowercase());
    }

    #[test]
    fn vigenere_roundtrip(text in "[ -~\n]{0,200}", key in arb_keyword()) {
        let back = vigenere::decrypt(&vigenere::encrypt(&text, &key), &key);
        prop_assert_eq!(back, text.to_ascii_lowercase());
    }

    #[test]
    fn vigenere_preserves_non_letters(text in "[ -~]{0,100}", key in arb_keyword()) {
        let cipher = vigenere::encrypt(&text, &key);
        prop_assert_eq!(cipher.chars().count(), text.chars().count());
        for (a, b) in text.chars().zip(cipher.chars()) {
            prop_assert_eq!(a.is_ascii_alphabetic(), b.is_ascii_alphabetic());
            if !a.is_ascii_alphabetic() {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn break_down_interleaves_back(text in "[a-z]{0,120}", k in 1usize..12) {
        let columns = break_down_cipher(&text, k).unwrap();
        prop_assert_eq!(columns.len(), k);

        let cols: Vec<Vec<char>> = columns.iter().map(|c| c.chars().collect()).collect();
        let rebuilt: String = (0..text.len()).map(|i| cols[i % k][i / k]).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn every_repeat_has_a_later_occurrence(text in "[ab \n]{0,60}") {
        let repeats = find_repeats(&text, 2, 10).unwrap();
        let distances = compute_distances(&text, &repeats).unwrap();
        prop_assert_eq!(distances.len(), repeats.len());
        for d in distances {
            prop_assert!(d.distance >= d.word.len());
        }
    }

    #[test]
    fn corpus_letters_match_profile(text in "\\PC{0,200}") {
        let corpus = Corpus::from_text(&text);
        prop_assert_eq!(corpus.letters.len() as u64, corpus.profile.total());
        prop_assert!(corpus.letters.chars().all(|c| c.is_ascii_lowercase()));
    }
}
