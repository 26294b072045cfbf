//! Keyboard-layout transliteration between ЙЦУКЕН and QWERTY.
//!
//! Fixes symbols typed with the wrong layout active: `ЫИУК` becomes `SBER` and
//! back. Lookups are made on the uppercased character; characters outside the
//! layout tables are kept as typed.
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

const LATIN_KEYS: &str = "QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>~";
const CYRILLIC_KEYS: &str = "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮЁ";

/// Extra punctuation keys recognized when going from Latin to Cyrillic.
const LATIN_EXTRA_KEYS: &str = ",.`'[];";
const CYRILLIC_EXTRA_KEYS: &str = "БЮЁЭХЪЖ";

lazy_static! {
    static ref CYRILLIC_WORD: Regex =
        Regex::new(r"^\p{sc=Cyrillic}+$").expect("Invalid regex pattern");

    static ref CYRILLIC_TO_LATIN: HashMap<char, char> =
        CYRILLIC_KEYS.chars().zip(LATIN_KEYS.chars()).collect();

    static ref LATIN_TO_CYRILLIC: HashMap<char, char> = LATIN_KEYS
        .chars()
        .chain(LATIN_EXTRA_KEYS.chars())
        .zip(CYRILLIC_KEYS.chars().chain(CYRILLIC_EXTRA_KEYS.chars()))
        .collect();
}

fn substitute(text: &str, table: &HashMap<char, char>) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(key), None) => table.get(&key).copied().unwrap_or(c),
                _ => c,
            }
        })
        .collect()
}

/// Maps text typed in the Cyrillic layout to the Latin keys under the same fingers.
///
/// Only text made entirely of Cyrillic characters is converted; anything else is
/// returned unchanged.
pub fn cyrillic_to_latin(text: &str) -> String {
    if CYRILLIC_WORD.is_match(text) {
        substitute(text, &CYRILLIC_TO_LATIN)
    } else {
        text.to_string()
    }
}

/// Maps text typed in the Latin layout to the Cyrillic keys under the same fingers.
///
/// Converted when the text contains at least one Latin letter.
pub fn latin_to_cyrillic(text: &str) -> String {
    if text.chars().any(|c| c.is_ascii_alphabetic()) {
        substitute(text, &LATIN_TO_CYRILLIC)
    } else {
        text.to_string()
    }
}
