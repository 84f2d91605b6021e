//! codecs/classical.rs
//! Letter ciphers: ROT13, Caesar, Atbash and a fixed-key substitution.
//!
//! Only ASCII letters are transformed; every other character passes through.

use crate::constants::SUBSTITUTION_KEY;

#[inline]
fn shift_letter(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    (((c as u8 - base + shift % 26) % 26) + base) as char
}

pub fn caesar_encode(text: &str, shift: u8) -> String {
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

pub fn caesar_decode(text: &str, shift: u8) -> String {
    caesar_encode(text, 26 - shift % 26)
}

/// ROT13; its own inverse.
pub fn rot13(text: &str) -> String {
    caesar_encode(text, 13)
}

/// Atbash (`a<->z`, `A<->Z`); its own inverse.
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
            'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
            _ => c,
        })
        .collect()
}

/// Fixed-permutation substitution.
///
/// Input is lowercased first, so the original case cannot be recovered by
/// `substitution_decode`. Non-ASCII lowercase mappings (e.g. `İ`) may change
/// length; only `a..=z` is substituted afterwards.
pub fn substitution_encode(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' => SUBSTITUTION_KEY[(c as u8 - b'a') as usize] as char,
            _ => c,
        })
        .collect()
}

pub fn substitution_decode(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            SUBSTITUTION_KEY
                .iter()
                .position(|&k| k as char == c)
                .map(|i| (b'a' + i as u8) as char)
                .unwrap_or(c)
        })
        .collect()
}
