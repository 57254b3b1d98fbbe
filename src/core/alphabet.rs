//! The fixed uppercase alphabet
//!
//! Letters are handled as ASCII bytes throughout the crate. Every letter that
//! reaches the model or the pipeline is a member of [`ALPHABET`].

/// The 26 uppercase letters, in order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Position of an uppercase letter in the alphabet
///
/// Returns `None` for anything outside `A..=Z`.
///
/// # Examples
/// ```
/// use wordgame_suggester::core::letter_index;
///
/// assert_eq!(letter_index(b'A'), Some(0));
/// assert_eq!(letter_index(b'Z'), Some(25));
/// assert_eq!(letter_index(b'a'), None);
/// ```
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Check that every byte of `text` is an alphabet letter
#[inline]
#[must_use]
pub fn is_alphabet_word(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_uppercase())
}

/// Enumerate every string of exactly `len` alphabet letters
///
/// Yields `26^len` strings in lexicographic order. `len == 0` yields the
/// single empty string.
pub fn contexts_of_length(len: usize) -> impl Iterator<Item = String> {
    let total = ALPHABET_LEN.pow(len as u32);
    (0..total).map(move |mut n| {
        let mut buf = vec![b'A'; len];
        for slot in buf.iter_mut().rev() {
            *slot = ALPHABET[n % ALPHABET_LEN];
            n /= ALPHABET_LEN;
        }
        // Only ASCII uppercase bytes were written
        String::from_utf8(buf).unwrap_or_default()
    })
}
