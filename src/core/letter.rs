//! Letters and letter sets
//!
//! A `LetterSet` is a 26-bit bitset over A-Z, so membership, insertion and
//! removal are single bit operations and the size is a popcount.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// One uppercase letter A-Z, stored as its alphabet index (0-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from an ASCII byte (either case)
    ///
    /// Returns `None` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Letter;
    ///
    /// assert_eq!(Letter::from_ascii(b'e'), Letter::from_ascii(b'E'));
    /// assert!(Letter::from_ascii(b'3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A'..=b'Z' => Some(Self(byte - b'A')),
            b'a'..=b'z' => Some(Self(byte - b'a')),
            _ => None,
        }
    }

    /// Create a letter from a char (either case)
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_ascii)
    }

    /// Uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn to_ascii(self) -> u8 {
        b'A' + self.0
    }

    /// Uppercase char
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    const fn bit(self) -> u32 {
        1 << self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Set of letters as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const FULL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// Set containing exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: Letter) -> Self {
        Self(letter.bit())
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// Whether every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters not in the set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL.0)
    }

    #[inline]
    pub fn insert(&mut self, letter: Letter) {
        self.0 |= letter.bit();
    }

    #[inline]
    pub fn remove(&mut self, letter: Letter) {
        self.0 &= !letter.bit();
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8)
            .map(Letter)
            .filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Letters concatenated alphabetically, e.g. `AEL`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
