//! Sequence analysis.
//!
//! This module holds the whole analysis core:
//! - Alphabet validation (A, C, G, T, case-insensitive)
//! - Per-base counting
//! - GC-content percentage
//!
//! All functions are pure. `count_bases` and `gc_content` do not validate
//! their input; callers check with `is_valid_sequence` (or go through
//! [`Analysis::from_sequence`], which does both steps in order).

use std::fmt;

use thiserror::Error;

/// One of the four DNA nucleotides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All bases, in report order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Maps a byte to a base, ignoring case.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    /// Maps a character to a base, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_byte(c as u8)
        } else {
            None
        }
    }

    /// Uppercase symbol for this base.
    pub fn symbol(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors that can occur during analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid DNA sequence: unexpected '{character}' at position {position}. Only A, C, G, and T are allowed.")]
    InvalidSequence { character: char, position: usize },
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Occurrence counts for each of the four bases.
///
/// Every base is always present, with a zero count when it does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseCounts {
    counts: [usize; 4],
}

impl BaseCounts {
    /// Builds counts from explicit values.
    pub fn new(a: usize, c: usize, g: usize, t: usize) -> Self {
        Self {
            counts: [a, c, g, t],
        }
    }

    /// Returns the count for one base.
    pub fn get(&self, base: Base) -> usize {
        self.counts[base.index()]
    }

    /// Iterates over `(base, count)` pairs in A, C, G, T order.
    pub fn iter(&self) -> impl Iterator<Item = (Base, usize)> + '_ {
        Base::ALL.iter().map(move |&b| (b, self.get(b)))
    }

    /// Sum of all four counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of G and C bases.
    pub fn gc(&self) -> usize {
        self.get(Base::G) + self.get(Base::C)
    }

    fn add(&mut self, base: Base) {
        self.counts[base.index()] += 1;
    }
}

/// Returns true if every character of `input` is A, C, G or T (any case).
///
/// The empty string is valid.
pub fn is_valid_sequence(input: &str) -> bool {
    validate_sequence(input).is_ok()
}

/// Checks `input` against the alphabet and reports the first offending
/// character with its 1-based position.
pub fn validate_sequence(input: &str) -> AnalysisResult<()> {
    match input
        .chars()
        .enumerate()
        .find(|(_, c)| Base::from_char(*c).is_none())
    {
        Some((idx, character)) => Err(AnalysisError::InvalidSequence {
            character,
            position: idx + 1,
        }),
        None => Ok(()),
    }
}

/// Counts each base in `input`, ignoring case.
///
/// Characters outside the alphabet are not counted under any base.
pub fn count_bases(input: &str) -> BaseCounts {
    let mut counts = BaseCounts::default();
    for base in input.bytes().filter_map(Base::from_byte) {
        counts.add(base);
    }
    counts
}

/// GC content of `input` as a percentage, `0.0` for an empty input.
///
/// The denominator is the character count of `input` as given, so
/// characters outside the alphabet lower the result. Validate first.
pub fn gc_content(input: &str) -> f64 {
    let length = input.chars().count();
    if length == 0 {
        return 0.0;
    }
    count_bases(input).gc() as f64 / length as f64 * 100.0
}

/// The three statistics reported for a validated sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Sequence length in bases
    pub length: usize,
    /// Per-base occurrence counts
    pub counts: BaseCounts,
    /// GC percentage in [0, 100]
    pub gc_content: f64,
}

impl Analysis {
    /// Validates `input`, then computes length, base counts and GC content.
    pub fn from_sequence(input: &str) -> AnalysisResult<Self> {
        validate_sequence(input)?;

        Ok(Self {
            length: input.chars().count(),
            counts: count_bases(input),
            gc_content: gc_content(input),
        })
    }
}
