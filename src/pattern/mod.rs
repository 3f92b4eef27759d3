//! ## Bounded motif patterns
//!
//! A [`Pattern`] is a concatenation of [`Token`]s, each of which is a single
//! nucleotide or a character class of nucleotides, repeated a bounded number
//! of times. This is the subset of regular expressions needed to describe
//! quadruplex motifs such as `G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}G{3,5}`, and it
//! has no alternation, anchors, or unbounded repetition. Every pattern is
//! therefore locally satisfiable: any choice of repetition counts within the
//! bounds, and any choice of class members, yields a matching sequence.
//!
//! Patterns are usually parsed from text:
//!
//! ```
//! # use quadruplex::prelude::*;
//! let pattern: Pattern = "G{3}[ATC]{1,7}G{3}".parse().unwrap();
//! assert_eq!(pattern.tokens().len(), 3);
//! assert_eq!(pattern.length_bounds(), (7, 13));
//! assert!(pattern.is_match(b"GGGTTAGGG"));
//! assert!(!pattern.is_match(b"GGGGGG"));
//! ```

use crate::data::{alphas::is_canonical_dna, err::PatternError};

mod catalog;
mod parse;

#[cfg(test)]
mod test;

pub use catalog::{Catalog, QUADRUPLEX_PATTERNS};

/// An inclusive repetition count `{min,max}` with
/// `1 <= min <= max <= Repetition::MAX_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repetition {
    min: usize,
    max: usize,
}

impl Repetition {
    /// A single occurrence, `{1,1}`.
    pub const ONCE: Repetition = Repetition { min: 1, max: 1 };

    /// The largest count a single token may repeat.
    pub const MAX_COUNT: usize = 10_000;

    /// Creates a new repetition bound.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidBounds`] when `min` is zero or larger
    /// than `max`, and [`PatternError::RepetitionTooLarge`] when `max` exceeds
    /// [`Repetition::MAX_COUNT`].
    #[inline]
    pub fn new(min: usize, max: usize) -> Result<Self, PatternError> {
        if min == 0 || min > max {
            Err(PatternError::InvalidBounds { min, max })
        } else if max > Self::MAX_COUNT {
            Err(PatternError::RepetitionTooLarge { max })
        } else {
            Ok(Repetition { min, max })
        }
    }

    /// Creates a repetition of exactly `n` occurrences.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidBounds`] when `n` is zero, and
    /// [`PatternError::RepetitionTooLarge`] when it exceeds
    /// [`Repetition::MAX_COUNT`].
    #[inline]
    pub fn exactly(n: usize) -> Result<Self, PatternError> {
        Self::new(n, n)
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl Default for Repetition {
    fn default() -> Self {
        Repetition::ONCE
    }
}

/// The repeated unit of a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// A single nucleotide, e.g. `G`.
    Literal(u8),
    /// A set of nucleotides, e.g. `[ATC]`. Members are distinct and kept in
    /// the order first written.
    Class(Vec<u8>),
}

impl Atom {
    /// Creates a literal atom.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidNucleotide`] if `base` is not one of
    /// `A`, `C`, `G`, or `T`.
    #[inline]
    pub fn literal(base: u8) -> Result<Self, PatternError> {
        if is_canonical_dna(base) {
            Ok(Atom::Literal(base))
        } else {
            Err(PatternError::InvalidNucleotide {
                byte:     base,
                position: 0,
            })
        }
    }

    /// Creates a class atom, collapsing duplicate members.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyClass`] for an empty set, and
    /// [`PatternError::InvalidNucleotide`] for a member that is not a canonical
    /// base.
    pub fn class(members: &[u8]) -> Result<Self, PatternError> {
        let mut distinct = Vec::with_capacity(members.len());

        for (position, &b) in members.iter().enumerate() {
            if !is_canonical_dna(b) {
                return Err(PatternError::InvalidNucleotide { byte: b, position });
            }
            if !distinct.contains(&b) {
                distinct.push(b);
            }
        }

        if distinct.is_empty() {
            Err(PatternError::EmptyClass { position: 0 })
        } else {
            Ok(Atom::Class(distinct))
        }
    }

    /// Returns `true` if `base` can be produced by this atom.
    #[inline]
    #[must_use]
    pub fn matches(&self, base: u8) -> bool {
        match self {
            Atom::Literal(b) => *b == base,
            Atom::Class(members) => members.contains(&base),
        }
    }

    /// Re-validates an atom built directly from its variants, collapsing
    /// duplicate class members.
    fn normalize(self) -> Result<Self, PatternError> {
        match self {
            Atom::Literal(b) => Atom::literal(b),
            Atom::Class(members) => Atom::class(&members),
        }
    }
}

/// An [`Atom`] together with its [`Repetition`] bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    atom:       Atom,
    repetition: Repetition,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(atom: Atom, repetition: Repetition) -> Self {
        Token { atom, repetition }
    }

    #[inline]
    #[must_use]
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    #[inline]
    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }
}

/// A validated, immutable sequence of [`Token`]s.
///
/// The only ways to obtain a `Pattern` are [`Pattern::new`] and parsing with
/// [`str::parse`], both of which validate every token, so expansion of a
/// `Pattern` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Creates a pattern from already constructed tokens.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] if there are no tokens, and the
    /// corresponding [`PatternError`] if an atom is an empty class or contains
    /// a non-canonical base. Duplicate class members are collapsed.
    pub fn new(tokens: Vec<Token>) -> Result<Self, PatternError> {
        if tokens.is_empty() {
            return Err(PatternError::Empty);
        }

        let tokens = tokens
            .into_iter()
            .map(|Token { atom, repetition }| Ok(Token::new(atom.normalize()?, repetition)))
            .collect::<Result<Vec<_>, PatternError>>()?;

        Ok(Pattern { tokens })
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The shortest and longest possible expansion lengths, saturating at
    /// `usize::MAX`.
    #[must_use]
    pub fn length_bounds(&self) -> (usize, usize) {
        self.tokens.iter().fold((0, 0), |(lo, hi), t| {
            (lo.saturating_add(t.repetition.min), hi.saturating_add(t.repetition.max))
        })
    }

    /// Returns `true` if the whole of `sequence` satisfies the pattern.
    ///
    /// Each token is matched against every offset reachable by the tokens
    /// before it, so no backtracking is needed.
    #[must_use]
    pub fn is_match(&self, sequence: &[u8]) -> bool {
        let n = sequence.len();
        let mut reachable = vec![false; n + 1];
        reachable[0] = true;

        for token in &self.tokens {
            let Repetition { min, max } = token.repetition;
            let mut next = vec![false; n + 1];
            let mut any = false;

            for start in (0..=n).filter(|&i| reachable[i]) {
                for (run, &b) in sequence[start..].iter().take(max).enumerate() {
                    if !token.atom.matches(b) {
                        break;
                    }
                    if run + 1 >= min {
                        next[start + run + 1] = true;
                        any = true;
                    }
                }
            }

            if !any {
                return false;
            }
            reachable = next;
        }

        reachable[n]
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.atom {
            Atom::Literal(b) => write!(f, "{}", *b as char)?,
            Atom::Class(members) => write!(f, "[{}]", String::from_utf8_lossy(members))?,
        }

        let Repetition { min, max } = self.repetition;
        if min == max {
            if min > 1 {
                write!(f, "{{{min}}}")?;
            }
            Ok(())
        } else {
            write!(f, "{{{min},{max}}}")
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
