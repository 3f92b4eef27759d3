use super::{Atom, Pattern, Repetition, Token};
use crate::data::{alphas::is_canonical_dna, err::PatternError};
use std::str::FromStr;

/// Regex metacharacters recognised only to give a clearer error than
/// [`PatternError::InvalidNucleotide`].
const UNSUPPORTED: &[u8] = b"|*+?.()^$\\[]{},-";

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parses the textual form of a bounded pattern, such as
    /// `G{3,5}[ATC]{1,7}G{3,5}`.
    ///
    /// Each atom is either a nucleotide or a bracketed class of nucleotides,
    /// optionally followed by `{n}` or `{min,max}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.as_bytes();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let (atom, after_atom) = parse_atom(text, pos)?;
            let (repetition, after_repetition) = parse_repetition(text, after_atom)?;
            tokens.push(Token::new(atom, repetition));
            pos = after_repetition;
        }

        Pattern::new(tokens)
    }
}

#[inline]
fn check_base(byte: u8, position: usize) -> Result<u8, PatternError> {
    if is_canonical_dna(byte) {
        Ok(byte)
    } else if UNSUPPORTED.contains(&byte) {
        Err(PatternError::UnsupportedSyntax { byte, position })
    } else {
        Err(PatternError::InvalidNucleotide { byte, position })
    }
}

/// Parses a literal or class starting at `pos`, returning it along with the
/// offset just past it.
fn parse_atom(text: &[u8], pos: usize) -> Result<(Atom, usize), PatternError> {
    if text[pos] != b'[' {
        let base = check_base(text[pos], pos)?;
        return Ok((Atom::Literal(base), pos + 1));
    }

    let start = pos + 1;
    let Some(len) = text[start..].iter().position(|&b| b == b']') else {
        return Err(PatternError::UnclosedClass { position: pos });
    };

    let members = &text[start..start + len];
    if members.is_empty() {
        return Err(PatternError::EmptyClass { position: pos });
    }

    for (i, &b) in members.iter().enumerate() {
        check_base(b, start + i)?;
    }

    Ok((Atom::class(members)?, start + len + 1))
}

/// Parses an optional `{n}` or `{min,max}` starting at `pos`. When absent,
/// [`Repetition::ONCE`] is returned and `pos` is unchanged.
fn parse_repetition(text: &[u8], pos: usize) -> Result<(Repetition, usize), PatternError> {
    if text.get(pos) != Some(&b'{') {
        return Ok((Repetition::ONCE, pos));
    }

    let start = pos + 1;
    let Some(len) = text[start..].iter().position(|&b| b == b'}') else {
        return Err(PatternError::UnclosedRepetition { position: pos });
    };

    let malformed = PatternError::MalformedRepetition { position: pos };
    let inner = &text[start..start + len];

    let (min, max) = match inner.iter().position(|&b| b == b',') {
        Some(comma) => (
            parse_count(&inner[..comma]).ok_or_else(|| malformed.clone())?,
            parse_count(&inner[comma + 1..]).ok_or(malformed)?,
        ),
        None => {
            let n = parse_count(inner).ok_or(malformed)?;
            (n, n)
        }
    };

    Ok((Repetition::new(min, max)?, start + len + 1))
}

/// Parses a non-empty run of ASCII digits, rejecting signs and overflow.
fn parse_count(digits: &[u8]) -> Option<usize> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    digits
        .iter()
        .try_fold(0usize, |acc, &d| acc.checked_mul(10)?.checked_add(usize::from(d - b'0')))
}
