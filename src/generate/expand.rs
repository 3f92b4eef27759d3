use crate::{
    data::types::nucleotides::Nucleotides,
    pattern::{Atom, Pattern},
};
use rand::{Rng, seq::IndexedRandom};

/// Draws one random sequence satisfying `pattern`.
///
/// For each token in order, a repetition count is drawn uniformly from its
/// bounds. A literal is then repeated that many times, while a class draws
/// each of its positions independently and uniformly from its members.
///
/// ```
/// # use quadruplex::prelude::*;
/// let pattern: Pattern = "G{3}A{1}G{3}".parse().unwrap();
/// let mut rng = seeded_rng(7);
/// assert_eq!(expand(&pattern, &mut rng).as_bytes(), b"GGGAGGG");
/// ```
#[must_use]
pub fn expand<R: Rng + ?Sized>(pattern: &Pattern, rng: &mut R) -> Nucleotides {
    let (_, longest) = pattern.length_bounds();
    let mut sequence = Nucleotides::with_capacity(longest);

    for token in pattern.tokens() {
        let repetition = token.repetition();
        let count = rng.random_range(repetition.min()..=repetition.max());

        match token.atom() {
            Atom::Literal(base) => sequence.push_repeated(*base, count),
            Atom::Class(members) => {
                for _ in 0..count {
                    // Validated classes are never empty
                    if let Some(&base) = members.choose(rng) {
                        sequence.push(base);
                    }
                }
            }
        }
    }

    sequence
}
