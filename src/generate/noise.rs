use crate::data::{alphas::NOISE_NUCLEOTIDES, err::NoiseError, types::nucleotides::Nucleotides};
use rand::Rng;

/// Validated bounds on the number of noise placements, `minimum <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseRange {
    minimum: usize,
    maximum: usize,
}

impl NoiseRange {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidRange`] when `minimum > maximum`.
    #[inline]
    pub fn new(minimum: usize, maximum: usize) -> Result<Self, NoiseError> {
        if minimum > maximum {
            Err(NoiseError::InvalidRange { minimum, maximum })
        } else {
            Ok(NoiseRange { minimum, maximum })
        }
    }

    #[inline]
    #[must_use]
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    #[inline]
    #[must_use]
    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Returns a noisy copy of `sequence`; see [`inject_noise`].
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(&self, sequence: &Nucleotides, rng: &mut R) -> Nucleotides {
        let mut noisy = sequence.clone();
        let length = noisy.len();
        let placements = rng.random_range(self.minimum..=self.maximum);

        if length == 0 {
            return noisy;
        }

        for _ in 0..placements {
            // Draws of 0 are impossible; draws of `length - 1` or `length` are
            // wasted, so both ends are kept.
            let index = rng.random_range(1..=length);
            if index + 1 < length {
                noisy[index] = NOISE_NUCLEOTIDES[rng.random_range(0..NOISE_NUCLEOTIDES.len())];
            }
        }

        noisy
    }
}

/// Returns a copy of `sequence` with a random number of interior positions
/// overwritten by `A` or `T`.
///
/// The number of placements is drawn uniformly from `[minimum, maximum]`.
/// Each placement draws a position uniformly from `[1, len]` and only lands
/// if the position is interior (neither the first nor the last base); other
/// draws are discarded without retrying. Fewer than `placements` positions
/// may therefore change, and a later placement can overwrite an earlier one.
///
/// ```
/// # use quadruplex::prelude::*;
/// let sequence: Nucleotides = b"GGGCGGGCGGGCGGG".into();
/// let mut rng = seeded_rng(1);
///
/// let noisy = inject_noise(&sequence, 1, 3, &mut rng).unwrap();
/// assert_eq!(noisy.len(), sequence.len());
/// assert_eq!(noisy[0], b'G');
/// assert_eq!(noisy[14], b'G');
///
/// assert!(inject_noise(&sequence, 3, 1, &mut rng).is_err());
/// ```
///
/// # Errors
///
/// Returns [`NoiseError::InvalidRange`] when `minimum > maximum`.
pub fn inject_noise<R: Rng + ?Sized>(
    sequence: &Nucleotides, minimum: usize, maximum: usize, rng: &mut R,
) -> Result<Nucleotides, NoiseError> {
    Ok(NoiseRange::new(minimum, maximum)?.apply(sequence, rng))
}
