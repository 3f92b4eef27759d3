use crate::data::alphas::is_canonical_dna;

#[cfg(test)]
mod test;

/// An owned nucleotide sequence, stored as ASCII bytes.
///
/// Sequences produced by the generator only ever contain the canonical bases
/// `A`, `C`, `G`, and `T`, but the type itself does not enforce this; use
/// [`is_canonical`](Nucleotides::is_canonical) to check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Nucleotides(pub(crate) Vec<u8>);

impl Nucleotides {
    // std

    /// Create a new `Nucleotides` empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Nucleotides(Vec::new())
    }

    /// Create a new `Nucleotides` object with room for `capacity` bases.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Nucleotides(Vec::with_capacity(capacity))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    // Manipulation

    /// Appends `base` to the end of the sequence `count` times.
    #[inline]
    pub fn push_repeated(&mut self, base: u8, count: usize) {
        self.0.resize(self.0.len() + count, base);
    }

    #[inline]
    pub fn push(&mut self, base: u8) {
        self.0.push(base);
    }

    // Domain functions

    /// Returns `true` if every base is one of `A`, `C`, `G`, or `T`.
    ///
    /// ```
    /// # use quadruplex::prelude::*;
    /// let s: Nucleotides = b"GGGATCGGG".into();
    /// assert!(s.is_canonical());
    ///
    /// let s: Nucleotides = b"GGGNGGG".into();
    /// assert!(!s.is_canonical());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.0.iter().copied().all(is_canonical_dna)
    }
}

impl From<Vec<u8>> for Nucleotides {
    fn from(vec: Vec<u8>) -> Self {
        Nucleotides(vec)
    }
}

impl From<&[u8]> for Nucleotides {
    fn from(bytes: &[u8]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Nucleotides {
    fn from(bytes: &[u8; N]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

impl From<&str> for Nucleotides {
    fn from(s: &str) -> Self {
        Nucleotides(s.as_bytes().to_vec())
    }
}

impl FromIterator<u8> for Nucleotides {
    fn from_iter<T: IntoIterator<Item = u8>>(iterable: T) -> Self {
        Nucleotides(iterable.into_iter().collect())
    }
}

impl AsRef<[u8]> for Nucleotides {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::ops::Index<usize> for Nucleotides {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for Nucleotides {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl std::fmt::Display for Nucleotides {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
