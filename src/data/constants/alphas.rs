/// Canonical uppercase nucleotide bases, the alphabet of every generated
/// sequence.
pub const DNA_CANONICAL_UC: &[u8; 4] = b"ACGT";

/// Bases written over a sequence position by noise injection.
pub const NOISE_NUCLEOTIDES: &[u8; 2] = b"AT";

/// Returns `true` if `b` is one of [`DNA_CANONICAL_UC`].
#[inline]
#[must_use]
pub const fn is_canonical_dna(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}
