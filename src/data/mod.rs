//! ## Data types, alphabets, and error handling.
//!
//! Generated sequences are stored as [`Nucleotides`], a thin wrapper around
//! [`Vec<u8>`] holding ASCII bases. Every sequence produced by this crate is
//! drawn from the canonical alphabet `ACGT`; noise only ever writes `A` or `T`.
//!
//! ## Errors
//!
//! As a library, *quadruplex* avoids adopting an error handling crate. Each
//! component has an enum-style error type ([`PatternError`], [`NoiseError`],
//! [`GenerationError`]) that can be matched on or displayed. Loading a pattern
//! catalog from a file uses [`std::io::Error`], with parse failures reported
//! as [`ErrorKind::InvalidData`] together with the offending line number.
//!
//! Binaries can use [`unwrap_or_fail`] and [`unwrap_or_die`] to print an error
//! and exit with the code provided by [`GetCode`].
//!
//! [`Nucleotides`]: types::nucleotides::Nucleotides
//! [`PatternError`]: err::PatternError
//! [`NoiseError`]: err::NoiseError
//! [`GenerationError`]: err::GenerationError
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die
//! [`GetCode`]: err::GetCode

/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for record types used for output.
pub mod records;
/// A module for more fundamental types, like
/// [`Nucleotides`](self::types::nucleotides::Nucleotides).
pub mod types;

/// Alphabets shared by the pattern grammar and the generators.
pub(crate) mod constants;

pub use constants::alphas::{DNA_CANONICAL_UC, NOISE_NUCLEOTIDES};
pub use records::fasta;
pub use types::nucleotides;

pub(crate) use constants::alphas;
