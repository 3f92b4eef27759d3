#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Data types, alphabets, output records, and error handling.
pub mod data;
/// Generate sequences from patterns, with optional noise.
pub mod generate;
/// The bounded pattern grammar and the quadruplex pattern catalog.
pub mod pattern;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{
        err::{GenerationError, NoiseError, OrFail, PatternError},
        fasta::FastaNT,
        nucleotides::Nucleotides,
    };
    pub use crate::generate::{
        Batch, GenerationRequest, Generator, entropy_rng, expand, generate, inject_noise, seeded_rng,
    };
    pub use crate::pattern::{Atom, Catalog, Pattern, Repetition, Token};
}
