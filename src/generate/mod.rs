//! ## Sequence generation
//!
//! Generation is split into three steps, each taking an explicit random number
//! generator so that results are reproducible under a fixed seed:
//!
//! 1. [`expand`] draws one random sequence satisfying a [`Pattern`].
//! 2. [`inject_noise`] optionally overwrites interior positions with `A` or
//!    `T` to emulate sequencing or biological variability.
//! 3. [`Generator`] collects unique sequences for every pattern of a
//!    [`Catalog`], in catalog order.
//!
//! ```
//! # use quadruplex::prelude::*;
//! let catalog = Catalog::quadruplex().unwrap();
//! let request = GenerationRequest {
//!     limit_per_regex: 2,
//!     ..GenerationRequest::default()
//! };
//!
//! let mut rng = seeded_rng(42);
//! let sequences = generate(&catalog, &request, &mut rng).unwrap();
//!
//! // One more than the limit is collected for each of the 12 patterns
//! assert_eq!(sequences.len(), 36);
//! assert!(sequences.iter().all(Nucleotides::is_canonical));
//! ```
//!
//! [`Pattern`]: crate::pattern::Pattern
//! [`Catalog`]: crate::pattern::Catalog

use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

mod driver;
mod expand;
mod noise;


pub use driver::{Batch, GenerationRequest, Generator, generate};
pub use expand::expand;
pub use noise::{NoiseRange, inject_noise};

/// Creates a generator with a fixed seed, for reproducible output.
#[inline]
#[must_use]
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Creates a generator seeded from the thread-local entropy source.
#[inline]
#[must_use]
pub fn entropy_rng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}
