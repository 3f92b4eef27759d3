use super::{expand, noise::NoiseRange};
use crate::{
    data::{
        err::{GenerationError, NoiseError},
        types::nucleotides::Nucleotides,
    },
    pattern::{Catalog, Pattern},
};
use log::{debug, info, trace, warn};
use rand::Rng;

/// Parameters for a [`Generator`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Unique sequences are collected for each pattern until there are *more*
    /// than this many, so each batch holds `limit_per_regex + 1` sequences.
    pub limit_per_regex:         usize,
    /// Whether to pass each candidate through [`inject_noise`].
    ///
    /// [`inject_noise`]: super::inject_noise
    pub place_random_noise:      bool,
    pub minimum_number_of_noise: usize,
    pub maximum_number_of_noise: usize,
    /// The number of duplicate candidates tolerated per pattern before giving
    /// up with [`GenerationError::Exhausted`].
    pub max_attempts:            usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest {
            limit_per_regex:         10,
            place_random_noise:      false,
            minimum_number_of_noise: 0,
            maximum_number_of_noise: 3,
            max_attempts:            10_000,
        }
    }
}

impl GenerationRequest {
    /// The validated noise bounds, or `None` if noise is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidRange`] when noise is enabled and the
    /// minimum exceeds the maximum.
    #[inline]
    pub fn noise_range(&self) -> Result<Option<NoiseRange>, NoiseError> {
        if self.place_random_noise {
            NoiseRange::new(self.minimum_number_of_noise, self.maximum_number_of_noise).map(Some)
        } else {
            Ok(None)
        }
    }

    /// The number of sequences a complete batch holds.
    #[inline]
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.limit_per_regex + 1
    }
}

/// The unique sequences generated from one pattern of a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Zero-based index of the pattern within its catalog.
    pub pattern_index: usize,
    pub sequences:     Vec<Nucleotides>,
}

/// Collects unique sequences for each pattern of a [`Catalog`], in order.
///
/// Batches that complete before an error remain available from
/// [`batches`](Generator::batches), and calling [`run`](Generator::run) again
/// resumes with the first pattern that has no batch.
pub struct Generator<'a, R: Rng> {
    catalog: &'a Catalog,
    request: GenerationRequest,
    rng:     R,
    batches: Vec<Batch>,
}

impl<'a, R: Rng> Generator<'a, R> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, request: GenerationRequest, rng: R) -> Self {
        Generator {
            catalog,
            request,
            rng,
            batches: Vec::with_capacity(catalog.len()),
        }
    }

    /// Generates a batch for every remaining pattern.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Noise`] for invalid noise bounds before any
    /// generation happens, and [`GenerationError::Exhausted`] when a pattern
    /// cannot yield enough unique sequences within the attempt budget.
    pub fn run(&mut self) -> Result<&[Batch], GenerationError> {
        let noise = self.request.noise_range()?;
        let catalog = self.catalog;

        for (pattern_index, pattern) in catalog.iter().enumerate().skip(self.batches.len()) {
            let batch = fill_batch(pattern, pattern_index, &self.request, noise, &mut self.rng)?;
            self.batches.push(batch);
        }

        info!(
            "Generated {} sequences from {} patterns",
            self.batches.iter().map(|b| b.sequences.len()).sum::<usize>(),
            self.batches.len()
        );

        Ok(&self.batches)
    }

    #[inline]
    #[must_use]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    #[inline]
    #[must_use]
    pub fn into_batches(self) -> Vec<Batch> {
        self.batches
    }

    /// All sequences generated so far, flattened in pattern order.
    #[inline]
    pub fn sequences(&self) -> impl Iterator<Item = &Nucleotides> {
        self.batches.iter().flat_map(|b| b.sequences.iter())
    }

    #[must_use]
    pub fn into_sequences(self) -> Vec<Nucleotides> {
        self.batches.into_iter().flat_map(|b| b.sequences).collect()
    }
}

/// Generates unique sequences for every pattern of `catalog`, concatenated in
/// catalog order. Sequences are unique within a pattern, but the same
/// sequence may appear under two patterns.
///
/// # Errors
///
/// See [`Generator::run`].
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog, request: &GenerationRequest, rng: &mut R,
) -> Result<Vec<Nucleotides>, GenerationError> {
    let mut generator = Generator::new(catalog, *request, rng);
    generator.run()?;
    Ok(generator.into_sequences())
}

fn fill_batch<R: Rng + ?Sized>(
    pattern: &Pattern, pattern_index: usize, request: &GenerationRequest, noise: Option<NoiseRange>, rng: &mut R,
) -> Result<Batch, GenerationError> {
    let mut sequences: Vec<Nucleotides> = Vec::with_capacity(request.batch_size());
    let mut attempts = 0;

    while sequences.len() <= request.limit_per_regex {
        let mut candidate = expand(pattern, rng);
        if let Some(noise) = noise {
            candidate = noise.apply(&candidate, rng);
        }

        if sequences.contains(&candidate) {
            attempts += 1;
            trace!("Pattern {}: duplicate candidate {candidate}", pattern_index + 1);

            if attempts > request.max_attempts {
                warn!(
                    "Pattern {} ({pattern}) exhausted after {attempts} duplicates with {} of {} sequences",
                    pattern_index + 1,
                    sequences.len(),
                    request.batch_size()
                );
                return Err(GenerationError::Exhausted {
                    pattern_index,
                    collected: sequences.len(),
                    attempts,
                });
            }
        } else {
            sequences.push(candidate);
        }
    }

    debug!(
        "Pattern {} ({pattern}): {} sequences, {attempts} duplicates",
        pattern_index + 1,
        sequences.len()
    );

    Ok(Batch {
        pattern_index,
        sequences,
    })
}
