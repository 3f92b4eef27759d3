use clap::Parser;
use log::{error, info};
use quadruplex::{data::fasta::write_fasta, prelude::*};
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Generate synthetic G-quadruplex sequences.
#[derive(Debug, Parser)]
#[command(name = "quadgen", version, about, long_about = None)]
struct Args {
    /// Unique sequences per pattern are collected until there are more than
    /// this many
    #[arg(long, default_value_t = 10)]
    limit_per_regex: usize,

    /// Overwrite random interior positions with A or T
    #[arg(long)]
    place_random_noise: bool,

    #[arg(long, default_value_t = 0)]
    minimum_number_of_noise: usize,

    #[arg(long, default_value_t = 3)]
    maximum_number_of_noise: usize,

    /// Duplicate candidates tolerated per pattern before giving up
    #[arg(long, default_value_t = 10_000)]
    max_attempts: usize,

    /// Seed for reproducible output; seeded from system entropy when absent
    #[arg(long)]
    seed: Option<u64>,

    /// File with one pattern per line, replacing the built-in catalog
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Write FASTA records instead of one sequence per line
    #[arg(long)]
    fasta: bool,
}

impl Args {
    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            limit_per_regex:         self.limit_per_regex,
            place_random_noise:      self.place_random_noise,
            minimum_number_of_noise: self.minimum_number_of_noise,
            maximum_number_of_noise: self.maximum_number_of_noise,
            max_attempts:            self.max_attempts,
        }
    }
}

fn write_batches<W: Write>(writer: &mut W, batches: &[Batch], fasta: bool) -> std::io::Result<()> {
    if fasta {
        let records: Vec<FastaNT> = batches
            .iter()
            .flat_map(|batch| {
                batch
                    .sequences
                    .iter()
                    .enumerate()
                    .map(move |(i, s)| FastaNT::numbered("quadruplex", batch.pattern_index + 1, i + 1, s.clone()))
            })
            .collect();
        write_fasta(writer, &records)?;
    } else {
        for sequence in batches.iter().flat_map(|b| &b.sequences) {
            writeln!(writer, "{sequence}")?;
        }
    }
    writer.flush()
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let catalog = match &args.patterns {
        Some(path) => Catalog::from_filename(path).unwrap_or_fail(),
        None => Catalog::quadruplex().unwrap_or_die("the built-in pattern catalog is invalid"),
    };
    info!("Loaded {} patterns", catalog.len());

    let rng = match args.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };

    let mut generator = Generator::new(&catalog, args.request(), rng);
    let outcome = generator.run().map(|_| ());

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_batches(&mut writer, generator.batches(), args.fasta).unwrap_or_die("could not write sequences");

    if outcome.is_err() {
        error!("Stopped after {} of {} patterns", generator.batches().len(), catalog.len());
    }
    outcome.unwrap_or_fail();
}
