use quadruplex::{data::fasta::write_fasta, prelude::*};

#[test]
fn default_run_over_builtin_catalog() {
    let catalog = Catalog::quadruplex().unwrap();
    let request = GenerationRequest::default();

    let mut generator = Generator::new(&catalog, request, seeded_rng(2020));
    generator.run().unwrap();

    assert_eq!(generator.batches().len(), 12);
    for (batch, pattern) in generator.batches().iter().zip(&catalog) {
        assert_eq!(batch.sequences.len(), request.batch_size());
        for s in &batch.sequences {
            assert!(pattern.is_match(s.as_bytes()), "{s} does not match {pattern}");
        }
    }

    assert_eq!(generator.into_sequences().len(), 132);
}

#[test]
fn noisy_run_stays_canonical() {
    let catalog = Catalog::quadruplex().unwrap();
    let request = GenerationRequest {
        limit_per_regex: 10,
        place_random_noise: true,
        minimum_number_of_noise: 1,
        maximum_number_of_noise: 3,
        ..GenerationRequest::default()
    };

    let sequences = generate(&catalog, &request, &mut seeded_rng(11)).unwrap();
    assert_eq!(sequences.len(), 132);

    for (i, pattern) in catalog.iter().enumerate() {
        let batch = &sequences[i * 11..(i + 1) * 11];
        // Runs at both ends are never touched by noise
        let first = pattern.tokens()[0].atom();
        let last = pattern.tokens()[pattern.tokens().len() - 1].atom();

        for s in batch {
            assert!(s.is_canonical());
            assert!(first.matches(s[0]));
            assert!(last.matches(s[s.len() - 1]));
        }
    }
}

#[test]
fn custom_catalog_to_fasta() {
    let catalog = Catalog::from_reader("# two motifs\nG{3}[AT]{2}G{3}\nC{3}T{1,2}C{3}\n".as_bytes()).unwrap();
    let request = GenerationRequest {
        limit_per_regex: 1,
        ..GenerationRequest::default()
    };

    let mut generator = Generator::new(&catalog, request, seeded_rng(5));
    let records: Vec<FastaNT> = generator
        .run()
        .unwrap()
        .iter()
        .flat_map(|b| {
            b.sequences
                .iter()
                .enumerate()
                .map(move |(i, s)| FastaNT::numbered("quadruplex", b.pattern_index + 1, i + 1, s.clone()))
        })
        .collect();

    let mut out = Vec::new();
    write_fasta(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    let names: Vec<&str> = text.lines().filter(|l| l.starts_with('>')).collect();
    assert_eq!(names, [">quadruplex_1_1", ">quadruplex_1_2", ">quadruplex_2_1", ">quadruplex_2_2"]);

    let mut c_runs: Vec<&str> = text.lines().filter(|l| l.starts_with('C')).collect();
    c_runs.sort_unstable();
    assert_eq!(c_runs, ["CCCTCCC", "CCCTTCCC"]);
}

#[test]
fn malformed_builtin_style_pattern_is_rejected() {
    let err = Catalog::from_patterns(["G{3,5}[ATC]{1,7}G{3,5}", "G{5,3}"]).unwrap_err();
    assert_eq!(err, PatternError::InvalidBounds { min: 5, max: 3 });
    assert!(err.to_string().contains("{5,3}"));
}
