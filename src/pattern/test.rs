use super::*;
use crate::data::err::PatternError;
use std::io::ErrorKind;

#[test]
fn parse_bounded_pattern() {
    let pattern: Pattern = "G{3,5}[ATC]{1,7}C{4}A".parse().unwrap();
    let tokens = pattern.tokens();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].atom(), &Atom::Literal(b'G'));
    assert_eq!(tokens[0].repetition(), Repetition::new(3, 5).unwrap());
    assert_eq!(tokens[1].atom(), &Atom::Class(b"ATC".to_vec()));
    assert_eq!(tokens[1].repetition(), Repetition::new(1, 7).unwrap());
    assert_eq!(tokens[2].repetition(), Repetition::exactly(4).unwrap());
    assert_eq!(tokens[3].atom(), &Atom::Literal(b'A'));
    assert_eq!(tokens[3].repetition(), Repetition::ONCE);
}

#[test]
fn display_matches_source_text() {
    for text in QUADRUPLEX_PATTERNS {
        let pattern: Pattern = text.parse().unwrap();
        assert_eq!(pattern.to_string(), text);
    }

    let pattern: Pattern = "G{3,3}A{1,1}[TT]{2}".parse().unwrap();
    assert_eq!(pattern.to_string(), "G{3}A[T]{2}");
}

#[test]
fn duplicate_class_members_collapse() {
    let pattern: Pattern = "[ATTA]{2}".parse().unwrap();
    assert_eq!(pattern.tokens()[0].atom(), &Atom::Class(b"AT".to_vec()));

    let built = Pattern::new(vec![Token::new(Atom::Class(b"GGC".to_vec()), Repetition::ONCE)]).unwrap();
    assert_eq!(built.tokens()[0].atom(), &Atom::Class(b"GC".to_vec()));
}

#[test]
fn parse_errors() {
    let cases: &[(&str, PatternError)] = &[
        ("", PatternError::Empty),
        ("G[]", PatternError::EmptyClass { position: 1 }),
        ("G[AT", PatternError::UnclosedClass { position: 1 }),
        ("G{3", PatternError::UnclosedRepetition { position: 1 }),
        ("G{}", PatternError::MalformedRepetition { position: 1 }),
        ("G{3,}", PatternError::MalformedRepetition { position: 1 }),
        ("G{+3}", PatternError::MalformedRepetition { position: 1 }),
        ("G{1,2,3}", PatternError::MalformedRepetition { position: 1 }),
        ("G{5,3}", PatternError::InvalidBounds { min: 5, max: 3 }),
        ("G{0}", PatternError::InvalidBounds { min: 0, max: 0 }),
        ("G{0,2}", PatternError::InvalidBounds { min: 0, max: 2 }),
        ("G{10001}", PatternError::RepetitionTooLarge { max: 10_001 }),
        ("G{99999999999999999999}", PatternError::MalformedRepetition { position: 1 }),
        ("GN", PatternError::InvalidNucleotide { byte: b'N', position: 1 }),
        ("g", PatternError::InvalidNucleotide { byte: b'g', position: 0 }),
        ("[AU]", PatternError::InvalidNucleotide { byte: b'U', position: 2 }),
        ("G|C", PatternError::UnsupportedSyntax { byte: b'|', position: 1 }),
        ("G+", PatternError::UnsupportedSyntax { byte: b'+', position: 1 }),
        ("^G", PatternError::UnsupportedSyntax { byte: b'^', position: 0 }),
        ("[A-T]", PatternError::UnsupportedSyntax { byte: b'-', position: 2 }),
        ("G{2}{3}", PatternError::UnsupportedSyntax { byte: b'{', position: 4 }),
    ];

    for (text, expected) in cases {
        assert_eq!(&text.parse::<Pattern>().unwrap_err(), expected, "pattern: {text:?}");
    }
}

#[test]
fn programmatic_validation() {
    assert_eq!(Pattern::new(Vec::new()).unwrap_err(), PatternError::Empty);
    assert!(matches!(
        Pattern::new(vec![Token::new(Atom::Class(Vec::new()), Repetition::ONCE)]),
        Err(PatternError::EmptyClass { .. })
    ));
    assert!(matches!(
        Pattern::new(vec![Token::new(Atom::Literal(b'X'), Repetition::ONCE)]),
        Err(PatternError::InvalidNucleotide { byte: b'X', .. })
    ));
    assert_eq!(
        Repetition::new(2, 1).unwrap_err(),
        PatternError::InvalidBounds { min: 2, max: 1 }
    );
}

#[test]
fn length_bounds() {
    let pattern: Pattern = QUADRUPLEX_PATTERNS[0].parse().unwrap();
    assert_eq!(pattern.length_bounds(), (15, 41));
}

#[test]
fn oversized_repetition_is_rejected() {
    let err = Catalog::from_reader("G{1,18446744073709551615}C{1,2}\n".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(err.to_string().contains("line 1"), "{err}");

    assert_eq!(
        "G{1,18446744073709551615}".parse::<Pattern>().unwrap_err(),
        PatternError::RepetitionTooLarge { max: usize::MAX }
    );
    assert_eq!(
        Repetition::new(1, Repetition::MAX_COUNT + 1).unwrap_err(),
        PatternError::RepetitionTooLarge {
            max: Repetition::MAX_COUNT + 1,
        }
    );

    let widest: Pattern = format!("G{{1,{max}}}C{{1,{max}}}", max = Repetition::MAX_COUNT)
        .parse()
        .unwrap();
    assert_eq!(widest.length_bounds(), (2, 2 * Repetition::MAX_COUNT));
}

#[test]
fn full_match() {
    let pattern: Pattern = "G{3,5}[ATC]{1,7}G{3,5}".parse().unwrap();

    assert!(pattern.is_match(b"GGGAGGG"));
    assert!(pattern.is_match(b"GGGGGCCCCCCCGGGGG"));
    // First run takes four bases
    assert!(pattern.is_match(b"GGGGTGGG"));

    assert!(!pattern.is_match(b""));
    assert!(!pattern.is_match(b"GGAGGG"));
    assert!(!pattern.is_match(b"GGGGGGGG"));
    assert!(!pattern.is_match(b"GGGAAAAAAAAGGG"));
    assert!(!pattern.is_match(b"GGGAGGGA"));
    assert!(!pattern.is_match(b"GGGGGGAGGG"));
}

#[test]
fn builtin_catalog() {
    let catalog = Catalog::quadruplex().unwrap();
    assert_eq!(catalog.len(), 12);

    let layouts: Vec<String> = catalog
        .iter()
        .map(|p| {
            p.tokens()
                .iter()
                .filter_map(|t| match t.atom() {
                    Atom::Literal(b) => Some(*b as char),
                    Atom::Class(_) => None,
                })
                .collect()
        })
        .collect();

    assert_eq!(
        layouts,
        [
            "GGGG", "GCGC", "GGCC", "GCCG", "GGGC", "GGCG", "CCCC", "CGCG", "CCGG", "CGGC", "CCCG", "CCGC"
        ]
    );
}

#[test]
fn catalog_from_reader() {
    let text = "# custom motifs\n\nG{3}[AT]G{3}\n  C{2,4}T  \n";
    let catalog = Catalog::from_reader(text.as_bytes()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).unwrap().to_string(), "C{2,4}T");

    let empty = Catalog::from_reader("# nothing\n".as_bytes()).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn catalog_from_reader_reports_line() {
    let err = Catalog::from_reader("G{3}\nG{3,1}\n".as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn catalog_missing_file() {
    let err = Catalog::from_filename("does/not/exist.txt").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("does/not/exist.txt"), "{err}");
}
