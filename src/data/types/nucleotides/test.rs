use super::*;

#[test]
fn push_repeated_appends_runs() {
    let mut s = Nucleotides::new();
    s.push_repeated(b'G', 3);
    s.push(b'A');
    s.push_repeated(b'C', 2);
    s.push_repeated(b'T', 0);

    assert_eq!(s.as_bytes(), b"GGGACC");
    assert_eq!(s.to_string(), "GGGACC");
}

#[test]
fn canonical_check() {
    assert!(Nucleotides::new().is_canonical());
    assert!(Nucleotides::from("ACGT").is_canonical());
    assert!(!Nucleotides::from("ACGU").is_canonical());
    assert!(!Nucleotides::from("acgt").is_canonical());
}

#[test]
fn equality_is_by_content() {
    let a: Nucleotides = b"GGGTGGG".into();
    let b: Nucleotides = "GGGTGGG".into();
    let c: Nucleotides = b"GGGTGGG".iter().copied().collect();
    assert_eq!(a, b);
    assert_eq!(b, c);
}
