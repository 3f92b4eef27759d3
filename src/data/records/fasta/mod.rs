use crate::data::types::nucleotides::Nucleotides;
use std::io::Write;


/// A [FASTA](https://en.wikipedia.org/wiki/FASTA_format) record holding a
/// nucleotide sequence.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaNT {
    pub name:     String,
    pub sequence: Nucleotides,
}

impl FastaNT {
    /// Creates a record named `{prefix}_{group}_{member}`, e.g.
    /// `quadruplex_3_11`.
    #[must_use]
    pub fn numbered(prefix: &str, group: usize, member: usize, sequence: Nucleotides) -> Self {
        let mut buff = itoa::Buffer::new();
        let mut name = String::with_capacity(prefix.len() + 8);

        name.push_str(prefix);
        name.push('_');
        name.push_str(buff.format(group));
        name.push('_');
        name.push_str(buff.format(member));

        FastaNT { name, sequence }
    }
}

impl std::fmt::Display for FastaNT {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, self.sequence)
    }
}

/// Writes `records` to `writer` in FASTA format, one line per sequence.
///
/// # Errors
///
/// Any IO error from `writer` is propagated.
pub fn write_fasta<'a, W, I>(writer: &mut W, records: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a FastaNT>, {
    for record in records {
        write!(writer, "{record}")?;
    }
    Ok(())
}
