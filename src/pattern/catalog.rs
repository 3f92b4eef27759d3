use super::Pattern;
use crate::data::err::PatternError;
use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::Path,
};

/// Quadruplex detection patterns, after Puig Lombardi and Londoño-Vallejo,
/// *A guide to computational methods for G-quadruplex prediction*, Nucleic
/// Acids Research 48(1), 2020, <https://doi.org/10.1093/nar/gkz1097>.
///
/// Each pattern is four `G` or `C` runs of 3–5 bases separated by loops of
/// 1–7 bases from `[ATC]`. The run layouts, in order, are GGGG, GCGC, GGCC,
/// GCCG, GGGC, GGCG, CCCC, CGCG, CCGG, CGGC, CCCG, and CCGC.
pub const QUADRUPLEX_PATTERNS: [&str; 12] = [
    "G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}G{3,5}",
    "G{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}",
    "G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}C{3,5}",
    "G{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}",
    "G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}",
    "G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}",
    "C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}C{3,5}",
    "C{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}",
    "C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}G{3,5}",
    "C{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}",
    "C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}",
    "C{3,5}[ATC]{1,7}C{3,5}[ATC]{1,7}G{3,5}[ATC]{1,7}C{3,5}",
];

/// An ordered, immutable collection of [`Pattern`]s to generate from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<Pattern>,
}

#[derive(Debug)]
struct CatalogError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.description, self.source)
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl Catalog {
    #[inline]
    #[must_use]
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Catalog { patterns }
    }

    /// The built-in catalog parsed from [`QUADRUPLEX_PATTERNS`].
    ///
    /// # Errors
    ///
    /// Returns the [`PatternError`] of the first malformed entry.
    pub fn quadruplex() -> Result<Self, PatternError> {
        Self::from_patterns(QUADRUPLEX_PATTERNS)
    }

    /// Parses each string in `patterns`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the [`PatternError`] of the first malformed entry.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().parse())
            .collect::<Result<Vec<Pattern>, _>>()?;

        Ok(Catalog { patterns })
    }

    /// Reads one pattern per line. Surrounding whitespace is trimmed, and
    /// blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// IO errors are propagated. A malformed pattern results in an error of
    /// kind [`ErrorKind::InvalidData`] naming the line, with the
    /// [`PatternError`] as its source.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut patterns = Vec::new();

        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let pattern = line.parse().map_err(|e: PatternError| {
                std::io::Error::new(
                    ErrorKind::InvalidData,
                    CatalogError {
                        description: format!("invalid pattern on line {}", i + 1),
                        source:      Box::new(e),
                    },
                )
            })?;
            patterns.push(pattern);
        }

        Ok(Catalog { patterns })
    }

    /// Reads a pattern file as described in [`Catalog::from_reader`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or contains a malformed
    /// pattern. The file path is included in the error message.
    pub fn from_filename<P>(filename: P) -> std::io::Result<Self>
    where
        P: AsRef<Path>, {
        let path = filename.as_ref();
        let wrap = |err: std::io::Error| {
            std::io::Error::new(
                err.kind(),
                CatalogError {
                    description: format!("could not load pattern catalog '{}'", path.display()),
                    source:      Box::new(err),
                },
            )
        };

        let file = File::open(path).map_err(wrap)?;
        Self::from_reader(file).map_err(wrap)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    #[inline]
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
