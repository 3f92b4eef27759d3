use std::{error::Error, fmt, fmt::Display};

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Errors raised while parsing or validating a [`Pattern`].
///
/// Positions are zero-based byte offsets into the pattern text.
///
/// [`Pattern`]: crate::pattern::Pattern
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern contained no tokens.
    Empty,
    /// A character class `[]` had no members.
    EmptyClass { position: usize },
    /// A `[` was never closed.
    UnclosedClass { position: usize },
    /// A `{` was never closed.
    UnclosedRepetition { position: usize },
    /// The contents of `{...}` were not `n` or `min,max`.
    MalformedRepetition { position: usize },
    /// Repetition bounds must satisfy `1 <= min <= max`.
    InvalidBounds { min: usize, max: usize },
    /// A repetition bound was above [`Repetition::MAX_COUNT`].
    ///
    /// [`Repetition::MAX_COUNT`]: crate::pattern::Repetition::MAX_COUNT
    RepetitionTooLarge { max: usize },
    /// A literal or class member was not one of `A`, `C`, `G`, or `T`.
    InvalidNucleotide { byte: u8, position: usize },
    /// Regex syntax outside of the bounded grammar, such as `|` or `*`.
    UnsupportedSyntax { byte: u8, position: usize },
}

impl Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PatternError::Empty => write!(f, "The pattern is empty"),
            PatternError::EmptyClass { position } => write!(f, "Empty character class at position {position}"),
            PatternError::UnclosedClass { position } => {
                write!(f, "Character class opened at position {position} is never closed")
            }
            PatternError::UnclosedRepetition { position } => {
                write!(f, "Repetition opened at position {position} is never closed")
            }
            PatternError::MalformedRepetition { position } => {
                write!(f, "Repetition at position {position} must be of the form {{n}} or {{min,max}}")
            }
            PatternError::InvalidBounds { min, max } => {
                write!(f, "Repetition bounds {{{min},{max}}} must satisfy 1 <= min <= max")
            }
            PatternError::RepetitionTooLarge { max } => write!(
                f,
                "Repetition bound {max} exceeds the maximum of {}",
                crate::pattern::Repetition::MAX_COUNT
            ),
            PatternError::InvalidNucleotide { byte, position } => write!(
                f,
                "Invalid nucleotide '{}' at position {position}; only A, C, G, and T are allowed",
                byte.escape_ascii()
            ),
            PatternError::UnsupportedSyntax { byte, position } => write!(
                f,
                "Unsupported pattern syntax '{}' at position {position}",
                byte.escape_ascii()
            ),
        }
    }
}

impl fmt::Debug for PatternError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for PatternError {}

impl GetCode for PatternError {}

/// Errors for the noise bounds given to [`inject_noise`].
///
/// [`inject_noise`]: crate::generate::inject_noise
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoiseError {
    InvalidRange { minimum: usize, maximum: usize },
}

impl Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoiseError::InvalidRange { minimum, maximum } => write!(
                f,
                "The minimum number of noise placements ({minimum}) is greater than the maximum ({maximum})"
            ),
        }
    }
}

impl fmt::Debug for NoiseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for NoiseError {}

impl GetCode for NoiseError {}

/// Errors raised by the [`Generator`](crate::generate::Generator).
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationError {
    /// The attempt budget ran out before enough unique sequences were found
    /// for the pattern at `pattern_index`.
    Exhausted {
        pattern_index: usize,
        collected:     usize,
        attempts:      usize,
    },
    /// The request carried invalid noise bounds.
    Noise(NoiseError),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::Exhausted {
                pattern_index,
                collected,
                attempts,
            } => write!(
                f,
                "Gave up on pattern {} after {attempts} duplicate candidates with only {collected} unique sequences collected",
                pattern_index + 1
            ),
            GenerationError::Noise(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Debug for GenerationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerationError::Noise(e) => Some(e),
            GenerationError::Exhausted { .. } => None,
        }
    }
}

impl GetCode for GenerationError {}

impl From<NoiseError> for GenerationError {
    fn from(e: NoiseError) -> Self {
        GenerationError::Noise(e)
    }
}
