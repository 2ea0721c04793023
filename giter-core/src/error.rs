use core::fmt;

/// Invalid arguments given to a sequence constructor.
///
/// Errors only ever occur when constructing a sequence, never while iterating it.
/// Each variant shows an example of how it can be produced.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// `GIter::range_step(0, 10, 0)`
    ZeroStep,
    /// `GIter::random(-0.5, 1.0, None)` or `GIter::random(0.0, 2.0, None)`
    Bound(&'static str, f64),
    /// `GIter::randint(0, 9, Some(-1))` or `GIter::choice([1, 2], true, Some(-1))`
    Negative(&'static str, i64),
    /// `GIter::randint(9, 0, None)`
    IntRange(i64, i64),
    /// `GIter::syracuse(0, false)`
    Start(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "step cannot be zero"),
            Self::Bound(name, x) => write!(f, "{name} must be between 0 and 1, but is {x}"),
            Self::Negative(name, n) => write!(f, "{name} cannot be negative, but is {n}"),
            Self::IntRange(min, max) => {
                write!(f, "minimum {min} must not be bigger than maximum {max}")
            }
            Self::Start(n) => write!(f, "starting integer must be strictly positive, but is {n}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[test]
fn display() {
    use alloc::string::ToString;
    assert_eq!(Error::ZeroStep.to_string(), "step cannot be zero");
    assert_eq!(
        Error::Negative("max size", -2).to_string(),
        "max size cannot be negative, but is -2"
    );
}
