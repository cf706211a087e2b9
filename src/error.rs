//! Errors reported by Boolean function operations and the decoder.

use std::fmt;

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A parameter is outside its allowed domain, or two operands disagree in arity.
    InvalidArgument,
    /// A truth table index is outside `0..2^m`.
    OutOfRange,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Number of variables outside `0..=MAX_VARS`.
    InvalidArity { num_vars: u32 },
    /// Variable index outside `1..=num_vars`.
    InvalidVariable { var: u32, num_vars: u32 },
    /// Degree outside `0..=num_vars`.
    InvalidDegree { degree: u32, num_vars: u32 },
    /// Two operands have different numbers of variables.
    MismatchedArity { left: u32, right: u32 },
    /// Truth table index outside `0..size`.
    OutOfRange { index: usize, size: usize },
    /// Number of truth table values does not match any (or the expected) table size.
    InvalidLength { expected: Option<usize>, got: usize },
    /// Unexpected character in a textual truth table.
    InvalidChar { ch: char, position: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArity { num_vars } => {
                write!(
                    f,
                    "number of variables must be in 0..={}, got {}",
                    crate::function::MAX_VARS,
                    num_vars
                )
            }
            Error::InvalidVariable { var, num_vars } => {
                write!(f, "variable x{} out of range for {}-variable function", var, num_vars)
            }
            Error::InvalidDegree { degree, num_vars } => {
                write!(f, "degree must satisfy 0 <= s <= {}, got {}", num_vars, degree)
            }
            Error::MismatchedArity { left, right } => {
                write!(f, "variable count mismatch: {} vs {}", left, right)
            }
            Error::OutOfRange { index, size } => {
                write!(f, "input {} out of range 0..{}", index, size)
            }
            Error::InvalidLength { expected: Some(expected), got } => {
                write!(f, "expected {} truth table values, got {}", expected, got)
            }
            Error::InvalidLength { expected: None, got } => {
                write!(f, "truth table length must be a power of two, got {}", got)
            }
            Error::InvalidChar { ch, position } => {
                write!(f, "unexpected character {:?} at position {}", ch, position)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
