use crate::data::{err::GetCode, matrices::SubstitutionMatrix};
use std::{error::Error, fmt};

/// An enum representing errors that can happen when scoring a pair of residues
/// while building the dynamic programming matrix.
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    /// The residue pair has no entry in the substitution matrix, in either
    /// order
    UnknownResiduePair {
        first:  u8,
        second: u8,
        matrix: SubstitutionMatrix,
    },
}

impl fmt::Display for ScoringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoringError::UnknownResiduePair { first, second, matrix } => write!(
                f,
                "The residue pair ({first}, {second}) is not scored by the {matrix} substitution matrix!",
                first = first.escape_ascii(),
                second = second.escape_ascii(),
            ),
        }
    }
}

impl fmt::Debug for ScoringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ScoringError {}

impl GetCode for ScoringError {
    fn get_code(&self) -> i32 {
        3
    }
}
