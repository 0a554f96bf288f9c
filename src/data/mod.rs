//! ## Data import and scoring tables.
//!
//! ## Residue Alphabets
//!
//! Nucleotide scoring compares bytes directly (ignoring case), so any symbol
//! is accepted, including IUPAC ambiguity codes. Protein scoring is limited
//! to the twenty standard amino acids shared by every
//! [`SubstitutionMatrix`]. Ambiguity codes such as `B`, `Z`, `J`, and `X`, as
//! well as the stop symbol `*`, are rejected with a [`ScoringError`] rather
//! than scored as zero.
//!
//! ## IO Errors in *Waterman*
//!
//! For scoring and configuration, *Waterman* has enum-style error types such
//! as [`ScoringError`] or [`ConfigError`], which the user can match on or
//! display. For working with files and record types, however, *Waterman*
//! elects to use [`std::io::Error`], allowing for system IO errors to be
//! propagated and function-specific error messages to be represented with
//! [`ErrorKind::InvalidData`] or [`ErrorKind::InvalidInput`].
//!
//! IO failures are assumed to be rare, and hence the crate will automatically
//! add the file path to the error messages (such as
//! [`FastaReader::from_filename`]). When context is added, the original error
//! is kept and accessible using [`Error::source`]. Binaries can use
//! [`unwrap_or_fail`] to log the error and exit with the code given by
//! [`GetCode`].
//!
//! [`SubstitutionMatrix`]: matrices::SubstitutionMatrix
//! [`ScoringError`]: crate::alignment::ScoringError
//! [`ConfigError`]: crate::config::ConfigError
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`ErrorKind::InvalidInput`]: std::io::ErrorKind::InvalidInput
//! [`FastaReader::from_filename`]: fasta::FastaReader::from_filename
//! [`Error::source`]: std::error::Error::source
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`GetCode`]: err::GetCode

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
pub mod matrices;
/// A module for records types--usually for I/O--that are structures of other
/// more primitive types.
pub mod records;

/// A private module for the raw substitution tables.
pub(crate) mod constants;

pub use records::fasta;
