//! ## Functions for aligning sequence data.
//!
//! *Waterman* aligns pairs of nucleotide or protein sequences.
//!
//! - [Smith-Waterman]: Optimal local alignment with a linear gap penalty in
//!   the [`sw`] module.
//!
//! Residue pairs are scored through a [`ScoringScheme`], either a fixed
//! match/mismatch pair or a named [`SubstitutionMatrix`]. The scheme and the
//! gap penalty together form the [`AlignmentParams`] passed to every
//! alignment function.
//!
//! [Smith-Waterman]: https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm
//! [`SubstitutionMatrix`]: crate::data::matrices::SubstitutionMatrix

pub mod sw;

mod errors;
mod scoring;
mod types;

pub use errors::*;
pub use scoring::*;
pub use types::*;
