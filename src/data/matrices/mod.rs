//! ## Substitution Matrices for Protein Alignment
//!
//! *Waterman* ships the eight amino acid substitution matrices most commonly
//! used for local protein alignment:
//!
//! - BLOSUM matrices: [BLOSUM](https://en.wikipedia.org/wiki/BLOSUM) tables
//!   were derived in 1992 (2) from blocks of aligned protein segments that
//!   were first clustered at $r$% identity. The scores are scaled and rounded
//!   log odds of observing each residue pair.
//! - PAM matrices: [PAM](https://en.wikipedia.org/wiki/Point_accepted_mutation)
//!   tables (1) extrapolate a single observed mutation matrix to $n$ accepted
//!   point mutations per 100 residues by taking its $n$th power.
//!
//! Higher BLOSUM numbers and lower PAM numbers suit closely related proteins.
//! BLOSUM62 is the usual starting point and is the default elsewhere in this
//! crate.
//!
//! Only the twenty standard residues are present. Ambiguity codes (`B`, `Z`,
//! `J`, `X`) and the stop symbol `*` have no score, and asking for one is an
//! error rather than a silent zero (see [`ScoringError`]).
//!
//! ## Module Citations
//!
//! 1. Dayhoff, M., Schwartz, R., & Orcutt, B. (1978). "A model of evolutionary
//!    change in proteins". In M. Dayhoff (Ed.), Atlas of Protein Sequence and
//!    Structure (Vol. 5, pp. 345–352). Washington, D. C.: National Biomedical
//!    Research Foundation.
//!
//! 2. Henikoff, S., & Henikoff, J. G. (1992). "Amino acid substitution matrices
//!    from protein blocks". Proceedings of the National Academy of Sciences of
//!    the United States of America, 89(22), 10915–10919. doi:
//!    <https://doi.org/10.1073/pnas.89.22.10915>
//!
//! [`ScoringError`]: crate::alignment::ScoringError

use crate::data::constants::matrices::{
    AA_RESIDUE_INDEX, AA_RESIDUES, BLOSUM45, BLOSUM50, BLOSUM62, BLOSUM80, BLOSUM90, NO_RESIDUE, PAM30, PAM70, PAM250,
};

mod parse;

#[cfg(test)]
mod test;

/// One of the eight named amino acid substitution matrices.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum SubstitutionMatrix {
    Blosum45,
    Blosum50,
    #[default]
    Blosum62,
    Blosum80,
    Blosum90,
    Pam30,
    Pam70,
    Pam250,
}

impl SubstitutionMatrix {
    /// Every supported matrix, in the order they are usually listed.
    pub const ALL: [SubstitutionMatrix; 8] = [
        SubstitutionMatrix::Blosum45,
        SubstitutionMatrix::Blosum50,
        SubstitutionMatrix::Blosum62,
        SubstitutionMatrix::Blosum80,
        SubstitutionMatrix::Blosum90,
        SubstitutionMatrix::Pam30,
        SubstitutionMatrix::Pam70,
        SubstitutionMatrix::Pam250,
    ];

    /// The residues with a row (and column) in every matrix.
    pub const RESIDUES: &'static [u8; 20] = &AA_RESIDUES;

    /// The conventional upper-case name, such as `BLOSUM62`.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SubstitutionMatrix::Blosum45 => "BLOSUM45",
            SubstitutionMatrix::Blosum50 => "BLOSUM50",
            SubstitutionMatrix::Blosum62 => "BLOSUM62",
            SubstitutionMatrix::Blosum80 => "BLOSUM80",
            SubstitutionMatrix::Blosum90 => "BLOSUM90",
            SubstitutionMatrix::Pam30 => "PAM30",
            SubstitutionMatrix::Pam70 => "PAM70",
            SubstitutionMatrix::Pam250 => "PAM250",
        }
    }

    #[inline]
    const fn weights(self) -> &'static [[i8; 20]; 20] {
        match self {
            SubstitutionMatrix::Blosum45 => &BLOSUM45,
            SubstitutionMatrix::Blosum50 => &BLOSUM50,
            SubstitutionMatrix::Blosum62 => &BLOSUM62,
            SubstitutionMatrix::Blosum80 => &BLOSUM80,
            SubstitutionMatrix::Blosum90 => &BLOSUM90,
            SubstitutionMatrix::Pam30 => &PAM30,
            SubstitutionMatrix::Pam70 => &PAM70,
            SubstitutionMatrix::Pam250 => &PAM250,
        }
    }

    /// Retrieves the score for aligning residue `a` against residue `b`,
    /// ignoring case. The pair is unordered, so swapping the arguments gives
    /// the same score.
    ///
    /// Returns `None` when either byte is not one of the twenty standard
    /// residues.
    #[inline]
    #[must_use]
    pub const fn get_weight(self, a: u8, b: u8) -> Option<i8> {
        let i = AA_RESIDUE_INDEX[a as usize];
        let j = AA_RESIDUE_INDEX[b as usize];
        if i == NO_RESIDUE || j == NO_RESIDUE {
            None
        } else {
            Some(self.weights()[i as usize][j as usize])
        }
    }

    /// Returns true if `residue` has a row in the matrices (either case).
    #[inline]
    #[must_use]
    pub const fn contains(residue: u8) -> bool {
        AA_RESIDUE_INDEX[residue as usize] != NO_RESIDUE
    }
}

impl std::fmt::Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
