//! ## Smith-Waterman Alignment
//!
//! For the optimal local score alone use [`sw_score`]. For the full result
//! (the filled matrix, the position of the best cell, and the aligned strings)
//! use [`sw_local_alignment`].
//!
//! ### Linear Gap Penalties
//!
//! Every gap symbol adds the same penalty, so a gap of length $k$ costs
//! $W(k) = gk$. The penalty is added to the score, so it should be zero or
//! negative; a positive penalty is accepted but rewards gaps.
//!
//! ### Matrix Layout
//!
//! The first sequence runs along the columns and the second along the rows,
//! giving a matrix of $(m+1) \times (n+1)$ cells for sequences of length $n$
//! and $m$. Row 0 and column 0 hold zeros. Each interior cell stores the three
//! candidate scores (diagonal, left, up) next to its maximum, along with every
//! [`Direction`] achieving that maximum (see [`DpCell::from_candidates`]).
//!
//! ### Traceback
//!
//! The traceback starts at the first cell holding the global maximum in
//! row-major order and stops at a cell scoring zero or at the boundary. When
//! several moves tie, the diagonal is preferred, then left, then up, so exactly
//! one alignment is returned even if others are co-optimal.
//!
//! ```
//! # use waterman::alignment::{AlignmentParams, ScoringScheme, sw::sw_local_alignment};
//! let params = AlignmentParams::new(ScoringScheme::new_nucleotide(3, -3), -2);
//! let run = sw_local_alignment(b"TGTTACGG", b"GGTTGACTA", &params).unwrap();
//!
//! assert_eq!(run.alignment.score, 13);
//! assert_eq!(run.alignment.first, b"GTT-AC");
//! assert_eq!(run.alignment.second, b"GTTGAC");
//! assert_eq!((run.max_score.row, run.max_score.col), (7, 6));
//! ```
//!
//! ## Module Citations
//!
//! 1. Smith, Temple F. & Waterman, Michael S. (1981). "Identification of Common
//!    Molecular Subsequences" (PDF). Journal of Molecular Biology. 147 (1):
//!    195–197.
//!
//! 2. Durbin, Richard, Eddy, Sean R., Krogh, Anders & Mitchison, Graeme (1998).
//!    "Biological Sequence Analysis: Probabilistic Models of Proteins and
//!    Nucleic Acids". Cambridge University Press. Chapter 2.3.
//!
//! [`Direction`]: crate::alignment::Direction
//! [`DpCell::from_candidates`]: crate::alignment::DpCell::from_candidates

use super::{AlignmentParams, DpCell, DpMatrix, LocalAlignment, MaxScore, ScoringError};

mod scalar;
mod traceback;

#[cfg(test)]
mod test;

pub use scalar::*;
pub use traceback::*;

/// Everything produced by one call to [`sw_local_alignment`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SwRun {
    /// The filled dynamic programming matrix
    pub matrix:    DpMatrix,
    /// The best score and the first cell where it occurs
    pub max_score: MaxScore,
    /// The alignment traced back from that cell
    pub alignment: LocalAlignment,
}

/// Smith-Waterman local alignment with a linear gap penalty.
///
/// Fills the matrix with [`sw_build_matrix`], then recovers the alignment with
/// [`sw_traceback`]. Both inputs are used as given: no case folding or
/// validation happens here beyond what the scoring scheme performs, and the
/// aligned strings keep the original case.
///
/// See **[module citations](crate::alignment::sw#module-citations)**.
///
/// ## Complexity
///
/// For sequence lengths $n$ and $m$:
///
/// - Time: $O(mn)$
/// - Space: $O(mn)$
///
/// ## Errors
///
/// Returns [`ScoringError::UnknownResiduePair`] if the scoring scheme cannot
/// score a pair of residues. No partial result is produced.
///
/// ## Example
///
/// ```
/// # use waterman::alignment::{AlignmentParams, ScoringScheme, sw::sw_local_alignment};
/// let params = AlignmentParams::new(ScoringScheme::new_nucleotide(2, -1), -2);
/// let run = sw_local_alignment(b"ACACACTA", b"AGCACACA", &params).unwrap();
///
/// assert_eq!(run.alignment.score, 10);
/// assert_eq!(run.alignment.first, b"CACAC");
/// assert_eq!(run.alignment.second, b"CACAC");
/// ```
pub fn sw_local_alignment(seq1: &[u8], seq2: &[u8], params: &AlignmentParams) -> Result<SwRun, ScoringError> {
    let (matrix, max_score) = sw_build_matrix(seq1, seq2, params)?;
    log::debug!(
        "Best score {} first seen at row {}, column {}",
        max_score.score,
        max_score.row,
        max_score.col
    );

    let alignment = sw_traceback(&matrix, &max_score, seq1, seq2);
    log::debug!("Traced back {} alignment columns", alignment.len());

    Ok(SwRun {
        matrix,
        max_score,
        alignment,
    })
}

#[inline]
fn warn_positive_gap(params: &AlignmentParams) {
    if params.gap_penalty > 0 {
        log::warn!(
            "The gap penalty {} is positive, so gaps will increase the score",
            params.gap_penalty
        );
    }
}

#[inline]
fn cell_from_neighbors(
    diagonal: i32, left: i32, up: i32, a: u8, b: u8, params: &AlignmentParams,
) -> Result<DpCell, ScoringError> {
    let weight = params.score(a, b)?;
    Ok(DpCell::from_candidates(
        diagonal.saturating_add(weight),
        left.saturating_add(params.gap_penalty),
        up.saturating_add(params.gap_penalty),
    ))
}
