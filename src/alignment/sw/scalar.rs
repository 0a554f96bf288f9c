use super::*;

/// Fills the Smith-Waterman matrix for `seq1` (columns) against `seq2` (rows)
/// and tracks the best cell.
///
/// Cell $(i, j)$ scores `seq1[j-1]` against `seq2[i-1]`. The best cell is only
/// replaced by a strictly larger score, so ties keep the earliest position in
/// row-major order. When no cell scores above zero, the best cell stays at
/// $(0, 0)$ with score 0.
///
/// ## Errors
///
/// Returns [`ScoringError::UnknownResiduePair`] for the first residue pair the
/// scoring scheme rejects.
pub fn sw_build_matrix(
    seq1: &[u8], seq2: &[u8], params: &AlignmentParams,
) -> Result<(DpMatrix, MaxScore), ScoringError> {
    warn_positive_gap(params);

    let rows = seq2.len() + 1;
    let cols = seq1.len() + 1;
    log::debug!("Filling a {rows} x {cols} scoring matrix");

    let mut matrix = DpMatrix::new(rows, cols);
    let mut best = MaxScore::default();

    for (i, &b) in seq2.iter().enumerate() {
        let row = i + 1;
        for (j, &a) in seq1.iter().enumerate() {
            let col = j + 1;
            let cell = cell_from_neighbors(
                matrix[(row - 1, col - 1)].maximum,
                matrix[(row, col - 1)].maximum,
                matrix[(row - 1, col)].maximum,
                a,
                b,
                params,
            )?;
            best.update(cell.maximum, row, col);
            matrix.set(row, col, cell);
        }
    }

    Ok((matrix, best))
}

/// Smith-Waterman algorithm yielding only the optimal local score.
///
/// Produces the same score as [`sw_local_alignment`], including the same
/// errors, but keeps a single row of the matrix.
///
/// See **[module citations](crate::alignment::sw#module-citations)**.
///
/// ## Complexity
///
/// For sequence lengths $n$ and $m$:
///
/// - Time: $O(mn)$
/// - Space: $O(n)$
///
/// ## Errors
///
/// Returns [`ScoringError::UnknownResiduePair`] if the scoring scheme cannot
/// score a pair of residues.
///
/// ## Example
///
/// ```
/// # use waterman::{alignment::{AlignmentParams, ScoringScheme, sw::sw_score}, data::matrices::SubstitutionMatrix};
/// let params = AlignmentParams::new(ScoringScheme::Substitution(SubstitutionMatrix::Blosum50), -8);
/// assert_eq!(sw_score(b"HEAGAWGHEE", b"PAWHEAE", &params).unwrap(), 28);
/// ```
pub fn sw_score(seq1: &[u8], seq2: &[u8], params: &AlignmentParams) -> Result<i32, ScoringError> {
    warn_positive_gap(params);

    // H[i-1, ..], starting with row 0
    let mut prev = vec![0; seq1.len() + 1];
    // H[i, ..]
    let mut curr = vec![0; seq1.len() + 1];
    let mut best = 0;

    for &b in seq2 {
        for (j, &a) in seq1.iter().enumerate() {
            let col = j + 1;
            let cell = cell_from_neighbors(prev[col - 1], curr[col - 1], prev[col], a, b, params)?;
            best = best.max(cell.maximum);
            curr[col] = cell.maximum;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(best)
}
