use super::*;
use crate::alignment::Direction;

/// Recovers the local alignment ending at `best` by following the recorded
/// directions back through `matrix`.
///
/// A diagonal move aligns `seq1[col-1]` with `seq2[row-1]`, a left move
/// aligns `seq1[col-1]` with a gap, and an up move aligns a gap with
/// `seq2[row-1]`. The walk stops at a cell scoring zero or on row or column 0.
/// If `best` has a score of 0, the alignment is empty.
///
/// ## Panics
///
/// `matrix` and `best` must come from [`sw_build_matrix`] called with the same
/// `seq1` and `seq2`. Otherwise this may index out of bounds.
#[must_use]
pub fn sw_traceback(matrix: &DpMatrix, best: &MaxScore, seq1: &[u8], seq2: &[u8]) -> LocalAlignment {
    let (mut row, mut col) = (best.row, best.col);
    let mut first = Vec::new();
    let mut second = Vec::new();

    while row > 0 && col > 0 && matrix[(row, col)].maximum > 0 {
        match matrix[(row, col)].directions.traceback_move() {
            Some(Direction::Diagonal) => {
                first.push(seq1[col - 1]);
                second.push(seq2[row - 1]);
                row -= 1;
                col -= 1;
            }
            Some(Direction::Left) => {
                first.push(seq1[col - 1]);
                second.push(LocalAlignment::GAP);
                col -= 1;
            }
            Some(Direction::Up) => {
                first.push(LocalAlignment::GAP);
                second.push(seq2[row - 1]);
                row -= 1;
            }
            // Unreachable for a positive cell
            Some(Direction::Zero) | None => break,
        }
    }

    first.reverse();
    second.reverse();

    LocalAlignment {
        first,
        second,
        score: best.score,
        first_range: col..best.col,
        second_range: row..best.row,
    }
}
