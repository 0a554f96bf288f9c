use crate::alignment::{DpCell, DpMatrix};
use std::fmt::{self, Write};

/// Plain-text export of a filled [`DpMatrix`].
///
/// The first line is `- -` followed by the symbols of the first sequence, and
/// the second is `- 0` followed by a `0` for each of them. Then comes one line
/// per symbol of the second sequence: the symbol, `0`, and each cell as
/// `score|code`, where the code is the cell's
/// [`display_code`](crate::alignment::DirectionSet::display_code). Every entry
/// after the first two columns is right-justified to the width of the longest
/// rendered cell, and entries are separated by one space.
///
/// If either sequence is empty, nothing is rendered.
///
/// ```
/// # use waterman::{alignment::{AlignmentParams, ScoringScheme, sw::sw_local_alignment}, report::MatrixGrid};
/// let params = AlignmentParams::new(ScoringScheme::new_nucleotide(1, -1), -1);
/// let run = sw_local_alignment(b"AC", b"CA", &params).unwrap();
/// let grid = MatrixGrid::new(&run.matrix, b"AC", b"CA");
///
/// assert_eq!(grid.to_string(), "- -   A   C\n- 0   0   0\nC 0 0|z 1|d\nA 0 1|d 0|l\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MatrixGrid<'a> {
    matrix: &'a DpMatrix,
    seq1:   &'a [u8],
    seq2:   &'a [u8],
}

impl<'a> MatrixGrid<'a> {
    /// The name of the file the grid is written to.
    pub const FILE_NAME: &'static str = "alignment_matrix.txt";

    /// Pairs a matrix with the sequences it was built from: `seq1` labels the
    /// columns and `seq2` the rows.
    #[inline]
    #[must_use]
    pub fn new(matrix: &'a DpMatrix, seq1: &'a [u8], seq2: &'a [u8]) -> Self {
        MatrixGrid { matrix, seq1, seq2 }
    }

    /// Iterates over the interior rows paired with their row symbol.
    fn interior_rows(&self) -> impl Iterator<Item = (u8, &'a [DpCell])> + '_ {
        let seq1_len = self.seq1.len();
        self.seq2
            .iter()
            .copied()
            .zip(self.matrix.iter_rows().skip(1))
            .map(move |(symbol, row)| (symbol, row.get(1..=seq1_len).unwrap_or_default()))
    }

    /// The width every cell column is padded to. Zero when there are no
    /// interior cells.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        let mut buffer = itoa::Buffer::new();
        self.interior_rows()
            .flat_map(|(_, row)| row.iter())
            .map(|cell| rendered_len(&mut buffer, cell))
            .max()
            .unwrap_or(0)
    }
}

#[inline]
fn rendered_len(buffer: &mut itoa::Buffer, cell: &DpCell) -> usize {
    let score = buffer.format(cell.maximum).len();
    if cell.directions.display_code().is_some() {
        score + 2
    } else {
        score
    }
}

fn render_cell(buffer: &mut itoa::Buffer, cell: &DpCell, out: &mut String) {
    out.clear();
    out.push_str(buffer.format(cell.maximum));
    if let Some(code) = cell.directions.display_code() {
        out.push('|');
        out.push(char::from(code));
    }
}

impl fmt::Display for MatrixGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.seq1.is_empty() || self.seq2.is_empty() {
            return Ok(());
        }

        let width = self.cell_width();

        f.write_str("- -")?;
        for &symbol in self.seq1 {
            write!(f, " {:>width$}", char::from(symbol))?;
        }
        f.write_char('\n')?;

        f.write_str("- 0")?;
        for _ in self.seq1 {
            write!(f, " {:>width$}", '0')?;
        }
        f.write_char('\n')?;

        let mut buffer = itoa::Buffer::new();
        let mut cell_text = String::with_capacity(width);
        for (symbol, row) in self.interior_rows() {
            write!(f, "{} 0", char::from(symbol))?;
            for cell in row {
                render_cell(&mut buffer, cell, &mut cell_text);
                write!(f, " {cell_text:>width$}")?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}
