use std::ops::Range;

mod std_traits;


/// A move into a cell of the dynamic programming matrix.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    /// From the upper-left neighbor, aligning one residue of each sequence
    Diagonal,
    /// From the left neighbor, placing a gap in the second sequence
    Left,
    /// From the upper neighbor, placing a gap in the first sequence
    Up,
    /// A restart: every other candidate score was negative
    Zero,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Diagonal, Direction::Left, Direction::Up, Direction::Zero];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::Diagonal => 1,
            Direction::Left => 2,
            Direction::Up => 4,
            Direction::Zero => 8,
        }
    }

    /// The one-letter code used when exporting the matrix.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Diagonal => b'd',
            Direction::Left => b'l',
            Direction::Up => b'u',
            Direction::Zero => b'z',
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Diagonal => "diagonal",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Zero => "zero",
        }
    }
}

/// Every [`Direction`] reaching a cell with its maximum score, plus the
/// [`Direction::Zero`] marker when all three moves scored below zero.
///
/// Stored as bit flags, so at most four members fit and insertion order is
/// irrelevant.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    #[inline]
    pub const fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline]
    #[must_use]
    pub const fn with(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the members in the order diagonal, left, up, zero.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// The move followed during traceback: the first member among diagonal,
    /// left, and up, in that order. Ties between co-optimal moves are broken
    /// by this fixed priority, so exactly one alignment is recovered.
    #[inline]
    #[must_use]
    pub const fn traceback_move(self) -> Option<Direction> {
        if self.contains(Direction::Diagonal) {
            Some(Direction::Diagonal)
        } else if self.contains(Direction::Left) {
            Some(Direction::Left)
        } else if self.contains(Direction::Up) {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// The single code shown for this set in the exported matrix, by priority
    /// diagonal, left, up, zero. `None` for boundary cells.
    #[inline]
    #[must_use]
    pub const fn display_code(self) -> Option<u8> {
        match self.traceback_move() {
            Some(direction) => Some(direction.code()),
            None if self.contains(Direction::Zero) => Some(Direction::Zero.code()),
            None => None,
        }
    }

    /// Exchanges [`Direction::Left`] and [`Direction::Up`].
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        let mut out = DirectionSet(self.0 & (Direction::Diagonal.bit() | Direction::Zero.bit()));
        if self.contains(Direction::Left) {
            out.insert(Direction::Up);
        }
        if self.contains(Direction::Up) {
            out.insert(Direction::Left);
        }
        out
    }
}

/// One cell of the dynamic programming matrix.
///
/// Besides the cell's score, the three candidate scores are kept so that the
/// matrix can be inspected after the run. The fourth candidate, the local
/// restart, is always 0.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct DpCell {
    pub diagonal:   i32,
    pub left:       i32,
    pub up:         i32,
    pub maximum:    i32,
    pub directions: DirectionSet,
}

impl DpCell {
    /// The fixed cell of row 0 and column 0.
    pub const BOUNDARY: DpCell = DpCell {
        diagonal:   0,
        left:       0,
        up:         0,
        maximum:    0,
        directions: DirectionSet::EMPTY,
    };

    /// Builds a cell from its three candidate scores. The maximum is floored at
    /// zero, and every candidate equal to the maximum is recorded.
    #[must_use]
    pub fn from_candidates(diagonal: i32, left: i32, up: i32) -> Self {
        let maximum = diagonal.max(left).max(up).max(0);
        let mut directions = DirectionSet::EMPTY;

        if diagonal == maximum {
            directions.insert(Direction::Diagonal);
        }
        if left == maximum {
            directions.insert(Direction::Left);
        }
        if up == maximum {
            directions.insert(Direction::Up);
        }
        if diagonal < 0 && left < 0 && up < 0 {
            directions.insert(Direction::Zero);
        }

        DpCell {
            diagonal,
            left,
            up,
            maximum,
            directions,
        }
    }

    /// The same cell seen from the transposed matrix.
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        DpCell {
            diagonal:   self.diagonal,
            left:       self.up,
            up:         self.left,
            maximum:    self.maximum,
            directions: self.directions.transposed(),
        }
    }
}

/// A dense, row-major grid of [`DpCell`] with one more row than the second
/// sequence and one more column than the first.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DpMatrix {
    cells: Vec<DpCell>,
    rows:  usize,
    cols:  usize,
}

impl DpMatrix {
    /// A matrix of boundary cells.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        DpMatrix {
            cells: vec![DpCell::BOUNDARY; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&DpCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: DpCell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// The cells of one row.
    ///
    /// ## Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[DpCell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the rows, top to bottom. A matrix without columns still
    /// yields one empty slice per row.
    #[inline]
    pub fn iter_rows(&self) -> impl Iterator<Item = &[DpCell]> {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// The maximum of every cell, row-major.
    #[must_use]
    pub fn maximum_scores(&self) -> Vec<i32> {
        self.cells.iter().map(|cell| cell.maximum).collect()
    }

    /// The largest cell score anywhere in the matrix, or 0 if it is empty.
    #[must_use]
    pub fn max_score(&self) -> i32 {
        self.cells.iter().map(|cell| cell.maximum).max().unwrap_or(0)
    }

    /// Swaps rows and columns, exchanging the left and up moves in every cell.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = DpMatrix::new(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.set(col, row, self[(row, col)].transposed());
            }
        }
        out
    }
}

/// The largest cell score found while building the matrix and where it was
/// first seen in row-major order.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct MaxScore {
    pub score: i32,
    pub row:   usize,
    pub col:   usize,
}

impl MaxScore {
    /// Records `score` at (`row`, `col`) only if it strictly improves on the
    /// current best, so that the first occurrence of a tie is kept.
    #[inline]
    pub fn update(&mut self, score: i32, row: usize, col: usize) {
        if score > self.score {
            *self = MaxScore { score, row, col };
        }
    }
}

/// The optimal local alignment: both sequences' aligned segments of equal
/// length, with `-` marking gaps, and the score that was traced back.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LocalAlignment {
    pub first:        Vec<u8>,
    pub second:       Vec<u8>,
    pub score:        i32,
    /// The aligned positions within the first sequence (0-based, exclusive
    /// end)
    pub first_range:  Range<usize>,
    /// The aligned positions within the second sequence (0-based, exclusive
    /// end)
    pub second_range: Range<usize>,
}

impl LocalAlignment {
    /// The gap symbol used in both aligned strings.
    pub const GAP: u8 = b'-';

    /// The number of alignment columns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// The aligned segment of the first sequence without gaps.
    #[must_use]
    pub fn ungapped_first(&self) -> Vec<u8> {
        self.first.iter().copied().filter(|&b| b != Self::GAP).collect()
    }

    /// The aligned segment of the second sequence without gaps.
    #[must_use]
    pub fn ungapped_second(&self) -> Vec<u8> {
        self.second.iter().copied().filter(|&b| b != Self::GAP).collect()
    }

    /// The number of columns with identical residues, ignoring case.
    #[must_use]
    pub fn identity_count(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a != Self::GAP && a.eq_ignore_ascii_case(&b))
            .count()
    }

    /// The number of columns holding a gap in either sequence.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.columns().filter(|&(a, b)| a == Self::GAP || b == Self::GAP).count()
    }

    /// Iterates over the alignment columns as pairs of symbols.
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }
}
