use super::{Direction, DirectionSet, DpCell, DpMatrix, LocalAlignment};
use std::{fmt, ops::Index};

impl fmt::Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Direction> for DirectionSet {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut out = DirectionSet::EMPTY;
        for direction in iter {
            out.insert(direction);
        }
        out
    }
}

/// Renders `score|code`, or only the score for a boundary cell.
impl fmt::Display for DpCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.directions.display_code() {
            Some(code) => write!(f, "{}|{}", self.maximum, code as char),
            None => write!(f, "{}", self.maximum),
        }
    }
}

impl Index<(usize, usize)> for DpMatrix {
    type Output = DpCell;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.cols + col]
    }
}

/// Writes the two aligned strings on separate lines.
impl fmt::Display for LocalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.first.escape_ascii())?;
        write!(f, "{}", self.second.escape_ascii())
    }
}
