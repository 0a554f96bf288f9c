use crate::alignment::LocalAlignment;
use std::fmt;

/// The marker shown between the two aligned strings for one column.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ColumnMarker {
    /// Identical symbols, ignoring case
    Identity,
    /// A gap in either sequence
    Gap,
    Mismatch,
}

impl ColumnMarker {
    #[inline]
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        if a.eq_ignore_ascii_case(&b) {
            ColumnMarker::Identity
        } else if a == LocalAlignment::GAP || b == LocalAlignment::GAP {
            ColumnMarker::Gap
        } else {
            ColumnMarker::Mismatch
        }
    }

    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ColumnMarker::Identity => '|',
            ColumnMarker::Gap => ' ',
            ColumnMarker::Mismatch => '•',
        }
    }
}

/// Line-wrapped rendering of a [`LocalAlignment`] for the report.
///
/// Each block covers up to [`AlignmentBlocks::WIDTH`] columns and consists of
/// three lines: the first sequence, the column markers, and the second
/// sequence. Sequence lines start with the sequence name, left-justified in a
/// label column four characters wider than the longer name; the marker line
/// leaves the label column blank. An empty alignment still renders one block
/// holding only the labels.
///
/// ```
/// # use waterman::{alignment::LocalAlignment, report::AlignmentBlocks};
/// let alignment = LocalAlignment {
///     first: b"GTT-AC".to_vec(),
///     second: b"GTTGAT".to_vec(),
///     score: 10,
///     ..Default::default()
/// };
/// let blocks = AlignmentBlocks::new(&alignment, "s1", "seq2");
///
/// assert_eq!(blocks.to_string(), "s1      GTT-AC\n        ||| |•\nseq2    GTTGAT\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AlignmentBlocks<'a> {
    alignment:   &'a LocalAlignment,
    first_name:  &'a str,
    second_name: &'a str,
}

impl<'a> AlignmentBlocks<'a> {
    /// The number of alignment columns per block.
    pub const WIDTH: usize = 60;

    #[inline]
    #[must_use]
    pub fn new(alignment: &'a LocalAlignment, first_name: &'a str, second_name: &'a str) -> Self {
        AlignmentBlocks {
            alignment,
            first_name,
            second_name,
        }
    }

    /// The width of the name column, in characters.
    #[inline]
    #[must_use]
    pub fn label_width(&self) -> usize {
        self.first_name.chars().count().max(self.second_name.chars().count()) + 4
    }

    /// Renders every block as its three lines.
    #[must_use]
    pub fn blocks(&self) -> Vec<[String; 3]> {
        let width = self.label_width();
        let label = |name: &str| format!("{name:<width$}");

        let mut out = Vec::with_capacity(self.alignment.len().div_ceil(Self::WIDTH).max(1));
        let mut first = self.alignment.first.chunks(Self::WIDTH);
        let mut second = self.alignment.second.chunks(Self::WIDTH);

        loop {
            let (a, b) = match (first.next(), second.next()) {
                (Some(a), Some(b)) => (a, b),
                (None, None) if out.is_empty() => (&[][..], &[][..]),
                _ => break,
            };

            let mut top = label(self.first_name);
            let mut middle = label("");
            let mut bottom = label(self.second_name);
            for (&x, &y) in a.iter().zip(b) {
                top.push(char::from(x));
                middle.push(ColumnMarker::new(x, y).symbol());
                bottom.push(char::from(y));
            }
            out.push([top, middle, bottom]);
        }

        out
    }
}

/// Blocks are separated by a blank line. Every line ends with a newline.
impl fmt::Display for AlignmentBlocks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, block) in self.blocks().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for line in block {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
