use super::ScoringError;
use crate::data::matrices::SubstitutionMatrix;

/// The strategy used to score one residue against another.
///
/// Exactly one strategy is active for a run. It is chosen once, usually via
/// [`AlignmentConfig::scoring_scheme`], and is read-only while any alignment
/// uses it.
///
/// [`AlignmentConfig::scoring_scheme`]: crate::config::AlignmentConfig::scoring_scheme
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum ScoringScheme {
    /// A fixed score for identical symbols (ignoring case) and another for
    /// everything else. Any byte is accepted.
    Nucleotide { matching: i32, mismatch: i32 },
    /// Scores from a named amino acid substitution matrix. Only the twenty
    /// standard residues are accepted.
    Substitution(SubstitutionMatrix),
}

impl ScoringScheme {
    #[inline]
    #[must_use]
    pub const fn new_nucleotide(matching: i32, mismatch: i32) -> Self {
        ScoringScheme::Nucleotide { matching, mismatch }
    }

    /// Scores residue `a` against residue `b`, ignoring case. The result does
    /// not depend on the order of the arguments.
    ///
    /// ## Errors
    ///
    /// With [`ScoringScheme::Substitution`], fails with
    /// [`ScoringError::UnknownResiduePair`] if either residue is absent from
    /// the matrix. Unknown residues are never scored as zero.
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> Result<i32, ScoringError> {
        match *self {
            ScoringScheme::Nucleotide { matching, mismatch } => {
                if a.eq_ignore_ascii_case(&b) {
                    Ok(matching)
                } else {
                    Ok(mismatch)
                }
            }
            ScoringScheme::Substitution(matrix) => match matrix.get_weight(a, b) {
                Some(weight) => Ok(i32::from(weight)),
                None => Err(ScoringError::UnknownResiduePair {
                    first: a,
                    second: b,
                    matrix,
                }),
            },
        }
    }
}

impl std::fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScoringScheme::Nucleotide { matching, mismatch } => write!(f, "match {matching}, mismatch {mismatch}"),
            ScoringScheme::Substitution(matrix) => write!(f, "{matrix}"),
        }
    }
}

/// The explicit context for one alignment run: the scoring strategy and the
/// linear gap penalty added for every gap symbol.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct AlignmentParams {
    pub scheme:      ScoringScheme,
    pub gap_penalty: i32,
}

impl AlignmentParams {
    #[inline]
    #[must_use]
    pub const fn new(scheme: ScoringScheme, gap_penalty: i32) -> Self {
        AlignmentParams { scheme, gap_penalty }
    }

    /// Shorthand for [`ScoringScheme::score`].
    ///
    /// ## Errors
    ///
    /// See [`ScoringScheme::score`].
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> Result<i32, ScoringError> {
        self.scheme.score(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nucleotide_scores() {
        let scheme = ScoringScheme::new_nucleotide(2, -1);
        assert_eq!(scheme.score(b'A', b'a'), Ok(2));
        assert_eq!(scheme.score(b'N', b'N'), Ok(2));
        assert_eq!(scheme.score(b'G', b'T'), Ok(-1));
        assert_eq!(scheme.to_string(), "match 2, mismatch -1");
    }

    #[test]
    fn substitution_scores() {
        let scheme = ScoringScheme::Substitution(SubstitutionMatrix::Pam30);
        assert_eq!(scheme.score(b'A', b'R'), Ok(-7));
        assert_eq!(scheme.score(b'r', b'a'), Ok(-7));
        assert_eq!(
            scheme.score(b'A', b'*'),
            Err(ScoringError::UnknownResiduePair {
                first:  b'A',
                second: b'*',
                matrix: SubstitutionMatrix::Pam30,
            })
        );
        assert_eq!(scheme.to_string(), "PAM30");

        let params = AlignmentParams::new(scheme, -3);
        assert_eq!(params.score(b'W', b'W'), scheme.score(b'W', b'W'));
    }
}
