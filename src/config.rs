//! ## Run configuration
//!
//! An [`AlignmentConfig`] gathers everything one alignment run needs: the kind
//! of sequence, the scoring choices, the gap penalty, the FASTA input, and
//! where to write results. It is built once and never changes during a run;
//! [`AlignmentConfig::params`] turns it into the [`AlignmentParams`] handed to
//! the engine.

use crate::{
    alignment::{AlignmentParams, ScoringScheme},
    data::{err::GetCode, matrices::SubstitutionMatrix},
};
use std::{
    error::Error,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

/// The residue alphabet of the two input sequences.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum SequenceType {
    Nucleotide,
    AminoAcid,
}

impl SequenceType {
    /// The short code accepted on the command line.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            SequenceType::Nucleotide => "nt",
            SequenceType::AminoAcid => "aa",
        }
    }

    #[inline]
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SequenceType::Nucleotide => "Nucleotide sequence",
            SequenceType::AminoAcid => "Amino acid sequence",
        }
    }
}

impl FromStr for SequenceType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.eq_ignore_ascii_case("nt") {
            Ok(SequenceType::Nucleotide)
        } else if code.eq_ignore_ascii_case("aa") {
            Ok(SequenceType::AminoAcid)
        } else {
            Err(ConfigError::UnknownSequenceType(code.to_string()))
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Options for one alignment run. See the field setters for defaults.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AlignmentConfig {
    sequence_type: SequenceType,
    fasta:         PathBuf,
    matrix:        SubstitutionMatrix,
    matching:      i32,
    mismatch:      i32,
    gap_penalty:   i32,
    output_dir:    Option<PathBuf>,
}

impl AlignmentConfig {
    /// Creates a configuration with a match score of 1, a mismatch score of 0,
    /// a gap penalty of 0, BLOSUM62, and output to the working directory.
    #[must_use]
    pub fn new(sequence_type: SequenceType, fasta: impl Into<PathBuf>) -> Self {
        AlignmentConfig {
            sequence_type,
            fasta: fasta.into(),
            matrix: SubstitutionMatrix::default(),
            matching: 1,
            mismatch: 0,
            gap_penalty: 0,
            output_dir: None,
        }
    }

    /// The substitution matrix, only used for amino acids.
    #[must_use]
    pub fn with_matrix(mut self, matrix: SubstitutionMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// The score for identical bases, only used for nucleotides.
    #[must_use]
    pub fn with_match(mut self, matching: i32) -> Self {
        self.matching = matching;
        self
    }

    /// The score for differing bases, only used for nucleotides.
    #[must_use]
    pub fn with_mismatch(mut self, mismatch: i32) -> Self {
        self.mismatch = mismatch;
        self
    }

    /// The score added per gap symbol. Usually zero or negative.
    #[must_use]
    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    #[inline]
    #[must_use]
    pub fn fasta(&self) -> &Path {
        &self.fasta
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> SubstitutionMatrix {
        self.matrix
    }

    #[inline]
    #[must_use]
    pub fn matching(&self) -> i32 {
        self.matching
    }

    #[inline]
    #[must_use]
    pub fn mismatch(&self) -> i32 {
        self.mismatch
    }

    #[inline]
    #[must_use]
    pub fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }

    /// The directory receiving the matrix and report files. Falls back to the
    /// current working directory, or `.` if that cannot be determined.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Selects the scoring strategy for the configured sequence type.
    #[inline]
    #[must_use]
    pub fn scoring_scheme(&self) -> ScoringScheme {
        match self.sequence_type {
            SequenceType::Nucleotide => ScoringScheme::new_nucleotide(self.matching, self.mismatch),
            SequenceType::AminoAcid => ScoringScheme::Substitution(self.matrix),
        }
    }

    /// The engine parameters for this configuration.
    #[inline]
    #[must_use]
    pub fn params(&self) -> AlignmentParams {
        AlignmentParams::new(self.scoring_scheme(), self.gap_penalty)
    }

    /// Checks the configuration before any work is attempted.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingFasta`] if the FASTA path does not point
    /// to a file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fasta.is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingFasta(self.fasta.clone()))
        }
    }
}

/// Errors detected while assembling or checking an [`AlignmentConfig`].
#[non_exhaustive]
pub enum ConfigError {
    /// A sequence type other than `nt` or `aa` was requested
    UnknownSequenceType(String),
    /// A substitution matrix name outside the supported set was requested
    UnknownMatrix(String),
    /// The FASTA input does not exist
    MissingFasta(PathBuf),
    /// The output directory could not be created
    OutputDirectory { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnknownSequenceType(code) => {
                write!(
                    f,
                    "Unsupported sequence type '{code}'. Choose one of: {nt} ({nt_desc}), {aa} ({aa_desc})",
                    nt = SequenceType::Nucleotide,
                    nt_desc = SequenceType::Nucleotide.description(),
                    aa = SequenceType::AminoAcid,
                    aa_desc = SequenceType::AminoAcid.description(),
                )
            }
            ConfigError::UnknownMatrix(name) => {
                write!(f, "Unsupported substitution matrix '{name}'. Choose one of: ")?;
                for (i, matrix) in SubstitutionMatrix::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(matrix.name())?;
                }
                Ok(())
            }
            ConfigError::MissingFasta(path) => write!(f, "The '{}' file doesn't exist!", path.display()),
            ConfigError::OutputDirectory { path, source } => {
                write!(f, "Couldn't create folder '{}': {source}", path.display())
            }
        }
    }
}

impl fmt::Debug for ConfigError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::OutputDirectory { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl GetCode for ConfigError {
    fn get_code(&self) -> i32 {
        match self {
            ConfigError::OutputDirectory { source, .. } => source.get_code(),
            _ => 2,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sequence_type_codes() {
        assert_eq!("NT".parse::<SequenceType>().unwrap(), SequenceType::Nucleotide);
        assert_eq!("aa".parse::<SequenceType>().unwrap(), SequenceType::AminoAcid);
        let err = "dna".parse::<SequenceType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported sequence type 'dna'. Choose one of: nt (Nucleotide sequence), aa (Amino acid sequence)"
        );
        assert_eq!(err.get_code(), 2);
    }

    #[test]
    fn defaults() {
        let config = AlignmentConfig::new(SequenceType::AminoAcid, "seqs.fa");
        assert_eq!(config.matrix(), SubstitutionMatrix::Blosum62);
        assert_eq!((config.matching(), config.mismatch(), config.gap_penalty()), (1, 0, 0));
        assert_eq!(config.scoring_scheme(), ScoringScheme::Substitution(SubstitutionMatrix::Blosum62));
    }

    #[test]
    fn nucleotide_params() {
        let config = AlignmentConfig::new(SequenceType::Nucleotide, "seqs.fa")
            .with_match(2)
            .with_mismatch(-1)
            .with_gap_penalty(-2)
            .with_matrix(SubstitutionMatrix::Pam30);
        let params = config.params();
        assert_eq!(params.scheme, ScoringScheme::new_nucleotide(2, -1));
        assert_eq!(params.gap_penalty, -2);
    }

    #[test]
    fn missing_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let config = AlignmentConfig::new(SequenceType::Nucleotide, dir.path().join("none.fa"));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingFasta(_)));
        assert!(err.to_string().ends_with("none.fa' file doesn't exist!"));
    }

    #[test]
    fn explicit_output_dir() {
        let config = AlignmentConfig::new(SequenceType::Nucleotide, "seqs.fa").with_output_dir("results");
        assert_eq!(config.output_dir(), PathBuf::from("results"));
    }
}
