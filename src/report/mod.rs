//! ## Reports and exported files
//!
//! [`execute`] drives one complete run from an [`AlignmentConfig`]: it reads
//! the two sequences, aligns them, writes the matrix grid to
//! [`MatrixGrid::FILE_NAME`] and the text report to [`LOG_FILE_NAME`] inside
//! the output directory, and returns a [`RunOutcome`].
//!
//! The pieces are also usable on their own: [`AlignmentBlocks`] wraps an
//! alignment into 60-column blocks with match markers, and [`MatrixGrid`]
//! renders the scoring matrix.

use crate::{
    alignment::{LocalAlignment, ScoringError, sw::sw_local_alignment},
    config::{AlignmentConfig, ConfigError, SequenceType},
    data::{err::GetCode, fasta::read_sequence_pair},
};
use std::{
    error::Error,
    fmt, fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

mod blocks;
mod grid;


pub use blocks::*;
pub use grid::*;

/// The name of the report file written next to the matrix.
pub const LOG_FILE_NAME: &str = "smith_waterman.log";

/// The result of [`execute`].
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub first_name:  String,
    pub second_name: String,
    pub alignment:   LocalAlignment,
    pub matrix_path: PathBuf,
    pub log_path:    PathBuf,
    pub elapsed:     Duration,
    /// The full text written to `log_path`
    pub report:      String,
}

/// Runs the aligner as configured and writes its output files.
///
/// Once the output directory exists, a run that fails still leaves a short
/// report holding the error in [`LOG_FILE_NAME`].
///
/// ## Errors
///
/// - [`RunError::Config`] if the FASTA file is missing or the output directory
///   cannot be created.
/// - [`RunError::Input`] if the FASTA file cannot be read or holds fewer than
///   two records.
/// - [`RunError::Scoring`] if a residue pair cannot be scored.
/// - [`RunError::Output`] if either output file cannot be written.
pub fn execute(config: &AlignmentConfig) -> Result<RunOutcome, RunError> {
    let start = Instant::now();
    config.validate()?;

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).map_err(|source| ConfigError::OutputDirectory {
        path: output_dir.clone(),
        source,
    })?;

    let log_path = output_dir.join(LOG_FILE_NAME);
    align_and_export(config, &output_dir, &log_path, start).inspect_err(|error| {
        let failure = FailureReport {
            config,
            error,
            elapsed: start.elapsed(),
        };
        if let Err(e) = write_file(&log_path, &failure.to_string()) {
            log::warn!("{e}");
        }
    })
}

fn align_and_export(
    config: &AlignmentConfig,
    output_dir: &Path,
    log_path: &Path,
    start: Instant,
) -> Result<RunOutcome, RunError> {
    let params = config.params();
    log::info!(
        "Aligning '{}' as {} with {}, gap penalty {}",
        config.fasta().display(),
        config.sequence_type().description(),
        params.scheme,
        params.gap_penalty
    );

    let pair = read_sequence_pair(config.fasta())?;
    log::info!(
        "Read '{}' ({} residues) and '{}' ({} residues)",
        pair.first.name,
        pair.first.sequence.len(),
        pair.second.name,
        pair.second.sequence.len()
    );

    let run = sw_local_alignment(&pair.first.sequence, &pair.second.sequence, &params)?;
    log::info!(
        "Local alignment score {} over {} columns",
        run.alignment.score,
        run.alignment.len()
    );

    let matrix_path = output_dir.join(MatrixGrid::FILE_NAME);
    let grid = MatrixGrid::new(&run.matrix, &pair.first.sequence, &pair.second.sequence);
    write_file(&matrix_path, &grid.to_string())?;
    log::info!("Wrote the scoring matrix to '{}'", matrix_path.display());

    let elapsed = start.elapsed();
    let report = Report {
        config,
        first_name: &pair.first.name,
        second_name: &pair.second.name,
        alignment: &run.alignment,
        matrix_path: &matrix_path,
        elapsed,
    }
    .to_string();

    write_file(log_path, &report)?;

    Ok(RunOutcome {
        first_name: pair.first.name,
        second_name: pair.second.name,
        alignment: run.alignment,
        matrix_path,
        log_path: log_path.to_path_buf(),
        elapsed,
        report,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), RunError> {
    fs::write(path, contents).map_err(|source| RunError::Output {
        path: path.to_path_buf(),
        source,
    })
}

/// Formats a duration as `HH:MM:SS`, truncating fractions of a second.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

/// The text report for one run.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    pub config:      &'a AlignmentConfig,
    pub first_name:  &'a str,
    pub second_name: &'a str,
    pub alignment:   &'a LocalAlignment,
    pub matrix_path: &'a Path,
    pub elapsed:     Duration,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_header(f, self.config)?;

        writeln!(f, "Alignment:")?;
        writeln!(f, "  Score: {}", self.alignment.score)?;
        writeln!(f)?;
        for block in AlignmentBlocks::new(self.alignment, self.first_name, self.second_name).blocks() {
            for line in block {
                writeln!(f, "  {line}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Matrix file: {}", self.matrix_path.display())?;
        writeln!(f)?;
        writeln!(f, "Elapsed time: {}", format_elapsed(self.elapsed))?;
        writeln!(f, "Done.")
    }
}

/// The text report left behind by a run that failed after its output
/// directory was created.
#[derive(Clone, Copy, Debug)]
pub struct FailureReport<'a> {
    pub config:  &'a AlignmentConfig,
    pub error:   &'a RunError,
    pub elapsed: Duration,
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_header(f, self.config)?;

        writeln!(f, "Error:")?;
        writeln!(f, "  {}", self.error)?;
        writeln!(f)?;
        writeln!(f, "Elapsed time: {}", format_elapsed(self.elapsed))?;
        writeln!(f, "Done.")
    }
}

/// The banner, input, and parameter sections shared by every report.
fn write_header(f: &mut fmt::Formatter, config: &AlignmentConfig) -> fmt::Result {
    const RULE: &str = "################################################################";

    writeln!(f, "{RULE}")?;
    writeln!(f, "################### Smith–Waterman Algorithm ###################")?;
    writeln!(f, "{RULE}")?;

    writeln!(f, "Input:")?;
    writeln!(f, "  Fasta file: {}", config.fasta().display())?;
    writeln!(f)?;

    writeln!(f, "Parameters:")?;
    match config.sequence_type() {
        SequenceType::Nucleotide => {
            writeln!(f, "  Match: {}", config.matching())?;
            writeln!(f, "  Mismatch penalty: {}", config.mismatch())?;
        }
        SequenceType::AminoAcid => writeln!(f, "  Matrix: {}", config.matrix())?,
    }
    writeln!(f, "  Gap penalty: {}", config.gap_penalty())?;
    writeln!(f)
}

/// Any error ending a run started by [`execute`].
#[non_exhaustive]
pub enum RunError {
    Config(ConfigError),
    Input(std::io::Error),
    Scoring(ScoringError),
    /// An output file could not be written
    Output { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Config(e) => write!(f, "{e}"),
            RunError::Input(e) => write!(f, "{e}"),
            RunError::Scoring(e) => write!(f, "{e}"),
            RunError::Output { path, source } => write!(f, "Couldn't write '{}': {source}", path.display()),
        }
    }
}

impl fmt::Debug for RunError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::Config(e) => Some(e),
            RunError::Input(e) => Some(e),
            RunError::Scoring(e) => Some(e),
            RunError::Output { source, .. } => Some(source),
        }
    }
}

impl GetCode for RunError {
    fn get_code(&self) -> i32 {
        match self {
            RunError::Config(e) => e.get_code(),
            RunError::Input(e) => e.get_code(),
            RunError::Scoring(e) => e.get_code(),
            RunError::Output { source, .. } => source.get_code(),
        }
    }
}

impl From<ConfigError> for RunError {
    #[inline]
    fn from(e: ConfigError) -> Self {
        RunError::Config(e)
    }
}

impl From<std::io::Error> for RunError {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        RunError::Input(e)
    }
}

impl From<ScoringError> for RunError {
    #[inline]
    fn from(e: ScoringError) -> Self {
        RunError::Scoring(e)
    }
}
