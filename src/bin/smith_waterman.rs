use clap::Parser;
use std::path::PathBuf;
use waterman::{
    config::{AlignmentConfig, SequenceType},
    data::{err::OrFail, matrices::SubstitutionMatrix},
    report,
};

const EXAMPLES: &str = "\
Examples of alignment:
  For amino acid sequences
    smith-waterman -t aa -f sequences.fa -s PAM250 -g -1

  For nucleotide sequences
    smith-waterman -t nt -f sequences.fa -m 2 -x -1 -g -2";

#[derive(Parser, Debug)]
#[command(name = "smith-waterman")]
#[command(about = "Local alignment of two sequences with the Smith-Waterman algorithm", long_about = None)]
#[command(version, allow_negative_numbers = true, after_help = EXAMPLES)]
struct Cli {
    /// Sequence type: nt (Nucleotide sequence) or aa (Amino acid sequence)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    sequence_type: SequenceType,

    /// Substitution matrix (only for amino acid sequences)
    #[arg(short = 's', long, value_name = "MATRIX", default_value_t = SubstitutionMatrix::Blosum62)]
    substitution_matrix: SubstitutionMatrix,

    /// FASTA file holding the two sequences to align
    #[arg(short = 'f', long, value_name = "FILE")]
    fasta: PathBuf,

    /// Match score (only for nucleotide sequences)
    #[arg(short = 'm', long = "match", value_name = "INT", default_value_t = 1)]
    matching: i32,

    /// Mismatch score (only for nucleotide sequences)
    #[arg(short = 'x', long, value_name = "INT", default_value_t = 0)]
    mismatch_penalty: i32,

    /// Score added for each gap symbol
    #[arg(short = 'g', long, value_name = "INT", default_value_t = 0)]
    gap_penalty: i32,

    /// Output folder (default: current directory)
    #[arg(short = 'o', long, value_name = "FOLDER")]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> AlignmentConfig {
        let config = AlignmentConfig::new(self.sequence_type, self.fasta)
            .with_matrix(self.substitution_matrix)
            .with_match(self.matching)
            .with_mismatch(self.mismatch_penalty)
            .with_gap_penalty(self.gap_penalty);
        match self.output {
            Some(output) => config.with_output_dir(output),
            None => config,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = Cli::parse().into_config();
    let outcome = report::execute(&config).unwrap_or_fail();
    print!("{}", outcome.report);
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};
    use std::path::Path;

    #[test]
    fn command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_scores() {
        let config = Cli::try_parse_from([
            "smith-waterman", "-t", "nt", "-f", "pair.fa", "-g", "-1", "-x", "-3", "-m", "-2",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.sequence_type(), SequenceType::Nucleotide);
        assert_eq!((config.gap_penalty(), config.mismatch(), config.matching()), (-1, -3, -2));
        assert_eq!(config.fasta(), Path::new("pair.fa"));
    }

    #[test]
    fn case_insensitive_names() {
        let config = Cli::try_parse_from([
            "smith-waterman", "-t", "AA", "-f", "pair.fa", "-s", "pam250", "--gap-penalty", "-4", "-o", "results",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.sequence_type(), SequenceType::AminoAcid);
        assert_eq!(config.matrix(), SubstitutionMatrix::Pam250);
        assert_eq!(config.gap_penalty(), -4);
        assert_eq!(config.output_dir(), Path::new("results"));
    }

    #[test]
    fn defaults() {
        let config = Cli::try_parse_from(["smith-waterman", "--type", "nt", "--fasta", "pair.fa"])
            .unwrap()
            .into_config();

        assert_eq!(config.matrix(), SubstitutionMatrix::Blosum62);
        assert_eq!((config.matching(), config.mismatch(), config.gap_penalty()), (1, 0, 0));
    }

    #[test]
    fn rejected_arguments() {
        let err = Cli::try_parse_from(["smith-waterman", "-t", "dna", "-f", "pair.fa"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unsupported sequence type 'dna'"));

        let err = Cli::try_parse_from(["smith-waterman", "-t", "aa", "-f", "pair.fa", "-s", "BLOSUM30"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unsupported substitution matrix 'BLOSUM30'"));

        let err = Cli::try_parse_from(["smith-waterman", "-t", "nt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
