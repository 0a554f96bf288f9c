#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alignment functions
pub mod alignment;
/// Run configuration.
pub mod config;
/// Data import, export, and manipulation functions.
pub mod data;
/// Reports and exported files.
pub mod report;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::sw::{SwRun, sw_local_alignment, sw_score};
    pub use crate::alignment::{AlignmentParams, LocalAlignment, ScoringScheme};
    pub use crate::config::{AlignmentConfig, SequenceType};
    pub use crate::data::matrices::SubstitutionMatrix;
    pub use crate::data::{
        err::{GetCode, OrFail},
        fasta::{FastaReader, read_sequence_pair},
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
}
