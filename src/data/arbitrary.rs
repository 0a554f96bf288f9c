//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the FASTA record type, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions, such as sequences every
//! [`ScoringScheme`] accepts.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>
//!
//! [`ScoringScheme`]: crate::alignment::ScoringScheme

use super::{fasta::FastaSeq, matrices::SubstitutionMatrix};
use arbitrary::{Arbitrary, Result, Unstructured};
use std::fmt::Display;

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty) => {
        impl ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

fn vec_from_alphabet(u: &mut Unstructured<'_>, alphabet: &[u8]) -> Result<Vec<u8>> {
    let len = u.arbitrary_len::<u8>()?;
    (0..len).map(|_| u.choose(alphabet).copied()).collect()
}

/// A wrapper around u8 such that the byte is graphic ASCII in the range
/// `!`..=`~`.
pub struct GraphicAsciiByte(u8);

impl_deref! {GraphicAsciiByte, u8}

impl<'a> Arbitrary<'a> for GraphicAsciiByte {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(GraphicAsciiByte(u.int_in_range(b'!'..=b'~')?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (1, Some(1))
    }
}

/// A wrapper around a byte vector holding only `A`, `C`, `G`, and `T` in
/// either case.
#[derive(Debug)]
pub struct NucleotidesAcgt(pub Vec<u8>);

impl_deref! {NucleotidesAcgt, Vec<u8>}

impl<'a> Arbitrary<'a> for NucleotidesAcgt {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(NucleotidesAcgt(vec_from_alphabet(u, b"ACGTacgt")?))
    }
}

/// A wrapper around a byte vector holding only the twenty residues scored by
/// every [`SubstitutionMatrix`], in either case.
#[derive(Debug)]
pub struct AminoAcidsStandard(pub Vec<u8>);

impl_deref! {AminoAcidsStandard, Vec<u8>}

impl<'a> Arbitrary<'a> for AminoAcidsStandard {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut residues = vec_from_alphabet(u, SubstitutionMatrix::RESIDUES)?;
        for residue in &mut residues {
            if bool::arbitrary(u)? {
                residue.make_ascii_lowercase();
            }
        }
        Ok(AminoAcidsStandard(residues))
    }
}

impl<'a> Arbitrary<'a> for FastaSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let name = String::arbitrary(u)?.replace('>', " ");
        let mut sequence = Vec::<u8>::arbitrary(u)?;
        for b in &mut sequence {
            if *b == b'>' {
                *b = b' ';
            }
        }

        Ok(FastaSeq { name, sequence })
    }
}

/// A wrapper around [`FastaSeq`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates records that survive a round trip through
/// [`FastaReader`](super::fasta::FastaReader):
///
/// - The name is non-empty graphic ASCII without `>`
/// - The sequence is non-empty graphic ASCII without `>`
#[derive(Debug)]
pub struct FastaSeqValid(pub FastaSeq);

impl_deref! {FastaSeqValid, FastaSeq}

fn graphic_bytes(u: &mut Unstructured<'_>) -> Result<Vec<u8>> {
    let mut out = vec![*GraphicAsciiByte::arbitrary(u)?];
    for b in u.arbitrary_iter::<GraphicAsciiByte>()? {
        out.push(*b?);
    }
    for b in &mut out {
        if *b == b'>' {
            *b = b'<';
        }
    }
    Ok(out)
}

impl<'a> Arbitrary<'a> for FastaSeqValid {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let name = String::from_utf8_lossy(&graphic_bytes(u)?).into_owned();
        let sequence = graphic_bytes(u)?;
        Ok(FastaSeqValid(FastaSeq { name, sequence }))
    }
}

impl Display for FastaSeqValid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        alignment::{AlignmentParams, ScoringScheme, sw::sw_score},
        data::fasta::FastaReader,
    };

    const NOISE: &[u8] = b"\x13\x98\x07\xfe\x44\x10\x8a\x91\x3c\x22\x00\xff\x5e\x61\x72\x19\x04\xc3\x77\x8d\x2b\x9e";

    #[test]
    fn standard_residues_always_score() {
        let mut u = Unstructured::new(NOISE);
        let seq1 = AminoAcidsStandard::arbitrary(&mut u).unwrap();
        let seq2 = AminoAcidsStandard::arbitrary(&mut u).unwrap();

        for matrix in SubstitutionMatrix::ALL {
            let params = AlignmentParams::new(ScoringScheme::Substitution(matrix), -2);
            assert!(sw_score(&seq1, &seq2, &params).is_ok());
        }
    }

    #[test]
    fn valid_record_round_trip() {
        let mut u = Unstructured::new(NOISE);
        let record = FastaSeqValid::arbitrary(&mut u).unwrap();
        let text = record.to_string();

        let parsed = FastaReader::new(text.as_bytes()).next().unwrap().unwrap();
        assert_eq!(parsed, record.0);
    }
}
