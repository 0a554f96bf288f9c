use super::*;
use crate::{
    alignment::{Direction, DirectionSet, ScoringScheme},
    data::matrices::SubstitutionMatrix,
};

const NT_GAP_1: AlignmentParams = AlignmentParams::new(ScoringScheme::new_nucleotide(2, -1), -1);
const NT_GAP_2: AlignmentParams = AlignmentParams::new(ScoringScheme::new_nucleotide(2, -1), -2);
const UNIT: AlignmentParams = AlignmentParams::new(ScoringScheme::new_nucleotide(1, -1), -1);

#[test]
fn textbook_pair() {
    let SwRun {
        matrix,
        max_score,
        alignment,
    } = sw_local_alignment(b"ACACACTA", b"AGCACACA", &NT_GAP_1).unwrap();

    assert_eq!((matrix.rows(), matrix.cols()), (9, 9));
    assert_eq!(max_score, MaxScore { score: 12, row: 8, col: 8 });
    assert_eq!(alignment.score, 12);
    assert_eq!(alignment.first, b"A-CACACTA");
    assert_eq!(alignment.second, b"AGCACAC-A");
    assert_eq!(alignment.first_range, 0..8);
    assert_eq!(alignment.second_range, 0..8);
}

#[test]
fn textbook_pair_larger_gap() {
    let SwRun {
        matrix,
        max_score,
        alignment,
    } = sw_local_alignment(b"ACACACTA", b"AGCACACA", &NT_GAP_2).unwrap();

    assert_eq!(max_score, MaxScore { score: 10, row: 7, col: 6 });
    assert_eq!(alignment.first, b"CACAC");
    assert_eq!(alignment.second, b"CACAC");
    assert_eq!(alignment.first_range, 1..6);
    assert_eq!(alignment.second_range, 2..7);

    let last_row: Vec<_> = matrix.row(8).iter().map(|cell| cell.maximum).collect();
    assert_eq!(last_row, [0, 2, 2, 6, 6, 10, 8, 9, 10]);
    let codes: Vec<_> = matrix.row(8)[1..].iter().map(|cell| cell.directions.display_code().unwrap()).collect();
    assert_eq!(codes, b"dududldd");

    // The restart column of "T" against "G"
    let cell = matrix[(2, 7)];
    assert_eq!((cell.diagonal, cell.left, cell.up), (-1, -1, -2));
    assert_eq!(cell.directions, DirectionSet::EMPTY.with(Direction::Zero));
}

#[test]
fn swapped_inputs() {
    let run = sw_local_alignment(b"AGCACACA", b"ACACACTA", &NT_GAP_2).unwrap();
    assert_eq!(run.max_score, MaxScore { score: 10, row: 5, col: 8 });
    assert_eq!(run.alignment.first, b"ACACA");
    assert_eq!(run.alignment.second, b"ACACA");

    let run = sw_local_alignment(b"AGCACACA", b"ACACACTA", &NT_GAP_1).unwrap();
    assert_eq!(run.alignment.score, 12);
    assert_eq!(run.alignment.first, b"AGCACAC-A");
    assert_eq!(run.alignment.second, b"A-CACACTA");
}

#[test]
fn small_grid() {
    let run = sw_local_alignment(b"AC", b"CA", &UNIT).unwrap();
    let m = &run.matrix;

    assert_eq!(m.maximum_scores(), [0, 0, 0, 0, 0, 1, 0, 1, 0]);
    assert_eq!(m[(1, 1)].directions, DirectionSet::EMPTY.with(Direction::Zero));
    assert_eq!(m[(1, 2)].directions, DirectionSet::EMPTY.with(Direction::Diagonal));
    assert_eq!(m[(2, 1)].directions, DirectionSet::EMPTY.with(Direction::Diagonal));
    assert_eq!(
        m[(2, 2)].directions,
        DirectionSet::EMPTY.with(Direction::Left).with(Direction::Up)
    );
    assert!(m.row(0).iter().all(|&cell| cell == DpCell::BOUNDARY));

    // The tie between (1, 2) and (2, 1) keeps the earlier row
    assert_eq!(run.max_score, MaxScore { score: 1, row: 1, col: 2 });
    assert_eq!(run.alignment.first, b"C");
    assert_eq!(run.alignment.second, b"C");
}

#[test]
fn single_match() {
    let run = sw_local_alignment(b"ACGT", b"TTTT", &UNIT).unwrap();
    assert_eq!(run.max_score, MaxScore { score: 1, row: 1, col: 4 });
    assert_eq!(run.alignment.first, b"T");
    assert_eq!(run.alignment.second, b"T");

    let run = sw_local_alignment(b"GATTACA", b"GCATGCU", &UNIT).unwrap();
    assert_eq!(run.max_score, MaxScore { score: 2, row: 3, col: 7 });
    assert_eq!(run.alignment.first, b"CA");
    assert_eq!(run.alignment.second, b"CA");
}

#[test]
fn gap_in_alignment() {
    let params = AlignmentParams::new(ScoringScheme::new_nucleotide(3, -3), -2);
    let run = sw_local_alignment(b"TGTTACGG", b"GGTTGACTA", &params).unwrap();

    assert_eq!(run.max_score, MaxScore { score: 13, row: 7, col: 6 });
    assert_eq!(run.alignment.first, b"GTT-AC");
    assert_eq!(run.alignment.second, b"GTTGAC");
    assert_eq!(run.alignment.gap_count(), 1);
    assert_eq!(run.alignment.identity_count(), 5);
}

#[test]
fn nothing_in_common() {
    let run = sw_local_alignment(b"AAA", b"TTT", &NT_GAP_2).unwrap();

    assert_eq!(run.max_score, MaxScore::default());
    assert!(run.alignment.is_empty());
    assert!(run.alignment.second.is_empty());
    assert_eq!(run.alignment.score, 0);
    assert_eq!(run.matrix.max_score(), 0);
    assert_eq!(sw_score(b"AAA", b"TTT", &NT_GAP_2), Ok(0));
}

#[test]
fn empty_inputs() {
    let run = sw_local_alignment(b"", b"ACGT", &UNIT).unwrap();
    assert_eq!((run.matrix.rows(), run.matrix.cols()), (5, 1));
    assert!(run.alignment.is_empty());
    assert_eq!(run.max_score, MaxScore::default());

    let run = sw_local_alignment(b"", b"", &UNIT).unwrap();
    assert_eq!((run.matrix.rows(), run.matrix.cols()), (1, 1));
    assert!(run.alignment.is_empty());
    assert_eq!(sw_score(b"ACGT", b"", &UNIT), Ok(0));
}

#[test]
fn case_is_kept() {
    let run = sw_local_alignment(b"acgTTGCa", b"ttgc", &UNIT).unwrap();

    assert_eq!(run.max_score, MaxScore { score: 4, row: 4, col: 7 });
    assert_eq!(run.alignment.first, b"TTGC");
    assert_eq!(run.alignment.second, b"ttgc");
    assert_eq!(run.alignment.first_range, 3..7);
    assert_eq!(run.alignment.identity_count(), 4);
}

#[test]
fn protein_pairs() {
    let params = AlignmentParams::new(ScoringScheme::Substitution(SubstitutionMatrix::Blosum62), -4);
    let run = sw_local_alignment(b"MKVLAAGIVGLLLA", b"MKILAGVLLA", &params).unwrap();
    assert_eq!(run.alignment.score, 27);
    assert_eq!(run.alignment.first, b"MKVLAAGIV");
    assert_eq!(run.alignment.second, b"MKIL-AGVL");

    let params = AlignmentParams::new(ScoringScheme::Substitution(SubstitutionMatrix::Pam250), -2);
    let run = sw_local_alignment(b"MKVLAAGIVGLLLA", b"MKILAGVLLA", &params).unwrap();
    assert_eq!(run.alignment.score, 38);
    assert_eq!(run.alignment.first, b"MKVLAAGIVGLL");
    assert_eq!(run.alignment.second, b"MKIL-AG-V-LL");

    let params = AlignmentParams::new(ScoringScheme::Substitution(SubstitutionMatrix::Blosum50), -8);
    let run = sw_local_alignment(b"HEAGAWGHEE", b"PAWHEAE", &params).unwrap();
    assert_eq!(run.alignment.score, 28);
    assert_eq!(run.alignment.first, b"AWGHE");
    assert_eq!(run.alignment.second, b"AW-HE");

    let params = AlignmentParams::new(ScoringScheme::Substitution(SubstitutionMatrix::Blosum62), -1);
    assert_eq!(sw_score(b"AA", b"aa", &params), Ok(8));
}

#[test]
fn unknown_residue() {
    let params = AlignmentParams::new(ScoringScheme::Substitution(SubstitutionMatrix::Blosum62), -1);
    let expected = ScoringError::UnknownResiduePair {
        first:  b'X',
        second: b'A',
        matrix: SubstitutionMatrix::Blosum62,
    };

    assert_eq!(sw_local_alignment(b"AXA", b"AAA", &params).unwrap_err(), expected);
    assert_eq!(sw_score(b"AXA", b"AAA", &params), Err(expected));
    assert_eq!(
        expected.to_string(),
        "The residue pair (X, A) is not scored by the BLOSUM62 substitution matrix!"
    );
}

#[test]
fn positive_gap_penalty() {
    let params = AlignmentParams::new(ScoringScheme::new_nucleotide(1, -1), 1);
    let run = sw_local_alignment(b"AC", b"GT", &params).unwrap();

    assert_eq!(run.alignment.score, run.matrix.max_score());
    assert_eq!(sw_score(b"AC", b"GT", &params), Ok(run.alignment.score));
    assert!(run.alignment.gap_count() > 0);
}

#[test]
fn transposed_inputs_transpose_matrix() {
    let (matrix, _) = sw_build_matrix(b"TGTTACGG", b"GGTTGACTA", &NT_GAP_2).unwrap();
    let (swapped, _) = sw_build_matrix(b"GGTTGACTA", b"TGTTACGG", &NT_GAP_2).unwrap();
    assert_eq!(swapped, matrix.transpose());
}

#[cfg(feature = "rand")]
mod properties {
    use super::*;
    use crate::generate::{rand_related_pair, rand_sequence};

    const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYVarndcqeghilkmfpstwyv";

    fn column_score(alignment: &LocalAlignment, params: &AlignmentParams) -> i32 {
        alignment
            .columns()
            .map(|(a, b)| {
                if a == LocalAlignment::GAP || b == LocalAlignment::GAP {
                    params.gap_penalty
                } else {
                    params.score(a, b).unwrap()
                }
            })
            .sum()
    }

    fn check(seq1: &[u8], seq2: &[u8], params: &AlignmentParams) {
        let run = sw_local_alignment(seq1, seq2, params).unwrap();
        let alignment = &run.alignment;

        assert!(alignment.score >= 0);
        assert_eq!(alignment.score, run.matrix.max_score());
        assert_eq!(alignment.score, run.max_score.score);
        assert_eq!(sw_score(seq1, seq2, params), Ok(alignment.score));
        assert_eq!(sw_score(seq2, seq1, params), Ok(alignment.score));

        assert_eq!(alignment.first.len(), alignment.second.len());
        assert_eq!(alignment.ungapped_first(), &seq1[alignment.first_range.clone()]);
        assert_eq!(alignment.ungapped_second(), &seq2[alignment.second_range.clone()]);
        assert!(alignment.columns().all(|(a, b)| a != LocalAlignment::GAP || b != LocalAlignment::GAP));
        assert_eq!(column_score(alignment, params), alignment.score);

        assert_eq!(sw_local_alignment(seq1, seq2, params).unwrap(), run);
    }

    #[test]
    fn random_nucleotides() {
        for seed in 0..50 {
            let seq1 = rand_sequence(b"ACGTacgt", (seed % 40) as usize, seed);
            let seq2 = rand_sequence(b"ACGTacgt", (seed * 7 % 33) as usize, seed + 1000);
            check(&seq1, &seq2, &NT_GAP_1);
            check(&seq1, &seq2, &NT_GAP_2);
            check(&seq1, &seq2, &AlignmentParams::new(ScoringScheme::new_nucleotide(5, -4), -3));
        }
    }

    #[test]
    fn random_related_proteins() {
        for (seed, matrix) in SubstitutionMatrix::ALL.into_iter().enumerate() {
            let params = AlignmentParams::new(ScoringScheme::Substitution(matrix), -4);
            let (seq1, seq2) = rand_related_pair(AMINO_ACIDS, 60, 5, seed as u64);
            check(&seq1, &seq2, &params);
            assert!(sw_score(&seq1, &seq1, &params).unwrap() > 0);
        }
    }

    #[test]
    fn disjoint_alphabets() {
        for seed in 0..20 {
            let seq1 = rand_sequence(b"AC", 25, seed);
            let seq2 = rand_sequence(b"GT", 30, seed + 1);
            let run = sw_local_alignment(&seq1, &seq2, &UNIT).unwrap();
            assert_eq!(run.alignment.score, 0);
            assert!(run.alignment.is_empty());
        }
    }
}
