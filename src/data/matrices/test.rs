use super::*;

#[test]
fn symmetric_tables() {
    for matrix in SubstitutionMatrix::ALL {
        for &a in SubstitutionMatrix::RESIDUES {
            for &b in SubstitutionMatrix::RESIDUES {
                assert_eq!(matrix.get_weight(a, b), matrix.get_weight(b, a), "{matrix} {a} {b}");
            }
        }
    }
}

#[test]
fn known_scores() {
    assert_eq!(SubstitutionMatrix::Blosum62.get_weight(b'A', b'A'), Some(4));
    assert_eq!(SubstitutionMatrix::Blosum62.get_weight(b'W', b'W'), Some(11));
    assert_eq!(SubstitutionMatrix::Blosum62.get_weight(b'A', b'R'), Some(-1));
    assert_eq!(SubstitutionMatrix::Blosum45.get_weight(b'C', b'C'), Some(12));
    assert_eq!(SubstitutionMatrix::Pam250.get_weight(b'A', b'A'), Some(2));
    assert_eq!(SubstitutionMatrix::Pam30.get_weight(b'A', b'R'), Some(-7));
}

#[test]
fn case_insensitive() {
    for matrix in SubstitutionMatrix::ALL {
        assert_eq!(matrix.get_weight(b'k', b'E'), matrix.get_weight(b'K', b'e'));
        assert_eq!(matrix.get_weight(b'k', b'e'), matrix.get_weight(b'K', b'E'));
    }
}

#[test]
fn unknown_residues() {
    for residue in [b'B', b'Z', b'J', b'X', b'*', b'-', b'1', b'u'] {
        assert!(!SubstitutionMatrix::contains(residue));
        assert_eq!(SubstitutionMatrix::Blosum62.get_weight(residue, b'A'), None);
        assert_eq!(SubstitutionMatrix::Blosum62.get_weight(b'A', residue), None);
    }
}

#[test]
fn parse_names() {
    assert_eq!("blosum62".parse::<SubstitutionMatrix>().unwrap(), SubstitutionMatrix::Blosum62);
    assert_eq!(" PAM250 ".parse::<SubstitutionMatrix>().unwrap(), SubstitutionMatrix::Pam250);
    for matrix in SubstitutionMatrix::ALL {
        assert_eq!(matrix.to_string().parse::<SubstitutionMatrix>().unwrap(), matrix);
    }

    let err = "BLOSUM100".parse::<SubstitutionMatrix>().unwrap_err();
    assert_eq!(err.to_string(), "Unsupported substitution matrix 'BLOSUM100'. Choose one of: BLOSUM45, BLOSUM50, BLOSUM62, BLOSUM80, BLOSUM90, PAM30, PAM70, PAM250");
}
