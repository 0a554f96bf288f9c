use super::*;
use std::io::{Cursor, Write};

#[test]
fn multiline_records() {
    let mut reader = FastaReader::new(Cursor::new(">seq1 first record\nATG C   \n>seq2\r\n\n  AC G\r\n T"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, "seq1 first record");
    assert_eq!(record1.id(), "seq1");
    assert_eq!(record1.sequence, b"ATG C");

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.name, "seq2");
    assert_eq!(record2.sequence, b"AC GT");

    assert!(reader.next().is_none());
}

#[test]
fn leading_blank_lines() {
    let mut reader = FastaReader::new(Cursor::new("\n  \r\n>seq1\nGATTACA\n"));

    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.name, "seq1");
    assert_eq!(record.sequence, b"GATTACA");
    assert!(reader.next().is_none());
}

#[test]
fn empty_file() {
    let mut reader = FastaReader::new(Cursor::new(""));

    assert_eq!(reader.next().unwrap().unwrap_err().to_string(), "No FASTA data found!");
    assert!(reader.next().is_none());
}

#[test]
fn whitespace_only() {
    let mut reader = FastaReader::new(Cursor::new("   \r\n \r\t\n   \t"));

    assert_eq!(reader.next().unwrap().unwrap_err().to_string(), "No FASTA data found!");
    assert!(reader.next().is_none());
}

#[test]
fn missing_header() {
    let mut reader = FastaReader::new(Cursor::new("ATGC"));

    assert_eq!(
        reader.next().unwrap().unwrap_err().to_string(),
        "The FASTA file must start with a '>' symbol!"
    );
    assert!(reader.next().is_none());
}

#[test]
fn empty_header_first_record() {
    let mut reader = FastaReader::new(Cursor::new(">\nATGC"));

    assert_eq!(reader.next().unwrap().unwrap_err().to_string(), "Missing FASTA header!");
    assert!(reader.next().is_none());
}

#[test]
fn empty_sequence_first_record() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\n"));

    assert_eq!(
        reader.next().unwrap().unwrap_err().to_string(),
        "Missing FASTA sequence! See header: seq1"
    );
    assert!(reader.next().is_none());
}

#[test]
fn empty_sequence_second_record() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\nGCAT\n>seq2\n>seq3\nAAA"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, "seq1");
    assert_eq!(record1.sequence, b"GCAT");

    assert_eq!(
        reader.next().unwrap().unwrap_err().to_string(),
        "Missing FASTA sequence! See header: seq2"
    );
    assert!(reader.next().is_none());
}

#[test]
fn pair_uses_identifiers() {
    let reader = FastaReader::new(Cursor::new(">sp|P1| protein one\nMKV\nLA\n>sp|P2| protein two\nMKI\n>third\nAAA\n"));
    let SequencePair { first, second } = SequencePair::from_records(reader).unwrap();

    assert_eq!(first.name, "sp|P1|");
    assert_eq!(first.sequence, b"MKVLA");
    assert_eq!(second.name, "sp|P2|");
    assert_eq!(second.sequence, b"MKI");
}

#[test]
fn pair_needs_two_records() {
    let reader = FastaReader::new(Cursor::new(">only\nACGT\n"));
    let err = SequencePair::from_records(reader).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(
        err.to_string(),
        "Two FASTA records are required to align, but the second record is missing!"
    );
}

#[test]
fn pair_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, ">s1 description\nACACACTA\n>s2\nAGCACACA").unwrap();

    let pair = read_sequence_pair(file.path()).unwrap();
    assert_eq!(pair.first.name, "s1");
    assert_eq!(pair.first.sequence, b"ACACACTA");
    assert_eq!(pair.second.name, "s2");
    assert_eq!(pair.second.sequence, b"AGCACACA");
}

#[test]
fn pair_from_empty_or_missing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = read_sequence_pair(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().starts_with("file empty for FASTA"));

    let dir = tempfile::tempdir().unwrap();
    let err = read_sequence_pair(dir.path().join("absent.fa")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().starts_with("file open error for FASTA"));
}
