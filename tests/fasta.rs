use waterman::data::records::fasta::*;

#[test]
fn record_display() {
    let s = FastaSeq {
        name:     "s1 first sequence".to_string(),
        sequence: b"AtgcnN-".to_vec(),
    };

    assert_eq!(s.id(), "s1");
    assert_eq!(s.to_string(), ">s1 first sequence\nAtgcnN-\n");
}

#[test]
fn display_then_read() {
    let records = [
        FastaSeq {
            name:     "s1".to_string(),
            sequence: b"ACGT".to_vec(),
        },
        FastaSeq {
            name:     "s2 other".to_string(),
            sequence: b"MKVLA".to_vec(),
        },
    ];
    let text: String = records.iter().map(ToString::to_string).collect();

    let read = FastaReader::new(text.as_bytes()).collect::<std::io::Result<Vec<_>>>().unwrap();
    assert_eq!(read, records);

    let pair = SequencePair::from_records(FastaReader::new(text.as_bytes())).unwrap();
    assert_eq!(pair.second.name, "s2");
}
