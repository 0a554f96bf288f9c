use super::RecordReader;
use crate::unwrap_or_return_some_err;
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};

#[cfg(test)]
mod test;

/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    /// The record identifier: the first whitespace-delimited token of the
    /// header.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.split_ascii_whitespace().next().unwrap_or_default()
    }
}

/// Structure for buffered reading of `FASTA` files.
///
/// Each item is a [`FastaSeq`] with the header (without the `>`) and the
/// concatenated sequence lines, each trimmed of surrounding whitespace. After
/// the first error the iterator is exhausted.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:      BufReader<R>,
    line:        Vec<u8>,
    next_header: Option<String>,
    first:       bool,
    finished:    bool,
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader.
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader:      BufReader::new(inner),
            line:        Vec::new(),
            next_header: None,
            first:       true,
            finished:    false,
        }
    }

    fn get_error(&mut self, msg: &str, header: Option<&str>) -> std::io::Result<FastaSeq> {
        self.finished = true;
        if let Some(header) = header {
            Err(IOError::new(ErrorKind::InvalidData, format!("{msg} See header: {header}")))
        } else {
            Err(IOError::new(ErrorKind::InvalidData, msg))
        }
    }

    /// Reads the next line into the line buffer, returning `false` at the end
    /// of the input.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line.clear();
        Ok(self.reader.read_until(b'\n', &mut self.line)? > 0)
    }

    /// Skips leading blank lines and reads the first header.
    fn read_first_header(&mut self) -> std::io::Result<Result<String, &'static str>> {
        self.first = false;

        loop {
            if !self.read_line()? {
                return Ok(Err("No FASTA data found!"));
            }

            let line = self.line.trim_ascii();
            if line.is_empty() {
                continue;
            }

            return Ok(match line.strip_prefix(b">") {
                Some(header) => Ok(String::from_utf8_lossy(header.trim_ascii()).into_owned()),
                None => Err("The FASTA file must start with a '>' symbol!"),
            });
        }
    }
}

impl FastaReader<File> {
    /// Reads a fasta file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if file or permissions do not exist, or if the file is
    /// empty. The file path is included in the error message.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        let file = Self::open_nonempty_file(filename)?;
        Ok(FastaReader::new(file))
    }
}

impl<R: std::io::Read> RecordReader for FastaReader<R> {
    const RECORD_NAME: &str = "FASTA";
}

/// An iterator for buffered reading of
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let name = if self.first {
            match unwrap_or_return_some_err!(self.read_first_header()) {
                Ok(name) => name,
                Err(msg) => return Some(self.get_error(msg, None)),
            }
        } else {
            self.next_header.take()?
        };

        if name.is_empty() {
            return Some(self.get_error("Missing FASTA header!", None));
        }

        let mut sequence = Vec::new();
        loop {
            if !unwrap_or_return_some_err!(self.read_line()) {
                self.finished = true;
                break;
            }

            let line = self.line.trim_ascii();
            if let Some(header) = line.strip_prefix(b">") {
                self.next_header = Some(String::from_utf8_lossy(header.trim_ascii()).into_owned());
                break;
            }
            sequence.extend_from_slice(line);
        }

        if sequence.is_empty() {
            return Some(self.get_error("Missing FASTA sequence!", Some(&name)));
        }

        Some(Ok(FastaSeq { name, sequence }))
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

/// The two named sequences taking part in one alignment run.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SequencePair {
    pub first:  FastaSeq,
    pub second: FastaSeq,
}

impl SequencePair {
    /// Takes the first two records from an iterator of FASTA records. Any
    /// further records are ignored and never read. Record names are reduced to
    /// their identifiers (see [`FastaSeq::id`]).
    ///
    /// ## Errors
    ///
    /// Propagates the first read error, and fails with
    /// [`ErrorKind::InvalidData`] if fewer than two records are present.
    pub fn from_records<I>(mut records: I) -> std::io::Result<Self>
    where
        I: Iterator<Item = std::io::Result<FastaSeq>>, {
        let mut take = |ordinal: &str| -> std::io::Result<FastaSeq> {
            match records.next() {
                Some(record) => {
                    let mut record = record?;
                    record.name = record.id().to_string();
                    Ok(record)
                }
                None => Err(IOError::new(
                    ErrorKind::InvalidData,
                    format!("Two FASTA records are required to align, but the {ordinal} record is missing!"),
                )),
            }
        };

        let first = take("first")?;
        let second = take("second")?;
        Ok(SequencePair { first, second })
    }
}

/// Reads the two sequences to align from the first two records of a FASTA
/// file.
///
/// ## Errors
///
/// Fails if the file is missing, unreadable, or empty, if the FASTA data is
/// malformed, or if it holds fewer than two records.
pub fn read_sequence_pair<P: AsRef<Path>>(filename: P) -> std::io::Result<SequencePair> {
    SequencePair::from_records(FastaReader::from_filename(filename)?)
}
