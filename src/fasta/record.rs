use std::str::{self, Utf8Error};

use crate::core::{Materialize, ScanPositions};

/// FASTA record interface.
pub trait Record {
    /// Header line of the record, without the leading `>`
    fn head(&self) -> &[u8];
    /// Raw sequence; newlines between the lines of a multi-line record
    /// are kept
    fn seq(&self) -> &[u8];

    fn id_bytes(&self) -> &[u8] {
        self.head().split(|b| *b == b' ').next().unwrap()
    }

    /// Record ID: everything before the first space of the header
    fn id(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.id_bytes())
    }

    fn desc_bytes(&self) -> Option<&[u8]> {
        self.head().splitn(2, |b| *b == b' ').nth(1)
    }

    /// Description: everything after the first space of the header, if any
    fn desc(&self) -> Option<Result<&str, Utf8Error>> {
        self.desc_bytes().map(str::from_utf8)
    }

    /// Iterates over the individual sequence lines without copying.
    fn seq_lines(&self) -> SeqLines {
        SeqLines {
            inner: self.seq().split(newline as fn(&u8) -> bool),
        }
    }

    /// Returns the sequence with embedded newlines removed.
    fn full_seq(&self) -> Vec<u8> {
        let mut lines = self.seq_lines();
        let first = lines.next().unwrap_or(&[]);
        let mut out = first.to_vec();
        for line in lines {
            out.extend_from_slice(line);
        }
        out
    }
}

fn newline(b: &u8) -> bool {
    *b == b'\n'
}

/// Iterator over the lines of a sequence, as returned by
/// [`Record::seq_lines`].
pub struct SeqLines<'a> {
    inner: std::slice::Split<'a, u8, fn(&u8) -> bool>,
}

impl<'a> Iterator for SeqLines<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        self.inner.next()
    }
}

/// A FASTA record owning its data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRecord {
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
}

impl Record for OwnedRecord {
    #[inline]
    fn head(&self) -> &[u8] {
        &self.head
    }

    #[inline]
    fn seq(&self) -> &[u8] {
        &self.seq
    }
}

/// Materializer copying the located ranges into an [`OwnedRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordMaterializer;

impl Materialize for RecordMaterializer {
    type Item = OwnedRecord;

    #[inline]
    fn materialize(&self, buffer: &[u8], pos: &ScanPositions, _base: i64) -> OwnedRecord {
        OwnedRecord {
            head: pos.head(buffer).to_vec(),
            seq: pos.seq(buffer).to_vec(),
        }
    }
}
