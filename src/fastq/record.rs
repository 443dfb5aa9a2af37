use std::str::{self, Utf8Error};

use crate::core::{Materialize, ScanPositions};

/// FASTQ record interface.
pub trait Record {
    /// Header line of the record, without the leading `@`
    fn head(&self) -> &[u8];
    /// Raw sequence; embedded newlines of a multi-line record are kept
    fn seq(&self) -> &[u8];
    /// Raw quality string, mirroring the sequence byte for byte
    fn qual(&self) -> &[u8];

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

    /// Both ID and description in one pass over the header
    fn id_desc_bytes(&self) -> (&[u8], Option<&[u8]>) {
        let mut h = self.head().splitn(2, |c| *c == b' ');
        (h.next().unwrap(), h.next())
    }
}

/// A FASTQ record owning its data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRecord {
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
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

    #[inline]
    fn qual(&self) -> &[u8] {
        &self.qual
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
            qual: pos.qual(buffer).to_vec(),
        }
    }
}
