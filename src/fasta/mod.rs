//! Chunked FASTA reading.
//!
//! # Example
//!
//! ```
//! use seq_stream::fasta::{Reader, Record};
//!
//! let fasta = b">id1\nACGT\nTGCA\n>id2\nGGGG\n";
//!
//! let mut reader = Reader::new(&fasta[..]);
//! let record = reader.next().unwrap().unwrap();
//! assert_eq!(record.id(), Ok("id1"));
//! // the raw range keeps the newline between the two sequence lines
//! assert_eq!(record.seq(), b"ACGT\nTGCA");
//! assert_eq!(record.full_seq(), b"ACGTTGCA");
//! ```
//!
//! # Details on parsing behaviour
//!
//! * Sequences may span multiple lines; the raw range includes the
//!   embedded newlines ([`Record::seq_lines`] iterates the lines,
//!   [`Record::full_seq`] joins them).
//! * A record ends at the next line starting with `>`, or at the end of
//!   the input. A final record without a trailing newline is completed
//!   up to its last terminated line: unlike FASTQ there is no expected
//!   length to validate the tail against, so bytes after the last
//!   newline are not part of any record.
//! * Two consecutive header lines produce a record with an empty
//!   sequence. A header line at the very end of the input, however, is
//!   reported as truncated.
//! * Input before the first record marker is skipped; empty input yields
//!   no records.

mod record;
mod scan;

pub use self::record::*;
pub use self::scan::*;

/// FASTA reader yielding [`OwnedRecord`]s by default.
pub type Reader<R, S = FastaScanner, M = RecordMaterializer> = crate::core::Reader<R, S, M>;
