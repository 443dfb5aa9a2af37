//! Chunked FASTQ reading.
//!
//! # Example
//!
//! ```
//! use seq_stream::fastq::{Reader, Record};
//!
//! let fastq = b"@id1 some description\nACGT\n+\nIIII\n";
//!
//! let record = Reader::new(&fastq[..]).next().unwrap().unwrap();
//! assert_eq!(record.id(), Ok("id1"));
//! assert_eq!(record.desc(), Some(Ok("some description")));
//! assert_eq!(record.seq(), b"ACGT");
//! assert_eq!(record.qual(), b"IIII");
//! ```
//!
//! # Details on parsing behaviour
//!
//! * Sequences may span multiple lines as long as the quality string
//!   mirrors the sequence layout byte for byte; the embedded newlines are
//!   kept in both returned ranges. A line starting with `+` always ends
//!   the sequence.
//! * The separator line may be a bare `+` or repeat the header text; any
//!   other length is an error.
//! * A final record whose quality string ends exactly at the end of the
//!   input is accepted without a trailing newline.
//! * Input before the first record marker (including blank lines between
//!   records) is skipped.
//! * Empty input yields no records.
//! * The quality string is compared to the sequence by length only; no
//!   alphabet validation of any kind is performed.

mod record;
mod scan;

pub use self::record::*;
pub use self::scan::*;

/// FASTQ reader yielding [`OwnedRecord`]s by default.
pub type Reader<R, S = FastqScanner, M = RecordMaterializer> = crate::core::Reader<R, S, M>;
