//! Chunked, resumable FASTA and FASTQ record scanning.
//!
//! This library parses record-oriented sequence formats from arbitrarily
//! large byte streams without ever holding more than a bounded window of the
//! input in memory. The input is consumed in fixed-size chunks; records that
//! straddle a chunk boundary are carried over and completed once the next
//! chunk arrives, so the logical record sequence is identical whether the
//! whole input fits into one chunk or is split across thousands of small
//! reads.
//!
//! The moving parts are deliberately small and swappable:
//!
//! * a [`Scanner`](crate::core::Scanner) locates the byte ranges of one
//!   record in a buffer and reports *how far it got* when the buffer ends
//!   mid-record ([`FastqScanner`](fastq::FastqScanner),
//!   [`FastaScanner`](fasta::FastaScanner));
//! * a [`Materialize`](crate::core::Materialize) implementation turns the
//!   located ranges into an output value: an owned record, a raw
//!   `(head, seq, qual)` triple, or absolute stream positions for building
//!   an external index;
//! * the generic [`Reader`](crate::core::Reader) drives both over any
//!   [`std::io::Read`] source.
//!
//! # Example: FASTQ
//!
//! ```
//! use seq_stream::fastq::{Reader, Record};
//!
//! let fastq = b"@id1\nACGT\n+\nIIII\n@id2\nTGCA\n+\nIIII\n";
//!
//! let mut n = 0;
//! for record in Reader::new(&fastq[..]) {
//!     let record = record.expect("Error reading record");
//!     n += record.seq().len();
//! }
//! assert_eq!(n, 8);
//! ```
//!
//! # Example: FASTA
//!
//! Sequences may span multiple lines; the record keeps the raw byte range
//! and [`seq_lines()`](fasta::Record::seq_lines) iterates the individual
//! lines without copying:
//!
//! ```
//! use seq_stream::fasta::{Reader, Record};
//!
//! let fasta = b">id\nACGT\nAC\n";
//!
//! let record = Reader::new(&fasta[..]).next().unwrap().unwrap();
//! let lines: Vec<_> = record.seq_lines().collect();
//! assert_eq!(lines, vec![&b"ACGT"[..], &b"AC"[..]]);
//! ```
//!
//! # Chunk sizes
//!
//! Readers fetch input in chunks of 64 KiB by default
//! ([`with_chunk_size`](crate::core::Reader::with_chunk_size) configures
//! this).
//! A record must fit into the carried-over tail plus one further chunk; a
//! record that is still incomplete after a refill is reported as
//! [`Error::BufferLimit`], which keeps memory strictly bounded and
//! distinguishes oversized records from ordinary truncation
//! ([`Error::UnexpectedEnd`]).
//!
//! # Concurrency
//!
//! A reader is a plain pull-based iterator: no threads, no locking, no
//! state shared between instances. Run one reader per input (or per
//! pre-split byte range) from as many threads as you like.

extern crate memchr;

#[macro_use]
extern crate serde_derive;
extern crate serde;

pub mod core;
mod error;
pub mod fasta;
pub mod fastq;

pub use crate::error::{Error, Result};
