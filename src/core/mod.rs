//! Format-neutral plumbing shared by the FASTA and FASTQ readers: the
//! record coordinate scratch ([`ScanPositions`]), the scan progress
//! vocabulary ([`ScanStatus`]), the pluggable [`Scanner`] and
//! [`Materialize`] seams, and the chunk-stitching [`Reader`] that drives
//! them over any [`std::io::Read`] source.

mod materialize;
mod positions;
mod reader;
mod scanner;

pub use self::materialize::*;
pub use self::positions::*;
pub use self::reader::*;
pub use self::scanner::*;
