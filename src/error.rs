use std::error::Error as StdError;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the readers.
///
/// All variants other than `Io` carry an approximate absolute byte offset
/// into the input stream: the start of the record being scanned, or the
/// scan position if no record had begun. Every variant is fatal; after
/// returning an error, a reader yields `None` forever.
#[derive(Debug)]
pub enum Error {
    /// Error from the underlying byte source, passed through unchanged
    Io(io::Error),
    /// The stream ended inside a record that could not be completed
    UnexpectedEnd {
        /// Approximate byte offset of the truncated record
        offset: u64,
    },
    /// A record did not fit into the carried-over tail plus one chunk.
    /// Distinguishable from `UnexpectedEnd`: the input may well continue,
    /// but the record is larger than the configured chunk size allows.
    BufferLimit {
        /// Approximate byte offset of the oversized record
        offset: u64,
        /// The configured chunk size that was exceeded
        chunk_size: usize,
    },
    /// The record structure is violated: a separator line of the wrong
    /// length, a record marker where payload was expected, or a quality
    /// string that does not end at a line boundary.
    InvalidRecord {
        /// Approximate byte offset of the offending record
        offset: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => e.fmt(f),
            Error::UnexpectedEnd { offset } => {
                write!(f, "unexpected end of input within a record (near byte {})", offset)
            }
            Error::BufferLimit { offset, chunk_size } => write!(
                f,
                "record near byte {} does not fit into the tail of the previous chunk plus one {} byte chunk",
                offset, chunk_size
            ),
            Error::InvalidRecord { offset } => {
                write!(f, "invalid record structure near byte {}", offset)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            _ => None,
        }
    }
}
