use std::fs::File;
use std::io;
use std::path::Path;

use crate::core::{Materialize, ScanPositions, ScanStatus, Scanner};
use crate::error::Error;

/// The default chunk size of 64 KiB.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// The chunk-stitching scan driver.
///
/// Pulls fixed-size chunks from an [`io::Read`] source into a rolling
/// buffer, repeatedly runs the scanner to drain every complete record from
/// it, and carries the unconsumed tail over to the next chunk when a record
/// straddles the boundary. Yields one materialized value per record via
/// [`Iterator`].
///
/// The buffer holds at most the tail of one chunk plus the newest chunk; a
/// record that does not fit is reported as
/// [`Error::BufferLimit`](crate::Error) rather than growing the buffer, so
/// memory stays bounded by the configured chunk size.
///
/// A reader is single-threaded and forward-only: consuming it consumes the
/// source, there is no rewinding, and after the first fatal error (or the
/// clean end of the stream) it yields `None` forever. Dropping it mid-way
/// is always safe.
pub struct Reader<R: io::Read, S: Scanner, M: Materialize> {
    src: R,
    scanner: S,
    materializer: M,
    chunk_size: usize,
    // unconsumed tail of the previous chunk + newest chunk, seeded with a
    // synthetic newline so the first record anchors like any other
    buf: Vec<u8>,
    // scan resumes here; always at or before a record boundary newline
    offset: usize,
    // absolute stream offset of buf[0]; -1 while the synthetic byte is there
    base: i64,
    pos: ScanPositions,
    at_end: bool,
    refilled: bool,
    finished: bool,
}

impl<R, S, M> Reader<R, S, M>
where
    R: io::Read,
    S: Scanner + Default,
    M: Materialize + Default,
{
    /// Creates a new reader with the default chunk size of 64 KiB.
    ///
    /// # Example:
    ///
    /// ```
    /// use seq_stream::fastq::{Reader, Record};
    /// let fastq = b"@id\nACGT\n+\nIIII\n";
    ///
    /// let mut reader = Reader::new(&fastq[..]);
    /// let record = reader.next().unwrap().unwrap();
    /// assert_eq!(record.id(), Ok("id"))
    /// ```
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, CHUNK_SIZE)
    }

    /// Creates a new reader reading chunks of `chunk_size` bytes. The
    /// minimum allowed size is 4; every record must fit into the
    /// carried-over tail plus one chunk.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size >= 4);
        Reader {
            src: reader,
            scanner: S::default(),
            materializer: M::default(),
            chunk_size,
            buf: vec![b'\n'],
            offset: 0,
            base: -1,
            pos: ScanPositions::new(),
            at_end: false,
            refilled: false,
            finished: false,
        }
    }
}

impl<S, M> Reader<File, S, M>
where
    S: Scanner + Default,
    M: Materialize + Default,
{
    /// Creates a reader from a file path.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use seq_stream::fastq::Reader;
    ///
    /// let mut reader = Reader::from_path("seqs.fastq").unwrap();
    ///
    /// // (... do something with the reader)
    /// ```
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        File::open(path).map(Self::new)
    }
}

impl<R, S, M> Reader<R, S, M>
where
    R: io::Read,
    S: Scanner,
    M: Materialize,
{
    /// Returns a reader scanning with `scanner` instead; all other state is
    /// kept. Use this to swap in an alternative [`Scanner`] implementation
    /// with reference semantics.
    pub fn set_scanner<T: Scanner>(self, scanner: T) -> Reader<R, T, M> {
        Reader {
            src: self.src,
            scanner,
            materializer: self.materializer,
            chunk_size: self.chunk_size,
            buf: self.buf,
            offset: self.offset,
            base: self.base,
            pos: self.pos,
            at_end: self.at_end,
            refilled: self.refilled,
            finished: self.finished,
        }
    }

    /// Returns a reader building records with `materializer` instead; all
    /// other state is kept.
    ///
    /// # Example:
    ///
    /// ```
    /// use seq_stream::core::PositionMaterializer;
    /// use seq_stream::fastq::Reader;
    ///
    /// let fastq = &b"@id\nACGT\n+\nIIII\n"[..];
    /// let mut reader = Reader::new(fastq).set_materializer(PositionMaterializer);
    ///
    /// // absolute offsets into the input, usable without copying any bytes
    /// let pos = reader.next().unwrap().unwrap();
    /// assert_eq!(&fastq[pos[2] as usize..pos[3] as usize], b"ACGT");
    /// ```
    pub fn set_materializer<T: Materialize>(self, materializer: T) -> Reader<R, S, T> {
        Reader {
            src: self.src,
            scanner: self.scanner,
            materializer,
            chunk_size: self.chunk_size,
            buf: self.buf,
            offset: self.offset,
            base: self.base,
            pos: self.pos,
            at_end: self.at_end,
            refilled: self.refilled,
            finished: self.finished,
        }
    }

    #[inline]
    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Absolute stream offset of the scan position: the number of input
    /// bytes fully consumed into yielded records.
    #[inline]
    pub fn stream_offset(&self) -> u64 {
        (self.base + self.offset as i64).max(0) as u64
    }

    fn read_next(&mut self) -> Option<Result<M::Item, Error>> {
        if self.finished {
            return None;
        }
        loop {
            let status = self.scanner.scan(&self.buf, self.offset, &mut self.pos);
            match status {
                ScanStatus::Complete => {
                    self.refilled = false;
                    let item = self.materializer.materialize(&self.buf, &self.pos, self.base);
                    self.offset = self.pos.record_end();
                    return Some(Ok(item));
                }
                ScanStatus::Invalid => {
                    self.finished = true;
                    return Some(Err(Error::InvalidRecord {
                        offset: self.error_offset(),
                    }));
                }
                status => {
                    if self.at_end {
                        return self.finish_at_end(status);
                    }
                    if status == ScanStatus::MissingHeadStart {
                        // No record pending: only a newline+marker pair split
                        // across the boundary can matter, keep one tail byte.
                        self.offset = self.buf.len().saturating_sub(1);
                        self.refilled = false;
                    } else if self.refilled {
                        // the record survived a whole refill incomplete
                        self.finished = true;
                        return Some(Err(Error::BufferLimit {
                            offset: self.error_offset(),
                            chunk_size: self.chunk_size,
                        }));
                    } else {
                        self.refilled = true;
                    }
                    if let Err(e) = self.refill() {
                        self.finished = true;
                        return Some(Err(Error::Io(e)));
                    }
                }
            }
        }
    }

    // Drops the consumed prefix, appends one chunk to the tail and resumes
    // scanning at the tail start. A fill shorter than chunk_size marks the
    // final chunk. Fill loop adapted from `io::Read::read_exact`.
    fn refill(&mut self) -> io::Result<()> {
        self.base += self.offset as i64;
        self.buf.drain(..self.offset);
        self.offset = 0;
        let start = self.buf.len();
        self.buf.resize(start + self.chunk_size, 0);
        let mut num_read = 0;
        while num_read < self.chunk_size {
            match self.src.read(&mut self.buf[start + num_read..]) {
                Ok(0) => break,
                Ok(n) => num_read += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.buf.truncate(start + num_read);
                    return Err(e);
                }
            }
        }
        self.buf.truncate(start + num_read);
        if num_read < self.chunk_size {
            self.at_end = true;
        }
        Ok(())
    }

    fn finish_at_end(&mut self, status: ScanStatus) -> Option<Result<M::Item, Error>> {
        self.finished = true;
        if status == ScanStatus::MissingHeadStart {
            // clean end of stream, no partial record pending
            return None;
        }
        if self.scanner.finish(&self.buf, &mut self.pos, status) {
            let item = self.materializer.materialize(&self.buf, &self.pos, self.base);
            return Some(Ok(item));
        }
        Some(Err(Error::UnexpectedEnd {
            offset: self.error_offset(),
        }))
    }

    // Approximate absolute offset for error reporting: the marker byte of
    // the record being scanned, or the scan position if none was found.
    fn error_offset(&self) -> u64 {
        let local = if self.pos.head_start() >= 0 {
            self.pos.head_start() - 1
        } else {
            self.offset as i64
        };
        (self.base + local).max(0) as u64
    }
}

impl<R, S, M> Iterator for Reader<R, S, M>
where
    R: io::Read,
    S: Scanner,
    M: Materialize,
{
    type Item = Result<M::Item, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}
