/// Sentinel for a position slot that has not been located yet.
pub const UNSET: i64 = -1;

/// Reports how far a [`Scanner`](crate::core::Scanner) got before the end
/// of the buffer (or an inconsistency) stopped it.
///
/// The `Missing*` variants are ordered by scan progress, so a scanner fed
/// ever longer prefixes of the same record reports a non-decreasing status.
/// `Complete` means all positions of the record are known; `Invalid` means
/// the bytes cannot be a record and rescanning with more data will not help.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum ScanStatus {
    /// No record marker found at a line start
    MissingHeadStart,
    /// Header line is not terminated yet
    MissingHeadEnd,
    /// Buffer ends exactly where the sequence would begin
    MissingSeqStart,
    /// No separator line (FASTQ) or next record marker (FASTA) yet
    MissingSeqEnd,
    /// Separator line is not terminated yet
    MissingSepEnd,
    /// Buffer ends exactly where the quality string would begin
    MissingQualStart,
    /// The computed end of the quality string is beyond the buffer
    MissingQualEnd,
    /// All positions located
    Complete,
    /// Structure violated; fatal, never retried with more data
    Invalid,
}

impl ScanStatus {
    /// Returns `true` for the `Missing*` range: more input could still
    /// complete the record.
    #[inline]
    pub fn is_incomplete(self) -> bool {
        self < ScanStatus::Complete
    }
}

/// The coordinates of one record within a scan buffer.
///
/// Six byte offsets, each either valid or [`UNSET`]. The reader owns one
/// instance and passes it to every scan call as scratch; scanners overwrite
/// it from the front, filling slots in order as they are located. Once a
/// scan reports [`ScanStatus::Complete`], the set slots satisfy
/// `head_start <= head_end < seq_start <= seq_end < qual_start <= qual_end`.
/// FASTA leaves the quality slots unset, and encodes a record with an
/// empty sequence as `seq_end == head_end` (one before `seq_start`, with
/// an empty sequence slice).
///
/// `head_start` addresses the first byte *after* the `@`/`>` marker, so
/// [`head()`](ScanPositions::head) is the header text itself. End slots are
/// exclusive: they address the newline terminating the field.
///
/// Materializers get the scratch read-only and must copy out any bytes they
/// keep: the same instance is overwritten by the next scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPositions {
    head_start: i64,
    head_end: i64,
    seq_start: i64,
    seq_end: i64,
    qual_start: i64,
    qual_end: i64,
}

impl Default for ScanPositions {
    fn default() -> ScanPositions {
        ScanPositions {
            head_start: UNSET,
            head_end: UNSET,
            seq_start: UNSET,
            seq_end: UNSET,
            qual_start: UNSET,
            qual_end: UNSET,
        }
    }
}

impl ScanPositions {
    #[inline]
    pub fn new() -> ScanPositions {
        ScanPositions::default()
    }

    /// Clears all slots back to [`UNSET`]. Called by scanners at the start
    /// of every scan.
    #[inline]
    pub fn reset(&mut self) {
        *self = ScanPositions::default();
    }

    #[inline]
    pub fn head_start(&self) -> i64 {
        self.head_start
    }

    #[inline]
    pub fn head_end(&self) -> i64 {
        self.head_end
    }

    #[inline]
    pub fn seq_start(&self) -> i64 {
        self.seq_start
    }

    #[inline]
    pub fn seq_end(&self) -> i64 {
        self.seq_end
    }

    #[inline]
    pub fn qual_start(&self) -> i64 {
        self.qual_start
    }

    #[inline]
    pub fn qual_end(&self) -> i64 {
        self.qual_end
    }

    #[inline]
    pub fn set_head_start(&mut self, pos: usize) {
        self.head_start = pos as i64;
    }

    #[inline]
    pub fn set_head_end(&mut self, pos: usize) {
        self.head_end = pos as i64;
    }

    #[inline]
    pub fn set_seq_start(&mut self, pos: usize) {
        self.seq_start = pos as i64;
    }

    #[inline]
    pub fn set_seq_end(&mut self, pos: usize) {
        self.seq_end = pos as i64;
    }

    #[inline]
    pub fn set_qual_start(&mut self, pos: usize) {
        self.qual_start = pos as i64;
    }

    #[inline]
    pub fn set_qual_end(&mut self, pos: usize) {
        self.qual_end = pos as i64;
    }

    /// The six slots in scan order.
    #[inline]
    pub fn as_array(&self) -> [i64; 6] {
        [
            self.head_start,
            self.head_end,
            self.seq_start,
            self.seq_end,
            self.qual_start,
            self.qual_end,
        ]
    }

    /// Offset just past the record: the newline terminating the quality
    /// string (FASTQ), or the one terminating the sequence (FASTA). This
    /// newline doubles as the anchor of the next record, so the reader
    /// resumes scanning exactly here.
    #[inline]
    pub fn record_end(&self) -> usize {
        if self.qual_end >= 0 {
            self.qual_end as usize
        } else {
            self.seq_end as usize
        }
    }

    /// Returns a slice of the header text (without the leading marker).
    #[inline]
    pub fn head<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        buffer
            .get(self.head_start as usize..self.head_end as usize)
            .unwrap_or(&[])
    }

    /// Returns a slice of the raw sequence, embedded newlines included.
    #[inline]
    pub fn seq<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        buffer
            .get(self.seq_start as usize..self.seq_end as usize)
            .unwrap_or(&[])
    }

    /// Returns a slice of the raw quality string, embedded newlines
    /// included. Empty if the record has no quality (FASTA).
    #[inline]
    pub fn qual<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        if self.qual_start < 0 {
            return &[];
        }
        buffer
            .get(self.qual_start as usize..self.qual_end as usize)
            .unwrap_or(&[])
    }
}
