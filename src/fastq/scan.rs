use memchr::memchr;
use memchr::memmem;

use crate::core::{ScanPositions, ScanStatus, Scanner};

/// The reference FASTQ scanner.
///
/// A record anchors on a newline immediately followed by `@`; anchoring on
/// the two-byte pair (rather than a bare `@`) is what rejects marker bytes
/// occurring inside quality strings. The sequence runs to the next newline
/// followed by `+`, so multi-line sequences pass through with their
/// embedded newlines as payload. The separator line must be a bare `+` or
/// repeat the header text (checked by length). The quality string must
/// mirror the sequence byte for byte, so its end offset is computed
/// arithmetically and validated against the following line boundary,
/// never searched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastqScanner;

impl Scanner for FastqScanner {
    fn scan(&self, buffer: &[u8], offset: usize, pos: &mut ScanPositions) -> ScanStatus {
        pos.reset();

        let mut search = offset;
        let anchor = loop {
            let nl = match memmem::find(&buffer[search..], b"\n@") {
                Some(i) => search + i,
                None => return ScanStatus::MissingHeadStart,
            };
            // a quality string may itself start with '@'; skip a match whose
            // newline terminates a bare separator line
            if nl >= offset + 2 && buffer[nl - 1] == b'+' && buffer[nl - 2] == b'\n' {
                search = nl + 1;
                continue;
            }
            break nl;
        };
        let head_start = anchor + 2;
        pos.set_head_start(head_start);

        let head_end = match memchr(b'\n', &buffer[head_start..]) {
            Some(i) => head_start + i,
            None => return ScanStatus::MissingHeadEnd,
        };
        pos.set_head_end(head_end);

        let seq_start = head_end + 1;
        if seq_start >= buffer.len() {
            return ScanStatus::MissingSeqStart;
        }
        pos.set_seq_start(seq_start);

        // newlines not followed by '+' are multi-line sequence payload
        let seq_end = match memmem::find(&buffer[seq_start..], b"\n+") {
            Some(i) => seq_start + i,
            None => return ScanStatus::MissingSeqEnd,
        };
        pos.set_seq_end(seq_end);

        // separator line: bare '+', or '+' repeating the header text
        let sep_start = seq_end + 1;
        let sep_end = match memchr(b'\n', &buffer[sep_start + 1..]) {
            Some(i) => sep_start + 1 + i,
            None => return ScanStatus::MissingSepEnd,
        };
        let sep_len = sep_end - sep_start - 1;
        if sep_len != 0 && sep_len != head_end - head_start {
            return ScanStatus::Invalid;
        }

        let qual_start = sep_end + 1;
        if qual_start >= buffer.len() {
            return ScanStatus::MissingQualStart;
        }
        pos.set_qual_start(qual_start);

        let qual_end = qual_start + (seq_end - seq_start);
        if qual_end >= buffer.len() {
            return ScanStatus::MissingQualEnd;
        }
        if buffer[qual_end] != b'\n' {
            return ScanStatus::Invalid;
        }
        pos.set_qual_end(qual_end);
        ScanStatus::Complete
    }

    #[inline]
    fn finish(&self, buffer: &[u8], pos: &mut ScanPositions, status: ScanStatus) -> bool {
        // a final quality string whose computed end falls exactly at the end
        // of data needs no trailing newline
        if status != ScanStatus::MissingQualEnd {
            return false;
        }
        let expected = pos.qual_start() + (pos.seq_end() - pos.seq_start());
        if expected == buffer.len() as i64 {
            pos.set_qual_end(buffer.len());
            return true;
        }
        false
    }
}
