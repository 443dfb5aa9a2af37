use memchr::{memchr, memrchr};
use memchr::memmem;

use crate::core::{ScanPositions, ScanStatus, Scanner};

/// The FASTA sibling of the FASTQ scanner: same status vocabulary and
/// driver contract, simpler two-field grammar.
///
/// A record anchors on a newline immediately followed by `>`; the sequence
/// runs until the next such pair (multi-line sequences keep their embedded
/// newlines) or until the true end of the stream. Since there is no quality
/// string to cross-check the sequence length against, a final record
/// without a trailing `\n>` is completed best-effort up to the last
/// terminated line; its completeness cannot be validated the way FASTQ's
/// can.
///
/// Two consecutive header lines produce a record with an empty sequence;
/// such a record has `seq_end == head_end` (one before `seq_start`) and an
/// empty sequence slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaScanner;

impl Scanner for FastaScanner {
    fn scan(&self, buffer: &[u8], offset: usize, pos: &mut ScanPositions) -> ScanStatus {
        pos.reset();

        let anchor = match memmem::find(&buffer[offset..], b"\n>") {
            Some(i) => offset + i,
            None => return ScanStatus::MissingHeadStart,
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
        if buffer[seq_start] == b'>' {
            // another header follows directly: empty sequence, terminated by
            // the same newline that ends this record's header
            pos.set_seq_start(seq_start);
            pos.set_seq_end(head_end);
            return ScanStatus::Complete;
        }
        pos.set_seq_start(seq_start);

        let seq_end = match memmem::find(&buffer[seq_start..], b"\n>") {
            Some(i) => seq_start + i,
            None => return ScanStatus::MissingSeqEnd,
        };
        pos.set_seq_end(seq_end);
        ScanStatus::Complete
    }

    #[inline]
    fn finish(&self, buffer: &[u8], pos: &mut ScanPositions, status: ScanStatus) -> bool {
        if status != ScanStatus::MissingSeqEnd {
            return false;
        }
        let seq_start = pos.seq_start() as usize;
        match memrchr(b'\n', &buffer[seq_start..]) {
            Some(i) => {
                pos.set_seq_end(seq_start + i);
                true
            }
            None => false,
        }
    }
}
