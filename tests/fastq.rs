#[macro_use]
extern crate matches;
extern crate seq_stream;

use seq_stream::core::{
    PartsMaterializer, PositionMaterializer, ScanPositions, ScanStatus, Scanner,
};
use seq_stream::fastq::{FastqScanner, OwnedRecord, Reader, Record};
use seq_stream::Error;

const FASTQ: &[u8] = b"@id desc\nATGC\n+\n~~~~\n@id2\nTGCA\n+\nIIII\n";

fn read_all(data: &[u8], chunk_size: usize) -> Vec<OwnedRecord> {
    Reader::with_chunk_size(data, chunk_size)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| panic!("Error at chunk size {}: {}", chunk_size, e))
}

#[test]
fn test_fastq_reader() {
    let expected = [
        (Ok("id"), Some(Ok("desc")), &b"ATGC"[..], &b"~~~~"[..]),
        (Ok("id2"), None, &b"TGCA"[..], &b"IIII"[..]),
    ];

    // every chunk size large enough to span one record must yield the
    // same record sequence
    for chunk in 22..100 {
        let mut exp_iter = expected.iter();
        let mut reader = Reader::with_chunk_size(FASTQ, chunk);
        while let Some(&(id, desc, seq, qual)) = exp_iter.next() {
            let record = reader
                .next()
                .unwrap()
                .unwrap_or_else(|e| panic!("Error at chunk size {}: {}", chunk, e));

            assert_eq!(record.id(), id, "ID mismatch at chunk size {}", chunk);
            assert_eq!(record.desc(), desc, "desc mismatch at chunk size {}", chunk);
            assert_eq!(record.seq(), seq, "seq mismatch at chunk size {}", chunk);
            assert_eq!(record.qual(), qual, "qual mismatch at chunk size {}", chunk);
        }
        assert!(reader.next().is_none());
    }
}

#[test]
fn test_scan_complete() {
    let data = &b"\n@foo#2\nAATTGCCG\n+\n3425@!#!\n@barfoo#2\n"[..];
    let mut pos = ScanPositions::new();

    let status = FastqScanner.scan(data, 0, &mut pos);
    assert_eq!(status, ScanStatus::Complete);
    assert_eq!(pos.head(data), b"foo#2");
    assert_eq!(pos.seq(data), b"AATTGCCG");
    assert_eq!(pos.qual(data), b"3425@!#!");

    // resuming at the record end must anchor on the second header
    let status = FastqScanner.scan(data, pos.record_end(), &mut pos);
    assert_eq!(status, ScanStatus::MissingSeqStart);
    assert_eq!(pos.head(data), b"barfoo#2");

    // driven over the same input, the first record yields and the
    // header-only second record is reported as truncated
    let mut reader = Reader::new(data);
    let rec = reader.next().unwrap().unwrap();
    assert_eq!(rec.head(), b"foo#2");
    let err = reader.next().unwrap().err().expect("should fail");
    assert_matches!(err, Error::UnexpectedEnd { offset: 28 });
}

#[test]
fn test_scan_truncated_prefixes() {
    // statuses of ever longer prefixes must order by scan progress and
    // never report Complete or Invalid before the record is whole
    let data = &b"\n@foo#2\nAATTGCCG\n+\n3425@!#!\n"[..];
    let mut pos = ScanPositions::new();
    let mut last = ScanStatus::MissingHeadStart;
    for cut in 0..data.len() {
        let status = FastqScanner.scan(&data[..cut], 0, &mut pos);
        assert!(
            status.is_incomplete(),
            "unexpected {:?} at cut {}",
            status,
            cut
        );
        assert!(status >= last, "{:?} after {:?} at cut {}", status, last, cut);
        last = status;
    }
    let status = FastqScanner.scan(data, 0, &mut pos);
    assert_eq!(status, ScanStatus::Complete);
}

#[test]
fn test_sep_line_repeats_header() {
    let bare = &b"@foo#2\nAATT\n+\nIII!\n"[..];
    let repeated = &b"@foo#2\nAATT\n+foo#2\nIII!\n"[..];
    let rec_bare = Reader::new(bare).next().unwrap().unwrap();
    let rec_rep = Reader::new(repeated).next().unwrap().unwrap();
    assert_eq!(rec_bare, rec_rep);
}

#[test]
fn test_sep_line_wrong_length() {
    // separator must be bare '+' or as long as the header text
    let data = &b"@foo#2\nAATT\n+foo\nIII!\n"[..];
    let mut pos = ScanPositions::new();
    let status = FastqScanner.scan(&[&b"\n"[..], data].concat(), 0, &mut pos);
    assert_eq!(status, ScanStatus::Invalid);

    let err = Reader::new(data).next().unwrap().err().expect("should fail");
    assert_matches!(err, Error::InvalidRecord { offset: 0 });
}

#[test]
fn test_qual_not_at_line_boundary() {
    // quality longer than the sequence: the computed end misses the newline
    let data = &b"@id\nATGC\n+\nIIIII\n@id2\nATGC\n+\nIIII\n"[..];
    let err = Reader::new(data).next().unwrap().err().expect("should fail");
    assert_matches!(err, Error::InvalidRecord { .. });
}

#[test]
fn test_multiline_record() {
    let data = &b"@id\nAC\nGT\n+\nII\nJJ\n"[..];
    for chunk in 18..60 {
        let records = read_all(data, chunk);
        assert_eq!(records.len(), 1);
        // embedded newlines are part of both ranges
        assert_eq!(records[0].seq(), b"AC\nGT");
        assert_eq!(records[0].qual(), b"II\nJJ");
    }
}

#[test]
fn test_qual_starting_with_marker() {
    let data = &b"@a\nAC\n+\n@I\n@b\nGT\n+\nII\n"[..];
    for chunk in 22..60 {
        let records = read_all(data, chunk);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].qual(), b"@I");
        assert_eq!(records[1].head(), b"b");
    }
}

#[test]
fn test_final_qual_without_newline() {
    // scanner reports the missing end...
    let data = &b"\n@foo#2\nAATTGCCG\n+\n3425@!#!"[..];
    let mut pos = ScanPositions::new();
    let status = FastqScanner.scan(data, 0, &mut pos);
    assert_eq!(status, ScanStatus::MissingQualEnd);

    // ...but at the true end of the stream the record is still completed,
    // its quality end computed from the sequence length
    for chunk in 27..60 {
        let records = read_all(data, chunk);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].head(), b"foo#2");
        assert_eq!(records[0].qual(), b"3425@!#!");
    }
}

fn gen_records(n: usize) -> Vec<u8> {
    let mut data = vec![];
    for i in 0..n {
        data.push(b'@');
        data.extend(format!("read{} len{}", i, i % 17).bytes());
        data.push(b'\n');
        let len = 1 + (i * 7) % 50;
        data.extend(std::iter::repeat(b'A').take(len));
        data.extend(b"\n+\n");
        data.extend(std::iter::repeat(b'J').take(len));
        data.push(b'\n');
    }
    data
}

#[test]
fn test_chunk_size_invariance() {
    let data = gen_records(40);
    // longest record: header ~14 + 2 * 50 + fixed bytes
    let whole = read_all(&data, data.len() + 1);
    assert_eq!(whole.len(), 40);
    for chunk in 120..200 {
        assert_eq!(read_all(&data, chunk), whole, "chunk size {}", chunk);
    }
    assert_eq!(read_all(&data, data.len()), whole);
}

#[test]
fn test_buffer_limit() {
    // a record larger than tail + one chunk is fatal, and distinguishable
    // from a truncated input
    let data = gen_records(3);
    let err = Reader::with_chunk_size(&data[..], 8)
        .collect::<Result<Vec<_>, _>>()
        .err()
        .expect("should fail");
    assert_matches!(err, Error::BufferLimit { chunk_size: 8, .. });
}

#[test]
fn test_truncated() {
    for data in [
        &b"@id"[..],
        &b"@id\nATGC"[..],
        &b"@id\nATGC\n+"[..],
        &b"@id\nATGC\n+\n"[..],
        &b"@id\nATGC\n+\nII"[..],
    ] {
        let err = Reader::new(data).next().unwrap().err().expect("should fail");
        assert_matches!(err, Error::UnexpectedEnd { .. });
    }
}

#[test]
fn test_none_after_err() {
    let mut reader = Reader::new(&b"@id\nATGC"[..]);
    assert!(reader.next().unwrap().is_err());
    assert!(reader.next().is_none());
}

#[test]
fn test_empty_input() {
    assert!(Reader::new(&b""[..]).next().is_none());
    assert!(Reader::new(&b"\n\n\n"[..]).next().is_none());
}

#[test]
fn test_parts_materializer() {
    let mut reader = Reader::new(FASTQ).set_materializer(PartsMaterializer);
    let (head, seq, qual) = reader.next().unwrap().unwrap();
    assert_eq!(head, b"id desc");
    assert_eq!(seq, b"ATGC");
    assert_eq!(qual, b"~~~~");
}

#[test]
fn test_position_materializer() {
    // absolute offsets must slice the original stream back into the same
    // fields, at every chunk size
    let data = gen_records(20);
    let expected = read_all(&data, data.len() + 1);
    for chunk in 120..160 {
        let positions: Vec<[i64; 6]> = Reader::with_chunk_size(&data[..], chunk)
            .set_materializer(PositionMaterializer)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(positions.len(), expected.len());
        for (pos, rec) in positions.iter().zip(&expected) {
            assert_eq!(&data[pos[0] as usize..pos[1] as usize], &rec.head[..]);
            assert_eq!(&data[pos[2] as usize..pos[3] as usize], &rec.seq[..]);
            assert_eq!(&data[pos[4] as usize..pos[5] as usize], &rec.qual[..]);
        }
    }
}

#[test]
fn test_stream_offset() {
    let mut reader = Reader::new(FASTQ);
    reader.next().unwrap().unwrap();
    // positioned on the newline preceding the second record
    assert_eq!(reader.stream_offset(), 20);
    reader.next().unwrap().unwrap();
    assert_eq!(reader.stream_offset(), 37);
}
