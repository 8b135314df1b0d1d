//! Strict four-line FASTQ record iteration.

use super::{lines, Lines};

/// One FASTQ record, borrowed from the underlying buffer. Lines come
/// `\r`-trimmed; the separator line is dropped during iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRecord<'a> {
    pub identifier: &'a [u8],
    pub sequence: &'a [u8],
    pub quality: &'a [u8],
}

/// Iterator over the four-line records of a FASTQ buffer.
pub struct Records<'a> {
    lines: Lines<'a>,
}

/// Iterate the records of `data`. The cadence is strict: a trailing group
/// of fewer than four complete lines yields no record.
pub fn records(data: &[u8]) -> Records<'_> {
    Records { lines: lines(data) }
}

impl<'a> Iterator for Records<'a> {
    type Item = ReadRecord<'a>;

    fn next(&mut self) -> Option<ReadRecord<'a>> {
        let identifier = self.lines.next()?;
        let sequence = self.lines.next()?;
        let _separator = self.lines.next()?;
        let quality = self.lines.next()?;
        Some(ReadRecord { identifier, sequence, quality })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &[u8] =
        b"@read1 first\nACGT\n+\nIIII\n@read2\nTTGCA\n+read2\nJJJJJ\n";

    #[test]
    fn yields_identifier_sequence_and_quality() {
        let parsed: Vec<ReadRecord> = records(TWO_RECORDS).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].identifier, b"@read1 first");
        assert_eq!(parsed[0].sequence, b"ACGT");
        assert_eq!(parsed[0].quality, b"IIII");
        assert_eq!(parsed[1].identifier, b"@read2");
        assert_eq!(parsed[1].sequence, b"TTGCA");
        assert_eq!(parsed[1].quality, b"JJJJJ");
    }

    #[test]
    fn drops_a_partial_trailing_record() {
        let parsed: Vec<ReadRecord> = records(b"@r1\nACGT\n+\nIIII\n@r2\nACGT\n").collect();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn trims_carriage_returns_per_line() {
        let parsed: Vec<ReadRecord> = records(b"@r1\r\nACGT\r\n+\r\nIIII\r\n").collect();
        assert_eq!(parsed[0].identifier, b"@r1");
        assert_eq!(parsed[0].sequence, b"ACGT");
        assert_eq!(parsed[0].quality, b"IIII");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(records(b"").count(), 0);
    }
}
