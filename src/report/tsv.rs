//! Tab-separated alignment rows.

use std::io::{self, Write};

use crate::align::ColumnCounts;

/// Column description line, written once at the top of the file.
pub const HEADER: &str = "Reference Sequence Identifier\tSequence Identifier\t\
Smith-Waterman Score\tLinear Gap Penalty\tSubstitution Matrix\t\
Alignment Length\tAlignment Identities\tAlignment Gaps\t\
Alignment Mismatches\tReference Sequence Alignment\tSequence Alignment\t\
Sequence Alignment Base Quality\n";

pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())
}

/// Write one alignment as a TSV row.
///
/// `reference_alignment` is the aligned query string, `sequence_alignment`
/// the aligned read string; the alignment length column is their shared
/// length. Identifier bytes go out verbatim.
pub fn write_row<W: Write>(
    writer: &mut W,
    reference_id: &[u8],
    sequence_id: &[u8],
    score: i64,
    gap_penalty: i64,
    matrix_name: &str,
    counts: &ColumnCounts,
    reference_alignment: &[u8],
    sequence_alignment: &[u8],
    quality: &[u8],
) -> io::Result<()> {
    writer.write_all(reference_id)?;
    writer.write_all(b"\t")?;
    writer.write_all(sequence_id)?;
    write!(
        writer,
        "\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t",
        score,
        gap_penalty,
        matrix_name,
        reference_alignment.len(),
        counts.identical,
        counts.gaps_total(),
        counts.mismatches,
    )?;
    writer.write_all(reference_alignment)?;
    writer.write_all(b"\t")?;
    writer.write_all(sequence_alignment)?;
    writer.write_all(b"\t")?;
    writer.write_all(quality)?;
    writer.write_all(b"\n")
}
