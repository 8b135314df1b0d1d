//! EMBOSS-style pairwise alignment reports.
//!
//! Reference: the `pair` report of EMBOSS `water`. Header and footer are
//! fixed text with interpolated fields; the body wraps the alignment at 50
//! columns per segment. Field widths are part of the wire format: count
//! numerators and segment coordinates sit in 20-character right-aligned
//! fields, identifiers in a left-aligned column as wide as the longer name.

use std::io::{self, Write};

use chrono::Local;

use crate::align::count_columns;
use crate::sequence::first_token;

/// Alignment columns per body segment.
const SEGMENT_WIDTH: usize = 50;

/// Write one pair report stamped with the current local time.
///
/// `trace_x` is laid out under the query identifier's token and `trace_y`
/// under the sequence identifier's token; callers choose which aligned
/// string rides under which label. Identifier tokens lose their first byte
/// (the `>` / `@` marker) unconditionally.
pub fn write_report<W: Write>(
    writer: &mut W,
    matrix_name: &str,
    query_identifier: &[u8],
    sequence_identifier: &[u8],
    trace_x: &[u8],
    trace_y: &[u8],
    score: i64,
    gap_penalty: i64,
) -> io::Result<()> {
    let rundate = Local::now().format("%a %b %d %H:%M:%S %Y").to_string();
    write_report_with_rundate(
        writer,
        &rundate,
        matrix_name,
        query_identifier,
        sequence_identifier,
        trace_x,
        trace_y,
        score,
        gap_penalty,
    )
}

/// [`write_report`] with the rundate supplied by the caller.
pub fn write_report_with_rundate<W: Write>(
    writer: &mut W,
    rundate: &str,
    matrix_name: &str,
    query_identifier: &[u8],
    sequence_identifier: &[u8],
    trace_x: &[u8],
    trace_y: &[u8],
    score: i64,
    gap_penalty: i64,
) -> io::Result<()> {
    assert_eq!(trace_x.len(), trace_y.len(), "aligned strings must have equal length");
    assert!(query_identifier.len() > 1, "query identifier must carry a name");
    assert!(sequence_identifier.len() > 1, "sequence identifier must carry a name");

    let sequence_name = &first_token(sequence_identifier)[1..];
    let query_name = &first_token(query_identifier)[1..];
    let name_width = sequence_name.len().max(query_name.len());

    let length = trace_x.len() as u64;
    let counts = count_columns(trace_x, trace_y);
    let percent = |n: u64| n as f64 / length as f64 * 100.0;

    writeln!(writer, "########################################")?;
    writeln!(writer, "# Program:  ednafull_linear_smith_waterman")?;
    writeln!(writer, "# Rundate:  {rundate}")?;
    writeln!(writer, "# Report_file: stdout")?;
    writeln!(writer, "########################################")?;
    writeln!(writer, "#=======================================")?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Aligned_sequences: 2")?;
    write!(writer, "# 1: ")?;
    writer.write_all(sequence_name)?;
    writeln!(writer)?;
    write!(writer, "# 2: ")?;
    writer.write_all(query_name)?;
    writeln!(writer)?;
    writeln!(writer, "# Matrix: {matrix_name}")?;
    writeln!(writer, "# Gap_penalty: {gap_penalty}.0")?;
    writeln!(writer, "# Extend_penalty: {gap_penalty}.0")?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Length: {length}")?;
    writeln!(
        writer,
        "# Identity:   {:>20}/{} ({:.1}%)",
        counts.identical,
        length,
        percent(counts.identical)
    )?;
    writeln!(
        writer,
        "# Similarity: {:>20}/{} ({:.1}%)",
        counts.identical,
        length,
        percent(counts.identical)
    )?;
    writeln!(
        writer,
        "# Gaps:       {:>20}/{} ({:.1}%)",
        counts.gaps_total(),
        length,
        percent(counts.gaps_total())
    )?;
    writeln!(
        writer,
        "# Mismatchs:  {:>20}/{} ({:.1}%)",
        counts.mismatches,
        length,
        percent(counts.mismatches)
    )?;
    writeln!(writer, "# Score: {score}")?;
    writeln!(writer, "#")?;
    writeln!(writer, "#")?;
    writeln!(writer, "#=======================================")?;

    // Running non-gap counters; each segment's displayed range is relative
    // to the aligned region, 1-based.
    let mut prev_x = 0u64;
    let mut prev_y = 0u64;
    let mut current_x = 0u64;
    let mut current_y = 0u64;

    let mut offset = 0;
    while offset < trace_x.len() {
        let end = (offset + SEGMENT_WIDTH).min(trace_x.len());
        let chunk_x = &trace_x[offset..end];
        let chunk_y = &trace_y[offset..end];

        current_x += chunk_x.iter().filter(|&&b| b != b'-').count() as u64;
        current_y += chunk_y.iter().filter(|&&b| b != b'-').count() as u64;

        // a gap-only segment must not advance the displayed start
        let starting_x = if current_x > prev_x { prev_x + 1 } else { prev_x };
        let starting_y = if current_y > prev_y { prev_y + 1 } else { prev_y };

        writer.write_all(b"\n\n")?;
        write_segment_line(writer, sequence_name, name_width, starting_y, chunk_y, current_y)?;

        let mut indicator = vec![b' '; name_width + 22];
        indicator.extend(
            chunk_x
                .iter()
                .zip(chunk_y)
                .map(|(&a, &b)| if a == b && a != b'-' { b'|' } else { b' ' }),
        );
        indicator.push(b'\n');
        writer.write_all(&indicator)?;

        write_segment_line(writer, query_name, name_width, starting_x, chunk_x, current_x)?;

        prev_x = current_x;
        prev_y = current_y;
        offset = end;
    }

    writeln!(writer)?;
    writeln!(writer)?;
    writeln!(writer, "#---------------------------------------")?;
    writeln!(writer, "#---------------------------------------")
}

fn write_segment_line<W: Write>(
    writer: &mut W,
    name: &[u8],
    name_width: usize,
    start: u64,
    chunk: &[u8],
    end: u64,
) -> io::Result<()> {
    writer.write_all(name)?;
    for _ in name.len()..name_width {
        writer.write_all(b" ")?;
    }
    write!(writer, " {start:>20} ")?;
    writer.write_all(chunk)?;
    writeln!(writer, " {end:>20}")
}
