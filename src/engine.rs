//! Per-read alignment pipeline.
//!
//! One pass over the FASTQ stream; each read is aligned against the query
//! and against its reverse complement, and every alignment becomes one
//! output record in input order (forward before reverse-complement). The
//! output stream is flushed after each record.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use bio::alphabets::dna;
use indicatif::{ProgressBar, ProgressStyle};

use crate::align::{align_nuc44, count_columns, LocalAlignment};
use crate::args::{Args, OutputType};
use crate::error::PipelineError;
use crate::io::fasta::{self, QueryRecord};
use crate::io::fastq;
use crate::report::{pair, tsv};
use crate::sequence::{first_token, reverse_complement};

/// Records between timing checkpoints.
const CHECKPOINT_INTERVAL: u64 = 256;

/// Matrix name written into TSV rows.
const TSV_MATRIX_NAME: &str = "NUC4.4";
/// Matrix name written into pair report headers (the dotted spelling).
const PAIR_MATRIX_NAME: &str = "NUC.4.4";

pub fn run(args: &Args) -> Result<(), PipelineError> {
    let fasta_data =
        fs::read(&args.query).map_err(|source| PipelineError::read(&args.query, source))?;
    let query = fasta::extract_first_sequence(&fasta_data).ok_or(PipelineError::EmptyQuery)?;

    if !dna::iupac_alphabet().is_word(&query.sequence) {
        return Err(PipelineError::QueryAlphabet);
    }

    let identifier_text = String::from_utf8_lossy(&query.identifier);
    println!("Query Sequence Identifier: {}", &identifier_text[1..]);

    let reads_data =
        fs::read(&args.reads).map_err(|source| PipelineError::read(&args.reads, source))?;

    match args.output_type {
        OutputType::Tsv => write_tsv(args, &query, &reads_data),
        OutputType::Pair => write_pair(args, &query, &reads_data),
    }
}

fn write_tsv(args: &Args, query: &QueryRecord, reads_data: &[u8]) -> Result<(), PipelineError> {
    let rc_query = reverse_complement(&query.sequence)?;

    let out_path = output_path(&args.reads, ".sw.tsv");
    println!("Writing tab separated values to \"{}\"", out_path.display());
    let file = File::create(&out_path).map_err(|source| PipelineError::write(&out_path, source))?;
    let mut writer = BufWriter::new(file);
    let write_error = |source| PipelineError::write(&out_path, source);

    let reference_id = &query.identifier[1..];
    let mut rc_reference_id = b"Reverse_Complement_".to_vec();
    rc_reference_id.extend_from_slice(reference_id);

    tsv::write_header(&mut writer).map_err(write_error)?;

    let start_time = Instant::now();
    let progress = spinner();
    let mut records_parsed = 0u64;

    for record in fastq::records(reads_data) {
        let forward = align_nuc44(&query.sequence, record.sequence, args.gap_penalty);
        let forward_counts = count_columns(&forward.x_aln, &forward.y_aln);
        let forward_quality = quality_slice(record.quality, &forward)?;
        tsv::write_row(
            &mut writer,
            reference_id,
            record.identifier,
            forward.score,
            args.gap_penalty,
            TSV_MATRIX_NAME,
            &forward_counts,
            &forward.x_aln,
            &forward.y_aln,
            forward_quality,
        )
        .map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        let reverse = align_nuc44(&rc_query, record.sequence, args.gap_penalty);
        let reverse_counts = count_columns(&reverse.x_aln, &reverse.y_aln);
        let reverse_quality = quality_slice(record.quality, &reverse)?;
        // the score column carries the forward-strand score on both rows of
        // a record; only the pair report surfaces the reverse-complement score
        tsv::write_row(
            &mut writer,
            &rc_reference_id,
            record.identifier,
            forward.score,
            args.gap_penalty,
            TSV_MATRIX_NAME,
            &reverse_counts,
            &reverse.x_aln,
            &reverse.y_aln,
            reverse_quality,
        )
        .map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        records_parsed += 1;
        if records_parsed % CHECKPOINT_INTERVAL == 0 {
            checkpoint(&progress, &start_time, records_parsed);
        }
    }

    progress.finish_and_clear();
    println!(
        "[{:>11.2} seconds]: {} sequences parsed",
        start_time.elapsed().as_secs_f64(),
        records_parsed
    );
    Ok(())
}

fn write_pair(args: &Args, query: &QueryRecord, reads_data: &[u8]) -> Result<(), PipelineError> {
    let rc_query = reverse_complement(&query.sequence)?;

    let out_path = output_path(&args.reads, ".sw.pair");
    println!("Writing pair-wise sequence alignments to \"{}\"", out_path.display());
    let file = File::create(&out_path).map_err(|source| PipelineError::write(&out_path, source))?;
    let mut writer = BufWriter::new(file);
    let write_error = |source| PipelineError::write(&out_path, source);

    let query_token = first_token(&query.identifier);
    let mut rc_identifier = b">Reverse_Complement_".to_vec();
    rc_identifier.extend_from_slice(&query_token[1..]);

    let start_time = Instant::now();
    let progress = spinner();
    let mut records_parsed = 0u64;

    for record in fastq::records(reads_data) {
        // the read's aligned string rides under the query label and the
        // query's aligned string under the read label; the crossing is part
        // of the wire format
        let forward = align_nuc44(&query.sequence, record.sequence, args.gap_penalty);
        pair::write_report(
            &mut writer,
            PAIR_MATRIX_NAME,
            &query.identifier,
            record.identifier,
            &forward.y_aln,
            &forward.x_aln,
            forward.score,
            args.gap_penalty,
        )
        .map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        let reverse = align_nuc44(&rc_query, record.sequence, args.gap_penalty);
        pair::write_report(
            &mut writer,
            PAIR_MATRIX_NAME,
            &rc_identifier,
            record.identifier,
            &reverse.y_aln,
            &reverse.x_aln,
            reverse.score,
            args.gap_penalty,
        )
        .map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        records_parsed += 1;
        if records_parsed % CHECKPOINT_INTERVAL == 0 {
            checkpoint(&progress, &start_time, records_parsed);
        }
    }

    progress.finish_and_clear();
    println!(
        "[{:>11.2} seconds]: {} sequences parsed",
        start_time.elapsed().as_secs_f64(),
        records_parsed
    );
    Ok(())
}

/// `reads.fastq` -> `reads.fastq.sw.tsv` / `reads.fastq.sw.pair`, beside the
/// input.
fn output_path(reads: &Path, suffix: &str) -> PathBuf {
    let mut name = reads.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Quality substring covering the read range the alignment consumed.
fn quality_slice<'a>(
    quality: &'a [u8],
    alignment: &LocalAlignment,
) -> Result<&'a [u8], PipelineError> {
    quality
        .get(alignment.start_y..=alignment.stop_y)
        .ok_or(PipelineError::QualityRange {
            start: alignment.start_y,
            stop: alignment.stop_y,
            available: quality.len(),
        })
}

fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}").unwrap());
    bar
}

fn checkpoint(progress: &ProgressBar, start_time: &Instant, records: u64) {
    progress.set_message(format!("{records} sequences parsed"));
    progress.println(format!(
        "[{:>11.2} seconds]: {} sequences parsed",
        start_time.elapsed().as_secs_f64(),
        records
    ));
}
