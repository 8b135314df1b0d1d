//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ednafull_linear_smith_waterman")]
#[command(version = "1.0.0")]
#[command(
    about = "Run the Smith-Waterman algorithm with linear gap penalty and the EDNAFULL \
             substitution matrix on the given sequences found in the FASTA and FASTQ files.",
    long_about = None
)]
pub struct Args {
    /// Query sequence (FASTA format)
    #[arg(short, long)]
    pub query: PathBuf,

    /// Linear gap penalty
    #[arg(short = 'P', long = "gap-penalty", default_value_t = 16)]
    pub gap_penalty: i64,

    /// Output format
    #[arg(long = "type", value_enum, default_value = "tsv")]
    pub output_type: OutputType,

    /// Sequencing reads (FASTQ format)
    pub reads: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// One tab-separated row per alignment
    Tsv,
    /// EMBOSS-style pairwise report blocks
    Pair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let args =
            Args::try_parse_from(["ednafull_linear_smith_waterman", "-q", "gene.fasta", "reads.fastq"])
                .unwrap();
        assert_eq!(args.gap_penalty, 16);
        assert_eq!(args.output_type, OutputType::Tsv);
        assert_eq!(args.query, PathBuf::from("gene.fasta"));
        assert_eq!(args.reads, PathBuf::from("reads.fastq"));
    }

    #[test]
    fn long_options_parse() {
        let args = Args::try_parse_from([
            "ednafull_linear_smith_waterman",
            "--query=gene.fasta",
            "--gap-penalty=10",
            "--type=pair",
            "reads.fq",
        ])
        .unwrap();
        assert_eq!(args.gap_penalty, 10);
        assert_eq!(args.output_type, OutputType::Pair);
    }

    #[test]
    fn missing_reads_argument_is_an_error() {
        assert!(Args::try_parse_from(["ednafull_linear_smith_waterman", "-q", "gene.fasta"]).is_err());
    }

    #[test]
    fn unknown_output_type_is_an_error() {
        assert!(Args::try_parse_from([
            "ednafull_linear_smith_waterman",
            "-q",
            "gene.fasta",
            "--type=xml",
            "reads.fastq",
        ])
        .is_err());
    }
}
