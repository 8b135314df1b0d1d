use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

use ednafull_linear_smith_waterman::args::Args;
use ednafull_linear_smith_waterman::engine;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // usage problems go to stdout, together with the --help pointer
            println!("{err}");
            return ExitCode::from(1);
        }
    };

    let reads_name = args.reads.to_string_lossy();
    if !reads_name.contains(".fq") && !reads_name.contains(".fastq") {
        println!("ednafull_linear_smith_waterman: could not find expected FASTQ file!");
        println!("Try 'ednafull_linear_smith_waterman --help' for more information.");
        return ExitCode::from(1);
    }

    match engine::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ednafull_linear_smith_waterman: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
