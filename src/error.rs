//! Pipeline failure classes and their process exit codes.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop a run.
///
/// Input-side failures exit with 1, output-side runtime failures with 2.
/// Invariant violations inside the alignment core are assertions, not
/// variants here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read FASTA query sequence!")]
    EmptyQuery,

    #[error("query sequence contains characters outside the IUPAC DNA alphabet")]
    QueryAlphabet,

    #[error("found unexpected base, {0}!")]
    UnexpectedBase(char),

    #[error("{}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("quality line holds {available} characters, alignment spans {start}..={stop}")]
    QualityRange {
        start: usize,
        stop: usize,
        available: usize,
    },
}

impl PipelineError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        PipelineError::Read { path: path.to_path_buf(), source }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        PipelineError::Write { path: path.to_path_buf(), source }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Read { .. }
            | PipelineError::EmptyQuery
            | PipelineError::QueryAlphabet
            | PipelineError::UnexpectedBase(_) => 1,
            PipelineError::Write { .. } | PipelineError::QualityRange { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_side_failures_exit_one() {
        assert_eq!(PipelineError::EmptyQuery.exit_code(), 1);
        assert_eq!(PipelineError::UnexpectedBase('X').exit_code(), 1);
        let read = PipelineError::read(
            Path::new("missing.fasta"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(read.exit_code(), 1);
    }

    #[test]
    fn output_side_failures_exit_two() {
        let write = PipelineError::write(
            Path::new("out.tsv"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(write.exit_code(), 2);
        let range = PipelineError::QualityRange { start: 0, stop: 10, available: 4 };
        assert_eq!(range.exit_code(), 2);
    }
}
