//! DNA base complementing and identifier helpers.

use crate::error::PipelineError;

/// Complement of one IUPAC base code, case preserved. `U`/`u` complement to
/// `A`/`a`. Any byte outside the IUPAC set is a fatal input error.
pub fn complement(base: u8) -> Result<u8, PipelineError> {
    let complemented = match base {
        b'A' => b'T',
        b'a' => b't',
        b'B' => b'V',
        b'b' => b'v',
        b'C' => b'G',
        b'c' => b'g',
        b'D' => b'H',
        b'd' => b'h',
        b'G' => b'C',
        b'g' => b'c',
        b'H' => b'D',
        b'h' => b'd',
        b'K' => b'M',
        b'k' => b'm',
        b'M' => b'K',
        b'm' => b'k',
        b'N' => b'N',
        b'n' => b'n',
        b'R' => b'Y',
        b'r' => b'y',
        b'S' => b'S',
        b's' => b's',
        b'T' => b'A',
        b't' => b'a',
        b'U' => b'A',
        b'u' => b'a',
        b'V' => b'B',
        b'v' => b'b',
        b'W' => b'W',
        b'w' => b'w',
        b'Y' => b'R',
        b'y' => b'r',
        other => return Err(PipelineError::UnexpectedBase(other as char)),
    };
    Ok(complemented)
}

/// Reverse complement of a DNA sequence.
pub fn reverse_complement(sequence: &[u8]) -> Result<Vec<u8>, PipelineError> {
    sequence.iter().rev().map(|&base| complement(base)).collect()
}

/// First space-delimited token of an identifier line. The split is on the
/// space character only; tabs and other whitespace stay inside the token.
pub fn first_token(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b' ') {
        Some(space) => &line[..space],
        None => line,
    }
}
