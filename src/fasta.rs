//! Minimal FASTA-style sequence reader.
//!
//! The tool works on a single logical sequence, so this reader is
//! deliberately simple: header lines (starting with `>`) are skipped and
//! every other line is trimmed and concatenated in order. A multi-record
//! file therefore loads as one joined sequence.
//!
//! ## Accepted input
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! ACGT
//! ```
//!
//! Plain text files without headers work too.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::model::Sequence;

/// Errors that can occur while reading a sequence source.
#[derive(Error, Debug)]
pub enum FastaError {
    /// The file could not be opened or read. Fatal for this construction
    /// attempt; the caller may retry with a different path.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sequence-file operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Reads sequence text from a reader, skipping headers.
///
/// Each line is trimmed of surrounding whitespace. Lines starting with `>`
/// (including a bare `>`) and empty lines are skipped; everything else is
/// concatenated in order.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<String> {
    let mut data = String::new();

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('>') {
            continue;
        }

        data.push_str(line);
    }

    Ok(data)
}

/// Reads sequence text from an in-memory string.
///
/// Useful for testing or processing already-loaded data.
pub fn parse_fasta_str(content: &str) -> FastaResult<String> {
    parse_fasta(content.as_bytes())
}

/// Reads the sequence text of a file.
///
/// A missing or unreadable file fails with [`FastaError::Io`].
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<String> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Loads a sequence from a file, attaching the user-supplied metadata.
///
/// The file content is stored verbatim (no case folding), so lowercase or
/// ambiguity characters surface as construction diagnostics on the returned
/// [`Sequence`].
pub fn load_sequence_file<P: AsRef<Path>>(
    path: P,
    forward_strand: bool,
    reading_frame: i32,
    kind_label: &str,
) -> FastaResult<Sequence> {
    let data = parse_fasta_file(path)?;
    Ok(Sequence::new(forward_strand, reading_frame, kind_label, data))
}
