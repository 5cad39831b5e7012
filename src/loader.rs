//! Sequence loader.
//!
//! Reads a plain text file and flattens it into a single [`Sequence`] by
//! removing line breaks. No header parsing or alphabet validation is done.
//!
//! Two layers are provided:
//! - [`read_sequence`] and friends return a typed [`LoadError`]
//! - [`load_sequence`] prints diagnostics for the user and reports a missing
//!   file as `None`

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::Sequence;

/// Message printed when the file does not exist.
pub const MSG_FILE_NOT_FOUND: &str = "File not found.";
/// Message printed when the file holds nothing but line breaks.
pub const MSG_EMPTY_SEQUENCE: &str = "Empty genetic sequence";

/// Errors that can occur while loading a sequence.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Flattens text into a sequence by dropping `\n` and `\r`.
pub fn sequence_from_str(content: &str) -> Sequence {
    Sequence::new(
        content
            .chars()
            .filter(|&c| c != '\n' && c != '\r')
            .collect::<String>(),
    )
}

/// Reads a whole sequence from a reader.
pub fn read_sequence_from<R: Read>(mut reader: R) -> LoadResult<Sequence> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(sequence_from_str(&content))
}

/// Reads the sequence stored in a file.
///
/// # Examples
///
/// ```no_run
/// use ssrview::loader::read_sequence;
///
/// let seq = read_sequence("chr1.txt").unwrap();
/// println!("Loaded {} bases", seq.len());
/// ```
pub fn read_sequence<P: AsRef<Path>>(path: P) -> LoadResult<Sequence> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
        _ => LoadError::IoError(e),
    })?;

    let sequence = read_sequence_from(BufReader::new(file))?;
    debug!(path = %path.display(), bases = sequence.len(), "loaded sequence");
    Ok(sequence)
}

/// Loads a sequence, telling the user about problems on `out`.
///
/// Returns `None` when the file could not be read. An empty sequence is
/// still returned as `Some`, after printing a notice.
pub fn load_sequence<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> io::Result<Option<Sequence>> {
    match read_sequence(&path) {
        Ok(sequence) => {
            if sequence.is_empty() {
                writeln!(out, "{}", MSG_EMPTY_SEQUENCE)?;
            }
            Ok(Some(sequence))
        }
        Err(LoadError::NotFound(p)) => {
            debug!(path = %p, "sequence file not found");
            writeln!(out, "{}", MSG_FILE_NOT_FOUND)?;
            Ok(None)
        }
        Err(e) => {
            debug!(error = %e, "could not read sequence file");
            writeln!(out, "{}", e)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_strip_newlines() {
        let seq = sequence_from_str("ACGT\nACGT\nACGT\n");
        assert_eq!(seq.as_str(), "ACGTACGTACGT");
    }

    #[test]
    fn test_strip_crlf() {
        let seq = sequence_from_str("ACGT\r\nACGT\r\n");
        assert_eq!(seq.as_str(), "ACGTACGT");
    }

    #[test]
    fn test_other_whitespace_is_kept() {
        // Only line breaks are removed
        let seq = sequence_from_str("AC GT\tA\n");
        assert_eq!(seq.as_str(), "AC GT\tA");
    }

    #[test]
    fn test_no_header_parsing() {
        let seq = sequence_from_str(">seq1\nACGT\n");
        assert_eq!(seq.as_str(), ">seq1ACGT");
    }

    #[test]
    fn test_read_from_reader() {
        let seq = read_sequence_from("TTAC\nGTAC\n".as_bytes()).unwrap();
        assert_eq!(seq.as_str(), "TTACGTAC");
    }

    #[test]
    fn test_read_file() {
        let file = write_temp("ACGTAC\nGTACGT\n");
        let seq = read_sequence(file.path()).unwrap();
        assert_eq!(seq.as_str(), "ACGTACGTACGT");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_sequence(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_load_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let loaded = load_sequence(dir.path().join("missing.txt"), &mut out).unwrap();

        assert!(loaded.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "File not found.\n");
    }

    #[test]
    fn test_load_directory_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let loaded = load_sequence(dir.path(), &mut out).unwrap();

        assert!(loaded.is_none());
        assert!(String::from_utf8(out).unwrap().starts_with("Failed to read file"));
    }

    #[test]
    fn test_load_only_newlines_is_empty() {
        let file = write_temp("\n\n\n");
        let mut out = Vec::new();
        let loaded = load_sequence(file.path(), &mut out).unwrap();

        assert_eq!(loaded, Some(Sequence::new("")));
        assert_eq!(String::from_utf8(out).unwrap(), "Empty genetic sequence\n");
    }

    #[test]
    fn test_load_quiet_on_success() {
        let file = write_temp("ACGT\n");
        let mut out = Vec::new();
        let loaded = load_sequence(file.path(), &mut out).unwrap();

        assert_eq!(loaded, Some(Sequence::new("ACGT")));
        assert!(out.is_empty());
    }
}
