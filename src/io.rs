//! Filesystem collaborators: document enumeration and delimited output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document::TermWeights;

/// List the regular files directly under `root`, hidden entries skipped.
///
/// Sorted so dispatch order is stable across runs; the pipeline's output
/// does not depend on it either way.
pub fn list_documents<P: AsRef<Path>>(root: P) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_hidden(&path) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Write a term→value mapping as `term,value` lines (CRLF terminated).
pub fn write_mapping<P: AsRef<Path>>(mapping: &TermWeights, destination: P) -> io::Result<()> {
    let file = File::create(destination)?;
    let mut writer = BufWriter::new(file);
    for (term, value) in mapping {
        write!(writer, "{},{}\r\n", term, value)?;
    }
    writer.flush()
}
