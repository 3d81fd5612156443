use std::fs;
use std::io;
use std::path::Path;

/// Result of one redaction pass over one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target path does not exist. Nothing to do — history snapshots
    /// may predate the file.
    Missing,
    /// The file exists but contains no occurrence of the old literal.
    Clean,
    /// Every occurrence was replaced and the file rewritten in full.
    Redacted { occurrences: usize },
}

/// Replace every occurrence of `old` in the file at `path` with `new`.
///
/// The file is treated as an opaque UTF-8 blob: read whole, substituted in
/// memory, written back whole with a truncating write. The write only happens
/// when at least one occurrence was found, so a clean file keeps its exact
/// bytes and timestamps and the operation is idempotent.
///
/// Read, write, and UTF-8 decoding failures propagate unclassified; the
/// caller decides how a failed filter iteration is handled.
pub fn redact_file(path: &Path, old: &str, new: &str) -> io::Result<Outcome> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Outcome::Missing),
        Err(e) => return Err(e),
    };

    let occurrences = content.matches(old).count();
    if occurrences == 0 {
        return Ok(Outcome::Clean);
    }

    fs::write(path, content.replace(old, new))?;
    Ok(Outcome::Redacted { occurrences })
}
