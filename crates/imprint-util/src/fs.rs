use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the file itself, or `None` if no ancestor has it.
pub fn locate_upwards(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Read a file, transform its full content, and write it back.
///
/// Both handles are scoped to this call, so a failed write never leaves the
/// file open. The write replaces the whole content (last writer wins).
pub fn rewrite(path: &Path, transform: impl FnOnce(String) -> String) -> std::io::Result<()> {
    let content = std::fs::read_to_string(path)?;
    let updated = transform(content);
    std::fs::write(path, updated)
}
