//! Atomic file output.
use std::{
    io::{self, Write as _},
    path::Path,
};

/// Writes `contents` to `path`, creating or replacing it. The data goes to a
/// temporary file in the same directory first, which is synced and then
/// renamed over `path`, so readers (and an interrupted run) never observe a
/// partially written file.
///
/// On unix the file ends up with mode 0o600, which is what `tempfile` creates
/// it with.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".keygen-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
