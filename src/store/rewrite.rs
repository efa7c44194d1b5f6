use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::AppError;

/// Sibling temp file used while rewriting `target`: `contacts.txt` becomes
/// `contacts.txt.tmp`. Same directory, so the final rename never crosses
/// filesystems.
pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("contacts"));
    name.push(".tmp");
    target.with_file_name(name)
}

/// A replacement file being written next to `target`.
///
/// Nothing a reader of `target` can observe changes until [`Rewrite::commit`]
/// renames the finished temp file into place. Dropping an uncommitted
/// rewrite deletes the temp file, so every early return (no match, I/O
/// error) leaves the original exactly as it was.
pub struct Rewrite {
    target: PathBuf,
    tmp_path: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl Rewrite {
    /// Opens (truncating any stale leftover) the temp file for `target`.
    pub fn begin(target: &Path) -> Result<Self, AppError> {
        let tmp_path = temp_path_for(target);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;

        debug!(tmp = %tmp_path.display(), "rewrite started");
        Ok(Self {
            target: target.to_path_buf(),
            tmp_path,
            writer: Some(BufWriter::new(file)),
            committed: false,
        })
    }

    #[cfg(test)]
    fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }

    /// Appends `line`, terminating it with `\n` if it is not already.
    pub fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::other("rewrite already finished"))?;

        writer.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes and syncs the temp file, then renames it over the target.
    pub fn commit(mut self) -> Result<(), AppError> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| io::Error::other("rewrite already finished"))?;

        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        // Closed before the rename.
        drop(file);

        fs::rename(&self.tmp_path, &self.target)?;
        self.committed = true;

        debug!(target = %self.target.display(), "rewrite committed");
        Ok(())
    }
}

impl Drop for Rewrite {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.writer.take();

        match fs::remove_file(&self.tmp_path) {
            Ok(()) => debug!(tmp = %self.tmp_path.display(), "rewrite discarded"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                tmp = %self.tmp_path.display(),
                error = %e,
                "could not remove discarded temp file"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_sits_next_to_target() {
        let tmp = temp_path_for(Path::new("/data/book/contacts.txt"));

        assert_eq!(tmp, PathBuf::from("/data/book/contacts.txt.tmp"));
    }

    #[test]
    fn commit_replaces_target() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("contacts.txt");
        fs::write(&target, "old!1\n")?;

        let mut rewrite = Rewrite::begin(&target)?;
        rewrite.write_line("new!2")?;
        rewrite.write_line("newer!3\n")?;
        rewrite.commit()?;

        assert_eq!(fs::read_to_string(&target)?, "new!2\nnewer!3\n");
        assert!(!temp_path_for(&target).exists());
        Ok(())
    }

    #[test]
    fn dropping_uncommitted_rewrite_removes_temp_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("contacts.txt");
        fs::write(&target, "old!1\n")?;

        {
            let mut rewrite = Rewrite::begin(&target)?;
            rewrite.write_line("new!2")?;
            assert!(rewrite.tmp_path().exists());
        }

        assert!(!temp_path_for(&target).exists());
        assert_eq!(fs::read_to_string(&target)?, "old!1\n");
        Ok(())
    }

    #[test]
    fn stale_temp_file_is_truncated() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("contacts.txt");
        fs::write(temp_path_for(&target), "left over from a crash\n")?;

        let mut rewrite = Rewrite::begin(&target)?;
        rewrite.write_line("fresh!1")?;
        rewrite.commit()?;

        assert_eq!(fs::read_to_string(&target)?, "fresh!1\n");
        Ok(())
    }
}
