use crate::error::PersistenceError;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Exclusive `<target>.lock` used to replace a file atomically.
///
/// Data goes to the lock file; `commit` syncs it and renames it over the
/// target. A lock that is dropped uncommitted removes itself and leaves the
/// target untouched.
pub struct Lockfile {
    target: PathBuf,
    lock_path: PathBuf,
    file: File,
    committed: bool,
}

impl Lockfile {
    pub fn acquire(target: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let target = target.as_ref().to_path_buf();
        let lock_path = lock_path_for(&target);

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    PersistenceError::LockConflict(lock_path.display().to_string())
                }
                _ => PersistenceError::Io(e),
            })?;

        Ok(Self {
            target,
            lock_path,
            file,
            committed: false,
        })
    }

    pub fn write(&mut self, data: &[u8]) -> Result<(), PersistenceError> {
        self.file.write_all(data)?;
        Ok(())
    }

    /// Flush to disk and move the lock file over the target.
    pub fn commit(mut self) -> Result<(), PersistenceError> {
        self.file.sync_all()?;
        fs::rename(&self.lock_path, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.lock_path);
        }
    }
}

fn lock_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ideas.json");
        fs::write(&target, "old").unwrap();

        let mut lock = Lockfile::acquire(&target).unwrap();
        assert!(dir.path().join("ideas.json.lock").exists());
        lock.write(b"new").unwrap();
        lock.commit().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert!(!dir.path().join("ideas.json.lock").exists());
    }

    #[test]
    fn drop_without_commit_keeps_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ideas.json");
        fs::write(&target, "old").unwrap();

        {
            let mut lock = Lockfile::acquire(&target).unwrap();
            lock.write(b"partial").unwrap();
        }

        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
        assert!(!dir.path().join("ideas.json.lock").exists());
    }

    #[test]
    fn second_writer_gets_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ideas.json");

        let _held = Lockfile::acquire(&target).unwrap();
        assert!(matches!(
            Lockfile::acquire(&target),
            Err(PersistenceError::LockConflict(_))
        ));
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("ideas.json");
        let mut lock = Lockfile::acquire(&target).unwrap();
        lock.write(b"[]").unwrap();
        lock.commit().unwrap();
        assert!(target.exists());
    }
}
