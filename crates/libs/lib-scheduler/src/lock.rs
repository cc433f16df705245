//! Filesystem-backed exclusion lock (spec §4.6, §9 "File locks"): advisory,
//! survives worker crashes, short acquire timeout. Grounded in the `fs2`
//! usage pattern from the retrieval pack's `sarvex-neon` example
//! (`FileExt::try_lock_exclusive`), used here instead of an in-process map
//! per the spec's explicit guidance.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// An acquired lock; releases on drop.
pub struct ExclusionLock {
    file: File,
}

impl ExclusionLock {
    /// Attempts to acquire an exclusive lock on `<path>`, creating it (and
    /// its parent directory) if needed, polling until `timeout` elapses.
    /// Returns `Ok(None)` on timeout — the caller interprets this as
    /// "another training is already in progress" and suppresses the task.
    pub fn try_acquire(path: &Path, timeout: Duration) -> std::io::Result<Option<Self>> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;

        let deadline = Instant::now() + timeout;
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => return Ok(Some(ExclusionLock { file })),
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    if Instant::now() >= deadline {
                        return Ok(None);
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Drop for ExclusionLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// `<data_root>/locks/<classifier_name>__<model_id>.lock`, per spec §4.3.
pub fn lock_path(data_root: &Path, classifier_name: &str, model_id: &str) -> PathBuf {
    data_root
        .join("locks")
        .join(format!("{classifier_name}__{model_id}.lock"))
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_blocks_concurrent_holder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a__b.lock");

        let first = ExclusionLock::try_acquire(&path, Duration::from_millis(100))
            .unwrap()
            .expect("first acquire should succeed");
        let second = ExclusionLock::try_acquire(&path, Duration::from_millis(100)).unwrap();
        assert!(second.is_none(), "second acquire should time out");

        drop(first);
        let third = ExclusionLock::try_acquire(&path, Duration::from_millis(100)).unwrap();
        assert!(third.is_some(), "lock is released after drop");
    }

    #[test]
    fn test_lock_path_layout() {
        let root = Path::new("/data");
        let path = lock_path(root, "sentiment", "m1");
        assert_eq!(path, Path::new("/data/locks/sentiment__m1.lock"));
    }
}

// endregion: Unit Test
