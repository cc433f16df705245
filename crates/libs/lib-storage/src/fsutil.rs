//! Atomic publication helper shared by document and model writes (spec §4.5):
//! write to a `.tmp` sibling, then rename into place. A concurrent reader
//! either observes the prior file or the new one, never a partial write.

use crate::error::Result;
use std::path::Path;
use tokio::fs;

pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("artifact");
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    fs::write(&tmp_path, bytes).await?;
    fs::rename(&tmp_path, path).await?;
    Ok(())
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_atomic_creates_file_and_no_tmp_left() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        write_atomic(&path, b"{}").await.unwrap();
        assert!(path.exists());
        let leftover_tmp = dir.path().join("doc.json.tmp");
        assert!(!leftover_tmp.exists());
    }

    #[tokio::test]
    async fn test_write_atomic_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        write_atomic(&path, b"first").await.unwrap();
        write_atomic(&path, b"second").await.unwrap();
        let contents = fs::read(&path).await.unwrap();
        assert_eq!(contents, b"second");
    }
}

// endregion: Unit Test
