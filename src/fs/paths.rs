//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Full local path for an archive name inside the data directory.
pub fn archive_path(config: &Config, file_name: &str) -> PathBuf {
    config.data_directory.join(file_name)
}

/// Size of an existing local file, or `None` if there is none.
pub fn local_size(path: &Path) -> Result<Option<u64>> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_archive_path() {
        let config = Config {
            data_directory: PathBuf::from("/backups"),
            ..Default::default()
        };
        assert_eq!(
            archive_path(&config, "salesforce-2024-03-09.ZIP"),
            PathBuf::from("/backups/salesforce-2024-03-09.ZIP")
        );
    }

    #[test]
    fn test_local_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ZIP");
        assert_eq!(local_size(&path).unwrap(), None);

        std::fs::write(&path, b"12345").unwrap();
        assert_eq!(local_size(&path).unwrap(), Some(5));

        // A directory is not a finished archive.
        assert_eq!(local_size(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }
}
