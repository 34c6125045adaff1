//! Transient upload intake

use parley_application::DocumentError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

const STAGING_PREFIX: &str = "parley-upload-";

/// Creates per-upload transient directories.
#[derive(Debug, Clone, Default)]
pub struct UploadStaging {
    base: Option<PathBuf>,
}

impl UploadStaging {
    /// Stage under the system temp dir
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage under `base` instead of the system temp dir
    pub fn in_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Copy `upload` into a fresh transient directory.
    pub fn stage(&self, upload: &Path) -> Result<StagedUpload, DocumentError> {
        let io_err = |path: &Path, e: std::io::Error| DocumentError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX);
        let dir = match &self.base {
            Some(base) => {
                std::fs::create_dir_all(base).map_err(|e| io_err(base, e))?;
                builder.tempdir_in(base)
            }
            None => builder.tempdir(),
        }
        .map_err(|e| io_err(upload, e))?;

        let file_name = upload
            .file_name()
            .ok_or_else(|| DocumentError::Io {
                path: upload.display().to_string(),
                reason: "not a file".to_string(),
            })?;
        let path = dir.path().join(file_name);
        std::fs::copy(upload, &path).map_err(|e| io_err(upload, e))?;
        debug!("Staged {} at {}", upload.display(), path.display());

        Ok(StagedUpload { dir, path })
    }
}

/// A staged copy of an upload; the directory is removed on drop.
#[derive(Debug)]
pub struct StagedUpload {
    dir: TempDir,
    path: PathBuf,
}

impl StagedUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged copy now, reporting failures.
    pub fn remove(self) -> std::io::Result<()> {
        self.dir.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_copies_and_cleans_up() {
        let src_dir = tempfile::tempdir().unwrap();
        let upload = src_dir.path().join("notes.txt");
        std::fs::write(&upload, "hello").unwrap();
        let base = tempfile::tempdir().unwrap();

        let staged = UploadStaging::in_dir(base.path()).stage(&upload).unwrap();
        let staged_path = staged.path().to_path_buf();

        assert!(staged_path.starts_with(base.path()));
        assert_eq!(std::fs::read_to_string(&staged_path).unwrap(), "hello");

        staged.remove().unwrap();
        assert!(!staged_path.exists());
        assert!(upload.exists());
    }

    #[test]
    fn test_drop_removes_staging_dir() {
        let src_dir = tempfile::tempdir().unwrap();
        let upload = src_dir.path().join("a.csv");
        std::fs::write(&upload, "x,y").unwrap();

        let staged = UploadStaging::new().stage(&upload).unwrap();
        let staged_dir = staged.path().parent().unwrap().to_path_buf();
        drop(staged);

        assert!(!staged_dir.exists());
    }

    #[test]
    fn test_missing_upload_is_io_error() {
        let base = tempfile::tempdir().unwrap();
        let err = UploadStaging::in_dir(base.path())
            .stage(Path::new("/definitely/not/here.pdf"))
            .unwrap_err();

        assert!(matches!(err, DocumentError::Io { .. }));
        // The failed attempt leaves nothing behind
        assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
    }
}
