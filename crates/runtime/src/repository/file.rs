//! Directory-backed sink.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use super::{DatafileSink, RepositoryError, Result};
use crate::artifact::Artifact;

/// Writes artifacts into one directory.
///
/// Each file is written to a `.<name>*.tmp` file in the same directory and
/// then renamed over the final name, so the engine either sees the previous
/// file or the new one. The temporary file is removed on any failure.
pub struct FileDatafileSink {
    base_dir: PathBuf,
}

impl FileDatafileSink {
    /// Opens `base_dir`, creating it and any missing parents.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(|source| RepositoryError::CreateDir {
            path: base_dir.clone(),
            source,
        })?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn artifact_path(&self, name: &str) -> Result<PathBuf> {
        let plain = Path::new(name)
            .file_name()
            .is_some_and(|file| file == name);
        if !plain {
            return Err(RepositoryError::InvalidName(name.to_owned()));
        }
        Ok(self.base_dir.join(name))
    }
}

impl DatafileSink for FileDatafileSink {
    fn write(&self, artifact: &Artifact) -> Result<()> {
        let path = self.artifact_path(&artifact.name)?;
        let write_error = |source| RepositoryError::Write {
            path: path.clone(),
            source,
        };

        let mut temp = tempfile::Builder::new()
            .prefix(&format!(".{}", artifact.name))
            .suffix(".tmp")
            .tempfile_in(&self.base_dir)
            .map_err(write_error)?;
        temp.write_all(&artifact.bytes).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&path)
            .map_err(|err| RepositoryError::Rename {
                path: path.clone(),
                source: err.error,
            })?;

        tracing::debug!(
            file = %path.display(),
            bytes = artifact.len(),
            "wrote datafile"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.base_dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_directory_and_replaces_files() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("out").join("ql");
        let sink = FileDatafileSink::new(&dir).unwrap();
        assert!(dir.is_dir());

        sink.write(&Artifact::new("story.dat", b"old".to_vec(), 1))
            .unwrap();
        sink.write(&Artifact::new("story.dat", b"Hello".to_vec(), 1))
            .unwrap();

        assert_eq!(fs::read(dir.join("story.dat")).unwrap(), b"Hello");
        let names: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["story.dat"]);
    }

    #[test]
    fn failed_rename_leaves_no_temporary_file() {
        let temp = tempfile::tempdir().unwrap();
        let sink = FileDatafileSink::new(temp.path()).unwrap();
        // A non-empty directory cannot be replaced by a file.
        fs::create_dir_all(temp.path().join("story.dat").join("keep")).unwrap();

        let err = sink
            .write(&Artifact::new("story.dat", b"Hello".to_vec(), 1))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Rename { ref path, .. } if path.ends_with("story.dat")));

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["story.dat"]);
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("ql");
        let sink = FileDatafileSink::new(&dir).unwrap();
        fs::remove_dir(&dir).unwrap();

        let err = sink
            .write(&Artifact::new("world.dat", vec![1, 2, 3], 1))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Write { ref path, .. } if path == &dir.join("world.dat")));
        assert!(!dir.exists());
    }

    #[test]
    fn rejects_names_with_directories() {
        let temp = tempfile::tempdir().unwrap();
        let sink = FileDatafileSink::new(temp.path()).unwrap();
        let err = sink
            .write(&Artifact::new("../escape.dat", Vec::new(), 0))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidName(name) if name == "../escape.dat"));
    }
}
