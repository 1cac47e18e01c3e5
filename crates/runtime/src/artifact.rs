//! Finished output files, held in memory until the whole set is ready.
use adventure_core::{IndexedDatafile, SpriteSheet};
use sha2::{Digest, Sha256};

/// One output file: name, contents and the record count it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub bytes: Vec<u8>,
    pub records: usize,
}

impl Artifact {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, records: usize) -> Self {
        Self {
            name: name.into(),
            bytes,
            records,
        }
    }

    /// The `.dat`/`.idx` pair of an indexed datafile.
    pub fn pair(file: &IndexedDatafile) -> [Self; 2] {
        [
            Self::new(file.data_name(), file.data().to_vec(), file.len()),
            Self::new(file.index_name(), file.index(), file.len()),
        ]
    }

    pub fn sheet(sheet: &SpriteSheet) -> Self {
        Self::new(sheet.datafile, sheet.bytes.clone(), sheet.count)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex SHA-256 of the contents.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }
}

/// What a written artifact looked like, for the run summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactReport {
    pub name: String,
    pub bytes: usize,
    pub records: usize,
    pub sha256: String,
}

impl From<&Artifact> for ArtifactReport {
    fn from(artifact: &Artifact) -> Self {
        Self {
            name: artifact.name.clone(),
            bytes: artifact.len(),
            records: artifact.records,
            sha256: artifact.digest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_splits_data_and_index() {
        let mut story = IndexedDatafile::new("story");
        story.push(b"Hello").unwrap();

        let [data, index] = Artifact::pair(&story);
        assert_eq!(data.name, "story.dat");
        assert_eq!(data.bytes, b"Hello");
        assert_eq!(index.name, "story.idx");
        assert_eq!(hex::encode(&index.bytes), "000500000000");
        assert_eq!(index.records, 1);
    }

    #[test]
    fn digest_is_sha256_hex() {
        let empty = Artifact::new("boss.dat", Vec::new(), 0);
        assert_eq!(
            empty.digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        let report = ArtifactReport::from(&empty);
        assert_eq!(report.bytes, 0);
        assert_eq!(report.sha256, empty.digest());
    }
}
