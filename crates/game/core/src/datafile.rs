//! Record blobs with their parallel offset/size index.
use crate::{config::FormatLimits, encode::EncodingError};

/// Index entry: 2-byte record size then 4-byte offset, both big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub size: u16,
    pub offset: u32,
}

impl IndexEntry {
    pub fn to_bytes(self) -> [u8; FormatLimits::INDEX_ENTRY_BYTES] {
        let mut out = [0u8; FormatLimits::INDEX_ENTRY_BYTES];
        out[..2].copy_from_slice(&self.size.to_be_bytes());
        out[2..].copy_from_slice(&self.offset.to_be_bytes());
        out
    }

    /// Parses a whole index file; a trailing partial entry is ignored.
    pub fn parse_all(bytes: &[u8]) -> Vec<Self> {
        bytes
            .chunks_exact(FormatLimits::INDEX_ENTRY_BYTES)
            .map(|chunk| Self {
                size: u16::from_be_bytes([chunk[0], chunk[1]]),
                offset: u32::from_be_bytes([chunk[2], chunk[3], chunk[4], chunk[5]]),
            })
            .collect()
    }
}

/// A `.dat` blob of concatenated records and its `.idx` companion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedDatafile {
    stem: &'static str,
    data: Vec<u8>,
    entries: Vec<IndexEntry>,
}

impl IndexedDatafile {
    pub fn new(stem: &'static str) -> Self {
        Self {
            stem,
            data: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Appends a record, recording its size and offset.
    pub fn push(&mut self, record: &[u8]) -> Result<IndexEntry, EncodingError> {
        let size = u16::try_from(record.len()).map_err(|_| EncodingError::RecordTooLarge {
            datafile: self.data_name(),
            index: self.entries.len(),
            len: record.len(),
        })?;
        let offset = u32::try_from(self.data.len()).map_err(|_| EncodingError::OffsetOverflow {
            datafile: self.data_name(),
            offset: self.data.len(),
        })?;
        let entry = IndexEntry { size, offset };
        self.data.extend_from_slice(record);
        self.entries.push(entry);
        Ok(entry)
    }

    pub fn stem(&self) -> &'static str {
        self.stem
    }

    pub fn data_name(&self) -> String {
        format!("{}.dat", self.stem)
    }

    pub fn index_name(&self) -> String {
        format!("{}.idx", self.stem)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn index(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|entry| entry.to_bytes())
            .collect()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn record(&self, index: usize) -> Option<&[u8]> {
        let entry = self.entries.get(index)?;
        let start = entry.offset as usize;
        self.data.get(start..start + usize::from(entry.size))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_story_index() {
        let mut story = IndexedDatafile::new("story");
        story.push(b"Hello").unwrap();
        assert_eq!(story.data(), b"Hello");
        assert_eq!(hex::encode(story.index()), "000500000000");
        assert_eq!(story.index_name(), "story.idx");
    }

    #[test]
    fn offsets_accumulate() {
        let mut file = IndexedDatafile::new("world");
        file.push(&[1; 3]).unwrap();
        file.push(&[]).unwrap();
        let entry = file.push(&[2; 4]).unwrap();
        assert_eq!(entry, IndexEntry { size: 4, offset: 3 });
        assert_eq!(file.record(2), Some(&[2u8; 4][..]));
        assert_eq!(IndexEntry::parse_all(&file.index()), file.entries());
    }

    #[test]
    fn oversized_record_is_rejected() {
        let mut file = IndexedDatafile::new("world");
        let err = file.push(&vec![0; 70_000]).unwrap_err();
        assert!(matches!(err, EncodingError::RecordTooLarge { len: 70_000, .. }));
        assert!(file.is_empty());
    }
}
