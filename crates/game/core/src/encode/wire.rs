//! Big-endian record buffer.
use super::EncodingError;
use crate::error::Subject;

/// Growable record with big-endian integer writers.
#[derive(Debug)]
pub(crate) struct RecordBuf {
    subject: Subject,
    bytes: Vec<u8>,
}

impl RecordBuf {
    pub fn new(subject: Subject, capacity: usize) -> Self {
        Self {
            subject,
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    pub fn u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    pub fn bytes(&mut self, value: &[u8]) {
        self.bytes.extend_from_slice(value);
    }

    /// Writes `value` zero padded to exactly `width` bytes.
    pub fn padded(
        &mut self,
        field: &'static str,
        value: &[u8],
        width: usize,
    ) -> Result<(), EncodingError> {
        if value.len() > width {
            return Err(EncodingError::FieldTooWide {
                subject: self.subject,
                field,
                len: value.len(),
                max: width,
            });
        }
        self.bytes.extend_from_slice(value);
        self.bytes.resize(self.bytes.len() + width - value.len(), 0);
        Ok(())
    }

    /// Writes a one-byte count prefix followed by `items`.
    pub fn counted<T>(
        &mut self,
        field: &'static str,
        items: &[T],
        mut write: impl FnMut(&mut Self, &T) -> Result<(), EncodingError>,
    ) -> Result<(), EncodingError> {
        let count = u8::try_from(items.len()).map_err(|_| EncodingError::FieldTooWide {
            subject: self.subject,
            field,
            len: items.len(),
            max: u8::MAX.into(),
        })?;
        self.u8(count);
        for item in items {
            write(self, item)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationId;

    #[test]
    fn integers_are_big_endian() {
        let mut buf = RecordBuf::new(Subject::Location(LocationId(1)), 8);
        buf.u16(0x0102);
        buf.u32(0x0304_0506);
        assert_eq!(buf.finish(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn padding_fills_to_width() {
        let mut buf = RecordBuf::new(Subject::Location(LocationId(1)), 8);
        buf.padded("name", b"ab", 4).unwrap();
        assert_eq!(buf.finish(), b"ab\0\0");

        let mut buf = RecordBuf::new(Subject::Location(LocationId(1)), 8);
        let err = buf.padded("name", b"abcde", 4).unwrap_err();
        assert!(matches!(err, EncodingError::FieldTooWide { len: 5, max: 4, .. }));
    }

    #[test]
    fn counted_list_rejects_256_entries() {
        let mut buf = RecordBuf::new(Subject::Location(LocationId(1)), 300);
        let items = vec![0u8; 256];
        let err = buf
            .counted("spawn.monsters", &items, |buf, v| {
                buf.u8(*v);
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, EncodingError::FieldTooWide { len: 256, max: 255, .. }));
    }
}
