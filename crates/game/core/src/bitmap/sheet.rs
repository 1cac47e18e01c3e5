use strum::IntoEnumIterator;

use super::BitmapTable;
use crate::{encode::EncodingError, registry::SpriteClass};

/// Concatenated bitmaps of one sprite class, in ascending ID order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub class: SpriteClass,
    pub datafile: &'static str,
    /// Packed size of every bitmap in the sheet; 0 when the sheet is empty.
    pub record_len: usize,
    pub count: usize,
    pub bytes: Vec<u8>,
}

/// Builds one sheet per sprite class from the bitmaps packed during validation.
///
/// The sheets carry no per-record length, so every bitmap of a class must
/// pack to the same number of bytes.
pub fn assemble_sprite_sheets(table: &BitmapTable) -> Result<Vec<SpriteSheet>, EncodingError> {
    let mut sheets = Vec::new();
    for class in SpriteClass::iter() {
        let Some(datafile) = class.datafile() else {
            continue;
        };
        let mut sheet = SpriteSheet {
            class,
            datafile,
            record_len: 0,
            count: 0,
            bytes: Vec::new(),
        };
        for (id, filename, packed) in table.class(class).into_iter().flat_map(|t| t.bitmaps()) {
            if sheet.count == 0 {
                sheet.record_len = packed.len();
            } else if packed.len() != sheet.record_len {
                return Err(EncodingError::SpriteSizeMismatch {
                    class,
                    filename: filename.to_owned(),
                    expected: sheet.record_len,
                    actual: packed.len(),
                });
            }
            tracing::trace!(%class, id, filename, bytes = packed.len(), "packed bitmap");
            sheet.bytes.extend_from_slice(packed);
            sheet.count += 1;
        }
        tracing::debug!(
            %class,
            datafile,
            bitmaps = sheet.count,
            bytes = sheet.bytes.len(),
            "assembled sprite sheet"
        );
        sheets.push(sheet);
    }
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(len: usize, fill: u8) -> Vec<u8> {
        vec![fill; len]
    }

    #[test]
    fn sheets_follow_id_order() {
        let mut table = BitmapTable::new();
        for (name, fill) in [("wolf2", 2), ("wolf1", 1), ("wolf2", 7)] {
            table.assign(SpriteClass::Normal, name, packed(256, fill));
        }
        table.assign(SpriteClass::Large, "dragon", packed(96 * 96 / 4, 3));
        table.assign(SpriteClass::Portrait, "elder", packed(256, 4));

        let sheets = assemble_sprite_sheets(&table).unwrap();
        let files: Vec<_> = sheets.iter().map(|s| s.datafile).collect();
        assert_eq!(files, ["sprite.dat", "boss.dat", "portrait.dat"]);

        let sprites = &sheets[0];
        assert_eq!(sprites.count, 2);
        assert_eq!(sprites.record_len, 256);
        assert_eq!(sprites.bytes.len(), 512);
        assert!(sprites.bytes[..256].iter().all(|b| *b == 2));
        assert!(sprites.bytes[256..].iter().all(|b| *b == 1));
        assert_eq!(sheets[1].record_len, 96 * 96 / 4);
        assert_eq!(sheets[2].bytes, packed(256, 4));
    }

    #[test]
    fn empty_class_yields_empty_sheet() {
        let sheets = assemble_sprite_sheets(&BitmapTable::new()).unwrap();
        assert_eq!(sheets.len(), 3);
        assert!(sheets.iter().all(|s| s.bytes.is_empty() && s.count == 0));
    }

    #[test]
    fn mismatched_sizes_abort() {
        let mut table = BitmapTable::new();
        table.assign(SpriteClass::Normal, "small", packed(256, 0));
        table.assign(SpriteClass::Normal, "odd", packed(64, 0));

        let err = assemble_sprite_sheets(&table).unwrap_err();
        assert_eq!(
            err,
            EncodingError::SpriteSizeMismatch {
                class: SpriteClass::Normal,
                filename: "odd".into(),
                expected: 256,
                actual: 64,
            }
        );
    }
}
