use strum::IntoEnumIterator;

use super::{EncodingError, wire::RecordBuf};
use crate::{
    bitmap::BitmapTable,
    config::FormatLimits,
    error::Subject,
    model::{Character, CharacterId, CharacterTable, ItemId, WeaponId},
    registry::{AnimationState, EquipSlot, RegistryKey, SpriteClass, WeaponSlot},
};

/// Encodes one fixed-size character record.
pub fn encode_character(
    table: CharacterTable,
    id: CharacterId,
    character: &Character,
    bitmaps: &BitmapTable,
) -> Result<Vec<u8>, EncodingError> {
    let mut buf = RecordBuf::new(
        Subject::Character(table, id),
        FormatLimits::CHARACTER_RECORD_BYTES,
    );

    buf.u16(id.get().into());
    buf.padded(
        "name",
        character.name.as_bytes(),
        FormatLimits::MAX_CHARACTER_NAME,
    )?;
    buf.u8(character.kind.code());
    buf.u8(character.sprite_class.code());

    for state in AnimationState::iter() {
        let frames = character.animations.frames(state);
        for slot in 0..FormatLimits::ANIMATION_FRAMES {
            let id = match frames.get(slot) {
                Some(filename) => bitmap_id(&buf, bitmaps, character.sprite_class, filename)?,
                None => 0,
            };
            buf.u16(id);
        }
    }
    let portrait = match character.portrait() {
        Some(filename) => bitmap_id(&buf, bitmaps, SpriteClass::Portrait, filename)?,
        None => 0,
    };
    buf.u16(portrait);

    buf.u8(character.class.code());
    buf.u8(character.level);
    buf.u16(character.profile);
    buf.bytes(&character.attributes.to_bytes());
    buf.u16(character.hp);
    buf.u32(character.status);

    for slot in EquipSlot::iter() {
        buf.u16(ItemId::wire(character.equipment.item(slot)).into());
    }
    for slot in WeaponSlot::iter() {
        buf.u16(WeaponId::wire(character.equipment.weapon(slot)).into());
    }
    buf.u8(character.formation);
    buf.padded("spells", &character.spells, FormatLimits::MAX_SPELLS)?;

    debug_assert_eq!(buf.len(), FormatLimits::CHARACTER_RECORD_BYTES);
    Ok(buf.finish())
}

fn bitmap_id(
    buf: &RecordBuf,
    bitmaps: &BitmapTable,
    class: SpriteClass,
    filename: &str,
) -> Result<u16, EncodingError> {
    bitmaps
        .id(class, filename)
        .ok_or_else(|| EncodingError::UnassignedBitmap {
            subject: buf.subject(),
            class,
            filename: filename.to_owned(),
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        model::{Animations, Attributes, Equipment, bounded, is_blank},
        registry::{CharacterClass, CharacterType},
    };

    pub(crate) fn wolf() -> Character {
        Character {
            name: "Wolf".into(),
            kind: CharacterType::Monster,
            sprite_class: SpriteClass::Normal,
            animations: Animations {
                resting: bounded(["wolf1".to_owned(), "wolf2".to_owned()]).unwrap(),
                attack: bounded(["wolf3".to_owned()]).unwrap(),
                ..Animations::default()
            },
            portrait: None,
            class: CharacterClass::BeastWild,
            level: 2,
            profile: 0x0102,
            attributes: Attributes {
                str: 8,
                dex: 12,
                con: 10,
                wis: 3,
                int: 2,
                chr: 4,
            },
            hp: 20,
            status: 0x0A0B_0C0D,
            equipment: Equipment {
                body: Some(ItemId(3)),
                weapon_l: Some(WeaponId(1)),
                ..Equipment::default()
            },
            formation: 1,
            spells: bounded([7u8]).unwrap(),
        }
    }

    fn table_for(character: &Character) -> BitmapTable {
        let mut table = BitmapTable::new();
        for state in AnimationState::iter() {
            for frame in character.animations.frames(state) {
                if !is_blank(frame) {
                    table.assign(character.sprite_class, frame, Vec::new());
                }
            }
        }
        if let Some(portrait) = character.portrait() {
            table.assign(SpriteClass::Portrait, portrait, Vec::new());
        }
        table
    }

    #[test]
    fn record_is_fixed_size() {
        let wolf = wolf();
        let bytes = encode_character(CharacterTable::Monster, CharacterId(1), &wolf, &table_for(&wolf))
            .unwrap();
        assert_eq!(bytes.len(), 96);

        let mut bare = wolf.clone();
        bare.animations = Animations::default();
        bare.spells.clear();
        let bytes =
            encode_character(CharacterTable::Monster, CharacterId(1), &bare, &BitmapTable::new())
                .unwrap();
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn field_layout() {
        let wolf = wolf();
        let bytes = encode_character(CharacterTable::Monster, CharacterId(9), &wolf, &table_for(&wolf))
            .unwrap();

        assert_eq!(&bytes[..2], &[0x00, 0x09]);
        assert_eq!(&bytes[2..6], b"Wolf");
        assert_eq!(bytes[20], 0x00); // monster
        assert_eq!(bytes[21], 0x01); // normal sprite class
        // resting frames 1, 2 then padding; attack frame 3.
        assert_eq!(&bytes[22..30], &[0, 1, 0, 2, 0, 0, 0, 0]);
        assert_eq!(&bytes[30..32], &[0, 3]);
        assert_eq!(&bytes[62..64], &[0, 0]); // portrait
        assert_eq!(bytes[64], 0x20); // BEAST_WILD
        assert_eq!(bytes[65], 2);
        assert_eq!(&bytes[66..68], &[0x01, 0x02]);
        assert_eq!(&bytes[68..74], &[8, 12, 10, 3, 2, 4]);
        assert_eq!(&bytes[74..76], &[0, 20]);
        assert_eq!(&bytes[76..80], &[0x0A, 0x0B, 0x0C, 0x0D]);
        // head, body, option, weapon_r, weapon_l
        assert_eq!(&bytes[80..90], &[0, 0, 0, 3, 0, 0, 0, 0, 0, 1]);
        assert_eq!(bytes[90], 1);
        assert_eq!(&bytes[91..96], &[7, 0, 0, 0, 0]);
    }

    #[test]
    fn blank_frames_encode_as_zero() {
        let mut wolf = wolf();
        wolf.animations.magic = bounded(["".to_owned(), "wolf1".to_owned()]).unwrap();
        let bytes = encode_character(CharacterTable::Monster, CharacterId(1), &wolf, &table_for(&wolf))
            .unwrap();
        assert_eq!(&bytes[38..42], &[0, 0, 0, 1]);
    }

    #[test]
    fn unassigned_bitmap_is_an_encoding_error() {
        let wolf = wolf();
        let err = encode_character(CharacterTable::Monster, CharacterId(1), &wolf, &BitmapTable::new())
            .unwrap_err();
        assert!(matches!(err, EncodingError::UnassignedBitmap { ref filename, .. } if filename == "wolf1"));
    }
}
