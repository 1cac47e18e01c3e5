//! Phases 1 to 4: character records, table sizes, sprites and equipment.
use strum::IntoEnumIterator;

use super::{ContentError, RefKind};
use crate::{
    bitmap::{BitmapOracle, BitmapTable},
    config::FormatLimits,
    error::Subject,
    model::{Adventure, Character, CharacterId, CharacterTable, ContentRefs, is_blank},
    registry::{AnimationState, EquipSlot, SpriteClass, Stat, WeaponSlot},
};

/// Every character of every table, tables in bitmap-assignment order.
fn all_characters(
    adventure: &Adventure,
) -> impl Iterator<Item = (CharacterTable, CharacterId, &Character)> {
    CharacterTable::iter().flat_map(move |table| {
        adventure
            .characters(table)
            .iter()
            .map(move |(id, character)| (table, *id, character))
    })
}

pub(super) fn check_records(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (table, id, character) in all_characters(adventure) {
        let subject = Subject::Character(table, id);
        let len = character.name.len();
        if len > FormatLimits::MAX_CHARACTER_NAME {
            errors.push(ContentError::TooLong {
                subject,
                field: "name",
                len,
                max: FormatLimits::MAX_CHARACTER_NAME,
            });
        }
        for stat in Stat::iter() {
            let value = character.stat(stat);
            let bounds = stat.bounds();
            if !bounds.contains(&value) {
                errors.push(ContentError::StatOutOfBounds {
                    subject,
                    stat,
                    value,
                    min: *bounds.start(),
                    max: *bounds.end(),
                });
            }
        }
    }
}

pub(super) fn check_counts(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for table in CharacterTable::iter() {
        let count = adventure.characters(table).len();
        if count > FormatLimits::MAX_CHARACTERS {
            errors.push(ContentError::TooManyCharacters {
                table,
                count,
                max: FormatLimits::MAX_CHARACTERS,
            });
        }
    }
}

/// Inspects and converts every referenced bitmap once, assigning its ID in `bitmaps`.
pub(super) fn check_sprites(
    adventure: &Adventure,
    oracle: &dyn BitmapOracle,
    bitmaps: &mut BitmapTable,
    errors: &mut Vec<ContentError>,
) {
    for (table, id, character) in all_characters(adventure) {
        let subject = Subject::Character(table, id);
        for state in AnimationState::iter() {
            for (slot, filename) in character.animations.frames(state).iter().enumerate() {
                let field = format!("{state}[{}]", slot + 1);
                if is_blank(filename) {
                    tracing::warn!(%subject, field = %field, "blank animation frame");
                    continue;
                }
                if character.sprite_class.dimensions().is_none() {
                    errors.push(ContentError::SpriteWithoutClass {
                        subject,
                        field,
                        class: character.sprite_class,
                        filename: filename.clone(),
                    });
                    continue;
                }
                check_bitmap(
                    oracle,
                    bitmaps,
                    subject,
                    field,
                    character.sprite_class,
                    filename,
                    errors,
                );
            }
        }
        if let Some(portrait) = character.portrait() {
            check_bitmap(
                oracle,
                bitmaps,
                subject,
                "portrait".into(),
                SpriteClass::Portrait,
                portrait,
                errors,
            );
        }
    }
}

fn check_bitmap(
    oracle: &dyn BitmapOracle,
    bitmaps: &mut BitmapTable,
    subject: Subject,
    field: String,
    class: SpriteClass,
    filename: &str,
    errors: &mut Vec<ContentError>,
) {
    if bitmaps.contains(class, filename) {
        return;
    }
    let Some(expected) = class.dimensions() else {
        return;
    };
    match oracle.inspect(filename) {
        Ok(info) if info.dimensions != expected => {
            errors.push(ContentError::BitmapDimensions {
                subject,
                field,
                filename: filename.to_owned(),
                class,
                expected,
                actual: info.dimensions,
            });
        }
        Ok(info) => match oracle.convert(filename) {
            Ok(packed) => {
                let bytes = packed.len();
                let assigned = bitmaps.assign(class, filename, packed);
                tracing::debug!(
                    %class,
                    filename,
                    id = assigned,
                    bytes,
                    origin = %info.origin,
                    "bitmap assigned"
                );
            }
            Err(source) => errors.push(ContentError::Bitmap {
                subject,
                field,
                source,
            }),
        },
        Err(source) => errors.push(ContentError::Bitmap {
            subject,
            field,
            source,
        }),
    }
}

pub(super) fn check_equipment(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (table, id, character) in all_characters(adventure) {
        let subject = Subject::Character(table, id);
        let equipment = &character.equipment;

        for slot in EquipSlot::iter() {
            let Some(item_id) = equipment.item(slot) else {
                continue;
            };
            let field = slot.to_string();
            if item_id.is_reserved() {
                errors.push(ContentError::ReservedId {
                    subject,
                    field,
                    target: RefKind::Item,
                });
                continue;
            }
            match adventure.items.get(&item_id) {
                None => errors.push(ContentError::Dangling {
                    subject,
                    field,
                    target: RefKind::Item,
                    id: item_id.get().into(),
                }),
                Some(item) if !item.slot.fits(slot) => errors.push(ContentError::SlotMismatch {
                    subject,
                    slot,
                    item: item_id,
                    class: item.slot,
                }),
                Some(_) => {}
            }
        }

        for slot in WeaponSlot::iter() {
            let Some(weapon_id) = equipment.weapon(slot) else {
                continue;
            };
            let field = slot.to_string();
            if weapon_id.is_reserved() {
                errors.push(ContentError::ReservedId {
                    subject,
                    field,
                    target: RefKind::Weapon,
                });
            } else if !adventure.has_weapon(weapon_id) {
                errors.push(ContentError::Dangling {
                    subject,
                    field,
                    target: RefKind::Weapon,
                    id: weapon_id.get().into(),
                });
            }
        }
    }
}
