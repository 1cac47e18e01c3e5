//! Phases 5 to 10: the world map and everything it references.
use std::collections::BTreeMap;

use super::{ContentError, RefKind};
use crate::{
    config::FormatLimits,
    encode::{condition::check_condition_list, first_unprintable},
    error::Subject,
    model::{
        Adventure, CharacterId, ContentRefs, Direction, LocationId, LootEntry, TextId,
    },
};

pub(super) fn check_exits(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (id, location) in &adventure.world {
        let subject = Subject::Location(*id);
        let len = location.name.len();
        if len > FormatLimits::MAX_LOCATION_NAME {
            errors.push(ContentError::TooLong {
                subject,
                field: "name",
                len,
                max: FormatLimits::MAX_LOCATION_NAME,
            });
        }
        for direction in Direction::ALL {
            let Some(destination) = location.exits.get(direction).destination else {
                continue;
            };
            let field = direction.to_string();
            if destination.is_reserved() {
                errors.push(ContentError::ReservedId {
                    subject,
                    field,
                    target: RefKind::Location,
                });
            } else if !adventure.has_location(destination) {
                errors.push(ContentError::Dangling {
                    subject,
                    field,
                    target: RefKind::Location,
                    id: destination.get(),
                });
            }
        }
    }
}

pub(super) fn check_text(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (id, text) in &adventure.story {
        if let Some((offset, character)) = first_unprintable(text) {
            errors.push(ContentError::Unprintable {
                id: *id,
                position: text[..offset].chars().count() + 1,
                character,
            });
        }
        if text.len() >= FormatLimits::MAX_STORY_TEXT_SIZE {
            errors.push(ContentError::TextTooLong {
                id: *id,
                len: text.len(),
                max: FormatLimits::MAX_STORY_TEXT_SIZE,
            });
        }
    }

    for (id, location) in &adventure.world {
        let subject = Subject::Location(*id);
        let mut refs: Vec<(String, Option<TextId>)> = vec![("text".into(), location.text)];
        refs.extend(
            Direction::ALL
                .iter()
                .map(|&dir| (format!("{dir}.text"), location.exits.get(dir).text)),
        );
        refs.extend(
            location
                .hooks
                .iter()
                .map(|(field, text)| (field.to_owned(), text)),
        );
        refs.extend(
            location
                .npc_slots()
                .map(|(slot, npc)| (format!("npc{slot}.text"), npc.text)),
        );

        for (field, text) in refs {
            let Some(text) = text else {
                continue;
            };
            if text.is_reserved() {
                errors.push(ContentError::ReservedId {
                    subject,
                    field,
                    target: RefKind::Text,
                });
            } else if !adventure.has_text(text) {
                errors.push(ContentError::Dangling {
                    subject,
                    field,
                    target: RefKind::Text,
                    id: text.get(),
                });
            }
        }
    }
}

fn check_chance(
    subject: Subject,
    field: &'static str,
    chance: Option<u8>,
    errors: &mut Vec<ContentError>,
) {
    if let Some(chance) = chance.filter(|c| *c > 100) {
        errors.push(ContentError::ChanceOutOfRange {
            subject,
            field,
            chance,
        });
    }
}

pub(super) fn check_spawns(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (id, location) in &adventure.world {
        let subject = Subject::Location(*id);
        for (chance_field, monsters_field, table) in [
            ("spawn.chance", "spawn.monsters", &location.spawn),
            ("respawn.chance", "respawn.monsters", &location.respawn),
        ] {
            check_chance(subject, chance_field, table.chance, errors);
            for monster in &table.monsters {
                if !adventure.has_monster(*monster) {
                    errors.push(ContentError::Dangling {
                        subject,
                        field: monsters_field.into(),
                        target: RefKind::Monster,
                        id: monster.get().into(),
                    });
                }
            }
        }
    }
}

pub(super) fn check_conditions(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (id, location) in &adventure.world {
        for (field, list) in location.condition_lists() {
            if let Err(source) = check_condition_list(list, adventure) {
                errors.push(ContentError::Condition {
                    subject: Subject::Location(*id),
                    field,
                    source,
                });
            }
        }
    }
}

pub(super) fn check_loot(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    for (id, location) in &adventure.world {
        let subject = Subject::Location(*id);
        check_chance(subject, "loot.chance", location.loot.chance, errors);
        for token in &location.loot.entries {
            let entry = match token.parse() {
                Ok(entry) => entry,
                Err(source) => {
                    errors.push(ContentError::Loot {
                        subject,
                        token: token.clone(),
                        source,
                    });
                    continue;
                }
            };
            let (known, target, raw) = match entry {
                LootEntry::Weapon(weapon) => {
                    (adventure.has_weapon(weapon), RefKind::Weapon, weapon.get())
                }
                LootEntry::Item(item) => (adventure.has_item(item), RefKind::Item, item.get()),
            };
            if !known {
                errors.push(ContentError::Dangling {
                    subject,
                    field: format!("loot.entries {token}"),
                    target,
                    id: raw.into(),
                });
            }
        }
    }
}

pub(super) fn check_npcs(adventure: &Adventure, errors: &mut Vec<ContentError>) {
    let max = FormatLimits::MAX_NPC_DIALOGUES;
    let mut seen: BTreeMap<(CharacterId, u8), LocationId> = BTreeMap::new();

    for (id, location) in &adventure.world {
        let subject = Subject::Location(*id);
        for (slot, npc) in location.npc_slots() {
            let field = format!("npc{slot}");
            if npc.npc.is_reserved() {
                errors.push(ContentError::ReservedId {
                    subject,
                    field,
                    target: RefKind::Npc,
                });
                continue;
            }
            if !adventure.has_npc(npc.npc) {
                errors.push(ContentError::Dangling {
                    subject,
                    field,
                    target: RefKind::Npc,
                    id: npc.npc.get().into(),
                });
                continue;
            }
            if !(1..=max).contains(&npc.dialogue) {
                errors.push(ContentError::DialogueOutOfRange {
                    subject,
                    slot,
                    dialogue: npc.dialogue,
                    max,
                });
                continue;
            }
            if let Some(first) = seen.insert((npc.npc, npc.dialogue), *id) {
                errors.push(ContentError::DuplicateDialogue {
                    npc: npc.npc,
                    dialogue: npc.dialogue,
                    first,
                    second: *id,
                });
            }
        }
    }
    tracing::debug!(sequences = seen.len(), "npc dialogue sequences");
}
