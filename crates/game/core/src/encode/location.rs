use super::{EncodingError, condition::encode_condition_list, wire::RecordBuf};
use crate::{
    config::FormatLimits,
    error::Subject,
    model::{
        CharacterId, ConditionList, ContentRefs, Direction, Location, LocationId, LootToken, TextId,
    },
    registry::{EvalRule, RegistryKey},
};

/// Encodes one location record.
///
/// Layout: id, text, 32-byte name, four exits (N/S/E/W) each with
/// destination, text and condition list, spawn then respawn (chance,
/// counted monster IDs, condition list), loot (chance, counted
/// letter+ID pairs, condition list), four narrative hooks, then three NPC
/// slots (NPC, condition list, dialogue, text). Absent slots encode as zeros
/// with an empty condition list.
pub fn encode_location(
    id: LocationId,
    location: &Location,
    refs: &dyn ContentRefs,
) -> Result<Vec<u8>, EncodingError> {
    let mut buf = RecordBuf::new(Subject::Location(id), 128);

    buf.u16(id.get());
    buf.u16(TextId::wire(location.text));
    buf.padded(
        "name",
        location.name.as_bytes(),
        FormatLimits::MAX_LOCATION_NAME,
    )?;

    for direction in Direction::ALL {
        let exit = location.exits.get(direction);
        buf.u16(LocationId::wire(exit.destination));
        buf.u16(TextId::wire(exit.text));
        conditions(&mut buf, refs, format!("{direction}.require"), &exit.require)?;
    }

    for (monsters, require, table) in [
        ("spawn.monsters", "spawn.require", &location.spawn),
        ("respawn.monsters", "respawn.require", &location.respawn),
    ] {
        buf.u8(table.chance.unwrap_or(0));
        buf.counted(monsters, &table.monsters, |buf, monster: &CharacterId| {
            buf.u8(monster.get());
            Ok(())
        })?;
        conditions(&mut buf, refs, require.into(), &table.require)?;
    }

    buf.u8(location.loot.chance.unwrap_or(0));
    buf.counted("loot.entries", &location.loot.entries, |buf, token: &LootToken| {
        let entry = token.parse().map_err(|source| EncodingError::Loot {
            subject: buf.subject(),
            token: token.clone(),
            source,
        })?;
        buf.bytes(&entry.encode());
        Ok(())
    })?;
    conditions(&mut buf, refs, "loot.require".into(), &location.loot.require)?;

    for (_, hook) in location.hooks.iter() {
        buf.u16(TextId::wire(hook));
    }

    for (index, slot) in location.npcs.iter().enumerate() {
        match slot {
            Some(npc) => {
                buf.u8(npc.npc.get());
                conditions(&mut buf, refs, format!("npc{}.require", index + 1), &npc.require)?;
                buf.u8(npc.dialogue);
                buf.u16(TextId::wire(npc.text));
            }
            None => {
                buf.u8(CharacterId::NONE);
                buf.bytes(&[EvalRule::Empty.code(), 0]);
                buf.u8(0);
                buf.u16(TextId::NONE);
            }
        }
    }

    tracing::trace!(location = id.get(), bytes = buf.len(), "encoded location");
    Ok(buf.finish())
}

fn conditions(
    buf: &mut RecordBuf,
    refs: &dyn ContentRefs,
    field: String,
    list: &ConditionList,
) -> Result<(), EncodingError> {
    let bytes = encode_condition_list(list, refs).map_err(|source| EncodingError::Condition {
        subject: buf.subject(),
        field,
        source,
    })?;
    buf.bytes(&bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clause,
        encode::condition::{Condition, decode_condition_list, encoded_list_len},
        model::{
            Adventure, CapacityExceeded, Exit, Item, ItemId, LootEntry, LootList, MonsterList,
            NpcSlot, Weapon, WeaponId, bounded,
        },
        registry::{MonsterRole, SlotClass},
    };

    fn world() -> Adventure {
        let mut adventure = Adventure::default();
        for id in 1..=3 {
            adventure
                .world
                .insert(LocationId(id), Location::named(format!("Room {id}")));
        }
        adventure.items.insert(
            ItemId(1),
            Item {
                name: "Potion".into(),
                slot: SlotClass::None,
            },
        );
        adventure.weapons.insert(
            WeaponId(1),
            Weapon {
                name: "Stick".into(),
            },
        );
        adventure
    }

    fn rich_location() -> Location {
        let mut location = Location::named("Leafy Glade");
        location.text = Some(TextId(1));
        location.exits.north = Exit {
            destination: Some(LocationId(2)),
            text: Some(TextId(4)),
            require: ConditionList::new(
                EvalRule::And,
                vec![clause!("COND_MONSTER_DEFEAT_TYPE", "MONSTER_TYPE_PRIMARY", 3, 1)],
            ).unwrap(),
        };
        location.exits.east = Exit::to(LocationId(3));
        location.spawn.chance = Some(50);
        location.spawn.monsters = bounded([CharacterId(1), CharacterId(2)]).unwrap();
        location.respawn.monsters = bounded([CharacterId(2)]).unwrap();
        location.loot.chance = Some(10);
        location.loot.entries = bounded([LootToken::from("w1"), LootToken::from("i1")]).unwrap();
        location.loot.require = ConditionList::new(EvalRule::Or, vec![clause!("COND_NO_MONSTERS")]).unwrap();
        location.hooks.after_spawn = Some(TextId(9));
        location.npcs[1] = Some(NpcSlot {
            npc: CharacterId(1),
            require: ConditionList::default(),
            dialogue: 2,
            text: Some(TextId(7)),
        });
        location
    }

    /// Expected record length, summed from the authored content.
    fn expected_len(location: &Location) -> usize {
        let fixed = 2 + 2 + 32 // id, text, name
            + 4 * (2 + 2) // exit destination and text
            + 2 * (1 + 1) // spawn and respawn chance and count
            + (1 + 1) // loot chance and count
            + 4 * 2 // hooks
            + 3 * (1 + 1 + 2); // npc, dialogue, text
        let lists = location.spawn.monsters.len()
            + location.respawn.monsters.len()
            + 2 * location.loot.entries.len();
        let conditions: usize = Direction::ALL
            .iter()
            .map(|d| encoded_list_len(&location.exits.get(*d).require))
            .chain([
                encoded_list_len(&location.spawn.require),
                encoded_list_len(&location.respawn.require),
                encoded_list_len(&location.loot.require),
            ])
            .chain(location.npcs.iter().map(|slot| {
                slot.as_ref()
                    .map_or(2, |npc| encoded_list_len(&npc.require))
            }))
            .sum();
        fixed + lists + conditions
    }

    #[test]
    fn length_matches_authored_content() {
        let adventure = world();
        for location in [Location::named("Empty"), rich_location()] {
            let bytes = encode_location(LocationId(1), &location, &adventure).unwrap();
            assert_eq!(bytes.len(), expected_len(&location));
        }
    }

    #[test]
    fn minimal_location_layout() {
        let adventure = world();
        let bytes = encode_location(LocationId(1), &Location::named("Hall"), &adventure).unwrap();
        assert_eq!(&bytes[..4], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(&bytes[4..8], b"Hall");
        assert!(bytes[8..36].iter().all(|b| *b == 0));
        // North exit: no destination, no text, empty condition list.
        assert_eq!(&bytes[36..42], &[0, 0, 0, 0, 0x00, 0x00]);
    }

    #[test]
    fn exit_condition_round_trips() {
        let adventure = world();
        let location = rich_location();
        let bytes = encode_location(LocationId(1), &location, &adventure).unwrap();

        let north = &bytes[36..];
        assert_eq!(&north[..4], &[0x00, 0x02, 0x00, 0x04]);
        let (rule, conditions, used) = decode_condition_list(&north[4..]).unwrap();
        assert_eq!(rule, EvalRule::And);
        assert_eq!(used, 7);
        assert_eq!(
            conditions,
            [Condition::MonsterDefeat {
                role: MonsterRole::Primary,
                location: LocationId(3),
                count: 1,
            }]
        );
        assert_eq!(
            Condition::parse(&location.exits.north.require.clauses[0]).unwrap(),
            conditions[0]
        );
    }

    #[test]
    fn loot_entries_are_letter_and_id() {
        let adventure = world();
        let mut location = Location::named("Cache");
        location.loot.entries = bounded([LootToken::from("i1")]).unwrap();
        let bytes = encode_location(LocationId(1), &location, &adventure).unwrap();
        let loot = 36 + 4 * 6 + 2 * (1 + 1 + 2);
        assert_eq!(&bytes[loot..loot + 4], &[0, 1, b'i', 1]);
        assert_eq!(LootEntry::Item(ItemId(1)).encode(), [b'i', 1]);
    }

    #[test]
    fn full_monster_list_encodes() {
        let adventure = world();
        let mut location = Location::named("Nest");
        location.spawn.monsters = bounded((0..255).map(|_| CharacterId(1))).unwrap();
        let bytes = encode_location(LocationId(1), &location, &adventure).unwrap();
        assert_eq!(bytes.len(), expected_len(&location));
        assert_eq!(bytes[36 + 4 * 6 + 1], 255);
    }

    #[test]
    fn oversized_name_is_rejected() {
        let adventure = world();
        let location = Location::named("x".repeat(33));
        let err = encode_location(LocationId(5), &location, &adventure).unwrap_err();
        assert_eq!(
            err,
            EncodingError::FieldTooWide {
                subject: Subject::Location(LocationId(5)),
                field: "name",
                len: 33,
                max: 32,
            }
        );
    }

    #[test]
    fn dangling_condition_reference_names_field() {
        let adventure = world();
        let mut location = Location::named("Gate");
        location.exits.west.require = ConditionList::new(
            EvalRule::And,
            vec![clause!("COND_MAP_VISIT_TYPE", "COND_MAP_VISIT_TYPE", 99, 1)],
        ).unwrap();
        let err = encode_location(LocationId(1), &location, &adventure).unwrap_err();
        assert!(matches!(err, EncodingError::Condition { ref field, .. } if field == "west.require"));
    }

    #[test]
    fn full_lists_encode_and_longer_lists_are_refused() {
        let adventure = world();
        let mut location = Location::named("Crowded");
        location.spawn.monsters = bounded([CharacterId(1); 255]).unwrap();
        location.loot.entries = bounded(vec![LootToken::from("w1"); 255]).unwrap();

        let bytes = encode_location(LocationId(1), &location, &adventure).unwrap();
        assert_eq!(bytes.len(), expected_len(&location));
        let spawn_count = 2 + 2 + 32
            + Direction::ALL
                .iter()
                .map(|d| 4 + encoded_list_len(&location.exits.get(*d).require))
                .sum::<usize>()
            + 1;
        assert_eq!(bytes[spawn_count], 255);

        let monsters: Result<MonsterList, _> = bounded([CharacterId(1); 256]);
        assert_eq!(
            monsters.unwrap_err(),
            CapacityExceeded {
                capacity: 255,
                len: 256
            }
        );
        let loot: Result<LootList, _> = bounded(vec![LootToken::from("w1"); 256]);
        assert_eq!(
            loot.unwrap_err(),
            CapacityExceeded {
                capacity: 255,
                len: 256
            }
        );
    }
}
