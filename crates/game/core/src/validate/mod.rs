//! Cross-reference validation.
//!
//! [`Validator`] walks the whole adventure in ten fixed phases. Each phase
//! scans every entity and collects all of its violations; the first phase
//! that reports any stops the run. Later phases rely on what earlier ones
//! proved, e.g. loot validation assumes character bitmaps were resolved.
//!
//! A passing run yields [`Validated`], the only way to construct an
//! [`crate::encode::Encoder`].
mod characters;
mod error;
mod world;

pub use error::{ContentError, RefKind};

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    bitmap::{BitmapOracle, BitmapTable},
    error::{CompileError, ErrorSeverity},
    model::Adventure,
};

/// Validation phases, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
#[repr(u8)]
pub enum Phase {
    CharacterRecords = 1,
    CharacterCounts = 2,
    Sprites = 3,
    Equipment = 4,
    Exits = 5,
    TextReferences = 6,
    Spawns = 7,
    Conditions = 8,
    Loot = 9,
    NpcDialogue = 10,
}

impl Phase {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CharacterRecords => "character_records",
            Self::CharacterCounts => "character_counts",
            Self::Sprites => "sprites",
            Self::Equipment => "equipment",
            Self::Exits => "exits",
            Self::TextReferences => "text_references",
            Self::Spawns => "spawns",
            Self::Conditions => "conditions",
            Self::Loot => "loot",
            Self::NpcDialogue => "npc_dialogue",
        }
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "phase {} ({})", self.number(), self.as_str())
    }
}

/// The first failing phase and everything it found.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{phase} failed with {} error(s)", .errors.len())]
pub struct ValidationFailure {
    pub phase: Phase,
    pub errors: Vec<ContentError>,
}

impl CompileError for ValidationFailure {
    fn severity(&self) -> ErrorSeverity {
        if self
            .errors
            .iter()
            .any(|err| err.severity() == ErrorSeverity::Fatal)
        {
            ErrorSeverity::Fatal
        } else {
            ErrorSeverity::Validation
        }
    }

    fn error_code(&self) -> &'static str {
        "VALIDATION_FAILED"
    }
}

/// Content that passed every phase, with its bitmap IDs assigned.
#[derive(Debug)]
pub struct Validated<'a> {
    adventure: &'a Adventure,
    bitmaps: BitmapTable,
}

impl<'a> Validated<'a> {
    pub fn adventure(&self) -> &'a Adventure {
        self.adventure
    }

    pub fn bitmaps(&self) -> &BitmapTable {
        &self.bitmaps
    }
}

/// Runs the validation phases over one adventure.
pub struct Validator<'a> {
    adventure: &'a Adventure,
    oracle: &'a dyn BitmapOracle,
}

impl<'a> Validator<'a> {
    pub fn new(adventure: &'a Adventure, oracle: &'a dyn BitmapOracle) -> Self {
        Self { adventure, oracle }
    }

    pub fn run(self) -> Result<Validated<'a>, ValidationFailure> {
        self.run_observed(|_, _| {})
    }

    /// Like [`Self::run`], reporting each phase to `observe` as it completes.
    pub fn run_observed(
        self,
        mut observe: impl FnMut(Phase, &[ContentError]),
    ) -> Result<Validated<'a>, ValidationFailure> {
        let mut bitmaps = BitmapTable::new();
        for phase in Phase::iter() {
            let span = tracing::info_span!("validate", phase = phase.as_str());
            let _guard = span.enter();

            let mut errors = Vec::new();
            self.check(phase, &mut bitmaps, &mut errors);
            observe(phase, &errors);

            if !errors.is_empty() {
                tracing::info!(errors = errors.len(), "phase failed");
                return Err(ValidationFailure { phase, errors });
            }
            tracing::info!("phase passed");
        }
        tracing::debug!(bitmaps = bitmaps.len(), "validation complete");
        Ok(Validated {
            adventure: self.adventure,
            bitmaps,
        })
    }

    fn check(&self, phase: Phase, bitmaps: &mut BitmapTable, errors: &mut Vec<ContentError>) {
        let adventure = self.adventure;
        match phase {
            Phase::CharacterRecords => characters::check_records(adventure, errors),
            Phase::CharacterCounts => characters::check_counts(adventure, errors),
            Phase::Sprites => characters::check_sprites(adventure, self.oracle, bitmaps, errors),
            Phase::Equipment => characters::check_equipment(adventure, errors),
            Phase::Exits => world::check_exits(adventure, errors),
            Phase::TextReferences => world::check_text(adventure, errors),
            Phase::Spawns => world::check_spawns(adventure, errors),
            Phase::Conditions => world::check_conditions(adventure, errors),
            Phase::Loot => world::check_loot(adventure, errors),
            Phase::NpcDialogue => world::check_npcs(adventure, errors),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        bitmap::testing::MemoryOracle,
        clause,
        error::Subject,
        model::{
            Attributes, Character, CharacterId, CharacterTable, ConditionList, Exit, Item, ItemId,
            Location, LocationId, LootToken, NpcSlot, TextId, Weapon, WeaponId, bounded,
        },
        registry::{CharacterClass, CharacterType, Dimensions, EvalRule, SlotClass, SpriteClass},
    };

    fn character(name: &str, kind: CharacterType, sprite_class: SpriteClass) -> Character {
        Character {
            name: name.into(),
            kind,
            sprite_class,
            animations: Default::default(),
            portrait: None,
            class: CharacterClass::HumanGenericMelee,
            level: 1,
            profile: 0,
            attributes: Attributes::uniform(10),
            hp: 12,
            status: 0,
            equipment: Default::default(),
            formation: 0,
            spells: Default::default(),
        }
    }

    /// Three linked locations, one NPC, one party member, one monster.
    pub(crate) fn sample() -> Adventure {
        let mut glade = Location::named("Glade");
        glade.text = Some(TextId(1));
        glade.exits.north = Exit::to(LocationId(2));

        let mut cave = Location::named("Cave");
        cave.text = Some(TextId(2));
        cave.exits.south = Exit::to(LocationId(1));
        cave.exits.east = Exit {
            destination: Some(LocationId(3)),
            text: Some(TextId(3)),
            require: ConditionList::new(
                EvalRule::And,
                vec![clause!("COND_MAP_VISIT_TYPE", "COND_MAP_VISIT_ANY", 1, 1)],
            ).unwrap(),
        };
        cave.spawn.chance = Some(50);
        cave.spawn.monsters = bounded([CharacterId(1)]).unwrap();
        cave.hooks.spawn = Some(TextId(3));
        cave.loot.chance = Some(20);
        cave.loot.entries = bounded(["w1", "i2"].map(LootToken::from)).unwrap();
        cave.npcs[0] = Some(NpcSlot {
            npc: CharacterId(1),
            require: ConditionList::new(
                EvalRule::Or,
                vec![clause!("COND_NPC_TYPE", "COND_NPC_ALIVE", 1, 0)],
            ).unwrap(),
            dialogue: 1,
            text: Some(TextId(3)),
        });

        let peak = Location::named("Peak");

        let mut hero = character("Hero", CharacterType::Npc, SpriteClass::Normal);
        hero.animations.resting = bounded(["hero".to_owned()]).unwrap();
        hero.equipment.head = Some(ItemId(1));
        hero.equipment.weapon_r = Some(WeaponId(1));

        let mut elder = character("Elder", CharacterType::Npc, SpriteClass::None);
        elder.portrait = Some("elder".into());

        let mut wolf = character("Wolf", CharacterType::Monster, SpriteClass::Normal);
        wolf.class = CharacterClass::BeastWild;
        wolf.animations.resting = bounded(["wolf1".to_owned(), "wolf2".to_owned()]).unwrap();
        wolf.animations.attack = bounded(["wolf1".to_owned()]).unwrap();

        Adventure {
            world: [
                (LocationId(1), glade),
                (LocationId(2), cave),
                (LocationId(3), peak),
            ]
            .into(),
            story: [
                (TextId(0), "Hello".to_owned()),
                (TextId(1), "A quiet glade.".to_owned()),
                (TextId(2), "A damp cave.\nWater drips.".to_owned()),
                (TextId(3), "Something stirs.".to_owned()),
            ]
            .into(),
            party: [(CharacterId(1), hero)].into(),
            npcs: [(CharacterId(1), elder)].into(),
            monsters: [(CharacterId(1), wolf)].into(),
            items: [
                (
                    ItemId(1),
                    Item {
                        name: "Helm".into(),
                        slot: SlotClass::Head,
                    },
                ),
                (
                    ItemId(2),
                    Item {
                        name: "Ring".into(),
                        slot: SlotClass::Option,
                    },
                ),
            ]
            .into(),
            weapons: [(
                WeaponId(1),
                Weapon {
                    name: "Sword".into(),
                },
            )]
            .into(),
        }
    }

    pub(crate) fn oracle() -> MemoryOracle {
        MemoryOracle::default()
            .with("hero", 32, 32)
            .with("elder", 32, 32)
            .with("wolf1", 32, 32)
            .with("wolf2", 32, 32)
    }

    #[test]
    fn sample_passes_every_phase() {
        let adventure = sample();
        let oracle = oracle();
        let mut phases = Vec::new();
        let validated = Validator::new(&adventure, &oracle)
            .run_observed(|phase, errors| phases.push((phase.number(), errors.len())))
            .unwrap();

        assert_eq!(phases, (1..=10).map(|n| (n, 0)).collect::<Vec<_>>());
        assert_eq!(validated.bitmaps().len(), 4);
        assert!(core::ptr::eq(validated.adventure(), &adventure));
    }

    #[test]
    fn dangling_north_exit_stops_at_phase_five() {
        let mut adventure = sample();
        adventure.world.get_mut(&LocationId(1)).unwrap().exits.north = Exit::to(LocationId(99));
        // Also broken, but in a later phase.
        adventure.world.get_mut(&LocationId(2)).unwrap().spawn.chance = Some(150);

        let oracle = oracle();
        let mut seen = Vec::new();
        let failure = Validator::new(&adventure, &oracle)
            .run_observed(|phase, _| seen.push(phase))
            .unwrap_err();

        assert_eq!(failure.phase, Phase::Exits);
        assert_eq!(failure.phase.number(), 5);
        assert_eq!(seen.last(), Some(&Phase::Exits));
        assert_eq!(
            failure.errors,
            [ContentError::Dangling {
                subject: Subject::Location(LocationId(1)),
                field: "north".into(),
                target: RefKind::Location,
                id: 99,
            }]
        );
        assert_eq!(failure.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn undersized_sprite_fails_phase_three() {
        let adventure = sample();
        let oracle = oracle().with("wolf2", 16, 16);

        let failure = Validator::new(&adventure, &oracle).run().unwrap_err();
        assert_eq!(failure.phase, Phase::Sprites);
        assert_eq!(
            failure.errors,
            [ContentError::BitmapDimensions {
                subject: Subject::Character(CharacterTable::Monster, CharacterId(1)),
                field: "resting[2]".into(),
                filename: "wolf2".into(),
                class: SpriteClass::Normal,
                expected: Dimensions::new(32, 32),
                actual: Dimensions::new(16, 16),
            }]
        );
        let message = failure.errors[0].to_string();
        assert!(message.contains("monster 1") && message.contains("wolf2"), "{message}");
    }

    #[test]
    fn phase_collects_every_violation() {
        let mut adventure = sample();
        for location in adventure.world.values_mut() {
            location.exits.west = Exit::to(LocationId(50));
        }
        let oracle = oracle();
        let failure = Validator::new(&adventure, &oracle).run().unwrap_err();
        assert_eq!(failure.phase, Phase::Exits);
        assert_eq!(failure.errors.len(), 3);
        assert_eq!(
            failure.to_string(),
            "phase 5 (exits) failed with 3 error(s)"
        );
    }
}
