/// Engine format limits.
///
/// These values mirror the engine's native headers (`game.h`, `conditions.h`,
/// `draw.h`). Changing any of them without rebuilding the engine produces
/// datafiles the engine will misread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatLimits;

impl FormatLimits {
    // ===== string fields =====
    /// Location display name, zero padded on the wire.
    pub const MAX_LOCATION_NAME: usize = 32;
    /// Character display name, zero padded on the wire.
    pub const MAX_CHARACTER_NAME: usize = 18;
    /// Story text buffer; a text must be strictly shorter to leave room for the terminator.
    pub const MAX_STORY_TEXT_SIZE: usize = 1024;

    // ===== table sizes =====
    /// Characters per table (party, NPC, monster).
    pub const MAX_CHARACTERS: usize = 256;

    // ===== variable-length lists =====
    /// Count prefixes on monster and loot lists are a single byte.
    pub const MAX_LIST_ENTRIES: usize = 255;
    /// Clauses per condition list held by the engine's requirement buffer.
    pub const MAX_REQUIREMENTS: usize = 8;
    /// Animation frames per animation state.
    pub const ANIMATION_FRAMES: usize = 4;
    /// Spell slots per character.
    pub const MAX_SPELLS: usize = 5;
    /// NPC slots per location.
    pub const NPC_SLOTS: usize = 3;
    /// Dialogue sequences per NPC, numbered `1..=MAX_NPC_DIALOGUES`.
    pub const MAX_NPC_DIALOGUES: u8 = 8;

    // ===== wire sizes =====
    /// Every encoded condition clause.
    pub const CONDITION_BYTES: usize = 5;
    /// Index entry: 2-byte size + 4-byte offset.
    pub const INDEX_ENTRY_BYTES: usize = 6;
    /// Character records are fixed size.
    pub const CHARACTER_RECORD_BYTES: usize = 96;
}
