//! Fixed rule constants shared by the effect resolvers and the bot engine.

/// Compile-time tuning constants for the core rules.
///
/// These are rule constants, not match settings: every match resolves with
/// the same values. Per-match knobs (view distance, roster size) live in
/// [`crate::state::MatchSettings`].
pub struct GameConfig;

impl GameConfig {
    /// Base damage dealt by a punch.
    pub const PUNCH_DAMAGE: u32 = 2;

    /// Base damage dealt by an axe attack.
    pub const AXE_DAMAGE: u32 = 8;

    /// Base damage dealt by a knife attack.
    pub const KNIFE_DAMAGE: u32 = 5;

    /// Incoming damage is reduced by `ceil(base / PROTECT_DIVISOR)` while
    /// the target carries the `PROTECTED` condition.
    pub const PROTECT_DIVISOR: u32 = 3;

    /// Health restored by a night of sleep.
    pub const SLEEP_HEAL: u32 = 2;

    /// Health restored by recovering at an eligible location.
    pub const RECOVER_HEAL: u32 = 5;

    /// Health restored by applying a bandage.
    pub const BANDAGE_HEAL: u32 = 5;

    /// Energy restored by eating food.
    pub const FOOD_ENERGY: u32 = 20;

    /// Energy restored by drinking.
    pub const DRINK_ENERGY: u32 = 12;

    /// Temporary energy granted by focusing.
    pub const FOCUS_ENERGY: u32 = 6;

    /// Maximum energy a scare drains from its victim.
    pub const SCARE_ENERGY_DRAIN: u32 = 3;

    /// Health lost when a participant acts without enough energy.
    pub const EXHAUSTION_DAMAGE: u32 = 1;

    /// Base number of items revealed by a search, before extra effort.
    pub const SEARCH_BASE_YIELD: u32 = 5;

    /// Base number of items collected by a pick-up, before extra effort.
    pub const PICK_UP_BASE_YIELD: u32 = 3;

    /// Default fog-of-war radius in hex distance.
    pub const DEFAULT_VIEW_DISTANCE: u32 = 2;
}
