//! Static weight tables for the bot decision engine.
//!
//! A candidate's weight is the product, over the action's tags, of the
//! default per-tag weight and the active personality's multiplier, times any
//! feasibility multiplier the candidate builder layers on top.

use super::Personality;
use crate::env::ActionTag;

/// Default weight of one behavioral tag, personality-independent.
pub fn base_weight(tag: ActionTag) -> f64 {
    match tag {
        ActionTag::Attack => 1.0,
        ActionTag::Guard => 0.6,
        ActionTag::Mobility => 1.2,
        ActionTag::Rest => 0.8,
        ActionTag::Forage => 1.0,
        ActionTag::Utility => 0.5,
    }
}

/// Per-personality multiplier applied on top of the base weight.
pub fn personality_multiplier(personality: Personality, tag: ActionTag) -> f64 {
    match personality {
        Personality::Safe => match tag {
            ActionTag::Attack => 0.3,
            ActionTag::Guard => 1.8,
            ActionTag::Mobility => 1.0,
            ActionTag::Rest => 1.5,
            ActionTag::Forage => 0.8,
            ActionTag::Utility => 1.0,
        },
        Personality::Aggressive => match tag {
            ActionTag::Attack => 2.5,
            ActionTag::Guard => 0.4,
            ActionTag::Mobility => 1.1,
            ActionTag::Rest => 0.6,
            ActionTag::Forage => 0.7,
            ActionTag::Utility => 1.0,
        },
        Personality::Hoarder => match tag {
            ActionTag::Attack => 0.6,
            ActionTag::Guard => 0.8,
            ActionTag::Mobility => 1.1,
            ActionTag::Rest => 0.9,
            ActionTag::Forage => 2.5,
            ActionTag::Utility => 1.0,
        },
        Personality::Random => 1.0,
    }
}
