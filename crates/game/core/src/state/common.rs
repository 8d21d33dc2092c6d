//! Identifier newtypes and hex-grid geometry.

use core::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

string_id!(
    /// Identifier of a match record.
    MatchId
);
string_id!(
    /// Identifier of a human or bot participant.
    ///
    /// Bot ids follow the `bot<N>` convention; [`PlayerId::bot_index`]
    /// recovers `N`.
    PlayerId
);
string_id!(
    /// Identifier of a map tile.
    TileId
);
string_id!(
    /// Identifier of a single item instance in the world.
    ItemId
);

impl PlayerId {
    /// Returns the bot ordinal if this id names a bot-controlled character.
    pub fn bot_index(&self) -> Option<u32> {
        self.0.strip_prefix("bot")?.parse().ok()
    }

    pub fn is_bot(&self) -> bool {
        self.bot_index().is_some()
    }
}

/// Axial hex-grid coordinate.
///
/// Distances use the cube-coordinate max-abs formula: with `x = q`, `z = r`,
/// `y = -x - z`, the distance between two hexes is the largest component
/// difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Hex distance to another coordinate.
    pub fn distance(&self, other: &AxialCoord) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        // Third cube axis: y = -q - r, so dy = -(dq + dr).
        dq.abs().max(dr.abs()).max((dq + dr).abs()) as u32
    }

    /// The six axial neighbor coordinates, in a fixed order.
    pub fn neighbors(&self) -> [AxialCoord; 6] {
        const DIRS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];
        DIRS.map(|(dq, dr)| AxialCoord::new(self.q + dq, self.r + dr))
    }
}

/// A character's place on the map. Characters without a position (not yet
/// spawned) take no part in range calculations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Position {
    pub tile_id: TileId,
    pub coord: AxialCoord,
}
