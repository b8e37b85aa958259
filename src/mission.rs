//! Victory mission catalog.
//!
//! One of four secret missions is drawn at game start and never changes.
//! Ids are stable so recorded games stay comparable across versions.

use rand::Rng;
use serde::Serialize;

/// The number of missions in the catalog.
pub const MISSION_COUNT: usize = 4;

/// A secret victory mission.
///
/// Variants carry stable ids. The `#[repr(u8)]` attribute enables use as
/// an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Mission {
    /// Hold all 10 territories.
    ConquerAll = 0,
    /// Hold 5 or more troops in 3 different territories at once.
    FortifyThree = 1,
    /// Hold 5 or more territories.
    ConquerFive = 2,
    /// Reduce the enemy's total troop count to zero.
    EliminateEnemy = 3,
}

/// All mission variants in id order.
pub const ALL_MISSIONS: [Mission; MISSION_COUNT] = [
    Mission::ConquerAll,
    Mission::FortifyThree,
    Mission::ConquerFive,
    Mission::EliminateEnemy,
];

impl Mission {
    /// Returns the player-facing description of this mission.
    pub const fn description(self) -> &'static str {
        match self {
            Mission::ConquerAll => "Conquer every territory on the map.",
            Mission::FortifyThree => "Hold 5 or more troops in 3 different territories.",
            Mission::ConquerFive => "Conquer 5 or more territories.",
            Mission::EliminateEnemy => "Eliminate every troop of the Red army.",
        }
    }

    /// Looks up a mission by its stable id.
    pub fn from_id(id: u8) -> Option<Mission> {
        ALL_MISSIONS.get(id as usize).copied()
    }

    /// Draws a mission uniformly at random, consuming exactly one draw.
    pub fn draw(rng: &mut impl Rng) -> Mission {
        ALL_MISSIONS[rng.gen_range(0..MISSION_COUNT)]
    }
}
