//! Victory evaluation.
//!
//! A single pass over the board gathers every count the mission catalog
//! needs; evaluation itself is a pure dispatch over those counts and never
//! mutates state.

use crate::board::{Board, Side, TERRITORY_COUNT};
use crate::mission::Mission;

/// Garrison size at which a territory counts as a stronghold.
pub const STRONGHOLD_TROOPS: u32 = 5;

/// Board counts for one player, gathered in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    /// Territories held by the player.
    pub owned: u32,
    /// Territories held by the enemy.
    pub enemy: u32,
    /// Total troops across enemy-held territories.
    pub enemy_troops: u32,
    /// Player territories garrisoned with at least `STRONGHOLD_TROOPS`.
    pub strongholds: u32,
}

impl Census {
    /// Tallies the board for `player` in one pass.
    pub fn take(board: &Board, player: Side) -> Census {
        let mut census = Census { owned: 0, enemy: 0, enemy_troops: 0, strongholds: 0 };
        for garrison in &board.garrisons {
            if garrison.side == player {
                census.owned += 1;
                if garrison.troops >= STRONGHOLD_TROOPS {
                    census.strongholds += 1;
                }
            } else {
                census.enemy += 1;
                census.enemy_troops += garrison.troops;
            }
        }
        census
    }
}

/// Returns true if `player` has completed `mission` on this board.
///
/// Pure: repeated calls on the same board always agree.
pub fn mission_accomplished(mission: Mission, board: &Board, player: Side) -> bool {
    let census = Census::take(board, player);
    match mission {
        Mission::ConquerAll => census.owned == TERRITORY_COUNT as u32,
        Mission::FortifyThree => census.strongholds >= 3,
        Mission::ConquerFive => census.owned >= 5,
        Mission::EliminateEnemy => census.enemy_troops == 0,
    }
}
