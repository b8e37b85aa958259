//! Attack validation and dice resolution.
//!
//! An attack pits one attacking territory against one defending territory.
//! Each rolls a single six-sided die; a strictly higher attacker roll
//! conquers the defender, anything else repels the attack. Validation and
//! resolution are separate so the controller can report precise rejection
//! reasons before any dice are rolled.

use rand::Rng;

use crate::board::{Board, Side, TerritoryId};

/// Reasons an attack order is rejected before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("You can only attack from a territory you control!")]
    NotPlayerTerritory,

    #[error("You cannot attack a territory of your own army!")]
    FriendlyTarget,
}

/// The result of resolving an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attacking garrison had 1 troop or fewer. Nothing happened and
    /// no dice were rolled.
    InsufficientTroops,
    /// The attacker won the roll and took the territory.
    Conquered {
        attack_roll: u8,
        defend_roll: u8,
        /// Troops that moved from the attacker into the conquered territory.
        transferred: u32,
        /// Attacker garrison after the transfer.
        attacker_troops: u32,
        /// New garrison of the conquered territory.
        defender_troops: u32,
    },
    /// The attacker lost or tied the roll and lost one troop.
    Repelled {
        attack_roll: u8,
        defend_roll: u8,
        /// Attacker garrison after the loss.
        attacker_troops: u32,
        /// Defender garrison, untouched.
        defender_troops: u32,
    },
}

/// Checks that `player` may order an attack from `from` against `to`.
///
/// Rejects attacks launched from territory the player does not control and
/// attacks against the player's own side (which also covers `from == to`).
/// Pure; the troop-count requirement is part of resolution instead.
pub fn validate_attack(
    board: &Board,
    from: TerritoryId,
    to: TerritoryId,
    player: Side,
) -> Result<(), AttackError> {
    if board.side(from) != player {
        return Err(AttackError::NotPlayerTerritory);
    }
    if board.side(to) == player {
        return Err(AttackError::FriendlyTarget);
    }
    Ok(())
}

/// Rolls one six-sided die.
fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6)
}

/// Resolves an attack from `from` against `to`, mutating the board.
///
/// The caller is responsible for `validate_attack`; this function assumes
/// `from` belongs to the attacker and `to` to the enemy. An attacker with
/// 1 troop or fewer aborts before any die is rolled, so an aborted attack
/// consumes no randomness.
pub fn resolve_attack(
    board: &mut Board,
    from: TerritoryId,
    to: TerritoryId,
    rng: &mut impl Rng,
) -> AttackOutcome {
    if board.troops(from) <= 1 {
        return AttackOutcome::InsufficientTroops;
    }
    let attack_roll = roll_die(rng);
    let defend_roll = roll_die(rng);
    resolve_with_rolls(board, from, to, attack_roll, defend_roll)
}

/// Applies battle mechanics for a fixed pair of die rolls.
///
/// The caller guarantees the attacker has at least 2 troops. On conquest
/// the defender joins the attacker's side and receives half the attacking
/// garrison (integer division); the defender's previous troops are
/// destroyed. On a repelled attack (ties included) the attacker loses
/// exactly one troop.
pub fn resolve_with_rolls(
    board: &mut Board,
    from: TerritoryId,
    to: TerritoryId,
    attack_roll: u8,
    defend_roll: u8,
) -> AttackOutcome {
    let attacker_side = board.side(from);
    if attack_roll > defend_roll {
        let transferred = board.troops(from) / 2;
        board.garrisons[to as usize].side = attacker_side;
        board.garrisons[to as usize].troops = transferred;
        board.garrisons[from as usize].troops -= transferred;
        AttackOutcome::Conquered {
            attack_roll,
            defend_roll,
            transferred,
            attacker_troops: board.troops(from),
            defender_troops: board.troops(to),
        }
    } else {
        board.garrisons[from as usize].troops -= 1;
        AttackOutcome::Repelled {
            attack_roll,
            defend_roll,
            attacker_troops: board.troops(from),
            defender_troops: board.troops(to),
        }
    }
}
