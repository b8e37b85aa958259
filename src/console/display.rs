//! Screen rendering.
//!
//! Every player-facing string lives here. All functions write to an
//! injected sink so the session handlers and tests can capture output.
//! Inline prompts are flushed so they appear before the read blocks.

use std::io::{self, Write};

use crate::battle::AttackOutcome;
use crate::board::{Board, Garrison, Side, TerritoryId, ALL_TERRITORIES};
use crate::mission::Mission;

/// Prints the one-time welcome banner and the secret mission reveal.
pub fn render_welcome<W: Write>(out: &mut W, player: Side, mission: Mission) -> io::Result<()> {
    writeln!(out, "=== HEGEMON ===")?;
    writeln!(out, "You command the {} army.", player.name())?;
    writeln!(out)?;
    render_mission(out, mission)
}

/// Prints the secret mission block.
pub fn render_mission<W: Write>(out: &mut W, mission: Mission) -> io::Result<()> {
    writeln!(out, "--- Your Secret Mission ---")?;
    writeln!(out, "{}", mission.description())?;
    writeln!(out)
}

/// Prints the world map: one numbered line per territory in board order.
pub fn render_map<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "--- World Map ---")?;
    for (i, t) in ALL_TERRITORIES.iter().enumerate() {
        let garrison = board.garrison(*t);
        writeln!(
            out,
            "{}. {} (side: {}, troops: {})",
            i + 1,
            t.name(),
            garrison.side.name(),
            garrison.troops
        )?;
    }
    writeln!(out)
}

/// Prints the main menu with its trailing action prompt.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "--- Main Menu ---")?;
    writeln!(out, "1. Attack a territory")?;
    writeln!(out, "2. Check victory")?;
    writeln!(out, "0. Quit")?;
    write!(out, "Choose an action: ")?;
    out.flush()
}

/// Prints the attack-phase header.
pub fn render_attack_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Attack Phase ---")
}

/// Prompts for the attacking territory.
pub fn render_source_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Choose the attacking territory (1-10): ")?;
    out.flush()
}

/// Prompts for the defending territory.
pub fn render_target_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Choose the defending territory (1-10): ")?;
    out.flush()
}

/// Reports a resolved attack.
///
/// `attacker` and `defender` are the garrisons as they stood before the
/// battle; the outcome carries the dice and the resulting counts.
pub fn render_battle<W: Write>(
    out: &mut W,
    from: TerritoryId,
    to: TerritoryId,
    attacker: Garrison,
    defender: Garrison,
    outcome: AttackOutcome,
) -> io::Result<()> {
    let (attack_roll, defend_roll) = match outcome {
        AttackOutcome::InsufficientTroops => {
            writeln!(out)?;
            return writeln!(out, "You need at least 2 troops to launch an attack.");
        }
        AttackOutcome::Conquered { attack_roll, defend_roll, .. }
        | AttackOutcome::Repelled { attack_roll, defend_roll, .. } => (attack_roll, defend_roll),
    };

    writeln!(out)?;
    writeln!(
        out,
        "--> Battle: {} ({}) vs {} ({})",
        from.name(),
        attacker.side.name(),
        to.name(),
        defender.side.name()
    )?;
    writeln!(out, "Troops - attacker: {} | defender: {}", attacker.troops, defender.troops)?;
    writeln!(out, "Dice - attacker: {} | defender: {}", attack_roll, defend_roll)?;
    match outcome {
        AttackOutcome::Conquered { .. } => {
            writeln!(out, "VICTORY! {} has been conquered!", to.name())
        }
        _ => writeln!(out, "DEFEAT! The attack was repelled."),
    }
}

/// Announces mission completion.
pub fn render_victory<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Congratulations! You completed your mission and won the game!")
}

/// Reports an incomplete mission after a manual check.
pub fn render_keep_fighting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your mission is not complete yet. Keep fighting!")
}

/// Prints the farewell line on quit.
pub fn render_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Leaving the game...")
}

/// Reports an unrecognized menu choice.
pub fn render_invalid_choice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invalid option. Try again.")
}

/// Reports territory prompts that did not name territories.
pub fn render_invalid_territory<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invalid territory ids.")
}
