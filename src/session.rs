//! Game session state and the interactive loop.
//!
//! `GameSession` owns the board, the drawn mission, and the session RNG,
//! and exposes one handler per menu action. The `run` loop drives those
//! handlers from any buffered reader, which keeps the binary thin and lets
//! tests script whole sessions against in-memory input and output.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::battle;
use crate::board::{Board, Side, TerritoryId};
use crate::console::{display, parse_menu_choice, parse_territory_choice, MenuChoice};
use crate::mission::Mission;
use crate::victory;

/// The side the human player commands.
pub const PLAYER_SIDE: Side = Side::Blue;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting actions.
    Playing,
    /// The mission was completed. Terminal.
    Won,
    /// The player left the game. Terminal.
    Exited,
}

/// Holds the mutable state of one game between actions.
pub struct GameSession {
    pub board: Board,
    pub mission: Mission,
    pub player: Side,
    pub status: GameStatus,
    rng: SmallRng,
}

impl GameSession {
    /// Creates a session on the starting board, drawing the secret mission
    /// from `rng`. The generator is kept for battle dice.
    pub fn start(mut rng: SmallRng) -> Self {
        let mission = Mission::draw(&mut rng);
        GameSession {
            board: Board::start(),
            mission,
            player: PLAYER_SIDE,
            status: GameStatus::Playing,
            rng,
        }
    }

    /// Creates a session with a pinned mission instead of drawing one.
    pub fn with_mission(mission: Mission, rng: SmallRng) -> Self {
        GameSession {
            board: Board::start(),
            mission,
            player: PLAYER_SIDE,
            status: GameStatus::Playing,
            rng,
        }
    }

    /// Renders the per-turn screen: map, mission reminder, and menu.
    pub fn render_turn<W: Write>(&self, out: &mut W) -> io::Result<()> {
        display::render_map(out, &self.board)?;
        display::render_mission(out, self.mission)?;
        display::render_menu(out)
    }

    /// Handles menu action 1: validates the order, resolves the battle,
    /// reports it, and finishes with the automatic victory re-check. A
    /// rejected order prints its reason and touches nothing.
    pub fn attack<W: Write>(
        &mut self,
        from: TerritoryId,
        to: TerritoryId,
        out: &mut W,
    ) -> io::Result<()> {
        match battle::validate_attack(&self.board, from, to, self.player) {
            Ok(()) => {
                let attacker = self.board.garrison(from);
                let defender = self.board.garrison(to);
                let outcome = battle::resolve_attack(&mut self.board, from, to, &mut self.rng);
                display::render_battle(out, from, to, attacker, defender, outcome)?;
            }
            Err(reason) => writeln!(out, "{}", reason)?,
        }
        self.auto_check(out)
    }

    /// Handles menu action 2: reports the mission state and ends the game
    /// when it is complete.
    pub fn check_victory<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if victory::mission_accomplished(self.mission, &self.board, self.player) {
            self.status = GameStatus::Won;
            display::render_victory(out)
        } else {
            display::render_keep_fighting(out)?;
            self.auto_check(out)
        }
    }

    /// Handles menu action 0.
    pub fn quit<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.status = GameStatus::Exited;
        display::render_farewell(out)
    }

    /// Announces victory at the first action after which the mission
    /// holds. Sessions that already left the Playing state are untouched,
    /// so the congratulation is printed at most once.
    fn auto_check<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.status == GameStatus::Playing
            && victory::mission_accomplished(self.mission, &self.board, self.player)
        {
            self.status = GameStatus::Won;
            display::render_victory(out)?;
        }
        Ok(())
    }
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Drives a session from `input` until it leaves the Playing state.
///
/// End of input anywhere, including mid-attack at a territory prompt, is
/// treated as quitting, so piped sessions always terminate cleanly.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    display::render_welcome(out, session.player, session.mission)?;

    while session.status == GameStatus::Playing {
        session.render_turn(out)?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => {
                session.quit(out)?;
                break;
            }
        };

        match parse_menu_choice(&line) {
            Some(MenuChoice::Attack) => {
                display::render_attack_header(out)?;
                display::render_source_prompt(out)?;
                let from_line = match read_line(input)? {
                    Some(line) => line,
                    None => {
                        session.quit(out)?;
                        break;
                    }
                };
                display::render_target_prompt(out)?;
                let to_line = match read_line(input)? {
                    Some(line) => line,
                    None => {
                        session.quit(out)?;
                        break;
                    }
                };
                match (parse_territory_choice(&from_line), parse_territory_choice(&to_line)) {
                    (Some(from), Some(to)) => session.attack(from, to, out)?,
                    _ => display::render_invalid_territory(out)?,
                }
            }
            Some(MenuChoice::CheckVictory) => session.check_victory(out)?,
            Some(MenuChoice::Quit) => session.quit(out)?,
            None => display::render_invalid_choice(out)?,
        }
    }

    Ok(())
}
