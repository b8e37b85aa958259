//! Headless batch simulation.
//!
//! Plays full games under a uniformly random legal attack policy and
//! records every battle. Useful for soak-testing the rules and inspecting
//! mission balance without a player at the keyboard.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::battle::{resolve_attack, AttackOutcome};
use crate::board::{Board, Side, TerritoryId, ALL_TERRITORIES};
use crate::mission::{Mission, ALL_MISSIONS, MISSION_COUNT};
use crate::session::PLAYER_SIDE;
use crate::victory::{mission_accomplished, Census};

/// Configuration for autoplay game generation.
#[derive(Clone)]
pub struct AutoPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Maximum attacks per game before forced termination.
    pub max_turns: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        AutoPlayConfig {
            num_games: 10,
            max_turns: 500,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single attack recorded from an autoplay game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// 1-based attack number within the game.
    pub turn: usize,
    /// Attacking territory.
    pub from: &'static str,
    /// Defending territory.
    pub to: &'static str,
    pub attack_roll: u8,
    pub defend_roll: u8,
    /// Whether the attack took the territory.
    pub conquered: bool,
}

/// A complete autoplay game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// The mission drawn for this game.
    pub mission: Mission,
    /// Whether the mission was completed.
    pub won: bool,
    /// Number of attacks played.
    pub turns_played: usize,
    /// Player-held territories when the game ended.
    pub territories_owned: u32,
    /// Enemy troops remaining when the game ended.
    pub enemy_troops: u32,
    /// Every attack in order.
    pub turns: Vec<TurnRecord>,
}

/// Picks a uniformly random legal attack for `player`.
///
/// Legal pairs are any player-held source with at least 2 troops against
/// any enemy-held target. Returns `None` when no legal attack exists.
pub fn random_attack(
    board: &Board,
    player: Side,
    rng: &mut impl Rng,
) -> Option<(TerritoryId, TerritoryId)> {
    let mut pairs = Vec::new();
    for &from in ALL_TERRITORIES.iter() {
        if board.side(from) != player || board.troops(from) < 2 {
            continue;
        }
        for &to in ALL_TERRITORIES.iter() {
            if board.side(to) != player {
                pairs.push((from, to));
            }
        }
    }
    if pairs.is_empty() {
        None
    } else {
        Some(pairs[rng.gen_range(0..pairs.len())])
    }
}

/// Plays a single game and returns its record.
///
/// The mission is checked before the first attack (a freshly drawn
/// ConquerFive already holds on the starting board) and again after every
/// battle. The game ends on completion, when no legal attack remains, or
/// at the turn cap.
pub fn play_game(config: &AutoPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut board = Board::start();
    let mission = Mission::draw(rng);
    let mut turns: Vec<TurnRecord> = Vec::new();
    let mut won = mission_accomplished(mission, &board, PLAYER_SIDE);
    let mut turn = 0;

    while !won && turn < config.max_turns {
        let (from, to) = match random_attack(&board, PLAYER_SIDE, rng) {
            Some(pair) => pair,
            None => break,
        };
        turn += 1;

        let outcome = resolve_attack(&mut board, from, to, rng);
        let (attack_roll, defend_roll, conquered) = match outcome {
            AttackOutcome::Conquered { attack_roll, defend_roll, .. } => {
                (attack_roll, defend_roll, true)
            }
            AttackOutcome::Repelled { attack_roll, defend_roll, .. } => {
                (attack_roll, defend_roll, false)
            }
            AttackOutcome::InsufficientTroops => {
                unreachable!("attack sources always have at least 2 troops")
            }
        };
        turns.push(TurnRecord {
            turn,
            from: from.name(),
            to: to.name(),
            attack_roll,
            defend_roll,
            conquered,
        });

        won = mission_accomplished(mission, &board, PLAYER_SIDE);
    }

    let census = Census::take(&board, PLAYER_SIDE);
    GameRecord {
        game_id,
        mission,
        won,
        turns_played: turn,
        territories_owned: census.owned,
        enemy_troops: census.enemy_troops,
        turns,
    }
}

/// Runs autoplay generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_autoplay(config: &AutoPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_autoplay_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs autoplay generation, calling `on_game` with each completed record.
///
/// This allows the caller to process games incrementally (e.g. write to
/// disk) rather than waiting for all games to finish.
pub fn run_autoplay_with_callback<F>(config: &AutoPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_autoplay_parallel(config, on_game);
    } else {
        run_autoplay_sequential(config, on_game);
    }
}

/// Sequential autoplay: one generator plays the games in order.
fn run_autoplay_sequential<F>(config: &AutoPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    for i in 0..config.num_games {
        let game_start = Instant::now();
        let game = play_game(config, i, &mut rng);
        if !config.quiet {
            let elapsed = game_start.elapsed().as_secs_f64();
            let outcome = if game.won { "won" } else { "unfinished" };
            eprintln!(
                "Game {}/{}: {} {} in {} turns ({:.2}s)",
                i + 1,
                config.num_games,
                mission_label(game.mission),
                outcome,
                game.turns_played,
                elapsed,
            );
        }
        on_game(game);
    }
}

/// Parallel autoplay: games run concurrently on a rayon pool.
/// Uses a channel to deliver completed games to the callback from worker
/// threads. Per-game generators are seeded `seed + game_id` so a fixed
/// seed reproduces the same records regardless of scheduling.
fn run_autoplay_parallel<F>(config: &AutoPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = if config_clone.seed != 0 {
                        SmallRng::seed_from_u64(config_clone.seed.wrapping_add(i as u64))
                    } else {
                        SmallRng::from_entropy()
                    };
                    let game_start = Instant::now();
                    let game = play_game(&config_clone, i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        let elapsed = game_start.elapsed().as_secs_f64();
                        let outcome = if game.won { "won" } else { "unfinished" };
                        eprintln!(
                            "Game {}/{}: {} {} in {} turns ({:.2}s)",
                            n,
                            config_clone.num_games,
                            mission_label(game.mission),
                            outcome,
                            game.turns_played,
                            elapsed,
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    for game in rx {
        on_game(game);
    }

    handle.join().expect("autoplay worker thread panicked");
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Returns the snake_case mission tag used in logs and JSON output.
fn mission_label(mission: Mission) -> &'static str {
    match mission {
        Mission::ConquerAll => "conquer_all",
        Mission::FortifyThree => "fortify_three",
        Mission::ConquerFive => "conquer_five",
        Mission::EliminateEnemy => "eliminate_enemy",
    }
}

/// Prints a summary of autoplay results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut games_per_mission = [0usize; MISSION_COUNT];
    let mut wins_per_mission = [0usize; MISSION_COUNT];
    let mut total_wins = 0usize;
    let mut total_turns = 0usize;

    for game in games {
        let idx = game.mission as usize;
        games_per_mission[idx] += 1;
        if game.won {
            wins_per_mission[idx] += 1;
            total_wins += 1;
        }
        total_turns += game.turns_played;
    }

    eprintln!("=== Autoplay Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Won: {} ({:.1}%)",
        total_wins,
        100.0 * total_wins as f64 / total.max(1) as f64
    );
    eprintln!("Unfinished: {}", total - total_wins);
    eprintln!(
        "Avg turns/game: {:.1}",
        total_turns as f64 / total.max(1) as f64
    );
    eprintln!("Mission win rates:");
    for (i, &mission) in ALL_MISSIONS.iter().enumerate() {
        let played = games_per_mission[i];
        let pct = 100.0 * wins_per_mission[i] as f64 / played.max(1) as f64;
        eprintln!(
            "  {:>15}: {}/{} ({:.1}%)",
            mission_label(mission),
            wins_per_mission[i],
            played,
            pct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config(num_games: usize, threads: usize, seed: u64) -> AutoPlayConfig {
        AutoPlayConfig {
            num_games,
            threads,
            seed,
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn random_attack_only_picks_legal_pairs() {
        let board = Board::start();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let (from, to) = random_attack(&board, PLAYER_SIDE, &mut rng)
                .expect("the starting board has legal attacks");
            assert_eq!(board.side(from), PLAYER_SIDE);
            assert!(board.troops(from) >= 2);
            assert_ne!(board.side(to), PLAYER_SIDE);
        }
    }

    #[test]
    fn random_attack_with_no_usable_source_returns_none() {
        let mut board = Board::start();
        for garrison in board.garrisons.iter_mut() {
            if garrison.side == PLAYER_SIDE {
                garrison.troops = 1;
            }
        }
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(random_attack(&board, PLAYER_SIDE, &mut rng), None);
    }

    #[test]
    fn single_game_respects_the_turn_cap() {
        let config = AutoPlayConfig {
            max_turns: 5,
            ..quiet_config(1, 1, 42)
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let game = play_game(&config, 0, &mut rng);
        assert!(game.turns_played <= 5);
        assert_eq!(game.turns.len(), game.turns_played);
    }

    #[test]
    fn game_records_are_internally_consistent() {
        let config = quiet_config(20, 1, 1234);
        for game in run_autoplay(&config) {
            // Red never attacks, so the player cannot drop below the
            // starting five territories.
            assert!((5..=10).contains(&game.territories_owned));
            assert!(game.enemy_troops <= 11);
            assert_eq!(game.turns.len(), game.turns_played);
            assert!(game.turns_played <= config.max_turns);
            for (i, turn) in game.turns.iter().enumerate() {
                assert_eq!(turn.turn, i + 1);
                assert!((1..=6).contains(&turn.attack_roll));
                assert!((1..=6).contains(&turn.defend_roll));
            }
            if game.won && game.mission == Mission::ConquerAll {
                assert_eq!(game.territories_owned, 10);
            }
            if game.won && game.mission == Mission::EliminateEnemy {
                assert_eq!(game.enemy_troops, 0);
            }
        }
    }

    #[test]
    fn conquer_five_completes_before_the_first_attack() {
        let config = quiet_config(20, 1, 77);
        for game in run_autoplay(&config) {
            if game.mission == Mission::ConquerFive {
                assert!(game.won);
                assert_eq!(game.turns_played, 0);
            }
        }
    }

    #[test]
    fn sequential_run_produces_correct_count() {
        let games = run_autoplay(&quiet_config(3, 1, 99));
        assert_eq!(games.len(), 3);
        for (i, game) in games.iter().enumerate() {
            assert_eq!(game.game_id, i);
        }
    }

    #[test]
    fn parallel_run_produces_correct_count() {
        let games = run_autoplay(&quiet_config(4, 2, 77));
        assert_eq!(games.len(), 4);
        let mut ids: Vec<usize> = games.iter().map(|g| g.game_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn sequential_runs_are_deterministic_with_a_seed() {
        let config = quiet_config(5, 1, 42);
        let first = run_autoplay(&config);
        let second = run_autoplay(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn jsonl_output_is_valid() {
        let games = run_autoplay(&quiet_config(2, 1, 55));
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(output.lines().count(), 2);
        for line in output.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("game_id").is_some());
            assert!(value.get("mission").is_some());
            assert!(value.get("won").is_some());
            assert!(value.get("turns").is_some());
        }
    }

    #[test]
    fn mission_serializes_as_snake_case() {
        let games = run_autoplay(&quiet_config(1, 1, 42));
        let json = serde_json::to_string(&games[0]).unwrap();
        assert!(
            json.contains("\"mission\":\"conquer_all\"")
                || json.contains("\"mission\":\"fortify_three\"")
                || json.contains("\"mission\":\"conquer_five\"")
                || json.contains("\"mission\":\"eliminate_enemy\"")
        );
    }
}
