//! Hegemon -- a turn-based territory-conquest game for the terminal.
//!
//! This binary reads menu choices from stdin and writes the game screens
//! to stdout. It takes no arguments and exits 0 whether the player quits,
//! wins, or closes the input stream.

use std::io::{self, BufWriter};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use hegemon::session::{self, GameSession};

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(stdout.lock());
    let mut session = GameSession::start(SmallRng::from_entropy());

    session::run(&mut session, &mut input, &mut out).expect("failed to write to stdout");
}
