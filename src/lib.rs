//! Hegemon engine library.
//!
//! Exposes the board representation, battle resolver, mission catalog,
//! victory evaluation, and console modules for use by integration tests
//! and the binary entry points.

pub mod autoplay;
pub mod battle;
pub mod board;
pub mod console;
pub mod mission;
pub mod session;
pub mod victory;
