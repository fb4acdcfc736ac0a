//! Console chess
//!
//! Terminal front end for [`chess_engine`]: command line parsing, config
//! resolution, a stdin-driven human player and the game loop that alternates
//! two [`Player`](chess_engine::Player)s until one of them cannot move.

pub mod cli;
pub mod game;
pub mod human;
pub mod settings;

pub use cli::{Cli, PlayerKind};
pub use game::{Game, GameOutcome};
pub use human::{Human, LineSource};
