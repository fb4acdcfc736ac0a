//! Command line interface

use chess_engine::constants::MAX_DEPTH;
use chess_engine::Color;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Who controls a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves typed on stdin
    Human,
    /// Engine search
    Cpu,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess in the terminal", long_about = None)]
pub struct Cli {
    /// Who plays white
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub white: PlayerKind,

    /// Who plays black
    #[arg(long, value_enum, default_value_t = PlayerKind::Cpu)]
    pub black: PlayerKind,

    /// Search depth in plies, overriding the config file
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DEPTH)))]
    pub depth: Option<u32>,

    /// End the game as unfinished after this many plies
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Config file (JSON); defaults to the user config directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the effective config to the config path before playing
    #[arg(long)]
    pub save_config: bool,

    /// Enable info logging when RUST_LOG is unset
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn player_kind(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}
