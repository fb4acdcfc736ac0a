//! Chess engine: board state, move generation, evaluation and search
//!
//! A [`Position`] is mutated in place with [`Position::apply_move`] and
//! restored with [`Position::undo_move`]. Legal moves come from
//! [`Position::legal_moves`], positions are scored with [`Position::score`],
//! and [`Search`] picks moves for the [`Cpu`] player.
//!
//! ```rust,ignore
//! let mut position = Position::new();
//! let (from, to) = parse_move_notation("e2e4")?;
//! assert!(position.apply_move(Move::quiet(from, to), true));
//! let reply = Search::new(SearchConfig::default()).best_move(&mut position, Color::Black);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod legality;
pub mod make_unmake;
pub mod move_gen;
pub mod moves;
pub mod piece;
pub mod player;
pub mod position;
pub mod search;
pub mod tile;
pub mod types;

pub use config::{EngineConfig, EvalSettings, SearchConfig, StalematePolicy};
pub use error::{ChessEngineError, ChessEngineResult};
pub use make_unmake::MoveGuard;
pub use move_gen::{pseudo_legal_moves, CastlingScan};
pub use moves::Move;
pub use piece::{Piece, PieceId};
pub use player::{Cpu, Player};
pub use position::Position;
pub use search::{ScoredMove, Search, SearchStats};
pub use tile::{parse_move_notation, Tile};
pub use types::{Color, PieceKind};
