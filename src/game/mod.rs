//! The read surface shared with the external search engine: piece, move,
//! and coordinate types, the `Position` accessor trait, and the search
//! node this layer is handed at every visit.

pub mod chess_move;
pub mod color;
pub mod coordinate;
pub mod node;
pub mod piece;
pub mod position;
pub mod scripted;

pub use chess_move::{Capture, Move};
pub use color::Color;
pub use coordinate::{Coordinate, Direction, CENTER_SQUARES};
pub use node::SearchNode;
pub use piece::{Piece, ALL_PIECES};
pub use position::{CaptureList, PieceList, PlacedPiece, Position};
pub use scripted::ScriptedPosition;
