use smallvec::SmallVec;

use super::chess_move::Capture;
use super::color::Color;
use super::coordinate::Coordinate;
use super::piece::Piece;

/// A living piece as reported by the engine: its kind, its owner, and where
/// it currently stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacedPiece {
    pub kind: Piece,
    pub owner: Color,
    pub coordinate: Coordinate,
}

pub type PieceList = SmallVec<[PlacedPiece; 16]>;
pub type CaptureList = SmallVec<[Capture; 8]>;

/// Read-only view of a board snapshot. The external search engine owns the
/// board and all mutation; this layer only queries it between moves, so a
/// position must not change while a call is in flight.
pub trait Position {
    /// Living pieces owned by `player`.
    fn pieces(&self, player: Color) -> PieceList;

    /// Capture moves currently available to `piece`.
    fn capture_moves(&self, piece: &PlacedPiece) -> CaptureList;

    /// The piece standing on `coordinate`, if any.
    fn piece_at(&self, coordinate: Coordinate) -> Option<PlacedPiece>;

    /// Whether `coordinate` is on the board.
    fn is_in_bounds(&self, coordinate: Coordinate) -> bool;

    /// Points `player` has banked from captures resolved so far.
    fn points_banked(&self, player: Color) -> u32;

    /// Living pieces of `player`, restricted to `kind`.
    fn pieces_of_kind(&self, player: Color, kind: Piece) -> PieceList {
        self.pieces(player)
            .into_iter()
            .filter(|piece| piece.kind == kind)
            .collect()
    }

    /// Number of `player`'s living pieces of `kind`.
    fn alive_count(&self, player: Color, kind: Piece) -> usize {
        self.pieces_of_kind(player, kind).len()
    }

    fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.piece_at(coordinate).is_some()
    }
}
