//! A scripted board stand-in for tests and benchmarks. It is not a rules
//! engine: this layer never generates moves, so the fixture is told which
//! captures each piece has available.

use rustc_hash::FxHashMap;

use super::chess_move::Capture;
use super::color::Color;
use super::coordinate::Coordinate;
use super::piece::Piece;
use super::position::{CaptureList, PieceList, PlacedPiece, Position};

/// A hand-assembled position: pieces placed square by square, capture moves
/// declared per attacker, and banked point tallies set directly.
pub struct ScriptedPosition {
    files: i16,
    ranks: i16,
    by_coordinate: FxHashMap<Coordinate, PlacedPiece>,
    captures: FxHashMap<Coordinate, CaptureList>,
    banked: [u32; 2],
}

impl Default for ScriptedPosition {
    fn default() -> Self {
        Self::with_bounds(8, 8)
    }
}

impl ScriptedPosition {
    /// An empty 8x8 board.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_bounds(files: i16, ranks: i16) -> Self {
        Self {
            files,
            ranks,
            by_coordinate: FxHashMap::default(),
            captures: FxHashMap::default(),
            banked: [0; 2],
        }
    }

    /// Puts a piece on `coordinate`. Panics if the square is taken; a
    /// scripted position is assembled once and never mutated mid-test.
    pub fn place(&mut self, kind: Piece, owner: Color, coordinate: Coordinate) -> PlacedPiece {
        let piece = PlacedPiece {
            kind,
            owner,
            coordinate,
        };
        let previous = self.by_coordinate.insert(coordinate, piece);
        assert!(
            previous.is_none(),
            "two pieces scripted on {}",
            coordinate
        );
        piece
    }

    /// Declares that the piece standing on `from` can capture a `victim`.
    /// Panics if `from` is empty.
    pub fn script_capture(&mut self, from: Coordinate, victim: Piece) {
        let attacker = self
            .by_coordinate
            .get(&from)
            .unwrap_or_else(|| panic!("no piece on {} to script a capture for", from))
            .kind;
        self.captures
            .entry(from)
            .or_default()
            .push(Capture { attacker, victim });
    }

    /// Credits `points` to `player`'s banked capture total.
    pub fn bank_points(&mut self, player: Color, points: u32) {
        self.banked[player as usize] += points;
    }
}

impl Position for ScriptedPosition {
    fn pieces(&self, player: Color) -> PieceList {
        self.by_coordinate
            .values()
            .filter(|piece| piece.owner == player)
            .copied()
            .collect()
    }

    fn capture_moves(&self, piece: &PlacedPiece) -> CaptureList {
        self.captures
            .get(&piece.coordinate)
            .cloned()
            .unwrap_or_default()
    }

    fn piece_at(&self, coordinate: Coordinate) -> Option<PlacedPiece> {
        self.by_coordinate.get(&coordinate).copied()
    }

    fn is_in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.file >= 0
            && coordinate.rank >= 0
            && coordinate.file < self.files
            && coordinate.rank < self.ranks
    }

    fn points_banked(&self, player: Color) -> u32 {
        self.banked[player as usize]
    }
}
