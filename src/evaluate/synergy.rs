//! Superlinear bonus for holding multiple copies of a piece kind: a pair
//! of bishops is worth more than two lone bishops.

use crate::game::{Piece, Position, SearchNode};

use super::max_player;

/// Exponent applied to the living count of each kind in `PAIRED_KINDS`.
pub const SYNERGY_EXPONENT: f64 = 1.5;

// Kinds the game can hold more than one of, promotion included.
const PAIRED_KINDS: [Piece; 4] = [Piece::Bishop, Piece::Knight, Piece::Rook, Piece::Queen];

/// Synergy score: the max player's living count of each paired kind raised
/// to `SYNERGY_EXPONENT`, summed across kinds.
pub fn score<P: Position>(node: &SearchNode<P>) -> f64 {
    let position = node.position();
    let max = max_player(node);
    PAIRED_KINDS
        .iter()
        .map(|&kind| (position.alive_count(max, kind) as f64).powf(SYNERGY_EXPONENT))
        .sum()
}
