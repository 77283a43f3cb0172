//! Defensive sub-scores: surviving material, the shelter around the king,
//! and the threats the opponent holds.

use crate::game::{Color, Direction, Piece, Position, SearchNode, ALL_PIECES};

use super::offense;
use super::{max_player, min_player, EvaluationError};

fn count_alive<P: Position>(position: &P, player: Color) -> u32 {
    let mut count = 0;
    for kind in ALL_PIECES {
        count += position.alive_count(player, kind) as u32;
    }
    count
}

/// Number of the max player's living pieces, over all kinds.
pub fn alive_count<P: Position>(node: &SearchNode<P>) -> u32 {
    count_alive(node.position(), max_player(node))
}

/// Number of the min player's living pieces. Not part of the defensive
/// total; exposed alongside the other counters for tuning.
pub fn opponent_alive_count<P: Position>(node: &SearchNode<P>) -> u32 {
    count_alive(node.position(), min_player(node))
}

/// Net point value of the occupants of the up-to-eight squares around the
/// max player's king: friendly pieces add, enemy pieces subtract. Clamped
/// at zero; a lost game has utility zero, so king exposure alone cannot
/// drag the score below that floor.
pub fn king_safety<P: Position>(node: &SearchNode<P>) -> Result<u32, EvaluationError> {
    let position = node.position();
    let max = max_player(node);
    let king = position
        .pieces_of_kind(max, Piece::King)
        .into_iter()
        .next()
        .ok_or(EvaluationError::MissingKing { player: max })?;

    let mut total: i64 = 0;
    for direction in Direction::ALL {
        let neighbor = king.coordinate.neighbor(direction);
        if !position.is_in_bounds(neighbor) {
            continue;
        }
        if let Some(occupant) = position.piece_at(neighbor) {
            let value = occupant.kind.point_value() as i64;
            if occupant.owner == max {
                total += value;
            } else {
                total -= value;
            }
        }
    }

    Ok(total.max(0) as u32)
}

/// Number of capture moves the min player has against the max player.
pub fn threats_against<P: Position>(node: &SearchNode<P>) -> u32 {
    offense::available_capture_moves(node.position(), min_player(node))
}

/// Point value of the min player's attacking pieces, counted once per
/// available capture move; the mirror of `offense::threatened_value`.
pub fn threatened_value_against<P: Position>(node: &SearchNode<P>) -> u32 {
    offense::attacking_piece_value(node.position(), min_player(node))
}

/// Defensive score: material still standing plus king shelter, less the
/// opponent's threat count and threat value.
pub fn score<P: Position>(node: &SearchNode<P>) -> Result<f64, EvaluationError> {
    let standing = (alive_count(node) + king_safety(node)?) as f64;
    Ok(standing - threats_against(node) as f64 - threatened_value_against(node) as f64)
}
