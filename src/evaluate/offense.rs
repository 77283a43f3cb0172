//! Offensive sub-scores: the threats the max player has in hand and its
//! hold on the board center.

use crate::game::{Color, Move, Position, SearchNode, CENTER_SQUARES};

use super::max_player;

/// Number of capture moves available to all of `player`'s living pieces.
pub(crate) fn available_capture_moves<P: Position>(position: &P, player: Color) -> u32 {
    let mut count = 0;
    for piece in position.pieces(player) {
        count += position.capture_moves(&piece).len() as u32;
    }
    count
}

/// Sum over every capture move available to `player` of the attacking
/// piece's point value. Values the attacker, not the victim.
pub(crate) fn attacking_piece_value<P: Position>(position: &P, player: Color) -> u32 {
    let mut total = 0;
    for piece in position.pieces(player) {
        total += position.capture_moves(&piece).len() as u32 * piece.kind.point_value();
    }
    total
}

/// Number of capture moves the max player has on the board.
pub fn threat_count<P: Position>(node: &SearchNode<P>) -> u32 {
    available_capture_moves(node.position(), max_player(node))
}

/// Point value of the max player's attacking pieces, counted once per
/// available capture move.
pub fn threatened_value<P: Position>(node: &SearchNode<P>) -> u32 {
    attacking_piece_value(node.position(), max_player(node))
}

/// Number of center squares occupied by a max-player piece.
pub fn center_control<P: Position>(node: &SearchNode<P>) -> u32 {
    let position = node.position();
    let max = max_player(node);
    CENTER_SQUARES
        .iter()
        .filter(|&&square| matches!(position.piece_at(square), Some(piece) if piece.owner == max))
        .count() as u32
}

/// Offensive score. Starts from the points the max player has already
/// banked from resolved captures, plus the promoted piece's value when the
/// node was reached by a max-player promotion, then adds the threat
/// counters and center control.
pub fn score<P: Position>(node: &SearchNode<P>) -> f64 {
    let max = max_player(node);
    let mut banked = node.position().points_banked(max) as f64;

    // The mover at a child node is the previous player; the turn pointer
    // has already advanced past them.
    if let Some(Move::Promotion { piece }) = node.applied_move() {
        if node.other_player() == max {
            banked += piece.point_value() as f64;
        }
    }

    banked + (threat_count(node) + threatened_value(node) + center_control(node)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coordinate, Piece, ScriptedPosition};

    fn node<'a>(
        position: &'a ScriptedPosition,
        applied_move: Option<Move>,
        current_player: Color,
    ) -> SearchNode<'a, ScriptedPosition> {
        SearchNode::new(position, applied_move, Color::White, current_player)
    }

    #[test]
    fn test_no_captures_means_no_threats() {
        let mut position = ScriptedPosition::new();
        position.place(Piece::King, Color::White, Coordinate::new(4, 0));
        position.place(Piece::Rook, Color::White, Coordinate::new(0, 0));

        let node = node(&position, None, Color::White);
        assert_eq!(threat_count(&node), 0);
        assert_eq!(threatened_value(&node), 0);
    }

    #[test]
    fn test_threat_count_totals_capture_moves_across_pieces() {
        let mut position = ScriptedPosition::new();
        position.place(Piece::Rook, Color::White, Coordinate::new(0, 0));
        position.place(Piece::Knight, Color::White, Coordinate::new(6, 5));
        position.script_capture(Coordinate::new(0, 0), Piece::Pawn);
        position.script_capture(Coordinate::new(0, 0), Piece::Bishop);
        position.script_capture(Coordinate::new(6, 5), Piece::Queen);

        // Min player's captures must not leak into the max player's count.
        position.place(Piece::Queen, Color::Black, Coordinate::new(3, 7));
        position.script_capture(Coordinate::new(3, 7), Piece::Rook);

        let node = node(&position, None, Color::White);
        assert_eq!(threat_count(&node), 3);
    }

    #[test]
    fn test_threatened_value_counts_the_attacker_per_capture() {
        let mut position = ScriptedPosition::new();
        position.place(Piece::Rook, Color::White, Coordinate::new(0, 0));
        position.place(Piece::Pawn, Color::White, Coordinate::new(4, 4));
        position.script_capture(Coordinate::new(0, 0), Piece::Pawn);
        position.script_capture(Coordinate::new(0, 0), Piece::Queen);
        position.script_capture(Coordinate::new(4, 4), Piece::Queen);

        // Two rook captures and one pawn capture: 5 + 5 + 1, regardless of
        // the victims' values.
        let node = node(&position, None, Color::White);
        assert_eq!(threatened_value(&node), 11);
    }

    #[test]
    fn test_center_control_counts_only_max_player_pieces() {
        let mut position = ScriptedPosition::new();
        position.place(Piece::Pawn, Color::White, Coordinate::new(3, 3));
        position.place(Piece::Knight, Color::White, Coordinate::new(4, 4));
        position.place(Piece::Pawn, Color::Black, Coordinate::new(4, 3));
        position.place(Piece::Rook, Color::White, Coordinate::new(0, 0));

        let node = node(&position, None, Color::White);
        assert_eq!(center_control(&node), 2);
    }

    #[test]
    fn test_score_starts_from_banked_points() {
        let mut position = ScriptedPosition::new();
        position.bank_points(Color::White, 9);
        position.bank_points(Color::Black, 4);

        let node = node(&position, Some(Move::Quiet), Color::Black);
        assert_eq!(score(&node), 9.0);
    }

    #[test]
    fn test_promotion_by_max_player_adds_the_promoted_value() {
        let position = ScriptedPosition::new();

        // White just promoted, so it is black's turn at this node.
        let promotion = Move::Promotion {
            piece: Piece::Queen,
        };
        let after_max_promotes = node(&position, Some(promotion), Color::Black);
        assert_eq!(score(&after_max_promotes), 9.0);
    }

    #[test]
    fn test_promotion_by_min_player_adds_nothing() {
        let position = ScriptedPosition::new();

        let promotion = Move::Promotion {
            piece: Piece::Queen,
        };
        let after_min_promotes = node(&position, Some(promotion), Color::White);
        assert_eq!(score(&after_min_promotes), 0.0);
    }

    #[test]
    fn test_root_node_scores_without_a_move() {
        let mut position = ScriptedPosition::new();
        position.place(Piece::Pawn, Color::White, Coordinate::new(3, 4));

        let root = node(&position, None, Color::White);
        assert_eq!(score(&root), 1.0);
    }
}
