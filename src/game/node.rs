use super::chess_move::Move;
use super::color::Color;
use super::position::Position;

/// One visited node of the game tree: a position borrowed from the engine,
/// the move that produced it (absent at the search root), the player fixed
/// as maximizing when the search began, and the player to move here.
///
/// Nodes are created and discarded by the engine as it expands and
/// backtracks; this layer only reads them.
pub struct SearchNode<'a, P: Position> {
    position: &'a P,
    applied_move: Option<Move>,
    max_player: Color,
    current_player: Color,
}

impl<'a, P: Position> SearchNode<'a, P> {
    pub fn new(
        position: &'a P,
        applied_move: Option<Move>,
        max_player: Color,
        current_player: Color,
    ) -> Self {
        Self {
            position,
            applied_move,
            max_player,
            current_player,
        }
    }

    pub fn position(&self) -> &'a P {
        self.position
    }

    /// The move whose application produced this position. `None` at the
    /// search root.
    pub fn applied_move(&self) -> Option<Move> {
        self.applied_move
    }

    /// The maximizing player, inherited unchanged from the search root.
    pub fn max_player(&self) -> Color {
        self.max_player
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn other_player(&self) -> Color {
        self.current_player.opposite()
    }
}

// A node is a couple of words wide regardless of the position type, so it
// copies freely; a derive would demand `P: Copy`.
impl<P: Position> Clone for SearchNode<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Position> Copy for SearchNode<'_, P> {}
