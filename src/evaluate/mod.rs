//! Heuristic evaluation of a search node, always from the perspective of
//! the player fixed as maximizing at the search root. The score is the
//! unit-weight sum of three named sub-scores so each term can be tuned and
//! tested on its own.

use log::debug;
use thiserror::Error;

use crate::game::{Color, Position, SearchNode};

pub mod defense;
pub mod offense;
pub mod synergy;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("no living king for {player}")]
    MissingKing { player: Color },
}

/// The player fixed as maximizing when the search began. Stored once on the
/// node and inherited unchanged by every descendant; never derived from
/// whose turn it is.
pub fn max_player<P: Position>(node: &SearchNode<P>) -> Color {
    node.max_player()
}

/// The side opposing the max player at this node. The turn pointer flips
/// every ply, so this is recomputed per node rather than fixed.
pub fn min_player<P: Position>(node: &SearchNode<P>) -> Color {
    if max_player(node) == node.current_player() {
        node.other_player()
    } else {
        node.current_player()
    }
}

/// Scores `node` for the max player; higher is better. The result does not
/// depend on whose turn it is at the node.
pub fn evaluate<P: Position>(node: &SearchNode<P>) -> Result<f64, EvaluationError> {
    let offense = offense::score(node);
    let defense = defense::score(node)?;
    let synergy = synergy::score(node);
    let total = offense + defense + synergy;

    debug!(
        "evaluated node for {}: offense={} defense={} synergy={} total={}",
        max_player(node),
        offense,
        defense,
        synergy,
        total
    );

    Ok(total)
}
