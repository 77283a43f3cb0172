//! Move ordering for alpha-beta expansion: captures first, ranked by
//! exchange score, then en passant, promotions, and everything else.
//! Surfacing strong moves early is what makes the enclosing search's
//! pruning effective.

use log::debug;

use crate::game::{Move, Position, SearchNode};

/// Which output contract the orderer honors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OrderingMode {
    /// All four buckets, concatenated: sorted captures, en passant,
    /// promotions, then quiet moves and the moveless root. A permutation
    /// of the input.
    #[default]
    Partitioned,
    /// Only the capture bucket, unsorted, in arrival order. Reproduces the
    /// observable output of the engine this layer replaced, which dropped
    /// the other buckets.
    CapturesOnly,
}

/// Reorders a node's child nodes before the search walks them. Stateless;
/// `Default` gives the partitioned contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveOrderer {
    mode: OrderingMode,
}

impl MoveOrderer {
    pub fn new(mode: OrderingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    pub fn order<'a, P: Position>(&self, nodes: Vec<SearchNode<'a, P>>) -> Vec<SearchNode<'a, P>> {
        let mut captures: Vec<(i32, SearchNode<'a, P>)> = Vec::new();
        let mut en_passant: Vec<SearchNode<'a, P>> = Vec::new();
        let mut promotions: Vec<SearchNode<'a, P>> = Vec::new();
        let mut other: Vec<SearchNode<'a, P>> = Vec::new();

        for node in nodes {
            match node.applied_move() {
                Some(Move::Capture(capture)) => {
                    captures.push((capture.exchange_score(), node));
                }
                Some(Move::EnPassant) => en_passant.push(node),
                Some(Move::Promotion { .. }) => promotions.push(node),
                Some(Move::Quiet) | None => other.push(node),
            }
        }

        debug!(
            "ordering children: {} captures, {} en passant, {} promotions, {} other",
            captures.len(),
            en_passant.len(),
            promotions.len(),
            other.len()
        );

        if self.mode == OrderingMode::CapturesOnly {
            return captures.into_iter().map(|(_, node)| node).collect();
        }

        // Stable ascending sort: the lowest victim-minus-attacker exchange
        // is examined first. Equal scores keep their arrival order.
        captures.sort_by_key(|(score, _)| *score);

        let total = captures.len() + en_passant.len() + promotions.len() + other.len();
        let mut ordered = Vec::with_capacity(total);
        ordered.extend(captures.into_iter().map(|(_, node)| node));
        ordered.extend(en_passant);
        ordered.extend(promotions);
        ordered.extend(other);
        ordered
    }
}

/// Orders `nodes` under the default partitioned contract.
pub fn order<'a, P: Position>(nodes: Vec<SearchNode<'a, P>>) -> Vec<SearchNode<'a, P>> {
    MoveOrderer::default().order(nodes)
}
