use std::fmt;

use super::piece::Piece;

/// A resolved capture: the piece kinds on both sides of the exchange.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Capture {
    pub attacker: Piece,
    pub victim: Piece,
}

impl Capture {
    /// Victim value minus attacker value. Winning an exchange scores high,
    /// sacrificing scores low.
    pub fn exchange_score(&self) -> i32 {
        self.victim.point_value() as i32 - self.attacker.point_value() as i32
    }
}

/// The move that produced a search node, reduced to what evaluation and
/// ordering read: its classification plus the capture or promotion payload.
/// By the time a node is observed the move has already been applied by the
/// engine, so a capture's victim is off the board and its value banked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Move {
    Quiet,
    Capture(Capture),
    EnPassant,
    Promotion { piece: Piece },
}

impl Move {
    pub fn capture(&self) -> Option<Capture> {
        match self {
            Move::Capture(capture) => Some(*capture),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet => write!(f, "Move"),
            Move::Capture(capture) => {
                write!(f, "{} takes {}", capture.attacker, capture.victim)
            }
            Move::EnPassant => write!(f, "En Passant"),
            Move::Promotion { piece } => write!(f, "Promote to {}", piece),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_score_favors_cheap_attackers() {
        let pawn_takes_queen = Capture {
            attacker: Piece::Pawn,
            victim: Piece::Queen,
        };
        let queen_takes_pawn = Capture {
            attacker: Piece::Queen,
            victim: Piece::Pawn,
        };
        assert_eq!(pawn_takes_queen.exchange_score(), 8);
        assert_eq!(queen_takes_pawn.exchange_score(), -8);
    }

    #[test]
    fn test_even_exchange_scores_zero() {
        let capture = Capture {
            attacker: Piece::Knight,
            victim: Piece::Bishop,
        };
        assert_eq!(capture.exchange_score(), 0);
    }

    #[test]
    fn test_capture_payload_is_only_on_captures() {
        let capture = Capture {
            attacker: Piece::Rook,
            victim: Piece::Knight,
        };
        assert_eq!(Move::Capture(capture).capture(), Some(capture));
        assert_eq!(Move::Quiet.capture(), None);
        assert_eq!(Move::EnPassant.capture(), None);
        assert_eq!(Move::Promotion { piece: Piece::Queen }.capture(), None);
    }
}
