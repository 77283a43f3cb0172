use std::fmt;

/// File/rank pair, zero-based from the board's lower-left corner. Signed so
/// that neighbor arithmetic can step off the board; whether a coordinate is
/// actually on the board is the position's call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coordinate {
    pub file: i16,
    pub rank: i16,
}

/// The four central squares of an 8x8-or-larger board (d4, e4, d5, e5).
pub const CENTER_SQUARES: [Coordinate; 4] = [
    Coordinate::new(3, 3),
    Coordinate::new(4, 3),
    Coordinate::new(3, 4),
    Coordinate::new(4, 4),
];

impl Coordinate {
    pub const fn new(file: i16, rank: i16) -> Self {
        Self { file, rank }
    }

    /// The adjacent coordinate one step in `direction`. May land off the
    /// board.
    pub fn neighbor(&self, direction: Direction) -> Coordinate {
        let (file_step, rank_step) = direction.offsets();
        Coordinate::new(self.file + file_step, self.rank + rank_step)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// The eight compass directions around a square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    fn offsets(&self) -> (i16, i16) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}
