use serde::{Deserialize, Serialize};

use crate::square::Square;

/// All winning triples, in fixed enumeration order: rows, columns,
/// then the two diagonals. `evaluate` reports the first match, so the
/// order is part of the contract.
pub const LINES: [Line; 8] = [
    Line::new([Square::new(0), Square::new(1), Square::new(2)]),
    Line::new([Square::new(3), Square::new(4), Square::new(5)]),
    Line::new([Square::new(6), Square::new(7), Square::new(8)]),
    Line::new([Square::new(0), Square::new(3), Square::new(6)]),
    Line::new([Square::new(1), Square::new(4), Square::new(7)]),
    Line::new([Square::new(2), Square::new(5), Square::new(8)]),
    Line::new([Square::new(0), Square::new(4), Square::new(8)]),
    Line::new([Square::new(2), Square::new(4), Square::new(6)]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line([Square; 3]);

impl Line {
    #[must_use]
    pub const fn new(squares: [Square; 3]) -> Self {
        Self(squares)
    }

    #[must_use]
    pub const fn squares(self) -> [Square; 3] {
        self.0
    }

    #[must_use]
    pub fn contains(self, square: Square) -> bool {
        self.0.contains(&square)
    }
}
