use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const ALL_SQUARES: [Square; 9] = [
    Square::new(0),
    Square::new(1),
    Square::new(2),
    Square::new(3),
    Square::new(4),
    Square::new(5),
    Square::new(6),
    Square::new(7),
    Square::new(8),
];

/// Cell index on the 3x3 grid, row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Square(u8);

impl Square {
    /// # Panics
    /// If `index` is not within 0..9
    #[must_use]
    #[inline(always)]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9);
        Self(index)
    }

    /// # Panics
    /// If `row` or `col` is not within 0..3
    #[must_use]
    #[inline(always)]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3);
        Self(row * 3 + col)
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    #[must_use]
    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
