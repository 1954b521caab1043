use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{player::Player, square::Square, ALL_SQUARES};

/// One complete snapshot of the 3x3 grid. A move never mutates a board,
/// it produces a new one via [`Board::with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Board([Option<Player>; 9]);

impl Board {
    pub const EMPTY: Self = Self([None; 9]);

    #[must_use]
    #[inline(always)]
    pub const fn get(self, square: Square) -> Option<Player> {
        self.0[square.index()]
    }

    #[must_use]
    #[inline(always)]
    pub const fn is_free(self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Copy of this board with `square` marked for `player`.
    ///
    /// # Panics
    /// If `square` is already occupied
    #[must_use]
    pub fn with(self, square: Square, player: Player) -> Self {
        assert!(self.is_free(square));
        let mut cells = self.0;
        cells[square.index()] = Some(player);
        Self(cells)
    }

    pub fn iter(self) -> impl Iterator<Item = (Square, Option<Player>)> {
        ALL_SQUARES.into_iter().map(move |square| (square, self.get(square)))
    }

    pub fn free_squares(self) -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter().filter(move |square| self.is_free(*square))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.get(Square::from_row_col(row, col)) {
                    Some(player) => write!(f, " {player} ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
