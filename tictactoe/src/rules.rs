use smallvec::SmallVec;
use ttt_types::{Board, Outcome, Square, LINES};

/// Evaluate one board snapshot. Lines are checked in the fixed
/// enumeration order of [`LINES`] and the first full line wins.
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line.squares();
        if let Some(player) = board.get(a) {
            if board.get(b) == Some(player) && board.get(c) == Some(player) {
                return Outcome::Won { line, player };
            }
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// A square is playable while the game is undecided and the square is free.
#[must_use]
pub fn can_play(board: &Board, square: Square) -> bool {
    evaluate(board).is_in_progress() && board.is_free(square)
}

/// Every playable square in index order. Empty once the game is decided.
#[must_use]
pub fn legal_moves(board: &Board) -> SmallVec<Square, 9> {
    if !evaluate(board).is_in_progress() {
        return SmallVec::new();
    }
    board.free_squares().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_types::Player;

    fn board_from(marks: &[(u8, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::EMPTY, |board, (index, player)| {
                board.with(Square::new(*index), *player)
            })
    }

    #[test]
    fn empty_board_in_progress() {
        assert_eq!(evaluate(&Board::EMPTY), Outcome::InProgress);
    }

    #[test]
    fn full_row_wins() {
        use Player::*;
        let board = board_from(&[(0, X), (4, O), (1, X), (3, O), (2, X)]);

        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(X));
        assert!(outcome.is_winning_square(Square::new(0)));
        assert!(outcome.is_winning_square(Square::new(1)));
        assert!(outcome.is_winning_square(Square::new(2)));
        assert!(!outcome.is_winning_square(Square::new(4)));
    }

    #[test]
    fn column_and_diagonal_win() {
        use Player::*;
        let column = board_from(&[(1, O), (4, O), (7, O)]);
        assert_eq!(evaluate(&column).winner(), Some(O));

        let diagonal = board_from(&[(2, X), (4, X), (6, X)]);
        assert_eq!(evaluate(&diagonal).winner(), Some(X));
    }

    #[test]
    fn full_board_without_line_draws() {
        use Player::*;
        // X O X
        // X O O
        // O X X
        let board = board_from(&[
            (0, X),
            (1, O),
            (2, X),
            (3, X),
            (4, O),
            (5, O),
            (6, O),
            (7, X),
            (8, X),
        ]);

        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn first_line_in_enumeration_order_reported() {
        use Player::*;
        // Both the top row and the left column belong to X; the row comes
        // first in the enumeration.
        let board = board_from(&[(0, X), (1, X), (2, X), (3, X), (6, X)]);

        match evaluate(&board) {
            Outcome::Won { line, player } => {
                assert_eq!(player, X);
                assert_eq!(line, LINES[0]);
            }
            outcome => panic!("expected a win, got {outcome:?}"),
        }
    }

    #[test]
    fn can_play_gates_on_occupancy_and_outcome() {
        use Player::*;
        let board = board_from(&[(4, X)]);
        assert!(!can_play(&board, Square::new(4)));
        assert!(can_play(&board, Square::new(0)));

        let won = board_from(&[(0, X), (3, O), (1, X), (4, O), (2, X)]);
        assert!(!can_play(&won, Square::new(8)));
    }

    #[test]
    fn legal_moves_match_free_squares_until_decided() {
        use Player::*;
        assert_eq!(legal_moves(&Board::EMPTY).len(), 9);

        let board = board_from(&[(4, X), (0, O)]);
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|square| board.is_free(*square)));

        let won = board_from(&[(0, X), (3, O), (1, X), (4, O), (2, X)]);
        assert!(legal_moves(&won).is_empty());
    }
}
