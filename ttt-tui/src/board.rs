use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use tictactoe::{history::GameHistory, rules};
use ttt_types::{Board, Outcome, Square};

use crate::app::Message;

pub struct GridView {
    board: Board,
    outcome: Outcome,
    cursor: Square,
}

impl GridView {
    pub fn new(history: &GameHistory) -> Self {
        let board = history.current();
        Self {
            board,
            outcome: rules::evaluate(&board),
            cursor: Square::new(4),
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            let (row, col) = (self.cursor.row(), self.cursor.col());
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.cursor = Square::from_row_col(row, (col + 2) % 3);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.cursor = Square::from_row_col(row, (col + 1) % 3);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = Square::from_row_col((row + 2) % 3, col);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.cursor = Square::from_row_col((row + 1) % 3, col);
                }
                KeyCode::Tab => self.focus_next_free(),
                KeyCode::Enter => return Some(Message::Play(self.cursor)),
                _ => {}
            }
        }
        None
    }

    fn focus_next_free(&mut self) {
        let moves = rules::legal_moves(&self.board);
        let after = moves
            .iter()
            .copied()
            .find(|square| square.index() > self.cursor.index());
        if let Some(next) = after.or_else(|| moves.first().copied()) {
            self.cursor = next;
        }
    }

    pub fn on_state_change(&mut self, history: &GameHistory) {
        self.board = history.current();
        self.outcome = rules::evaluate(&self.board);
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                lines.push(Line::raw("───┼───┼───"));
            }
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::raw("│"));
                }
                let square = Square::from_row_col(row, col);
                spans.push(Span::styled(
                    self.square_text(square),
                    self.square_style(square),
                ));
            }
            lines.push(Line::from(spans));
        }
        Paragraph::new(Text::from(lines))
            .centered()
            .block(Block::bordered().title("Board"))
    }

    fn square_text(&self, square: Square) -> String {
        match self.board.get(square) {
            Some(player) => format!(" {player} "),
            None => "   ".to_string(),
        }
    }

    fn square_style(&self, square: Square) -> Style {
        let mut style = Style::default();
        if self.outcome.is_winning_square(square) {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        // No cursor once the game is decided; there is nothing to play.
        if square == self.cursor && self.outcome.is_in_progress() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}
