use std::{io, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout},
    widgets::{Block, Paragraph, Widget},
    DefaultTerminal, Frame,
};
use tictactoe::history::{DisplayOrder, GameHistory};
use ttt_types::Square;

use crate::{board::GridView, moves::HistoryList};

enum Focus {
    Grid,
    History,
}

pub enum Message {
    Quit,
    Play(Square),
    JumpTo(usize),
    ToggleOrder,
    Reset,
}

pub struct App {
    history: GameHistory,
    focus: Focus,
    grid: GridView,
    move_list: HistoryList,
}

impl App {
    pub fn new(descending: bool) -> Self {
        let order = if descending {
            DisplayOrder::Descending
        } else {
            DisplayOrder::Ascending
        };
        let history = GameHistory::with_order(order);
        let grid = GridView::new(&history);
        let move_list = HistoryList::new(&history);
        Self {
            history,
            focus: Focus::Grid,
            grid,
            move_list,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                match message {
                    Message::Quit => break,
                    Message::Play(square) => {
                        self.history.apply_move(square);
                        self.on_state_change();
                    }
                    Message::JumpTo(index) => {
                        self.history.jump_to(index);
                        self.on_state_change();
                    }
                    Message::ToggleOrder => {
                        self.history.toggle_display_order();
                        self.on_state_change();
                    }
                    Message::Reset => {
                        // A new game keeps the chosen sort order.
                        self.history = GameHistory::with_order(self.history.display_order());
                        self.on_state_change();
                    }
                }
            }
        }
        Ok(())
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(Duration::from_millis(100)).ok()? {
            let event = event::read().ok()?;
            let mut pass_down = false;
            if let Event::Key(key_ev) = event {
                match key_ev.code {
                    KeyCode::Char('q') => return Some(Message::Quit),
                    KeyCode::Char('r') => return Some(Message::Reset),
                    KeyCode::Char('s') => return Some(Message::ToggleOrder),
                    KeyCode::Char('g') => self.focus = Focus::Grid,
                    KeyCode::Char('m') => self.focus = Focus::History,
                    _ => {
                        pass_down = true;
                    }
                }
            }
            if pass_down {
                return match self.focus {
                    Focus::Grid => self.grid.update(&event),
                    Focus::History => self.move_list.update(&event),
                };
            }
        }
        None
    }

    fn on_state_change(&mut self) {
        self.grid.on_state_change(&self.history);
        self.move_list.on_state_change(&self.history);
    }

    fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let vertical = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]);
        let [board, right] = horizontal.areas(frame.area());
        let [status, moves] = vertical.areas(right);
        frame.render_widget(self.grid.draw(), board);
        frame.render_widget(self.status_line(), status);
        frame.render_widget(self.move_list.draw(), moves);
    }

    fn status_line(&self) -> impl Widget + '_ {
        Paragraph::new(self.history.status().to_string()).block(Block::bordered().title("Status"))
    }
}
