use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode},
    text::Line,
    widgets::{Block, Borders, List, Widget},
};
use tictactoe::history::{DisplayOrder, GameHistory, MoveEntry};

use crate::app::Message;

pub struct HistoryList {
    entries: Vec<MoveEntry>,
    order: DisplayOrder,
    selected: usize,
}

impl HistoryList {
    pub fn new(history: &GameHistory) -> Self {
        Self {
            entries: history.move_list(),
            order: history.display_order(),
            selected: 0,
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Enter => {
                    if let Some(entry) = self.entries.get(self.selected) {
                        if entry.is_jump_target() {
                            return Some(Message::JumpTo(entry.index));
                        }
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, history: &GameHistory) {
        let selected = self.selected.min(history.len() - 1);
        *self = Self {
            entries: history.move_list(),
            order: history.display_order(),
            selected,
        };
    }

    fn label(entry: MoveEntry) -> String {
        let step = if entry.index == 0 {
            "game start".to_string()
        } else {
            format!("step {}", entry.index)
        };
        if entry.is_jump_target() {
            format!("Go to {step}")
        } else {
            format!("You are at {step}")
        }
    }

    pub fn draw(&self) -> impl Widget + '_ {
        // The hint names the action the toggle will take, not the current order.
        let sort_hint = match self.order {
            DisplayOrder::Ascending => "[s] Sort Descending",
            DisplayOrder::Descending => "[s] Sort Ascending",
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw("History").left_aligned())
            .title_bottom(Line::raw(sort_hint).right_aligned());
        let items = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                format!(
                    "{}{}",
                    if idx == self.selected { '>' } else { ' ' },
                    Self::label(*entry)
                )
            })
            .collect_vec();
        List::new(items).block(block).highlight_symbol(">")
    }
}
