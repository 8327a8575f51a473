// In-memory board service shared by the integration tests.
#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Mutex;
use tickler::client::BoardGateway;
use tickler::model::BoardItem;
use tickler::{Error, Result};

pub const ACTIVE: &str = "active";
pub const RECURRING: &str = "recurring";

#[derive(Debug, Default)]
pub struct FakeBoards {
    /// board id -> (sub-list name, sub-list id)
    sublists: HashMap<String, Vec<(String, String)>>,
    /// board id -> items, in board order
    items: Mutex<HashMap<String, Vec<BoardItem>>>,
    created: Mutex<Vec<(String, String)>>,
    fail_on: Option<String>,
    pub list_calls: Mutex<usize>,
}

impl FakeBoards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sublist(mut self, board_id: &str, name: &str) -> Self {
        let id = format!("{}-{}", board_id, name);
        self.sublists
            .entry(board_id.to_string())
            .or_default()
            .push((name.to_string(), id));
        self
    }

    pub fn with_items(self, board_id: &str, sublist: &str, names: &[&str]) -> Self {
        let id = format!("{}-{}", board_id, sublist);
        {
            let mut items = self.items.lock().unwrap();
            let board = items.entry(board_id.to_string()).or_default();
            for name in names {
                board.push(BoardItem::new(*name, id.clone()));
            }
        }
        self
    }

    /// Creating an item with this name fails with a remote error.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    /// Recurring board with Weekly/Monthly/Quarterly lists and an active board with AQ.
    pub fn standard() -> Self {
        Self::new()
            .with_sublist(RECURRING, "Weekly")
            .with_sublist(RECURRING, "Monthly")
            .with_sublist(RECURRING, "Quarterly")
            .with_sublist(RECURRING, "Notes")
            .with_sublist(ACTIVE, "AQ")
            .with_sublist(ACTIVE, "Done")
            .with_items(RECURRING, "Weekly", &["Review inbox", "Plan week"])
            .with_items(RECURRING, "Monthly", &["Pay rent"])
            .with_items(RECURRING, "Quarterly", &["File taxes"])
            .with_items(RECURRING, "Notes", &["Not scheduled"])
    }

    pub fn created(&self) -> Vec<(String, String)> {
        self.created.lock().unwrap().clone()
    }

    pub fn items_in(&self, board_id: &str, sublist: &str) -> Vec<String> {
        let id = format!("{}-{}", board_id, sublist);
        self.items
            .lock()
            .unwrap()
            .get(board_id)
            .map(|items| {
                items
                    .iter()
                    .filter(|i| i.sublist_id == id)
                    .map(|i| i.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl BoardGateway for FakeBoards {
    async fn list_sublists(&self, board_id: &str) -> Result<HashMap<String, String>> {
        *self.list_calls.lock().unwrap() += 1;
        let lists = self
            .sublists
            .get(board_id)
            .ok_or_else(|| Error::Remote(format!("404 board {}", board_id)))?;
        Ok(lists.iter().cloned().collect())
    }

    async fn list_items(&self, board_id: &str) -> Result<Vec<BoardItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .get(board_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_item(&self, sublist_id: &str, name: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(Error::Remote(format!("500 creating {}", name)));
        }
        let board_id = self
            .sublists
            .iter()
            .find(|(_, lists)| lists.iter().any(|(_, id)| id == sublist_id))
            .map(|(board, _)| board.clone())
            .ok_or_else(|| Error::Remote(format!("unknown list {}", sublist_id)))?;

        self.items
            .lock()
            .unwrap()
            .entry(board_id)
            .or_default()
            .push(BoardItem::new(name, sublist_id));
        self.created
            .lock()
            .unwrap()
            .push((sublist_id.to_string(), name.to_string()));
        Ok(())
    }
}
