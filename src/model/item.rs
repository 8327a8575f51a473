// File: ./src/model/item.rs
use crate::model::tier::Tier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// A single card on a board, tagged with the sub-list that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub name: String,
    #[serde(rename = "idList")]
    pub sublist_id: String,
}

impl BoardItem {
    pub fn new(name: impl Into<String>, sublist_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sublist_id: sublist_id.into(),
        }
    }
}

/// A sub-list as returned by the board service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sublist {
    pub id: String,
    pub name: String,
}

/// Sub-list name -> item names, in board order.
pub type ItemsBySublist = HashMap<String, Vec<String>>;

/// Recurring item names grouped by tier, read once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurringItemSet {
    items: HashMap<Tier, Vec<String>>,
}

impl RecurringItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from the recurring board's sub-lists.
    /// Sub-lists that are not named after a tier are ignored.
    pub fn from_sublists(sublists: &ItemsBySublist) -> Self {
        let mut set = Self::new();
        for (name, items) in sublists {
            match Tier::from_str(name) {
                Ok(tier) => set.insert(tier, items.clone()),
                Err(_) => log::debug!("Ignoring non-tier sub-list '{}'", name),
            }
        }
        set
    }

    pub fn insert(&mut self, tier: Tier, items: Vec<String>) {
        self.items.insert(tier, items);
    }

    pub fn get(&self, tier: Tier) -> &[String] {
        self.items.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromIterator<(Tier, Vec<String>)> for RecurringItemSet {
    fn from_iter<I: IntoIterator<Item = (Tier, Vec<String>)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
