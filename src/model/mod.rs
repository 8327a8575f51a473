// File: ./src/model/mod.rs
pub mod item;
pub mod resolver;
pub mod rules;
pub mod tier;

pub use item::{BoardItem, ItemsBySublist, RecurringItemSet, Sublist};
pub use resolver::collect_due_items;
pub use rules::{DEFAULT_ANCHOR_WEEKDAY, RuleEngine, due_tiers};
pub use tier::{DueTierList, Tier};
