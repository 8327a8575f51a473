// File: ./src/model/resolver.rs
use crate::model::item::RecurringItemSet;
use crate::model::tier::Tier;

/// Expands due tiers into item names, in tier order then board order.
///
/// The same name registered under several due tiers is emitted once per tier.
pub fn collect_due_items(due_tiers: &[Tier], recurring: &RecurringItemSet) -> Vec<String> {
    let mut items = Vec::new();
    for tier in due_tiers {
        items.extend(recurring.get(*tier).iter().cloned());
    }
    items
}
