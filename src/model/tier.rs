// File: ./src/model/tier.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Recurrence classification of a recurring item.
///
/// The string form doubles as the sub-list name on the recurring board,
/// so `"Weekly"` holds the weekly items and so on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Tier {
    Weekly,
    Monthly,
    Quarterly,
}

impl Tier {
    /// Name of the sub-list holding this tier's items on the recurring board.
    pub fn sublist_name(&self) -> &'static str {
        self.into()
    }
}

/// Tiers due on a given date, most specific first.
pub type DueTierList = Vec<Tier>;
