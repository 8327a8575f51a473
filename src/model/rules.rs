// File: ./src/model/rules.rs
//! Calendar rules deciding which recurrence tiers fire on a date.
//!
//! The tiers cascade: a date is only checked for `Monthly` once it matched
//! `Weekly`, and only checked for `Quarterly` once it matched `Monthly`.
use crate::model::tier::{DueTierList, Tier};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Weekday on which recurring items are promoted unless configured otherwise.
pub const DEFAULT_ANCHOR_WEEKDAY: Weekday = Weekday::Sun;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEngine {
    anchor: Weekday,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR_WEEKDAY)
    }
}

impl RuleEngine {
    pub fn new(anchor: Weekday) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> Weekday {
        self.anchor
    }

    /// Returns the tiers due on `date`, most specific first.
    pub fn due_tiers(&self, date: NaiveDate) -> DueTierList {
        let mut matches = Vec::new();

        if date.weekday() == self.anchor {
            matches.push(Tier::Weekly);

            if is_last_weekday_of_month(date) {
                matches.push(Tier::Monthly);

                if date.month() % 3 == 0 {
                    matches.push(Tier::Quarterly);
                }
            }
        }

        matches.reverse();
        matches
    }
}

/// True when no later day of the same weekday exists in `date`'s month.
pub fn is_last_weekday_of_month(date: NaiveDate) -> bool {
    match date.checked_add_days(Days::new(7)) {
        Some(next) => next.month() != date.month(),
        // Past the end of the representable calendar
        None => true,
    }
}

/// Shorthand for `RuleEngine::new(anchor).due_tiers(date)`.
pub fn due_tiers(date: NaiveDate, anchor: Weekday) -> DueTierList {
    RuleEngine::new(anchor).due_tiers(date)
}
