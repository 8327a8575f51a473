// File: ./src/scheduler.rs
//! One promotion run: due tiers -> recurring items -> missing items created on the active board.
use crate::client::BoardGateway;
use crate::config::Config;
use crate::error::Result;
use crate::model::{DueTierList, RecurringItemSet, RuleEngine, collect_due_items};
use crate::sync::{SyncOptions, create_items};
use chrono::NaiveDate;

/// What a run needs to know about the boards, independent of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub active_board_id: String,
    pub recurring_board_id: String,
    pub target_sublist_name: String,
    pub engine: RuleEngine,
    pub options: SyncOptions,
}

impl Schedule {
    pub fn from_config(config: &Config) -> Self {
        Self {
            active_board_id: config.active_board_id.clone(),
            recurring_board_id: config.recurring_board_id.clone(),
            target_sublist_name: config.target_sublist_name.clone(),
            engine: RuleEngine::new(config.anchor_weekday),
            options: SyncOptions {
                allow_duplicates: config.allow_duplicates,
                dry_run: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub date: NaiveDate,
    pub due_tiers: DueTierList,
    /// Items scheduled under the due tiers, before reconciliation.
    pub candidates: Vec<String>,
    /// Items created (or, in a dry run, that would have been).
    pub created: Vec<String>,
}

/// Promotes the recurring items due on `today` into the active board.
///
/// Nothing is fetched from the gateway on days where no tier is due.
pub async fn add_recurring_items<G: BoardGateway>(
    gateway: &G,
    schedule: &Schedule,
    today: NaiveDate,
) -> Result<RunReport> {
    let due_tiers = schedule.engine.due_tiers(today);
    if due_tiers.is_empty() {
        log::info!(
            "Nothing due on {} (anchor weekday is {})",
            today,
            schedule.engine.anchor()
        );
        return Ok(RunReport {
            date: today,
            due_tiers,
            candidates: Vec::new(),
            created: Vec::new(),
        });
    }
    log::info!("Due tiers for {}: {:?}", today, due_tiers);

    let recurring = RecurringItemSet::from_sublists(
        &gateway
            .get_items_by_sublist(&schedule.recurring_board_id)
            .await?,
    );
    let candidates = collect_due_items(&due_tiers, &recurring);
    log::debug!("{} candidate item(s): {:?}", candidates.len(), candidates);

    let created = create_items(
        gateway,
        &schedule.active_board_id,
        &schedule.target_sublist_name,
        &candidates,
        schedule.options,
    )
    .await?;

    Ok(RunReport {
        date: today,
        due_tiers,
        candidates,
        created,
    })
}
