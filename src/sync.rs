// File: ./src/sync.rs
//! Reconciles candidate items against a destination sub-list and creates the missing ones.
use crate::client::BoardGateway;
use crate::error::Result;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Create every candidate, even when the destination already holds it.
    pub allow_duplicates: bool,
    /// Compute the create list without calling the gateway's create operation.
    pub dry_run: bool,
}

/// Names from `candidates` that must be created in the destination.
///
/// Comparison is exact string equality. Repeated candidates that are absent
/// from the destination are all kept.
pub fn create_missing<S>(
    destination: &HashSet<S>,
    candidates: &[String],
    allow_duplicates: bool,
) -> Vec<String>
where
    S: Borrow<str> + Eq + Hash,
{
    if allow_duplicates {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .filter(|name| !destination.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Creates the missing `candidates` in `sublist_name` on `board_id`, one at a time.
///
/// Returns the names created (or, in a dry run, the names that would be).
/// Stops at the first failed create; items created before it stay created.
pub async fn create_items<G: BoardGateway>(
    gateway: &G,
    board_id: &str,
    sublist_name: &str,
    candidates: &[String],
    options: SyncOptions,
) -> Result<Vec<String>> {
    let sublist_id = gateway.sublist_id(board_id, sublist_name).await?;

    let to_create = if options.allow_duplicates {
        create_missing(&HashSet::<String>::new(), candidates, true)
    } else {
        let existing: HashSet<String> = gateway
            .get_items_by_sublist(board_id)
            .await?
            .remove(sublist_name)
            .unwrap_or_default()
            .into_iter()
            .collect();
        let missing = create_missing(&existing, candidates, false);
        let skipped = candidates.len() - missing.len();
        if skipped > 0 {
            log::info!(
                "Skipping {} item(s) already in '{}'",
                skipped,
                sublist_name
            );
        }
        missing
    };

    if options.dry_run {
        for name in &to_create {
            log::warn!("Dry run: would create '{}' in '{}'", name, sublist_name);
        }
        return Ok(to_create);
    }

    for name in &to_create {
        gateway.create_item(&sublist_id, name).await?;
        log::info!("Created '{}' in '{}'", name, sublist_name);
    }
    Ok(to_create)
}

/// Single-item form of [`create_items`].
pub async fn create_item<G: BoardGateway>(
    gateway: &G,
    board_id: &str,
    sublist_name: &str,
    name: &str,
    options: SyncOptions,
) -> Result<bool> {
    let created = create_items(
        gateway,
        board_id,
        sublist_name,
        &[name.to_string()],
        options,
    )
    .await?;
    Ok(!created.is_empty())
}
