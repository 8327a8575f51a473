// File: ./src/client/gateway.rs
//! Interface to the remote board service.
use crate::error::{Error, Result};
use crate::model::{BoardItem, ItemsBySublist};
use std::collections::HashMap;

/// Remote store of boards, each partitioned into named sub-lists of items.
///
/// The scheduler only talks to the service through this trait, so tests can
/// substitute an in-memory board.
#[allow(async_fn_in_trait)]
pub trait BoardGateway {
    /// Sub-list name -> sub-list id for every sub-list on the board.
    async fn list_sublists(&self, board_id: &str) -> Result<HashMap<String, String>>;

    /// Every item on the board, in board order.
    async fn list_items(&self, board_id: &str) -> Result<Vec<BoardItem>>;

    async fn create_item(&self, sublist_id: &str, name: &str) -> Result<()>;

    /// Item names grouped by sub-list name. Every sub-list is present, even when empty.
    async fn get_items_by_sublist(&self, board_id: &str) -> Result<ItemsBySublist> {
        let sublists = self.list_sublists(board_id).await?;
        let names_by_id: HashMap<&str, &str> = sublists
            .iter()
            .map(|(name, id)| (id.as_str(), name.as_str()))
            .collect();

        let mut grouped: ItemsBySublist = sublists
            .keys()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        for item in self.list_items(board_id).await? {
            let sublist = names_by_id.get(item.sublist_id.as_str()).ok_or_else(|| {
                Error::Lookup(format!(
                    "item '{}' is in unknown sub-list '{}' on board '{}'",
                    item.name, item.sublist_id, board_id
                ))
            })?;
            if let Some(items) = grouped.get_mut(*sublist) {
                items.push(item.name);
            }
        }

        log::debug!(
            "Fetched {} sub-lists from board '{}'",
            grouped.len(),
            board_id
        );
        Ok(grouped)
    }

    /// Id of the sub-list named `sublist_name` on the board.
    async fn sublist_id(&self, board_id: &str, sublist_name: &str) -> Result<String> {
        self.list_sublists(board_id)
            .await?
            .remove(sublist_name)
            .ok_or_else(|| {
                Error::Lookup(format!(
                    "sub-list '{}' not found on board '{}'",
                    sublist_name, board_id
                ))
            })
    }
}
