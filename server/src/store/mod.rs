pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use common::{ItemPurchase, PlayerInfo, PurchaseFilter, Replay};

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Persistence capabilities every backend provides. A failing call never leaves
/// a partially written record behind.
#[async_trait]
pub trait Store: Send + Sync {
    /// Saves or replaces the metadata of a replay (not its purchases or roster
    /// details).
    async fn save_replay_info(&self, replay: &Replay) -> Result<(), StoreError>;
    async fn save_replay_friendly_name(
        &self,
        game_id: u64,
        friendly_name: &str,
    ) -> Result<(), StoreError>;
    /// Loads metadata for the given match ids, or for every replay when
    /// `game_ids` is empty. Unknown ids are simply absent from the result.
    async fn load_replay_info(&self, game_ids: &[u64]) -> Result<HashMap<u64, Replay>, StoreError>;

    async fn save_player_info(&self, player: &PlayerInfo) -> Result<(), StoreError>;
    async fn load_player_info(&self) -> Result<HashMap<u64, PlayerInfo>, StoreError>;

    async fn save_item_purchase(&self, purchase: &ItemPurchase) -> Result<(), StoreError>;
    async fn load_item_purchases(
        &self,
        filter: &PurchaseFilter,
    ) -> Result<Vec<ItemPurchase>, StoreError>;
}

/// The configured backends, keyed by name. Built once at startup and only read
/// afterwards.
#[derive(Clone, Default)]
pub struct StoreSet {
    stores: BTreeMap<String, Arc<dyn Store>>,
}

impl StoreSet {
    pub fn new<I, S>(stores: I) -> Self
    where
        I: IntoIterator<Item = (S, Arc<dyn Store>)>,
        S: Into<String>,
    {
        Self {
            stores: stores
                .into_iter()
                .map(|(name, store)| (name.into(), store))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Store>> {
        self.stores.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Store>)> {
        self.stores.iter().map(|(name, store)| (name.as_str(), store))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stores.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl std::fmt::Debug for StoreSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
