use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use common::{ItemPurchase, PlayerInfo, PurchaseFilter, Replay};

use super::Store;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Tables {
    replays: HashMap<u64, Replay>,
    players: HashMap<u64, PlayerInfo>,
    purchases: Vec<ItemPurchase>,
}

/// Keeps everything in process memory. Records are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn purchase_count(&self) -> usize {
        self.tables.read().await.purchases.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn save_replay_info(&self, replay: &Replay) -> Result<(), StoreError> {
        // Same shape as a row read back from a SQL backend.
        let info = Replay {
            game_id: replay.game_id,
            strategy_start: replay.strategy_start,
            game_start: replay.game_start,
            game_end: replay.game_end,
            players: replay.players.clone(),
            friendly_name: replay.friendly_name.clone(),
            ..Default::default()
        };
        self.tables.write().await.replays.insert(replay.game_id, info);
        Ok(())
    }

    async fn save_replay_friendly_name(
        &self,
        game_id: u64,
        friendly_name: &str,
    ) -> Result<(), StoreError> {
        if let Some(replay) = self.tables.write().await.replays.get_mut(&game_id) {
            replay.friendly_name = friendly_name.to_string();
        }
        Ok(())
    }

    async fn load_replay_info(&self, game_ids: &[u64]) -> Result<HashMap<u64, Replay>, StoreError> {
        let tables = self.tables.read().await;
        let replays = tables
            .replays
            .iter()
            .filter(|(id, _)| game_ids.is_empty() || game_ids.contains(id))
            .map(|(id, replay)| (*id, replay.clone()))
            .collect();
        Ok(replays)
    }

    async fn save_player_info(&self, player: &PlayerInfo) -> Result<(), StoreError> {
        self.tables
            .write()
            .await
            .players
            .insert(player.steam_id, player.clone());
        Ok(())
    }

    async fn load_player_info(&self) -> Result<HashMap<u64, PlayerInfo>, StoreError> {
        Ok(self.tables.read().await.players.clone())
    }

    async fn save_item_purchase(&self, purchase: &ItemPurchase) -> Result<(), StoreError> {
        self.tables.write().await.purchases.push(purchase.clone());
        Ok(())
    }

    async fn load_item_purchases(
        &self,
        filter: &PurchaseFilter,
    ) -> Result<Vec<ItemPurchase>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .purchases
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
