#![allow(dead_code)]

use async_trait::async_trait;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ::common::{ItemPurchase, PlayerInfo, PurchaseFilter, Replay};
use server::StoreError;
use server::store::{MemoryStore, Store, StoreSet};

pub const GAME_ID: u64 = 12345;
pub const SNIPER_STEAM_ID: u64 = 76561;
pub const SNIPER: &str = "npc_dota_hero_sniper";

/// The match 12345 scenario: one sniper player, two purchases, one of them
/// made by a hero that is not in the roster.
pub fn sample_replay() -> Replay {
    let mut replay = Replay::new(GAME_ID);
    replay.strategy_start = 10.0;
    replay.game_start = 90.0;
    replay.game_end = 2400.0;
    replay.players.insert(SNIPER.to_string(), SNIPER_STEAM_ID);
    replay.player_info.push(PlayerInfo {
        steam_id: SNIPER_STEAM_ID,
        team: String::new(),
        name: "Sharpshooter".to_string(),
    });
    replay
        .item_purchases
        .push(ItemPurchase::new("item_tango", "npc_dota_hero_axe", 5.0));
    replay
        .item_purchases
        .push(ItemPurchase::new("item_blink", SNIPER, 300.0));
    replay.resolve_purchases();
    replay
}

/// The demo export lines that decode to [`sample_replay`].
pub fn sample_demo_lines() -> Vec<Value> {
    vec![
        json!({"type": "string_table", "table": "CombatLogNames", "index": 1, "value": "item_blink"}),
        json!({"type": "string_table", "table": "CombatLogNames", "index": 2, "value": SNIPER}),
        json!({"type": "string_table", "table": "CombatLogNames", "index": 3, "value": "item_tango"}),
        json!({"type": "string_table", "table": "CombatLogNames", "index": 4, "value": "npc_dota_hero_axe"}),
        json!({"type": "combat_log_entry", "log_type": 9, "value": 3, "timestamp": 10.0}),
        json!({"type": "combat_log_entry", "log_type": 11, "value": 3, "target_name": 4, "timestamp": 5.0}),
        json!({"type": "combat_log_entry", "log_type": 9, "value": 5, "timestamp": 90.0}),
        json!({"type": "combat_log_entry", "log_type": 11, "value": 1, "target_name": 2, "timestamp": 300.0}),
        json!({"type": "combat_log_entry", "log_type": 9, "value": 6, "timestamp": 2400.0}),
        json!({"type": "net_tick", "tick": 99000}),
        json!({"type": "combat_log_entry", "log_type": 9, "value": 6, "timestamp": 2410.0}),
        json!({
            "type": "file_info",
            "match_id": GAME_ID,
            "players": [
                {"steam_id": SNIPER_STEAM_ID, "player_name": "Sharpshooter", "hero_name": SNIPER}
            ]
        }),
    ]
}

/// Compresses `lines` into a replay container.
pub fn demo_container(lines: &[Value]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in lines {
        serde_json::to_writer(&mut encoder, line).unwrap();
        encoder.write_all(b"\n").unwrap();
    }
    encoder.finish().unwrap()
}

pub fn memory_stores(names: &[&str]) -> (StoreSet, Vec<Arc<MemoryStore>>) {
    let stores: Vec<Arc<MemoryStore>> = names.iter().map(|_| Arc::new(MemoryStore::new())).collect();
    let set = StoreSet::new(
        names
            .iter()
            .zip(&stores)
            .map(|(name, store)| (*name, Arc::clone(store) as Arc<dyn Store>)),
    );
    (set, stores)
}

/// Store whose writes always fail. Reads succeed and return nothing unless
/// `fail_reads` is set.
#[derive(Default)]
pub struct FailingStore {
    pub fail_reads: bool,
    pub writes_attempted: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn writes_attempted(&self) -> usize {
        self.writes_attempted.load(Ordering::SeqCst)
    }

    fn write(&self) -> Result<(), StoreError> {
        self.writes_attempted.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    fn read(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for FailingStore {
    async fn save_replay_info(&self, _replay: &Replay) -> Result<(), StoreError> {
        self.write()
    }

    async fn save_replay_friendly_name(&self, _game_id: u64, _name: &str) -> Result<(), StoreError> {
        self.write()
    }

    async fn load_replay_info(&self, _game_ids: &[u64]) -> Result<HashMap<u64, Replay>, StoreError> {
        self.read()?;
        Ok(HashMap::new())
    }

    async fn save_player_info(&self, _player: &PlayerInfo) -> Result<(), StoreError> {
        self.write()
    }

    async fn load_player_info(&self) -> Result<HashMap<u64, PlayerInfo>, StoreError> {
        self.read()?;
        Ok(HashMap::new())
    }

    async fn save_item_purchase(&self, _purchase: &ItemPurchase) -> Result<(), StoreError> {
        self.write()
    }

    async fn load_item_purchases(
        &self,
        _filter: &PurchaseFilter,
    ) -> Result<Vec<ItemPurchase>, StoreError> {
        self.read()?;
        Ok(Vec::new())
    }
}

/// One store call, logged once the call has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    LoadReplayInfo,
    SaveReplayInfo,
    SaveFriendlyName,
    SavePlayerInfo,
    SaveItemPurchase,
}

impl Call {
    pub fn is_write(self) -> bool {
        !matches!(self, Call::LoadReplayInfo)
    }
}

/// Shared log of `(store, call)` in completion order across every store.
pub type Journal = Arc<Mutex<Vec<(String, Call)>>>;

/// Store that accepts everything, remembers nothing and logs each call to a
/// shared journal. `load_replay_info` can be slowed down with `check_delay`.
pub struct RecordingStore {
    name: String,
    check_delay: Duration,
    journal: Journal,
}

impl RecordingStore {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            check_delay: Duration::ZERO,
            journal: Arc::clone(journal),
        }
    }

    pub fn with_check_delay(mut self, delay: Duration) -> Self {
        self.check_delay = delay;
        self
    }

    fn log(&self, call: Call) {
        self.journal.lock().unwrap().push((self.name.clone(), call));
    }
}

/// Calls made to `store`, in order.
pub fn calls_for(journal: &Journal, store: &str) -> Vec<Call> {
    journal
        .lock()
        .unwrap()
        .iter()
        .filter(|(name, _)| name == store)
        .map(|(_, call)| *call)
        .collect()
}

#[async_trait]
impl Store for RecordingStore {
    async fn save_replay_info(&self, _replay: &Replay) -> Result<(), StoreError> {
        self.log(Call::SaveReplayInfo);
        Ok(())
    }

    async fn save_replay_friendly_name(&self, _game_id: u64, _name: &str) -> Result<(), StoreError> {
        self.log(Call::SaveFriendlyName);
        Ok(())
    }

    async fn load_replay_info(&self, _game_ids: &[u64]) -> Result<HashMap<u64, Replay>, StoreError> {
        if !self.check_delay.is_zero() {
            tokio::time::sleep(self.check_delay).await;
        }
        self.log(Call::LoadReplayInfo);
        Ok(HashMap::new())
    }

    async fn save_player_info(&self, _player: &PlayerInfo) -> Result<(), StoreError> {
        self.log(Call::SavePlayerInfo);
        Ok(())
    }

    async fn load_player_info(&self) -> Result<HashMap<u64, PlayerInfo>, StoreError> {
        Ok(HashMap::new())
    }

    async fn save_item_purchase(&self, _purchase: &ItemPurchase) -> Result<(), StoreError> {
        // Yield so writes to different stores interleave.
        tokio::task::yield_now().await;
        self.log(Call::SaveItemPurchase);
        Ok(())
    }

    async fn load_item_purchases(
        &self,
        _filter: &PurchaseFilter,
    ) -> Result<Vec<ItemPurchase>, StoreError> {
        Ok(Vec::new())
    }
}
