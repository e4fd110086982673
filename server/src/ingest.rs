//! Records a decoded replay in every configured store.
//!
//! A replay is only written after every store has confirmed it does not
//! already hold the match. The writes themselves are best effort: a store that
//! fails is reported, it never stops the other stores or the remaining records.

use futures_util::future::join_all;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use common::{Replay, ValidationError};

use crate::error::{IngestError, StoreError};
use crate::store::{Store, StoreSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    ItemPurchase,
    PlayerInfo,
    ReplayInfo,
    FriendlyName,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::ItemPurchase => "item purchase",
            RecordKind::PlayerInfo => "player info",
            RecordKind::ReplayInfo => "replay info",
            RecordKind::FriendlyName => "friendly name",
        };
        f.write_str(name)
    }
}

/// Result of writing one kind of record to one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
    pub store: String,
    pub kind: RecordKind,
    pub attempted: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl WriteOutcome {
    fn new(store: &str, kind: RecordKind) -> Self {
        Self {
            store: store.to_string(),
            kind,
            attempted: 0,
            failed: 0,
            errors: Vec::new(),
        }
    }

    fn record(&mut self, result: Result<(), StoreError>) {
        self.attempted += 1;
        if let Err(e) = result {
            self.failed += 1;
            self.errors.push(e.to_string());
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn written(&self) -> usize {
        self.attempted - self.failed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub game_id: u64,
    /// Purchases in the replay, each attempted once per store.
    pub purchases: usize,
    pub players: usize,
    pub outcomes: Vec<WriteOutcome>,
}

impl IngestReport {
    pub fn failures(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Records successfully written across every store.
    pub fn records_written(&self) -> usize {
        self.outcomes.iter().map(WriteOutcome::written).sum()
    }

    pub fn outcome(&self, store: &str, kind: RecordKind) -> Option<&WriteOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.store == store && o.kind == kind)
    }
}

/// Checks every store for `replay.game_id`, then writes the replay everywhere.
///
/// Nothing is written if any store already holds the match or could not be
/// checked.
pub async fn ingest_replay(replay: &Replay, stores: &StoreSet) -> Result<IngestReport, IngestError> {
    if stores.is_empty() {
        return Err(IngestError::NoStores);
    }

    ensure_absent(replay.game_id, stores).await?;

    info!(
        "Replay {} not present in any store, saving {} purchases and {} players to {} stores",
        replay.game_id,
        replay.item_purchases.len(),
        replay.player_info.len(),
        stores.len()
    );

    let outcomes = join_all(
        stores
            .iter()
            .map(|(name, store)| write_replay(name, Arc::clone(store), replay)),
    )
    .await
    .into_iter()
    .flatten()
    .collect();

    let report = IngestReport {
        game_id: replay.game_id,
        purchases: replay.item_purchases.len(),
        players: replay.player_info.len(),
        outcomes,
    };

    for failure in report.failures() {
        warn!(
            "Store [{}] failed {} of {} {} writes for replay {}: {}",
            failure.store,
            failure.failed,
            failure.attempted,
            failure.kind,
            replay.game_id,
            failure.errors.join("; ")
        );
    }

    Ok(report)
}

/// Duplicate check. Every store is queried before the verdict is reached.
async fn ensure_absent(game_id: u64, stores: &StoreSet) -> Result<(), IngestError> {
    let checks = join_all(stores.iter().map(|(name, store)| async move {
        (name, store.load_replay_info(&[game_id]).await)
    }))
    .await;

    let mut check_failure = None;
    for (name, result) in checks {
        match result {
            Ok(existing) if !existing.is_empty() => {
                info!("Replay {} has already been parsed by store [{}]", game_id, name);
                return Err(IngestError::Conflict {
                    game_id,
                    store: name.to_string(),
                });
            }
            Ok(_) => {}
            Err(source) => {
                warn!("Error loading replay {} from store [{}]: {}", game_id, name, source);
                check_failure.get_or_insert(IngestError::DuplicateCheck {
                    game_id,
                    store: name.to_string(),
                    source,
                });
            }
        }
    }

    match check_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn write_replay(name: &str, store: Arc<dyn Store>, replay: &Replay) -> Vec<WriteOutcome> {
    let mut purchases = WriteOutcome::new(name, RecordKind::ItemPurchase);
    for purchase in &replay.item_purchases {
        purchases.record(store.save_item_purchase(purchase).await);
    }

    let mut players = WriteOutcome::new(name, RecordKind::PlayerInfo);
    for player in &replay.player_info {
        players.record(store.save_player_info(player).await);
    }

    let mut info = WriteOutcome::new(name, RecordKind::ReplayInfo);
    info.record(store.save_replay_info(replay).await);

    vec![purchases, players, info]
}

/// Sets the friendly name of a replay on every store. No duplicate check: an
/// existing name is overwritten.
pub async fn set_friendly_name(
    game_id: u64,
    friendly_name: &str,
    stores: &StoreSet,
) -> Result<Vec<WriteOutcome>, ValidationError> {
    if friendly_name.trim().is_empty() {
        return Err(ValidationError::EmptyField("friendlyName".to_string()));
    }

    let outcomes: Vec<WriteOutcome> = join_all(stores.iter().map(|(name, store)| async move {
        let mut outcome = WriteOutcome::new(name, RecordKind::FriendlyName);
        outcome.record(store.save_replay_friendly_name(game_id, friendly_name).await);
        outcome
    }))
    .await;

    for failure in outcomes.iter().filter(|o| !o.succeeded()) {
        warn!(
            "Error saving replay {} friendly name [{}] to store [{}]: {}",
            game_id,
            friendly_name,
            failure.store,
            failure.errors.join("; ")
        );
    }

    Ok(outcomes)
}
