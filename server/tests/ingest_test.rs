use std::sync::{Arc, Mutex};
use std::time::Duration;

use ::common::{PurchaseFilter, ValidationError};
use server::ingest::{self, RecordKind};
use server::store::{MemoryStore, Store, StoreSet};
use server::{IngestError, ingest_replay};

mod common;
use crate::common::{
    Call, FailingStore, GAME_ID, Journal, RecordingStore, SNIPER, calls_for, memory_stores,
    sample_replay,
};

#[tokio::test]
async fn second_ingest_conflicts_without_writing() {
    let (stores, memory) = memory_stores(&["primary"]);
    let replay = sample_replay();

    let report = ingest_replay(&replay, &stores).await.unwrap();
    assert!(report.is_complete());
    assert_eq!(report.purchases, 2);
    assert_eq!(report.records_written(), 4);
    assert_eq!(memory[0].purchase_count().await, 2);

    let err = ingest_replay(&replay, &stores).await.unwrap_err();
    assert!(matches!(
        err,
        IngestError::Conflict { game_id: GAME_ID, ref store } if store == "primary"
    ));
    assert_eq!(memory[0].purchase_count().await, 2);
}

#[tokio::test]
async fn failing_store_does_not_block_the_others() {
    let memory = Arc::new(MemoryStore::new());
    let failing = Arc::new(FailingStore::new());
    let stores = StoreSet::new([
        ("memory", Arc::clone(&memory) as Arc<dyn Store>),
        ("failing", Arc::clone(&failing) as Arc<dyn Store>),
    ]);

    let report = ingest_replay(&sample_replay(), &stores).await.unwrap();

    assert!(!report.is_complete());
    for kind in [RecordKind::ItemPurchase, RecordKind::PlayerInfo, RecordKind::ReplayInfo] {
        assert!(report.outcome("memory", kind).unwrap().succeeded());
        let failed = report.outcome("failing", kind).unwrap();
        assert!(!failed.succeeded());
        assert_eq!(failed.failed, failed.attempted);
    }
    assert_eq!(report.failures().count(), 3);

    // Every record was still attempted against the failing store.
    assert_eq!(failing.writes_attempted(), 4);
    assert_eq!(memory.purchase_count().await, 2);
    assert_eq!(memory.load_replay_info(&[GAME_ID]).await.unwrap().len(), 1);
}

#[tokio::test]
async fn replay_present_in_any_store_blocks_every_write() {
    let (stores, memory) = memory_stores(&["a", "b", "c"]);
    let replay = sample_replay();
    memory[2].save_replay_info(&replay).await.unwrap();

    let err = ingest_replay(&replay, &stores).await.unwrap_err();

    assert!(matches!(err, IngestError::Conflict { ref store, .. } if store == "c"));
    for store in &memory {
        assert_eq!(store.purchase_count().await, 0);
        assert!(store.load_player_info().await.unwrap().is_empty());
    }
    assert!(memory[0].load_replay_info(&[GAME_ID]).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_duplicate_check_aborts_ingest() {
    let memory = Arc::new(MemoryStore::new());
    let stores = StoreSet::new([
        ("memory", Arc::clone(&memory) as Arc<dyn Store>),
        ("broken", Arc::new(FailingStore::unreadable()) as Arc<dyn Store>),
    ]);

    let err = ingest_replay(&sample_replay(), &stores).await.unwrap_err();

    assert!(matches!(err, IngestError::DuplicateCheck { ref store, .. } if store == "broken"));
    assert_eq!(memory.purchase_count().await, 0);
}

#[tokio::test]
async fn conflict_wins_over_failed_duplicate_check() {
    let memory = Arc::new(MemoryStore::new());
    let replay = sample_replay();
    memory.save_replay_info(&replay).await.unwrap();
    let stores = StoreSet::new([
        ("broken", Arc::new(FailingStore::unreadable()) as Arc<dyn Store>),
        ("memory", Arc::clone(&memory) as Arc<dyn Store>),
    ]);

    let err = ingest_replay(&replay, &stores).await.unwrap_err();
    assert!(matches!(err, IngestError::Conflict { ref store, .. } if store == "memory"));
}

#[tokio::test]
async fn ingest_requires_a_store() {
    let err = ingest_replay(&sample_replay(), &StoreSet::default())
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::NoStores));
}

#[tokio::test]
async fn stored_purchases_are_filterable() {
    let (stores, memory) = memory_stores(&["primary"]);
    ingest_replay(&sample_replay(), &stores).await.unwrap();

    let all = memory[0]
        .load_item_purchases(&PurchaseFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let sniper = PurchaseFilter::from_params(None, None, Some(SNIPER), None).unwrap();
    let purchases = memory[0].load_item_purchases(&sniper).await.unwrap();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].item, "item_blink");
}

#[tokio::test]
async fn friendly_name_is_written_to_every_store() {
    let (stores, memory) = memory_stores(&["a", "b"]);
    ingest_replay(&sample_replay(), &stores).await.unwrap();

    let outcomes = ingest::set_friendly_name(GAME_ID, "Grand Finals", &stores)
        .await
        .unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.succeeded() && o.kind == RecordKind::FriendlyName));

    for store in &memory {
        let replays = store.load_replay_info(&[GAME_ID]).await.unwrap();
        assert_eq!(replays[&GAME_ID].friendly_name, "Grand Finals");
    }
}

#[tokio::test]
async fn friendly_name_reports_failing_store() {
    let stores = StoreSet::new([("failing", Arc::new(FailingStore::new()) as Arc<dyn Store>)]);

    let outcomes = ingest::set_friendly_name(GAME_ID, "Grand Finals", &stores)
        .await
        .unwrap();
    assert_eq!(outcomes[0].failed, 1);

    let err = ingest::set_friendly_name(GAME_ID, "  ", &stores).await.unwrap_err();
    assert_eq!(err, ValidationError::EmptyField("friendlyName".to_string()));
}

#[tokio::test]
async fn each_store_writes_purchases_then_players_then_replay_info() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let stores = StoreSet::new([
        ("a", Arc::new(RecordingStore::new("a", &journal)) as Arc<dyn Store>),
        ("b", Arc::new(RecordingStore::new("b", &journal)) as Arc<dyn Store>),
    ]);

    ingest_replay(&sample_replay(), &stores).await.unwrap();

    for store in ["a", "b"] {
        assert_eq!(
            calls_for(&journal, store),
            vec![
                Call::LoadReplayInfo,
                Call::SaveItemPurchase,
                Call::SaveItemPurchase,
                Call::SavePlayerInfo,
                Call::SaveReplayInfo,
            ]
        );
    }
}

#[tokio::test]
async fn no_store_writes_before_every_duplicate_check_returns() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let slow = RecordingStore::new("slow", &journal).with_check_delay(Duration::from_millis(50));
    let stores = StoreSet::new([
        ("fast", Arc::new(RecordingStore::new("fast", &journal)) as Arc<dyn Store>),
        ("slow", Arc::new(slow) as Arc<dyn Store>),
    ]);

    ingest_replay(&sample_replay(), &stores).await.unwrap();

    let calls = journal.lock().unwrap().clone();
    let last_check = calls
        .iter()
        .rposition(|(_, call)| *call == Call::LoadReplayInfo)
        .unwrap();
    let first_write = calls.iter().position(|(_, call)| call.is_write()).unwrap();

    assert_eq!(calls.iter().filter(|(_, call)| *call == Call::LoadReplayInfo).count(), 2);
    assert!(
        last_check < first_write,
        "write happened before all checks returned: {:?}",
        calls
    );
    assert_eq!(calls[last_check].0, "slow");
}
