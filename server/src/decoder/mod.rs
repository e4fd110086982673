//! Replay decoding.
//!
//! The demo decoder is consumed through [`DemoStream`], a pull-based stream of
//! typed events plus the decoder's interned string tables. [`decode_replay`]
//! folds that stream into a [`Replay`] in a single forward pass.

use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{debug, warn};

use common::{ItemPurchase, PlayerInfo, Replay};

use crate::error::DecodeError;

mod reader;

pub use reader::{ContainerReader, DemoReader};

/// String table holding unit, item and ability names referenced by combat log
/// entries.
pub const COMBAT_LOG_NAMES: &str = "CombatLogNames";

/// Combat log entry types the decoder cares about. Raw values follow the demo
/// format's combat log enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatLogType {
    GameState,
    Purchase,
    Other(i32),
}

impl From<i32> for CombatLogType {
    fn from(raw: i32) -> Self {
        match raw {
            9 => CombatLogType::GameState,
            11 => CombatLogType::Purchase,
            other => CombatLogType::Other(other),
        }
    }
}

/// Match phases that mark a timestamp on the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    StrategyTime,
    InProgress,
    PostGame,
}

impl GamePhase {
    pub fn from_state(value: u32) -> Option<Self> {
        match value {
            3 => Some(GamePhase::StrategyTime),
            5 => Some(GamePhase::InProgress),
            6 => Some(GamePhase::PostGame),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfoPlayer {
    pub steam_id: u64,
    pub player_name: String,
    pub hero_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub match_id: u64,
    #[serde(default)]
    pub players: Vec<FileInfoPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub log_type: i32,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub target_name: u32,
    #[serde(default)]
    pub timestamp: f32,
}

impl CombatLogEntry {
    pub fn kind(&self) -> CombatLogType {
        CombatLogType::from(self.log_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvent {
    FileInfo(FileInfo),
    CombatLog(CombatLogEntry),
}

/// The contract of an external demo decoder.
pub trait DemoStream {
    /// Advances the pass. `Ok(None)` marks the end of the stream; any error is
    /// fatal to the pass.
    fn next_event(&mut self) -> Result<Option<DemoEvent>, DecodeError>;

    /// Resolves a stream-local string table index as of the current position.
    fn lookup_string(&self, table: &str, index: i32) -> Option<&str>;
}

#[derive(Debug, Default)]
struct ReplayFold {
    replay: Replay,
    file_info_seen: bool,
    strategy_start: Option<f32>,
    game_start: Option<f32>,
    game_end: Option<f32>,
}

impl ReplayFold {
    fn apply<S: DemoStream + ?Sized>(&mut self, event: DemoEvent, strings: &S) {
        match event {
            DemoEvent::FileInfo(info) => self.on_file_info(info),
            DemoEvent::CombatLog(entry) => match entry.kind() {
                CombatLogType::GameState => self.on_game_state(&entry),
                CombatLogType::Purchase => self.on_purchase(&entry, strings),
                CombatLogType::Other(_) => {}
            },
        }
    }

    fn on_file_info(&mut self, info: FileInfo) {
        if self.file_info_seen {
            warn!(
                "Ignoring repeated file info for match {} (already decoding match {})",
                info.match_id, self.replay.game_id
            );
            return;
        }
        self.file_info_seen = true;
        self.replay.game_id = info.match_id;

        for player in info.players {
            self.replay.player_info.push(PlayerInfo {
                steam_id: player.steam_id,
                team: String::new(),
                name: player.player_name,
            });
            self.replay.players.insert(player.hero_name, player.steam_id);
        }
    }

    fn on_game_state(&mut self, entry: &CombatLogEntry) {
        let slot = match GamePhase::from_state(entry.value) {
            Some(GamePhase::StrategyTime) => &mut self.strategy_start,
            Some(GamePhase::InProgress) => &mut self.game_start,
            Some(GamePhase::PostGame) => &mut self.game_end,
            None => return,
        };
        // The stream may repeat terminal states; keep the first one.
        slot.get_or_insert(entry.timestamp);
    }

    fn on_purchase<S: DemoStream + ?Sized>(&mut self, entry: &CombatLogEntry, strings: &S) {
        let item = lookup_name(strings, entry.value);
        let hero = lookup_name(strings, entry.target_name);
        self.replay
            .item_purchases
            .push(ItemPurchase::new(item, hero, entry.timestamp));
    }

    fn finish(self) -> Result<Replay, DecodeError> {
        if !self.file_info_seen {
            return Err(DecodeError::MissingFileInfo);
        }

        let mut replay = self.replay;
        replay.strategy_start = self.strategy_start.unwrap_or_default();
        replay.game_start = self.game_start.unwrap_or_default();
        replay.game_end = self.game_end.unwrap_or_default();
        Ok(replay)
    }
}

fn lookup_name<S: DemoStream + ?Sized>(strings: &S, index: u32) -> String {
    match strings.lookup_string(COMBAT_LOG_NAMES, index as i32) {
        Some(name) => name.to_string(),
        None => {
            debug!("No {} entry at index {}", COMBAT_LOG_NAMES, index);
            String::new()
        }
    }
}

/// Drives `stream` to its end and folds every event into a fresh [`Replay`].
///
/// Purchases come back unresolved; see [`Replay::resolve_purchases`].
pub fn decode_replay<S: DemoStream + ?Sized>(stream: &mut S) -> Result<Replay, DecodeError> {
    let mut fold = ReplayFold::default();
    while let Some(event) = stream.next_event()? {
        fold.apply(event, &*stream);
    }
    fold.finish()
}

/// Opens a demo container, decodes it and resolves its purchases.
pub fn parse_replay<R: Read>(input: R) -> Result<Replay, DecodeError> {
    let mut reader = DemoReader::open(input)?;
    let mut replay = decode_replay(&mut reader)?;
    replay.resolve_purchases();
    debug!(
        "Decoded replay {}: {} purchases, {} players, {} unresolved",
        replay.game_id,
        replay.item_purchases.len(),
        replay.player_info.len(),
        replay.unresolved_purchases()
    );
    Ok(replay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    const STRATEGY_TIME: u32 = 3;
    const IN_PROGRESS: u32 = 5;
    const POST_GAME: u32 = 6;

    #[derive(Default)]
    struct ScriptedStream {
        events: VecDeque<Result<DemoEvent, DecodeError>>,
        names: HashMap<i32, String>,
    }

    impl ScriptedStream {
        fn name(mut self, index: i32, value: &str) -> Self {
            self.names.insert(index, value.to_string());
            self
        }

        fn event(mut self, event: DemoEvent) -> Self {
            self.events.push_back(Ok(event));
            self
        }

        fn fail(mut self) -> Self {
            self.events
                .push_back(Err(DecodeError::InvalidContainer("truncated".to_string())));
            self
        }

        fn state(self, value: u32, timestamp: f32) -> Self {
            self.event(DemoEvent::CombatLog(CombatLogEntry {
                log_type: 9,
                value,
                target_name: 0,
                timestamp,
            }))
        }

        fn purchase(self, item: u32, hero: u32, timestamp: f32) -> Self {
            self.event(DemoEvent::CombatLog(CombatLogEntry {
                log_type: 11,
                value: item,
                target_name: hero,
                timestamp,
            }))
        }

        fn file_info(self, match_id: u64, players: &[(u64, &str, &str)]) -> Self {
            self.event(DemoEvent::FileInfo(FileInfo {
                match_id,
                players: players
                    .iter()
                    .map(|(steam_id, name, hero)| FileInfoPlayer {
                        steam_id: *steam_id,
                        player_name: name.to_string(),
                        hero_name: hero.to_string(),
                    })
                    .collect(),
            }))
        }
    }

    impl DemoStream for ScriptedStream {
        fn next_event(&mut self) -> Result<Option<DemoEvent>, DecodeError> {
            self.events.pop_front().transpose()
        }

        fn lookup_string(&self, table: &str, index: i32) -> Option<&str> {
            (table == COMBAT_LOG_NAMES)
                .then(|| self.names.get(&index).map(String::as_str))
                .flatten()
        }
    }

    #[test]
    fn phase_timestamps_keep_first_observation() {
        let mut stream = ScriptedStream::default()
            .file_info(1, &[])
            .state(STRATEGY_TIME, 10.0)
            .state(IN_PROGRESS, 90.0)
            .state(IN_PROGRESS, 95.0)
            .state(POST_GAME, 2400.0)
            .state(POST_GAME, 2410.0);

        let replay = decode_replay(&mut stream).unwrap();

        assert_eq!(replay.strategy_start, 10.0);
        assert_eq!(replay.game_start, 90.0);
        assert_eq!(replay.game_end, 2400.0);
    }

    #[test]
    fn unknown_states_and_log_types_are_ignored() {
        let mut stream = ScriptedStream::default()
            .state(2, 5.0)
            .event(DemoEvent::CombatLog(CombatLogEntry {
                log_type: 0,
                value: IN_PROGRESS,
                target_name: 0,
                timestamp: 7.0,
            }))
            .file_info(1, &[]);

        let replay = decode_replay(&mut stream).unwrap();

        assert_eq!(replay.strategy_start, 0.0);
        assert_eq!(replay.game_start, 0.0);
        assert_eq!(replay.game_end, 0.0);
        assert!(replay.item_purchases.is_empty());
    }

    #[test]
    fn purchases_before_roster_are_left_unresolved() {
        let mut stream = ScriptedStream::default()
            .name(1, "item_dust")
            .name(2, "npc_dota_hero_sniper")
            .purchase(1, 2, 120.5)
            .file_info(12345, &[(76561198000000001, "miracle", "npc_dota_hero_sniper")]);

        let replay = decode_replay(&mut stream).unwrap();

        assert_eq!(replay.game_id, 12345);
        assert_eq!(
            replay.item_purchases,
            vec![ItemPurchase::new("item_dust", "npc_dota_hero_sniper", 120.5)]
        );
        assert_eq!(replay.players["npc_dota_hero_sniper"], 76561198000000001);
        assert_eq!(
            replay.player_info,
            vec![PlayerInfo {
                steam_id: 76561198000000001,
                team: String::new(),
                name: "miracle".to_string(),
            }]
        );
    }

    #[test]
    fn missing_string_resolves_to_empty_name() {
        let mut stream = ScriptedStream::default()
            .file_info(1, &[])
            .name(1, "item_tango")
            .purchase(1, 99, 1.0);

        let replay = decode_replay(&mut stream).unwrap();

        assert_eq!(replay.item_purchases[0].item, "item_tango");
        assert_eq!(replay.item_purchases[0].hero, "");
    }

    #[test]
    fn repeated_file_info_does_not_change_match() {
        let mut stream = ScriptedStream::default()
            .file_info(1, &[(10, "a", "npc_dota_hero_axe")])
            .file_info(2, &[(20, "b", "npc_dota_hero_lina")]);

        let replay = decode_replay(&mut stream).unwrap();

        assert_eq!(replay.game_id, 1);
        assert_eq!(replay.player_info.len(), 1);
        assert!(!replay.players.contains_key("npc_dota_hero_lina"));
    }

    #[test]
    fn stream_error_aborts_decoding() {
        let mut stream = ScriptedStream::default().file_info(1, &[]).fail().state(IN_PROGRESS, 1.0);
        assert!(matches!(
            decode_replay(&mut stream),
            Err(DecodeError::InvalidContainer(_))
        ));
    }

    #[test]
    fn stream_without_file_info_is_rejected() {
        let mut stream = ScriptedStream::default().state(IN_PROGRESS, 1.0);
        assert!(matches!(
            decode_replay(&mut stream),
            Err(DecodeError::MissingFileInfo)
        ));
    }
}
