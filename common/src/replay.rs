use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single item bought by a hero during a match.
///
/// `game_id` and `steam_id` are not part of the purchase event itself; they stay
/// zero until [`Replay::resolve_purchases`] has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPurchase {
    pub item: String,
    pub hero: String,
    pub game_id: u64,
    pub steam_id: u64,
    pub timestamp: f32,
}

impl ItemPurchase {
    pub fn new(item: impl Into<String>, hero: impl Into<String>, timestamp: f32) -> Self {
        Self {
            item: item.into(),
            hero: hero.into(),
            game_id: 0,
            steam_id: 0,
            timestamp,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.steam_id != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub steam_id: u64,
    /// Only ever filled in by records read back from a store.
    pub team: String,
    pub name: String,
}

/// Everything extracted from one replay file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replay {
    pub game_id: u64,
    pub strategy_start: f32,
    pub game_start: f32,
    pub game_end: f32,
    /// Hero name -> steam id of the player who picked it.
    pub players: HashMap<String, u64>,
    #[serde(default)]
    pub player_info: Vec<PlayerInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_purchases: Vec<ItemPurchase>,
    #[serde(default)]
    pub friendly_name: String,
}

impl Replay {
    pub fn new(game_id: u64) -> Self {
        Self {
            game_id,
            ..Default::default()
        }
    }

    /// Back-fills `game_id` and `steam_id` on every purchase now that the roster
    /// is known. A purchase whose hero is not in `players` keeps a zero steam id.
    pub fn resolve_purchases(&mut self) {
        for purchase in &mut self.item_purchases {
            purchase.game_id = self.game_id;
            purchase.steam_id = self.players.get(&purchase.hero).copied().unwrap_or(0);
        }
    }

    pub fn unresolved_purchases(&self) -> usize {
        self.item_purchases.iter().filter(|p| !p.is_resolved()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIPER_PLAYER: u64 = 76561198000000001;

    #[test]
    fn resolves_purchase_from_roster() {
        let mut replay = Replay::new(12345);
        replay.players.insert("sniper".to_string(), SNIPER_PLAYER);
        replay.item_purchases.push(ItemPurchase::new("item_dust", "sniper", 120.5));

        replay.resolve_purchases();

        assert_eq!(
            replay.item_purchases[0],
            ItemPurchase {
                item: "item_dust".to_string(),
                hero: "sniper".to_string(),
                game_id: 12345,
                steam_id: SNIPER_PLAYER,
                timestamp: 120.5,
            }
        );
    }

    #[test]
    fn unknown_hero_keeps_zero_steam_id() {
        let mut replay = Replay::new(7);
        replay.players.insert("sniper".to_string(), SNIPER_PLAYER);
        replay.item_purchases.push(ItemPurchase::new("item_tango", "npc_dota_hero_axe", 3.0));
        replay.item_purchases.push(ItemPurchase::new("item_branches", "sniper", 4.0));

        replay.resolve_purchases();

        for p in &replay.item_purchases {
            assert_eq!(p.game_id, 7);
            match replay.players.get(&p.hero) {
                Some(id) => assert_eq!(p.steam_id, *id),
                None => assert_eq!(p.steam_id, 0),
            }
        }
        assert_eq!(replay.unresolved_purchases(), 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut replay = Replay::new(1);
        replay.friendly_name = "grand final".to_string();
        let json = serde_json::to_value(&replay).unwrap();

        assert_eq!(json["gameId"], 1);
        assert_eq!(json["friendlyName"], "grand final");
        assert!(json.get("itemPurchases").is_none());
    }
}
