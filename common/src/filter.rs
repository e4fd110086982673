use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ItemPurchase;

pub const GAME_ID_FILTER: &str = "gameId";
pub const PLAYER_FILTER: &str = "player";
pub const HERO_FILTER: &str = "hero";
pub const ITEM_FILTER: &str = "item";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid value [{value}] for filter [{filter}]")]
    InvalidFilter { filter: String, value: String },

    #[error("Missing required field [{0}]")]
    MissingField(String),

    #[error("Field [{0}] cannot be empty")]
    EmptyField(String),
}

/// Conjunctive filter over stored item purchases. `None` leaves a dimension
/// unconstrained; a filter with every dimension `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseFilter {
    pub game_ids: Option<Vec<u64>>,
    pub player_ids: Option<Vec<u64>>,
    pub heroes: Option<Vec<String>>,
    pub items: Option<Vec<String>>,
}

impl PurchaseFilter {
    /// Builds a filter from raw comma-separated query parameters.
    ///
    /// Any id that fails to parse rejects the whole filter.
    pub fn from_params(
        game_ids: Option<&str>,
        player_ids: Option<&str>,
        heroes: Option<&str>,
        items: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            game_ids: parse_id_list(GAME_ID_FILTER, game_ids)?,
            player_ids: parse_id_list(PLAYER_FILTER, player_ids)?,
            heroes: parse_name_list(heroes),
            items: parse_name_list(items),
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.game_ids.is_none()
            && self.player_ids.is_none()
            && self.heroes.is_none()
            && self.items.is_none()
    }

    pub fn matches(&self, purchase: &ItemPurchase) -> bool {
        fn allows<T: PartialEq>(values: &Option<Vec<T>>, value: &T) -> bool {
            values.as_ref().map_or(true, |v| v.contains(value))
        }

        allows(&self.game_ids, &purchase.game_id)
            && allows(&self.player_ids, &purchase.steam_id)
            && allows(&self.heroes, &purchase.hero)
            && allows(&self.items, &purchase.item)
    }
}

fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |s| s.trim().is_empty())
}

/// Parses a comma-separated list of numeric ids. A missing or blank parameter
/// yields `None`.
pub fn parse_id_list(filter: &str, raw: Option<&str>) -> Result<Option<Vec<u64>>, ValidationError> {
    if is_blank(raw) {
        return Ok(None);
    }

    raw.unwrap_or_default()
        .split(',')
        .map(|id| {
            id.trim()
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidFilter {
                    filter: filter.to_string(),
                    value: id.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn parse_name_list(raw: Option<&str>) -> Option<Vec<String>> {
    let names: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    (!names.is_empty()).then_some(names)
}
