use async_trait::async_trait;
use refinery::config::{Config, ConfigDbType};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};
use std::collections::HashMap;
use tracing::{debug, info};

use common::{ItemPurchase, PlayerInfo, PurchaseFilter, Replay};

use super::Store;
use crate::config::PostgresConfig;
use crate::error::StoreError;

mod migrations {
    use refinery::embed_migrations;
    embed_migrations!("./migrations");
}

#[derive(Debug, sqlx::FromRow)]
struct ReplayInfoRow {
    game_id: i64,
    strategy_start: f32,
    game_start: f32,
    game_end: f32,
    players: Json<HashMap<String, u64>>,
    friendly_name: String,
}

impl From<ReplayInfoRow> for Replay {
    fn from(row: ReplayInfoRow) -> Self {
        Replay {
            game_id: row.game_id as u64,
            strategy_start: row.strategy_start,
            game_start: row.game_start,
            game_end: row.game_end,
            players: row.players.0,
            friendly_name: row.friendly_name,
            ..Default::default()
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlayerInfoRow {
    steam_id: i64,
    team: String,
    name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ItemPurchaseRow {
    game_id: i64,
    steam_id: i64,
    hero: String,
    item: String,
    timestamp: f32,
}

/// Ids are unsigned on the wire and signed in Postgres.
fn db_id(id: u64) -> Result<i64, StoreError> {
    i64::try_from(id).map_err(|_| StoreError::Corrupt(format!("id [{}] does not fit in BIGINT", id)))
}

fn db_ids(ids: &[u64]) -> Result<Vec<i64>, StoreError> {
    ids.iter().map(|&id| db_id(id)).collect()
}

/// Store backed by a PostgreSQL database.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Runs pending migrations, then opens a connection pool.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StoreError> {
        let mut db_config = Config::new(ConfigDbType::Postgres)
            .set_db_host(&config.host)
            .set_db_port(&config.port)
            .set_db_user(&config.user)
            .set_db_pass(&config.pass)
            .set_db_name(&config.name);

        let report = migrations::migrations::runner()
            .run_async(&mut db_config)
            .await?;
        info!(
            "Database migrations completed ({} applied)",
            report.applied_migrations().len()
        );

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.url())
            .await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn save_replay_info(&self, replay: &Replay) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO replay_info (game_id, strategy_start, game_start, game_end, players, friendly_name)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (game_id) DO UPDATE SET
                strategy_start = EXCLUDED.strategy_start,
                game_start = EXCLUDED.game_start,
                game_end = EXCLUDED.game_end,
                players = EXCLUDED.players,
                friendly_name = EXCLUDED.friendly_name
            "#,
        )
        .bind(db_id(replay.game_id)?)
        .bind(replay.strategy_start)
        .bind(replay.game_start)
        .bind(replay.game_end)
        .bind(Json(&replay.players))
        .bind(&replay.friendly_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_replay_friendly_name(
        &self,
        game_id: u64,
        friendly_name: &str,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE replay_info SET friendly_name = $1 WHERE game_id = $2")
            .bind(friendly_name)
            .bind(db_id(game_id)?)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!("No replay_info row for game {}, friendly name not stored", game_id);
        }
        Ok(())
    }

    async fn load_replay_info(&self, game_ids: &[u64]) -> Result<HashMap<u64, Replay>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT game_id, strategy_start, game_start, game_end, players, friendly_name FROM replay_info",
        );
        if !game_ids.is_empty() {
            query
                .push(" WHERE game_id = ANY(")
                .push_bind(db_ids(game_ids)?)
                .push(")");
        }

        let rows: Vec<ReplayInfoRow> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.game_id as u64, Replay::from(row)))
            .collect())
    }

    async fn save_player_info(&self, player: &PlayerInfo) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO player_info (steam_id, team, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (steam_id) DO UPDATE SET team = EXCLUDED.team, name = EXCLUDED.name
            "#,
        )
        .bind(db_id(player.steam_id)?)
        .bind(&player.team)
        .bind(&player.name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load_player_info(&self) -> Result<HashMap<u64, PlayerInfo>, StoreError> {
        let rows: Vec<PlayerInfoRow> =
            sqlx::query_as("SELECT steam_id, team, name FROM player_info")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let steam_id = row.steam_id as u64;
                (
                    steam_id,
                    PlayerInfo {
                        steam_id,
                        team: row.team,
                        name: row.name,
                    },
                )
            })
            .collect())
    }

    async fn save_item_purchase(&self, purchase: &ItemPurchase) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO item_purchase (game_id, steam_id, hero, item, timestamp) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(db_id(purchase.game_id)?)
        .bind(db_id(purchase.steam_id)?)
        .bind(&purchase.hero)
        .bind(&purchase.item)
        .bind(purchase.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load_item_purchases(
        &self,
        filter: &PurchaseFilter,
    ) -> Result<Vec<ItemPurchase>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT game_id, steam_id, hero, item, timestamp FROM item_purchase",
        );
        let mut separator = " WHERE ";

        if let Some(game_ids) = &filter.game_ids {
            query.push(separator).push("game_id = ANY(").push_bind(db_ids(game_ids)?).push(")");
            separator = " AND ";
        }
        if let Some(player_ids) = &filter.player_ids {
            query.push(separator).push("steam_id = ANY(").push_bind(db_ids(player_ids)?).push(")");
            separator = " AND ";
        }
        if let Some(heroes) = &filter.heroes {
            query.push(separator).push("hero = ANY(").push_bind(heroes.clone()).push(")");
            separator = " AND ";
        }
        if let Some(items) = &filter.items {
            query.push(separator).push("item = ANY(").push_bind(items.clone()).push(")");
        }
        query.push(" ORDER BY id");

        debug!("Loading item purchases: {}", query.sql());
        let rows: Vec<ItemPurchaseRow> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| ItemPurchase {
                item: row.item,
                hero: row.hero,
                game_id: row.game_id as u64,
                steam_id: row.steam_id as u64,
                timestamp: row.timestamp,
            })
            .collect())
    }
}
