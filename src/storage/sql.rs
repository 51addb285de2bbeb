//! SQLite-backed match repository.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::{MatchRepository, StorageError};
use crate::models::{
    ContributionScope, CountryId, EntityId, MatchEvent, MatchId, MatchInfo, MatchPeriod, Position,
};

const SCHEMA: &str = include_str!("schema.sql");

const MATCH_INFO_QUERY: &str = r#"
    SELECT m.id AS match_id, m.dateutc, m.competition, m.season,
           hc.id AS home_club_id, hc.name AS home_club,
           ac.id AS away_club_id, ac.name AS away_club,
           wc.name AS winner,
           m.goal_by_home_club, m.goal_by_away_club,
           s.stadium, s.city, s.capacity, c.country, c.region
    FROM football_match m
    JOIN club hc ON m.home_club = hc.id
    JOIN club ac ON m.away_club = ac.id
    LEFT JOIN club wc ON m.winner = wc.id
    LEFT JOIN stadiums s ON m.stadium_id = s.id
    LEFT JOIN countries c ON s.country_id = c.id
    WHERE m.id = ?
"#;

const EVENT_COLUMNS: &str = r#"
    SELECT e.id, e.football_match_id, e.club_id, e.player_id,
           p.firstname || ' ' || p.lastname AS player_name,
           p.position AS player_position, p.country_id AS player_country_id,
           e.matchperiod, e.eventsec, e.eventname, e.action, e.modifier,
           e.x_begin, e.y_begin, e.x_end, e.y_end, e.is_success
    FROM football_match_event e
    LEFT JOIN player p ON e.player_id = p.id
"#;

/// `football_match` joined with clubs, winner and venue.
#[derive(Debug, sqlx::FromRow)]
struct MatchInfoRow {
    match_id: i64,
    dateutc: String,
    competition: String,
    season: Option<String>,
    home_club_id: i64,
    home_club: String,
    away_club_id: i64,
    away_club: String,
    winner: Option<String>,
    goal_by_home_club: i64,
    goal_by_away_club: i64,
    stadium: Option<String>,
    city: Option<String>,
    capacity: Option<i64>,
    country: Option<String>,
    region: Option<String>,
}

/// `football_match_event` joined with the acting player, if the player row exists.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: i64,
    football_match_id: i64,
    club_id: i64,
    player_id: i64,
    player_name: Option<String>,
    player_position: Option<String>,
    player_country_id: Option<i64>,
    matchperiod: String,
    eventsec: f64,
    eventname: String,
    action: Option<String>,
    modifier: Option<String>,
    x_begin: Option<f64>,
    y_begin: Option<f64>,
    x_end: Option<f64>,
    y_end: Option<f64>,
    is_success: Option<bool>,
}

fn parse_match_date(raw: &str) -> Result<NaiveDateTime, StorageError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .map_err(|_| StorageError::InvalidRow(format!("Unparseable match date: {}", raw)))
}

fn non_negative(value: i64, column: &str) -> Result<u32, StorageError> {
    u32::try_from(value)
        .map_err(|_| StorageError::InvalidRow(format!("{} out of range: {}", column, value)))
}

impl TryFrom<MatchInfoRow> for MatchInfo {
    type Error = StorageError;

    fn try_from(row: MatchInfoRow) -> Result<Self, Self::Error> {
        Ok(MatchInfo {
            match_id: MatchId::new(row.match_id),
            date: parse_match_date(&row.dateutc)?,
            competition: row.competition,
            season: row.season,
            home_club_id: EntityId::new(row.home_club_id),
            home_club: row.home_club,
            away_club_id: EntityId::new(row.away_club_id),
            away_club: row.away_club,
            winner: row.winner,
            home_goals: non_negative(row.goal_by_home_club, "goal_by_home_club")?,
            away_goals: non_negative(row.goal_by_away_club, "goal_by_away_club")?,
            stadium: row.stadium.unwrap_or_default(),
            city: row.city,
            capacity: row
                .capacity
                .map(|c| non_negative(c, "capacity"))
                .transpose()?,
            country: row.country,
            region: row.region,
        })
    }
}

impl TryFrom<EventRow> for MatchEvent {
    type Error = StorageError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let period = MatchPeriod::from_str(&row.matchperiod).map_err(|e| {
            StorageError::InvalidRow(format!("Event {}: {}", row.id, e))
        })?;

        Ok(MatchEvent {
            id: EntityId::new(row.id),
            match_id: MatchId::new(row.football_match_id),
            club_id: EntityId::new(row.club_id),
            player_id: EntityId::new(row.player_id),
            player_name: row.player_name.unwrap_or_default(),
            player_position: row
                .player_position
                .as_deref()
                .map(Position::from_code)
                .unwrap_or(Position::Other),
            player_country_id: row.player_country_id.map(CountryId::new),
            period,
            second: row.eventsec,
            name: row.eventname,
            action: row.action,
            modifier: row.modifier,
            x_begin: row.x_begin,
            y_begin: row.y_begin,
            x_end: row.x_end,
            y_end: row.y_end,
            is_success: row.is_success,
        })
    }
}

fn into_events(rows: Vec<EventRow>) -> Result<Vec<MatchEvent>, StorageError> {
    rows.into_iter().map(MatchEvent::try_from).collect()
}

/// Match repository over a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool, creating the database file if needed.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Connected to {} (max {} connections)", url, max_connections);
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables and indexes that do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        info!("Database schema ready");
        Ok(())
    }
}

#[async_trait]
impl MatchRepository for SqlStore {
    async fn match_info(&self, match_id: MatchId) -> Result<Option<MatchInfo>, StorageError> {
        let row = sqlx::query_as::<_, MatchInfoRow>(MATCH_INFO_QUERY)
            .bind(match_id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(MatchInfo::try_from).transpose()
    }

    async fn match_events(&self, match_id: MatchId) -> Result<Vec<MatchEvent>, StorageError> {
        let query = format!("{} WHERE e.football_match_id = ? ORDER BY e.id", EVENT_COLUMNS);
        let rows = sqlx::query_as::<_, EventRow>(&query)
            .bind(match_id.get())
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} events for match {}", rows.len(), match_id);
        into_events(rows)
    }

    async fn scope_events(
        &self,
        scope: ContributionScope,
    ) -> Result<Vec<MatchEvent>, StorageError> {
        let rows = match scope {
            ContributionScope::Club(club_id) => {
                let query = format!(
                    "{} WHERE e.football_match_id IN \
                     (SELECT id FROM football_match WHERE home_club = ? OR away_club = ?) \
                     ORDER BY e.football_match_id, e.id",
                    EVENT_COLUMNS
                );
                sqlx::query_as::<_, EventRow>(&query)
                    .bind(club_id.get())
                    .bind(club_id.get())
                    .fetch_all(&self.pool)
                    .await?
            }
            ContributionScope::Country(country_id) => {
                let query = format!(
                    "{} WHERE e.football_match_id IN \
                     (SELECT DISTINCT e2.football_match_id FROM football_match_event e2 \
                      JOIN player p2 ON e2.player_id = p2.id WHERE p2.country_id = ?) \
                     ORDER BY e.football_match_id, e.id",
                    EVENT_COLUMNS
                );
                sqlx::query_as::<_, EventRow>(&query)
                    .bind(country_id.get())
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!("Fetched {} events for {}", rows.len(), scope);
        into_events(rows)
    }
}

#[cfg(test)]
pub(crate) mod test_data {
    //! A seeded in-memory database shared by storage and API tests.
    //!
    //! Match 1: club 10 (home) vs club 20 (away), 2 - 0 to the home side.
    //! Player 101 (country 1) scores after a failed save of keeper 201, then
    //! player 102 (country 1) assists player 103 (country 2) for the second.

    use super::*;

    pub async fn memory_store() -> SqlStore {
        let store = SqlStore::connect("sqlite::memory:", 1).await.unwrap();
        store.init_schema().await.unwrap();
        store
    }

    async fn exec(store: &SqlStore, sql: &str) {
        sqlx::query(sql).execute(store.pool()).await.unwrap();
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_event(
        store: &SqlStore,
        id: i64,
        club: i64,
        player: i64,
        period: &str,
        second: f64,
        name: &str,
        action: Option<&str>,
        modifier: Option<&str>,
        is_success: Option<bool>,
    ) {
        sqlx::query(
            "INSERT INTO football_match_event (id, club_id, football_match_id, player_id, \
             matchperiod, eventsec, eventname, action, modifier, x_begin, y_begin, x_end, y_end, \
             is_success) VALUES (?, ?, 1, ?, ?, ?, ?, ?, ?, 80.0, 50.0, 90.0, 50.0, ?)",
        )
        .bind(id)
        .bind(club)
        .bind(player)
        .bind(period)
        .bind(second)
        .bind(name)
        .bind(action)
        .bind(modifier)
        .bind(is_success)
        .execute(store.pool())
        .await
        .unwrap();
    }

    pub async fn seeded_store() -> SqlStore {
        let store = memory_store().await;

        exec(&store, "INSERT INTO countries (id, country, region) VALUES (1, 'England', 'Europe'), (2, 'Brazil', 'South America')").await;
        exec(&store, "INSERT INTO stadiums (id, stadium, city, country_id, capacity) VALUES (1, 'Wembley', 'London', 1, 90000)").await;
        exec(&store, "INSERT INTO club (id, name, country_id) VALUES (10, 'Home FC', 1), (20, 'Away United', 1)").await;
        exec(
            &store,
            "INSERT INTO player (id, firstname, lastname, country_id, position) VALUES \
             (101, 'Harry', 'Striker', 1, 'FW'), \
             (102, 'Jordan', 'Playmaker', 1, 'MF'), \
             (103, 'Gabriel', 'Finisher', 2, 'FW'), \
             (201, 'Keeper', 'Away', 2, 'GK'), \
             (202, 'Defender', 'Away', 1, 'DF')",
        )
        .await;
        exec(
            &store,
            "INSERT INTO football_match (id, dateutc, competition, season, stadium_id, home_club, \
             away_club, winner, goal_by_home_club, goal_by_away_club) VALUES \
             (1, '2018-05-20 18:45:00', 'Premier League', '2017/2018', 1, 10, 20, 10, 2, 0)",
        )
        .await;

        insert_event(&store, 1, 10, 101, "1H", 30.0, "Pass", Some("Simple pass"), None, Some(true)).await;
        insert_event(&store, 2, 20, 202, "1H", 45.0, "Pass", Some("Simple pass"), None, Some(false)).await;
        insert_event(&store, 3, 20, 201, "1H", 600.0, "Save attempt", Some("Reflexes"), None, Some(false)).await;
        insert_event(&store, 4, 10, 101, "1H", 601.0, "Shot", Some("Shot"), Some("gtl"), Some(true)).await;
        insert_event(&store, 5, 10, 102, "2H", 300.0, "Pass", Some("Cross"), Some("assist"), Some(true)).await;
        insert_event(&store, 6, 20, 201, "2H", 301.0, "Save attempt", Some("Reflexes"), None, Some(false)).await;
        insert_event(&store, 7, 10, 103, "2H", 302.0, "Shot", Some("Shot"), Some("gc"), Some(true)).await;
        insert_event(&store, 8, 20, 202, "2H", 900.0, "Foul", Some("Foul"), Some("yellow_card"), None).await;

        store
    }
}
