//! Ranked league endpoints (`lol/league/v3`).
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::RequestOptions;
//! use riot_api::rest::resources::RankedQueue;
//!
//! let challenger = client
//!     .get_challenger_league(RankedQueue::Solo5x5, &RequestOptions::new())
//!     .await?;
//! println!("{} players in {}", challenger.entries.len(), challenger.name);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::rest::{ApiError, RequestOptions, RiotClient};
use crate::rest::{ApiFamily, Endpoint};
use crate::HttpMethod;

/// Leagues a summoner is in.
pub const LEAGUES_BY_SUMMONER: Endpoint = Endpoint::new(
    "league.by_summoner",
    HttpMethod::Get,
    ApiFamily::League,
    &["summonerId"],
    "leagues/by-summoner/{summonerId}",
);

/// League positions of a summoner.
pub const POSITIONS_BY_SUMMONER: Endpoint = Endpoint::new(
    "league.positions_by_summoner",
    HttpMethod::Get,
    ApiFamily::League,
    &["summonerId"],
    "positions/by-summoner/{summonerId}",
);

/// The challenger league of a queue.
pub const CHALLENGER_LEAGUE: Endpoint = Endpoint::new(
    "league.challenger",
    HttpMethod::Get,
    ApiFamily::League,
    &["queue"],
    "challengerleagues/by-queue/{queue}",
);

/// The master league of a queue.
pub const MASTER_LEAGUE: Endpoint = Endpoint::new(
    "league.master",
    HttpMethod::Get,
    ApiFamily::League,
    &["queue"],
    "masterleagues/by-queue/{queue}",
);

/// Ranked queues with leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankedQueue {
    /// Solo/duo queue on Summoner's Rift.
    #[serde(rename = "RANKED_SOLO_5x5")]
    Solo5x5,
    /// Flex queue on Summoner's Rift.
    #[serde(rename = "RANKED_FLEX_SR")]
    FlexSr,
    /// Flex queue on Twisted Treeline.
    #[serde(rename = "RANKED_FLEX_TT")]
    FlexTt,
}

impl RankedQueue {
    /// Returns the wire name of the queue.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solo5x5 => "RANKED_SOLO_5x5",
            Self::FlexSr => "RANKED_FLEX_SR",
            Self::FlexTt => "RANKED_FLEX_TT",
        }
    }
}

impl fmt::Display for RankedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a promotion series.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MiniSeries {
    /// Games won in the series.
    pub wins: i32,
    /// Games lost in the series.
    pub losses: i32,
    /// Wins needed to complete the series.
    pub target: i32,
    /// Game results so far, e.g. `"WLN"`.
    pub progress: String,
}

/// An entry in a league.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueItem {
    pub player_or_team_id: String,
    pub player_or_team_name: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub mini_series: Option<MiniSeries>,
}

/// A league with all of its entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueList {
    pub league_id: String,
    pub name: String,
    pub tier: String,
    pub queue: String,
    pub entries: Vec<LeagueItem>,
}

/// A summoner's standing in one queue.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaguePosition {
    pub league_name: String,
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub player_or_team_id: String,
    pub player_or_team_name: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub mini_series: Option<MiniSeries>,
}

impl RiotClient {
    /// Gets every league the summoner is in, with all entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_leagues_by_summoner_id(
        &self,
        summoner_id: i64,
        options: &RequestOptions,
    ) -> Result<Vec<LeagueList>, ApiError> {
        self.get(&LEAGUES_BY_SUMMONER, &[summoner_id], Vec::new(), options)
            .await
    }

    /// Gets the summoner's position in each ranked queue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_league_positions_by_summoner_id(
        &self,
        summoner_id: i64,
        options: &RequestOptions,
    ) -> Result<Vec<LeaguePosition>, ApiError> {
        self.get(&POSITIONS_BY_SUMMONER, &[summoner_id], Vec::new(), options)
            .await
    }

    /// Gets the challenger league of a queue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_challenger_league(
        &self,
        queue: RankedQueue,
        options: &RequestOptions,
    ) -> Result<LeagueList, ApiError> {
        self.get(&CHALLENGER_LEAGUE, &[queue], Vec::new(), options)
            .await
    }

    /// Gets the master league of a queue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_master_league(
        &self,
        queue: RankedQueue,
        options: &RequestOptions,
    ) -> Result<LeagueList, ApiError> {
        self.get(&MASTER_LEAGUE, &[queue], Vec::new(), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_paths_keep_mixed_case() {
        assert_eq!(
            CHALLENGER_LEAGUE.path(&[RankedQueue::Solo5x5]).unwrap(),
            "challengerleagues/by-queue/RANKED_SOLO_5x5"
        );
        assert_eq!(
            MASTER_LEAGUE.path(&[RankedQueue::FlexSr]).unwrap(),
            "masterleagues/by-queue/RANKED_FLEX_SR"
        );
    }

    #[test]
    fn test_ranked_queue_serde_matches_display() {
        for queue in [RankedQueue::Solo5x5, RankedQueue::FlexSr, RankedQueue::FlexTt] {
            let json = serde_json::to_string(&queue).unwrap();
            assert_eq!(json, format!("\"{queue}\""));
        }
    }

    #[test]
    fn test_league_list_deserialization() {
        let json = r#"{
            "leagueId": "abc",
            "name": "Nasus's Sentinels",
            "tier": "CHALLENGER",
            "queue": "RANKED_SOLO_5x5",
            "entries": [{
                "playerOrTeamId": "42",
                "playerOrTeamName": "Someone",
                "rank": "I",
                "leaguePoints": 812,
                "wins": 300,
                "losses": 250,
                "hotStreak": true,
                "miniSeries": {"wins": 1, "losses": 0, "target": 2, "progress": "WNN"}
            }]
        }"#;

        let league: LeagueList = serde_json::from_str(json).unwrap();
        assert_eq!(league.entries.len(), 1);
        let entry = &league.entries[0];
        assert_eq!(entry.league_points, 812);
        assert!(entry.hot_streak);
        assert!(!entry.veteran);
        assert_eq!(entry.mini_series.as_ref().unwrap().progress, "WNN");
    }
}
