//! Match endpoints (`lol/match/v3`).
//!
//! Covers single matches, timelines, an account's match list (filterable by
//! champion, queue, season, time range and index range) and the matches
//! played with a tournament code.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use riot_api::RequestOptions;
//! use riot_api::rest::resources::MatchlistFilter;
//!
//! let filter = MatchlistFilter {
//!     queues: vec![420],
//!     begin_time: Some(Utc::now() - Duration::days(7)),
//!     ..MatchlistFilter::default()
//! };
//! let list = client
//!     .get_matchlist_by_account_id(200_000, &filter, &RequestOptions::new())
//!     .await?;
//!
//! for reference in &list.matches {
//!     let game = client.get_match(reference.game_id, &RequestOptions::new()).await?;
//!     println!("{} lasted {}s", game.game_id, game.game_duration);
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::rest::{ApiError, RequestOptions, RiotClient};
use crate::error::ConfigError;
use crate::rest::{ApiFamily, Endpoint, QueryBuilder};
use crate::HttpMethod;

/// Largest `endIndex - beginIndex` the server accepts.
pub const MAX_MATCHLIST_RANGE: u32 = 100;

/// A match by id.
pub const MATCH_BY_ID: Endpoint = Endpoint::new(
    "match.get",
    HttpMethod::Get,
    ApiFamily::Match,
    &["matchId"],
    "matches/{matchId}",
);

/// The timeline of a match.
pub const TIMELINE_BY_MATCH: Endpoint = Endpoint::new(
    "match.timeline",
    HttpMethod::Get,
    ApiFamily::Match,
    &["matchId"],
    "timelines/by-match/{matchId}",
);

/// An account's match list.
pub const MATCHLIST_BY_ACCOUNT: Endpoint = Endpoint::new(
    "match.matchlist",
    HttpMethod::Get,
    ApiFamily::Match,
    &["accountId"],
    "matchlists/by-account/{accountId}",
);

/// An account's most recent matches.
pub const RECENT_MATCHLIST_BY_ACCOUNT: Endpoint = Endpoint::new(
    "match.matchlist_recent",
    HttpMethod::Get,
    ApiFamily::Match,
    &["accountId"],
    "matchlists/by-account/{accountId}/recent",
);

/// Ids of the matches played with a tournament code.
pub const MATCH_IDS_BY_TOURNAMENT_CODE: Endpoint = Endpoint::new(
    "match.ids_by_tournament_code",
    HttpMethod::Get,
    ApiFamily::Match,
    &["tournamentCode"],
    "matches/by-tournament-code/{tournamentCode}/ids",
);

/// A match played with a tournament code.
pub const MATCH_BY_TOURNAMENT_CODE: Endpoint = Endpoint::new(
    "match.by_tournament_code",
    HttpMethod::Get,
    ApiFamily::Match,
    &["matchId", "tournamentCode"],
    "matches/{matchId}/by-tournament-code/{tournamentCode}",
);

/// Filters for an account's match list.
///
/// Empty lists and `None` values are omitted from the query; lists become
/// repeated keys (`champion=1&champion=2`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchlistFilter {
    /// Champion ids to include.
    pub champions: Vec<i64>,
    /// Queue ids to include.
    pub queues: Vec<i32>,
    /// Season ids to include.
    pub seasons: Vec<i32>,
    /// Earliest match creation time.
    pub begin_time: Option<DateTime<Utc>>,
    /// Latest match creation time.
    pub end_time: Option<DateTime<Utc>>,
    /// Index of the first match to return.
    pub begin_index: Option<u32>,
    /// Index after the last match to return.
    pub end_index: Option<u32>,
}

impl MatchlistFilter {
    /// Checks the filter and converts it to query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if a range is inverted or
    /// the index range exceeds [`MAX_MATCHLIST_RANGE`].
    pub fn to_query(&self) -> Result<Vec<(String, String)>, ConfigError> {
        if let (Some(begin), Some(end)) = (self.begin_time, self.end_time) {
            if begin > end {
                return Err(ConfigError::InvalidParameter {
                    name: "beginTime",
                    reason: "must not be after endTime".to_string(),
                });
            }
        }

        if let (Some(begin), Some(end)) = (self.begin_index, self.end_index) {
            if begin > end || end - begin > MAX_MATCHLIST_RANGE {
                return Err(ConfigError::InvalidParameter {
                    name: "endIndex",
                    reason: format!(
                        "must be between beginIndex and beginIndex + {MAX_MATCHLIST_RANGE}"
                    ),
                });
            }
        }

        Ok(QueryBuilder::new()
            .push_all("champion", &self.champions)
            .push_all("queue", &self.queues)
            .push_all("season", &self.seasons)
            .push_time("beginTime", self.begin_time)
            .push_time("endTime", self.end_time)
            .push_opt("beginIndex", self.begin_index)
            .push_opt("endIndex", self.end_index)
            .build())
    }
}

/// A match in a match list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchReference {
    pub game_id: i64,
    pub platform_id: String,
    pub champion: i64,
    pub queue: i32,
    pub season: i32,
    /// When the match was created.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub role: String,
    pub lane: String,
}

/// A page of an account's match list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Matchlist {
    pub matches: Vec<MatchReference>,
    pub total_games: i32,
    pub start_index: i32,
    pub end_index: i32,
}

/// Summary of a team's performance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStats {
    /// 100 for blue side, 200 for red side.
    pub team_id: i32,
    /// `"Win"` or `"Fail"`.
    pub win: String,
    pub first_blood: bool,
    pub first_tower: bool,
    pub first_baron: bool,
    pub first_dragon: bool,
    pub tower_kills: i32,
    pub inhibitor_kills: i32,
    pub baron_kills: i32,
    pub dragon_kills: i32,
}

/// End-of-game statistics of a participant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantStats {
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub champ_level: i32,
    pub gold_earned: i32,
    pub total_damage_dealt: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_minions_killed: i32,
    pub vision_score: i64,
}

/// A participant of a match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: i32,
    pub team_id: i32,
    pub champion_id: i64,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub highest_achieved_season_tier: String,
    pub stats: ParticipantStats,
}

/// The account behind a participant. Absent for anonymized matches.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub account_id: i64,
    pub summoner_id: i64,
    pub summoner_name: String,
    pub platform_id: String,
    pub profile_icon: i32,
}

/// Maps a participant id to a player.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantIdentity {
    pub participant_id: i32,
    pub player: Option<Player>,
}

/// A completed match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    pub game_id: i64,
    pub platform_id: String,
    /// When the team select lobby was created.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub game_creation: DateTime<Utc>,
    /// Length of the game in seconds.
    pub game_duration: i64,
    pub queue_id: i32,
    pub map_id: i32,
    pub season_id: i32,
    pub game_version: String,
    pub game_mode: String,
    pub game_type: String,
    pub teams: Vec<TeamStats>,
    pub participants: Vec<Participant>,
    pub participant_identities: Vec<ParticipantIdentity>,
}

/// A position on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MatchPosition {
    pub x: i32,
    pub y: i32,
}

/// State of one participant at a timeline frame.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantFrame {
    pub participant_id: i32,
    pub level: i32,
    pub xp: i32,
    pub current_gold: i32,
    pub total_gold: i32,
    pub minions_killed: i32,
    pub jungle_minions_killed: i32,
    pub position: Option<MatchPosition>,
}

/// Something that happened during a match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchEvent {
    /// Event type, e.g. `CHAMPION_KILL` or `ITEM_PURCHASED`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Milliseconds since the game started.
    pub timestamp: i64,
    pub participant_id: Option<i32>,
    pub item_id: Option<i32>,
    pub killer_id: Option<i32>,
    pub victim_id: Option<i32>,
    pub assisting_participant_ids: Vec<i32>,
    pub position: Option<MatchPosition>,
}

/// One frame of a match timeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchFrame {
    /// Milliseconds since the game started.
    pub timestamp: i64,
    /// Participant frames keyed by participant id.
    pub participant_frames: HashMap<String, ParticipantFrame>,
    pub events: Vec<MatchEvent>,
}

/// The timeline of a match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchTimeline {
    pub frames: Vec<MatchFrame>,
    /// Milliseconds between frames.
    pub frame_interval: i64,
}

impl RiotClient {
    /// Gets a match by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails; a 404 means the match is unknown.
    pub async fn get_match(&self, match_id: i64, options: &RequestOptions) -> Result<Match, ApiError> {
        self.get(&MATCH_BY_ID, &[match_id], Vec::new(), options)
            .await
    }

    /// Gets the timeline of a match.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_match_timeline(
        &self,
        match_id: i64,
        options: &RequestOptions,
    ) -> Result<MatchTimeline, ApiError> {
        self.get(&TIMELINE_BY_MATCH, &[match_id], Vec::new(), options)
            .await
    }

    /// Gets an account's match list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an invalid filter, before any
    /// request is sent, or [`ApiError`] if the request fails.
    pub async fn get_matchlist_by_account_id(
        &self,
        account_id: i64,
        filter: &MatchlistFilter,
        options: &RequestOptions,
    ) -> Result<Matchlist, ApiError> {
        let query = filter.to_query()?;
        self.get(&MATCHLIST_BY_ACCOUNT, &[account_id], query, options)
            .await
    }

    /// Gets an account's most recent matches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_recent_matchlist_by_account_id(
        &self,
        account_id: i64,
        options: &RequestOptions,
    ) -> Result<Matchlist, ApiError> {
        self.get(&RECENT_MATCHLIST_BY_ACCOUNT, &[account_id], Vec::new(), options)
            .await
    }

    /// Gets the ids of the matches played with a tournament code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_match_ids_by_tournament_code(
        &self,
        tournament_code: &str,
        options: &RequestOptions,
    ) -> Result<Vec<i64>, ApiError> {
        self.get(&MATCH_IDS_BY_TOURNAMENT_CODE, &[tournament_code], Vec::new(), options)
            .await
    }

    /// Gets a match played with a tournament code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_match_for_tournament(
        &self,
        match_id: i64,
        tournament_code: &str,
        options: &RequestOptions,
    ) -> Result<Match, ApiError> {
        let path = [match_id.to_string(), tournament_code.to_string()];
        self.get(&MATCH_BY_TOURNAMENT_CODE, &path, Vec::new(), options)
            .await
    }
}
