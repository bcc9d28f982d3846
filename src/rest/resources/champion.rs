//! Champion availability endpoints (`lol/platform/v3`).
//!
//! These endpoints report which champions are enabled on a platform and
//! which are in the current free rotation. Static champion data (names,
//! lore, spells) lives in [`static_data`](super::static_data).
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::RequestOptions;
//!
//! let rotation = client.get_champions(true, &RequestOptions::new()).await?;
//! for champion in &rotation {
//!     println!("{} is free to play", champion.id);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::rest::{ApiError, RequestOptions, RiotClient};
use crate::rest::{ApiFamily, Endpoint, QueryBuilder};
use crate::HttpMethod;

/// Champions, optionally filtered to the free rotation.
pub const CHAMPIONS: Endpoint = Endpoint::new(
    "champion.all",
    HttpMethod::Get,
    ApiFamily::Champion,
    &[],
    "champions",
);

/// A single champion by id.
pub const CHAMPION_BY_ID: Endpoint = Endpoint::new(
    "champion.get",
    HttpMethod::Get,
    ApiFamily::Champion,
    &["id"],
    "champions/{id}",
);

/// Availability of a champion on a platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionStatus {
    /// The champion id.
    pub id: i64,
    /// Whether the champion is enabled.
    pub active: bool,
    /// Whether the champion is enabled for custom games with bots.
    pub bot_enabled: bool,
    /// Whether the champion is enabled for co-op vs. AI.
    pub bot_mm_enabled: bool,
    /// Whether the champion is in the free rotation.
    pub free_to_play: bool,
    /// Whether the champion is enabled for ranked play.
    pub ranked_play_enabled: bool,
}

/// Wrapper returned by the champions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChampionStatusList {
    /// The champions.
    pub champions: Vec<ChampionStatus>,
}

impl RiotClient {
    /// Gets the availability of every champion, or of the free rotation
    /// when `free_to_play` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_champions(
        &self,
        free_to_play: bool,
        options: &RequestOptions,
    ) -> Result<Vec<ChampionStatus>, ApiError> {
        let query = QueryBuilder::new().push("freeToPlay", free_to_play).build();
        let list: ChampionStatusList = self.get(&CHAMPIONS, &[] as &[i64], query, options).await?;
        Ok(list.champions)
    }

    /// Gets the availability of one champion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails; a 404 means the id is unknown.
    pub async fn get_champion_by_id(
        &self,
        id: i64,
        options: &RequestOptions,
    ) -> Result<ChampionStatus, ApiError> {
        self.get(&CHAMPION_BY_ID, &[id], Vec::new(), options).await
    }
}
