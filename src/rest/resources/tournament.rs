//! Tournament endpoints (`lol/tournament/v3`, `lol/tournament-stub/v3`).
//!
//! Registering a provider, creating tournaments, generating and managing
//! tournament codes, and reading lobby events. When
//! [`RiotConfig::use_tournament_stub`](crate::RiotConfig::use_tournament_stub)
//! is set, calls go to the stub API, which accepts interim keys. Reading and
//! updating a single code always uses the live API: the stub does not serve
//! those endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::RequestOptions;
//! use riot_api::rest::resources::TournamentCodeParameters;
//!
//! let options = RequestOptions::new();
//! let provider_id = client
//!     .create_tournament_provider("https://example.com/callback", &options)
//!     .await?;
//! let tournament_id = client
//!     .create_tournament(provider_id, Some("Weekly Cup"), &options)
//!     .await?;
//! let codes = client
//!     .create_tournament_codes(tournament_id, Some(4), &TournamentCodeParameters::default(), &options)
//!     .await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::rest::{ApiError, RequestOptions, RiotClient};
use crate::config::Region;
use crate::error::ConfigError;
use crate::rest::{ApiFamily, Endpoint, QueryBuilder};
use crate::HttpMethod;

/// Registers a tournament provider.
pub const CREATE_PROVIDER: Endpoint = Endpoint::new(
    "tournament.create_provider",
    HttpMethod::Post,
    ApiFamily::Tournament,
    &[],
    "providers",
);

/// Creates a tournament.
pub const CREATE_TOURNAMENT: Endpoint = Endpoint::new(
    "tournament.create_tournament",
    HttpMethod::Post,
    ApiFamily::Tournament,
    &[],
    "tournaments",
);

/// Generates tournament codes.
pub const CREATE_CODES: Endpoint = Endpoint::new(
    "tournament.create_codes",
    HttpMethod::Post,
    ApiFamily::Tournament,
    &[],
    "codes",
);

/// Reads a tournament code.
pub const GET_CODE: Endpoint = Endpoint::new(
    "tournament.get_code",
    HttpMethod::Get,
    ApiFamily::Tournament,
    &["tournamentCode"],
    "codes/{tournamentCode}",
)
.without_stub();

/// Updates a tournament code.
pub const UPDATE_CODE: Endpoint = Endpoint::new(
    "tournament.update_code",
    HttpMethod::Put,
    ApiFamily::Tournament,
    &["tournamentCode"],
    "codes/{tournamentCode}",
)
.without_stub();

/// Lobby events of a tournament code.
pub const LOBBY_EVENTS_BY_CODE: Endpoint = Endpoint::new(
    "tournament.lobby_events",
    HttpMethod::Get,
    ApiFamily::Tournament,
    &["tournamentCode"],
    "lobby-events/by-code/{tournamentCode}",
);

/// Largest number of codes one call may generate.
pub const MAX_CODES_PER_CALL: u32 = 1000;

/// Map a tournament game is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    #[default]
    SummonersRift,
    TwistedTreeline,
    HowlingAbyss,
}

/// Pick mode of a tournament game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    BlindPick,
    DraftMode,
    AllRandom,
    #[default]
    TournamentDraft,
}

/// Who may spectate a tournament game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpectatorType {
    None,
    #[serde(rename = "LOBBYONLY")]
    LobbyOnly,
    #[default]
    All,
}

#[derive(Serialize)]
struct ProviderRegistration<'a> {
    region: Region,
    url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TournamentRegistration<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    provider_id: i64,
}

/// Settings of the games played with generated codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParameters {
    /// Summoner ids allowed to join; anyone may join when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_participants: Option<Vec<i64>>,
    pub map_type: MapType,
    pub pick_type: PickType,
    pub spectator_type: SpectatorType,
    /// Players per team, 1 to 5.
    pub team_size: u8,
    /// Free-form data returned with the game result callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl Default for TournamentCodeParameters {
    fn default() -> Self {
        Self {
            allowed_participants: None,
            map_type: MapType::default(),
            pick_type: PickType::default(),
            spectator_type: SpectatorType::default(),
            team_size: 5,
            metadata: None,
        }
    }
}

/// Changes to an existing tournament code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_participants: Option<Vec<i64>>,
    pub map_type: MapType,
    pub pick_type: PickType,
    pub spectator_type: SpectatorType,
}

impl From<&TournamentCode> for TournamentCodeUpdate {
    fn from(code: &TournamentCode) -> Self {
        Self {
            allowed_participants: Some(code.participants.clone()),
            map_type: code.map,
            pick_type: code.pick_type,
            spectator_type: code.spectators,
        }
    }
}

/// Details of a tournament code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TournamentCode {
    pub id: i64,
    pub code: String,
    pub provider_id: i64,
    pub tournament_id: i64,
    pub region: String,
    pub lobby_name: String,
    pub password: String,
    pub map: MapType,
    pub pick_type: PickType,
    pub spectators: SpectatorType,
    pub team_size: i32,
    /// Summoner ids allowed to join.
    pub participants: Vec<i64>,
    pub meta_data: String,
}

/// An event in a tournament lobby.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LobbyEvent {
    /// E.g. `PracticeGameCreatedEvent` or `PlayerJoinedGameEvent`.
    pub event_type: String,
    pub summoner_id: String,
    /// Epoch milliseconds, as a string.
    pub timestamp: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LobbyEventList {
    event_list: Vec<LobbyEvent>,
}

impl TournamentCodeParameters {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.team_size) {
            return Err(ConfigError::InvalidParameter {
                name: "teamSize",
                reason: format!("must be between 1 and 5, got {}", self.team_size),
            });
        }
        Ok(())
    }
}

impl RiotClient {
    /// Registers a tournament provider for the region of the call's platform
    /// and returns its id. `url` receives game results.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_tournament_provider(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<i64, ApiError> {
        let body = ProviderRegistration {
            region: self.platform(options).region(),
            url,
        };
        self.post(&CREATE_PROVIDER, &[] as &[i64], Vec::new(), &body, options)
            .await
    }

    /// Creates a tournament and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_tournament(
        &self,
        provider_id: i64,
        name: Option<&str>,
        options: &RequestOptions,
    ) -> Result<i64, ApiError> {
        let body = TournamentRegistration { name, provider_id };
        self.post(&CREATE_TOURNAMENT, &[] as &[i64], Vec::new(), &body, options)
            .await
    }

    /// Generates `count` codes (one when `None`) for a tournament.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an invalid team size or count,
    /// before any request is sent, or [`ApiError`] if the request fails.
    pub async fn create_tournament_codes(
        &self,
        tournament_id: i64,
        count: Option<u32>,
        parameters: &TournamentCodeParameters,
        options: &RequestOptions,
    ) -> Result<Vec<String>, ApiError> {
        parameters.validate()?;
        if let Some(count) = count {
            if count == 0 || count > MAX_CODES_PER_CALL {
                return Err(ConfigError::InvalidParameter {
                    name: "count",
                    reason: format!("must be between 1 and {MAX_CODES_PER_CALL}, got {count}"),
                }
                .into());
            }
        }

        let query = QueryBuilder::new()
            .push("tournamentId", tournament_id)
            .push_opt("count", count)
            .build();
        self.post(&CREATE_CODES, &[] as &[i64], query, parameters, options)
            .await
    }

    /// Gets the details of a tournament code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_tournament_code(
        &self,
        tournament_code: &str,
        options: &RequestOptions,
    ) -> Result<TournamentCode, ApiError> {
        self.get(&GET_CODE, &[tournament_code], Vec::new(), options)
            .await
    }

    /// Saves changes to a tournament code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_tournament_code(
        &self,
        tournament_code: &str,
        update: &TournamentCodeUpdate,
        options: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.put(&UPDATE_CODE, &[tournament_code], update, options)
            .await
    }

    /// Gets the lobby events of a tournament code game.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_tournament_code_lobby_events(
        &self,
        tournament_code: &str,
        options: &RequestOptions,
    ) -> Result<Vec<LobbyEvent>, ApiError> {
        let list: LobbyEventList = self
            .get(&LOBBY_EVENTS_BY_CODE, &[tournament_code], Vec::new(), options)
            .await?;
        Ok(list.event_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_parameters_default_body() {
        let body = serde_json::to_value(TournamentCodeParameters::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "mapType": "SUMMONERS_RIFT",
                "pickType": "TOURNAMENT_DRAFT",
                "spectatorType": "ALL",
                "teamSize": 5
            })
        );
    }

    #[test]
    fn test_code_parameters_reject_bad_team_size() {
        let parameters = TournamentCodeParameters {
            team_size: 6,
            ..TournamentCodeParameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(ConfigError::InvalidParameter { name: "teamSize", .. })
        ));
    }

    #[test]
    fn test_provider_body_uses_region_code() {
        let body = serde_json::to_value(ProviderRegistration {
            region: Region::Eune,
            url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, json!({"region": "EUNE", "url": "https://example.com"}));
    }

    #[test]
    fn test_tournament_body_omits_missing_name() {
        let body = serde_json::to_value(TournamentRegistration {
            name: None,
            provider_id: 7,
        })
        .unwrap();
        assert_eq!(body, json!({"providerId": 7}));
    }

    #[test]
    fn test_update_from_existing_code() {
        let code: TournamentCode = serde_json::from_value(json!({
            "code": "NA-1",
            "map": "HOWLING_ABYSS",
            "pickType": "ALL_RANDOM",
            "spectators": "LOBBYONLY",
            "participants": [1, 2]
        }))
        .unwrap();

        let update = TournamentCodeUpdate::from(&code);
        assert_eq!(update.map_type, MapType::HowlingAbyss);
        assert_eq!(update.pick_type, PickType::AllRandom);
        assert_eq!(update.spectator_type, SpectatorType::LobbyOnly);
        assert_eq!(update.allowed_participants, Some(vec![1, 2]));
    }

    #[test]
    fn test_code_endpoints_bypass_stub() {
        assert!(!GET_CODE.stub_supported);
        assert!(!UPDATE_CODE.stub_supported);
        assert!(LOBBY_EVENTS_BY_CODE.stub_supported);
    }
}
