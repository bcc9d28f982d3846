//! Endpoint methods, grouped by API family.
//!
//! Each submodule declares its [`Endpoint`](crate::rest::Endpoint) table, the
//! data types of its payloads, and an `impl RiotClient` block with one async
//! method per operation.
//!
//! | Module | Base path | Host |
//! |--------|-----------|------|
//! | [`champion`] | `lol/platform/v3` | platform |
//! | [`league`] | `lol/league/v3` | platform |
//! | [`matches`] | `lol/match/v3` | platform |
//! | [`tournament`] | `lol/tournament/v3`, `lol/tournament-stub/v3` | global |
//! | [`static_data`] | `lol/static-data/v3` | global |
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::RequestOptions;
//! use riot_api::rest::resources::RankedQueue;
//!
//! let options = RequestOptions::new();
//! let positions = client.get_league_positions_by_summoner_id(35_870_943, &options).await?;
//! let league = client.get_challenger_league(RankedQueue::Solo5x5, &options).await?;
//! ```

pub mod champion;
pub mod league;
pub mod matches;
pub mod static_data;
pub mod tournament;

pub use champion::{ChampionStatus, ChampionStatusList};
pub use league::{LeagueItem, LeagueList, LeaguePosition, MiniSeries, RankedQueue};
pub use matches::{
    Match, MatchEvent, MatchFrame, MatchPosition, MatchReference, MatchTimeline, Matchlist,
    MatchlistFilter, Participant, ParticipantFrame, ParticipantIdentity, ParticipantStats, Player,
    TeamStats, MAX_MATCHLIST_RANGE,
};
pub use static_data::{
    Champion, ChampionInfo, ChampionList, ChampionSpell, ChampionStats, Gold, Image, Item,
    ItemGroup, ItemList, ItemTree, LanguageStrings, MapData, MapDataList, Mastery, MasteryList,
    MasteryTree, MasteryTreeItem, MasteryTreeList, MasteryTreeType, Passive, Realm, Rune, RuneList,
    RuneType, Skin, StaticDataOptions, SummonerSpell, SummonerSpellList,
};
pub use tournament::{
    LobbyEvent, MapType, PickType, SpectatorType, TournamentCode, TournamentCodeParameters,
    TournamentCodeUpdate, MAX_CODES_PER_CALL,
};
