//! Static reference data (`lol/static-data/v3`).
//!
//! Champions, items, runes, masteries, maps, summoner spells, languages,
//! realms and versions. These
//! endpoints are served from the global host and share a set of query
//! options, collected in [`StaticDataOptions`]:
//!
//! - `locale` and `version` pick the language and patch of the data.
//! - `dataById` keys list dictionaries by numeric id instead of by key.
//! - The [`FieldSelection`] is sent as repeated `tags` parameters, and
//!   unselected fields are left at their zero value on the returned types.
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::rest::resources::StaticDataOptions;
//!
//! let options = StaticDataOptions::new()
//!     .select(["Lore", "EnemyTips"])
//!     .data_by_id(true);
//! let champions = client.get_static_champions(&options).await?;
//! let karma = &champions.data["43"];
//! println!("{}: {}", karma.name, karma.lore);
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::rest::{ApiError, RequestOptions, RiotClient};
use crate::error::ConfigError;
use crate::rest::{
    mask_data_entries, mask_object, rekey, ApiFamily, DataEntry, DataKey, Endpoint,
    FieldSelection, QueryBuilder, SelectableField, SelectableFields,
};
use crate::HttpMethod;

/// All champions.
pub const CHAMPIONS: Endpoint = Endpoint::new(
    "static_data.champions",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "champions",
);

/// A champion by id.
pub const CHAMPION_BY_ID: Endpoint = Endpoint::new(
    "static_data.champion",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &["id"],
    "champions/{id}",
);

/// All items.
pub const ITEMS: Endpoint = Endpoint::new(
    "static_data.items",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "items",
);

/// An item by id.
pub const ITEM_BY_ID: Endpoint = Endpoint::new(
    "static_data.item",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &["id"],
    "items/{id}",
);

/// All runes.
pub const RUNES: Endpoint = Endpoint::new(
    "static_data.runes",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "runes",
);

/// A rune by id.
pub const RUNE_BY_ID: Endpoint = Endpoint::new(
    "static_data.rune",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &["id"],
    "runes/{id}",
);

/// Supported locales.
pub const LANGUAGES: Endpoint = Endpoint::new(
    "static_data.languages",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "languages",
);

/// Client strings of a locale.
pub const LANGUAGE_STRINGS: Endpoint = Endpoint::new(
    "static_data.language_strings",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "language-strings",
);

/// All masteries.
pub const MASTERIES: Endpoint = Endpoint::new(
    "static_data.masteries",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "masteries",
);

/// A mastery by id.
pub const MASTERY_BY_ID: Endpoint = Endpoint::new(
    "static_data.mastery",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &["id"],
    "masteries/{id}",
);

/// All maps.
pub const MAPS: Endpoint = Endpoint::new(
    "static_data.maps",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "maps",
);

/// All summoner spells.
pub const SUMMONER_SPELLS: Endpoint = Endpoint::new(
    "static_data.summoner_spells",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "summoner-spells",
);

/// A summoner spell by id.
pub const SUMMONER_SPELL_BY_ID: Endpoint = Endpoint::new(
    "static_data.summoner_spell",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &["id"],
    "summoner-spells/{id}",
);

/// Realm data of the global static-data host.
pub const REALMS: Endpoint = Endpoint::new(
    "static_data.realms",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "realms",
);

/// Data versions, newest first.
pub const VERSIONS: Endpoint = Endpoint::new(
    "static_data.versions",
    HttpMethod::Get,
    ApiFamily::StaticData,
    &[],
    "versions",
);

/// Options shared by the static-data calls.
///
/// # Example
///
/// ```rust
/// use riot_api::rest::resources::StaticDataOptions;
/// use riot_api::PlatformId;
/// use riot_api::RequestOptions;
///
/// let options = StaticDataOptions::new()
///     .select(["Image", "Gold"])
///     .locale("ko_KR")
///     .request(RequestOptions::new().platform(PlatformId::Kr));
///
/// assert!(options.selection.contains("Gold"));
/// assert_eq!(options.locale.as_deref(), Some("ko_KR"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticDataOptions {
    /// Fields to populate; empty means every field.
    pub selection: FieldSelection,
    /// Key list dictionaries by numeric id.
    pub data_by_id: bool,
    /// Language of the data, e.g. `en_US`.
    pub locale: Option<String>,
    /// Patch of the data, e.g. `7.10.1`.
    pub version: Option<String>,
    /// Per-call options for the underlying request.
    pub request: RequestOptions,
}

impl StaticDataOptions {
    /// Creates options requesting every field in the default locale and
    /// version.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects fields by identifier.
    #[must_use]
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = FieldSelection::new(fields);
        self
    }

    /// Keys list dictionaries by id.
    #[must_use]
    pub const fn data_by_id(mut self, data_by_id: bool) -> Self {
        self.data_by_id = data_by_id;
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the data version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the per-call request options.
    #[must_use]
    pub fn request(mut self, request: RequestOptions) -> Self {
        self.request = request;
        self
    }

    fn query<T: SelectableFields>(&self, keyed: bool) -> Result<Vec<(String, String)>, ConfigError> {
        let tags = self.selection.tags::<T>()?;
        Ok(QueryBuilder::new()
            .push_opt("locale", self.locale.as_deref())
            .push_opt("version", self.version.as_deref())
            .push_opt("dataById", keyed.then_some(self.data_by_id))
            .push_all("tags", tags)
            .build())
    }

    fn plain_query(&self) -> Vec<(String, String)> {
        QueryBuilder::new()
            .push_opt("locale", self.locale.as_deref())
            .push_opt("version", self.version.as_deref())
            .build()
    }
}

/// List payloads whose `data` dictionary can be rekeyed.
trait KeyedData {
    type Entry: DataEntry;

    fn data_mut(&mut self) -> &mut HashMap<String, Self::Entry>;
}

/// A sprite reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Image {
    pub full: String,
    pub group: String,
    pub sprite: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Difficulty ratings of a champion, 0 to 10.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

/// Base statistics of a champion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChampionStats {
    pub armor: f64,
    #[serde(rename = "armorperlevel")]
    pub armor_per_level: f64,
    #[serde(rename = "attackdamage")]
    pub attack_damage: f64,
    #[serde(rename = "attackdamageperlevel")]
    pub attack_damage_per_level: f64,
    #[serde(rename = "attackrange")]
    pub attack_range: f64,
    #[serde(rename = "attackspeedoffset")]
    pub attack_speed_offset: f64,
    #[serde(rename = "attackspeedperlevel")]
    pub attack_speed_per_level: f64,
    pub crit: f64,
    #[serde(rename = "critperlevel")]
    pub crit_per_level: f64,
    pub hp: f64,
    #[serde(rename = "hpperlevel")]
    pub hp_per_level: f64,
    #[serde(rename = "hpregen")]
    pub hp_regen: f64,
    #[serde(rename = "hpregenperlevel")]
    pub hp_regen_per_level: f64,
    #[serde(rename = "movespeed")]
    pub move_speed: f64,
    pub mp: f64,
    #[serde(rename = "mpperlevel")]
    pub mp_per_level: f64,
    #[serde(rename = "mpregen")]
    pub mp_regen: f64,
    #[serde(rename = "mpregenperlevel")]
    pub mp_regen_per_level: f64,
    #[serde(rename = "spellblock")]
    pub spell_block: f64,
    #[serde(rename = "spellblockperlevel")]
    pub spell_block_per_level: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Skin {
    pub id: i64,
    pub name: String,
    pub num: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Passive {
    pub name: String,
    pub description: String,
    pub sanitized_description: String,
    pub image: Image,
}

/// A champion ability.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionSpell {
    pub key: String,
    pub name: String,
    pub description: String,
    pub sanitized_description: String,
    pub tooltip: String,
    pub sanitized_tooltip: String,
    #[serde(rename = "maxrank")]
    pub max_rank: i32,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub cost: Vec<i64>,
    pub cost_burn: String,
    pub cost_type: String,
    pub range_burn: String,
    pub image: Image,
}

/// Static data of a champion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Champion {
    pub id: i64,
    /// Human-readable key, e.g. `"MonkeyKing"`.
    pub key: String,
    pub name: String,
    pub title: String,
    #[serde(rename = "allytips")]
    pub ally_tips: Vec<String>,
    pub blurb: String,
    #[serde(rename = "enemytips")]
    pub enemy_tips: Vec<String>,
    pub image: Image,
    pub info: ChampionInfo,
    pub lore: String,
    #[serde(rename = "partype")]
    pub par_type: String,
    pub passive: Passive,
    pub skins: Vec<Skin>,
    pub spells: Vec<ChampionSpell>,
    pub stats: ChampionStats,
    pub tags: Vec<String>,
}

impl SelectableFields for Champion {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("AllyTips", "allytips"),
        SelectableField::new("Blurb", "blurb"),
        SelectableField::new("EnemyTips", "enemytips"),
        SelectableField::new("Image", "image"),
        SelectableField::new("Info", "info"),
        SelectableField::new("Lore", "lore"),
        SelectableField::new("ParType", "partype"),
        SelectableField::new("Passive", "passive"),
        SelectableField::new("Skins", "skins"),
        SelectableField::new("Spells", "spells"),
        SelectableField::new("Stats", "stats"),
        SelectableField::new("Tags", "tags"),
    ];
    const IDENTITY: &'static [&'static str] = &["id", "key", "name", "title"];
}

impl DataEntry for Champion {
    fn entry_id(&self) -> i64 {
        self.id
    }

    fn entry_key(&self) -> Option<&str> {
        Some(&self.key)
    }
}

/// All champions of a version.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChampionList {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub format: String,
    /// Champion ids to keys, or keys to ids when keyed by id.
    pub keys: HashMap<String, String>,
    pub data: HashMap<String, Champion>,
}

impl SelectableFields for ChampionList {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("Format", "format"),
        SelectableField::new("Keys", "keys"),
    ];
    const NESTED: &'static [SelectableField] = Champion::FIELDS;

    fn mask(value: &mut Value, selection: &FieldSelection) {
        mask_object(value, Self::FIELDS, Self::IDENTITY, selection);
        mask_data_entries::<Champion>(value, selection);
    }
}

impl KeyedData for ChampionList {
    type Entry = Champion;

    fn data_mut(&mut self) -> &mut HashMap<String, Champion> {
        &mut self.data
    }
}

/// Price of an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Gold {
    pub base: i32,
    pub total: i32,
    pub sell: i32,
    pub purchasable: bool,
}

/// Static data of an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "plaintext")]
    pub plain_text: String,
    pub colloq: String,
    pub consume_on_full: bool,
    pub consumed: bool,
    pub depth: i32,
    pub effect: HashMap<String, String>,
    /// Ids of the items this one is built from.
    pub from: Vec<String>,
    pub gold: Gold,
    pub group: String,
    pub hide_from_all: bool,
    pub image: Image,
    pub in_store: bool,
    /// Ids of the items this one builds into.
    pub into: Vec<String>,
    /// Map ids to availability.
    pub maps: HashMap<String, bool>,
    pub required_champion: String,
    pub sanitized_description: String,
    pub special_recipe: i64,
    pub stacks: i32,
    pub stats: HashMap<String, f64>,
    pub tags: Vec<String>,
}

impl SelectableFields for Item {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("Colloq", "colloq"),
        SelectableField::new("ConsumeOnFull", "consumeOnFull"),
        SelectableField::new("Consumed", "consumed"),
        SelectableField::new("Depth", "depth"),
        SelectableField::new("Effect", "effect"),
        SelectableField::new("From", "from"),
        SelectableField::new("Gold", "gold"),
        SelectableField::new("Group", "group"),
        SelectableField::new("HideFromAll", "hideFromAll"),
        SelectableField::new("Image", "image"),
        SelectableField::new("InStore", "inStore"),
        SelectableField::new("Into", "into"),
        SelectableField::new("Maps", "maps"),
        SelectableField::new("RequiredChampion", "requiredChampion"),
        SelectableField::new("SanitizedDescription", "sanitizedDescription"),
        SelectableField::new("SpecialRecipe", "specialRecipe"),
        SelectableField::new("Stacks", "stacks"),
        SelectableField::new("Stats", "stats"),
        SelectableField::new("Tags", "tags"),
    ];
    const IDENTITY: &'static [&'static str] = &["id", "name", "description", "plaintext"];
}

impl DataEntry for Item {
    fn entry_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemGroup {
    pub id: String,
    #[serde(rename = "MaxGroupOwnable")]
    pub max_group_ownable: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemTree {
    pub header: String,
    pub tags: Vec<String>,
}

/// All items of a version.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItemList {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub groups: Vec<ItemGroup>,
    pub tree: Vec<ItemTree>,
    pub data: HashMap<String, Item>,
}

impl SelectableFields for ItemList {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("Groups", "groups"),
        SelectableField::new("Tree", "tree"),
    ];
    const NESTED: &'static [SelectableField] = Item::FIELDS;

    fn mask(value: &mut Value, selection: &FieldSelection) {
        mask_object(value, Self::FIELDS, Self::IDENTITY, selection);
        mask_data_entries::<Item>(value, selection);
    }
}

impl KeyedData for ItemList {
    type Entry = Item;

    fn data_mut(&mut self) -> &mut HashMap<String, Item> {
        &mut self.data
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuneType {
    #[serde(rename = "isrune")]
    pub is_rune: bool,
    pub tier: String,
    #[serde(rename = "type")]
    pub rune_type: String,
}

/// Static data of a rune.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Rune {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rune: RuneType,
    pub image: Image,
    pub sanitized_description: String,
    pub stats: HashMap<String, f64>,
    pub tags: Vec<String>,
}

impl SelectableFields for Rune {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("Image", "image"),
        SelectableField::new("SanitizedDescription", "sanitizedDescription"),
        SelectableField::new("Stats", "stats"),
        SelectableField::new("Tags", "tags"),
    ];
    const IDENTITY: &'static [&'static str] = &["id", "name", "description", "rune"];
}

impl DataEntry for Rune {
    fn entry_id(&self) -> i64 {
        self.id
    }
}

/// All runes of a version.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuneList {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub data: HashMap<String, Rune>,
}

impl SelectableFields for RuneList {
    const FIELDS: &'static [SelectableField] = &[];
    const NESTED: &'static [SelectableField] = Rune::FIELDS;

    fn mask(value: &mut Value, selection: &FieldSelection) {
        mask_data_entries::<Rune>(value, selection);
    }
}

impl KeyedData for RuneList {
    type Entry = Rune;

    fn data_mut(&mut self) -> &mut HashMap<String, Rune> {
        &mut self.data
    }
}

/// Mastery page tree a mastery belongs to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MasteryTreeType {
    #[default]
    Ferocity,
    Cunning,
    Resolve,
}

/// Static data of a mastery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Mastery {
    pub id: i64,
    pub name: String,
    /// One description per rank.
    pub description: Vec<String>,
    pub image: Image,
    pub mastery_tree: MasteryTreeType,
    /// Id of the mastery required first, `"0"` when none.
    pub prereq: String,
    pub ranks: i32,
    pub sanitized_description: Vec<String>,
}

impl SelectableFields for Mastery {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("Image", "image"),
        SelectableField::new("MasteryTree", "masteryTree"),
        SelectableField::new("Prereq", "prereq"),
        SelectableField::new("Ranks", "ranks"),
        SelectableField::new("SanitizedDescription", "sanitizedDescription"),
    ];
    const IDENTITY: &'static [&'static str] = &["id", "name", "description"];
}

impl DataEntry for Mastery {
    fn entry_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MasteryTreeItem {
    pub mastery_id: i64,
    pub prereq: String,
}

/// One row of a mastery tree; empty slots are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MasteryTreeList {
    pub mastery_tree_items: Vec<Option<MasteryTreeItem>>,
}

/// Layout of the three mastery trees.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub struct MasteryTree {
    pub ferocity: Vec<MasteryTreeList>,
    pub cunning: Vec<MasteryTreeList>,
    pub resolve: Vec<MasteryTreeList>,
}

/// All masteries of a version, keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MasteryList {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub tree: MasteryTree,
    pub data: HashMap<String, Mastery>,
}

impl SelectableFields for MasteryList {
    const FIELDS: &'static [SelectableField] = &[SelectableField::new("Tree", "tree")];
    const NESTED: &'static [SelectableField] = Mastery::FIELDS;

    fn mask(value: &mut Value, selection: &FieldSelection) {
        mask_object(value, Self::FIELDS, Self::IDENTITY, selection);
        mask_data_entries::<Mastery>(value, selection);
    }
}

impl KeyedData for MasteryList {
    type Entry = Mastery;

    fn data_mut(&mut self) -> &mut HashMap<String, Mastery> {
        &mut self.data
    }
}

/// Client strings of a locale, by string key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LanguageStrings {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub data: HashMap<String, String>,
}

/// Static data of a map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MapData {
    pub map_id: i64,
    pub map_name: String,
    pub image: Image,
    /// Items that cannot be bought on this map.
    pub unpurchasable_item_list: Vec<i64>,
}

/// All maps, keyed by map id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MapDataList {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub data: HashMap<String, MapData>,
}

/// Static data of a summoner spell.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerSpell {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub description: String,
    pub summoner_level: i32,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub cost: Vec<i64>,
    pub cost_burn: String,
    pub cost_type: String,
    pub image: Image,
    #[serde(rename = "maxrank")]
    pub max_rank: i32,
    /// Game modes the spell is available in.
    pub modes: Vec<String>,
    pub range_burn: String,
    pub sanitized_description: String,
    pub sanitized_tooltip: String,
    pub tooltip: String,
}

impl SelectableFields for SummonerSpell {
    const FIELDS: &'static [SelectableField] = &[
        SelectableField::new("Cooldown", "cooldown"),
        SelectableField::new("CooldownBurn", "cooldownBurn"),
        SelectableField::new("Cost", "cost"),
        SelectableField::new("CostBurn", "costBurn"),
        SelectableField::new("CostType", "costType"),
        SelectableField::new("Image", "image"),
        SelectableField::new("MaxRank", "maxrank"),
        SelectableField::new("Modes", "modes"),
        SelectableField::new("RangeBurn", "rangeBurn"),
        SelectableField::new("SanitizedDescription", "sanitizedDescription"),
        SelectableField::new("SanitizedTooltip", "sanitizedTooltip"),
        SelectableField::new("Tooltip", "tooltip"),
    ];
    const IDENTITY: &'static [&'static str] =
        &["id", "key", "name", "description", "summonerLevel"];
}

impl DataEntry for SummonerSpell {
    fn entry_id(&self) -> i64 {
        self.id
    }

    fn entry_key(&self) -> Option<&str> {
        Some(&self.key)
    }
}

/// All summoner spells of a version.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummonerSpellList {
    #[serde(rename = "type")]
    pub data_type: String,
    pub version: String,
    pub data: HashMap<String, SummonerSpell>,
}

impl SelectableFields for SummonerSpellList {
    const FIELDS: &'static [SelectableField] = &[];
    const NESTED: &'static [SelectableField] = SummonerSpell::FIELDS;

    fn mask(value: &mut Value, selection: &FieldSelection) {
        mask_data_entries::<SummonerSpell>(value, selection);
    }
}

impl KeyedData for SummonerSpellList {
    type Entry = SummonerSpell;

    fn data_mut(&mut self) -> &mut HashMap<String, SummonerSpell> {
        &mut self.data
    }
}

/// CDN locations and current versions of a platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Realm {
    /// Current version of the realm.
    pub v: String,
    /// Default locale.
    pub l: String,
    /// Base CDN URL.
    pub cdn: String,
    /// Data Dragon version.
    pub dd: String,
    /// Legacy script version.
    pub lg: String,
    pub css: String,
    /// Current version of each data type.
    pub n: HashMap<String, String>,
    #[serde(rename = "profileiconmax")]
    pub profile_icon_max: i32,
    pub store: Option<String>,
}

impl RiotClient {
    /// Gets every champion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the selection names a field champions
    /// do not have, or [`ApiError`] if the request fails.
    pub async fn get_static_champions(
        &self,
        options: &StaticDataOptions,
    ) -> Result<ChampionList, ApiError> {
        self.static_list(&CHAMPIONS, true, options).await
    }

    /// Gets a champion by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_champion_by_id(
        &self,
        id: i64,
        options: &StaticDataOptions,
    ) -> Result<Champion, ApiError> {
        self.static_entry(&CHAMPION_BY_ID, id, options).await
    }

    /// Gets every item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_items(&self, options: &StaticDataOptions) -> Result<ItemList, ApiError> {
        self.static_list(&ITEMS, false, options).await
    }

    /// Gets an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_item_by_id(
        &self,
        id: i64,
        options: &StaticDataOptions,
    ) -> Result<Item, ApiError> {
        self.static_entry(&ITEM_BY_ID, id, options).await
    }

    /// Gets every rune.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_runes(&self, options: &StaticDataOptions) -> Result<RuneList, ApiError> {
        self.static_list(&RUNES, false, options).await
    }

    /// Gets a rune by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_rune_by_id(
        &self,
        id: i64,
        options: &StaticDataOptions,
    ) -> Result<Rune, ApiError> {
        self.static_entry(&RUNE_BY_ID, id, options).await
    }

    /// Gets every mastery.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_masteries(
        &self,
        options: &StaticDataOptions,
    ) -> Result<MasteryList, ApiError> {
        self.static_list(&MASTERIES, false, options).await
    }

    /// Gets a mastery by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_mastery_by_id(
        &self,
        id: i64,
        options: &StaticDataOptions,
    ) -> Result<Mastery, ApiError> {
        self.static_entry(&MASTERY_BY_ID, id, options).await
    }

    /// Gets the locales static data is available in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_static_languages(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<String>, ApiError> {
        self.get(&LANGUAGES, &[] as &[i64], Vec::new(), options).await
    }

    /// Gets the client strings of the options' locale and version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_static_language_strings(
        &self,
        options: &StaticDataOptions,
    ) -> Result<LanguageStrings, ApiError> {
        self.get(&LANGUAGE_STRINGS, &[] as &[i64], options.plain_query(), &options.request)
            .await
    }

    /// Gets every map. Maps take no field selection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_static_maps(
        &self,
        options: &StaticDataOptions,
    ) -> Result<MapDataList, ApiError> {
        self.get(&MAPS, &[] as &[i64], options.plain_query(), &options.request)
            .await
    }

    /// Gets every summoner spell.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_summoner_spells(
        &self,
        options: &StaticDataOptions,
    ) -> Result<SummonerSpellList, ApiError> {
        self.static_list(&SUMMONER_SPELLS, true, options).await
    }

    /// Gets a summoner spell by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the selection is invalid or the request fails.
    pub async fn get_static_summoner_spell_by_id(
        &self,
        id: i64,
        options: &StaticDataOptions,
    ) -> Result<SummonerSpell, ApiError> {
        self.static_entry(&SUMMONER_SPELL_BY_ID, id, options).await
    }

    /// Gets the realm data served by the global static-data host. The
    /// platform of `options` does not change the result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_static_realm(&self, options: &RequestOptions) -> Result<Realm, ApiError> {
        self.get(&REALMS, &[] as &[i64], Vec::new(), options).await
    }

    /// Gets every data version, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_static_versions(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<String>, ApiError> {
        self.get(&VERSIONS, &[] as &[i64], Vec::new(), options).await
    }

    async fn static_list<L>(
        &self,
        endpoint: &Endpoint,
        keyed: bool,
        options: &StaticDataOptions,
    ) -> Result<L, ApiError>
    where
        L: DeserializeOwned + Default + SelectableFields + KeyedData,
    {
        let query = options.query::<L>(keyed)?;
        let mut list: L = self
            .execute_selected(
                endpoint,
                &[] as &[i64],
                query,
                &options.selection,
                &options.request,
            )
            .await?;

        let by = DataKey::from_data_by_id(options.data_by_id);
        let data = std::mem::take(list.data_mut());
        *list.data_mut() = rekey(data, by);
        Ok(list)
    }

    async fn static_entry<T>(
        &self,
        endpoint: &Endpoint,
        id: i64,
        options: &StaticDataOptions,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default + SelectableFields,
    {
        let query = options.query::<T>(false)?;
        self.execute_selected(endpoint, &[id], query, &options.selection, &options.request)
            .await
    }
}
