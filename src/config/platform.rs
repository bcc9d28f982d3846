//! Platform and region definitions.
//!
//! This module provides the [`PlatformId`] enum identifying a game server
//! shard, and the [`Region`] codes used by the tournament API. Resolution
//! from a platform to its host name and region is a pure table lookup.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Host serving the platform-independent API families (tournaments, static data).
pub const GLOBAL_HOST: &str = "global.api.riotgames.com";

/// A game server shard.
///
/// Each platform is served by its own host, and maps to one tournament
/// [`Region`].
///
/// # Example
///
/// ```rust
/// use riot_api::{PlatformId, Region};
///
/// let platform: PlatformId = "EUW1".parse().unwrap();
/// assert_eq!(platform, PlatformId::Euw1);
/// assert_eq!(platform.host(), "euw1.api.riotgames.com");
/// assert_eq!(platform.region(), Region::Euw);
/// assert_eq!(platform.to_string(), "EUW1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformId {
    /// Brazil.
    Br1,
    /// Europe Nordic & East.
    Eun1,
    /// Europe West.
    Euw1,
    /// Japan.
    Jp1,
    /// Republic of Korea.
    Kr,
    /// Latin America North.
    La1,
    /// Latin America South.
    La2,
    /// North America.
    Na1,
    /// Oceania.
    Oc1,
    /// Public Beta Environment.
    Pbe1,
    /// Russia.
    Ru,
    /// Turkey.
    Tr1,
}

impl PlatformId {
    /// Every known platform, in alphabetical order of its code.
    pub const ALL: [Self; 12] = [
        Self::Br1,
        Self::Eun1,
        Self::Euw1,
        Self::Jp1,
        Self::Kr,
        Self::La1,
        Self::La2,
        Self::Na1,
        Self::Oc1,
        Self::Pbe1,
        Self::Ru,
        Self::Tr1,
    ];

    /// Returns the wire code for this platform (e.g., `"NA1"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Br1 => "BR1",
            Self::Eun1 => "EUN1",
            Self::Euw1 => "EUW1",
            Self::Jp1 => "JP1",
            Self::Kr => "KR",
            Self::La1 => "LA1",
            Self::La2 => "LA2",
            Self::Na1 => "NA1",
            Self::Oc1 => "OC1",
            Self::Pbe1 => "PBE1",
            Self::Ru => "RU",
            Self::Tr1 => "TR1",
        }
    }

    /// Returns the host name serving this platform.
    #[must_use]
    pub const fn host(&self) -> &'static str {
        match self {
            Self::Br1 => "br1.api.riotgames.com",
            Self::Eun1 => "eun1.api.riotgames.com",
            Self::Euw1 => "euw1.api.riotgames.com",
            Self::Jp1 => "jp1.api.riotgames.com",
            Self::Kr => "kr.api.riotgames.com",
            Self::La1 => "la1.api.riotgames.com",
            Self::La2 => "la2.api.riotgames.com",
            Self::Na1 => "na1.api.riotgames.com",
            Self::Oc1 => "oc1.api.riotgames.com",
            Self::Pbe1 => "pbe1.api.riotgames.com",
            Self::Ru => "ru.api.riotgames.com",
            Self::Tr1 => "tr1.api.riotgames.com",
        }
    }

    /// Returns the tournament region this platform belongs to.
    #[must_use]
    pub const fn region(&self) -> Region {
        match self {
            Self::Br1 => Region::Br,
            Self::Eun1 => Region::Eune,
            Self::Euw1 => Region::Euw,
            Self::Jp1 => Region::Jp,
            Self::Kr => Region::Kr,
            Self::La1 => Region::Lan,
            Self::La2 => Region::Las,
            Self::Na1 => Region::Na,
            Self::Oc1 => Region::Oce,
            Self::Pbe1 => Region::Pbe,
            Self::Ru => Region::Ru,
            Self::Tr1 => Region::Tr,
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = ConfigError;

    /// Parses a platform code. Matching is exact; nothing is defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| ConfigError::UnsupportedPlatform {
                platform: s.to_string(),
            })
    }
}

impl Serialize for PlatformId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlatformId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Region codes accepted by the tournament API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    /// Brazil.
    Br,
    /// Europe Nordic & East.
    Eune,
    /// Europe West.
    Euw,
    /// Japan.
    Jp,
    /// Republic of Korea.
    Kr,
    /// Latin America North.
    Lan,
    /// Latin America South.
    Las,
    /// North America.
    Na,
    /// Oceania.
    Oce,
    /// Public Beta Environment.
    Pbe,
    /// Russia.
    Ru,
    /// Turkey.
    Tr,
}

impl Region {
    /// Returns the wire code for this region (e.g., `"EUNE"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Br => "BR",
            Self::Eune => "EUNE",
            Self::Euw => "EUW",
            Self::Jp => "JP",
            Self::Kr => "KR",
            Self::Lan => "LAN",
            Self::Las => "LAS",
            Self::Na => "NA",
            Self::Oce => "OCE",
            Self::Pbe => "PBE",
            Self::Ru => "RU",
            Self::Tr => "TR",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a raw platform code to its host name.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedPlatform`] for an unknown code.
pub fn host_for(platform: &str) -> Result<&'static str, ConfigError> {
    platform.parse::<PlatformId>().map(|p| p.host())
}

/// Resolves a raw platform code to its tournament region.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedPlatform`] for an unknown code.
pub fn region_for(platform: &str) -> Result<Region, ConfigError> {
    platform.parse::<PlatformId>().map(|p| p.region())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_has_host_and_region() {
        for platform in PlatformId::ALL {
            assert!(!platform.host().is_empty());
            assert!(platform.host().ends_with(".api.riotgames.com"));
            assert!(!platform.region().as_str().is_empty());
        }
    }

    #[test]
    fn test_host_prefix_is_lowercase_code() {
        for platform in PlatformId::ALL {
            let expected = format!("{}.api.riotgames.com", platform.as_str().to_lowercase());
            assert_eq!(platform.host(), expected);
        }
    }

    #[test]
    fn test_parse_round_trips_through_display() {
        for platform in PlatformId::ALL {
            let parsed: PlatformId = platform.to_string().parse().unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_lowercase_codes() {
        assert!(matches!(
            "XX1".parse::<PlatformId>(),
            Err(ConfigError::UnsupportedPlatform { platform }) if platform == "XX1"
        ));
        assert!("na1".parse::<PlatformId>().is_err());
        assert!("".parse::<PlatformId>().is_err());
    }

    #[test]
    fn test_region_table() {
        assert_eq!(PlatformId::Eun1.region(), Region::Eune);
        assert_eq!(PlatformId::La1.region(), Region::Lan);
        assert_eq!(PlatformId::La2.region(), Region::Las);
        assert_eq!(PlatformId::Oc1.region(), Region::Oce);
        assert_eq!(PlatformId::Pbe1.region().to_string(), "PBE");
    }

    #[test]
    fn test_free_function_resolution() {
        assert_eq!(host_for("KR").unwrap(), "kr.api.riotgames.com");
        assert_eq!(region_for("TR1").unwrap(), Region::Tr);
        assert!(host_for("NA").is_err());
        assert!(region_for("GARENA").is_err());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&PlatformId::Na1).unwrap(), r#""NA1""#);
        assert_eq!(serde_json::to_string(&Region::Eune).unwrap(), r#""EUNE""#);
        let platform: PlatformId = serde_json::from_str(r#""RU""#).unwrap();
        assert_eq!(platform, PlatformId::Ru);
        assert!(serde_json::from_str::<PlatformId>(r#""EU""#).is_err());
    }
}
