//! Declarative endpoint table.
//!
//! Every API call is described by a constant [`Endpoint`]: its name (used as
//! the per-method rate-limit key), HTTP method, API family, path parameters
//! and path template. The generic executor consumes these descriptions, so
//! endpoint methods stay thin.
//!
//! # Path Templates
//!
//! Templates use `{param}` placeholders, filled positionally from the
//! values passed to [`Endpoint::path`]:
//! - `champions/{id}` - Single parameter
//! - `matches/{matchId}/by-tournament-code/{tournamentCode}` - Multiple parameters
//!
//! # Example
//!
//! ```rust
//! use riot_api::rest::{ApiFamily, Endpoint};
//! use riot_api::HttpMethod;
//!
//! const MATCH_BY_ID: Endpoint = Endpoint::new(
//!     "match.get",
//!     HttpMethod::Get,
//!     ApiFamily::Match,
//!     &["matchId"],
//!     "matches/{matchId}",
//! );
//!
//! assert_eq!(MATCH_BY_ID.path(&[3_141_592]).unwrap(), "matches/3141592");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::HttpMethod;
use crate::config::{PlatformId, GLOBAL_HOST};
use crate::error::ConfigError;

/// Which host serves an API family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// `{platform}.api.riotgames.com`
    Platform,
    /// `global.api.riotgames.com`
    Global,
}

/// A group of endpoints sharing a host and a versioned base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// Champion rotation and availability.
    Champion,
    /// Ranked leagues and positions.
    League,
    /// Matches, timelines and match lists.
    Match,
    /// Tournament providers, tournaments and codes.
    Tournament,
    /// Static reference data.
    StaticData,
}

impl ApiFamily {
    /// Returns the host kind serving this family.
    #[must_use]
    pub const fn host_kind(self) -> HostKind {
        match self {
            Self::Champion | Self::League | Self::Match => HostKind::Platform,
            Self::Tournament | Self::StaticData => HostKind::Global,
        }
    }

    /// Returns the versioned base path.
    ///
    /// `tournament_stub` selects `lol/tournament-stub/v3` for the tournament
    /// family and is ignored by the others.
    #[must_use]
    pub const fn base_path(self, tournament_stub: bool) -> &'static str {
        match self {
            Self::Champion => "lol/platform/v3",
            Self::League => "lol/league/v3",
            Self::Match => "lol/match/v3",
            Self::Tournament if tournament_stub => "lol/tournament-stub/v3",
            Self::Tournament => "lol/tournament/v3",
            Self::StaticData => "lol/static-data/v3",
        }
    }

    /// Returns the host name for this family on the given platform.
    #[must_use]
    pub const fn host(self, platform: PlatformId) -> &'static str {
        match self.host_kind() {
            HostKind::Platform => platform.host(),
            HostKind::Global => GLOBAL_HOST,
        }
    }
}

/// A single API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Name of the operation, used as the per-method rate-limit key.
    pub name: &'static str,
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The API family, which determines host and base path.
    pub family: ApiFamily,
    /// Path parameters in template order.
    pub params: &'static [&'static str],
    /// The path template relative to the family base path.
    pub template: &'static str,
    /// Whether the tournament stub serves this endpoint.
    pub stub_supported: bool,
}

impl Endpoint {
    /// Creates a new `Endpoint`.
    ///
    /// This is a `const fn` to allow endpoints to be defined as constants.
    #[must_use]
    pub const fn new(
        name: &'static str,
        http_method: HttpMethod,
        family: ApiFamily,
        params: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            name,
            http_method,
            family,
            params,
            template,
            stub_supported: true,
        }
    }

    /// Marks an endpoint the tournament stub does not serve; it always goes
    /// to the live tournament API.
    #[must_use]
    pub const fn without_stub(self) -> Self {
        Self {
            stub_supported: false,
            ..self
        }
    }

    /// Fills the template with `values`, in the order of [`Endpoint::params`].
    ///
    /// Values are percent-encoded, so tournament codes and names are safe
    /// to interpolate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if the number of values does
    /// not match the number of parameters.
    pub fn path<V: Display>(&self, values: &[V]) -> Result<String, ConfigError> {
        if values.len() != self.params.len() {
            return Err(ConfigError::InvalidParameter {
                name: "path",
                reason: format!(
                    "endpoint {} takes {} path parameter(s), got {}",
                    self.name,
                    self.params.len(),
                    values.len()
                ),
            });
        }

        let ids: HashMap<&str, String> = self
            .params
            .iter()
            .zip(values)
            .map(|(param, value)| (*param, urlencoding::encode(&value.to_string()).into_owned()))
            .collect();
        Ok(build_path(self.template, &ids))
    }

    /// Builds the absolute URL for this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if the path values do not
    /// match the endpoint's parameters.
    pub fn url<V: Display>(
        &self,
        platform: PlatformId,
        tournament_stub: bool,
        values: &[V],
    ) -> Result<String, ConfigError> {
        Ok(format!(
            "https://{}/{}/{}",
            self.family.host(platform),
            self.family.base_path(tournament_stub && self.stub_supported),
            self.path(values)?
        ))
    }
}

/// Builds a path from a template by interpolating named parameters.
///
/// Placeholders missing from `ids` are left in place.
///
/// # Example
///
/// ```rust
/// use riot_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("matchId", "42");
/// ids.insert("tournamentCode", "NA-CODE");
///
/// let path = build_path("matches/{matchId}/by-tournament-code/{tournamentCode}", &ids);
/// assert_eq!(path, "matches/42/by-tournament-code/NA-CODE");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiFamily>();
    assert_send_sync::<Endpoint>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const NO_PARAMS: &[&str] = &[];

    #[test]
    fn test_endpoint_stores_fields_correctly() {
        let endpoint = Endpoint::new(
            "match.by_tournament_code",
            HttpMethod::Get,
            ApiFamily::Match,
            &["matchId", "tournamentCode"],
            "matches/{matchId}/by-tournament-code/{tournamentCode}",
        );

        assert_eq!(endpoint.name, "match.by_tournament_code");
        assert_eq!(endpoint.http_method, HttpMethod::Get);
        assert_eq!(endpoint.family, ApiFamily::Match);
        assert_eq!(endpoint.params, &["matchId", "tournamentCode"]);
    }

    #[test]
    fn test_path_interpolation_multiple_params() {
        let endpoint = Endpoint::new(
            "match.by_tournament_code",
            HttpMethod::Get,
            ApiFamily::Match,
            &["matchId", "tournamentCode"],
            "matches/{matchId}/by-tournament-code/{tournamentCode}",
        );

        assert_eq!(
            endpoint.path(&["123", "NA0418d-abc"]).unwrap(),
            "matches/123/by-tournament-code/NA0418d-abc"
        );
    }

    #[test]
    fn test_path_values_are_encoded() {
        let endpoint = Endpoint::new(
            "tournament.code",
            HttpMethod::Get,
            ApiFamily::Tournament,
            &["tournamentCode"],
            "codes/{tournamentCode}",
        );

        assert_eq!(endpoint.path(&["a/b c"]).unwrap(), "codes/a%2Fb%20c");
    }

    #[test]
    fn test_platform_families_use_platform_host() {
        let endpoint = Endpoint::new(
            "champion.all",
            HttpMethod::Get,
            ApiFamily::Champion,
            &[],
            "champions",
        );

        assert_eq!(
            endpoint.url(PlatformId::Euw1, false, NO_PARAMS).unwrap(),
            "https://euw1.api.riotgames.com/lol/platform/v3/champions"
        );
    }

    #[test]
    fn test_global_families_use_global_host() {
        assert_eq!(ApiFamily::StaticData.host(PlatformId::Kr), GLOBAL_HOST);
        assert_eq!(ApiFamily::Tournament.host(PlatformId::Na1), GLOBAL_HOST);
        assert_eq!(ApiFamily::League.host(PlatformId::Kr), "kr.api.riotgames.com");
    }

    #[test]
    fn test_tournament_stub_switch_changes_base_path() {
        let endpoint = Endpoint::new(
            "tournament.providers",
            HttpMethod::Post,
            ApiFamily::Tournament,
            &[],
            "providers",
        );

        assert_eq!(
            endpoint.url(PlatformId::Na1, false, NO_PARAMS).unwrap(),
            "https://global.api.riotgames.com/lol/tournament/v3/providers"
        );
        assert_eq!(
            endpoint.url(PlatformId::Na1, true, NO_PARAMS).unwrap(),
            "https://global.api.riotgames.com/lol/tournament-stub/v3/providers"
        );
        // Other families ignore the switch
        assert_eq!(ApiFamily::Match.base_path(true), "lol/match/v3");
    }

    #[test]
    fn test_live_only_endpoint_ignores_stub_switch() {
        let endpoint = Endpoint::new(
            "tournament.code",
            HttpMethod::Get,
            ApiFamily::Tournament,
            &["tournamentCode"],
            "codes/{tournamentCode}",
        )
        .without_stub();

        assert!(!endpoint.stub_supported);
        assert_eq!(
            endpoint.url(PlatformId::Na1, true, &["CODE"]).unwrap(),
            "https://global.api.riotgames.com/lol/tournament/v3/codes/CODE"
        );
    }

    #[test]
    fn test_path_rejects_wrong_parameter_count() {
        let endpoint = Endpoint::new(
            "match.by_tournament_code",
            HttpMethod::Get,
            ApiFamily::Match,
            &["matchId", "tournamentCode"],
            "matches/{matchId}/by-tournament-code/{tournamentCode}",
        );

        let error = endpoint.path(&["123"]).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidParameter { name: "path", .. }));
        assert!(error.to_string().contains("match.by_tournament_code"));
        assert!(endpoint.url(PlatformId::Na1, false, NO_PARAMS).is_err());
    }

    #[test]
    fn test_build_path_handles_missing_ids() {
        let ids: HashMap<&str, &str> = HashMap::new();

        let result = build_path("champions/{id}", &ids);
        assert_eq!(result, "champions/{id}");
    }
}
