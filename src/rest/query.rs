//! Query string assembly.
//!
//! Endpoints describe their query parameters with a [`QueryBuilder`]:
//! optional scalars are omitted when unset, and arrays become repeated keys
//! (`champion=1&champion=2`). [`build_url`] appends the encoded pairs to a URL.
//!
//! # Example
//!
//! ```rust
//! use riot_api::rest::{build_url, QueryBuilder};
//!
//! let query = QueryBuilder::new()
//!     .push_all("champion", [1, 2])
//!     .push_opt("beginIndex", None::<u32>)
//!     .push("season", 9)
//!     .build();
//!
//! assert_eq!(
//!     build_url("https://na1.api.riotgames.com/lol/match/v3/matchlists/by-account/1", &query),
//!     "https://na1.api.riotgames.com/lol/match/v3/matchlists/by-account/1?champion=1&champion=2&season=9"
//! );
//! ```

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Ordered list of query parameters under construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    #[must_use]
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a parameter only when a value is present.
    #[must_use]
    pub fn push_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Appends one parameter per value, repeating the key.
    #[must_use]
    pub fn push_all<V: Display>(mut self, key: &str, values: impl IntoIterator<Item = V>) -> Self {
        for value in values {
            self = self.push(key, value);
        }
        self
    }

    /// Appends a timestamp as epoch milliseconds, when present.
    #[must_use]
    pub fn push_time(self, key: &str, value: Option<DateTime<Utc>>) -> Self {
        self.push_opt(key, value.map(|time| time.timestamp_millis()))
    }

    /// Returns `true` if no parameter has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// Appends URL-encoded query pairs to `url`.
///
/// Returns `url` unchanged when `query` is empty.
#[must_use]
pub fn build_url(url: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }

    let encoded = query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_optional_scalars_are_omitted() {
        let query = QueryBuilder::new()
            .push_opt("beginIndex", None::<u32>)
            .push_opt("endIndex", Some(20))
            .push_time("beginTime", None)
            .build();

        assert_eq!(query, vec![("endIndex".to_string(), "20".to_string())]);
    }

    #[test]
    fn test_arrays_become_repeated_keys() {
        let query = QueryBuilder::new()
            .push_all("queue", [420, 440])
            .push_all("season", Vec::<i32>::new())
            .build();

        assert_eq!(
            query,
            vec![
                ("queue".to_string(), "420".to_string()),
                ("queue".to_string(), "440".to_string()),
            ]
        );
    }

    #[test]
    fn test_times_are_epoch_millis() {
        let time = Utc.timestamp_millis_opt(1_500_000_000_123).unwrap();
        let query = QueryBuilder::new().push_time("endTime", Some(time)).build();

        assert_eq!(query[0].1, "1500000000123");
    }

    #[test]
    fn test_build_url_without_query_is_unchanged() {
        assert_eq!(build_url("https://host/path", &[]), "https://host/path");
        assert!(QueryBuilder::new().is_empty());
    }

    #[test]
    fn test_build_url_encodes_values() {
        let query = QueryBuilder::new()
            .push("locale", "en_US")
            .push("name", "Cup #1 & Friends")
            .push("freeToPlay", true)
            .build();

        assert_eq!(
            build_url("https://host/path", &query),
            "https://host/path?locale=en_US&name=Cup%20%231%20%26%20Friends&freeToPlay=true"
        );
    }

    #[test]
    fn test_build_url_extends_existing_query() {
        let query = QueryBuilder::new().push("count", 5).build();
        assert_eq!(
            build_url("https://host/codes?tournamentId=1", &query),
            "https://host/codes?tournamentId=1&count=5"
        );
    }
}
