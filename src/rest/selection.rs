//! Typed deserialization with field selection.
//!
//! Static-data endpoints accept a `tags` parameter naming the fields the
//! caller wants. The server honors it by omitting other fields, but the
//! contract here is stricter: a field that was not selected is always left at
//! its zero value, even when the payload carries data for it.
//!
//! Each static-data type declares a field table through [`SelectableFields`]:
//! the identifier the caller selects by (PascalCase, case-sensitive) and the
//! JSON key it maps to. [`deserialize`] parses the body into a
//! [`serde_json::Value`], strips the unselected keys, then deserializes.
//!
//! # Example
//!
//! ```rust
//! use riot_api::rest::{deserialize, FieldSelection};
//! use riot_api::rest::resources::Item;
//!
//! let body = r#"{"id": 1001, "name": "Boots", "sanitizedDescription": "x", "colloq": "y"}"#;
//! let selection = FieldSelection::new(["SanitizedDescription"]);
//!
//! let item: Item = deserialize(body, &selection).unwrap();
//! assert_eq!(item.id, 1001);
//! assert_eq!(item.name, "Boots");
//! assert_eq!(item.sanitized_description, "x");
//! assert_eq!(item.colloq, "");
//! ```

use std::collections::{BTreeSet, HashMap};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConfigError;
use crate::rest::errors::DeserializationError;

/// A set of field identifiers to populate.
///
/// The special identifier [`FieldSelection::ALL`] requests every field. An
/// empty selection also means full deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: BTreeSet<String>,
}

impl FieldSelection {
    /// Identifier requesting every field.
    pub const ALL: &'static str = "all";

    /// Creates a selection from field identifiers.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a selection requesting every field.
    #[must_use]
    pub fn all() -> Self {
        Self::new([Self::ALL])
    }

    /// Returns `true` if `ident` is selected.
    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.fields.contains(ident)
    }

    /// Returns `true` if no field is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` when deserialization should populate every field.
    #[must_use]
    pub fn is_all_or_empty(&self) -> bool {
        self.fields.is_empty() || self.fields.contains(Self::ALL)
    }

    /// Returns the selected identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Maps the selection to the `tags` values understood by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if an identifier is not a
    /// field of `T`.
    pub fn tags<T: SelectableFields>(&self) -> Result<Vec<&'static str>, ConfigError> {
        if self.contains(Self::ALL) {
            return Ok(vec![Self::ALL]);
        }

        self.iter()
            .map(|ident| {
                T::FIELDS
                    .iter()
                    .chain(T::NESTED)
                    .find(|field| field.ident == ident)
                    .map(|field| field.wire)
                    .ok_or_else(|| ConfigError::InvalidParameter {
                        name: "tags",
                        reason: format!(
                            "'{ident}' is not a selectable field of {}",
                            std::any::type_name::<T>()
                        ),
                    })
            })
            .collect()
    }
}

/// One entry of a type's field table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectableField {
    /// Identifier the caller selects by (e.g., `SanitizedDescription`).
    pub ident: &'static str,
    /// JSON key and `tags` value (e.g., `sanitizedDescription`).
    pub wire: &'static str,
}

impl SelectableField {
    /// Creates a new table entry.
    #[must_use]
    pub const fn new(ident: &'static str, wire: &'static str) -> Self {
        Self { ident, wire }
    }
}

/// Types whose fields can be selected.
///
/// `FIELDS` lists the optional fields; `IDENTITY` lists the JSON keys the
/// server always returns, which are never masked. Keys in neither list are
/// left untouched. List types name the fields of their entries in `NESTED`,
/// so one selection covers both levels.
pub trait SelectableFields {
    /// The selectable fields.
    const FIELDS: &'static [SelectableField];

    /// JSON keys that are always populated.
    const IDENTITY: &'static [&'static str] = &[];

    /// Selectable fields of nested entries.
    const NESTED: &'static [SelectableField] = &[];

    /// Removes every unselected field from a parsed payload.
    fn mask(value: &mut Value, selection: &FieldSelection) {
        mask_object(value, Self::FIELDS, Self::IDENTITY, selection);
    }
}

/// Removes the unselected keys of a single JSON object.
pub fn mask_object(
    value: &mut Value,
    fields: &[SelectableField],
    identity: &[&str],
    selection: &FieldSelection,
) {
    let Value::Object(map) = value else {
        return;
    };

    map.retain(|key, _| {
        if identity.contains(&key.as_str()) {
            return true;
        }
        fields
            .iter()
            .find(|field| field.wire == key)
            .map_or(true, |field| selection.contains(field.ident))
    });
}

/// Masks every entry of a list payload's `data` dictionary as a `T`.
pub fn mask_data_entries<T: SelectableFields>(value: &mut Value, selection: &FieldSelection) {
    if let Some(Value::Object(entries)) = value.get_mut("data") {
        for entry in entries.values_mut() {
            T::mask(entry, selection);
        }
    }
}

/// Deserializes a static-data body, honoring `selection`.
///
/// An empty body yields `T::default()`. An empty or `all` selection
/// deserializes every field.
///
/// # Errors
///
/// Returns [`DeserializationError`] if the body is not valid JSON or does not
/// match `T`.
pub fn deserialize<T>(body: &str, selection: &FieldSelection) -> Result<T, DeserializationError>
where
    T: DeserializeOwned + Default + SelectableFields,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }

    let mut value: Value = serde_json::from_str(body).map_err(DeserializationError::new::<T>)?;
    if !selection.is_all_or_empty() {
        T::mask(&mut value, selection);
    }
    serde_json::from_value(value).map_err(DeserializationError::new::<T>)
}

/// Deserializes a body without field selection.
///
/// An empty body yields `T::default()`.
///
/// # Errors
///
/// Returns [`DeserializationError`] if the body is not valid JSON or does not
/// match `T`.
pub fn deserialize_full<T>(body: &str) -> Result<T, DeserializationError>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(DeserializationError::new::<T>)
}

/// How static-data dictionaries are keyed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataKey {
    /// By the entry's human-readable key (e.g., `"Annie"`).
    #[default]
    Key,
    /// By the entry's numeric id (e.g., `"1"`).
    Id,
}

impl DataKey {
    /// Returns the key strategy for a `dataById` flag.
    #[must_use]
    pub const fn from_data_by_id(data_by_id: bool) -> Self {
        if data_by_id {
            Self::Id
        } else {
            Self::Key
        }
    }
}

/// Entries of a static-data dictionary.
pub trait DataEntry {
    /// The numeric id.
    fn entry_id(&self) -> i64;

    /// The human-readable key, for types that have one.
    fn entry_key(&self) -> Option<&str> {
        None
    }
}

/// Rekeys a static-data dictionary by id or by key.
///
/// Entries without a key are keyed by id. An entry whose key field was not
/// populated keeps its original dictionary key.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn rekey<E: DataEntry>(data: HashMap<String, E>, by: DataKey) -> HashMap<String, E> {
    data.into_iter()
        .map(|(original, entry)| {
            let id = entry.entry_id();
            let key = match (by, entry.entry_key()) {
                (DataKey::Key, Some(key)) if !key.is_empty() => key.to_string(),
                _ if id != 0 => id.to_string(),
                _ => original,
            };
            (key, entry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default, rename_all = "camelCase")]
    struct Sample {
        id: i64,
        key: String,
        name: String,
        sanitized_description: String,
        lore: String,
    }

    impl SelectableFields for Sample {
        const FIELDS: &'static [SelectableField] = &[
            SelectableField::new("Name", "name"),
            SelectableField::new("SanitizedDescription", "sanitizedDescription"),
            SelectableField::new("Lore", "lore"),
        ];
        const IDENTITY: &'static [&'static str] = &["id", "key"];
    }

    impl DataEntry for Sample {
        fn entry_id(&self) -> i64 {
            self.id
        }

        fn entry_key(&self) -> Option<&str> {
            Some(&self.key)
        }
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct SampleList {
        keys: HashMap<String, String>,
        data: HashMap<String, Sample>,
    }

    impl SelectableFields for SampleList {
        const FIELDS: &'static [SelectableField] = &[SelectableField::new("Keys", "keys")];
        const NESTED: &'static [SelectableField] = Sample::FIELDS;

        fn mask(value: &mut Value, selection: &FieldSelection) {
            mask_object(value, Self::FIELDS, Self::IDENTITY, selection);
            mask_data_entries::<Sample>(value, selection);
        }
    }

    const BODY: &str =
        r#"{"id": 7, "key": "Seven", "name": "y", "sanitizedDescription": "x", "lore": "long"}"#;

    #[test]
    fn test_unselected_fields_are_zeroed_even_when_present() {
        let sample: Sample =
            deserialize(BODY, &FieldSelection::new(["SanitizedDescription"])).unwrap();

        assert_eq!(sample.sanitized_description, "x");
        assert_eq!(sample.name, "");
        assert_eq!(sample.lore, "");
        // Identity fields survive
        assert_eq!(sample.id, 7);
        assert_eq!(sample.key, "Seven");
    }

    #[test]
    fn test_empty_or_all_selection_deserializes_everything() {
        let full: Sample = deserialize(BODY, &FieldSelection::default()).unwrap();
        let all: Sample = deserialize(BODY, &FieldSelection::all()).unwrap();

        assert_eq!(full, all);
        assert_eq!(full.name, "y");
        assert_eq!(full.lore, "long");
    }

    #[test]
    fn test_selection_is_case_sensitive() {
        let sample: Sample = deserialize(BODY, &FieldSelection::new(["name"])).unwrap();
        assert_eq!(sample.name, "");
    }

    #[test]
    fn test_empty_body_yields_default() {
        let sample: Sample = deserialize("", &FieldSelection::new(["Name"])).unwrap();
        assert_eq!(sample, Sample::default());

        let ids: Vec<i64> = deserialize_full("  ").unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_invalid_body_is_deserialization_error() {
        let result: Result<Sample, _> = deserialize("not json", &FieldSelection::default());
        let error = result.unwrap_err();
        assert!(error.type_name.ends_with("Sample"));
    }

    #[test]
    fn test_list_masks_every_entry() {
        let body = format!(r#"{{"type": "x", "keys": {{"7": "Seven"}}, "data": {{"Seven": {BODY}}}}}"#);
        let list: SampleList = deserialize(&body, &FieldSelection::new(["Lore"])).unwrap();
        assert!(list.keys.is_empty());

        let entry = &list.data["Seven"];
        assert_eq!(entry.lore, "long");
        assert_eq!(entry.name, "");
        assert_eq!(entry.sanitized_description, "");
    }

    #[test]
    fn test_tags_map_idents_to_wire_names() {
        let selection = FieldSelection::new(["SanitizedDescription", "Lore"]);
        assert_eq!(
            selection.tags::<Sample>().unwrap(),
            vec!["lore", "sanitizedDescription"]
        );

        assert_eq!(FieldSelection::all().tags::<Sample>().unwrap(), vec!["all"]);

        assert_eq!(
            FieldSelection::new(["Keys", "Lore"]).tags::<SampleList>().unwrap(),
            vec!["keys", "lore"]
        );

        let error = FieldSelection::new(["Bogus"]).tags::<Sample>().unwrap_err();
        assert!(matches!(error, ConfigError::InvalidParameter { name: "tags", .. }));
    }

    #[test]
    fn test_rekey_by_id_and_by_key() {
        let mut data = HashMap::new();
        data.insert(
            "Seven".to_string(),
            Sample {
                id: 7,
                key: "Seven".to_string(),
                ..Sample::default()
            },
        );

        let by_id = rekey(data, DataKey::Id);
        assert!(by_id.contains_key("7"));

        let by_key = rekey(by_id, DataKey::Key);
        assert!(by_key.contains_key("Seven"));
        assert_eq!(DataKey::from_data_by_id(true), DataKey::Id);
        assert_eq!(DataKey::from_data_by_id(false), DataKey::Key);
    }
}
