//! Record model for fetched animals and user filter selections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One animal as returned by the remote API.
///
/// Every field is optional; the API owns the schema and downstream code
/// tolerates whatever is missing. Records are read-only after deserialization
/// and live for a single run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    /// Display name, used as the card title.
    pub name: Option<String>,
    /// Habitats in API order; only the first entry is ever consulted.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Free-form string attributes. Recognized downstream: `diet`, `type`,
    /// `skin_type`, `lifespan`. Unknown keys are kept but never rendered.
    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
}

impl Animal {
    /// First habitat, if any. This is the value both the `location` filter
    /// predicate and the Location detail row operate on.
    pub fn first_location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    /// Characteristic value for `key`, if present.
    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics.get(key).map(String::as_str)
    }
}

/// Field name that reads `locations[0]` instead of `characteristics`.
pub const LOCATION_FIELD: &str = "location";

/// One user choice for a field: a concrete value, or the show-all sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Do not filter on this field.
    All,
    /// Keep only records whose field equals this value.
    Is(String),
}

impl FilterValue {
    /// Parse the console/flag representation: the literal `all` is the
    /// sentinel, anything else a concrete value.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            FilterValue::All
        } else {
            FilterValue::Is(raw.to_string())
        }
    }
}

/// Ordered set of field selections. Insertion order is application order;
/// selecting the same field again replaces the earlier choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections(Vec<(String, FilterValue)>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the selection for `field`, keeping first-insertion order.
    pub fn set(&mut self, field: &str, value: FilterValue) {
        match self.0.iter_mut().find(|(f, _)| f == field) {
            Some((_, v)) => *v = value,
            None => self.0.push((field.to_string(), value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(f, v)| (f.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "name": "Fox",
            "taxonomy": {"kingdom": "Animalia"},
            "locations": ["North America", "Europe"],
            "characteristics": {"diet": "Omnivore", "type": "Mammal", "most_distinctive_feature": "Bushy tail"}
        }"#;
        let a: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(a.name.as_deref(), Some("Fox"));
        assert_eq!(a.first_location(), Some("North America"));
        assert_eq!(a.characteristic("diet"), Some("Omnivore"));
        // Unknown characteristic keys survive deserialization.
        assert_eq!(
            a.characteristic("most_distinctive_feature"),
            Some("Bushy tail")
        );
    }

    #[test]
    fn deserialize_sparse_record() {
        let a: Animal = serde_json::from_str("{}").unwrap();
        assert!(a.name.is_none());
        assert!(a.first_location().is_none());
        assert!(a.characteristics.is_empty());
    }

    #[test]
    fn filter_value_parse_sentinel() {
        assert_eq!(FilterValue::parse("all"), FilterValue::All);
        assert_eq!(FilterValue::parse("All"), FilterValue::All);
        assert_eq!(
            FilterValue::parse("Omnivore"),
            FilterValue::Is("Omnivore".to_string())
        );
    }

    #[test]
    fn selections_replace_keeps_order() {
        let mut s = Selections::new();
        s.set("diet", FilterValue::Is("Omnivore".to_string()));
        s.set("type", FilterValue::All);
        s.set("diet", FilterValue::Is("Herbivore".to_string()));
        let fields: Vec<&str> = s.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, ["diet", "type"]);
        let diet = s.iter().find(|(f, _)| *f == "diet").unwrap().1;
        assert_eq!(diet, &FilterValue::Is("Herbivore".to_string()));
    }
}
