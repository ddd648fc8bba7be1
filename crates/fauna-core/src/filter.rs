//! Record filtering.
//!
//! Selections are applied in insertion order as an intersection: a record
//! survives only if it satisfies every non-sentinel selection. The `location`
//! field reads `locations[0]`; every other field reads `characteristics`.

use std::collections::BTreeSet;

use crate::model::{Animal, FilterValue, Selections, LOCATION_FIELD};

/// True if `animal` matches `value` on `field`. A missing field never matches.
fn matches(animal: &Animal, field: &str, value: &str) -> bool {
    if field == LOCATION_FIELD {
        animal.first_location() == Some(value)
    } else {
        animal.characteristic(field) == Some(value)
    }
}

/// Apply every selection to `animals`, returning the survivors in input order.
///
/// Inputs are never mutated; survivors are cloned into a fresh Vec. With no
/// effective selections (empty, or all sentinels) the result equals the input.
pub fn filter_animals(animals: &[Animal], selections: &Selections) -> Vec<Animal> {
    animals
        .iter()
        .filter(|animal| {
            selections.iter().all(|(field, value)| match value {
                FilterValue::All => true,
                FilterValue::Is(v) => matches(animal, field, v),
            })
        })
        .cloned()
        .collect()
}

/// Distinct values the filter predicate for `field` would match on, across
/// all records that carry the field. Sorted (BTreeSet) so the result can feed
/// a menu directly.
pub fn unique_values(animals: &[Animal], field: &str) -> BTreeSet<String> {
    let mut values = BTreeSet::new();
    for animal in animals {
        let value = if field == LOCATION_FIELD {
            animal.first_location()
        } else {
            animal.characteristic(field)
        };
        if let Some(v) = value {
            values.insert(v.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(name: &str, pairs: &[(&str, &str)], locations: &[&str]) -> Animal {
        Animal {
            name: Some(name.to_string()),
            locations: locations.iter().map(|s| s.to_string()).collect(),
            characteristics: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn herd() -> Vec<Animal> {
        vec![
            animal("Fox", &[("diet", "Omnivore"), ("type", "Mammal")], &["North America"]),
            animal("Deer", &[("diet", "Herbivore"), ("type", "Mammal")], &["Europe"]),
            animal("Eel", &[("type", "Fish")], &[]),
        ]
    }

    #[test]
    fn diet_selection_keeps_only_matching() {
        let mut s = Selections::new();
        s.set("diet", FilterValue::Is("Herbivore".to_string()));
        let out = filter_animals(&herd(), &s);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name.as_deref(), Some("Deer"));
    }

    #[test]
    fn missing_field_never_matches() {
        // Eel has no diet; any concrete diet selection must exclude it.
        let mut s = Selections::new();
        s.set("diet", FilterValue::Is("Omnivore".to_string()));
        let out = filter_animals(&herd(), &s);
        assert!(out.iter().all(|a| a.name.as_deref() != Some("Eel")));
    }

    #[test]
    fn all_sentinels_are_identity() {
        let mut s = Selections::new();
        s.set("diet", FilterValue::All);
        s.set("location", FilterValue::All);
        let animals = herd();
        assert_eq!(filter_animals(&animals, &s), animals);
        assert_eq!(filter_animals(&animals, &Selections::new()), animals);
    }

    #[test]
    fn location_reads_first_entry_only() {
        let multi = animal("Wolf", &[], &["Eurasia", "North America"]);
        let mut s = Selections::new();
        s.set("location", FilterValue::Is("North America".to_string()));
        assert!(filter_animals(&[multi.clone()], &s).is_empty());
        s.set("location", FilterValue::Is("Eurasia".to_string()));
        assert_eq!(filter_animals(&[multi], &s).len(), 1);
    }

    #[test]
    fn selections_intersect() {
        let mut s = Selections::new();
        s.set("type", FilterValue::Is("Mammal".to_string()));
        s.set("diet", FilterValue::Is("Omnivore".to_string()));
        let out = filter_animals(&herd(), &s);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name.as_deref(), Some("Fox"));
    }

    #[test]
    fn unique_values_characteristics() {
        let values = unique_values(&herd(), "type");
        let expected: Vec<&str> = values.iter().map(String::as_str).collect();
        assert_eq!(expected, ["Fish", "Mammal"]);
    }

    #[test]
    fn unique_values_location_uses_first_entries() {
        let mut animals = herd();
        animals.push(animal("Wolf", &[], &["Eurasia", "North America"]));
        let values = unique_values(&animals, "location");
        let expected: Vec<&str> = values.iter().map(String::as_str).collect();
        // Eel has no locations and contributes nothing; only first entries count.
        assert_eq!(expected, ["Eurasia", "Europe", "North America"]);
    }
}
