//! HTML serialization of records.
//!
//! Output is deterministic: detail rows always appear in the fixed order
//! Diet, Location, Type, Skin Type, Lifespan, regardless of the key order the
//! API happened to send. Values are interpolated verbatim (no HTML escaping),
//! matching the generated site's historical output.

pub mod template;

use crate::model::Animal;

fn push_detail(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "            <li class=\"detail__item\"><strong>{label}:</strong> {value}</li>\n"
    ));
}

/// Serialize one record to a card list item.
///
/// The title div is omitted entirely when the record has no name; detail rows
/// are omitted when their field is absent.
pub fn serialize_animal(animal: &Animal) -> String {
    let mut out = String::from("<li class=\"cards__item\">\n");

    if let Some(name) = &animal.name {
        out.push_str(&format!("    <div class=\"card__title\">{name}</div>\n"));
    }

    out.push_str("    <div class=\"card__text\">\n");
    out.push_str("        <ul class=\"animal__details\">\n");

    // Fixed row order: Diet, Location, Type, Skin Type, Lifespan.
    if let Some(diet) = animal.characteristic("diet") {
        push_detail(&mut out, "Diet", diet);
    }
    if let Some(location) = animal.first_location() {
        push_detail(&mut out, "Location", location);
    }
    for (label, key) in [("Type", "type"), ("Skin Type", "skin_type"), ("Lifespan", "lifespan")] {
        if let Some(value) = animal.characteristic(key) {
            push_detail(&mut out, label, value);
        }
    }

    out.push_str("        </ul>\n");
    out.push_str("    </div>\n");
    out.push_str("</li>\n");
    out
}

/// Serialize all records in input order and concatenate.
pub fn serialize_animals(animals: &[Animal]) -> String {
    animals.iter().map(serialize_animal).collect()
}

/// Fixed error block shown when the fetch or the filters left nothing.
/// The searched name is interpolated verbatim.
pub fn no_results_fragment(animal_name: &str) -> String {
    format!(
        r#"<div class="error-message">
    <h2>Oops! No Results Found</h2>
    <p>We couldn't find any animals matching "{animal_name}".</p>
    <p>Please try searching for a different animal!</p>
    <div class="suggestions">
        <p>Popular searches:</p>
        <ul>
            <li>Fox</li>
            <li>Lion</li>
            <li>Eagle</li>
            <li>Dolphin</li>
        </ul>
    </div>
</div>
"#
    )
}
