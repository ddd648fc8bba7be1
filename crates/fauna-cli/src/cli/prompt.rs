//! Interactive console prompts.
//!
//! The prompts only ever produce plain values (a name, a finished selection
//! mapping); the pipeline itself never reads the console. Everything is
//! generic over reader/writer so tests can drive the loop from memory.

use anyhow::{bail, Context, Result};
use fauna_core::filter::unique_values;
use fauna_core::model::{Animal, FilterValue, Selections};
use std::io::{BufRead, Write};

use super::FILTER_FIELDS;

/// Read one trimmed line, or None on EOF.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for the animal name to search for.
pub fn prompt_animal_name<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    loop {
        write!(writer, "Enter a name of an animal: ")?;
        writer.flush()?;
        match read_line(reader)? {
            None => bail!("no input: animal name is required"),
            Some(name) if name.is_empty() => {
                writeln!(writer, "Please enter a name.")?;
            }
            Some(name) => return Ok(name),
        }
    }
}

/// Run the filter menu loop over the fetched records.
///
/// Offers the four filterable fields; for a chosen field, offers the sorted
/// distinct values observed in `animals` plus a show-all option. Choosing a
/// field again overwrites the earlier selection. EOF ends the loop as if the
/// user were done.
pub fn prompt_filters<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    animals: &[Animal],
) -> Result<Selections> {
    let mut selections = Selections::new();

    writeln!(writer, "\nFilter options:")?;
    for (i, (_, display)) in FILTER_FIELDS.iter().enumerate() {
        writeln!(writer, "{}. Filter by {}", i + 1, display)?;
    }
    writeln!(writer, "0. Done selecting filters")?;

    loop {
        write!(writer, "\nSelect a filter option (0 to finish): ")?;
        writer.flush()?;
        let Some(line) = read_line(reader)? else {
            break;
        };
        let choice: usize = match line.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(writer, "Please enter a valid number.")?;
                continue;
            }
        };
        if choice == 0 {
            break;
        }
        let Some((field, display)) = FILTER_FIELDS.get(choice - 1) else {
            writeln!(writer, "Invalid choice. Please try again.")?;
            continue;
        };

        let values: Vec<String> = unique_values(animals, field).into_iter().collect();
        writeln!(writer, "\nAvailable {} values:", display)?;
        for (i, value) in values.iter().enumerate() {
            writeln!(writer, "{}. {}", i + 1, value)?;
        }
        writeln!(writer, "0. Show all")?;

        match prompt_value_choice(reader, writer, display, &values)? {
            Some(value) => selections.set(field, value),
            None => break,
        }
    }

    Ok(selections)
}

/// Inner loop: pick one value (or show-all) for a field. Returns None on EOF.
fn prompt_value_choice<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    display: &str,
    values: &[String],
) -> Result<Option<FilterValue>> {
    loop {
        write!(writer, "\nSelect {}: ", display)?;
        writer.flush()?;
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        let choice: usize = match line.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(writer, "Please enter a valid number.")?;
                continue;
            }
        };
        if choice == 0 {
            return Ok(Some(FilterValue::All));
        }
        if let Some(value) = values.get(choice - 1) {
            return Ok(Some(FilterValue::Is(value.clone())));
        }
        writeln!(writer, "Invalid choice. Please try again.")?;
    }
}
