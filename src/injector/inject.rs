use crate::domain::CoordinateTable;
use crate::injector::record_pattern::find_records;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, PartialEq)]
pub struct InjectReport {
    pub text: String,
    /// Records that carried a recognized city marker and received coordinates.
    pub annotated: usize,
    /// Records that matched the structural pattern but carried no marker.
    pub skipped: usize,
}

/// Rewrites `text` so that every record carrying a city marker gets that
/// city's next unused coordinate pair inserted right after its location
/// field. Everything outside the inserted lines is passed through unchanged.
/// Not idempotent: a second pass inserts again, or runs the table dry.
pub fn inject(text: &str, table: &CoordinateTable) -> Result<InjectReport, InjectError> {
    let mut cursors: HashMap<String, usize> = HashMap::new();
    let mut output = String::with_capacity(text.len());
    let mut annotated = 0;
    let mut skipped = 0;
    let mut last_end = 0;

    for record in find_records(text) {
        output.push_str(&text[last_end..record.start()]);
        match annotate_record(record.as_str(), table, &mut cursors)? {
            Some(annotated_record) => {
                output.push_str(&annotated_record);
                annotated += 1;
            }
            None => {
                output.push_str(record.as_str());
                skipped += 1;
            }
        }
        last_end = record.end();
    }
    output.push_str(&text[last_end..]);

    Ok(InjectReport {
        text: output,
        annotated,
        skipped,
    })
}

/// Inserts the next coordinate pair after the first recognized marker, or
/// returns `None` when the record belongs to no city in the table. City order
/// in the table decides which marker wins.
fn annotate_record(record: &str, table: &CoordinateTable, cursors: &mut HashMap<String, usize>) -> Result<Option<String>, InjectError> {
    for (city, coordinates) in table.entries() {
        let marker = location_marker(city);
        if !record.contains(&marker) {
            continue;
        }

        let cursor = cursors.entry(city.to_owned()).or_insert(0);
        let Some(coordinate) = coordinates.get(*cursor) else {
            return Err(InjectError::TableExhausted {
                city: city.to_owned(),
                available: coordinates.len(),
            });
        };
        *cursor += 1;

        let replacement = format!("{marker}\n    latitude: {},\n    longitude: {},", coordinate.latitude, coordinate.longitude);
        return Ok(Some(record.replacen(&marker, &replacement, 1)));
    }

    Ok(None)
}

fn location_marker(city: &str) -> String {
    format!("location: '{city}',")
}

#[derive(Error, Debug, PartialEq)]
pub enum InjectError {
    #[error("coordinate table for '{city}' is exhausted, only {available} entr{} available", if *available == 1 { "y" } else { "ies" })]
    TableExhausted { city: String, available: usize },
}
