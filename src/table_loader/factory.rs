use crate::domain::{CoordinateTable, GeoLocation};
use serde::Deserialize;
use thiserror::Error;

// An array rather than an object, so city order survives deserialization.
#[derive(Debug, Deserialize)]
struct SerializedCity {
    city: String,
    coordinates: Vec<GeoLocation>,
}

pub fn from_json(json: &str) -> Result<CoordinateTable, TableFactoryError> {
    let cities = serde_json::from_str::<Vec<SerializedCity>>(json)?;

    let mut table = CoordinateTable::new();
    for entry in cities {
        if entry.coordinates.is_empty() {
            return Err(TableFactoryError::EmptyCity(entry.city));
        }
        if table.get(&entry.city).is_some() {
            return Err(TableFactoryError::DuplicateCity(entry.city));
        }
        table.insert(entry.city, entry.coordinates);
    }

    Ok(table)
}

#[derive(Error, Debug)]
pub enum TableFactoryError {
    #[error(transparent)]
    Deserialization(#[from] serde_json::Error),
    #[error("city '{0}' has no coordinates")]
    EmptyCity(String),
    #[error("city '{0}' appears more than once")]
    DuplicateCity(String),
}
