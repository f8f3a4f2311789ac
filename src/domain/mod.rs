mod coordinate_table;
mod geo_location;

pub use coordinate_table::CoordinateTable;
pub use geo_location::GeoLocation;
