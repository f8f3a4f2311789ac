use crate::domain::GeoLocation;

/// Ordered mapping from city name to the coordinates handed out to that
/// city's records. City order decides which marker wins when a record would
/// match more than one, and coordinates are consumed strictly in list order.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    cities: Vec<(String, Vec<GeoLocation>)>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        CoordinateTable { cities: Vec::new() }
    }

    pub fn insert(&mut self, city: impl Into<String>, coordinates: Vec<GeoLocation>) {
        self.cities.push((city.into(), coordinates));
    }

    pub fn get(&self, city: &str) -> Option<&[GeoLocation]> {
        self.cities.iter().find(|(name, _)| name == city).map(|(_, coordinates)| coordinates.as_slice())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[GeoLocation])> {
        self.cities.iter().map(|(name, coordinates)| (name.as_str(), coordinates.as_slice()))
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// The table shipped with the tool: one coordinate pair per company
    /// record expected to carry the city's marker.
    pub fn builtin() -> Self {
        let mut table = CoordinateTable::new();
        table.insert(
            "Hồ Chí Minh",
            vec![
                GeoLocation::new(10.8231, 106.6797),
                GeoLocation::new(10.8245, 106.6920),
                GeoLocation::new(10.8190, 106.7050),
                GeoLocation::new(10.8340, 106.6650),
                GeoLocation::new(10.8100, 106.7120),
                GeoLocation::new(10.8400, 106.6550),
                GeoLocation::new(10.8150, 106.6800),
                GeoLocation::new(10.8280, 106.7000),
                GeoLocation::new(10.8220, 106.6900),
                GeoLocation::new(10.8350, 106.6700),
                GeoLocation::new(10.8100, 106.7200),
                GeoLocation::new(10.8260, 106.6850),
                GeoLocation::new(10.8190, 106.7080),
                GeoLocation::new(10.8310, 106.6600),
                GeoLocation::new(10.8130, 106.7150),
            ],
        );
        table.insert(
            "Hà Nội",
            vec![
                GeoLocation::new(21.0285, 105.8542),
                GeoLocation::new(21.0305, 105.8445),
                GeoLocation::new(21.0265, 105.8650),
                GeoLocation::new(21.0320, 105.8400),
                GeoLocation::new(21.0245, 105.8700),
                GeoLocation::new(21.0340, 105.8350),
                GeoLocation::new(21.0280, 105.8600),
                GeoLocation::new(21.0310, 105.8480),
                GeoLocation::new(21.0250, 105.8750),
            ],
        );
        table
    }
}
