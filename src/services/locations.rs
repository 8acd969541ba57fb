//! Reference table of named service-area locations.
//!
//! Clients without geocoded coordinates fall back to a suburb-level
//! lookup against this table. Matching is by exact name; anything else is
//! treated as unresolvable rather than guessed.

use std::collections::HashMap;

use crate::types::Coordinates;

/// Known service-area suburbs and their coordinates.
const SERVICE_AREA: &[(&str, f64, f64)] = &[
    ("Noosa Heads", -26.3941, 153.0918),
    ("Noosaville", -26.3972, 153.0610),
    ("Tewantin", -26.3906, 153.0347),
    ("Sunshine Beach", -26.4066, 153.1041),
    ("Peregian Beach", -26.4810, 153.0960),
    ("Peregian Springs", -26.4882, 153.0733),
    ("Coolum Beach", -26.5283, 153.0900),
    ("Yaroomba", -26.5520, 153.0966),
    ("Marcoola", -26.5853, 153.0937),
    ("Mudjimba", -26.6146, 153.0998),
    ("Pacific Paradise", -26.6183, 153.0747),
    ("Bli Bli", -26.6181, 153.0366),
    ("Maroochydore", -26.6530, 153.0930),
    ("Alexandra Headland", -26.6715, 153.1075),
    ("Mooloolaba", -26.6816, 153.1192),
    ("Buderim", -26.6845, 153.0570),
    ("Mountain Creek", -26.6975, 153.1027),
    ("Sippy Downs", -26.7183, 153.0567),
    ("Buddina", -26.6930, 153.1317),
    ("Warana", -26.7230, 153.1270),
    ("Wurtulla", -26.7595, 153.1247),
    ("Currimundi", -26.7683, 153.1223),
    ("Caloundra", -26.8035, 153.1219),
    ("Golden Beach", -26.8170, 153.1137),
    ("Pelican Waters", -26.8355, 153.1030),
    ("Nambour", -26.6260, 152.9590),
];

/// Immutable name-to-coordinates lookup.
///
/// Injected into the resolver rather than read from a global, so tests
/// and other deployments can supply their own location sets.
#[derive(Debug, Clone)]
pub struct LocationTable {
    entries: HashMap<String, Coordinates>,
}

impl LocationTable {
    pub fn new(entries: impl IntoIterator<Item = (String, Coordinates)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in Sunshine Coast service area.
    pub fn service_area() -> Self {
        Self::new(SERVICE_AREA.iter().map(|&(name, lat, lng)| {
            (name.to_string(), Coordinates { lat, lng })
        }))
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<Coordinates> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_area_lookup() {
        let table = LocationTable::service_area();
        assert_eq!(table.len(), 26);

        let mooloolaba = table.get("Mooloolaba").unwrap();
        assert!((mooloolaba.lat - -26.6816).abs() < 1e-9);
        assert!((mooloolaba.lng - 153.1192).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let table = LocationTable::service_area();
        assert!(table.get("mooloolaba").is_none());
        assert!(table.get("Mooloolaba ").is_none());
        assert!(table.get("Brisbane").is_none());
    }

    #[test]
    fn test_custom_table() {
        let table = LocationTable::new(vec![
            ("Depot".to_string(), Coordinates { lat: 0.0, lng: 0.0 }),
        ]);
        assert_eq!(table.len(), 1);
        assert!(table.get("Depot").is_some());
        assert!(table.get("Mooloolaba").is_none());
    }
}
