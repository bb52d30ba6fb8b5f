//! In-memory station index.

use std::collections::HashMap;

use tracing::warn;

use crate::digitraffic::StationDto;
use crate::domain::{ShortCode, Station};

/// Suggestion lists are truncated to this many entries.
const MAX_SUGGESTIONS: usize = 10;

/// The set of passenger stations, queryable by name fragment or
/// resolvable by short code.
///
/// Loaded once from the station metadata feed. Queries only read
/// immutable state, so shared references are freely reentrant.
#[derive(Debug, Default)]
pub struct StationIndex {
    /// Stations in catalog order. Query results preserve this order.
    stations: Vec<Station>,

    /// Short code → position in `stations`.
    by_code: HashMap<ShortCode, usize>,
}

impl StationIndex {
    /// An index with no stations. Queries return nothing and no
    /// suggestions are offered; this is the degraded state after a
    /// failed catalog load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from raw catalog entries.
    ///
    /// Keeps only passenger-serving stations. Entries with an invalid
    /// short code, and duplicates of an already-loaded code, are
    /// dropped with a warning; the first occurrence wins so that
    /// [`resolve`](Self::resolve) stays unambiguous.
    pub fn load(raw: Vec<StationDto>) -> Self {
        let mut stations = Vec::new();
        let mut by_code = HashMap::new();

        for dto in raw {
            if !dto.passenger_traffic {
                continue;
            }

            let Ok(short_code) = ShortCode::parse(&dto.station_short_code) else {
                warn!(code = %dto.station_short_code, "dropping station with invalid short code");
                continue;
            };

            if by_code.contains_key(&short_code) {
                warn!(code = %short_code, "dropping duplicate station short code");
                continue;
            }

            by_code.insert(short_code.clone(), stations.len());
            stations.push(Station {
                name: dto.station_name,
                short_code,
            });
        }

        Self { stations, by_code }
    }

    /// Case-insensitive substring search over station names.
    ///
    /// Returns at most 10 matches in catalog order. Empty input yields
    /// no matches (the caller must not show a dropdown for it). There
    /// is deliberately no relevance ranking beyond source order.
    pub fn query(&self, text: &str) -> Vec<&Station> {
        if text.is_empty() {
            return Vec::new();
        }

        let needle = text.to_lowercase();
        self.stations
            .iter()
            .filter(|st| st.name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// Exact lookup by short code.
    pub fn resolve(&self, code: &ShortCode) -> Option<&Station> {
        self.by_code.get(code).map(|&i| &self.stations[i])
    }

    /// Number of loaded stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the index holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, code: &str, passenger: bool) -> StationDto {
        StationDto {
            station_name: name.to_string(),
            station_short_code: code.to_string(),
            passenger_traffic: passenger,
        }
    }

    fn code(s: &str) -> ShortCode {
        ShortCode::parse(s).unwrap()
    }

    #[test]
    fn load_filters_freight_only_stations() {
        let index = StationIndex::load(vec![
            dto("Helsinki", "HKI", true),
            dto("Espoo", "ESP", false),
        ]);

        assert_eq!(index.len(), 1);
        assert!(index.resolve(&code("HKI")).is_some());
        assert!(index.resolve(&code("ESP")).is_none());
    }

    #[test]
    fn load_drops_invalid_short_codes() {
        let index = StationIndex::load(vec![
            dto("Helsinki", "HKI", true),
            dto("Broken", "h k i", true),
        ]);

        assert_eq!(index.len(), 1);
    }

    #[test]
    fn load_keeps_first_of_duplicate_codes() {
        let index = StationIndex::load(vec![
            dto("Helsinki", "HKI", true),
            dto("Helsinki again", "HKI", true),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve(&code("HKI")).unwrap().name, "Helsinki");
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let index = StationIndex::load(vec![
            dto("Helsinki asema", "HKI", true),
            dto("Pasila asema", "PSL", true),
            dto("Tampere asema", "TPE", true),
        ]);

        let matches = index.query("PASILA");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].short_code, code("PSL"));

        let matches = index.query("asema");
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn query_empty_input_yields_nothing() {
        let index = StationIndex::load(vec![dto("Helsinki", "HKI", true)]);
        assert!(index.query("").is_empty());
    }

    #[test]
    fn query_no_match_yields_nothing() {
        let index = StationIndex::load(vec![dto("Helsinki", "HKI", true)]);
        assert!(index.query("zzz").is_empty());
    }

    #[test]
    fn query_caps_at_ten_in_load_order() {
        let raw: Vec<StationDto> = (0..15)
            .map(|i| dto(&format!("Asema {i}"), &format!("A{i}"), true))
            .collect();
        let index = StationIndex::load(raw);

        let matches = index.query("asema");
        assert_eq!(matches.len(), 10);
        assert_eq!(matches[0].name, "Asema 0");
        assert_eq!(matches[9].name, "Asema 9");
    }

    #[test]
    fn empty_index_answers_nothing() {
        let index = StationIndex::empty();
        assert!(index.is_empty());
        assert!(index.query("helsinki").is_empty());
        assert!(index.resolve(&code("HKI")).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_stations() -> impl Strategy<Value = Vec<StationDto>> {
        proptest::collection::vec(
            ("[A-Za-z ]{1,20}", "[A-Z]{2,4}", proptest::bool::ANY).prop_map(
                |(name, code, passenger)| StationDto {
                    station_name: name,
                    station_short_code: code,
                    passenger_traffic: passenger,
                },
            ),
            0..30,
        )
    }

    proptest! {
        /// Every match contains the query case-insensitively, and the
        /// result never exceeds the suggestion cap.
        #[test]
        fn query_matches_contain_needle(raw in arb_stations(), needle in "[a-z]{1,4}") {
            let index = StationIndex::load(raw);
            let matches = index.query(&needle);

            prop_assert!(matches.len() <= 10);
            for st in matches {
                prop_assert!(st.name.to_lowercase().contains(&needle));
            }
        }

        /// Query results equal the first 10 catalog-order entries whose
        /// name contains the needle, computed here against the raw
        /// input as an independent oracle.
        #[test]
        fn query_is_capped_prefix_of_catalog_order(raw in arb_stations(), needle in "[a-z]{1,3}") {
            let index = StationIndex::load(raw.clone());

            let mut seen = std::collections::HashSet::new();
            let expected: Vec<String> = raw
                .iter()
                .filter(|d| d.passenger_traffic)
                .filter(|d| {
                    ShortCode::parse(&d.station_short_code)
                        .is_ok_and(|c| seen.insert(c))
                })
                .filter(|d| d.station_name.to_lowercase().contains(&needle))
                .map(|d| d.station_name.clone())
                .take(10)
                .collect();

            let actual: Vec<String> = index
                .query(&needle)
                .iter()
                .map(|s| s.name.clone())
                .collect();

            prop_assert_eq!(actual, expected);
        }

        /// Resolve after load finds exactly the passenger stations with
        /// valid, first-occurrence short codes.
        #[test]
        fn resolve_finds_loaded_passenger_stations(raw in arb_stations()) {
            let index = StationIndex::load(raw.clone());

            let mut seen = std::collections::HashSet::new();
            for dto in &raw {
                let Ok(code) = ShortCode::parse(&dto.station_short_code) else {
                    continue;
                };
                if !seen.insert(code.clone()) {
                    continue;
                }
                if dto.passenger_traffic {
                    let station = index.resolve(&code);
                    prop_assert!(station.is_some());
                    prop_assert_eq!(&station.unwrap().name, &dto.station_name);
                }
            }
        }
    }
}
