//! In-memory source for tests and embedding.

use std::collections::HashMap;

use hr_core::{Sample, Timestamp};

use crate::{SeriesQuery, SeriesSource, SourceError, SourceResult};

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    zones: HashMap<String, HashMap<String, Vec<Sample>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone: impl Into<String>, field: impl Into<String>, samples: Vec<Sample>) {
        self.zones
            .entry(zone.into())
            .or_default()
            .insert(field.into(), samples);
    }

    pub fn with_series(
        mut self,
        zone: impl Into<String>,
        field: impl Into<String>,
        samples: Vec<Sample>,
    ) -> Self {
        self.insert(zone, field, samples);
        self
    }
}

impl SeriesSource for MemorySource {
    fn fetch(&self, query: &SeriesQuery, as_of: Timestamp) -> SourceResult<Vec<Sample>> {
        let fields = self
            .zones
            .get(&query.zone)
            .ok_or_else(|| SourceError::ZoneNotFound {
                zone: query.zone.clone(),
            })?;

        Ok(fields
            .get(&query.field)
            .map(|samples| {
                samples
                    .iter()
                    .filter(|s| query.covers(s.timestamp, as_of))
                    .copied()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lookback;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn filters_by_window() {
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let source = MemorySource::new().with_series(
            "Foyer",
            "temperature",
            vec![
                Sample::new(as_of - Duration::days(40), 15.0),
                Sample::new(as_of - Duration::days(10), 18.0),
                Sample::new(as_of + Duration::days(1), 19.0),
            ],
        );

        let query = SeriesQuery::new("Foyer", "temperature", Lookback::days(30));
        let samples = source.fetch(&query, as_of).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value, 18.0);
    }

    #[test]
    fn unknown_zone_and_missing_field() {
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let source = MemorySource::new().with_series("Foyer", "temperature", Vec::new());

        let missing_zone = SeriesQuery::new("Saal", "temperature", Lookback::days(30));
        assert!(matches!(
            source.fetch(&missing_zone, as_of),
            Err(SourceError::ZoneNotFound { .. })
        ));

        let missing_field = SeriesQuery::new("Foyer", "setTemperature", Lookback::days(30));
        assert!(source.fetch(&missing_field, as_of).unwrap().is_empty());
    }
}
