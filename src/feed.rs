//! Stationboard fixtures in the transit API's JSON shape.
//!
//! A fixture maps station names to the body the stationboard endpoint
//! would return for them:
//!
//! ```json
//! {
//!   "Zürich, Paradeplatz": {
//!     "stationboard": [
//!       {
//!         "category": "T", "number": "2", "to": "Schlieren, Geissweid",
//!         "stop": { "departure": "2024-03-01T08:15:00+0100",
//!                   "prognosis": { "departure": null } }
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Every field may be missing or `null`; validation is left to the engine.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tramwise_common::RawRecord;
use tramwise_common::config::FEED_QUERY_LIMIT;

/// Response body of the stationboard endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StationboardResponse {
    #[serde(default)]
    pub stationboard: Vec<Journey>,
}

/// One departure.
#[derive(Debug, Default, Deserialize)]
pub struct Journey {
    pub category: Option<String>,
    pub number: Option<String>,
    pub to: Option<String>,
    pub stop: Option<Stop>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Stop {
    pub departure: Option<String>,
    pub prognosis: Option<Prognosis>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Prognosis {
    pub departure: Option<String>,
}

impl Journey {
    /// Borrow the fields the engine consumes.
    pub fn record(&self) -> RawRecord<'_> {
        let stop = self.stop.as_ref();
        RawRecord {
            category: self.category.as_deref(),
            number: self.number.as_deref(),
            to: self.to.as_deref(),
            departure: stop.and_then(|s| s.departure.as_deref()),
            prognosis: stop
                .and_then(|s| s.prognosis.as_ref())
                .and_then(|p| p.departure.as_deref()),
        }
    }
}

/// Canned responses keyed by station name.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct FeedFixture {
    stations: HashMap<String, StationboardResponse>,
}

impl FeedFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).with_context(|| format!("Failed to read feed {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("Failed to parse feed {}", path.display()))
    }

    pub fn parse(json: &str) -> Result<Self> { Ok(serde_json::from_str(json)?) }

    /// Records of `station` as the API would return them (at most
    /// [`FEED_QUERY_LIMIT`]), or `None` when the fixture has no entry,
    /// which stands in for a failed request.
    pub fn records(
        &self,
        station: &str,
    ) -> Option<Vec<RawRecord<'_>>> {
        let response = self.stations.get(station)?;
        Some(response.stationboard.iter().take(FEED_QUERY_LIMIT).map(Journey::record).collect())
    }
}
