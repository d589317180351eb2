//! Typed payloads of the NASA open data endpoints.
//!
//! Only the fields the bot renders are modelled; serde ignores the rest.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Astronomy Picture of the Day entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apod {
    pub title: String,
    pub explanation: String,
    pub url: String,
    /// "image" or "video". Older entries may omit it.
    #[serde(default)]
    pub media_type: Option<String>,
}

impl Apod {
    pub fn is_video(&self) -> bool {
        self.media_type.as_deref() == Some("video")
    }
}

/// Near-Earth object feed, keyed by approach date (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeoFeed {
    pub near_earth_objects: BTreeMap<String, Vec<Asteroid>>,
}

impl NeoFeed {
    /// Pick a date uniformly, then an asteroid uniformly from that date.
    ///
    /// Returns `None` when the feed has no dates or the chosen date is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Asteroid> {
        let dates: Vec<&String> = self.near_earth_objects.keys().collect();
        let date = dates.choose(&mut *rng)?;
        self.near_earth_objects.get(*date)?.choose(rng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

impl Asteroid {
    /// Maximum estimated diameter in meters.
    pub fn diameter_max_m(&self) -> f64 {
        self.estimated_diameter.meters.estimated_diameter_max
    }

    /// The first close-approach record, as listed by the feed.
    pub fn approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_max: f64,
}

/// One close approach. NASA encodes these numbers as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub miss_distance: MissDistance,
    pub relative_velocity: RelativeVelocity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_hour: String,
}

/// Rover photo listing for one sol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarsPhotos {
    pub photos: Vec<MarsPhoto>,
}

impl MarsPhotos {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&MarsPhoto> {
        self.photos.choose(rng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsPhoto {
    pub img_src: String,
}
