//! Park model representing one Ohio state park record from the crawled dataset.

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Shared reference to a Park for memory-efficient storage.
///
/// The same park is referenced from the search index, from caches, and from
/// match results, so it is held behind an `Arc` rather than cloned.
pub type ParkRef = Arc<Park>;

/// Coordinate value as it appears in the dataset.
///
/// The crawler extracts latitude/longitude with a regex, so older dumps carry
/// them as strings while newer ones carry JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum CoordValue {
    Number(f64),
    Text(String),
}

/// Custom deserializer for coordinates that accepts a JSON number, a numeric
/// string, or null. Unparseable strings become `None` rather than an error.
fn deserialize_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<CoordValue> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        CoordValue::Number(n) => Some(n),
        CoordValue::Text(s) => s.trim().parse::<f64>().ok(),
    }))
}

/// One organic Google result attached to a park by the enrichment pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GoogleResult {
    /// Result title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Result URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Text snippet shown under the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Abbreviated URL as displayed on the result page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_link: Option<String>,

    /// Rank within the result page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// An Ohio state park as stored in the enriched dataset.
///
/// Every field the crawler may fail to extract is optional. Presentation
/// fallbacks live in the `display_*` accessors so callers never see raw
/// `None` values; matching code uses the raw options instead, treating a
/// missing field as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Park {
    /// Park name as shown on the overview page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_name: Option<String>,

    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City/region line below the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_details: Option<String>,

    /// Latitude (from the Google Maps link; number or numeric string in JSON)
    #[serde(
        default,
        deserialize_with = "deserialize_coord",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,

    /// Longitude (from the Google Maps link; number or numeric string in JSON)
    #[serde(
        default,
        deserialize_with = "deserialize_coord",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,

    /// Overview description paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Main phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Reservation phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_phone: Option<String>,

    /// Amenity names listed on the park page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,

    /// Source page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Organic Google results from the enrichment pass
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub google_results: Vec<GoogleResult>,
}

impl Park {
    /// Create a park with just a name, for tests and fixtures.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            park_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Park name, falling back to `"Unknown"`.
    pub fn display_name(&self) -> &str {
        self.park_name.as_deref().unwrap_or("Unknown")
    }

    /// Description, falling back to `"No description available."`.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("No description available.")
    }

    /// Feature text, falling back to `"No features available"`.
    pub fn display_features(&self) -> &str {
        self.feature_snippet().unwrap_or("No features available")
    }

    /// Source URL, falling back to `"No URL available"`.
    pub fn display_url(&self) -> &str {
        self.url.as_deref().unwrap_or("No URL available")
    }

    /// Snippet of the first Google result, if any.
    ///
    /// This is the park's "features" text for matching purposes.
    pub fn feature_snippet(&self) -> Option<&str> {
        self.google_results
            .first()
            .and_then(|result| result.snippet.as_deref())
    }
}
