use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Map coordinates of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location information for a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
}

/// A single property listing in the catalogue.
///
/// Listings are never mutated once loaded; favourites and the detail view
/// hold their own copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    /// "House", "Flat", ... Matched case-insensitively.
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    pub price: u64,
    pub tenure: String,
    /// Outward part of the postcode, e.g. "BR1"
    pub postcode: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(with = "calendar_date")]
    pub date_added: NaiveDate,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    pub floor_plan: String,
}

/// On-disk shape of a catalogue: `{ "properties": [ ... ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    pub properties: Vec<Listing>,
}

/// `dateAdded` is a calendar date. Inputs carrying a time of day are
/// truncated so the time never takes part in comparisons.
mod calendar_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Ok(date);
        }
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .map(|dt| dt.date())
            .map_err(|_| de::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", raw)))
    }
}
