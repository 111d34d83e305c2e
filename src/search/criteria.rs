use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Search criteria for filtering listings.
///
/// Every field is optional and `None` means "no constraint on this
/// dimension". Ranges are not validated: `min_price > max_price` is legal
/// and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Property type, compared case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Minimum price, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// Maximum price, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    /// Maximum number of bedrooms, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<u32>,
    /// Earliest date added, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    /// Latest date added, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    /// Postcode area prefix, e.g. "BR1" or "SW"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

impl SearchCriteria {
    /// True when no dimension is constrained
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw text of the search form fields, as typed or selected by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchForm {
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub min_bedrooms: String,
    pub max_bedrooms: String,
    pub date_from: String,
    pub date_to: String,
    pub postcode: String,
}

impl SearchForm {
    /// Build criteria from the form. Blank fields stay unconstrained.
    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            property_type: non_blank(&self.property_type).map(str::to_string),
            min_price: parse_field("minPrice", &self.min_price),
            max_price: parse_field("maxPrice", &self.max_price),
            min_bedrooms: parse_field("minBedrooms", &self.min_bedrooms),
            max_bedrooms: parse_field("maxBedrooms", &self.max_bedrooms),
            date_from: parse_field("dateFrom", &self.date_from),
            date_to: parse_field("dateTo", &self.date_to),
            postcode: non_blank(&self.postcode).map(|p| p.to_uppercase()),
        }
    }

    /// Blank every field
    pub fn reset(self) -> Self {
        Self::default()
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_field<T: FromStr>(name: &str, value: &str) -> Option<T> {
    let raw = non_blank(value)?;
    match raw.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("Ignoring unparseable {} value '{}'", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_is_empty() {
        assert!(SearchCriteria::default().is_empty());

        let criteria = SearchCriteria {
            min_bedrooms: Some(0),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_blank_form_gives_empty_criteria() {
        let form = SearchForm {
            postcode: "   ".to_string(),
            ..Default::default()
        };
        assert!(form.to_criteria().is_empty());
    }

    #[test]
    fn test_form_parses_every_field() {
        let form = SearchForm {
            property_type: "House".to_string(),
            min_price: "100000".to_string(),
            max_price: "500000".to_string(),
            min_bedrooms: "2".to_string(),
            max_bedrooms: "5".to_string(),
            date_from: "2024-11-01".to_string(),
            date_to: "2024-11-30".to_string(),
            postcode: " br1 ".to_string(),
        };

        let criteria = form.to_criteria();
        assert_eq!(criteria.property_type.as_deref(), Some("House"));
        assert_eq!(criteria.min_price, Some(100_000));
        assert_eq!(criteria.max_price, Some(500_000));
        assert_eq!(criteria.min_bedrooms, Some(2));
        assert_eq!(criteria.max_bedrooms, Some(5));
        assert_eq!(criteria.date_from, NaiveDate::from_ymd_opt(2024, 11, 1));
        assert_eq!(criteria.date_to, NaiveDate::from_ymd_opt(2024, 11, 30));
        assert_eq!(criteria.postcode.as_deref(), Some("BR1"));
    }

    #[test]
    fn test_unparseable_numbers_are_dropped() {
        let form = SearchForm {
            min_price: "lots".to_string(),
            date_to: "next week".to_string(),
            ..Default::default()
        };
        assert!(form.to_criteria().is_empty());
    }

    #[test]
    fn test_reset_blanks_the_form() {
        let form = SearchForm {
            property_type: "Flat".to_string(),
            ..Default::default()
        };
        assert_eq!(form.reset(), SearchForm::default());
    }

    #[test]
    fn test_criteria_serializes_sparse() {
        let criteria = SearchCriteria {
            min_price: Some(400_000),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&criteria).unwrap(), r#"{"minPrice":400000}"#);

        let parsed: SearchCriteria = serde_json::from_str(r#"{"dateFrom":"2024-11-01"}"#).unwrap();
        assert_eq!(parsed.date_from, NaiveDate::from_ymd_opt(2024, 11, 1));
    }
}
