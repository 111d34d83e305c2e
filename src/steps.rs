use housing_browser::{Command, SearchCriteria, SearchForm, Session};
use serde::Deserialize;
use tracing::warn;

/// One line of input to the `session` command.
///
/// Listings are referred to by id and resolved against the catalogue before
/// they reach the core.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum Step {
    Search {
        #[serde(default)]
        criteria: SearchCriteria,
    },
    /// Raw form fields, parsed the way the search form would
    Form {
        #[serde(default)]
        form: SearchForm,
    },
    Reset,
    Add { id: String },
    Remove { id: String },
    Toggle { id: String },
    Clear,
    View { id: String },
    Back,
    DropListing { payload: String },
    DropRemoval { id: String },
}

pub enum Resolved {
    Command(Command),
    /// A listing was asked for that the catalogue does not hold
    NotFound(String),
}

impl Step {
    pub fn resolve(self, session: &Session) -> Resolved {
        let listing = |id: String| match session.listing(&id) {
            Some(listing) => Ok(listing.clone()),
            None => {
                warn!("No listing with id {}", id);
                Err(Resolved::NotFound(id))
            }
        };

        let command = match self {
            Step::Search { criteria } => Command::Search(criteria),
            Step::Form { form } => Command::Search(form.to_criteria()),
            Step::Reset => Command::ResetSearch,
            Step::Add { id } => match listing(id) {
                Ok(listing) => Command::AddFavourite(listing),
                Err(not_found) => return not_found,
            },
            Step::Remove { id } => Command::RemoveFavourite(id),
            Step::Toggle { id } => match listing(id) {
                Ok(listing) => Command::ToggleFavourite(listing),
                Err(not_found) => return not_found,
            },
            Step::Clear => Command::ClearFavourites,
            Step::View { id } => match listing(id) {
                Ok(listing) => Command::View(listing),
                Err(not_found) => return not_found,
            },
            Step::Back => Command::Back,
            Step::DropListing { payload } => Command::DropListing(payload),
            Step::DropRemoval { id } => Command::DropRemoval(id),
        };
        Resolved::Command(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use housing_browser::{Coordinates, Listing, Location};

    fn session() -> Session {
        let listing = Listing {
            id: "prop1".to_string(),
            property_type: "House".to_string(),
            bedrooms: 3,
            price: 450_000,
            tenure: "Freehold".to_string(),
            postcode: "BR1".to_string(),
            short_description: "House".to_string(),
            long_description: String::new(),
            date_added: chrono::NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
            location: Location {
                address: "1 High Street".to_string(),
                city: "Bromley".to_string(),
                coordinates: Coordinates { lat: 51.4, lng: 0.02 },
            },
            images: vec![],
            floor_plan: String::new(),
        };
        Session::new(vec![listing])
    }

    fn parse(line: &str) -> Step {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_form_step_parses_fields() {
        let step = parse(r#"{"step":"form","form":{"postcode":" br1 ","minPrice":"400000"}}"#);
        match step.resolve(&session()) {
            Resolved::Command(Command::Search(criteria)) => {
                assert_eq!(criteria.postcode.as_deref(), Some("BR1"));
                assert_eq!(criteria.min_price, Some(400_000));
            }
            _ => panic!("expected a search"),
        }
    }

    #[test]
    fn test_view_resolves_listing() {
        let step = parse(r#"{"step":"view","id":"prop1"}"#);
        assert!(matches!(step.resolve(&session()), Resolved::Command(Command::View(_))));

        let step = parse(r#"{"step":"view","id":"prop9"}"#);
        assert!(matches!(step.resolve(&session()), Resolved::NotFound(id) if id == "prop9"));
    }

    #[test]
    fn test_unit_steps() {
        assert!(matches!(
            parse(r#"{"step":"back"}"#).resolve(&session()),
            Resolved::Command(Command::Back)
        ));
        assert!(matches!(
            parse(r#"{"step":"search"}"#).resolve(&session()),
            Resolved::Command(Command::Search(c)) if c.is_empty()
        ));
    }
}
