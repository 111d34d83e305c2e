use crate::models::Listing;
use crate::search::criteria::SearchCriteria;

/// Filter listings against the criteria.
///
/// Returns the listings passing every defined dimension, in their original
/// order. Empty criteria return every listing untouched.
pub fn filter<'a>(listings: &'a [Listing], criteria: &SearchCriteria) -> Vec<&'a Listing> {
    if criteria.is_empty() {
        return listings.iter().collect();
    }

    listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

/// Whether a single listing passes all defined criteria
pub fn matches(listing: &Listing, criteria: &SearchCriteria) -> bool {
    if let Some(property_type) = &criteria.property_type {
        if listing.property_type.to_lowercase() != property_type.to_lowercase() {
            return false;
        }
    }

    if criteria.min_price.is_some_and(|min| listing.price < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| listing.price > max) {
        return false;
    }

    if criteria.min_bedrooms.is_some_and(|min| listing.bedrooms < min) {
        return false;
    }
    if criteria.max_bedrooms.is_some_and(|max| listing.bedrooms > max) {
        return false;
    }

    if criteria.date_from.is_some_and(|from| listing.date_added < from) {
        return false;
    }
    if criteria.date_to.is_some_and(|to| listing.date_added > to) {
        return false;
    }

    if let Some(postcode) = &criteria.postcode {
        let wanted = postcode.trim().to_uppercase();
        if !listing.postcode.trim().to_uppercase().starts_with(&wanted) {
            return false;
        }
    }

    true
}
