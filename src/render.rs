use housing_browser::format::{bedrooms_label, format_date, format_price, map_url, results_count};
use housing_browser::{Listing, Session, ViewState};

pub fn results(session: &Session) {
    let listings = session.results();

    println!("{} ({})", session.results_heading(), results_count(listings.len()));
    if listings.is_empty() {
        println!("   No properties found. Try adjusting your search criteria.");
    }

    for (i, listing) in listings.iter().enumerate() {
        let heart = if session.is_favourite(&listing.id) { "♥" } else { " " };
        println!("{} {}. {} ({})", heart, i + 1, listing.short_description, format_price(listing.price));
        println!(
            "     {} · {} · {}",
            listing.property_type,
            bedrooms_label(listing.bedrooms),
            listing.tenure
        );
        println!("     {}, {}", listing.location.address, listing.postcode);
        println!("     Added: {}", format_date(listing.date_added));
        println!("     ID: {}", listing.id);
    }
}

pub fn detail(listing: Option<&Listing>, is_favourite: bool) {
    let Some(listing) = listing else {
        println!("Property not found.");
        return;
    };

    println!("{}", format_price(listing.price));
    println!(
        "{}, {}, {}",
        listing.location.address, listing.location.city, listing.postcode
    );
    println!(
        "{} · {} · {}",
        listing.property_type,
        bedrooms_label(listing.bedrooms),
        listing.tenure
    );
    println!();
    println!("{}", listing.short_description);
    println!("{}", listing.long_description);
    println!();
    println!("Images: {}", listing.images.len());
    println!("Floor plan: {}", listing.floor_plan);
    println!("Map: {}", map_url(&listing.location.coordinates));
    println!("Favourite: {}", if is_favourite { "yes" } else { "no" });
}

pub fn favourites(session: &Session) {
    let favourites = session.favourites();
    println!("Favourites ({})", favourites.len());
    if favourites.is_empty() {
        println!("   Drag properties here or use the heart to save favourites");
    }
    for listing in favourites.iter() {
        println!("   {} - {} [{}]", format_price(listing.price), listing.short_description, listing.id);
    }
}

/// Render whichever screen the session is on
pub fn session(session: &Session) {
    match session.view() {
        ViewState::Browsing => {
            results(session);
            println!();
            favourites(session);
        }
        ViewState::Viewing(listing) => detail(Some(listing), session.is_favourite(&listing.id)),
    }
    println!("----------------------------------------");
}
