use crate::models::Coordinates;
use chrono::NaiveDate;

/// `450000` -> `£450,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    grouped.push('£');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `2024-11-15` -> `15 Nov 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn results_count(count: usize) -> String {
    if count == 1 {
        "1 property found".to_string()
    } else {
        format!("{} properties found", count)
    }
}

pub fn bedrooms_label(bedrooms: u32) -> String {
    if bedrooms == 1 {
        "1 bed".to_string()
    } else {
        format!("{} beds", bedrooms)
    }
}

/// Embeddable map link centred on the listing
pub fn map_url(coordinates: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps?q={},{}&z=15&output=embed",
        coordinates.lat, coordinates.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(450_000), "£450,000");
        assert_eq!(format_price(1_250_000), "£1,250,000");
        assert_eq!(format_price(99_000), "£99,000");
        assert_eq!(format_price(999), "£999");
        assert_eq!(format_price(0), "£0");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 11, 15).unwrap()), "15 Nov 2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 12, 5).unwrap()), "5 Dec 2024");
    }

    #[test]
    fn test_labels() {
        assert_eq!(results_count(1), "1 property found");
        assert_eq!(results_count(0), "0 properties found");
        assert_eq!(bedrooms_label(1), "1 bed");
        assert_eq!(bedrooms_label(4), "4 beds");
    }

    #[test]
    fn test_map_url() {
        let coordinates = Coordinates {
            lat: 51.4039,
            lng: 0.0198,
        };
        assert_eq!(
            map_url(&coordinates),
            "https://www.google.com/maps?q=51.4039,0.0198&z=15&output=embed"
        );
    }
}
