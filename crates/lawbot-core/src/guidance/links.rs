//! External lawyer search links derived from the backend's search key.

use reqwest::Url;

const WEB_SEARCH_URL: &str = "https://www.google.com/search";
const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Ready-to-open links for finding a lawyer near the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawyerSearchLinks {
    /// The plain query, e.g. "property lawyer in Karnataka".
    pub query: String,
    pub web_search: String,
    pub maps: String,
}

impl LawyerSearchLinks {
    /// Builds the links, or `None` for a blank search key.
    pub fn build(search_key: &str, location: &str) -> Option<Self> {
        let search_key = search_key.trim();
        if search_key.is_empty() {
            return None;
        }

        let location = location.trim();
        let query = if location.is_empty() {
            search_key.to_string()
        } else {
            format!("{} in {}", search_key, location)
        };

        let web_search = Url::parse_with_params(WEB_SEARCH_URL, &[("q", query.as_str())]).ok()?;
        let maps = Url::parse_with_params(
            MAPS_SEARCH_URL,
            &[("api", "1"), ("query", query.as_str())],
        )
        .ok()?;

        Some(Self {
            query,
            web_search: web_search.into(),
            maps: maps.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_encoded() {
        let links = LawyerSearchLinks::build("property lawyer", "Tamil Nadu").unwrap();
        assert_eq!(links.query, "property lawyer in Tamil Nadu");
        assert_eq!(
            links.web_search,
            "https://www.google.com/search?q=property+lawyer+in+Tamil+Nadu"
        );
        assert_eq!(
            links.maps,
            "https://www.google.com/maps/search/?api=1&query=property+lawyer+in+Tamil+Nadu"
        );
    }

    #[test]
    fn test_special_characters() {
        let links = LawyerSearchLinks::build("lawyer", "Jammu & Kashmir").unwrap();
        assert!(links.web_search.contains("Jammu+%26+Kashmir"));
    }

    #[test]
    fn test_blank_key() {
        assert!(LawyerSearchLinks::build("  ", "Goa").is_none());
        let links = LawyerSearchLinks::build("notary", "").unwrap();
        assert_eq!(links.query, "notary");
    }
}
