//! Static catalog of Indian states/union territories and their major cities.

/// Country every jurisdiction hint currently belongs to.
pub const DEFAULT_COUNTRY: &str = "India";

/// Catch-all entry present at the end of every city list and as a region.
pub const OTHER: &str = "Other";

const REGIONS: &[(&str, &[&str])] = &[
    ("Andhra Pradesh", &["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Tirupati", OTHER]),
    ("Arunachal Pradesh", &["Itanagar", "Tawang", OTHER]),
    ("Assam", &["Guwahati", "Silchar", "Dibrugarh", OTHER]),
    ("Bihar", &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", OTHER]),
    ("Chhattisgarh", &["Raipur", "Bhilai", "Bilaspur", OTHER]),
    ("Goa", &["Panaji", "Margao", OTHER]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara", "Rajkot", OTHER]),
    ("Haryana", &["Gurgaon", "Faridabad", "Panipat", OTHER]),
    ("Himachal Pradesh", &["Shimla", "Manali", "Dharamshala", OTHER]),
    ("Jharkhand", &["Ranchi", "Jamshedpur", "Dhanbad", OTHER]),
    ("Karnataka", &["Bangalore", "Mysore", "Mangalore", "Hubli", OTHER]),
    ("Kerala", &["Thiruvananthapuram", "Kochi", "Kozhikode", OTHER]),
    ("Madhya Pradesh", &["Bhopal", "Indore", "Gwalior", "Jabalpur", OTHER]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Nashik", OTHER]),
    ("Manipur", &["Imphal", OTHER]),
    ("Meghalaya", &["Shillong", OTHER]),
    ("Mizoram", &["Aizawl", OTHER]),
    ("Nagaland", &["Kohima", "Dimapur", OTHER]),
    ("Odisha", &["Bhubaneswar", "Cuttack", "Rourkela", OTHER]),
    ("Punjab", &["Ludhiana", "Amritsar", "Chandigarh", OTHER]),
    ("Rajasthan", &["Jaipur", "Udaipur", "Jodhpur", "Kota", OTHER]),
    ("Sikkim", &["Gangtok", OTHER]),
    ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai", "Trichy", "Salem", OTHER]),
    ("Telangana", &["Hyderabad", "Warangal", "Nizamabad", OTHER]),
    ("Tripura", &["Agartala", OTHER]),
    ("Uttar Pradesh", &["Lucknow", "Kanpur", "Varanasi", "Noida", "Agra", OTHER]),
    ("Uttarakhand", &["Dehradun", "Haridwar", "Nainital", OTHER]),
    ("West Bengal", &["Kolkata", "Darjeeling", "Siliguri", OTHER]),
    ("Delhi", &["New Delhi", "North Delhi", "South Delhi", OTHER]),
    ("Jammu & Kashmir", &["Srinagar", "Jammu", OTHER]),
    ("Ladakh", &["Leh", "Kargil", OTHER]),
    ("Andaman & Nicobar Islands", &["Port Blair", OTHER]),
    ("Chandigarh", &["Chandigarh", OTHER]),
    ("Dadra & Nagar Haveli and Daman & Diu", &["Daman", "Diu", "Silvassa", OTHER]),
    ("Lakshadweep", &["Kavaratti", "Agatti", OTHER]),
    ("Puducherry", &["Puducherry", "Karaikal", "Mahe", "Yanam", OTHER]),
    (OTHER, &[OTHER]),
];

/// Region names sorted alphabetically, as shown in the state picker.
pub fn regions() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGIONS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

/// Cities of a region, or `None` when the region is unknown.
pub fn cities_for(region: &str) -> Option<&'static [&'static str]> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, cities)| *cities)
}

pub fn is_known_region(region: &str) -> bool {
    cities_for(region).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_city_list_ends_with_other() {
        for (region, cities) in REGIONS {
            assert_eq!(cities.last(), Some(&OTHER), "{region} is missing Other");
        }
    }

    #[test]
    fn test_regions_are_sorted_and_unique() {
        let names = regions();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Tamil Nadu"));
    }

    #[test]
    fn test_cities_lookup() {
        assert_eq!(
            cities_for("Karnataka"),
            Some(&["Bangalore", "Mysore", "Mangalore", "Hubli", OTHER][..])
        );
        assert!(cities_for("Atlantis").is_none());
        assert!(is_known_region(OTHER));
    }
}
