//! Picker options for the profile form and the browse filter.

pub const RELIGIONS: &[&str] = &["Hindu", "Muslim", "Christian", "Sikh", "Jain"];

pub const LOCATIONS: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
];

pub const AGE_BRACKETS: &[&str] = &["Any", "18-25", "26-30", "31-35", "36-40", "41+"];

/// Castes offered for a religion; empty for unknown religions
pub fn castes_for(religion: &str) -> &'static [&'static str] {
    match religion {
        "Hindu" => &[
            "Brahmin", "Kshatriya", "Gupta", "Patel", "Reddy", "Nair", "Kayastha", "Menon",
        ],
        "Muslim" => &["Sunni", "Shia"],
        "Christian" => &["Catholic"],
        "Sikh" => &["Jat", "Arora"],
        "Jain" => &["Svetambara", "Digambara"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeBracket;

    #[test]
    fn test_castes_depend_on_religion() {
        assert_eq!(castes_for("Muslim"), &["Sunni", "Shia"]);
        assert!(castes_for("Any").is_empty());
    }

    #[test]
    fn test_age_brackets_parse() {
        for bracket in AGE_BRACKETS {
            assert!(bracket.parse::<AgeBracket>().is_ok(), "{} should parse", bracket);
        }
    }
}
