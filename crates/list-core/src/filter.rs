//! Filter Matching

/// Case-insensitive containment; an empty query matches everything
pub fn matches_filter(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Milk", "mil", true)]
    #[case("milk2", "mil", true)]
    #[case("Bread", "mil", false)]
    #[case("Bread", "", true)]
    #[case("Bread", "EAD", true)]
    #[case("Crème fraîche", "CRÈME", true)]
    #[case("Eggs", "eggs ", false)]
    fn test_matches_filter(#[case] text: &str, #[case] query: &str, #[case] expected: bool) {
        assert_eq!(matches_filter(text, query), expected);
    }
}
