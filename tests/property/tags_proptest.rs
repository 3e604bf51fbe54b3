//! Property-based tests for tag parsing

use proptest::prelude::*;

use collabnotes::shared::models::parse_tags;

proptest! {
    #[test]
    fn test_parsed_tags_are_trimmed_and_non_empty(csv in "[a-z ,]{0,40}") {
        let tags = parse_tags(&csv);
        for tag in &tags {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tag.contains(','));
        }
    }

    #[test]
    fn test_parse_keeps_order(parts in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        prop_assert_eq!(parse_tags(&parts.join(", ")), parts);
    }
}
