//! Property tests for output truncation.

use proptest::prelude::*;

use remote_deploy::domain::services::{truncate_output, TRUNCATION_MARKER};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The result never exceeds `max` characters plus the marker.
    #[test]
    fn property_truncated_output_is_bounded(text in ".{0,200}", max in 0usize..150) {
        let truncated = truncate_output(&text, max);
        let limit = max + TRUNCATION_MARKER.chars().count();
        prop_assert!(truncated.chars().count() <= limit);
    }

    /// PROPERTY: Short output is untouched; long output keeps its first `max` characters.
    #[test]
    fn property_truncation_keeps_prefix(text in ".{0,200}", max in 0usize..150) {
        let truncated = truncate_output(&text, max);
        let length = text.chars().count();

        if length <= max {
            prop_assert_eq!(&*truncated, text.as_str());
        } else {
            let prefix: String = text.chars().take(max).collect();
            prop_assert_eq!(truncated.into_owned(), format!("{prefix}{TRUNCATION_MARKER}"));
        }
    }
}
