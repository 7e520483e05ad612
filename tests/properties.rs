use expand_contractions::text::{tokenize, uncapitalize};
use expand_contractions::{
    expand_contractions, expand_value, ContractionExpander, ContractionTable, ExpandError,
    TokenizerConfig,
};
use proptest::prelude::*;
use serde_json::json;

fn has_contraction(text: &str) -> bool {
    let table = ContractionTable::builtin();
    tokenize(text, &TokenizerConfig::default())
        .into_iter()
        .any(|token| table.contains_key(token) || table.contains_key(&uncapitalize(token)))
}

proptest! {
    #[test]
    fn expansion_is_deterministic(s in ".{0,200}") {
        prop_assert_eq!(expand_contractions(&s), expand_contractions(&s));
    }

    #[test]
    fn tokens_reconstruct_input(s in ".{0,200}") {
        let tokens = tokenize(&s, &TokenizerConfig::default());
        prop_assert_eq!(tokens.concat(), s);
    }

    #[test]
    fn text_without_contractions_passes_through(s in "[a-zA-Z0-9 ,.;:!?'\"\n-]{0,120}") {
        prop_assume!(!has_contraction(&s));
        prop_assert_eq!(expand_contractions(&s), s);
    }

    #[test]
    fn one_segment_per_token(s in "[a-zA-Z ,.'\n]{0,120}") {
        let expander = ContractionExpander::default();
        let tokens = tokenize(&s, &TokenizerConfig::default());
        let segments = expander.expand_segments(&s);
        prop_assert_eq!(segments.len(), tokens.len());
        for (token, segment) in tokens.iter().zip(segments.iter()) {
            if expander.expand_token(token).is_none() {
                prop_assert_eq!(*token, &**segment);
            }
        }
    }

    #[test]
    fn numbers_are_rejected(n in any::<i64>()) {
        prop_assert_eq!(
            expand_value(&json!(n)),
            Err(ExpandError::InvalidArgument(n.to_string()))
        );
    }

    #[test]
    fn booleans_are_rejected(b in any::<bool>()) {
        prop_assert!(matches!(
            expand_value(&json!(b)),
            Err(ExpandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn string_values_match_typed_entry_point(s in ".{0,100}") {
        prop_assert_eq!(expand_value(&json!(s.clone())), Ok(expand_contractions(&s)));
    }
}
