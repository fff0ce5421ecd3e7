use proptest::prelude::*;

use hardwords::pipeline::{Decision, ExtractionObserver};
use hardwords::{CommonWords, DifficultWordExtractor, ExtractorConfig, PosTag, StopwordFilter};

const STOPWORDS: &[&str] = &["the", "a", "an", "on", "of", "is", "and", "in", "to", "it"];
const COMMON: &[&str] = &["cat", "house", "good", "water", "run"];

fn extractor() -> DifficultWordExtractor {
    DifficultWordExtractor::new(
        ExtractorConfig::default(),
        StopwordFilter::from_list(STOPWORDS),
        CommonWords::from_words(COMMON.iter()),
    )
}

/// Records the tag of every kept word.
#[derive(Default)]
struct KeptTags(Vec<(String, PosTag)>);

impl ExtractionObserver for KeptTags {
    fn on_token(&mut self, word: &str, tag: PosTag, decision: Decision) {
        if decision == Decision::Kept {
            self.0.push((word.to_string(), tag));
        }
    }
}

fn sentence() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("the".to_string()),
        Just("a".to_string()),
        Just("Cat".to_string()),
        Just("houses".to_string()),
        Just("mild".to_string()),
        Just("plague".to_string()),
        Just("quickly".to_string()),
        Just("x".to_string()),
        "[a-z]{1,10}",
        "[A-Z][a-z]{1,8}",
    ];
    prop::collection::vec(word, 1..12).prop_map(|words| format!("{}.", words.join(" ")))
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 0..6).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn output_is_strictly_descending(text in text()) {
        let words = extractor().extract(&text).unwrap();
        for pair in words.windows(2) {
            prop_assert!(pair[0] > pair[1], "{:?} not above {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn no_short_stop_or_common_words(text in text()) {
        for word in extractor().extract(&text).unwrap() {
            prop_assert!(word.chars().count() >= 2, "short word {:?}", word);
            prop_assert!(!STOPWORDS.contains(&word.as_str()), "stop word {:?}", word);
            prop_assert!(!COMMON.contains(&word.as_str()), "common word {:?}", word);
        }
    }

    #[test]
    fn output_is_lowercase(text in text()) {
        for word in extractor().extract(&text).unwrap() {
            prop_assert_eq!(word.to_lowercase(), word);
        }
    }

    #[test]
    fn only_singular_nouns_and_plain_adjectives(text in text()) {
        let mut kept = KeptTags::default();
        let words = extractor().extract_with_observer(&text, &mut kept).unwrap();
        prop_assert_eq!(words.len(), kept.0.len());
        for (word, tag) in &kept.0 {
            prop_assert!(
                matches!(tag, PosTag::Noun | PosTag::Adjective),
                "{:?} kept with tag {}", word, tag
            );
        }
    }

    #[test]
    fn extraction_is_deterministic(text in text()) {
        let extractor = extractor();
        prop_assert_eq!(extractor.extract(&text).unwrap(), extractor.extract(&text).unwrap());
    }

    #[test]
    fn arbitrary_input_never_fails(text in ".{0,300}") {
        prop_assert!(extractor().extract(&text).is_ok());
    }
}

#[test]
fn cat_sat_on_the_mat() {
    let words = extractor().extract("The cat sat on the mat.").unwrap();
    assert_eq!(words, vec!["mat"]);
}

#[test]
fn plural_and_graded_forms_are_not_kept() {
    let words = extractor()
        .extract("The rodents were harder to catch than the rodent.")
        .unwrap();
    assert!(!words.contains(&"harder".to_string()));
    assert!(words.contains(&"rodent".to_string()));
}
