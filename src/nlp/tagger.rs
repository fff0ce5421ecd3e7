//! Part-of-speech tagging
//!
//! [`PosTagger`] is the seam for plugging in any tagger that speaks the Penn
//! Treebank tag set. The built-in [`LexiconTagger`] is a rule-based tagger in
//! the spirit of a Brill tagger's initial state:
//!
//! 1. punctuation, numbers and clitics by shape
//! 2. closed-class words and irregular forms from a lexicon
//! 3. mid-sentence capitalized words as proper nouns
//! 4. suffix heuristics (`-ly`, `-ing`, `-ed`, `-ous`, `-s`, ...), default `NN`
//! 5. one left-to-right pass of contextual repairs
//!
//! It is accurate enough on news-style prose for vocabulary extraction; swap
//! in a statistical tagger through the trait when that is not enough.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::types::PosTag;

/// Assigns one Penn Treebank tag per word of a sentence.
pub trait PosTagger {
    /// Tag the words of one sentence, in order.
    ///
    /// Implementations must return exactly `words.len()` tags.
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>>;
}

impl<T: PosTagger + ?Sized> PosTagger for &T {
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>> {
        (**self).tag(words)
    }
}

/// Check the one-tag-per-word contract of a [`PosTagger`].
pub fn check_tag_count(words: &[String], tags: &[PosTag]) -> Result<()> {
    if words.len() != tags.len() {
        return Err(Error::Tagging(format!(
            "{} tags for {} words",
            tags.len(),
            words.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

const CLOSED_CLASS: &[(PosTag, &[&str])] = &[
    (
        PosTag::Determiner,
        &[
            "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every",
            "no", "another", "either", "neither", "all", "both", "half",
        ],
    ),
    (
        PosTag::Preposition,
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "upon", "about",
            "above", "across", "after", "against", "along", "amid", "among", "around", "as",
            "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond",
            "despite", "during", "except", "inside", "like", "near", "off", "outside", "over",
            "per", "since", "than", "through", "throughout", "toward", "towards", "under",
            "underneath", "unlike", "until", "till", "via", "within", "without", "because",
            "although", "though", "while", "whereas", "if", "unless", "whether",
        ],
    ),
    (PosTag::CoordConj, &["and", "or", "but", "nor", "yet", "plus", "&"]),
    (
        PosTag::Pronoun,
        &[
            "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves", "one",
        ],
    ),
    (
        PosTag::PossessivePronoun,
        &["my", "your", "his", "her", "its", "our", "their"],
    ),
    (
        PosTag::Modal,
        &["can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought"],
    ),
    (PosTag::WhDeterminer, &["which", "whatever", "whichever"]),
    (PosTag::WhPronoun, &["who", "whom", "what", "whoever"]),
    (PosTag::WhPossessive, &["whose"]),
    (PosTag::WhAdverb, &["when", "where", "why", "how", "whenever", "wherever"]),
    (PosTag::To, &["to"]),
    (PosTag::Existential, &["there"]),
    (PosTag::Predeterminer, &["such", "quite", "rather"]),
    (
        PosTag::Interjection,
        &["oh", "ah", "wow", "hey", "yes", "hello", "ouch", "oops", "alas"],
    ),
    (
        PosTag::Adverb,
        &[
            "not", "n't", "also", "very", "too", "so", "just", "already", "still", "even", "ever",
            "never", "always", "often", "sometimes", "soon", "now", "then", "here", "again",
            "almost", "only", "once", "twice", "perhaps", "maybe", "however", "therefore",
            "thus", "instead", "otherwise", "together", "apart", "away", "back", "ago", "else",
            "essentially", "nearly", "barely", "indeed", "well", "anyway", "yet", "abroad",
        ],
    ),
    (PosTag::AdverbComparative, &["more", "less", "further", "earlier", "later"]),
    (PosTag::AdjectiveComparative, &["better", "worse"]),
    (PosTag::AdjectiveSuperlative, &["best", "worst"]),
    (PosTag::AdverbSuperlative, &["most", "least"]),
    (PosTag::Particle, &["up", "out", "down"]),
    (
        PosTag::VerbPresent,
        &["am", "are", "do", "have", "'re", "’re", "'ve", "’ve", "'m", "’m"],
    ),
    (PosTag::VerbThirdPerson, &["is", "has", "does"]),
    (
        PosTag::VerbPast,
        &[
            "was", "were", "had", "did", "sat", "said", "made", "went", "came", "saw", "knew",
            "got", "gave", "found", "thought", "told", "became", "left", "felt", "brought",
            "began", "kept", "held", "wrote", "stood", "heard", "meant", "met", "paid", "spoke",
            "led", "grew", "lost", "fell", "sent", "built", "understood", "drew", "broke",
            "spent", "rose", "drove", "bought", "wore", "chose", "sought", "threw", "caught",
            "won", "ate", "ran", "took", "flew", "forgot", "slept", "sold", "sang", "swam",
            "taught", "fought", "hid", "shook", "struck", "woke",
        ],
    ),
    (
        PosTag::VerbPastParticiple,
        &[
            "been", "done", "gone", "seen", "known", "given", "taken", "written", "spoken",
            "grown", "fallen", "drawn", "broken", "risen", "driven", "worn", "chosen", "thrown",
            "eaten", "flown", "forgotten", "begun", "shown", "bitten", "hidden", "stolen",
        ],
    ),
    (PosTag::VerbGerund, &["being", "having", "doing"]),
    (PosTag::Verb, &["be"]),
    (PosTag::Possessive, &["'s", "’s"]),
    (
        PosTag::CardinalNumber,
        &[
            "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "hundreds",
            "thousand", "thousands", "million", "millions", "billion", "billions",
        ],
    ),
    (
        PosTag::NounPlural,
        &[
            "people", "mice", "children", "men", "women", "feet", "teeth", "geese", "data",
            "media", "criteria", "phenomena", "police", "cattle",
        ],
    ),
    (
        PosTag::Noun,
        &[
            "%", "thing", "nothing", "something", "anything", "everything", "king", "ring",
            "wing", "spring", "string", "morning", "evening", "ceiling", "building", "family",
            "supply", "reply", "assembly", "ally", "rally", "anomaly", "monopoly", "need",
            "speed", "seed", "bed", "shed", "news", "series", "species", "animal", "hospital",
            "signal", "trial", "capital", "festival", "journal", "total", "proposal", "approval",
            "arrival", "survival", "individual", "official", "material", "potential", "rival",
            "detective", "executive", "objective", "relative", "representative", "alternative",
            "initiative", "music", "topic", "traffic", "logic", "clinic", "panic", "critic",
            "republic", "mechanic", "fabric", "graphic", "epidemic", "pandemic",
        ],
    ),
];

/// Adjectives that suffix rules cannot recognize; also the bases for
/// comparative/superlative detection.
const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "young", "big", "small", "large", "little", "great", "high",
    "low", "long", "short", "hard", "soft", "easy", "simple", "early", "late", "mild", "severe",
    "moderate", "overall", "actual", "other", "same", "different", "few", "many", "much",
    "several", "own", "whole", "main", "major", "minor", "full", "empty", "close", "far",
    "near", "hot", "cold", "warm", "cool", "dry", "wet", "rich", "poor", "strong", "weak",
    "fast", "slow", "quick", "safe", "sure", "true", "false", "free", "clear", "dark", "light",
    "heavy", "wide", "narrow", "deep", "thin", "thick", "fine", "nice", "bright", "busy",
    "cheap", "clean", "dead", "deadly", "fair", "fresh", "happy", "huge", "kind", "lucky",
    "loud", "pretty", "proud", "quiet", "rare", "raw", "real", "ready", "rough", "sad", "sick",
    "smart", "tiny", "tough", "ugly", "vast", "wild", "wise", "wrong", "right", "edible",
    "constant", "preliminary", "makeshift", "eastern", "western", "northern", "southern",
    "first", "last", "next", "previous", "recent", "current", "common", "certain", "likely",
    "able", "various", "important", "possible", "public", "private", "local", "national",
];

/// Verbs whose base form is otherwise indistinguishable from a noun.
const BASE_VERBS: &[&str] = &[
    "run", "say", "make", "go", "take", "come", "see", "know", "get", "give", "find", "think",
    "tell", "become", "show", "leave", "feel", "put", "bring", "begin", "keep", "hold", "write",
    "stand", "hear", "let", "mean", "set", "meet", "pay", "sit", "speak", "lead", "read",
    "grow", "lose", "fall", "send", "build", "understand", "draw", "break", "spend", "cut",
    "rise", "drive", "buy", "wear", "choose", "seek", "throw", "catch", "win", "continue",
    "remain", "chew", "suggest", "provide", "occur", "receive", "observe", "kill", "add", "use",
    "seem", "help", "try", "ask", "want", "look", "include", "allow", "appear", "believe",
    "consider", "expect", "develop", "destroy", "devour", "skittle", "drown", "engulf",
];

/// Words ending in `-s` that are neither plural nouns nor verbs.
const NON_PLURAL_S: &[&str] = &[
    "always", "perhaps", "sometimes", "whereas", "towards", "afterwards", "nevertheless",
    "bias", "gas", "atlas", "canvas", "alias", "lens", "chaos", "thanks", "means",
];

/// Rule-based English tagger.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<String, PosTag>,
    adjectives: FxHashSet<String>,
    base_verbs: FxHashSet<String>,
    non_plural_s: FxHashSet<String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let mut lexicon = FxHashMap::default();
        for (tag, words) in CLOSED_CLASS {
            for word in *words {
                // First listing wins: "that" stays a determiner, not a preposition.
                lexicon.entry(word.to_string()).or_insert(*tag);
            }
        }

        Self {
            lexicon,
            adjectives: ADJECTIVES.iter().map(|s| s.to_string()).collect(),
            base_verbs: BASE_VERBS.iter().map(|s| s.to_string()).collect(),
            non_plural_s: NON_PLURAL_S.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Override or extend the lexicon (keys are matched lowercase).
    pub fn with_entries(mut self, entries: &[(&str, PosTag)]) -> Self {
        for (word, tag) in entries {
            self.lexicon.insert(word.to_lowercase(), *tag);
        }
        self
    }

    /// Tag a single word without context.
    fn initial_tag(&self, word: &str, sentence_initial: bool, quote_open: &mut bool) -> PosTag {
        if let Some(tag) = punctuation_tag(word, quote_open) {
            return tag;
        }
        if is_number(word) {
            return PosTag::CardinalNumber;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return *tag;
        }
        if self.adjectives.contains(&lower) {
            return PosTag::Adjective;
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && (!sentence_initial || is_acronym(word)) {
            return if self.is_plural_shape(&lower) && !is_acronym(word) {
                PosTag::ProperNounPlural
            } else {
                PosTag::ProperNoun
            };
        }

        if self.base_verbs.contains(&lower) {
            // Decided by context; noun until then.
            return PosTag::Noun;
        }

        self.suffix_tag(&lower)
    }

    fn suffix_tag(&self, lower: &str) -> PosTag {
        let len = lower.chars().count();

        if !lower.chars().any(char::is_alphabetic) {
            return PosTag::Symbol;
        }
        if let Some(tag) = self.graded_adjective(lower) {
            return tag;
        }
        if len > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if len > 4 && lower.ends_with("ing") {
            return PosTag::VerbGerund;
        }
        if len > 4 && lower.ends_with("ed") {
            return PosTag::VerbPast;
        }
        const ADJECTIVE_SUFFIXES: &[&str] = &[
            "ous", "ful", "ive", "able", "ible", "ical", "ic", "al", "less", "ish", "ant", "ent",
        ];
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            // -ment, -ant/-ent nouns are far more common than adjectives
            if lower.ends_with("ment") || NOUNISH_ANT_ENT.iter().any(|s| lower.ends_with(s)) {
                return PosTag::Noun;
            }
            return PosTag::Adjective;
        }
        if self.is_plural_shape(lower) {
            return PosTag::NounPlural;
        }
        PosTag::Noun
    }

    /// `-s` words that read as plurals (not "glass", "virus", "basis", "always").
    fn is_plural_shape(&self, lower: &str) -> bool {
        lower.len() > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
            && !self.non_plural_s.contains(lower)
    }

    /// Comparative/superlative forms of known adjectives.
    fn graded_adjective(&self, lower: &str) -> Option<PosTag> {
        for (suffix, tag) in [
            ("est", PosTag::AdjectiveSuperlative),
            ("er", PosTag::AdjectiveComparative),
        ] {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            let candidates = [
                stem.to_string(),
                format!("{stem}e"),
                stem.strip_suffix('i').map(|s| format!("{s}y")).unwrap_or_default(),
                undouble(stem).unwrap_or_default(),
            ];
            if candidates
                .iter()
                .any(|c| !c.is_empty() && self.adjectives.contains(c))
            {
                return Some(tag);
            }
        }
        None
    }

    /// Contextual repairs, applied left to right.
    fn repair(&self, words: &[String], tags: &mut [PosTag]) {
        for i in 0..tags.len() {
            let lower = words[i].to_lowercase();
            let prev = if i > 0 { Some(tags[i - 1]) } else { None };
            let prev_word = if i > 0 { words[i - 1].to_lowercase() } else { String::new() };

            match (prev, tags[i]) {
                // will chew, to continue
                (Some(PosTag::Modal) | Some(PosTag::To), PosTag::Noun | PosTag::VerbPresent)
                    if self.base_verbs.contains(&lower) || tags[i] == PosTag::VerbPresent =>
                {
                    tags[i] = PosTag::Verb;
                }
                // mice continue, they remain
                (Some(PosTag::NounPlural | PosTag::Pronoun), PosTag::Noun)
                    if self.base_verbs.contains(&lower) =>
                {
                    tags[i] = PosTag::VerbPresent;
                }
                // it kills, which runs
                (Some(PosTag::Pronoun | PosTag::WhDeterminer | PosTag::WhPronoun), PosTag::NounPlural) => {
                    tags[i] = PosTag::VerbThirdPerson;
                }
                // has received, were observed
                (_, PosTag::VerbPast) if is_auxiliary(&prev_word) => {
                    tags[i] = PosTag::VerbPastParticiple;
                }
                // the vaccinated group; irregular forms ("all went") stay verbs
                (Some(PosTag::Determiner | PosTag::PossessivePronoun), PosTag::VerbPast)
                    if !self.lexicon.contains_key(&lower) =>
                {
                    tags[i] = PosTag::Adjective;
                }
                // "that" introducing a clause after a noun
                (Some(prev_tag), PosTag::Determiner) if lower == "that" && prev_tag.is_noun() => {
                    tags[i] = PosTag::WhDeterminer;
                }
                _ => {}
            }
        }
    }
}

/// -ant/-ent endings that are nouns.
const NOUNISH_ANT_ENT: &[&str] = &[
    "dent", "gent", "ment", "pient", "tient", "vent", "lant", "tant", "cant",
];

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>> {
        let mut quote_open = false;
        let mut sentence_initial = true;
        let mut tags = Vec::with_capacity(words.len());

        for word in words {
            let tag = self.initial_tag(word, sentence_initial, &mut quote_open);
            // Quotes and brackets do not end the sentence-initial position.
            if !matches!(tag, PosTag::OpenQuote | PosTag::OpenParen) {
                sentence_initial = false;
            }
            tags.push(tag);
        }

        self.repair(words, &mut tags);
        check_tag_count(words, &tags)?;
        Ok(tags)
    }
}

fn punctuation_tag(word: &str, quote_open: &mut bool) -> Option<PosTag> {
    let tag = match word {
        "." | "!" | "?" => PosTag::SentenceEnd,
        "," => PosTag::Comma,
        ":" | ";" | "-" | "--" | "—" | "–" | "..." | "…" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenParen,
        ")" | "]" | "}" => PosTag::CloseParen,
        "``" | "“" | "‘" => PosTag::OpenQuote,
        "''" | "”" | "’" => PosTag::CloseQuote,
        "\"" | "'" => {
            *quote_open = !*quote_open;
            if *quote_open {
                PosTag::OpenQuote
            } else {
                PosTag::CloseQuote
            }
        }
        "$" | "€" | "£" => PosTag::Dollar,
        "#" => PosTag::Hash,
        _ => return None,
    };
    Some(tag)
}

fn is_number(word: &str) -> bool {
    let mut digits = 0;
    for c in word.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' | '/' | '-' | '+' => {}
            _ => return false,
        }
    }
    digits > 0
}

/// `COVID-19`, `NVX-CoV2373`, `UK`
fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    let uppercase = letters.iter().filter(|c| c.is_uppercase()).count();
    let mostly_upper = letters.len() >= 2 && uppercase * 2 > letters.len();
    let alphanumeric = !letters.is_empty() && word.chars().any(|c| c.is_ascii_digit());
    mostly_upper || alphanumeric
}

fn is_auxiliary(word: &str) -> bool {
    matches!(
        word,
        "be" | "been" | "being" | "is" | "are" | "was" | "were" | "am" | "has" | "have" | "had"
            | "'s" | "’s" | "'ve" | "’ve" | "'re" | "’re"
    )
}

/// `bigg` → `big`, `hott` → `hot`
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let (last, before) = (chars.next()?, chars.next()?);
    if last == before && !"aeiouls".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(sentence: &[&str]) -> Vec<PosTag> {
        let words: Vec<String> = sentence.iter().map(|s| s.to_string()).collect();
        LexiconTagger::new().tag(&words).unwrap()
    }

    #[test]
    fn test_cat_sat_on_mat() {
        use PosTag::*;
        assert_eq!(
            tag(&["The", "cat", "sat", "on", "the", "mat", "."]),
            vec![Determiner, Noun, VerbPast, Preposition, Determiner, Noun, SentenceEnd]
        );
    }

    #[test]
    fn test_one_tag_per_word() {
        let words = ["Skin-crawling", "videos", "of", "writhing", "rodent", "masses", "."];
        assert_eq!(tag(&words).len(), words.len());
        assert!(tag(&[]).is_empty());
    }

    #[test]
    fn test_plural_and_proper_nouns() {
        let tags = tag(&["Farmers", "in", "Australia", "fight", "plagues", "."]);
        assert_eq!(tags[2], PosTag::ProperNoun);
        assert_eq!(tags[4], PosTag::NounPlural);
        assert_eq!(tag(&["the", "glass"])[1], PosTag::Noun);
        assert_eq!(tag(&["a", "virus"])[1], PosTag::Noun);
    }

    #[test]
    fn test_acronyms_are_proper_nouns() {
        let tags = tag(&["COVID-19", "spread"]);
        assert_eq!(tags[0], PosTag::ProperNoun);
    }

    #[test]
    fn test_adjective_suffixes() {
        let tags = tag(&["a", "dangerous", "and", "industrial", "trap"]);
        assert_eq!(tags[1], PosTag::Adjective);
        assert_eq!(tags[3], PosTag::Adjective);
        assert_eq!(tags[4], PosTag::Noun);
    }

    #[test]
    fn test_graded_adjectives() {
        let tags = tag(&["a", "larger", "and", "hardest", "bigger", "test"]);
        assert_eq!(tags[1], PosTag::AdjectiveComparative);
        assert_eq!(tags[3], PosTag::AdjectiveSuperlative);
        assert_eq!(tags[4], PosTag::AdjectiveComparative);
    }

    #[test]
    fn test_verb_shapes() {
        let tags = tag(&["farmers", "quickly", "started", "trapping"]);
        assert_eq!(tags[1], PosTag::Adverb);
        assert_eq!(tags[2], PosTag::VerbPast);
        assert_eq!(tags[3], PosTag::VerbGerund);
    }

    #[test]
    fn test_contextual_repairs() {
        // base verb after a modal or plural subject
        let tags = tag(&["Mice", "continue", "to", "chew"]);
        assert_eq!(tags[1], PosTag::VerbPresent);
        assert_eq!(tags[3], PosTag::Verb);

        // participle after an auxiliary
        let tags = tag(&["cases", "were", "observed"]);
        assert_eq!(tags[2], PosTag::VerbPastParticiple);

        // past-tense shape after a determiner reads as an adjective
        let tags = tag(&["the", "vaccinated", "group"]);
        assert_eq!(tags[1], PosTag::Adjective);

        // third person after a pronoun
        let tags = tag(&["it", "kills"]);
        assert_eq!(tags[1], PosTag::VerbThirdPerson);
    }

    #[test]
    fn test_irregular_past_after_determiner_stays_verb() {
        for sentence in [["All", "went", "home", "."], ["Some", "found", "gold", "."]] {
            let tags = tag(&sentence);
            assert_eq!(tags[0], PosTag::Determiner);
            assert_eq!(tags[1], PosTag::VerbPast, "{sentence:?}");
        }
        let tags = tag(&["all", "were", "confined"]);
        assert_eq!(tags[1], PosTag::VerbPast);
    }

    #[test]
    fn test_punctuation_and_numbers() {
        use PosTag::*;
        assert_eq!(
            tag(&["\"", "90.4", "%", ",", "29,960", "\"", "("]),
            vec![OpenQuote, CardinalNumber, Noun, Comma, CardinalNumber, CloseQuote, OpenParen]
        );
    }

    #[test]
    fn test_clitics() {
        let tags = tag(&["Tink", "'s", "efforts"]);
        assert_eq!(tags[1], PosTag::Possessive);
        let tags = tag(&["do", "n't"]);
        assert_eq!(tags[1], PosTag::Adverb);
    }

    #[test]
    fn test_custom_entries() {
        let tagger = LexiconTagger::new().with_entries(&[("jabs", PosTag::Noun)]);
        let tags = tagger.tag(&["the".to_string(), "jabs".to_string()]).unwrap();
        assert_eq!(tags[1], PosTag::Noun);
    }

    #[test]
    fn test_check_tag_count() {
        let words = vec!["a".to_string(), "b".to_string()];
        assert!(check_tag_count(&words, &[PosTag::Noun, PosTag::Noun]).is_ok());
        assert!(matches!(
            check_tag_count(&words, &[PosTag::Noun]),
            Err(Error::Tagging(_))
        ));
    }
}
