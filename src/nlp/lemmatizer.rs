//! Dictionary-free lemmatization
//!
//! Follows the shape of WordNet's `morphy`: an exception table of irregular
//! forms per word class, then suffix detachment rules. Without a dictionary
//! to validate candidates, the rules carry guards for the common false
//! positives (`glass`, `virus`, `basis`, `movies`, `houses`, ...).
//!
//! [`Lemmatizer::lemmatize`] treats every word as a noun, which is what both
//! the extractor and the common-word builder rely on: "bananas" and "banana"
//! collapse, "running" stays "running".

use rustc_hash::{FxHashMap, FxHashSet};

/// Word class used to pick detachment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
}

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("mice", "mouse"),
    ("lice", "louse"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("media", "medium"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("stimuli", "stimulus"),
    ("alumni", "alumnus"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
    ("calves", "calf"),
    ("selves", "self"),
    ("hooves", "hoof"),
    ("scarves", "scarf"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"),
    ("are", "be"),
    ("am", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("sat", "sit"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("sought", "seek"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("caught", "catch"),
    ("won", "win"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("eating", "eat"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("swam", "swim"),
    ("taught", "teach"),
    ("fought", "fight"),
    ("bit", "bite"),
    ("bitten", "bite"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("shook", "shake"),
    ("struck", "strike"),
    ("woke", "wake"),
    ("added", "add"),
    ("adding", "add"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("farther", "far"),
    ("farthest", "far"),
    ("further", "far"),
    ("furthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

/// Nouns that look plural or inflected but are their own lemma.
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "lens", "chaos", "bias", "gas", "atlas", "canvas",
    "alias", "iris", "physics", "mathematics", "economics", "politics", "ethics", "always",
    "perhaps", "sometimes", "whereas", "people", "police", "cattle", "sheep", "deer", "fish",
    "aircraft", "covid",
];

/// `-ies` plurals of `-ie` nouns (not `-y` nouns)
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "zombie", "calorie", "prairie", "rookie", "genie", "hippie", "sortie",
    "goalie", "selfie", "brownie", "pixie", "auntie", "budgie", "smoothie", "lie", "tie", "pie",
    "die",
];

/// `-us` singulars whose plural takes `-es`
const US_NOUNS: &[&str] = &[
    "virus", "bonus", "campus", "status", "census", "fetus", "focus", "bus", "circus", "chorus",
    "genius", "apparatus", "consensus", "prospectus", "sinus", "surplus", "octopus", "walrus",
    "corpus", "syllabus", "impetus", "nexus", "plus", "minus", "thesaurus", "cactus",
];

/// `-men` words that are not plurals of `-man`
const NON_MAN_MEN: &[&str] = &[
    "specimen", "omen", "abdomen", "semen", "regimen", "stamen", "acumen", "hymen", "amen",
    "dolmen", "lumen", "ramen", "yemen",
];

/// `-oes` plurals that only drop the `s`
const OE_NOUNS: &[&str] = &["shoe", "toe", "canoe", "hoe", "foe", "oboe", "floe", "throe"];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: FxHashMap<WordClass, FxHashMap<String, String>>,
    invariant: FxHashSet<String>,
    ie_nouns: FxHashSet<String>,
    us_nouns: FxHashSet<String>,
    non_man_men: FxHashSet<String>,
    oe_nouns: FxHashSet<String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        let mut exceptions = FxHashMap::default();
        for (class, table) in [
            (WordClass::Noun, NOUN_EXCEPTIONS),
            (WordClass::Verb, VERB_EXCEPTIONS),
            (WordClass::Adjective, ADJECTIVE_EXCEPTIONS),
        ] {
            exceptions.insert(class, to_map(table));
        }

        Self {
            exceptions,
            invariant: to_set(INVARIANT_NOUNS),
            ie_nouns: to_set(IE_NOUNS),
            us_nouns: to_set(US_NOUNS),
            non_man_men: to_set(NON_MAN_MEN),
            oe_nouns: to_set(OE_NOUNS),
        }
    }

    /// Add irregular forms for `class`, e.g. `("octopi", "octopus")`.
    pub fn with_exceptions(mut self, class: WordClass, pairs: &[(&str, &str)]) -> Self {
        let table = self.exceptions.entry(class).or_default();
        for (form, lemma) in pairs {
            table.insert(form.to_lowercase(), lemma.to_lowercase());
        }
        self
    }

    /// Lemmatize as a noun. Input is expected in lowercase.
    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmatize_as(word, WordClass::Noun)
    }

    /// Lemmatize using the rules for `class`. Input is expected in lowercase.
    pub fn lemmatize_as(&self, word: &str, class: WordClass) -> String {
        if let Some(lemma) = self.exceptions.get(&class).and_then(|t| t.get(word)) {
            return lemma.clone();
        }
        if !word.chars().all(|c| c.is_alphabetic() || c == '-') {
            return word.to_string();
        }

        let lemma = match class {
            WordClass::Noun => self.noun_lemma(word),
            WordClass::Verb => verb_lemma(word),
            WordClass::Adjective => adjective_lemma(word),
        };
        lemma.unwrap_or_else(|| word.to_string())
    }

    fn noun_lemma(&self, word: &str) -> Option<String> {
        if word.len() <= 3 || self.invariant.contains(word) {
            return None;
        }

        if let Some(stem) = word.strip_suffix("men") {
            if !self.non_man_men.contains(word) {
                return Some(format!("{stem}man"));
            }
            return None;
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if word.len() == 4 || self.ie_nouns.contains(&format!("{stem}ie")) {
                return Some(format!("{stem}ie"));
            }
            return Some(format!("{stem}y"));
        }

        if let Some(stem) = word.strip_suffix("es") {
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("zz")
                || stem.ends_with('x')
                || (stem.ends_with("ch") && !stem.ends_with("ach"))
            {
                return Some(stem.to_string());
            }
            if self.us_nouns.contains(stem) {
                return Some(stem.to_string());
            }
            if stem.ends_with('o') && stem.len() > 2 && !self.oe_nouns.contains(&format!("{stem}e")) {
                return Some(stem.to_string());
            }
        }

        if word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
            || word.ends_with("ous")
            || word.ends_with("'s")
        {
            return None;
        }

        word.strip_suffix('s').map(str::to_string)
    }
}

fn verb_lemma(word: &str) -> Option<String> {
    if word.len() <= 3 {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ing").filter(|s| s.len() >= 2) {
        return Some(restore_stem(stem));
    }
    if let Some(stem) = word.strip_suffix("ed").filter(|s| s.len() >= 2) {
        return Some(restore_stem(stem));
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with("sh")
            || stem.ends_with("ch")
            || stem.ends_with("zz")
            || stem.ends_with('x')
            || stem.ends_with('o')
        {
            return Some(stem.to_string());
        }
    }
    if word.ends_with("ss") {
        return None;
    }
    word.strip_suffix('s').map(str::to_string)
}

fn adjective_lemma(word: &str) -> Option<String> {
    if word.len() <= 4 {
        return None;
    }
    if let Some(stem) = word.strip_suffix("iest").or_else(|| word.strip_suffix("ier")) {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("est").or_else(|| word.strip_suffix("er")) {
        if stem.len() >= 2 {
            return Some(restore_stem(stem));
        }
    }
    None
}

/// Undo consonant doubling and restore a dropped silent `e`.
///
/// `runn` → `run`, `mak` → `make`, `simpl` → `simple`, `hard` → `hard`
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 3 && chars[n - 1] == chars[n - 2] && "bdgmnprt".contains(chars[n - 1]) {
        return chars[..n - 1].iter().collect();
    }

    const E_ENDINGS: &[&str] = &["bl", "pl", "iz", "uc", "iv", "dg", "rg", "rs", "ov", "ir", "ur"];
    if E_ENDINGS.iter().any(|e| stem.ends_with(e)) || is_short_cvc(&chars) {
        return format!("{stem}e");
    }

    stem.to_string()
}

/// Three-letter consonant-vowel-consonant stems (`mak`, `hop`, `nic`).
fn is_short_cvc(chars: &[char]) -> bool {
    let vowel = |c: char| "aeiou".contains(c);
    chars.len() == 3
        && !vowel(chars[0])
        && vowel(chars[1])
        && !vowel(chars[2])
        && !"wxy".contains(chars[2])
}

fn to_map(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
        .collect()
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(word: &str) -> String {
        Lemmatizer::new().lemmatize(word)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(noun("bananas"), "banana");
        assert_eq!(noun("banana"), "banana");
        assert_eq!(noun("farms"), "farm");
        assert_eq!(noun("houses"), "house");
        assert_eq!(noun("diseases"), "disease");
    }

    #[test]
    fn test_es_and_ies_plurals() {
        assert_eq!(noun("boxes"), "box");
        assert_eq!(noun("churches"), "church");
        assert_eq!(noun("headaches"), "headache");
        assert_eq!(noun("wishes"), "wish");
        assert_eq!(noun("classes"), "class");
        assert_eq!(noun("viruses"), "virus");
        assert_eq!(noun("potatoes"), "potato");
        assert_eq!(noun("shoes"), "shoe");
        assert_eq!(noun("stories"), "story");
        assert_eq!(noun("movies"), "movie");
        assert_eq!(noun("ties"), "tie");
    }

    #[test]
    fn test_irregular_nouns() {
        assert_eq!(noun("mice"), "mouse");
        assert_eq!(noun("women"), "woman");
        assert_eq!(noun("leaves"), "leaf");
        assert_eq!(noun("specimen"), "specimen");
        assert_eq!(noun("people"), "people");
    }

    #[test]
    fn test_words_left_alone() {
        for word in ["glass", "virus", "basis", "famous", "news", "gas", "is", "vaccine", "90.4"] {
            assert_eq!(noun(word), word, "{word} should be unchanged");
        }
    }

    #[test]
    fn test_noun_rules_do_not_touch_verb_forms() {
        assert_eq!(noun("running"), "running");
        assert_eq!(noun("vaccinated"), "vaccinated");
    }

    #[test]
    fn test_verbs() {
        let lem = Lemmatizer::new();
        assert_eq!(lem.lemmatize_as("running", WordClass::Verb), "run");
        assert_eq!(lem.lemmatize_as("making", WordClass::Verb), "make");
        assert_eq!(lem.lemmatize_as("tried", WordClass::Verb), "try");
        assert_eq!(lem.lemmatize_as("played", WordClass::Verb), "play");
        assert_eq!(lem.lemmatize_as("falling", WordClass::Verb), "fall");
        assert_eq!(lem.lemmatize_as("fixes", WordClass::Verb), "fix");
        assert_eq!(lem.lemmatize_as("kills", WordClass::Verb), "kill");
        assert_eq!(lem.lemmatize_as("ran", WordClass::Verb), "run");
        assert_eq!(lem.lemmatize_as("was", WordClass::Verb), "be");
    }

    #[test]
    fn test_adjectives() {
        let lem = Lemmatizer::new();
        assert_eq!(lem.lemmatize_as("bigger", WordClass::Adjective), "big");
        assert_eq!(lem.lemmatize_as("hardest", WordClass::Adjective), "hard");
        assert_eq!(lem.lemmatize_as("larger", WordClass::Adjective), "large");
        assert_eq!(lem.lemmatize_as("simpler", WordClass::Adjective), "simple");
        assert_eq!(lem.lemmatize_as("happier", WordClass::Adjective), "happy");
        assert_eq!(lem.lemmatize_as("better", WordClass::Adjective), "good");
    }

    #[test]
    fn test_custom_exceptions() {
        let lem = Lemmatizer::new().with_exceptions(WordClass::Noun, &[("Octopi", "octopus")]);
        assert_eq!(lem.lemmatize("octopi"), "octopus");
    }
}
