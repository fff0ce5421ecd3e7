//! Core types shared across the extraction pipeline.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default source for the common-word list: the 10k most frequent words of
/// US English, swear words removed.
pub const DEFAULT_WORD_LIST_URL: &str = "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-usa-no-swears.txt";

/// Default location of the persisted common-word set.
pub const DEFAULT_COMMON_WORDS_PATH: &str = "common_words.json";

/// Penn Treebank part-of-speech tags.
///
/// Serialized as the Penn label (`"NN"`, `"PRP$"`, `"."`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "CC")]
    CoordConj,
    #[serde(rename = "CD")]
    CardinalNumber,
    #[serde(rename = "DT")]
    Determiner,
    #[serde(rename = "EX")]
    Existential,
    #[serde(rename = "FW")]
    ForeignWord,
    #[serde(rename = "IN")]
    Preposition,
    #[serde(rename = "JJ")]
    Adjective,
    #[serde(rename = "JJR")]
    AdjectiveComparative,
    #[serde(rename = "JJS")]
    AdjectiveSuperlative,
    #[serde(rename = "LS")]
    ListMarker,
    #[serde(rename = "MD")]
    Modal,
    #[serde(rename = "NN")]
    Noun,
    #[serde(rename = "NNS")]
    NounPlural,
    #[serde(rename = "NNP")]
    ProperNoun,
    #[serde(rename = "NNPS")]
    ProperNounPlural,
    #[serde(rename = "PDT")]
    Predeterminer,
    #[serde(rename = "POS")]
    Possessive,
    #[serde(rename = "PRP")]
    Pronoun,
    #[serde(rename = "PRP$")]
    PossessivePronoun,
    #[serde(rename = "RB")]
    Adverb,
    #[serde(rename = "RBR")]
    AdverbComparative,
    #[serde(rename = "RBS")]
    AdverbSuperlative,
    #[serde(rename = "RP")]
    Particle,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = "TO")]
    To,
    #[serde(rename = "UH")]
    Interjection,
    #[serde(rename = "VB")]
    Verb,
    #[serde(rename = "VBD")]
    VerbPast,
    #[serde(rename = "VBG")]
    VerbGerund,
    #[serde(rename = "VBN")]
    VerbPastParticiple,
    #[serde(rename = "VBP")]
    VerbPresent,
    #[serde(rename = "VBZ")]
    VerbThirdPerson,
    #[serde(rename = "WDT")]
    WhDeterminer,
    #[serde(rename = "WP")]
    WhPronoun,
    #[serde(rename = "WP$")]
    WhPossessive,
    #[serde(rename = "WRB")]
    WhAdverb,
    #[serde(rename = ".")]
    SentenceEnd,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ":")]
    Colon,
    #[serde(rename = "(")]
    OpenParen,
    #[serde(rename = ")")]
    CloseParen,
    #[serde(rename = "``")]
    OpenQuote,
    #[serde(rename = "''")]
    CloseQuote,
    #[serde(rename = "$")]
    Dollar,
    #[serde(rename = "#")]
    Hash,
}

const ALL_TAGS: &[PosTag] = &[
    PosTag::CoordConj,
    PosTag::CardinalNumber,
    PosTag::Determiner,
    PosTag::Existential,
    PosTag::ForeignWord,
    PosTag::Preposition,
    PosTag::Adjective,
    PosTag::AdjectiveComparative,
    PosTag::AdjectiveSuperlative,
    PosTag::ListMarker,
    PosTag::Modal,
    PosTag::Noun,
    PosTag::NounPlural,
    PosTag::ProperNoun,
    PosTag::ProperNounPlural,
    PosTag::Predeterminer,
    PosTag::Possessive,
    PosTag::Pronoun,
    PosTag::PossessivePronoun,
    PosTag::Adverb,
    PosTag::AdverbComparative,
    PosTag::AdverbSuperlative,
    PosTag::Particle,
    PosTag::Symbol,
    PosTag::To,
    PosTag::Interjection,
    PosTag::Verb,
    PosTag::VerbPast,
    PosTag::VerbGerund,
    PosTag::VerbPastParticiple,
    PosTag::VerbPresent,
    PosTag::VerbThirdPerson,
    PosTag::WhDeterminer,
    PosTag::WhPronoun,
    PosTag::WhPossessive,
    PosTag::WhAdverb,
    PosTag::SentenceEnd,
    PosTag::Comma,
    PosTag::Colon,
    PosTag::OpenParen,
    PosTag::CloseParen,
    PosTag::OpenQuote,
    PosTag::CloseQuote,
    PosTag::Dollar,
    PosTag::Hash,
];

impl PosTag {
    /// The Penn Treebank label for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoordConj => "CC",
            Self::CardinalNumber => "CD",
            Self::Determiner => "DT",
            Self::Existential => "EX",
            Self::ForeignWord => "FW",
            Self::Preposition => "IN",
            Self::Adjective => "JJ",
            Self::AdjectiveComparative => "JJR",
            Self::AdjectiveSuperlative => "JJS",
            Self::ListMarker => "LS",
            Self::Modal => "MD",
            Self::Noun => "NN",
            Self::NounPlural => "NNS",
            Self::ProperNoun => "NNP",
            Self::ProperNounPlural => "NNPS",
            Self::Predeterminer => "PDT",
            Self::Possessive => "POS",
            Self::Pronoun => "PRP",
            Self::PossessivePronoun => "PRP$",
            Self::Adverb => "RB",
            Self::AdverbComparative => "RBR",
            Self::AdverbSuperlative => "RBS",
            Self::Particle => "RP",
            Self::Symbol => "SYM",
            Self::To => "TO",
            Self::Interjection => "UH",
            Self::Verb => "VB",
            Self::VerbPast => "VBD",
            Self::VerbGerund => "VBG",
            Self::VerbPastParticiple => "VBN",
            Self::VerbPresent => "VBP",
            Self::VerbThirdPerson => "VBZ",
            Self::WhDeterminer => "WDT",
            Self::WhPronoun => "WP",
            Self::WhPossessive => "WP$",
            Self::WhAdverb => "WRB",
            Self::SentenceEnd => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenQuote => "``",
            Self::CloseQuote => "''",
            Self::Dollar => "$",
            Self::Hash => "#",
        }
    }

    /// Any of the four noun tags.
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            Self::Noun | Self::NounPlural | Self::ProperNoun | Self::ProperNounPlural
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        ALL_TAGS
            .iter()
            .copied()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| Error::Config(format!("unknown POS tag '{value}'")))
    }
}

/// A tagged word within a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as produced by the word tokenizer
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Sentence index (0-based)
    pub sentence_idx: usize,
    /// Token index within the sentence (0-based)
    pub token_idx: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag, sentence_idx: usize, token_idx: usize) -> Self {
        Self {
            text: text.into(),
            pos,
            sentence_idx,
            token_idx,
        }
    }
}

/// Extraction settings.
///
/// # JSON shape
///
/// ```json
/// {
///   "language": "en",
///   "accepted_tags": ["NN", "JJ"],
///   "min_word_chars": 2,
///   "common_words_path": "common_words.json",
///   "extra_stopwords": ["novavax"],
///   "show_progress": true
/// }
/// ```
///
/// Every field is optional; omitted fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Stop-word language code
    pub language: String,
    /// Tags a word must carry, compared by strict equality
    pub accepted_tags: Vec<PosTag>,
    /// Words shorter than this many chars (after lemmatization) are dropped
    pub min_word_chars: usize,
    /// Location of the persisted common-word set
    pub common_words_path: PathBuf,
    /// Newline-delimited word list used to build the common-word set
    pub word_list_url: String,
    /// Stop words added on top of the language list
    pub extra_stopwords: Vec<String>,
    /// Draw a progress bar over the sentence loop
    pub show_progress: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            accepted_tags: vec![PosTag::Noun, PosTag::Adjective],
            min_word_chars: 2,
            common_words_path: PathBuf::from(DEFAULT_COMMON_WORDS_PATH),
            word_list_url: DEFAULT_WORD_LIST_URL.to_string(),
            extra_stopwords: Vec::new(),
            show_progress: false,
        }
    }
}

impl ExtractorConfig {
    /// Read a JSON config file. The result is validated before it is returned.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings under which no word could ever be emitted.
    pub fn validate(&self) -> Result<()> {
        if self.accepted_tags.is_empty() {
            return Err(Error::Config("accepted_tags must not be empty".into()));
        }
        if self.min_word_chars == 0 {
            return Err(Error::Config("min_word_chars must be at least 1".into()));
        }
        Ok(())
    }

    /// Strict-equality tag check.
    pub fn accepts(&self, tag: PosTag) -> bool {
        self.accepted_tags.contains(&tag)
    }
}
