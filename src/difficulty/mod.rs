//! Word difficulty scoring
//!
//! Remote services that rate how hard a single word is. None of this is on
//! the extraction path: [`crate::DifficultWordExtractor`] ranks words
//! lexicographically and never touches the network. The scorer is exposed
//! for callers that want to annotate extracted words themselves.

pub mod dictionary;
pub mod twinword;

use crate::error::Result;

pub use dictionary::DictionaryClient;
pub use twinword::TwinwordScorer;

/// Browser user agent sent to the scoring and dictionary sites
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0";

/// Outcome of scoring one word
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Difficulty {
    /// The service rated the word
    Scored(f64),
    /// The service does not know the word
    NotFound,
    /// The service answered with a failure status
    Unavailable,
}

impl Difficulty {
    /// Numeric difficulty: unknown words count as `0.0`; `None` means the
    /// service could not be asked.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Scored(value) => Some(*value),
            Self::NotFound => Some(0.0),
            Self::Unavailable => None,
        }
    }
}

/// Rates the difficulty of a single word.
pub trait DifficultyScorer {
    fn score(&self, word: &str) -> Result<Difficulty>;
}

/// Score each word in turn, stopping at the first transport error.
pub fn score_words<S, I>(scorer: &S, words: I) -> Result<Vec<(String, Difficulty)>>
where
    S: DifficultyScorer + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scored = Vec::new();
    for word in words {
        let word = word.as_ref();
        let difficulty = scorer.score(word)?;
        if difficulty == Difficulty::Unavailable {
            tracing::warn!(word, "difficulty service unavailable");
        }
        scored.push((word.to_string(), difficulty));
    }
    Ok(scored)
}
