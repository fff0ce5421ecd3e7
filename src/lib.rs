//! # hardwords
//!
//! Finds the vocabulary in a passage of English that a reader is likely not
//! to know.
//!
//! The text is split into sentences and words, every word is tagged with a
//! Penn Treebank part of speech and reduced to its lemma, and everything
//! that is a stop word, a common word, a repeat, a single character, or not
//! a singular noun or plain adjective is dropped. What remains is returned
//! in descending string order.
//!
//! ```rust,ignore
//! use hardwords::{CommonWords, DifficultWordExtractor, ExtractorConfig, StopwordFilter};
//!
//! let common = CommonWords::load("common_words.json".as_ref())?;
//! let extractor = DifficultWordExtractor::new(
//!     ExtractorConfig::default(),
//!     StopwordFilter::new("en"),
//!     common,
//! );
//! let words = extractor.extract("Farmer Col Tink uses a broom to skittle roving mice.")?;
//! ```
//!
//! The common-word set is built once from a word-frequency list with
//! [`CommonWords::download`] and persisted with [`CommonWords::save`].

pub mod difficulty;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod types;
pub mod vocab;

pub use difficulty::{Difficulty, DifficultyScorer};
pub use error::{Error, Result};
pub use nlp::lemmatizer::{Lemmatizer, WordClass};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tagger::{LexiconTagger, PosTagger};
pub use nlp::tokenizer::Tokenizer;
pub use pipeline::{DifficultWordExtractor, ExtractionObserver};
pub use types::{ExtractorConfig, PosTag, Token};
pub use vocab::CommonWords;
