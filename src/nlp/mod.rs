//! Natural Language Processing components
//!
//! Sentence and word tokenization, part-of-speech tagging, lemmatization
//! and stop-word filtering for English text.

pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
