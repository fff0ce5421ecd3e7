//! Difficult-word extraction
//!
//! Text → sentences → (word, tag) pairs → filtered words → sorted output.
//!
//! For every tagged word, lowercased and lemmatized, the word is dropped if
//! it is shorter than `min_word_chars`, a stop word, a common word, already
//! emitted, or tagged with anything outside `accepted_tags` (by default
//! exactly `NN` and `JJ`, so plurals, proper nouns and graded adjectives are
//! out). Survivors are sorted in descending string order. No difficulty
//! score is involved in the ranking.

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::{check_tag_count, LexiconTagger, PosTagger};
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    Decision, ExtractionObserver, FilterStats, NoopObserver, ProgressObserver,
};
use crate::types::{ExtractorConfig, PosTag, Token};
use crate::vocab::CommonWords;

/// Extracts difficult vocabulary from English text.
///
/// Holds every resource it needs; build it once and reuse it. Extraction
/// does not mutate the extractor, so the output depends only on the text and
/// the resources supplied at construction.
#[derive(Debug, Clone)]
pub struct DifficultWordExtractor<T = LexiconTagger> {
    config: ExtractorConfig,
    stopwords: StopwordFilter,
    common_words: CommonWords,
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
    tagger: T,
}

impl DifficultWordExtractor<LexiconTagger> {
    /// Create an extractor with the built-in tokenizer, tagger and lemmatizer.
    pub fn new(config: ExtractorConfig, stopwords: StopwordFilter, common_words: CommonWords) -> Self {
        Self {
            config,
            stopwords,
            common_words,
            tokenizer: Tokenizer::new(),
            lemmatizer: Lemmatizer::new(),
            tagger: LexiconTagger::new(),
        }
    }

    /// Validate `config`, load its stop-word language (plus extras) and read
    /// the common-word file it points to.
    pub fn from_config(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_stopwords(&config.extra_stopwords);
        let common_words = CommonWords::load(&config.common_words_path)?;
        Ok(Self::new(config, stopwords, common_words))
    }
}

impl<T: PosTagger> DifficultWordExtractor<T> {
    /// Replace the tagger.
    pub fn with_tagger<U: PosTagger>(self, tagger: U) -> DifficultWordExtractor<U> {
        DifficultWordExtractor {
            config: self.config,
            stopwords: self.stopwords,
            common_words: self.common_words,
            tokenizer: self.tokenizer,
            lemmatizer: self.lemmatizer,
            tagger,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract difficult words, sorted in descending order.
    ///
    /// Draws a progress bar when `show_progress` is set.
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        if self.config.show_progress {
            self.extract_with_observer(text, &mut ProgressObserver::new())
        } else {
            self.extract_with_observer(text, &mut NoopObserver)
        }
    }

    /// Extract difficult words, notifying `observer` along the way.
    pub fn extract_with_observer(
        &self,
        text: &str,
        observer: &mut dyn ExtractionObserver,
    ) -> Result<Vec<String>> {
        let sentences = self.tokenizer.split_sentences(text);
        observer.on_start(sentences.len());

        let mut stats = FilterStats::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut kept: Vec<String> = Vec::new();

        for (sentence_idx, sentence) in sentences.iter().enumerate() {
            for token in self.tag_sentence(sentence, sentence_idx)? {
                let word = self.lemmatizer.lemmatize(&token.text.to_lowercase());
                let decision = self.decide(&word, token.pos, &seen);

                observer.on_token(&word, token.pos, decision);
                stats.on_token(&word, token.pos, decision);

                if decision == Decision::Kept {
                    seen.insert(word.clone());
                    kept.push(word);
                }
            }
            observer.on_sentence(sentence_idx, kept.len());
        }

        kept.sort_unstable_by(|a, b| b.cmp(a));

        observer.on_finish(kept.len());
        tracing::debug!(
            sentences = sentences.len(),
            tokens = stats.tokens,
            kept = stats.kept,
            too_short = stats.too_short,
            stopwords = stats.stopwords,
            common = stats.common,
            duplicates = stats.duplicates,
            rejected_tags = stats.rejected_tags,
            "extraction finished"
        );

        Ok(kept)
    }

    /// Tokenize and tag one sentence.
    pub fn tag_sentence(&self, sentence: &str, sentence_idx: usize) -> Result<Vec<Token>> {
        let words = self.tokenizer.split_words(sentence);
        let tags = self.tagger.tag(&words)?;
        check_tag_count(&words, &tags)?;

        Ok(words
            .into_iter()
            .zip(tags)
            .enumerate()
            .map(|(token_idx, (text, pos))| Token::new(text, pos, sentence_idx, token_idx))
            .collect())
    }

    /// First rule that rejects `word`, or [`Decision::Kept`].
    fn decide(&self, word: &str, tag: PosTag, seen: &FxHashSet<String>) -> Decision {
        if word.chars().count() < self.config.min_word_chars {
            Decision::TooShort
        } else if self.stopwords.is_stopword(word) {
            Decision::Stopword
        } else if self.common_words.contains(word) {
            Decision::Common
        } else if seen.contains(word) {
            Decision::Duplicate
        } else if !self.config.accepts(tag) {
            Decision::RejectedTag
        } else {
            Decision::Kept
        }
    }
}
