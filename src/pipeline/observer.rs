//! Extraction observer: hooks for progress reporting and debugging.
//!
//! Observers are notified as the extractor walks sentences and tokens. They
//! never influence which words are kept or their order.

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::PosTag;

/// What the extractor did with one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Appended to the output
    Kept,
    /// Fewer chars than the configured minimum
    TooShort,
    /// A stop word
    Stopword,
    /// In the common-word set
    Common,
    /// Already in the output
    Duplicate,
    /// Tag not in the accepted set
    RejectedTag,
}

/// Receives notifications from [`super::DifficultWordExtractor`].
///
/// All methods default to no-ops.
pub trait ExtractionObserver {
    /// Called once, after sentence splitting.
    fn on_start(&mut self, _total_sentences: usize) {}

    /// Called for every token with its normalized form.
    fn on_token(&mut self, _word: &str, _tag: PosTag, _decision: Decision) {}

    /// Called after each sentence with the number of words kept so far.
    fn on_sentence(&mut self, _sentence_idx: usize, _kept_so_far: usize) {}

    /// Called once with the final number of words.
    fn on_finish(&mut self, _kept: usize) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}

/// Draws a progress bar over the sentence loop on stderr.
#[derive(Debug, Default)]
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExtractionObserver for ProgressObserver {
    fn on_start(&mut self, total_sentences: usize) {
        let bar = ProgressBar::new(total_sentences as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} sentences {msg}")
        {
            bar.set_style(style);
        }
        self.bar = Some(bar);
    }

    fn on_sentence(&mut self, _sentence_idx: usize, kept_so_far: usize) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{kept_so_far} words"));
            bar.inc(1);
        }
    }

    fn on_finish(&mut self, _kept: usize) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Counts decisions by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub sentences: usize,
    pub tokens: usize,
    pub kept: usize,
    pub too_short: usize,
    pub stopwords: usize,
    pub common: usize,
    pub duplicates: usize,
    pub rejected_tags: usize,
}

impl ExtractionObserver for FilterStats {
    fn on_start(&mut self, total_sentences: usize) {
        self.sentences = total_sentences;
    }

    fn on_token(&mut self, _word: &str, _tag: PosTag, decision: Decision) {
        self.tokens += 1;
        let counter = match decision {
            Decision::Kept => &mut self.kept,
            Decision::TooShort => &mut self.too_short,
            Decision::Stopword => &mut self.stopwords,
            Decision::Common => &mut self.common,
            Decision::Duplicate => &mut self.duplicates,
            Decision::RejectedTag => &mut self.rejected_tags,
        };
        *counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_stats_counts() {
        let mut stats = FilterStats::default();
        stats.on_start(2);
        stats.on_token("cat", PosTag::Noun, Decision::Kept);
        stats.on_token("the", PosTag::Determiner, Decision::Stopword);
        stats.on_token("cat", PosTag::Noun, Decision::Duplicate);
        stats.on_token("sat", PosTag::VerbPast, Decision::RejectedTag);

        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.stopwords, 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.rejected_tags, 1);
        assert_eq!(stats.common, 0);
    }

    #[test]
    fn test_progress_observer_lifecycle() {
        let mut progress = ProgressObserver::new();
        progress.on_start(3);
        for i in 0..3 {
            progress.on_sentence(i, i);
        }
        progress.on_finish(2);
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_progress_observer_without_start() {
        let mut progress = ProgressObserver::new();
        progress.on_sentence(0, 0);
        progress.on_finish(0);
    }
}
