//! Common-word set
//!
//! Built once from a newline-delimited frequency list (stop words removed,
//! entries lemmatized as nouns), persisted as a flat JSON array of strings,
//! and loaded back by every extraction run.

use std::path::Path;

use reqwest::blocking::Client;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;

/// Lowercase, lemmatized words considered "not difficult"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonWords {
    words: FxHashSet<String>,
}

impl CommonWords {
    /// Wrap an existing word collection. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Build the set from newline-delimited text.
    ///
    /// Each line is trimmed; blank lines and stop words are skipped, the rest
    /// are lemmatized and deduplicated.
    pub fn build_from_list(text: &str, stopwords: &StopwordFilter, lemmatizer: &Lemmatizer) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .filter(|word| !stopwords.is_stopword(word))
            .map(|word| lemmatizer.lemmatize(&word))
            .collect();
        Self { words }
    }

    /// Fetch the word list at `url` and build the set from it.
    ///
    /// Transport failures and non-success statuses are errors.
    pub fn download(
        client: &Client,
        url: &str,
        stopwords: &StopwordFilter,
        lemmatizer: &Lemmatizer,
    ) -> Result<Self> {
        tracing::info!(url, "downloading common-word list");
        let text = fetch_word_list(client, url)?;
        let common = Self::build_from_list(&text, stopwords, lemmatizer);
        tracing::info!(
            lines = text.lines().count(),
            words = common.len(),
            "built common-word set"
        );
        Ok(common)
    }

    /// Read a set written by [`CommonWords::save`].
    ///
    /// A missing or malformed file is an error: the set must be built
    /// before anything can be extracted.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words: Vec<String> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), words = words.len(), "loaded common words");
        Ok(Self::from_words(words))
    }

    /// Write the set as a JSON array, replacing any existing file.
    ///
    /// Entries are sorted so that rebuilding from an unchanged list
    /// produces a byte-identical file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(&self.sorted())?;
        std::fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), words = self.len(), "saved common words");
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in ascending order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

fn fetch_word_list(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hardwords-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_build_filters_stopwords_and_collapses_lemmas() {
        let stopwords = StopwordFilter::from_list(&["the"]);
        let common =
            CommonWords::build_from_list("the\nbanana\nbananas\n", &stopwords, &Lemmatizer::new());

        assert_eq!(common.sorted(), vec!["banana"]);
        assert!(!common.contains("the"));
    }

    #[test]
    fn test_build_trims_and_skips_blank_lines() {
        let common = CommonWords::build_from_list(
            "  house \r\n\n\nMice\n   \n",
            &StopwordFilter::empty(),
            &Lemmatizer::new(),
        );
        assert_eq!(common.sorted(), vec!["house", "mouse"]);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip.json");
        let common = CommonWords::from_words(["farm", "drought", "crop"]);

        common.save(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"["crop","drought","farm"]"#);

        let loaded = CommonWords::load(&path).unwrap();
        assert_eq!(loaded, common);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_overwrites() {
        let path = temp_path("overwrite.json");
        CommonWords::from_words(["one", "two"]).save(&path).unwrap();
        CommonWords::from_words(["three"]).save(&path).unwrap();

        let loaded = CommonWords::load(&path).unwrap();
        assert_eq!(loaded.sorted(), vec!["three"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = CommonWords::load(&temp_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let path = temp_path("malformed.json");
        std::fs::write(&path, r#"{"words": ["a"]}"#).unwrap();

        let err = CommonWords::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_words_lowercases() {
        let common = CommonWords::from_words(vec!["Vaccine".to_string()]);
        assert!(common.contains("vaccine"));
        assert!(!common.contains("Vaccine"));
        assert_eq!(common.len(), 1);
    }
}
