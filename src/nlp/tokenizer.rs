//! Sentence and word tokenization
//!
//! Boundaries come from Unicode text segmentation (UAX #29), which already
//! keeps decimals (`90.4`), grouped numbers (`29,960`) and "U.S. and" in one
//! piece. On top of that we:
//!
//! - treat blank lines as hard paragraph breaks and single newlines as spaces
//! - re-join sentences that were split after a title or an initial (`Dr.`, `J.`)
//! - produce Penn-Treebank-like word tokens: hyphenated compounds stay whole,
//!   abbreviations keep their final period, clitics (`'s`, `n't`) are split off

use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations after which a period never ends a sentence
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "col", "gen", "lt", "sgt", "capt",
    "cmdr", "adm", "gov", "sen", "rep", "rev", "hon", "pres", "fr", "vs", "vol", "fig",
    "approx", "dept", "inc", "ltd", "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Contractions split off the end of a word, Treebank style
const CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

/// English sentence and word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    abbreviations: FxHashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add abbreviations (case-insensitive, without the trailing period).
    pub fn with_abbreviations(mut self, words: &[&str]) -> Self {
        for word in words {
            self.abbreviations
                .insert(word.trim_end_matches('.').to_lowercase());
        }
        self
    }

    /// Split `text` into trimmed, non-empty sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();

        for paragraph in paragraphs(text) {
            let mut current = String::new();
            for piece in paragraph.split_sentence_bounds() {
                current.push_str(piece);
                if !self.ends_with_abbreviation(current.trim_end()) {
                    push_trimmed(&mut sentences, &current);
                    current.clear();
                }
            }
            push_trimmed(&mut sentences, &current);
        }

        sentences
    }

    /// Split one sentence into word and punctuation tokens.
    pub fn split_words(&self, sentence: &str) -> Vec<String> {
        let chunks: Vec<&str> = sentence.split_whitespace().collect();
        let mut words = Vec::new();

        for (chunk_idx, chunk) in chunks.iter().enumerate() {
            let is_last_chunk = chunk_idx + 1 == chunks.len();
            let pieces: Vec<&str> = chunk.split_word_bounds().collect();
            let mut merged: Vec<String> = Vec::with_capacity(pieces.len());
            let mut join_next = false;

            for (i, piece) in pieces.iter().enumerate() {
                let next = pieces.get(i + 1);

                if join_next {
                    if let Some(last) = merged.last_mut() {
                        last.push_str(piece);
                    }
                    join_next = false;
                    continue;
                }

                // Maryland-based, COVID-19, NVX-CoV2373
                if *piece == "-" {
                    let left_is_word = merged.last().is_some_and(|w| ends_alphanumeric(w));
                    let right_is_word = next.is_some_and(|w| starts_alphanumeric(w));
                    if left_is_word && right_is_word {
                        if let Some(last) = merged.last_mut() {
                            last.push('-');
                        }
                        join_next = true;
                        continue;
                    }
                }

                // U.S. / Dr. keep their period unless it closes the sentence
                if *piece == "." {
                    let closes_sentence = is_last_chunk && next.is_none();
                    if !closes_sentence {
                        if let Some(last) = merged.last_mut() {
                            if self.is_abbreviation(last) {
                                last.push('.');
                                continue;
                            }
                        }
                    }
                }

                merged.push(piece.to_string());
            }

            for word in merged {
                split_clitic(word, &mut words);
            }
        }

        words
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        let mut chars = word.chars();
        let single_letter = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.is_alphabetic()
        );
        let dotted = word.contains('.') && word.chars().any(char::is_alphabetic);
        single_letter || dotted || self.abbreviations.contains(&word.to_lowercase())
    }

    /// Does `text` end in an abbreviation that UAX #29 treats as a sentence end?
    fn ends_with_abbreviation(&self, text: &str) -> bool {
        let Some(stem) = text.strip_suffix('.') else {
            return false;
        };
        let last_word = stem
            .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"' || c == '“')
            .next()
            .unwrap_or("");
        if last_word.contains('.') {
            // "U.S." at the end of a sentence is followed by an uppercase
            // word; UAX #29 already refuses to split before lowercase.
            return false;
        }
        let mut chars = last_word.chars();
        let initial = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.is_uppercase()
        );
        initial || self.abbreviations.contains(&last_word.to_lowercase())
    }
}

/// Blank-line separated paragraphs with inner newlines folded to spaces.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn ends_alphanumeric(word: &str) -> bool {
    word.chars().last().is_some_and(char::is_alphanumeric)
}

fn starts_alphanumeric(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_alphanumeric)
}

/// Push `word`, splitting a trailing clitic into its own token.
fn split_clitic(word: String, out: &mut Vec<String>) {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let at = word.len() - clitic.len();
        let matches = word
            .get(at..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(clitic));
        if matches {
            out.push(word[..at].to_string());
            out.push(word[at..].to_string());
            return;
        }
    }
    out.push(word);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        Tokenizer::new().split_words(text)
    }

    #[test]
    fn test_simple_sentences() {
        let sentences = Tokenizer::new().split_sentences("The cat sat. The dog ran! Did it?");
        assert_eq!(sentences, vec!["The cat sat.", "The dog ran!", "Did it?"]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let text = "U.S. vaccine maker Novavax said so. Dr. Smith agreed.";
        let sentences = Tokenizer::new().split_sentences(text);
        assert_eq!(
            sentences,
            vec!["U.S. vaccine maker Novavax said so.", "Dr. Smith agreed."]
        );
    }

    #[test]
    fn test_decimal_does_not_split() {
        let sentences =
            Tokenizer::new().split_sentences("Efficacy was 90.4% overall. Trials continue.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("90.4%"));
    }

    #[test]
    fn test_paragraphs_and_wrapped_lines() {
        let text = "\nFarmers fight mice\nacross the state.\n\nThe plague grows.\n";
        let sentences = Tokenizer::new().split_sentences(text);
        assert_eq!(
            sentences,
            vec!["Farmers fight mice across the state.", "The plague grows."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(Tokenizer::new().split_sentences("").is_empty());
        assert!(Tokenizer::new().split_sentences("  \n\n ").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            words("The cat sat on the mat."),
            vec!["The", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_numbers_and_hyphens() {
        assert_eq!(
            words("The Maryland-based company tested 29,960 adults"),
            vec!["The", "Maryland-based", "company", "tested", "29,960", "adults"]
        );
        assert_eq!(words("an efficacy of 90.4%"), vec!["an", "efficacy", "of", "90.4", "%"]);
        assert_eq!(words("COVID-19 vaccine"), vec!["COVID-19", "vaccine"]);
    }

    #[test]
    fn test_abbreviation_keeps_period() {
        assert_eq!(
            words("in the U.S. and Mexico."),
            vec!["in", "the", "U.S.", "and", "Mexico", "."]
        );
    }

    #[test]
    fn test_clitics_split() {
        assert_eq!(words("Tink's efforts"), vec!["Tink", "'s", "efforts"]);
        assert_eq!(words("don't"), vec!["do", "n't"]);
        assert_eq!(words("world’s arsenal"), vec!["world", "’s", "arsenal"]);
    }

    #[test]
    fn test_quotes_are_separate_tokens() {
        assert_eq!(
            words("its ‘NVX-CoV2373’ vaccine"),
            vec!["its", "‘", "NVX-CoV2373", "’", "vaccine"]
        );
    }

    #[test]
    fn test_custom_abbreviation() {
        let text = "They met at Univ. Park today. Then it ended.";
        assert_eq!(Tokenizer::new().split_sentences(text).len(), 3);

        let tokenizer = Tokenizer::new().with_abbreviations(&["Univ."]);
        assert_eq!(
            tokenizer.split_sentences(text),
            vec!["They met at Univ. Park today.", "Then it ended."]
        );
    }
}
