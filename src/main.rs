use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::blocking::Client;

use hardwords::difficulty::{score_words, DictionaryClient, TwinwordScorer};
use hardwords::{CommonWords, DifficultWordExtractor, ExtractorConfig, Lemmatizer, StopwordFilter};

#[derive(Parser)]
#[command(name = "hardwords", version, about = "Extract difficult vocabulary from English text")]
struct Cli {
    /// JSON settings file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the word-frequency list and write the common-word set
    Build {
        /// Newline-delimited word list
        #[arg(long)]
        url: Option<String>,
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the difficult words of a text (FILE or stdin)
    Extract {
        input: Option<PathBuf>,
        /// Common-word set written by `build`
        #[arg(long)]
        common_words: Option<PathBuf>,
        /// Print a JSON array instead of one word per line
        #[arg(long)]
        json: bool,
        /// Show a progress bar on stderr
        #[arg(long)]
        progress: bool,
    },
    /// Ask the difficulty service to rate words
    Score {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Fetch a word's bilingual dictionary page and print the HTTP status
    Lookup { word: String },
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    match cli.command {
        Command::Build { url, out } => {
            let url = url.unwrap_or(config.word_list_url);
            let out = out.unwrap_or(config.common_words_path);

            let mut stopwords = StopwordFilter::new(&config.language);
            stopwords.add_stopwords(&config.extra_stopwords);
            let common = CommonWords::download(&Client::new(), &url, &stopwords, &Lemmatizer::new())
                .with_context(|| format!("building common words from {url}"))?;
            common
                .save(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            eprintln!("{} common words written to {}", common.len(), out.display());
        }
        Command::Extract {
            input,
            common_words,
            json,
            progress,
        } => {
            if let Some(path) = common_words {
                config.common_words_path = path;
            }
            config.show_progress |= progress;

            let text = read_input(input.as_ref())?;
            let extractor = DifficultWordExtractor::from_config(config)
                .context("loading common words (run `hardwords build` first)")?;
            let words = extractor.extract(&text)?;

            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in words {
                    println!("{word}");
                }
            }
        }
        Command::Score { words } => {
            let scorer = TwinwordScorer::new(Client::new());
            for (word, difficulty) in score_words(&scorer, &words)? {
                match difficulty.value() {
                    Some(value) => println!("{word}\t{value}"),
                    None => println!("{word}\tunavailable"),
                }
            }
        }
        Command::Lookup { word } => {
            let status = DictionaryClient::new(Client::new()).fetch(&word)?;
            println!("{status}");
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}
