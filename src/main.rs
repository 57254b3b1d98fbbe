//! Word Game Suggester - CLI
//!
//! Suggests likely words from a letter pool, or builds the letter model from a
//! word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordgame_suggester::{
    commands::{PrepareConfig, SuggestConfig, run_prepare, suggest_words},
    corpus::{DEFAULT_MAX_ORDER, DEFAULT_MIN_LENGTH},
    model::store::load_model,
    output::{print_prepare_result, print_suggestions},
    pipeline::{EXCLUDE_NOTHING, MATCH_ALL, Suggester, TierVisibility},
};

#[derive(Parser)]
#[command(
    name = "wordgame_suggester",
    about = "Suggests high-probability words for a letter pool using a Markov chain letter model",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding transitions.bin and wordlist.bin
    #[arg(short = 'd', long, global = true, default_value = "data")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest words that can be built from the given letters
    Suggest {
        /// All letters to be used
        #[arg(short, long)]
        letters: String,

        /// Regular expression every suggestion must match entirely
        #[arg(short, long, default_value = MATCH_ALL)]
        pattern: String,

        /// Regular expression for suggestions to leave out
        #[arg(short, long, default_value = EXCLUDE_NOTHING)]
        filter: String,

        /// Give a bonus point to words in the dictionary
        #[arg(short, long)]
        bonus_point: bool,

        /// Hide low-probability (red) words
        #[arg(long, visible_alias = "skip-red")]
        skip_low: bool,

        /// Hide medium-probability (yellow) words
        #[arg(long, visible_alias = "skip-yellow")]
        skip_medium: bool,
    },

    /// Build the letter model from a plain-text word list
    Prepare {
        /// Word list, one or more words per line
        #[arg(short, long)]
        wordlist: PathBuf,

        /// Shortest word kept for training
        #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,

        /// Longest context used for transitions
        #[arg(long, default_value_t = DEFAULT_MAX_ORDER)]
        max_order: usize,

        /// Train on a random subset of this many words
        #[arg(short, long)]
        samples: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            letters,
            pattern,
            filter,
            bonus_point,
            skip_low,
            skip_medium,
        } => {
            let config = SuggestConfig {
                letters,
                pattern,
                filter,
                bonus_point,
            };
            let visibility = TierVisibility {
                skip_low,
                skip_medium,
            };
            run_suggest_command(&cli.data_dir, &config, visibility)
        }
        Commands::Prepare {
            wordlist,
            min_length,
            max_order,
            samples,
            seed,
        } => {
            let mut config = PrepareConfig::new(wordlist, cli.data_dir);
            config.min_length = min_length;
            config.max_order = max_order;
            config.samples = samples;
            config.seed = seed;
            run_prepare_command(&config)
        }
    }
}

fn run_suggest_command(
    data_dir: &Path,
    config: &SuggestConfig,
    visibility: TierVisibility,
) -> Result<()> {
    let model = load_model(data_dir).with_context(|| {
        format!(
            "failed to load model from {} (run `prepare` first)",
            data_dir.display()
        )
    })?;
    let suggester = Suggester::new(&model);

    let result = suggest_words(config, &suggester)?;
    print_suggestions(&result, visibility);
    Ok(())
}

fn run_prepare_command(config: &PrepareConfig) -> Result<()> {
    println!(
        "Preparing model from {} (max order {})...",
        config.wordlist.display(),
        config.max_order
    );

    let result = run_prepare(config)
        .with_context(|| format!("failed to prepare model from {}", config.wordlist.display()))?;
    print_prepare_result(&result);
    Ok(())
}
