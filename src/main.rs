//! Wordle Suggest - CLI
//!
//! Entropy-ranked Wordle suggestions with TUI and CLI modes.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use wordle_suggest::{
    commands::{
        SolveConfig, TurnArg, analyze_word, parse_turn, progress_bar, replay_turns,
        run_benchmark, run_simple, solve_word, suggest_next,
    },
    core::{Dictionary, Error, Word},
    output::{
        detail, print_analysis_result, print_benchmark_result, print_solve_result,
        print_suggest_report, status, warn,
    },
    solver::{
        RankerConfig, Session,
        entropy::{DEFAULT_SAMPLE_SIZE, DEFAULT_TOP},
    },
    wordlists::loader::{embedded_answers, embedded_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_suggest",
    about = "Suggests Wordle guesses ranked by expected information (sampled Shannon entropy)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of words scored per turn
    #[arg(short = 's', long, global = true, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Seed for reproducible sampling (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of suggestions shown per turn
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Also sample guesses that can no longer be the answer when the pool is large
    #[arg(short = 'e', long, global = true)]
    explore: bool,

    /// Reject guesses that are not in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Show extra detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Rank the next guess after the given turns
    Suggest {
        /// A played turn as WORD=PATTERN, e.g. crane=GY--- or crane=21000; repeatable
        #[arg(long = "turn", value_parser = parse_turn)]
        turns: Vec<TurnArg>,

        /// How many remaining candidates to list
        #[arg(long, default_value = "10")]
        show: usize,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Turns already played, as WORD=PATTERN; repeatable
        #[arg(long = "turn", value_parser = parse_turn)]
        turns: Vec<TurnArg>,
    },

    /// Play a game against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Play games against the first N answer words (or list words, with --wordlist)
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

impl Cli {
    fn ranker_config(&self) -> Result<RankerConfig> {
        ensure!(self.sample_size > 0, Error::InvalidSampleSize);

        Ok(RankerConfig::default()
            .with_sample_size(self.sample_size)
            .with_seed(self.seed)
            .with_top(self.top)
            .with_explore(self.explore))
    }
}

/// Load the dictionary named by `--wordlist`
fn load_dictionary(wordlist: &str, verbose: bool) -> Result<Dictionary> {
    let (dictionary, skipped) = match wordlist {
        "embedded" => (embedded_dictionary(), 0),
        path => load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))?,
    };

    if skipped > 0 {
        warn(&format!("skipped {skipped} invalid entries in '{wordlist}'"));
    }
    ensure!(
        !dictionary.is_empty(),
        "word list '{wordlist}' contains no valid words"
    );
    detail(
        verbose,
        &format!("{} words loaded from {wordlist}", dictionary.len()),
    );

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.ranker_config()?;
    let dictionary = load_dictionary(&cli.wordlist, cli.verbose)?;

    detail(
        cli.verbose,
        &format!(
            "sample size {}, top {}, explore {}, seed {}",
            config.sample_size,
            config.top,
            config.explore,
            config
                .seed
                .map_or_else(|| "random".to_string(), |seed| seed.to_string())
        ),
    );

    let session = Session::new(&dictionary, config).strict(cli.strict);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple_command(session),
        Commands::Suggest { turns, show } => run_suggest_command(session, &turns, show),
        Commands::Analyze { word, turns } => run_analyze_command(session, &word, &turns),
        Commands::Solve { word, max_guesses } => {
            run_solve_command(&dictionary, config, &word, max_guesses, cli.verbose)
        }
        Commands::Benchmark { count, max_guesses } => {
            run_benchmark_command(&dictionary, &cli.wordlist, config, count, max_guesses)
        }
    }
}

fn run_play_command(session: Session<'_>) -> Result<()> {
    use wordle_suggest::interactive::{App, run_tui};

    run_tui(App::new(session))
}

fn run_simple_command(mut session: Session<'_>) -> Result<()> {
    run_simple(&mut session)
}

fn run_suggest_command(mut session: Session<'_>, turns: &[TurnArg], show: usize) -> Result<()> {
    replay_turns(&mut session, turns)?;
    let report = suggest_next(&session, show)?;
    print_suggest_report(&report);
    Ok(())
}

fn run_analyze_command(mut session: Session<'_>, word: &str, turns: &[TurnArg]) -> Result<()> {
    replay_turns(&mut session, turns)?;
    let result = analyze_word(word, &session)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_solve_command(
    dictionary: &Dictionary,
    config: RankerConfig,
    word: &str,
    max_guesses: usize,
    verbose: bool,
) -> Result<()> {
    let solve = SolveConfig {
        target: word.to_string(),
        max_guesses,
    };
    let result = solve_word(&solve, dictionary, config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    wordlist: &str,
    config: RankerConfig,
    count: usize,
    max_guesses: usize,
) -> Result<()> {
    // Guess-only words are never secrets
    let mut targets: Vec<&Word> = if wordlist == "embedded" {
        embedded_answers(dictionary)
    } else {
        dictionary.iter().collect()
    };
    targets.truncate(count);
    status(&format!(
        "Running benchmark on {} words ({} threads)...",
        targets.len(),
        rayon::current_num_threads()
    ));

    let progress = progress_bar(targets.len())?;
    let result = run_benchmark(dictionary, config, &targets, max_guesses, &progress)?;
    print_benchmark_result(&result);
    Ok(())
}
