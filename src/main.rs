use anyhow::{anyhow, Context};
use clap::Parser;
use guesstalt_core::{
    GuessOutcome, GuessRejection, RadiusScale, RankingBuild, Session, TargetSelection,
    DEFAULT_IMPROVEMENT_THRESHOLD,
};
use guesstalt_data::{load_variants, validate_variants, WordPayload};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A daily word-guessing game over semantic embeddings
#[derive(Parser, Debug)]
#[command(name = "guesstalt")]
#[command(about = "Guess the hidden word by semantic similarity", long_about = None)]
struct Args {
    /// Path to the words.json embedding payload
    #[arg(short, long, default_value = "data/words.json")]
    data: PathBuf,

    /// Optional variant -> canonical word map (JSON)
    #[arg(long)]
    variants: Option<PathBuf>,

    /// Play the puzzle for a specific date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Derive the target from a fixed seed instead of the date
    #[arg(long)]
    seed: Option<u64>,

    /// Play against an explicit target word (spoils the puzzle; debugging)
    #[arg(long)]
    target: Option<String>,

    /// Pick a random target instead of the daily one
    #[arg(long, default_value_t = false)]
    random: bool,

    /// How many pair hints /hint shows
    #[arg(long, default_value_t = 5)]
    hints: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Guesstalt v{}", env!("CARGO_PKG_VERSION"));

    let payload = WordPayload::load(&args.data)
        .with_context(|| format!("failed to load payload from {:?}", args.data))?;
    if let Some(model) = &payload.model {
        info!("Embedding model: {}", model);
    }
    let vocabulary = Arc::new(payload.into_vocabulary()?);
    info!(
        "Vocabulary: {} words, {} dimensions",
        vocabulary.len(),
        vocabulary.dim()
    );

    let variants = match &args.variants {
        Some(path) => {
            let map = load_variants(path)
                .with_context(|| format!("failed to load variants from {path:?}"))?;
            validate_variants(&map, &vocabulary)?;
            info!("Variants: {} alternate forms", map.len());
            Some(map)
        }
        None => None,
    };

    let selection = if let Some(word) = args.target {
        TargetSelection::Word(word)
    } else if let Some(seed) = args.seed {
        TargetSelection::Seeded(seed)
    } else if args.random {
        TargetSelection::Random
    } else {
        let date = args
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive().to_string());
        info!("Puzzle date: {}", date);
        TargetSelection::Daily(date)
    };

    let target_index = selection.resolve(&vocabulary)?;
    info!("Ranking {} words...", vocabulary.len());
    let build = RankingBuild::spawn(vocabulary.clone(), target_index)?;
    let table = build
        .join()
        .ok_or_else(|| anyhow!("ranking build was cancelled"))??;

    let mut session = Session::with_table(vocabulary, variants, table);
    info!("Session {} ready", session.id());

    println!("Guess the hidden word. Commands: /top /hint /map /quit");

    let scale = RadiusScale::default();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" => break,
            "/top" => print_top(&session),
            "/hint" => print_hints(&session, args.hints)?,
            "/map" => print_map(&session, &scale)?,
            _ => {
                if play_guess(&mut session, input) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Submit one guess and print feedback; true when the puzzle is solved
fn play_guess(session: &mut Session, input: &str) -> bool {
    match session.submit(input) {
        GuessOutcome::Accepted(record) => {
            if record.is_correct {
                println!(
                    "Correct! \"{}\" found in {} guesses.",
                    record.word, record.sequence
                );
                return true;
            }
            println!(
                "#{:<4} {:<16} rank {:>6} of {}   similarity {:+.4}",
                record.sequence,
                record.word,
                record.rank,
                session.vocabulary().len(),
                record.similarity
            );
        }
        GuessOutcome::Rejected(rejection) => match rejection {
            GuessRejection::EmptyInput => println!("Type a word."),
            GuessRejection::OutOfVocabulary(word) => {
                println!("\"{word}\" is not in the word list.")
            }
            GuessRejection::DuplicateGuess(word) => println!("Already guessed \"{word}\"."),
        },
    }
    false
}

fn print_top(session: &Session) {
    if session.history().is_empty() {
        println!("No guesses yet.");
        return;
    }
    let mut best = session.history().to_vec();
    best.sort_by_key(|g| g.rank);
    for record in best.iter().take(10) {
        println!(
            "rank {:>6}   {:+.4}   {}",
            record.rank, record.similarity, record.word
        );
    }
}

fn print_hints(session: &Session, limit: usize) -> anyhow::Result<()> {
    let pairs = session.hot_pairs(DEFAULT_IMPROVEMENT_THRESHOLD)?;
    if pairs.is_empty() {
        println!("No promising pairs yet.");
        return Ok(());
    }
    for pair in pairs.iter().take(limit) {
        println!(
            "{} + {}   midpoint similarity {:+.4} ({:+.4})",
            pair.word_a, pair.word_b, pair.midpoint_similarity, pair.improvement
        );
    }
    Ok(())
}

fn print_map(session: &Session, scale: &RadiusScale) -> anyhow::Result<()> {
    if session.history().is_empty() {
        println!("No guesses yet.");
        return Ok(());
    }
    for point in session.plot(scale)? {
        println!(
            "{:<16} rank {:>6}   ({:+.3}, {:+.3}, {:+.3})",
            point.word, point.rank, point.position[0], point.position[1], point.position[2]
        );
    }
    Ok(())
}
