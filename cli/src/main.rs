//! claimcheck: interactive claim-verification agent.
//!
//! Reads one statement per line from stdin and prints whether the agent
//! thinks it is true or false, and why. Typing `Bye` ends the session.
//!
//! Usage:
//!   cargo run -p claimcheck
//!   cargo run -p claimcheck -- --config claimcheck.toml

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use claimcheck_config::ClaimCheckConfig;
use claimcheck_contracts::evidence::TrustWeights;
use claimcheck_core::Agent;
use claimcheck_sources::{KnowledgeBase, SentimentFeed, StaticFeed, UnavailableFeed};

/// Input line that ends the session.
const EXIT_WORD: &str = "Bye";

// ── CLI definition ────────────────────────────────────────────────────────────

/// claimcheck: tell whether a statement is more likely true or false.
///
/// Each statement is checked against a knowledge base and a social-media
/// sentiment feed, and the two signals are combined into one verdict.
#[derive(Parser)]
#[command(name = "claimcheck", about = "Interactive claim-verification agent")]
struct Cli {
    /// TOML file with trust weights, feed limits, and a knowledge dataset path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to trace every agent step.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let (mut agent, scenarios) = build_agent(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut agent, &scenarios, stdin.lock(), stdout.lock()) {
        warn!(error = %e, "session ended early");
        eprintln!("Session error: {}", e);
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Load the config file if one was given. A bad file is reported and the
/// session continues on defaults.
fn load_config(path: Option<&Path>) -> ClaimCheckConfig {
    let Some(path) = path else {
        return ClaimCheckConfig::default();
    };
    match ClaimCheckConfig::from_file(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "falling back to default configuration");
            eprintln!("Warning: {}. Using default settings.", e);
            ClaimCheckConfig::default()
        }
    }
}

/// Wire both evidence sources into an agent. Returns the agent and the
/// scenarios its knowledge base has facts for.
fn build_agent(config: &ClaimCheckConfig) -> (Agent, Vec<String>) {
    let knowledge = load_knowledge_base(config.knowledge.dataset.as_deref());
    let scenarios: Vec<String> = knowledge.scenarios().into_iter().map(str::to_string).collect();

    let sentiment = match StaticFeed::bundled() {
        Ok(feed) => SentimentFeed::new(Box::new(feed)),
        Err(e) => {
            eprintln!("Warning: {}. Social media search is disabled.", e);
            SentimentFeed::new(Box::new(UnavailableFeed::new(e.to_string())))
        }
    }
    .with_max_posts(config.feed.max_posts);

    let trust = config.trust_weights().unwrap_or_else(|e| {
        warn!(error = %e, "invalid trust weights, using defaults");
        TrustWeights::default()
    });

    let agent = Agent::new(Box::new(knowledge), Box::new(sentiment)).with_trust(trust);
    (agent, scenarios)
}

/// Configured dataset, then the bundled one, then an empty knowledge base.
fn load_knowledge_base(dataset: Option<&Path>) -> KnowledgeBase {
    if let Some(path) = dataset {
        match KnowledgeBase::from_file(path) {
            Ok(kb) => return kb,
            Err(e) => eprintln!("Warning: {}. Using the bundled knowledge base.", e),
        }
    }
    KnowledgeBase::bundled().unwrap_or_else(|e| {
        eprintln!("Warning: {}. My own knowledge about the world is unavailable.", e);
        KnowledgeBase::default()
    })
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Greet, then run the session.
fn run<R: BufRead, W: Write>(
    agent: &mut Agent,
    scenarios: &[String],
    input: R,
    mut output: W,
) -> io::Result<()> {
    print_banner(&mut output, scenarios)?;
    run_session(agent, input, output)
}

/// Evaluate each input line until a line reading exactly `Bye`, or end of
/// input. Lines are evaluated as typed, without trimming.
fn run_session<R: BufRead, W: Write>(agent: &mut Agent, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line == EXIT_WORD {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        writeln!(output, "{}", agent.evaluate(&line))?;
        writeln!(output)?;
        output.flush()?;
    }

    writeln!(output, "Good bye!")?;
    output.flush()
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner<W: Write>(output: &mut W, scenarios: &[String]) -> io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "Hi, I am an intelligent, fake content detection agent. If you give me a statement or \
         describe a scenario, I will tell you whether I think it is true or false."
    )?;
    if !scenarios.is_empty() {
        writeln!(output)?;
        writeln!(output, "Statements I know about:")?;
        for scenario in scenarios {
            writeln!(output, "  - {}", scenario)?;
        }
    }
    writeln!(output)?;
    writeln!(output, "Type \"{}\" to leave.", EXIT_WORD)?;
    writeln!(output)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
