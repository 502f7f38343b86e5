//! CLI entrypoint for reco-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod output;
mod prompt;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use output::ConsoleFormatter;
use prompt::StdinAnswerPrompt;
use quiz_application::{
    AnalyticsSink, NoAnalytics, PromptError, QuizOutcome, RunQuizError, RunQuizInput,
    RunQuizUseCase, ScriptedAnswers,
};
use quiz_domain::CHOICES_PER_QUESTION;
use quiz_infrastructure::{
    ConfigLoader, FanoutSink, FileConfig, JsonlAnalyticsSink, Severity, TracingAnalyticsSink,
};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Totals per category plus the recommendation
    Full,
    /// Only the recommendation
    Result,
    /// JSON output
    Json,
}

/// CLI arguments for reco-quiz
#[derive(Parser, Debug)]
#[command(name = "reco-quiz")]
#[command(author, version, about = "Find the right service package in five questions")]
#[command(long_about = r#"
reco-quiz walks you through a short weighted quiz and recommends one of
four service packages. Every answer contributes points to each package;
the package with the highest total wins (ties resolve in a fixed order,
so the same answers always give the same result).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quiz.toml         Project-level config
3. ~/.config/reco-quiz/config.toml   Global config

Example:
  reco-quiz                      # interactive
  reco-quiz --answers 1,2,3,4,1  # scripted (choice numbers, 1-4)
  reco-quiz --answers 1,1,1,1,1 --output json
"#)]
struct Cli {
    /// Answer non-interactively: comma-separated choice numbers (1-4), one per question
    #[arg(short, long, value_name = "LIST")]
    answers: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress decoration and the retake prompt
    #[arg(short, long)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    show_config: bool,

    /// Append analytics events to this JSONL file (overrides config)
    #[arg(long, value_name = "PATH")]
    log_events: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("{issue}"),
            Severity::Warning => warn!("{issue}"),
        }
    }
    if config.has_errors() {
        bail!("configuration is invalid; fix the errors above");
    }

    let questions = config.to_question_set()?;
    let catalog = config.to_catalog();
    info!("Loaded quiz with {} questions", questions.len());

    // === Dependency Injection ===
    let analytics = build_analytics(&config, cli.log_events.as_ref());
    let use_case = RunQuizUseCase::new(analytics);

    // Scripted mode
    if let Some(list) = &cli.answers {
        let answers = parse_answers(list)?;
        if answers.len() != questions.len() {
            bail!(
                "expected {} answers, got {}",
                questions.len(),
                answers.len()
            );
        }
        let mut prompt = ScriptedAnswers::new(answers);
        let outcome = use_case.execute(RunQuizInput::new(questions, catalog), &mut prompt)?;
        print_outcome(&outcome, cli.output);
        return Ok(());
    }

    // Interactive mode, with an optional retake loop
    loop {
        let mut prompt = StdinAnswerPrompt::new(cli.quiet);
        let input = RunQuizInput::new(questions.clone(), catalog.clone());

        let outcome = match use_case.execute(input, &mut prompt) {
            Ok(outcome) => outcome,
            Err(RunQuizError::Prompt(PromptError::Cancelled)) => {
                println!("\nQuiz cancelled.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        print_outcome(&outcome, cli.output);

        if cli.quiet || !ask_retake()? {
            return Ok(());
        }
        use_case.record_restart();
    }
}

/// Build the analytics sink stack from config and CLI overrides.
///
/// Events always go to the tracing pipeline when analytics is enabled;
/// a JSONL file sink is added when a path is configured or forced.
fn build_analytics(config: &FileConfig, log_events: Option<&PathBuf>) -> Arc<dyn AnalyticsSink> {
    if !config.analytics.enabled && log_events.is_none() {
        return Arc::new(NoAnalytics);
    }

    let mut sinks: Vec<Arc<dyn AnalyticsSink>> = vec![Arc::new(TracingAnalyticsSink)];

    let events_file = log_events.or(config.analytics.events_file.as_ref());
    if let Some(path) = events_file
        && let Some(sink) = JsonlAnalyticsSink::new(path)
    {
        info!("Appending analytics events to {}", sink.path().display());
        sinks.push(Arc::new(sink));
    }

    Arc::new(FanoutSink::new(sinks))
}

/// Parse a `--answers` list of 1-based choice numbers into 0-based indices
fn parse_answers(list: &str) -> Result<Vec<usize>> {
    list.split(',')
        .map(|part| {
            let part = part.trim();
            let n: usize = part
                .parse()
                .with_context(|| format!("invalid answer '{part}'"))?;
            if !(1..=CHOICES_PER_QUESTION).contains(&n) {
                bail!("answer '{part}' out of range (1-{CHOICES_PER_QUESTION})");
            }
            Ok(n - 1)
        })
        .collect()
}

fn print_outcome(outcome: &QuizOutcome, format: OutputFormat) {
    let text = match format {
        OutputFormat::Full => ConsoleFormatter::format(outcome),
        OutputFormat::Result => ConsoleFormatter::format_result_only(outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(outcome),
    };
    println!("{text}");
}

/// Ask whether to run the quiz again
fn ask_retake() -> Result<bool> {
    println!("\nRetake the quiz? [y/N]");
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read retake answer")?;
    if read == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers_converts_to_zero_based() {
        assert_eq!(parse_answers("1,2,3,4,1").unwrap(), vec![0, 1, 2, 3, 0]);
        assert_eq!(parse_answers(" 2 , 2 ").unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_parse_answers_rejects_out_of_range() {
        assert!(parse_answers("0,1").is_err());
        assert!(parse_answers("1,5").is_err());
        assert!(parse_answers("1,x").is_err());
    }
}
