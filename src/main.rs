//! CLI entry point for autoindex

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use autoindex::{
    IndexWalker, OutputFormat, RunSummary, WalkerConfig, parse_ignore_list, print_summary,
    print_summary_json, workflow_error_command, write_action_outputs,
};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Inputs can also come from CI action environment variables (`INPUT_*`).
#[derive(Parser, Debug)]
#[command(name = "autoindex")]
#[command(about = "Generate index.html / index.json listings for every directory in a tree")]
#[command(version)]
struct Args {
    /// Directory to index
    #[arg(default_value = ".", env = "INPUT_ROOT")]
    root: PathBuf,

    /// Which listings to write into each directory
    #[arg(long = "output-format", env = "INPUT_OUTPUT-FORMAT", default_value = "both")]
    output_format: OutputFormat,

    /// URL of an external stylesheet (replaces the embedded dark theme)
    #[arg(long = "stylesheet", env = "INPUT_STYLESHEET")]
    stylesheet: Option<String>,

    /// Glob patterns to exclude; newline or comma separated, may be repeated
    #[arg(short = 'I', long = "ignore", env = "INPUT_IGNORE")]
    ignore: Vec<String>,

    /// Include file size and modification time in listings
    #[arg(
        long = "include-metadata",
        env = "INPUT_INCLUDE-METADATA",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        value_name = "BOOL"
    )]
    include_metadata: bool,

    /// Page title; `{path}` is replaced by the directory path
    #[arg(
        long = "title-template",
        env = "INPUT_TITLE-TEMPLATE",
        default_value = autoindex::tree::DEFAULT_TITLE_TEMPLATE
    )]
    title_template: String,

    /// Print the run outputs as JSON instead of a summary table
    #[arg(long = "summary-json")]
    summary_json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        let ignore_patterns = self
            .ignore
            .iter()
            .flat_map(|raw| parse_ignore_list(raw))
            .collect();

        WalkerConfig {
            ignore_patterns,
            format: self.output_format,
            stylesheet: self
                .stylesheet
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            include_metadata: self.include_metadata,
            title_template: self.title_template.clone(),
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("autoindex=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

/// Report a fatal error and exit.
fn fail(message: &str) -> ! {
    if std::env::var_os("GITHUB_ACTIONS").is_some() {
        println!("{}", workflow_error_command(message));
    }
    eprintln!("autoindex: {}", message);
    process::exit(1);
}

fn report(summary: &RunSummary, args: &Args) -> std::io::Result<()> {
    if let Some(path) = std::env::var_os("GITHUB_OUTPUT") {
        write_action_outputs(summary, &PathBuf::from(path))?;
    }

    if args.summary_json {
        print_summary_json(summary)
    } else {
        print_summary(summary, should_use_color(args.color))
    }
}

fn main() {
    init_logging();

    let args = Args::parse();
    let walker = IndexWalker::new(args.walker_config());

    let summary = match walker.walk(&args.root) {
        Ok(summary) => summary,
        Err(e) => fail(&e.to_string()),
    };

    if let Err(e) = report(&summary, &args) {
        fail(&format!("error writing outputs: {}", e));
    }
}
