//! CLI entry point for wikicat

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use wikicat::{
    CategoryWalker, ConfigError, OutputConfig, SqliteDump, WalkConfig, WalkError, print_json,
    print_list,
};

const LOG_TIME_FORMAT: &str = "%H:%M:%S";

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
            // Respect NO_COLOR environment variable (https://no-color.org/)
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

#[derive(Parser, Debug)]
#[command(name = "wikicat")]
#[command(about = "Wikipedia category utility for SQLite dumps of the wiki database")]
#[command(version)]
struct Args {
    /// SQLite dump containing the page and categorylinks tables
    dbname: PathBuf,

    /// Root category to walk from
    #[arg(short = 't', long = "target")]
    target: Option<String>,

    /// Limit of tree depth (1 = direct subcategories only)
    #[arg(short = 'l', long = "limit", default_value_t = 1)]
    limit: usize,

    /// Allow expanding a category that is already one of its own ancestors
    #[arg(short = 'p', long = "loop")]
    allow_loop: bool,

    /// Never list the same category twice in one run
    #[arg(short = 'u', long = "unique")]
    unique: bool,

    /// Debug logging, including one trace line per discovered category
    #[arg(short = 'd', long = "dev")]
    dev: bool,

    /// No output, only errors are logged
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Exclude the given categories and everything found only through them
    #[arg(short = 'e', long = "exclude", num_args = 0..)]
    exclude: Vec<String>,

    /// Also list the pages contained in every expanded category
    #[arg(long = "pages")]
    pages: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("wikicat: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Debug wins over quiet. `RUST_LOG` overrides both when set.
fn init_logging(args: &Args) {
    let level = if args.dev {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wikicat={},warn", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_target(false)
        .init();
}

fn run(args: &Args) -> wikicat::error::Result<()> {
    let config = WalkConfig {
        unique: args.unique,
        depth_limit: args.limit,
        allow_loop: args.allow_loop,
        exclude: args.exclude.iter().cloned().collect(),
        include_pages: args.pages,
    };
    config.validate().map_err(WalkError::from)?;

    let root = match args.target.as_deref() {
        Some(root) if !root.trim().is_empty() => root,
        _ => return Err(WalkError::from(ConfigError::MissingRoot).into()),
    };

    let dump = SqliteDump::open(&args.dbname).map_err(WalkError::from)?;
    let walker = CategoryWalker::new(config, dump).map_err(WalkError::from)?;
    let result = walker.walk(root)?;

    if !args.quiet {
        if args.json {
            print_json(&result)?;
        } else {
            print_list(
                &result,
                OutputConfig {
                    use_color: should_use_color(args.color),
                    show_pages: args.pages,
                },
            )?;
        }
    }

    info!(
        "end: {} categories, {} pages under '{}'",
        result.categories.len(),
        result.pages.len(),
        root
    );
    Ok(())
}
