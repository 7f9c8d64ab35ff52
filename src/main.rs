use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fibseq::config::{self, Config};
use fibseq::diagnostics::{SequenceError, render_error};
use fibseq::render::{self, OutputFormat};
use fibseq::{Strategy, demo};

#[derive(Parser)]
#[command(name = "fibseq", version, about = "Generate and check Fibonacci sequences")]
struct Cli {
    /// Path to a fibseq.toml (overrides FIBSEQ_CONFIG and discovery)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log config resolution and checks to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first LENGTH Fibonacci numbers
    Generate {
        /// Number of terms (an integer >= 0)
        #[arg(allow_hyphen_values = true)]
        length: String,
        /// Output format: plain (default), lines, json
        #[arg(long)]
        format: Option<String>,
        /// Build the sequence recursively instead of iteratively
        #[arg(long)]
        recursive: bool,
    },
    /// Generate LENGTH terms and check the recurrence holds for each one
    Verify {
        /// Number of terms (an integer >= 0)
        #[arg(allow_hyphen_values = true)]
        length: String,
        /// Build the sequence recursively instead of iteratively
        #[arg(long)]
        recursive: bool,
    },
    /// Run the exploratory scenarios: big terms, a long recurrence check, independent results
    Demo {
        /// Output format for the printed sequence
        #[arg(long)]
        format: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn load_config(explicit: Option<&std::path::Path>) -> Config {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match config::load(explicit, &cwd) {
        Ok(cfg) => cfg,
        Err(err) => {
            render_error("", &err);
            std::process::exit(1);
        }
    }
}

fn resolve_format(flag: Option<String>, cfg: &Config) -> OutputFormat {
    match flag {
        None => cfg.format,
        Some(s) => match s.parse::<OutputFormat>() {
            Ok(format) => format,
            Err(msg) => {
                eprintln!("error: {msg}");
                std::process::exit(1);
            }
        },
    }
}

fn fail(literal: &str, err: &SequenceError) -> ! {
    render_error(literal, err);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut cfg = load_config(cli.config.as_deref());
    match &cfg.source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("using default config"),
    }

    match cli.command {
        Commands::Generate { length, format, recursive } => {
            let format = resolve_format(format, &cfg);
            if recursive {
                cfg.strategy = Strategy::Recursive;
            }
            let seq = fibseq::generate_from_literal(&length, &cfg).unwrap_or_else(|err| fail(&length, &err));
            tracing::debug!(terms = seq.len(), strategy = ?cfg.strategy, "generated");
            match render::render(&seq, format) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("error: failed to render sequence: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Verify { length, recursive } => {
            if recursive {
                cfg.strategy = Strategy::Recursive;
            }
            let seq = fibseq::generate_from_literal(&length, &cfg).unwrap_or_else(|err| fail(&length, &err));
            if let Err(err) = seq.verify() {
                fail(&length, &err);
            }
            println!("ok: {} terms satisfy the recurrence", seq.len());
        }
        Commands::Demo { format } => {
            let format = resolve_format(format, &cfg);
            let mut stdout = std::io::stdout().lock();
            match demo::run(&mut stdout, format, cfg.strategy) {
                Ok(report) => {
                    print!("{}", demo::summary(&report));
                    if !report.passed() {
                        eprintln!("error: demo checks failed");
                        std::process::exit(1);
                    }
                }
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
    }
}
