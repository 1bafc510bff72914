use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, info};
use services::{QuizRunner, ScoreReport, resolve};
use storage::repository::{LoadError, SourceConfig};
use storage::sqlite::normalize_sqlite_url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSource { raw: String },
    InvalidDbUrl { raw: String },
    InvalidFile { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSource { raw } => {
                write!(f, "invalid --source value (expected file or sqlite): {raw}")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidFile { raw } => write!(f, "invalid --file value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    File,
    Sqlite,
}

impl SourceKind {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg.trim().to_ascii_lowercase().as_str() {
            "file" | "json" => Some(Self::File),
            "sqlite" | "db" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    source: SourceKind,
    file: PathBuf,
    db_url: String,
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut source = match env("QUIZ_SOURCE") {
            Some(raw) => SourceKind::from_arg(&raw).ok_or(ArgsError::InvalidSource { raw })?,
            None => SourceKind::File,
        };
        let mut file = env("QUIZ_FILE").map_or_else(|| PathBuf::from("questions.json"), PathBuf::from);
        let mut db_url = env("QUIZ_DB_URL")
            .map_or_else(|| "sqlite://quiz.sqlite3".into(), |v| normalize_sqlite_url(&v));

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(&mut args, "--source")?;
                    source = SourceKind::from_arg(&value)
                        .ok_or(ArgsError::InvalidSource { raw: value })?;
                }
                "--file" => {
                    let value = require_value(&mut args, "--file")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidFile { raw: value });
                    }
                    file = PathBuf::from(value);
                }
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(&value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            source,
            file,
            db_url,
        })
    }

    fn source_config(&self) -> SourceConfig {
        match self.source {
            SourceKind::File => SourceConfig::File(self.file.clone()),
            SourceKind::Sqlite => SourceConfig::Sqlite(self.db_url.clone()),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app --bin quiz -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --source <file|sqlite>    Where to load questions from (default: file)");
    eprintln!("  --file <path>             Question file (default: questions.json)");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite://quiz.sqlite3)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  QUIZ_SOURCE, QUIZ_FILE, QUIZ_DB_URL");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for diagnostics on stderr.");
}

fn load_failure(err: &LoadError) -> String {
    format!("Error loading questions: {err}")
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(|e| {
        print_usage();
        e
    })?;

    let config = args.source_config();
    debug!("source config: {config:?}");

    let source = config
        .open()
        .await
        .map_err(|e| load_failure(&e))?;
    let banks = source
        .load_all_banks()
        .await
        .map_err(|e| load_failure(&e))?;
    info!("loaded {} banks from {}", banks.len(), source.describe());

    let mut runner = QuizRunner::new(io::stdin().lock(), io::stdout().lock());
    let mut rng = rand::rng();

    let scope = runner.choose_scope(&banks)?;
    let questions = resolve(&banks, scope, &mut rng)?;
    let stats = runner.run(questions, &mut rng)?;

    let (_, mut output) = runner.into_parts();
    write!(output, "{}", ScoreReport::from_stats(&stats))?;
    output.flush()?;

    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
