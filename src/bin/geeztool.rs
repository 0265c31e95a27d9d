use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use geez_translit::tables::{self, Tables};
use geez_translit::{settings, trace_init, Script, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "geeztool", about = "Latin/Arabic to Ge'ez transliteration")]
struct Cli {
    /// Custom mapping tables TOML (optional)
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Custom settings TOML (optional)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a text, or every line of an input file
    Convert {
        /// Text to transliterate (omit when using --input)
        text: Option<String>,
        /// Source script: latin or arabic
        #[arg(short, long, default_value = "latin")]
        script: String,
        /// Pick the script per line from its characters, ignoring --script
        #[arg(long)]
        detect: bool,
        /// Path to an input file (one transcription per line)
        #[arg(short, long)]
        input: Option<String>,
        /// Skip the phonetic service and use the rule tables only
        #[arg(long)]
        offline: bool,
        /// Output JSONL records instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Inspect the mapping tables
    Tables {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Inspect the settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default TOML
    Export,
    /// Validate a TOML file
    Validate { file: String },
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    script: Script,
    output: String,
}

fn main() {
    let cli = Cli::parse();

    let _trace = cli.log_dir.as_deref().and_then(trace_init::init_tracing);
    if let Some(path) = &cli.tables {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(Tables::init_custom(content), "Error in {path}: {}");
    }
    if let Some(path) = &cli.settings {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(settings::init_custom(content), "Error in {path}: {}");
    }

    match cli.command {
        Command::Convert {
            text,
            script,
            detect,
            input,
            offline,
            json,
        } => {
            let script: Script = die!(script.parse(), "Error: {}");
            let lines = read_lines(text, input.as_deref());
            let translit = if offline {
                Transliterator::offline()
            } else {
                Transliterator::live()
            };
            run_convert(&translit, &lines, script, detect, json);
        }
        Command::Tables { action } => match action {
            ConfigAction::Export => print!("{}", tables::default_toml()),
            ConfigAction::Validate { file } => {
                let content = die!(fs::read_to_string(&file), "Error reading {file}: {}");
                let t = die!(tables::parse_tables_toml(&content), "Error: {}");
                println!(
                    "OK: {} arabic consonants, {} families, {} latin letters",
                    t.consonant_count(),
                    t.family_count(),
                    t.letter_count()
                );
            }
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => print!("{}", settings::default_toml()),
            ConfigAction::Validate { file } => {
                let content = die!(fs::read_to_string(&file), "Error reading {file}: {}");
                let s = die!(settings::parse_settings_toml(&content), "Error: {}");
                println!(
                    "OK: service.endpoint={}, service.language={}, service.timeout_ms={}",
                    s.service.endpoint, s.service.language, s.service.timeout_ms
                );
            }
        },
    }
}

fn read_lines(text: Option<String>, input: Option<&str>) -> Vec<String> {
    match (text, input) {
        (Some(text), None) => vec![text],
        (None, Some(path)) => {
            let content = die!(fs::read_to_string(path), "Failed to open input file {path}: {}");
            content
                .lines()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .collect()
        }
        _ => {
            eprintln!("Error: pass either TEXT or --input FILE");
            process::exit(2);
        }
    }
}

fn run_convert(translit: &Transliterator, lines: &[String], script: Script, detect: bool, json: bool) {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines {
        let script = if detect { Script::detect(line) } else { script };
        let output = die!(
            translit.transliterate(line, script),
            "Failed to transliterate {line:?}: {}"
        );
        let written = if json {
            let record = Record {
                input: line,
                script,
                output,
            };
            let encoded = die!(serde_json::to_string(&record), "Failed to encode record: {}");
            writeln!(out, "{encoded}")
        } else {
            writeln!(out, "{output}")
        };
        die!(written, "Failed to write output: {}");
    }
    die!(out.flush(), "Failed to write output: {}");
}
