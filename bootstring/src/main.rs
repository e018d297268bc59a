//! Command-line interface for Bootstring encoding/decoding.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bootstring::presets::{self, Alphanumeric, Punycode};
use bootstring::{Result, Tuning};
use clap::{Parser, Subcommand, ValueEnum};

/// bootstring - RFC 3492 encoding over configurable alphabets
#[derive(Parser, Debug)]
#[command(name = "bootstring")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Alphabet preset
    #[arg(long, short, value_enum, default_value_t = Preset::Punycode, global = true)]
    preset: Preset,

    /// JSON file overriding the preset's tuning constants
    #[arg(long, global = true)]
    tuning: Option<PathBuf>,

    /// Log codec construction details
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode strings (read from stdin, one per line, if none are given)
    Encode { strings: Vec<String> },
    /// Decode strings (read from stdin, one per line, if none are given)
    Decode { strings: Vec<String> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    /// ASCII output, '-' delimiter
    Punycode,
    /// 0-9A-Za-z output, 'X' delimiter
    Alphanumeric,
}

#[derive(Clone, Copy)]
enum Mode {
    Encode,
    Decode,
}

enum Codec {
    Punycode(Punycode),
    Alphanumeric(Alphanumeric),
}

impl Codec {
    fn build(preset: Preset, tuning: Option<Tuning>) -> Result<Self> {
        Ok(match preset {
            Preset::Punycode => Codec::Punycode(presets::punycode_with(
                tuning.unwrap_or(Tuning::PUNYCODE),
            )?),
            Preset::Alphanumeric => Codec::Alphanumeric(presets::alphanumeric_with(
                tuning.unwrap_or(presets::ALPHANUMERIC_TUNING),
            )?),
        })
    }

    fn encode(&self, input: &str) -> Result<String> {
        match self {
            Codec::Punycode(codec) => codec.encode(input),
            Codec::Alphanumeric(codec) => codec.encode(input),
        }
    }

    fn decode(&self, input: &str) -> Result<String> {
        match self {
            Codec::Punycode(codec) => codec.decode(input),
            Codec::Alphanumeric(codec) => codec.decode(input),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let tuning = match args.tuning.as_deref().map(Tuning::load).transpose() {
        Ok(tuning) => tuning,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let codec = match Codec::build(args.preset, tuning) {
        Ok(codec) => codec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (strings, mode) = match args.command {
        Command::Encode { strings } => (strings, Mode::Encode),
        Command::Decode { strings } => (strings, Mode::Decode),
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if !strings.is_empty() {
        for s in &strings {
            if !emit(&mut stdout, &codec, mode, s) {
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(s) => {
                if !emit(&mut stdout, &codec, mode, &s) {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn emit(
    out: &mut impl Write,
    codec: &Codec,
    mode: Mode,
    input: &str,
) -> bool {
    let result = match mode {
        Mode::Encode => codec.encode(input),
        Mode::Decode => codec.decode(input),
    };
    match result {
        Ok(output) => {
            let _ = writeln!(out, "{}", output);
            true
        }
        Err(e) => {
            eprintln!("Error processing '{}': {}", input, e);
            false
        }
    }
}
