//! Sheetlink - typed sheets with lookup cells, driven from the command line

mod config;
mod error;
mod logger;
mod session;

use anyhow::Context;
use log::LevelFilter;
use sheetlink_core::SnapshotMode;
use std::env;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use session::Session;

fn print_usage() {
    eprintln!("Usage: sheetlink [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  File of commands, one per line (default: stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMD>       Run a command (can be repeated)");
    eprintln!("  --raw                     Show lookup cells as their expression text");
    eprintln!("  --config <FILE>           Load settings from FILE");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -v, --verbose             Increase log output (can be repeated)");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("{}", session::COMMAND_HELP);
}

fn bump_level(level: LevelFilter) -> LevelFilter {
    match level {
        LevelFilter::Off | LevelFilter::Error => LevelFilter::Warn,
        LevelFilter::Warn => LevelFilter::Info,
        LevelFilter::Info => LevelFilter::Debug,
        LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
    }
}

fn read_lines(script: Option<&PathBuf>) -> anyhow::Result<Vec<String>> {
    let lines = match script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            BufReader::new(file).lines().collect::<io::Result<Vec<_>>>()?
        }
        None => io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?,
    };
    Ok(lines)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut commands: Vec<String> = Vec::new();
    let mut script: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut no_config = false;
    let mut raw = false;
    let mut verbosity = 0usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a value");
                    std::process::exit(1);
                }
                commands.push(args[i].to_string());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => no_config = true,
            "--raw" => raw = true,
            "-v" | "--verbose" => verbosity += 1,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if script.is_none() {
                    script = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let (mut config, warnings) = if no_config && config_file.is_none() {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(config_file.as_ref())
    };
    if raw {
        config.snapshot_mode = SnapshotMode::Raw;
    }
    for _ in 0..verbosity {
        config.log_level = bump_level(config.log_level);
    }
    logger::init(config.log_level);
    for warning in warnings {
        log::warn!("{}", warning);
    }

    if commands.is_empty() {
        commands = match read_lines(script.as_ref()) {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(3);
            }
        };
    }

    let mut session = Session::new(&config);
    for command in &commands {
        match session.execute(command) {
            Ok(Some(output)) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(e.exit_code());
            }
        }
    }
}
