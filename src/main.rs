//! PromptSync CLI Entry Point
//!
//! Syncs a playbook's prompt `.md` files into its `workflow.json`.
//!
//! # Usage
//!
//! ```bash
//! # Sync one playbook
//! sync-prompts code-review
//!
//! # Preview without writing workflow.json
//! sync-prompts code-review --dry-run
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use log::debug;

use promptsync::{SyncOptions, Synchronizer, APP_NAME, VERSION};

/// Command-line configuration parsed from arguments.
#[derive(Debug, Default, PartialEq)]
struct Config {
    playbook_dir: PathBuf,
    dry_run: bool,
    verbose: bool,
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Sync(Config),
    Help,
    Version,
}

/// Configures the logging system with appropriate formatting.
///
/// Logs go to stderr so they never mix with the report on stdout.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: sync-prompts [OPTIONS] <PLAYBOOK_DIR>");
    println!();
    println!("Arguments:");
    println!("  <PLAYBOOK_DIR>      Directory containing workflow.json and <step-id>.md prompts");
    println!();
    println!("Options:");
    println!("  -n, --dry-run       Report what would change without writing workflow.json");
    println!("  -v, --verbose       Enable debug logging");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!("Example: sync-prompts break-down-ticket");
}

/// Parses command-line arguments (including the program name).
fn parse_arguments(args: &[String]) -> Result<Command, String> {
    let mut config = Config::default();
    let mut positional: Vec<&String> = Vec::new();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--dry-run" | "-n" => config.dry_run = true,
            "--verbose" | "-v" => config.verbose = true,
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [dir] => {
            config.playbook_dir = PathBuf::from(dir.as_str());
            Ok(Command::Sync(config))
        }
        [] => Err("Missing playbook directory".to_string()),
        _ => Err(format!(
            "Expected one playbook directory, got {}",
            positional.len()
        )),
    }
}

fn run(config: Config) -> ExitCode {
    setup_logging(config.verbose);
    debug!("{:?}", config);

    let synchronizer = Synchronizer::new(&config.playbook_dir).with_options(SyncOptions {
        dry_run: config.dry_run,
    });

    match synchronizer.run() {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match parse_arguments(&args) {
        Ok(Command::Sync(config)) => run(config),
        Ok(Command::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{} {}", APP_NAME, VERSION);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
