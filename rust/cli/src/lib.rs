//! # Bridgehand CLI Library
//!
//! Command-line front end for the bridgehand deal engine: deal boards,
//! evaluate hands, and hunt for deals with a biddable suit.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["bridgehand", "deal", "--seed", "42", "--boards", "4"];
//! let code = bridgehand_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal boards and show each hand with HCP and BPC
//! - `eval`: Per-suit statistics for a hand in `S.H.D.C` notation
//! - `hunt`: Deal until a seat holds a suit of a given biddability
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
mod macros;
pub mod ui;

use cli::{BridgehandCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_hunt_command,
};

pub use error::CliError;

/// Subcommand names listed after a usage error.
const COMMANDS: &[&str] = &["deal", "eval", "hunt", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = vec!["bridgehand", "eval", "AKQJT...98765432"];
/// let code = bridgehand_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("BPC 18"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BridgehandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Bridgehand CLI");
                    write_or_exit!(err, "Usage: bridgehand <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: bridgehand --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Deal {
            seed,
            boards,
            start,
            json,
            output,
        } => handle_deal_command(seed, boards, start, json, output, out),
        Commands::Eval { hand } => handle_eval_command(&hand, out),
        Commands::Hunt {
            seed,
            seat,
            min_biddable,
            max_boards,
        } => handle_hunt_command(seed, seat.map(Into::into), min_biddable, max_boards, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_capture(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run_capture(&["bridgehand", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let (code, out, err) = run_capture(&["bridgehand", "shuffle"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn test_eval_dispatch() {
        let (code, out, _) = run_capture(&["bridgehand", "eval", "AKQJT...98765432"]);
        assert_eq!(code, 0);
        assert!(out.contains("HCP 10  BPC 18"));
    }

    #[test]
    fn test_engine_error_maps_to_exit_2() {
        let (code, out, err) = run_capture(&["bridgehand", "eval", "AKQ..."]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Engine error: Malformed hand"));
    }
}
