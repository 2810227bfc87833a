//! Command handler modules for the bridgehand CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod eval;
mod hunt;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use hunt::handle_hunt_command;

use crate::config::{self, Config};
use crate::error::CliError;

/// Resolved configuration, or a `CliError::Config` describing why not.
fn load_config() -> Result<Config, CliError> {
    config::load_with_sources()
        .map(|resolved| resolved.config)
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))
}

/// Explicit seed, else configured seed, else fresh OS randomness.
fn resolve_seed(flag: Option<u64>, cfg: &Config) -> u64 {
    flag.or(cfg.seed).unwrap_or_else(rand::random)
}
