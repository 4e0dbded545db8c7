//! cli
//!
//! Command-line interface layer for canistry.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and build the execution [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! command handlers; domain work happens in [`crate::core`],
//! [`crate::exec`], and [`crate::render`]. Handlers receive everything
//! they need through the `Context` - there is no hidden global state, so
//! tests drive them with a context of their own.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::core::chain::Chain;
use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Execution context handed to every command handler.
#[derive(Debug)]
pub struct Context {
    /// Chain backend the invocation targets.
    pub chain: Chain,
    /// Enable debug diagnostics.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
    /// Whether prompts may be shown.
    pub interactive: bool,
    /// Explicit session-store root; `None` resolves the per-user default.
    pub data_root: Option<PathBuf>,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load()?;

    // CLI flags take precedence over configured defaults.
    let interactive = if cli.interactive_flag {
        true
    } else {
        cli.interactive() && config.interactive()
    };
    let ctx = Context {
        chain: cli.chain.unwrap_or_else(|| config.chain()),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive,
        data_root: cli.data_dir.clone(),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}
