//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into core/exec/render to do the work
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`; only `main` converts an unrecovered
//! error into a printed message and a non-zero exit.

mod assets;
mod completion;
mod config_cmd;
mod data;
mod init_deploy;
mod install;
mod model;
mod project;

// Re-export command functions for testing and direct invocation
pub use assets::{deploy_assets, start_assets, stop_assets};
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use data::{material_data, widget_data};
pub use init_deploy::init_deploy;
pub use install::install;
pub use model::debug_model;
pub use project::{new_project, project_path};

use anyhow::{Context as _, Result};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::session::SessionStore;

/// Resolve the session store for this invocation: the context's explicit
/// root when set (tests, `--data-dir`), the per-user default otherwise.
pub(crate) fn session_store(ctx: &Context) -> Result<SessionStore> {
    match &ctx.data_root {
        Some(root) => Ok(SessionStore::new(root)),
        None => SessionStore::open_default().context("Failed to resolve the session store"),
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Install => install::install(ctx),
        Command::NewProject { name, path } => {
            project::new_project(ctx, &name, path.as_deref())
        }
        Command::ProjectPath => project::project_path(ctx),
        Command::InitDeploy { project, force } => {
            init_deploy::init_deploy(ctx, &project, force)
        }
        Command::StartAssets => assets::start_assets(ctx),
        Command::StopAssets => assets::stop_assets(ctx),
        Command::DeployAssets { test } => assets::deploy_assets(ctx, test),
        Command::DebugModel { file, project } => {
            model::debug_model(ctx, &file, &project)
        }
        Command::MaterialData { action } => data::material_data(ctx, action),
        Command::WidgetData { action } => data::widget_data(ctx, action),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
