//! new-project / project-path commands - session management

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ui::output;

/// Create a project directory and record it as the chain's active session.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `name` - Project name
/// * `path` - Explicit project directory; defaults to the store's
///   per-user projects location
pub fn new_project(ctx: &Context, name: &str, path: Option<&Path>) -> Result<()> {
    let store = super::session_store(ctx)?;

    let project_dir = match path {
        Some(p) => p.to_path_buf(),
        None => store.project_dir(name),
    };

    store
        .set(ctx.chain, &project_dir)
        .with_context(|| format!("Failed to create project at {}", project_dir.display()))?;

    output::print(
        format!("Created {} project at {}", ctx.chain, project_dir.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// Print the chain's active project path.
///
/// Never fails on a stale session: the recorded path is printed with a
/// warning when it no longer exists, since markers are not deleted
/// automatically.
pub fn project_path(ctx: &Context) -> Result<()> {
    let store = super::session_store(ctx)?;

    match store.get(ctx.chain)? {
        Some(path) => {
            if !path.exists() {
                output::warn(
                    format!("session path {} no longer exists on disk", path.display()),
                    ctx.verbosity(),
                );
            }
            // Path only, so scripts can consume the output directly.
            println!("{}", path.display());
        }
        None => {
            output::print(
                format!(
                    "No active {} session. Create one with 'cn new-project <name>'.",
                    ctx.chain
                ),
                ctx.verbosity(),
            );
        }
    }
    Ok(())
}
