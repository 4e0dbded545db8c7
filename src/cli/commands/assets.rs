//! start-assets / stop-assets / deploy-assets commands
//!
//! These commands shell out to the chain tooling against the active
//! session path. Daemon start/stop go through the concurrent dispatcher
//! (the batch is order-independent and a slow sibling must not block);
//! deploys run one command synchronously. Captured output is screened
//! for endpoint URLs.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::exec::{self, Dispatcher};
use crate::ui::output;

/// Start the local replica and deploy the asset canisters.
///
/// The daemon start uses the tool's own `--background` flag so the batch
/// returns quickly; the deploy runs alongside it. Failures are reported
/// per command and never cancel the sibling.
pub fn start_assets(ctx: &Context) -> Result<()> {
    let path = active_session(ctx)?;
    let dfx = ctx.config.dfx_bin();

    let commands = vec![
        format!("{} start --background", dfx),
        format!("{} deploy", dfx),
    ];

    let dispatcher = Dispatcher::new(ctx.config.command_timeout());
    let outcomes = dispatcher.run_all(&commands, &path);

    let mut urls = Vec::new();
    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                urls.extend(exec::extract_urls(&result.combined_output()));
                if !result.success() {
                    failures += 1;
                    output::warn(
                        format!("'{}' exited with code {}", result.command, result.exit_code),
                        ctx.verbosity(),
                    );
                    output::debug(result.stderr.trim().to_string(), ctx.verbosity());
                }
            }
            Err(e) => {
                failures += 1;
                output::warn(e.to_string(), ctx.verbosity());
            }
        }
    }

    if !urls.is_empty() {
        output::print("Local endpoints:", ctx.verbosity());
        output::print(output::format_urls(&urls), ctx.verbosity());
    }

    if failures == outcomes.len() {
        bail!("every start command failed; is '{}' installed?", dfx);
    }
    Ok(())
}

/// Stop the local replica.
///
/// Idempotent: the tooling exits non-zero when nothing is running, and
/// that is tolerated here.
pub fn stop_assets(ctx: &Context) -> Result<()> {
    let path = active_session(ctx)?;
    let dfx = ctx.config.dfx_bin();

    let result = exec::run(&format!("{} stop", dfx), &path)
        .with_context(|| format!("Failed to run '{} stop'", dfx))?;

    if result.success() {
        output::print("Local replica stopped.", ctx.verbosity());
    } else {
        output::print("Local replica was not running.", ctx.verbosity());
        output::debug(result.stderr.trim().to_string(), ctx.verbosity());
    }
    Ok(())
}

/// Deploy the asset canisters.
///
/// Deploys to the public network by default; `test` targets the local
/// replica instead.
pub fn deploy_assets(ctx: &Context, test: bool) -> Result<()> {
    let path = active_session(ctx)?;
    let dfx = ctx.config.dfx_bin();

    let command = if test {
        format!("{} deploy", dfx)
    } else {
        format!("{} deploy --network ic", dfx)
    };

    let network = if test { "local replica" } else { "public network" };
    output::print(format!("Deploying assets to the {}...", network), ctx.verbosity());

    let result =
        exec::run(&command, &path).with_context(|| format!("Failed to run '{}'", command))?;

    if !result.success() {
        output::error(result.stderr.trim());
        bail!("'{}' exited with code {}", command, result.exit_code);
    }

    let urls = exec::extract_urls(&result.combined_output());
    if !urls.is_empty() {
        output::print("Deployed endpoints:", ctx.verbosity());
        output::print(output::format_urls(&urls), ctx.verbosity());
    } else {
        output::print("Deploy complete.", ctx.verbosity());
    }
    Ok(())
}

/// Resolve the chain's active session path or fail with guidance.
fn active_session(ctx: &Context) -> Result<PathBuf> {
    let store = super::session_store(ctx)?;
    match store.get(ctx.chain)? {
        Some(path) if path.exists() => Ok(path),
        Some(path) => bail!(
            "active {} session points at {}, which no longer exists; \
             create a new project with 'cn new-project <name>'",
            ctx.chain,
            path.display()
        ),
        None => bail!(
            "no active {} session; create one with 'cn new-project <name>'",
            ctx.chain
        ),
    }
}
