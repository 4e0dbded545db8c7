//! install command - install the chain SDK tooling

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::chain::Chain;
use crate::exec;
use crate::ui::output;

/// Official installer invocation per chain. The script runs through the
/// user's shell and manages its own prompts.
fn installer_command(chain: Chain) -> &'static str {
    match chain {
        Chain::Icp => r#"sh -c "$(curl -fsSL https://internetcomputer.org/install.sh)""#,
    }
}

/// Install the target chain's SDK tooling.
pub fn install(ctx: &Context) -> Result<()> {
    let home = dirs::home_dir().context("Home directory not found")?;
    let command = installer_command(ctx.chain);

    output::print(
        format!("Installing {} tooling...", ctx.chain),
        ctx.verbosity(),
    );
    output::debug(command, ctx.verbosity());

    let result = exec::run(command, &home).context("Failed to run the installer")?;

    if !result.success() {
        output::error(result.stderr.trim());
        bail!("installer exited with code {}", result.exit_code);
    }

    output::print(
        format!(
            "Installed {} tooling. Verify with '{} --version'.",
            ctx.chain,
            ctx.chain.tool()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
