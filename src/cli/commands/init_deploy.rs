//! init-deploy command - scaffold a project's deployment tree

use anyhow::Result;

use crate::cli::Context;
use crate::core::scaffold::{self, ScaffoldError};
use crate::ui::{output, prompts};

/// Scaffold the deployment tree for `project` under the active session.
///
/// Without `force`, an existing tree prompts for confirmation in
/// interactive mode and aborts otherwise.
pub fn init_deploy(ctx: &Context, project: &str, force: bool) -> Result<()> {
    let store = super::session_store(ctx)?;

    let layout = match scaffold::init_deployment(&store, ctx.chain, project, force) {
        Ok(layout) => layout,
        Err(ScaffoldError::AlreadyExists(path)) if ctx.interactive => {
            let overwrite = prompts::confirm(
                &format!("Deployment {} already exists. Overwrite?", path.display()),
                false,
                ctx.interactive,
            )?;
            if !overwrite {
                output::print("Aborted.", ctx.verbosity());
                return Ok(());
            }
            scaffold::init_deployment(&store, ctx.chain, project, true)?
        }
        Err(e) => return Err(e.into()),
    };

    output::print(
        format!("Scaffolded deployment at {}", layout.project_dir().display()),
        ctx.verbosity(),
    );
    output::debug(
        format!(
            "contract manifest: {}",
            layout.contract_manifest_path().display()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
