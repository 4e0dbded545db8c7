//! debug-model command - render viewer assets for a model file

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::scaffold::DeploymentLayout;
use crate::render::{self, create_renderer};
use crate::ui::output;

/// Render the debug viewer (JS entry point + HTML index) for a model in
/// a project's assets source tree.
pub fn debug_model(ctx: &Context, file: &str, project: &str) -> Result<()> {
    let store = super::session_store(ctx)?;
    let session_path = match store.get(ctx.chain)? {
        Some(path) => path,
        None => bail!(
            "no active {} session; create one with 'cn new-project <name>'",
            ctx.chain
        ),
    };

    let layout = DeploymentLayout::new(&session_path, project);
    let assets_src = layout.assets_src_dir();
    if !assets_src.is_dir() {
        bail!(
            "project '{}' has no assets tree at {}; scaffold it with 'cn init-deploy {}'",
            project,
            assets_src.display(),
            project
        );
    }

    let renderer = create_renderer(render::DEFAULT_PROVIDER)?;
    let assets = render::write_debug_assets(&assets_src, file, renderer.as_ref())
        .with_context(|| format!("Failed to render debug viewer for '{}'", file))?;

    output::print(
        format!(
            "Rendered debug viewer:\n  {}\n  {}",
            assets.js_path.display(),
            assets.html_path.display()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
