//! config command - Get, set, or list configuration values

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;

/// Get a configuration value.
pub fn get(_ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    let value = match key {
        "chain" => config.chain().to_string(),
        "command_timeout_secs" => config.command_timeout().as_secs().to_string(),
        "dfx_bin" => config.dfx_bin().to_string(),
        "interactive" => config.interactive().to_string(),
        _ => bail!("Unknown configuration key: {}", key),
    };

    println!("{}", value);
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut global = Config::load().context("Failed to load config")?.global;

    match key {
        "chain" => {
            global.chain = Some(value.to_string());
        }
        "command_timeout_secs" => {
            let secs: u64 = value
                .parse()
                .with_context(|| format!("'{}' is not a whole number of seconds", value))?;
            global.command_timeout_secs = Some(secs);
        }
        "dfx_bin" => {
            global.dfx_bin = Some(value.to_string());
        }
        "interactive" => {
            let flag: bool = value
                .parse()
                .with_context(|| format!("'{}' is not true or false", value))?;
            global.interactive = Some(flag);
        }
        _ => bail!("Unknown configuration key: {}", key),
    }

    global.validate().context("Invalid configuration value")?;
    let path = Config::write(&global).context("Failed to write config")?;

    if !ctx.quiet {
        println!("Set {} = {} ({})", key, value, path.display());
    }
    Ok(())
}

/// List all configuration values.
pub fn list(_ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    println!("# Configuration");
    println!("chain = {}", config.chain());
    println!("command_timeout_secs = {}", config.command_timeout().as_secs());
    println!("dfx_bin = {}", config.dfx_bin());
    println!("interactive = {}", config.interactive());

    if let Some(path) = config.loaded_from() {
        println!();
        println!("# loaded from {}", path.display());
    }
    Ok(())
}
