//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--chain <chain>`: Target chain backend (default from config)
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::core::chain::Chain;
use crate::core::widget::{SliderAction, SliderType};

/// Canistry - scaffold, deploy, and debug NFT asset canisters
#[derive(Parser, Debug)]
#[command(name = "cn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target chain backend
    #[arg(long, global = true, value_enum)]
    pub chain: Option<Chain>,

    /// Session-store root (defaults to the per-user data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the chain SDK tooling
    #[command(
        name = "install",
        long_about = "Install the target chain's SDK tooling.\n\n\
            Downloads and runs the official installer script for the chain's \
            deployment tool (dfx for the Internet Computer). The installer runs \
            through your shell; you may be asked for confirmation by the script \
            itself.",
        after_help = "\
WORKFLOW EXAMPLES:
    # First-time setup
    cn install
    cn new-project my-collection
    cn init-deploy dragon"
    )]
    Install,

    /// Create a new project and make it the active session
    #[command(
        name = "new-project",
        long_about = "Create a project directory and record it as the chain's active session.\n\n\
            Every chain-scoped command (init-deploy, start-assets, deploy-assets, \
            debug-model) operates on the active session's directory. Creating a \
            new project replaces the previous session for the chain; the previous \
            project's files stay on disk.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Create under the default per-user data directory
    cn new-project my-collection

    # Create at an explicit location
    cn new-project my-collection --path ~/work/nft

    # Check where the session points
    cn project-path"
    )]
    NewProject {
        /// Name for the new project
        name: String,

        /// Create the project at this directory instead of the default
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Print the active project path
    #[command(
        name = "project-path",
        long_about = "Print the chain's active project path.\n\n\
            Reports when no session has been created yet, and warns when the \
            recorded path no longer exists on disk (sessions are never deleted \
            automatically).",
        after_help = "\
WORKFLOW EXAMPLES:
    # Where am I deploying from?
    cn project-path

    # Use in scripts
    ls $(cn project-path -q)"
    )]
    ProjectPath,

    /// Scaffold a deployment directory tree for a project
    #[command(
        name = "init-deploy",
        long_about = "Scaffold the deployment tree for a named project under the active session.\n\n\
            Creates a contract subtree (manifest + empty Main/Types source stubs) \
            and an assets subtree (manifest + source directory). Manifest canister \
            keys are derived from the project name: '<name>_nft_container' and \
            '<name>_assets'. The tree is staged and swapped in atomically, so a \
            failed run never leaves a manifest pointing at missing stubs.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Scaffold a deployment
    cn init-deploy dragon

    # Re-scaffold from scratch, discarding the existing tree
    cn init-deploy dragon --force

LAYOUT:
    <session>/dragon/
      contract/dfx.json        canister key: dragon_nft_container
      contract/src/Main.mo
      contract/src/Types.mo
      assets/dfx.json          canister key: dragon_assets
      assets/src/"
    )]
    InitDeploy {
        /// Project to scaffold
        project: String,

        /// Overwrite an existing tree without asking for confirmation
        #[arg(long, short)]
        force: bool,
    },

    /// Start the local replica and deploy the asset canisters
    #[command(
        name = "start-assets",
        long_about = "Start the chain's local replica daemon and deploy the asset canisters.\n\n\
            The daemon start and the deploy are dispatched concurrently as an \
            unordered batch - the tooling retries internally, so ordering does \
            not matter and one failing command never blocks the other. Captured \
            output is screened for endpoint URLs, which are printed for quick \
            access to the local canister UI.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bring up the local replica and assets
    cn start-assets

    # When done
    cn stop-assets"
    )]
    StartAssets,

    /// Stop the local replica
    #[command(
        name = "stop-assets",
        long_about = "Stop the chain's local replica daemon.\n\n\
            Safe to run when nothing is running - a non-zero exit from the \
            tooling's stop command is tolerated, making this idempotent."
    )]
    StopAssets,

    /// Deploy the asset canisters
    #[command(
        name = "deploy-assets",
        long_about = "Deploy the active project's asset canisters.\n\n\
            Deploys to the PUBLIC Internet Computer network by default. Pass \
            --test to deploy to the local replica instead (requires \
            'cn start-assets' first).",
        after_help = "\
WORKFLOW EXAMPLES:
    # Deploy to the local replica for testing
    cn start-assets
    cn deploy-assets --test

    # Deploy to the public network
    cn deploy-assets"
    )]
    DeployAssets {
        /// Deploy to the local test replica instead of the public network
        #[arg(long)]
        test: bool,
    },

    /// Render debug viewer assets for a model file
    #[command(
        name = "debug-model",
        long_about = "Render a standalone debug viewer for a model in the assets source tree.\n\n\
            The model file must exist under '<project>/assets/src' and be a GLTF \
            binary (.glb). Renders a JS entry point and an HTML index beside the \
            model; serve the assets canister locally and open the index to \
            inspect the model.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Drop a model into the assets tree, then render its viewer
    cp dragon.glb $(cn project-path -q)/dragon/assets/src/
    cn debug-model dragon.glb --project dragon
    cn start-assets"
    )]
    DebugModel {
        /// Model file name under the project's assets source directory
        file: String,

        /// Project whose assets tree holds the model
        #[arg(long)]
        project: String,
    },

    /// Print material descriptor JSON
    #[command(
        name = "material-data",
        long_about = "Build a material descriptor and print its JSON encoding to stdout.\n\n\
            The output feeds template rendering and canister metadata. Optional \
            shading parameters are omitted from the JSON when not given - \
            consumers must not infer defaults from missing fields.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Flat-color material
    cn material-data basic --color '#ffffff'

    # PBR material with sheen
    cn material-data pbr --color '#406080' --roughness 0.35 \\
        --metalness 1.0 --sheen 0.6 --sheen-color '#ffeecc'"
    )]
    MaterialData {
        #[command(subcommand)]
        action: MaterialAction,
    },

    /// Print widget descriptor JSON
    #[command(
        name = "widget-data",
        long_about = "Build a viewer-widget descriptor and print its JSON encoding to stdout.\n\n\
            Widgets describe the controls the rendered viewer exposes: value \
            sliders over int or float ranges, per-mesh visibility toggles, and \
            exclusive mesh sets.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Morph-weight slider
    cn widget-data float-slider --default 0.5 --min 0 --max 1 --action-type morph

    # Exclusive variant selector (entry format: name[:hidden])
    cn widget-data mesh-set --mesh body --mesh armor:hidden --selected 0"
    )]
    WidgetData {
        #[command(subcommand)]
        action: WidgetAction,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "View or modify canistry configuration.\n\n\
            Configuration is stored in ~/.canistry/config.toml (or \
            $CANISTRY_CONFIG). Keys: chain, command_timeout_secs, dfx_bin, \
            interactive.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all configuration values
    cn config list

    # Raise the dispatcher's per-command ceiling
    cn config set command_timeout_secs 15

    # Point at a specific dfx binary
    cn config set dfx_bin /opt/dfx/bin/dfx"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    cn completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    cn completion zsh >> ~/.zshrc

    # Fish
    cn completion fish > ~/.config/fish/completions/cn.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Material descriptor subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum MaterialAction {
    /// Unlit flat-color material
    Basic {
        /// Surface color (hex)
        #[arg(long)]
        color: String,

        /// Emissive color (hex)
        #[arg(long)]
        emissive: Option<String>,
    },
    /// Diffuse-only material
    Lambert {
        #[arg(long)]
        color: String,

        #[arg(long)]
        emissive: Option<String>,
    },
    /// Specular material with a shininess exponent
    Phong {
        #[arg(long)]
        color: String,

        #[arg(long)]
        emissive: Option<String>,

        /// Specular highlight color (hex)
        #[arg(long)]
        specular: Option<String>,

        /// Shininess exponent
        #[arg(long)]
        shininess: Option<f64>,
    },
    /// Physically-based material, standard parameter set
    Standard {
        #[arg(long)]
        color: String,

        #[arg(long)]
        emissive: Option<String>,

        #[arg(long)]
        roughness: Option<f64>,

        #[arg(long)]
        metalness: Option<f64>,
    },
    /// Physically-based material with the extended parameter set
    Pbr {
        #[arg(long)]
        color: String,

        #[arg(long)]
        emissive: Option<String>,

        #[arg(long)]
        roughness: Option<f64>,

        #[arg(long)]
        metalness: Option<f64>,

        #[arg(long)]
        iridescence: Option<f64>,

        #[arg(long)]
        sheen: Option<f64>,

        #[arg(long)]
        sheen_roughness: Option<f64>,

        #[arg(long)]
        sheen_color: Option<String>,
    },
}

/// Widget descriptor subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum WidgetAction {
    /// Integer-ranged slider
    IntSlider {
        /// Hide the widget in the rendered viewer
        #[arg(long)]
        hidden: bool,

        #[arg(long)]
        default: i64,

        #[arg(long)]
        min: i64,

        #[arg(long)]
        max: i64,

        #[arg(long, value_enum, default_value = "value")]
        slider_type: SliderType,

        #[arg(long, value_enum, default_value = "none")]
        action_type: SliderAction,
    },
    /// Float-ranged slider
    FloatSlider {
        #[arg(long)]
        hidden: bool,

        #[arg(long)]
        default: f64,

        #[arg(long)]
        min: f64,

        #[arg(long)]
        max: f64,

        #[arg(long, value_enum, default_value = "value")]
        slider_type: SliderType,

        #[arg(long, value_enum, default_value = "none")]
        action_type: SliderAction,
    },
    /// Visibility toggle for a single mesh
    MeshToggle {
        #[arg(long)]
        hidden: bool,

        /// Mesh name the toggle controls
        #[arg(long)]
        name: String,

        /// Initial visibility of the mesh
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        visible: bool,
    },
    /// Exclusive selection over an ordered set of meshes
    MeshSet {
        #[arg(long)]
        hidden: bool,

        /// Mesh entry, repeatable; format: name[:hidden]
        #[arg(long = "mesh", required = true)]
        meshes: Vec<String>,

        /// Index of the initially selected mesh
        #[arg(long, default_value_t = 0)]
        selected: usize,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
