//! core::scaffold
//!
//! Idempotent materialization of a project's deployment directory tree.
//!
//! # Layout
//!
//! For a project named `dragon` under the active session path:
//!
//! ```text
//! <session>/dragon/
//!   contract/
//!     dfx.json            <- canister key "dragon_nft_container"
//!     src/Main.mo         <- empty stub, referenced by the manifest
//!     src/Types.mo        <- empty stub
//!   assets/
//!     dfx.json            <- canister key "dragon_assets", type "assets"
//!     src/                <- asset sources (models, rendered viewer files)
//! ```
//!
//! # Invariants
//!
//! - Canister keys are derived deterministically from the project name;
//!   re-running scaffolding produces byte-identical manifests.
//! - The tree is never created partially. The whole subtree is staged in a
//!   scratch directory beside the target and renamed into place only after
//!   every stub and manifest is written, so a failure mid-creation cannot
//!   leave a manifest referencing nonexistent stub files.
//! - An existing tree is only replaced under `force`; the library layer
//!   never prompts (interactive confirmation lives in the CLI layer).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::chain::Chain;
use crate::core::session::{SessionError, SessionStore};

/// Source extension for contract stubs (Motoko).
pub const SOURCE_EXT: &str = "mo";

/// Manifest file name expected by the chain tooling.
pub const MANIFEST_FILE: &str = "dfx.json";

/// Errors from scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(
        "no active {chain} session; create one with 'cn new-project <name>' before scaffolding"
    )]
    NoActiveSession { chain: Chain },

    #[error("deployment '{0}' already exists; pass --force to overwrite")]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode manifest: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Contract-subtree manifest: names the NFT container canister and its
/// entry-point source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractManifest {
    pub canisters: BTreeMap<String, ContractCanister>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCanister {
    pub main: String,
}

/// Assets-subtree manifest: names the assets canister, its source
/// directories, and the env file the tooling writes canister ids into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsManifest {
    pub canisters: BTreeMap<String, AssetsCanister>,
    pub output_env_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsCanister {
    pub source: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Canister key for a project's contract manifest.
pub fn contract_canister_key(project: &str) -> String {
    format!("{}_nft_container", project)
}

/// Canister key for a project's assets manifest.
pub fn assets_canister_key(project: &str) -> String {
    format!("{}_assets", project)
}

impl ContractManifest {
    /// The manifest for a named project, keys derived from the name.
    pub fn for_project(project: &str) -> Self {
        let mut canisters = BTreeMap::new();
        canisters.insert(
            contract_canister_key(project),
            ContractCanister {
                main: format!("src/Main.{}", SOURCE_EXT),
            },
        );
        Self { canisters }
    }
}

impl AssetsManifest {
    /// The manifest for a named project, keys derived from the name.
    pub fn for_project(project: &str) -> Self {
        let mut canisters = BTreeMap::new();
        canisters.insert(
            assets_canister_key(project),
            AssetsCanister {
                source: vec!["src".to_string()],
                kind: "assets".to_string(),
            },
        );
        Self {
            canisters,
            output_env_file: ".env".to_string(),
        }
    }
}

/// Resolved on-disk locations of one project's deployment tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentLayout {
    project_dir: PathBuf,
}

impl DeploymentLayout {
    /// Layout for `project` under a session path.
    pub fn new(session_path: &Path, project: &str) -> Self {
        Self {
            project_dir: session_path.join(project),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn contract_dir(&self) -> PathBuf {
        self.project_dir.join("contract")
    }

    pub fn contract_manifest_path(&self) -> PathBuf {
        self.contract_dir().join(MANIFEST_FILE)
    }

    pub fn contract_src_dir(&self) -> PathBuf {
        self.contract_dir().join("src")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.project_dir.join("assets")
    }

    pub fn assets_manifest_path(&self) -> PathBuf {
        self.assets_dir().join(MANIFEST_FILE)
    }

    pub fn assets_src_dir(&self) -> PathBuf {
        self.assets_dir().join("src")
    }

    /// Whether the project tree is already materialized.
    pub fn exists(&self) -> bool {
        self.project_dir.exists()
    }
}

/// Materialize the deployment tree for `project` under the chain's active
/// session path.
///
/// # Errors
///
/// - `NoActiveSession` if the chain has no recorded session
/// - `AlreadyExists` if the target is present and `force` is false
///
/// Re-running with `force` replaces the existing tree and produces
/// byte-identical manifests.
pub fn init_deployment(
    store: &SessionStore,
    chain: Chain,
    project: &str,
    force: bool,
) -> Result<DeploymentLayout, ScaffoldError> {
    let session_path = store
        .get(chain)?
        .ok_or(ScaffoldError::NoActiveSession { chain })?;

    let layout = DeploymentLayout::new(&session_path, project);
    if layout.exists() && !force {
        return Err(ScaffoldError::AlreadyExists(layout.project_dir().to_path_buf()));
    }

    // Stage the complete tree beside the target, then swap it in. Stubs
    // are written before manifests so no manifest ever refers to a file
    // that is not on disk yet, even within the staging directory.
    let stage = session_path.join(format!(".{}.stage", project));
    if stage.exists() {
        remove_tree(&stage)?;
    }
    build_tree(&stage, project)?;

    if layout.exists() {
        remove_tree(layout.project_dir())?;
    }
    fs::rename(&stage, layout.project_dir()).map_err(|e| ScaffoldError::Io {
        path: layout.project_dir().to_path_buf(),
        source: e,
    })?;

    Ok(layout)
}

/// Write the full project tree under `root`.
fn build_tree(root: &Path, project: &str) -> Result<(), ScaffoldError> {
    let contract_src = root.join("contract").join("src");
    let assets_src = root.join("assets").join("src");
    create_dir(&contract_src)?;
    create_dir(&assets_src)?;

    // Empty stubs referenced by the contract manifest.
    write_file(&contract_src.join(format!("Main.{}", SOURCE_EXT)), "")?;
    write_file(&contract_src.join(format!("Types.{}", SOURCE_EXT)), "")?;

    let contract = ContractManifest::for_project(project);
    write_file(
        &root.join("contract").join(MANIFEST_FILE),
        &to_manifest_json(&contract)?,
    )?;

    let assets = AssetsManifest::for_project(project);
    write_file(
        &root.join("assets").join(MANIFEST_FILE),
        &to_manifest_json(&assets)?,
    )?;

    Ok(())
}

/// Canonical manifest encoding: pretty JSON with a trailing newline.
/// Keys sort deterministically through `BTreeMap`.
fn to_manifest_json<T: Serialize>(value: &T) -> Result<String, ScaffoldError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|e| ScaffoldError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    fs::write(path, contents).map_err(|e| ScaffoldError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn remove_tree(path: &Path) -> Result<(), ScaffoldError> {
    fs::remove_dir_all(path).map_err(|e| ScaffoldError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_session(dir: &TempDir) -> SessionStore {
        let store = SessionStore::new(dir.path());
        store
            .set(Chain::Icp, &dir.path().join("work"))
            .expect("set session");
        store
    }

    #[test]
    fn no_session_is_a_distinct_failure() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let err = init_deployment(&store, Chain::Icp, "dragon", false).unwrap_err();
        assert!(matches!(err, ScaffoldError::NoActiveSession { .. }));
    }

    #[test]
    fn creates_full_tree_with_derived_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_with_session(&dir);

        let layout = init_deployment(&store, Chain::Icp, "dragon", false).unwrap();

        assert!(layout.contract_src_dir().join("Main.mo").is_file());
        assert!(layout.contract_src_dir().join("Types.mo").is_file());
        assert!(layout.assets_src_dir().is_dir());

        let contract: ContractManifest = serde_json::from_str(
            &fs::read_to_string(layout.contract_manifest_path()).unwrap(),
        )
        .unwrap();
        assert!(contract.canisters.contains_key("dragon_nft_container"));
        assert_eq!(
            contract.canisters["dragon_nft_container"].main,
            "src/Main.mo"
        );

        let assets: AssetsManifest =
            serde_json::from_str(&fs::read_to_string(layout.assets_manifest_path()).unwrap())
                .unwrap();
        assert!(assets.canisters.contains_key("dragon_assets"));
        assert_eq!(assets.canisters["dragon_assets"].kind, "assets");
        assert_eq!(assets.canisters["dragon_assets"].source, vec!["src"]);
        assert_eq!(assets.output_env_file, ".env");
    }

    #[test]
    fn existing_tree_without_force_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_with_session(&dir);

        init_deployment(&store, Chain::Icp, "dragon", false).unwrap();
        let err = init_deployment(&store, Chain::Icp, "dragon", false).unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
    }

    #[test]
    fn forced_rerun_produces_byte_identical_manifests() {
        let dir = TempDir::new().unwrap();
        let store = store_with_session(&dir);

        let layout = init_deployment(&store, Chain::Icp, "dragon", true).unwrap();
        let contract_first = fs::read(layout.contract_manifest_path()).unwrap();
        let assets_first = fs::read(layout.assets_manifest_path()).unwrap();

        let layout = init_deployment(&store, Chain::Icp, "dragon", true).unwrap();
        assert_eq!(fs::read(layout.contract_manifest_path()).unwrap(), contract_first);
        assert_eq!(fs::read(layout.assets_manifest_path()).unwrap(), assets_first);
    }

    #[test]
    fn force_replaces_stale_content() {
        let dir = TempDir::new().unwrap();
        let store = store_with_session(&dir);

        let layout = init_deployment(&store, Chain::Icp, "dragon", false).unwrap();
        fs::write(layout.assets_src_dir().join("stale.glb"), b"old").unwrap();

        let layout = init_deployment(&store, Chain::Icp, "dragon", true).unwrap();
        assert!(!layout.assets_src_dir().join("stale.glb").exists());
    }

    #[test]
    fn no_stage_directory_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_with_session(&dir);

        init_deployment(&store, Chain::Icp, "dragon", false).unwrap();
        let session = store.get(Chain::Icp).unwrap().unwrap();
        assert!(!session.join(".dragon.stage").exists());
    }
}
