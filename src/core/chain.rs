//! core::chain
//!
//! Strong type for the blockchain backends the orchestrator can target.
//!
//! # Design
//!
//! Every chain-scoped operation (sessions, scaffolding, deploy commands)
//! is keyed by a [`Chain`] value rather than a raw string, so an unknown
//! backend cannot reach the session store or the dispatcher. Only the
//! Internet Computer backend is implemented today; the enum exists so new
//! backends slot in without touching call sites.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A named blockchain backend.
///
/// The chain name doubles as the session-marker key: the session store
/// persists the active project path for chain `icp` in `icp_session.txt`.
///
/// # Example
///
/// ```
/// use canistry::core::chain::Chain;
///
/// assert_eq!(Chain::Icp.as_str(), "icp");
/// assert_eq!(Chain::Icp.to_string(), "icp");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Internet Computer (canisters deployed through `dfx`)
    Icp,
}

impl Chain {
    /// The chain's canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Icp => "icp",
        }
    }

    /// File name of this chain's session marker.
    pub fn session_marker(&self) -> String {
        format!("{}_session.txt", self.as_str())
    }

    /// The external CLI tool that drives this chain's deployments.
    pub fn tool(&self) -> &'static str {
        match self {
            Chain::Icp => "dfx",
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Chain::Icp
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_keyed_by_chain_name() {
        assert_eq!(Chain::Icp.session_marker(), "icp_session.txt");
    }

    #[test]
    fn default_chain_is_icp() {
        assert_eq!(Chain::default(), Chain::Icp);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Chain::Icp).unwrap(), "\"icp\"");
    }
}
