//! exec::runner
//!
//! Synchronous execution of a single shell command.
//!
//! # Contract
//!
//! Commands are spawned through the system shell (`sh -c` on Unix,
//! `cmd /C` on Windows) so the command string may contain pipes and
//! operators. stdout and stderr are captured separately and the exit code
//! is reported in the result. A non-zero exit is **not** an error at this
//! layer — several callers intentionally tolerate it (idempotent "stop"
//! commands); only a spawn failure is.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from running a command.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to spawn '{command}' in '{cwd}': {source}")]
    Spawn {
        command: String,
        cwd: PathBuf,
        source: std::io::Error,
    },
}

/// Captured outcome of one command.
///
/// Immutable once produced. `exit_code` is −1 when the process was
/// terminated by a signal and never reported a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub command: String,
}

impl CommandResult {
    /// Whether the command exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// stdout and stderr concatenated, for scanners that screen both.
    pub fn combined_output(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }
}

/// Run `command` through the system shell in `cwd`, blocking until it
/// exits and capturing its output.
pub fn run(command: &str, cwd: &Path) -> Result<CommandResult, RunError> {
    let output = shell_command(command)
        .current_dir(cwd)
        .output()
        .map_err(|e| RunError::Spawn {
            command: command.to_string(),
            cwd: cwd.to_path_buf(),
            source: e,
        })?;

    Ok(CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
        command: command.to_string(),
    })
}

/// Build the platform shell invocation for a command string.
pub(crate) fn shell_command(command: &str) -> Command {
    #[cfg(unix)]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn captures_stdout_and_exit_code() {
        let dir = TempDir::new().unwrap();
        let result = run("echo hello", dir.path()).unwrap();
        assert_eq!(result.stdout.trim(), "hello");
        assert_eq!(result.exit_code, 0);
        assert!(result.success());
        assert_eq!(result.command, "echo hello");
    }

    #[test]
    fn non_zero_exit_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let result = run("exit 3", dir.path()).unwrap();
        assert_eq!(result.exit_code, 3);
        assert!(!result.success());
    }

    #[test]
    fn shell_operators_work() {
        let dir = TempDir::new().unwrap();
        let result = run("printf 'a\\nb\\nc\\n' | wc -l", dir.path()).unwrap();
        assert_eq!(result.stdout.trim(), "3");
    }

    #[test]
    fn stderr_is_captured_separately() {
        let dir = TempDir::new().unwrap();
        let result = run("echo out; echo err >&2", dir.path()).unwrap();
        assert_eq!(result.stdout.trim(), "out");
        assert_eq!(result.stderr.trim(), "err");
    }

    #[test]
    fn runs_in_the_given_working_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("probe.txt"), "x").unwrap();
        let result = run("ls", dir.path()).unwrap();
        assert!(result.stdout.contains("probe.txt"));
    }

    #[test]
    fn combined_output_joins_streams() {
        let result = CommandResult {
            stdout: "one".into(),
            stderr: "two".into(),
            exit_code: 0,
            command: "test".into(),
        };
        assert_eq!(result.combined_output(), "one\ntwo");
    }
}
