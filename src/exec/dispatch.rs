//! exec::dispatch
//!
//! Concurrent execution of an unordered batch of independent commands.
//!
//! # Contract
//!
//! The batch is order-independent by the caller's contract: tasks share no
//! state and must not depend on each other's completion. Each command runs
//! as its own task on a bounded tokio worker pool with a per-task timeout;
//! one command's failure or timeout never cancels its siblings. The call
//! returns only after every task has resolved, with one outcome per
//! command **in submission order** — no failure is ever dropped silently.
//!
//! The public API is synchronous: the dispatcher builds its own runtime
//! for the duration of the call, the same way the CLI's sync commands wrap
//! their async internals.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinSet;

use crate::exec::runner::CommandResult;

/// Errors from dispatching one command within a batch.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("command '{command}' exceeded {timeout_secs}s and was abandoned")]
    Timeout { command: String, timeout_secs: u64 },

    #[error("task for '{command}' panicked or was cancelled")]
    Join { command: String },
}

/// Outcome of one dispatched command.
#[derive(Debug)]
pub struct BatchOutcome {
    pub command: String,
    pub result: Result<CommandResult, DispatchError>,
}

impl BatchOutcome {
    /// Whether the command ran to completion and exited zero.
    pub fn succeeded(&self) -> bool {
        matches!(&self.result, Ok(r) if r.success())
    }
}

/// Fixed-size worker pool for command batches.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    timeout: Duration,
    workers: usize,
}

impl Dispatcher {
    /// Dispatcher with the given per-task timeout and a pool bounded by
    /// host parallelism.
    pub fn new(timeout: Duration) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(2);
        Self { timeout, workers }
    }

    /// Override the worker-pool size (tests pin this down).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Run every command in `commands` against `cwd`, collecting one
    /// outcome per command in submission order.
    pub fn run_all(&self, commands: &[String], cwd: &Path) -> Vec<BatchOutcome> {
        if commands.is_empty() {
            return Vec::new();
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.workers.min(commands.len()))
            .enable_all()
            .build()
            .expect("failed to build dispatcher runtime");

        runtime.block_on(self.run_all_async(commands, cwd))
    }

    async fn run_all_async(&self, commands: &[String], cwd: &Path) -> Vec<BatchOutcome> {
        let mut set = JoinSet::new();
        for (index, command) in commands.iter().enumerate() {
            let command = command.clone();
            let cwd = cwd.to_path_buf();
            let timeout = self.timeout;
            set.spawn(async move {
                let result = run_one(&command, &cwd, timeout).await;
                (index, command, result)
            });
        }

        // Slots keyed by submission index; every task fills exactly one.
        let mut outcomes: Vec<Option<BatchOutcome>> = Vec::new();
        outcomes.resize_with(commands.len(), || None);

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, command, result)) => {
                    outcomes[index] = Some(BatchOutcome { command, result });
                }
                Err(_) => {
                    // A dead task never filled its slot; unfilled slots
                    // surface as Join errors below.
                }
            }
        }

        outcomes
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| BatchOutcome {
                    command: commands[index].clone(),
                    result: Err(DispatchError::Join {
                        command: commands[index].clone(),
                    }),
                })
            })
            .collect()
    }
}

/// Run one command with a timeout, capturing its output.
async fn run_one(
    command: &str,
    cwd: &PathBuf,
    timeout: Duration,
) -> Result<CommandResult, DispatchError> {
    let mut cmd = tokio::process::Command::from(crate::exec::runner::shell_command(command));
    cmd.current_dir(cwd);
    cmd.kill_on_drop(true);

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| DispatchError::Timeout {
            command: command.to_string(),
            timeout_secs: timeout.as_secs(),
        })?
        .map_err(|e| DispatchError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    Ok(CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
        command: command.to_string(),
    })
}
