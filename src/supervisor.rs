//! One-shot startup of the local Ollama server
//!
//! At process start the supervisor launches `ollama serve`, waits for it to
//! settle, then runs `ollama pull <model>`. Both steps are best effort: a
//! failure is logged and published as [`StartupPhase::Failed`], and the HTTP
//! listener keeps serving regardless. Nothing is retried.

use serde::{Deserialize, Serialize};
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::process::{Child, Command};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::AppConfig;

/// Progress of the startup sequence, as seen by the health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupPhase {
    /// Supervisor not started (or disabled)
    Pending,
    /// `ollama serve` spawned, settling
    Launching,
    /// Model pull in progress
    Pulling,
    /// Server launched and model available
    Ready,
    /// A step failed; stays here until the process restarts
    Failed,
}

/// Errors from the startup sequence
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("failed to launch '{bin} serve': {source}")]
    Launch {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pulling model '{model}' timed out after {timeout:?}")]
    PullTimedOut { model: String, timeout: Duration },

    #[error("pulling model '{model}' exited with {status}")]
    PullFailed { model: String, status: String },

    #[error("failed to run model pull: {0}")]
    Pull(#[from] std::io::Error),

    #[error("startup task aborted: {0}")]
    TaskAborted(String),
}

/// Launches the inference server and prepares the default model
#[derive(Debug)]
pub struct Supervisor {
    bin: String,
    model: String,
    settle_delay: Duration,
    pull_timeout: Duration,
    phase: watch::Sender<StartupPhase>,
    /// The `ollama serve` child. Written once, kept for the life of the
    /// process, never killed.
    process: Mutex<Option<Child>>,
}

/// Keeps the supervisor (and the server process it owns) alive
#[derive(Debug)]
pub struct SupervisorHandle {
    /// Owns the server process; only held, never read
    _supervisor: Arc<Supervisor>,
    task: JoinHandle<Result<(), SupervisorError>>,
}

impl SupervisorHandle {
    /// Wait for the startup sequence to finish and return its outcome
    pub async fn join(self) -> Result<(), SupervisorError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(SupervisorError::TaskAborted(e.to_string())),
        }
    }
}

impl Supervisor {
    /// Create a supervisor and the receiver that observes its phase
    pub fn new(config: &AppConfig) -> (Self, watch::Receiver<StartupPhase>) {
        let (phase, receiver) = watch::channel(StartupPhase::Pending);
        let supervisor = Self {
            bin: config.ollama_bin.clone(),
            model: config.model.clone(),
            settle_delay: config.settle_delay,
            pull_timeout: config.pull_timeout,
            phase,
            process: Mutex::new(None),
        };
        (supervisor, receiver)
    }

    /// Run the startup sequence on a detached task
    pub fn spawn(self) -> SupervisorHandle {
        let supervisor = Arc::new(self);
        let task = tokio::spawn({
            let supervisor = Arc::clone(&supervisor);
            async move { supervisor.run().await }
        });
        SupervisorHandle {
            _supervisor: supervisor,
            task,
        }
    }

    /// Launch the server, then pull the model. Publishes the phase as it goes.
    pub async fn run(&self) -> Result<(), SupervisorError> {
        let result = match self.launch().await {
            Ok(()) => self.pull().await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(()) => {
                info!(model = %self.model, "model server ready");
                self.phase.send_replace(StartupPhase::Ready);
            }
            Err(e) => {
                error!(error = %e, "model server startup failed");
                self.phase.send_replace(StartupPhase::Failed);
            }
        }
        result
    }

    async fn launch(&self) -> Result<(), SupervisorError> {
        info!(bin = %self.bin, "starting ollama server");
        self.phase.send_replace(StartupPhase::Launching);

        let mut child = Command::new(&self.bin)
            .arg("serve")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SupervisorError::Launch {
                bin: self.bin.clone(),
                source,
            })?;

        tokio::time::sleep(self.settle_delay).await;

        if let Ok(Some(status)) = child.try_wait() {
            // Usually means another server already owns the port
            warn!(%status, "ollama serve exited early; assuming a server is already running");
        } else {
            info!("ollama server started");
        }

        if let Ok(mut process) = self.process.lock() {
            *process = Some(child);
        }
        Ok(())
    }

    async fn pull(&self) -> Result<(), SupervisorError> {
        info!(model = %self.model, "pulling default model");
        self.phase.send_replace(StartupPhase::Pulling);

        let mut command = Command::new(&self.bin);
        command.arg("pull").arg(&self.model).kill_on_drop(true);

        let status = tokio::time::timeout(self.pull_timeout, command.status())
            .await
            .map_err(|_| SupervisorError::PullTimedOut {
                model: self.model.clone(),
                timeout: self.pull_timeout,
            })??;

        if !status.success() {
            return Err(SupervisorError::PullFailed {
                model: self.model.clone(),
                status: status.to_string(),
            });
        }

        info!(model = %self.model, "model pulled successfully");
        Ok(())
    }
}
