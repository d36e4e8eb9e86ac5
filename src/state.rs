// Shared state handed to every request handler

use std::sync::Arc;
use tokio::sync::watch;

use crate::llm::LlmProvider;
use crate::supervisor::StartupPhase;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
    pub startup: watch::Receiver<StartupPhase>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>, startup: watch::Receiver<StartupPhase>) -> Self {
        Self { provider, startup }
    }

    /// State for deployments where the model server is managed elsewhere:
    /// the startup phase stays `Pending`.
    pub fn unsupervised(provider: Arc<dyn LlmProvider>) -> Self {
        let (_sender, startup) = watch::channel(StartupPhase::Pending);
        Self { provider, startup }
    }

    pub fn startup_phase(&self) -> StartupPhase {
        *self.startup.borrow()
    }
}
