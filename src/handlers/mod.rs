// Handlers module

pub mod chat;
pub mod health;
pub mod index;
pub mod rejection;

pub use chat::chat_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use rejection::handle_rejection;

#[cfg(test)]
pub(crate) mod fake {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::llm::{GenerateRequest, GenerateResult, LlmError, LlmProvider};

    /// Scripted provider that records what it was asked
    pub struct FakeProvider {
        reply: Mutex<Option<Result<String, LlmError>>>,
        reachable: bool,
        pub calls: AtomicUsize,
        pub last_request: Mutex<Option<GenerateRequest>>,
    }

    impl FakeProvider {
        pub fn replying(text: &str) -> Self {
            Self::new(Ok(text.to_string()), true)
        }

        pub fn failing(err: LlmError) -> Self {
            Self::new(Err(err), false)
        }

        fn new(reply: Result<String, LlmError>, reachable: bool) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                reachable,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResult, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            let reply = self
                .reply
                .lock()
                .unwrap()
                .take()
                .expect("fake provider called more than once");
            reply.map(|text| GenerateResult { text, done: true })
        }

        async fn ping(&self) -> Result<(), LlmError> {
            if self.reachable {
                Ok(())
            } else {
                Err(LlmError::Transport("connection refused".to_string()))
            }
        }
    }
}
