use super::ChatService;
use crate::models::Turn;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted chat service for tests.
///
/// Replies are consumed in order; once the script is exhausted the client
/// falls back to a canned reply. Every call's turns are recorded so tests
/// can assert on the assembled conversation.
pub struct MockChatClient {
    script: Arc<Mutex<VecDeque<Result<Option<String>>>>>,
    calls: Arc<Mutex<Vec<Vec<Turn>>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(Some(reply.into())));
        self
    }

    /// Scripts a successful upstream call that carried no usable text.
    pub fn with_empty_reply(self) -> Self {
        self.script.lock().unwrap().push_back(Ok(None));
        self
    }

    pub fn with_failure(self, error: Error) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Turns passed to each `generate_reply` call, in call order.
    pub fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn generate_reply(&self, turns: &[Turn]) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(turns.to_vec());

        match self.script.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(Some("رد تجريبي".to_string())),
        }
    }
}
