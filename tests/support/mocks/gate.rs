// tests/support/mocks/gate.rs
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use mokkan_client::application::{ApplicationError, ApplicationResult};
use tokio::sync::oneshot;

/// Scripted responses for one endpoint, keyed by request argument. Each
/// request takes the oldest response queued for its key and waits until the
/// test releases it.
pub struct Gates<T> {
    pending: Mutex<HashMap<String, VecDeque<oneshot::Receiver<ApplicationResult<T>>>>>,
}

impl<T> Default for Gates<T> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> Gates<T> {
    /// Queues a response for `key` that is held back until the returned
    /// sender is used.
    pub fn open(&self, key: &str) -> oneshot::Sender<ApplicationResult<T>> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    /// Queues a response for `key` that is available immediately.
    pub fn respond(&self, key: &str, result: ApplicationResult<T>) {
        let tx = self.open(key);
        let _ = tx.send(result);
    }

    pub async fn wait(&self, key: &str) -> ApplicationResult<T> {
        let rx = self
            .pending
            .lock()
            .unwrap()
            .get_mut(key)
            .and_then(VecDeque::pop_front);
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApplicationError::infrastructure("gate dropped"))),
            None => Err(ApplicationError::infrastructure(format!(
                "no response scripted for {key}"
            ))),
        }
    }
}
