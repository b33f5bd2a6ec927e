use crate::partition::{partition, ClassificationResult};
use crate::state::MessageState;
use crate::store::MessageStore;
use std::sync::Arc;

pub const PERMISSION_NOTICE: &str = "SMS permissions are required to display messages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { regular: usize, spam: usize },
    PermissionDenied,
    StoreUnavailable,
}

/// Drives one load: read the store, classify, publish.
pub struct MessageLoader {
    store: Arc<dyn MessageStore>,
    state: MessageState,
}

impl MessageLoader {
    pub fn new(store: Arc<dyn MessageStore>, state: MessageState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &MessageState {
        &self.state
    }

    /// Run a full load on the blocking pool and publish the result.
    ///
    /// Runs to completion once started. Failures never propagate: a missing
    /// permission leaves the current state alone, a failing store publishes
    /// an empty result.
    pub async fn load_messages(&self) -> LoadOutcome {
        let store = Arc::clone(&self.store);
        let joined = tokio::task::spawn_blocking(move || Self::load_blocking(store.as_ref())).await;

        let (outcome, result) = match joined {
            Ok(loaded) => loaded,
            Err(e) => {
                log::error!("Message load task failed: {e}");
                (LoadOutcome::StoreUnavailable, Some(ClassificationResult::default()))
            }
        };

        if let Some(result) = result {
            self.state.publish(result);
        }

        outcome
    }

    fn load_blocking(store: &dyn MessageStore) -> (LoadOutcome, Option<ClassificationResult>) {
        if !store.has_read_permission() {
            log::error!("SMS permission not granted");
            return (LoadOutcome::PermissionDenied, None);
        }

        let messages = match store.load() {
            Ok(messages) => messages,
            Err(e) => {
                log::warn!("Message store unavailable, treating as empty: {e:#}");
                return (
                    LoadOutcome::StoreUnavailable,
                    Some(ClassificationResult::default()),
                );
            }
        };

        let result = partition(messages);
        log::info!(
            "Loaded {} messages: {} regular, {} spam",
            result.total(),
            result.regular.len(),
            result.spam.len()
        );

        (
            LoadOutcome::Loaded {
                regular: result.regular.len(),
                spam: result.spam.len(),
            },
            Some(result),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::store::{FileStore, InMemoryStore};

    fn inbox() -> Vec<Message> {
        vec![
            Message::new("+15550101", "Are we still on for lunch?", 1),
            Message::new("55555", "URGENT: claim your reward", 2),
            Message::new("+15550102", "Call me back", 3),
        ]
    }

    #[tokio::test]
    async fn test_load_publishes_partition() {
        let loader = MessageLoader::new(Arc::new(InMemoryStore::new(inbox())), MessageState::new());
        let mut receiver = loader.state().subscribe();

        let outcome = loader.load_messages().await;
        assert_eq!(outcome, LoadOutcome::Loaded { regular: 2, spam: 1 });

        assert!(receiver.has_changed().unwrap());
        let current = receiver.borrow_and_update().clone();
        assert_eq!(current.regular[0].sender, "+15550101");
        assert_eq!(current.regular[1].sender, "+15550102");
        assert_eq!(current.spam[0].sender, "55555");
    }

    #[tokio::test]
    async fn test_permission_denied_leaves_state_untouched() {
        let state = MessageState::new();
        state.publish(ClassificationResult {
            regular: vec![Message::new("kept", "previous load", 0)],
            spam: vec![],
        });

        let store = InMemoryStore::new(inbox()).with_permission(false);
        let loader = MessageLoader::new(Arc::new(store), state.clone());

        assert_eq!(loader.load_messages().await, LoadOutcome::PermissionDenied);
        assert_eq!(state.regular(), vec![Message::new("kept", "previous load", 0)]);
    }

    #[tokio::test]
    async fn test_store_failure_publishes_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let state = MessageState::new();
        state.publish(ClassificationResult {
            regular: vec![],
            spam: vec![Message::new("old", "win", 0)],
        });

        let store = FileStore::new(dir.path().join("missing.json"));
        let loader = MessageLoader::new(Arc::new(store), state.clone());

        assert_eq!(loader.load_messages().await, LoadOutcome::StoreUnavailable);
        assert!(state.current().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_inbox_publishes_empty_result() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"address": "+15550100", "body": "truncated"#).unwrap();

        let state = MessageState::new();
        state.publish(ClassificationResult {
            regular: vec![Message::new("old", "hello", 0)],
            spam: vec![],
        });

        let loader = MessageLoader::new(Arc::new(FileStore::new(file.path())), state.clone());

        assert_eq!(loader.load_messages().await, LoadOutcome::StoreUnavailable);
        assert!(state.current().is_empty());
    }

    #[tokio::test]
    async fn test_reload_recomputes_in_full() {
        let loader = MessageLoader::new(Arc::new(InMemoryStore::new(inbox())), MessageState::new());

        loader.load_messages().await;
        let first = loader.state().current();
        loader.load_messages().await;
        let second = loader.state().current();

        assert_eq!(*first, *second);
        assert_eq!(second.total(), 3);
    }
}
