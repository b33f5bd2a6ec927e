use crate::partition::ClassificationResult;
use std::sync::Arc;
use tokio::sync::watch;

/// Latest classification result, observable by any number of subscribers.
///
/// Both lists are published together as one value, so a subscriber never
/// sees the regular list from one load next to the spam list of another.
#[derive(Debug, Clone)]
pub struct MessageState {
    sender: watch::Sender<Arc<ClassificationResult>>,
}

impl Default for MessageState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageState {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Arc::new(ClassificationResult::default()));
        Self { sender }
    }

    pub fn publish(&self, result: ClassificationResult) {
        // send_replace stores the value even when nobody is subscribed
        self.sender.send_replace(Arc::new(result));
    }

    pub fn current(&self) -> Arc<ClassificationResult> {
        self.sender.borrow().clone()
    }

    pub fn regular(&self) -> Vec<crate::message::Message> {
        self.current().regular.clone()
    }

    pub fn spam(&self) -> Vec<crate::message::Message> {
        self.current().spam.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<ClassificationResult>> {
        self.sender.subscribe()
    }
}
