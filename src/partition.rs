use crate::classifier::SpamClassifier;
use crate::message::Message;
use serde::{Deserialize, Serialize};

/// Messages split into regular and spam, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub regular: Vec<Message>,
    pub spam: Vec<Message>,
}

impl ClassificationResult {
    pub fn total(&self) -> usize {
        self.regular.len() + self.spam.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Single pass over `messages`; every message lands in exactly one bucket.
pub fn partition<I>(messages: I) -> ClassificationResult
where
    I: IntoIterator<Item = Message>,
{
    let classifier = SpamClassifier::new();
    let mut result = ClassificationResult::default();

    for message in messages {
        if let Some(keyword) = classifier.first_match(&message.content) {
            log::debug!("Spam from '{}' (matched '{}')", message.sender, keyword);
            result.spam.push(message);
        } else {
            result.regular.push(message);
        }
    }

    result
}
