pub mod classifier;
pub mod config;
pub mod loader;
pub mod message;
pub mod partition;
pub mod settings;
pub mod state;
pub mod store;
pub mod view;

pub use classifier::{classify, SpamClassifier, SPAM_KEYWORDS};
pub use config::Config;
pub use loader::{LoadOutcome, MessageLoader};
pub use message::{Message, RawMessage};
pub use partition::{partition, ClassificationResult};
pub use settings::{Settings, Theme};
pub use state::MessageState;
pub use store::{FileStore, InMemoryStore, MessageStore};
