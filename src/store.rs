use crate::message::{Message, RawMessage};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Read-only access to the device message store.
pub trait MessageStore: Send + Sync {
    /// Whether the read permission has been granted.
    fn has_read_permission(&self) -> bool;

    /// All messages in the store's default order.
    fn load(&self) -> Result<Vec<Message>>;
}

/// Store backed by a fixed list of messages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    messages: Vec<Message>,
    permission_granted: bool,
}

impl InMemoryStore {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            permission_granted: true,
        }
    }

    pub fn with_permission(mut self, granted: bool) -> Self {
        self.permission_granted = granted;
        self
    }
}

impl MessageStore for InMemoryStore {
    fn has_read_permission(&self) -> bool {
        self.permission_granted
    }

    fn load(&self) -> Result<Vec<Message>> {
        Ok(self.messages.clone())
    }
}

/// Store backed by an exported inbox file: a list of rows with
/// `address`, `body` and `date` columns, as JSON or YAML.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    permission_granted: bool,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            permission_granted: true,
        }
    }

    pub fn with_permission(mut self, granted: bool) -> Self {
        self.permission_granted = granted;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
    }
}

impl MessageStore for FileStore {
    fn has_read_permission(&self) -> bool {
        self.permission_granted
    }

    fn load(&self) -> Result<Vec<Message>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read inbox: {}", self.path.display()))?;

        let rows: Vec<RawMessage> = if self.is_yaml() {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML inbox: {}", self.path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON inbox: {}", self.path.display()))?
        };

        log::debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows.into_iter().map(Message::from).collect())
    }
}
