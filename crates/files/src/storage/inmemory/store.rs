use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use stash_core::objects::{ObjectStore, Result};

/// In-memory object store for testing and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    objects: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl InMemoryObjectStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `body` under `key`, replacing any previous object.
    pub async fn put_object(&self, key: impl Into<String>, body: impl Into<Bytes>) {
        let mut objects = self.objects.write().await;
        objects.insert(key.into(), body.into());
    }

    /// Loads every file under `root`, keyed by its `/`-separated relative path.
    ///
    /// Returns the number of objects loaded.
    pub async fn load_dir(&self, root: &Path) -> std::io::Result<usize> {
        let mut pending = vec![root.to_path_buf()];
        let mut loaded = 0;

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Ok(relative) = path.strip_prefix(root) else {
                    continue;
                };
                let key = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                let body = tokio::fs::read(&path).await?;
                self.put_object(key, body).await;
                loaded += 1;
            }
        }

        Ok(loaded)
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn get_object(&self, key: &str) -> Result<Option<Bytes>> {
        let objects = self.objects.read().await;
        Ok(objects.get(key).cloned())
    }
}
