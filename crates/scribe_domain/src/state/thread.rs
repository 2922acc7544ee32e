use super::{AssistantId, ThreadId};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct Thread {
    pub id: ThreadId,
    pub name: String,
    pub assistant_id: AssistantId,
    pub created_at: DateTime<Utc>,
}

/// Threads unique by id, kept ordered newest-first by creation time.
#[derive(Clone, Debug, Default)]
pub struct ThreadList {
    items: Vec<Thread>,
}

impl ThreadList {
    pub fn replace_all(&mut self, threads: Vec<Thread>) {
        self.items.clear();
        for thread in threads {
            self.insert(thread);
        }
    }

    /// Inserts at the position its creation time calls for. A thread whose
    /// id is already present is dropped.
    pub fn insert(&mut self, thread: Thread) {
        if self.contains(&thread.id) {
            return;
        }
        let at = self
            .items
            .iter()
            .position(|existing| existing.created_at < thread.created_at)
            .unwrap_or(self.items.len());
        self.items.insert(at, thread);
    }

    /// Replaces the stored thread with the same id, re-deriving order in
    /// case the creation time changed. No-op when the id is unknown.
    pub fn update(&mut self, thread: Thread) {
        let Some(at) = self.items.iter().position(|t| t.id == thread.id) else {
            return;
        };
        self.items.remove(at);
        let at = self
            .items
            .iter()
            .position(|existing| existing.created_at < thread.created_at)
            .unwrap_or(self.items.len());
        self.items.insert(at, thread);
    }

    pub fn remove(&mut self, id: &ThreadId) -> bool {
        let Some(at) = self.items.iter().position(|t| &t.id == id) else {
            return false;
        };
        self.items.remove(at);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &ThreadId) -> Option<&Thread> {
        self.items.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &ThreadId) -> bool {
        self.items.iter().any(|t| &t.id == id)
    }

    pub fn as_slice(&self) -> &[Thread] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
