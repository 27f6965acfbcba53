//! Page sessions: the server-side half of a mounted page's local UI state.
//!
//! Each mounted page gets a random id. Actions on that page address the
//! session by id; a reload mounts a new one. The store is bounded and drops
//! the oldest session once full.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

pub struct SessionStore<T> {
    inner: RwLock<Inner<T>>,
    capacity: usize,
}

struct Inner<T> {
    sessions: HashMap<Uuid, Arc<Mutex<T>>>,
    order: VecDeque<Uuid>,
}

impl<T> SessionStore<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner { sessions: HashMap::new(), order: VecDeque::new() }),
            capacity: capacity.max(1),
        }
    }

    /// Store a freshly mounted page. Returns its id and a handle that stays
    /// valid even if the entry is evicted before the caller renders it.
    pub async fn insert(&self, value: T) -> (Uuid, Arc<Mutex<T>>) {
        let id = Uuid::new_v4();
        let mut inner = self.inner.write().await;
        while inner.order.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.sessions.remove(&oldest);
                debug!(session = %oldest, "Evicted page session");
            }
        }
        let page = Arc::new(Mutex::new(value));
        inner.sessions.insert(id, page.clone());
        inner.order.push_back(id);
        (id, page)
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Mutex<T>>> {
        self.inner.read().await.sessions.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
