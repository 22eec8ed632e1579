use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::questionnaire::engine::{EngineError, Questionnaire};
use crate::questionnaire::models::Question;
use crate::recommendation::board::ResultsBoard;

/// One user's questionnaire and results. Lives only in memory.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub questionnaire: Questionnaire,
    pub results: ResultsBoard,
}

impl Session {
    /// The "try again" path: back to the first question with no results.
    pub fn restart(&mut self) {
        self.questionnaire.restart();
        self.results.reset();
    }
}

pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    handle: SessionHandle,
    last_seen: Instant,
}

/// In-memory session registry. Each session carries its own lock so that
/// concurrent users never contend with each other.
///
/// Sessions idle for longer than the configured TTL are dropped by
/// [`spawn_sweeper`]. A session whose handle is still held by a request or
/// a pending generative call is never dropped.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, questions: Arc<[Question]>) -> Result<SessionHandle, EngineError> {
        let session = Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            questionnaire: Questionnaire::new(questions)?,
            results: ResultsBoard::new(),
        };
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));

        self.sessions.write().await.insert(
            id,
            Entry {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        info!("Session {id} started");
        Ok(handle)
    }

    /// Looks up a session and marks it as active.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(entry.handle.clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions not touched within `ttl`. Returns how many were removed.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| {
            entry.last_seen.elapsed() < ttl || Arc::strong_count(&entry.handle) > 1
        });
        before - sessions.len()
    }
}

/// Runs [`SessionStore::evict_idle`] every `every` for the life of the process.
pub fn spawn_sweeper(store: SessionStore, ttl: Duration, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(ttl).await;
            if evicted > 0 {
                info!(
                    "Evicted {evicted} idle sessions; {} remaining",
                    store.len().await
                );
            } else {
                debug!("Session sweep: nothing to evict");
            }
        }
    })
}
