//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! owns the static catalog, the in-memory session store, and the live tutor
//! conversations and quiz runs. Nothing here survives a restart — there is
//! no persistence layer, so these maps play the role the browser's
//! session-local state played in the original prototype.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::services::quiz::QuizRun;
use crate::services::session::SessionStore;
use crate::services::tutor::Conversation;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    /// Live tutor conversations keyed by conversation ID.
    pub conversations: Arc<RwLock<HashMap<Uuid, Conversation>>>,
    /// In-progress quiz runs keyed by run ID.
    pub quiz_runs: Arc<RwLock<HashMap<Uuid, QuizRun>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Catalog::seed()),
            sessions: SessionStore::new(),
            conversations: Arc::new(RwLock::new(HashMap::new())),
            quiz_runs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
