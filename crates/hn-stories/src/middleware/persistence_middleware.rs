//! Persistence Middleware
//!
//! Mirrors the search term to durable storage on every change. The term is
//! the only value that outlives the process.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_stories_config::{KeyValueStore, PersistentValue};

/// Middleware owning the persisted search term
pub struct PersistenceMiddleware {
    search_term: PersistentValue<Box<dyn KeyValueStore>>,
}

impl PersistenceMiddleware {
    pub fn new(search_term: PersistentValue<Box<dyn KeyValueStore>>) -> Self {
        Self { search_term }
    }
}

impl Middleware for PersistenceMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Search(SearchAction::SetTerm(term)) = action {
            if let Err(e) = self.search_term.set(term.as_str()) {
                // The session continues with the in-memory term
                log::error!(
                    "Failed to persist search term under {:?}: {:#}",
                    self.search_term.key(),
                    e
                );
            }
        }

        true
    }
}
