use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Raw keys are logged by the keyboard middleware
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            Action::Stories(crate::actions::StoriesAction::FetchSuccess { request, hits }) => {
                // Payloads are large; log the shape only
                log::debug!("Action: Stories(FetchSuccess {{ request: {}, hits: {} }})", request, hits.len());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
