//! Navigation Translation Middleware
//!
//! Translates generic Navigation and ViewContext actions into view-specific
//! actions using the active view's translate methods.
//!
//! This ensures translated actions go through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates Navigation and ViewContext actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let translated = match action {
            Action::Navigate(nav) => state
                .active_view()
                .and_then(|view| view.translate_navigation(*nav)),
            Action::ViewContext(context) => state
                .active_view()
                .and_then(|view| view.translate_context_action(*context, state)),
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "NavigationMiddleware: Translating {:?} to {:?}",
                    action,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Action not handled by active view: {:?}", action),
        }

        // Generic actions never reach the reducer
        false
    }
}
