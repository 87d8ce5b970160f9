//! Search Form Middleware
//!
//! Turns edits of the search input into new search terms and handles
//! submission:
//! - `Char` / `Backspace` / `ClearLine` compute the next term and dispatch
//!   `SearchAction::SetTerm`
//! - `Submit` commits a new request url when the term is non-empty and the url
//!   actually changed, then announces it with `Event::UrlChanged`

use crate::actions::{Action, Event, SearchAction, SearchFormAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware for the search form
pub struct SearchFormMiddleware;

impl SearchFormMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Commit the current term as the new request url
    fn submit_search(&self, state: &AppState, dispatcher: &Dispatcher) {
        if !state.search.can_submit() {
            log::debug!("Submit ignored: search term is empty");
            return;
        }

        let url = state.search.pending_url();
        if url == state.search.url {
            log::debug!("Submit ignored: url unchanged ({})", url);
            return;
        }

        log::info!("Searching for {:?}", state.search.term);
        dispatcher.dispatch(Action::Search(SearchAction::UrlCommitted(url.clone())));
        dispatcher.dispatch(Action::event(Event::UrlChanged(url)));
    }
}

impl Default for SearchFormMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for SearchFormMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::SearchForm(form_action) = action else {
            return true;
        };

        let term = &state.search.term;
        let next_term = match form_action {
            SearchFormAction::Char(c) => {
                let mut next = term.clone();
                next.push(*c);
                next
            }
            SearchFormAction::Backspace => {
                let mut next = term.clone();
                next.pop();
                next
            }
            SearchFormAction::ClearLine => String::new(),
            SearchFormAction::Submit => {
                self.submit_search(state, dispatcher);
                return false;
            }
            // Focus changes are plain state
            SearchFormAction::Focus | SearchFormAction::Blur | SearchFormAction::ToggleFocus => {
                return true;
            }
        };

        if &next_term != term {
            dispatcher.dispatch(Action::Search(SearchAction::SetTerm(next_term)));
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_stories_config::AppConfig;
    use std::sync::mpsc::{self, Receiver};

    fn setup(term: &str) -> (SearchFormMiddleware, AppState, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (
            SearchFormMiddleware::new(),
            AppState::new(term, &AppConfig::default()),
            Dispatcher::new(tx),
            rx,
        )
    }

    fn drain(rx: &Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }

    #[test]
    fn test_typing_sets_term() {
        let (mut mw, state, dispatcher, rx) = setup("Reac");

        assert!(!mw.handle(&Action::SearchForm(SearchFormAction::Char('t')), &state, &dispatcher));
        assert!(matches!(
            drain(&rx).as_slice(),
            [Action::Search(SearchAction::SetTerm(term))] if term == "React"
        ));
    }

    #[test]
    fn test_backspace_and_clear() {
        let (mut mw, state, dispatcher, rx) = setup("React");

        mw.handle(&Action::SearchForm(SearchFormAction::Backspace), &state, &dispatcher);
        mw.handle(&Action::SearchForm(SearchFormAction::ClearLine), &state, &dispatcher);

        let terms: Vec<String> = drain(&rx)
            .into_iter()
            .filter_map(|a| match a {
                Action::Search(SearchAction::SetTerm(t)) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(terms, vec!["Reac".to_string(), String::new()]);
    }

    #[test]
    fn test_backspace_on_empty_term_dispatches_nothing() {
        let (mut mw, state, dispatcher, rx) = setup("");
        mw.handle(&Action::SearchForm(SearchFormAction::Backspace), &state, &dispatcher);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_submit_with_empty_term_does_nothing() {
        let (mut mw, state, dispatcher, rx) = setup("");
        assert!(!mw.handle(&Action::SearchForm(SearchFormAction::Submit), &state, &dispatcher));
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_submit_with_unchanged_url_does_nothing() {
        let (mut mw, state, dispatcher, rx) = setup("React");
        mw.handle(&Action::SearchForm(SearchFormAction::Submit), &state, &dispatcher);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_submit_commits_new_url() {
        let (mut mw, mut state, dispatcher, rx) = setup("React");
        state.search.term = "Rust".into();

        mw.handle(&Action::SearchForm(SearchFormAction::Submit), &state, &dispatcher);

        let expected = "https://hn.algolia.com/api/v1/search?query=Rust".to_string();
        let actions = drain(&rx);
        assert_eq!(actions.len(), 2);
        assert!(matches!(&actions[0], Action::Search(SearchAction::UrlCommitted(u)) if *u == expected));
        assert!(matches!(&actions[1], Action::Event(Event::UrlChanged(u)) if *u == expected));
    }

    #[test]
    fn test_focus_passes_through() {
        let (mut mw, state, dispatcher, rx) = setup("React");
        assert!(mw.handle(&Action::SearchForm(SearchFormAction::Focus), &state, &dispatcher));
        assert!(drain(&rx).is_empty());
    }
}
