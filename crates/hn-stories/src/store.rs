use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Every action, whether it comes from the keyboard or from a finished fetch
/// task, is queued on one channel and processed here in order: first the
/// middleware chain, then the root reducer.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they execute in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Queue an action and process everything that is pending
    pub fn dispatch(&mut self, action: Action) {
        self.dispatcher.dispatch(action);
        self.process_pending();
    }

    /// Process all queued actions, including those queued while processing
    ///
    /// Returns the number of actions processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
            processed += 1;
        }
        processed
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // Events are for middleware observation only
        if should_reduce && !matches!(action, Action::Event(_)) {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Event, GlobalAction, SearchAction};
    use hn_stories_config::AppConfig;

    struct Recorder {
        seen: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
        consume_quit: bool,
    }

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            self.seen.lock().unwrap().push(format!("{:?}", action));
            if let Action::Event(Event::Mounted) = action {
                dispatcher.dispatch(Action::Search(SearchAction::SetTerm("from-event".into())));
            }
            !(self.consume_quit && matches!(action, Action::Global(GlobalAction::Quit)))
        }
    }

    fn store_with_recorder(consume_quit: bool) -> (Store, std::sync::Arc<std::sync::Mutex<Vec<String>>>) {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut store = Store::new(AppState::new("React", &AppConfig::default()));
        store.add_middleware(Box::new(Recorder {
            seen: seen.clone(),
            consume_quit,
        }));
        (store, seen)
    }

    #[test]
    fn test_actions_dispatched_by_middleware_are_processed() {
        let (mut store, seen) = store_with_recorder(false);

        store.dispatch(Action::event(Event::Mounted));

        assert_eq!(store.state().search.term, "from-event");
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_consumed_actions_do_not_reach_reducer() {
        let (mut store, _) = store_with_recorder(true);

        store.dispatch(Action::Global(GlobalAction::Quit));

        assert!(store.state().running);
    }

    #[test]
    fn test_actions_queued_from_outside_are_picked_up() {
        let (mut store, _) = store_with_recorder(false);
        let dispatcher = store.dispatcher().clone();

        std::thread::spawn(move || {
            dispatcher.dispatch(Action::Search(SearchAction::SetTerm("threaded".into())));
        })
        .join()
        .unwrap();

        assert_eq!(store.process_pending(), 1);
        assert_eq!(store.state().search.term, "threaded");
    }
}
