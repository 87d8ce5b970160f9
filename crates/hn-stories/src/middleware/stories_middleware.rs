//! Stories Middleware
//!
//! Orchestrates the fetch lifecycle and the per-story commands:
//! - fetch on `Event::Mounted` (initial url) and on every `Event::UrlChanged`
//! - dismiss the selected story (local only, no network)
//! - open the selected story in the browser
//!
//! Each fetch gets a fresh `RequestId`. Starting a fetch aborts the task of
//! the previous one; the stories reducer additionally drops any response whose
//! id is no longer the current one.

use crate::actions::{Action, Event, RequestId, StoriesAction, StoryListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;
use anyhow::Context;
use hn_client::{Hit, SearchClient};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Middleware for fetching and manipulating stories
pub struct StoriesMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn SearchClient>,
    last_request: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl StoriesMiddleware {
    pub fn new(client: Arc<dyn SearchClient>) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            runtime,
            client,
            last_request: 0,
            in_flight: None,
        })
    }

    fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    /// Start fetching `url`, superseding any fetch still in flight
    fn fetch_stories(&mut self, url: &str, dispatcher: &Dispatcher) {
        let request = self.next_request();

        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                log::debug!("Aborting superseded fetch before starting {}", request);
                previous.abort();
            }
        }

        dispatcher.dispatch(Action::Stories(StoriesAction::FetchInit { request }));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let url = url.to_string();

        self.in_flight = Some(self.runtime.spawn(async move {
            log::debug!("Fetch {}: GET {}", request, url);
            match client.search(&url).await {
                Ok(response) => {
                    log::debug!(
                        "Fetch {}: {} hits ({:?} total)",
                        request,
                        response.hits.len(),
                        response.nb_hits
                    );
                    dispatcher.dispatch(Action::Stories(StoriesAction::FetchSuccess {
                        request,
                        hits: response.hits,
                    }));
                }
                Err(e) => {
                    log::error!("Fetch {} failed: {}", request, e);
                    dispatcher.dispatch(Action::Stories(StoriesAction::FetchFailure { request }));
                }
            }
        }));
    }

    /// Drop a story from the list; never touches the network
    fn remove_item(&self, hit: &Hit, dispatcher: &Dispatcher) {
        log::debug!("Dismissing story: {:?}", hit);
        dispatcher.dispatch(Action::Stories(StoriesAction::Remove {
            object_id: hit.object_id.clone(),
        }));
    }
}

impl Middleware for StoriesMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::Mounted) => {
                self.fetch_stories(&state.search.url, dispatcher);
                true
            }
            Action::Event(Event::UrlChanged(url)) => {
                self.fetch_stories(url, dispatcher);
                true
            }
            Action::StoryList(StoryListAction::DismissSelected) => {
                match state.selected_story() {
                    Some(hit) => self.remove_item(hit, dispatcher),
                    None => log::debug!("Nothing selected to dismiss"),
                }
                false
            }
            Action::StoryList(StoryListAction::OpenSelected) => {
                match state.selected_story() {
                    Some(hit) => {
                        self.runtime.spawn(open_url(hit.link()));
                    }
                    None => log::debug!("Nothing selected to open"),
                }
                false
            }
            _ => true,
        }
    }
}
