//! Shared fakes for tests

use async_trait::async_trait;
use hn_client::{Hit, SearchClient, SearchError, SearchResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum Reply {
    Hits(Vec<Hit>),
    Failure,
    /// One hit whose objectID is the requested url
    EchoUrl,
}

/// Search client returning canned replies and recording every url
pub struct FakeSearchClient {
    reply: Reply,
    delays: Mutex<VecDeque<Duration>>,
    urls: Arc<Mutex<Vec<String>>>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl FakeSearchClient {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            delays: Mutex::default(),
            urls: Arc::default(),
            completed: Arc::default(),
        }
    }

    pub fn with_hits(hits: Vec<Hit>) -> Self {
        Self::new(Reply::Hits(hits))
    }

    pub fn failing() -> Self {
        Self::new(Reply::Failure)
    }

    /// Answer each request with a hit keyed by its url, after the next delay
    ///
    /// Requests beyond the given delays answer immediately.
    pub fn echoing_after(delays: Vec<Duration>) -> Self {
        let client = Self::new(Reply::EchoUrl);
        *client.delays.lock().unwrap() = delays.into();
        client
    }

    /// Handle on the urls requested so far
    pub fn requested_urls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.urls)
    }

    /// Handle on the urls whose request ran to completion
    pub fn completed_urls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.completed)
    }
}

#[async_trait]
impl SearchClient for FakeSearchClient {
    async fn search(&self, url: &str) -> Result<SearchResponse, SearchError> {
        self.urls.lock().unwrap().push(url.to_string());

        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.lock().unwrap().push(url.to_string());

        let hits = match &self.reply {
            Reply::Hits(hits) => hits.clone(),
            Reply::EchoUrl => vec![Hit::new(url, url)],
            Reply::Failure => {
                return Err(SearchError::Status {
                    url: url.to_string(),
                    status: 500,
                })
            }
        };
        Ok(SearchResponse {
            hits,
            ..SearchResponse::default()
        })
    }
}
