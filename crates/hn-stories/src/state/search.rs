//! Search state

/// Current search term and the url of the last committed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Endpoint the encoded term is appended to
    pub endpoint: String,
    /// What is typed in the input right now
    pub term: String,
    /// Url of the committed search; only a change of this triggers a fetch
    pub url: String,
}

impl SearchState {
    pub fn new(endpoint: impl Into<String>, term: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let term = term.into();
        let url = hn_client::search_url(&endpoint, &term);
        Self {
            endpoint,
            term,
            url,
        }
    }

    /// Url the current term would be committed as
    pub fn pending_url(&self) -> String {
        hn_client::search_url(&self.endpoint, &self.term)
    }

    /// Submitting is only possible with a non-empty term
    pub fn can_submit(&self) -> bool {
        !self.term.is_empty()
    }
}
