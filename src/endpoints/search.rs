//! Endpoint functions related to search

// Use 3rd party
use async_trait::async_trait;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::Endpoint;
use crate::model::search::{SearchResults, SearchType};
use crate::requester::Requester;

const SEARCH_LIMIT: u32 = 10;

pub struct Search {
    requester: Arc<Requester>,
}

impl Search {
    pub const SEGMENT: &'static str = "search";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    /// Searches the catalog; only the groups in `types` are filled in the results.
    pub async fn find(
        &self,
        term: &str,
        types: &[SearchType],
        limit: Option<u32>,
    ) -> ClientResult<SearchResults> {
        let types: Vec<&str> = types.iter().map(|search_type| search_type.as_str()).collect();
        let types = types.join(",");
        let limit = limit.unwrap_or(SEARCH_LIMIT).to_string();
        let params = [("q", term), ("type", types.as_str()), ("limit", limit.as_str())];
        self.requester.get_as(&self.expanded_path(None), &params).await
    }
}

#[async_trait]
impl Endpoint for Search {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
