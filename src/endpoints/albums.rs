//! Endpoint functions relating to albums

// Use 3rd party
use async_trait::async_trait;
use serde::Deserialize;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::album::Album;
use crate::model::track::Track;
use crate::model::Paging;
use crate::requester::Requester;

#[derive(Deserialize)]
struct AlbumList {
    albums: Vec<Option<Album>>,
}

pub struct Albums {
    requester: Arc<Requester>,
}

impl Albums {
    pub const SEGMENT: &'static str = "albums";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn fetch(&self, id: &str) -> ClientResult<Album> {
        self.requester.get_as(&self.expanded_path(Some(id)), &[]).await
    }

    /// Unknown IDs are left out of the result.
    pub async fn several(&self, ids: &[&str]) -> ClientResult<Vec<Album>> {
        let ids = ids.join(",");
        let result: AlbumList = self
            .requester
            .get_as(&self.expanded_path(None), &[("ids", ids.as_str())])
            .await?;
        Ok(result.albums.into_iter().flatten().collect())
    }

    pub async fn tracks(&self, id: &str, limit: Option<u32>) -> ClientResult<Paging<Track>> {
        let url = self.expanded_path(Some(&format!("{}/tracks", id)));
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester.get_as(&url, &[("limit", limit.as_str())]).await
    }
}

#[async_trait]
impl Endpoint for Albums {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
