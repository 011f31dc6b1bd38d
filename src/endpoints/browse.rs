//! Endpoint functions related to browsing the catalog

// Use 3rd party
use async_trait::async_trait;
use serde::Deserialize;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::album::Album;
use crate::model::playlist::Playlist;
use crate::model::Paging;
use crate::requester::Requester;

#[derive(Deserialize)]
struct NewReleases {
    albums: Paging<Album>,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedPlaylists {
    pub message: Option<String>,
    pub playlists: Paging<Playlist>,
}

pub struct Browse {
    requester: Arc<Requester>,
}

impl Browse {
    pub const SEGMENT: &'static str = "browse";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn new_releases(&self, limit: Option<u32>) -> ClientResult<Paging<Album>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        let result: NewReleases = self
            .requester
            .get_as(&self.expanded_path(Some("new-releases")), &[("limit", limit.as_str())])
            .await?;
        Ok(result.albums)
    }

    pub async fn featured_playlists(&self, limit: Option<u32>) -> ClientResult<FeaturedPlaylists> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester
            .get_as(&self.expanded_path(Some("featured-playlists")), &[("limit", limit.as_str())])
            .await
    }
}

#[async_trait]
impl Endpoint for Browse {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
