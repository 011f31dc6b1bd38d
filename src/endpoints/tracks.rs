//! Endpoint functions related to tracks

// Use 3rd party
use async_trait::async_trait;
use serde::Deserialize;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::Endpoint;
use crate::model::track::Track;
use crate::requester::Requester;

#[derive(Deserialize)]
struct TrackList {
    tracks: Vec<Option<Track>>,
}

pub struct Tracks {
    requester: Arc<Requester>,
}

impl Tracks {
    pub const SEGMENT: &'static str = "tracks";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn fetch(&self, id: &str) -> ClientResult<Track> {
        self.requester.get_as(&self.expanded_path(Some(id)), &[]).await
    }

    /// Unknown IDs are left out of the result.
    pub async fn several(&self, ids: &[&str]) -> ClientResult<Vec<Track>> {
        let ids = ids.join(",");
        let result: TrackList = self
            .requester
            .get_as(&self.expanded_path(None), &[("ids", ids.as_str())])
            .await?;
        Ok(result.tracks.into_iter().flatten().collect())
    }
}

#[async_trait]
impl Endpoint for Tracks {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
