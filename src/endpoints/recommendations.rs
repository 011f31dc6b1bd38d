//! Endpoint functions related to recommendations

// Use 3rd party
use async_trait::async_trait;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::search::Recommendations as Recommended;
use crate::requester::Requester;

/// Seeds for a recommendation request. The API accepts up to five seeds in total.
#[derive(Clone, Debug, Default)]
pub struct Seeds<'a> {
    pub artists: &'a [&'a str],
    pub tracks: &'a [&'a str],
    pub genres: &'a [&'a str],
}

pub struct Recommendations {
    requester: Arc<Requester>,
}

impl Recommendations {
    pub const SEGMENT: &'static str = "recommendations";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn for_seeds(&self, seeds: &Seeds<'_>, limit: Option<u32>) -> ClientResult<Recommended> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        let artists = seeds.artists.join(",");
        let tracks = seeds.tracks.join(",");
        let genres = seeds.genres.join(",");

        // Empty seed groups are left out of the query
        let query: Vec<(&str, &str)> = [
            ("seed_artists", artists.as_str()),
            ("seed_tracks", tracks.as_str()),
            ("seed_genres", genres.as_str()),
            ("limit", limit.as_str()),
        ]
        .iter()
        .copied()
        .filter(|(_, value)| !value.is_empty())
        .collect();

        self.requester.get_as(&self.expanded_path(None), &query).await
    }
}

#[async_trait]
impl Endpoint for Recommendations {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
