// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::playlist::Playlist;
use crate::model::track::Track;
use crate::model::Paging;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        }
    }
}

/// Only the groups asked for in the search are present.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub albums: Option<Paging<Album>>,
    pub artists: Option<Paging<Artist>>,
    pub playlists: Option<Paging<Option<Playlist>>>,
    pub tracks: Option<Paging<Track>>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct RecommendationSeed {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<String>,
    #[serde(rename = "initialPoolSize")]
    pub initial_pool_size: Option<u32>,
    #[serde(rename = "afterFilteringSize")]
    pub after_filtering_size: Option<u32>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub seeds: Vec<RecommendationSeed>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}
