pub mod album;
pub mod artist;
pub mod audio_features;
pub mod playlist;
pub mod search;
pub mod track;
pub mod user;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Album,
    Artist,
    AudioFeatures,
    Episode,
    Playlist,
    Show,
    Track,
    User,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
    AppearsOn,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Image {
    pub url: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Followers {
    pub total: Option<u32>,
}

/// A page of items. `next` and `previous` are absolute URLs that can be passed back to the
/// requester as they are.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Paging<T> {
    pub href: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub limit: Option<u32>,
    pub next: Option<String>,
    pub offset: Option<u32>,
    pub previous: Option<String>,
    pub total: Option<u32>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: Vec::new(),
            limit: None,
            next: None,
            offset: None,
            previous: None,
            total: None,
        }
    }
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct SnapshotId {
    pub snapshot_id: String,
}
