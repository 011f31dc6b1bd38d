// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::track::Track;
use crate::model::user::User;
use crate::model::{Followers, Image, ModelType, Paging};

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub collaborative: Option<bool>,
    pub snapshot_id: Option<String>,
    pub owner: Option<User>,
    pub followers: Option<Followers>,
    pub images: Option<Vec<Image>>,
    /// Simplified playlists only carry `href` and `total` here.
    pub tracks: Option<Paging<PlaylistItem>>,
    pub href: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<ModelType>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub is_local: Option<bool>,
    pub track: Option<Track>,
}
