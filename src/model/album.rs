// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::artist::Artist;
use crate::model::track::Track;
use crate::model::{AlbumType, Image, ModelType, Paging};

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: Option<String>,
    pub album_type: Option<AlbumType>,
    pub total_tracks: Option<u32>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub label: Option<String>,
    pub popularity: Option<u8>,
    pub genres: Option<Vec<String>>,
    pub artists: Option<Vec<Artist>>,
    pub images: Option<Vec<Image>>,
    /// Only present on full album objects.
    pub tracks: Option<Paging<Track>>,
    pub href: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<ModelType>,
}
