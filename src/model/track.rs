// Use 3rd party
use serde::{Deserialize, Serialize};

use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::ModelType;

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: Option<String>,
    pub duration_ms: Option<u32>,
    pub explicit: Option<bool>,
    pub popularity: Option<u8>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub is_playable: Option<bool>,
    pub is_local: Option<bool>,
    pub preview_url: Option<String>,
    pub artists: Option<Vec<Artist>>,
    pub album: Option<Box<Album>>,
    pub href: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<ModelType>,
}
