// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::{Followers, Image, ModelType};

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub popularity: Option<u8>,
    pub followers: Option<Followers>,
    pub images: Option<Vec<Image>>,
    pub href: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<ModelType>,
}
