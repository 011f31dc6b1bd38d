// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::{Followers, Image, ModelType};

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub product: Option<String>,
    pub followers: Option<Followers>,
    pub images: Option<Vec<Image>>,
    pub href: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<ModelType>,
}
