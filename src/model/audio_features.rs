// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::ModelType;

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: Option<String>,
    pub acousticness: Option<f32>,
    pub danceability: Option<f32>,
    pub energy: Option<f32>,
    pub instrumentalness: Option<f32>,
    pub liveness: Option<f32>,
    pub loudness: Option<f32>,
    pub speechiness: Option<f32>,
    pub valence: Option<f32>,
    pub tempo: Option<f32>,
    /// Pitch class, -1 when no key was detected.
    pub key: Option<i8>,
    /// 1 for major, 0 for minor.
    pub mode: Option<u8>,
    pub time_signature: Option<u8>,
    pub duration_ms: Option<u32>,
    pub uri: Option<String>,
    pub track_href: Option<String>,
    #[serde(rename = "type")]
    pub _type: Option<ModelType>,
}
