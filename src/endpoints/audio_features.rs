//! Endpoint functions related to audio features of tracks

// Use 3rd party
use async_trait::async_trait;
use serde::Deserialize;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::Endpoint;
use crate::model::audio_features::AudioFeatures as Features;
use crate::requester::Requester;

#[derive(Deserialize)]
struct FeaturesList {
    audio_features: Vec<Option<Features>>,
}

pub struct AudioFeatures {
    requester: Arc<Requester>,
}

impl AudioFeatures {
    pub const SEGMENT: &'static str = "audio-features";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn fetch(&self, track_id: &str) -> ClientResult<Features> {
        self.requester.get_as(&self.expanded_path(Some(track_id)), &[]).await
    }

    pub async fn several(&self, track_ids: &[&str]) -> ClientResult<Vec<Features>> {
        let ids = track_ids.join(",");
        let result: FeaturesList = self
            .requester
            .get_as(&self.expanded_path(None), &[("ids", ids.as_str())])
            .await?;
        Ok(result.audio_features.into_iter().flatten().collect())
    }
}

#[async_trait]
impl Endpoint for AudioFeatures {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client, mock_request_success, server};
    use mockito::Matcher;

    #[tokio::test]
    async fn fetch() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/audio-features/11dFghVXANMlKmJXsNCbNl",
            Matcher::Any,
            r#"{
                "id": "11dFghVXANMlKmJXsNCbNl",
                "danceability": 0.696,
                "energy": 0.905,
                "key": 2,
                "mode": 1,
                "tempo": 118.211,
                "time_signature": 4,
                "duration_ms": 207960,
                "type": "audio_features"
            }"#,
        )
        .await;

        let result = client(&server)
            .audio_features()
            .fetch("11dFghVXANMlKmJXsNCbNl")
            .await
            .unwrap();
        assert_eq!(result.key, Some(2));
        assert_eq!(result.mode, Some(1));
        assert_eq!(result.duration_ms, Some(207_960));
        assert!(result.liveness.is_none());
    }

    #[tokio::test]
    async fn several() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/audio-features",
            Matcher::UrlEncoded("ids".into(), "a,b".into()),
            r#"{"audio_features": [{"id": "a", "tempo": 90.0}, null]}"#,
        )
        .await;

        let result = client(&server).audio_features().several(&["a", "b"]).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_deref(), Some("a"));
    }
}
