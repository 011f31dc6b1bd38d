//! Endpoint functions related to playlists

// Use 3rd party
use async_trait::async_trait;
use serde_json::json;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::playlist::{Playlist, PlaylistItem};
use crate::model::{Paging, SnapshotId};
use crate::requester::Requester;

pub struct Playlists {
    requester: Arc<Requester>,
}

impl Playlists {
    pub const SEGMENT: &'static str = "playlists";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn fetch(&self, id: &str) -> ClientResult<Playlist> {
        self.requester.get_as(&self.expanded_path(Some(id)), &[]).await
    }

    pub async fn tracks(&self, id: &str, limit: Option<u32>) -> ClientResult<Paging<PlaylistItem>> {
        let url = self.expanded_path(Some(&format!("{}/tracks", id)));
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester.get_as(&url, &[("limit", limit.as_str())]).await
    }

    /// Appends tracks given by URI (`spotify:track:<id>`) and returns the new snapshot of the
    /// playlist.
    pub async fn add_tracks(&self, id: &str, uris: &[&str]) -> ClientResult<SnapshotId> {
        let url = self.expanded_path(Some(&format!("{}/tracks", id)));
        let payload = json!({ "uris": uris });
        self.requester.post_as(&url, &[], Some(&payload)).await
    }
}

#[async_trait]
impl Endpoint for Playlists {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, mock_request_success, mock_request_success_from_file, server};
    use mockito::Matcher;

    #[tokio::test]
    async fn fetch() {
        let mut server = server().await;
        let _mock = mock_request_success_from_file(
            &mut server,
            "GET",
            "/playlists/3cEYpjA9oz9GiPac4AsH4n",
            Matcher::Any,
            "tests/files/playlist.json",
        )
        .await;

        let result: Playlist = client(&server)
            .playlists()
            .fetch("3cEYpjA9oz9GiPac4AsH4n")
            .await
            .unwrap();
        let expected_result = Playlist {
            id: Some("3cEYpjA9oz9GiPac4AsH4n".to_owned()),
            name: Some("Spotify Web API Testing playlist".to_owned()),
            ..Default::default()
        };
        assert_eq!(result.id, expected_result.id);
        assert_eq!(result.name, expected_result.name);
        assert_eq!(result.owner.unwrap().id.as_deref(), Some("jmperezperez"));

        let items = result.tracks.unwrap().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].track.as_ref().unwrap().name.as_deref(), Some("Api"));
        assert!(items[1].track.is_none());
    }

    #[tokio::test]
    async fn tracks() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/playlists/3cEYpjA9oz9GiPac4AsH4n/tracks",
            Matcher::UrlEncoded("limit".into(), "50".into()),
            r#"{"items": [{"added_at": "2015-01-15T12:39:22Z", "track": {"name": "Api"}}], "total": 5}"#,
        )
        .await;

        let result = client(&server)
            .playlists()
            .tracks("3cEYpjA9oz9GiPac4AsH4n", Some(50))
            .await
            .unwrap();
        assert_eq!(result.total, Some(5));
        assert_eq!(result.items[0].added_at.as_deref(), Some("2015-01-15T12:39:22Z"));
    }

    #[tokio::test]
    async fn add_tracks() {
        let mut server = server().await;
        let mock = server
            .mock("POST", "/playlists/3cEYpjA9oz9GiPac4AsH4n/tracks")
            .match_header("authorization", "Bearer access-token")
            .match_body(Matcher::Json(serde_json::json!({
                "uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh", "spotify:track:1301WleyT98MSxVHPZCA6M"]
            })))
            .with_status(201)
            .with_body(r#"{"snapshot_id": "abc"}"#)
            .create_async()
            .await;

        let result = client(&server)
            .playlists()
            .add_tracks(
                "3cEYpjA9oz9GiPac4AsH4n",
                &["spotify:track:4iV5W9uYEdYUVa79Axb7Rh", "spotify:track:1301WleyT98MSxVHPZCA6M"],
            )
            .await
            .unwrap();
        assert_eq!(result.snapshot_id, "abc");
        mock.assert_async().await;
    }
}
