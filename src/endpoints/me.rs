//! Endpoint functions related to the current user

// Use 3rd party
use async_trait::async_trait;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::playlist::Playlist;
use crate::model::track::Track;
use crate::model::user::User;
use crate::model::Paging;
use crate::requester::Requester;

pub struct Me {
    requester: Arc<Requester>,
}

impl Me {
    pub const SEGMENT: &'static str = "me";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn profile(&self) -> ClientResult<User> {
        self.requester.get_as(&self.expanded_path(None), &[]).await
    }

    pub async fn playlists(&self, limit: Option<u32>) -> ClientResult<Paging<Playlist>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester
            .get_as(&self.expanded_path(Some("playlists")), &[("limit", limit.as_str())])
            .await
    }

    pub async fn top_tracks(&self, limit: Option<u32>) -> ClientResult<Paging<Track>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester
            .get_as(&self.expanded_path(Some("top/tracks")), &[("limit", limit.as_str())])
            .await
    }
}

#[async_trait]
impl Endpoint for Me {
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
    async fn profile() {
        let mut server = server().await;
        let mock = server
            .mock("GET", "/me")
            .match_header("authorization", "Bearer access-token")
            .with_body(r#"{"id": "smedjan", "display_name": "Lilla Namo", "country": "SE", "product": "premium", "type": "user"}"#)
            .create_async()
            .await;

        let result = client(&server).me().profile().await.unwrap();
        assert_eq!(result.id.as_deref(), Some("smedjan"));
        assert_eq!(result.country.as_deref(), Some("SE"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn playlists() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/me/playlists",
            Matcher::UrlEncoded("limit".into(), "20".into()),
            r#"{"items": [{"id": "3cEYpjA9oz9GiPac4AsH4n", "name": "Spotify Web API Testing playlist"}], "total": 1}"#,
        )
        .await;

        let result = client(&server).me().playlists(None).await.unwrap();
        assert_eq!(result.items[0].id.as_deref(), Some("3cEYpjA9oz9GiPac4AsH4n"));
    }

    #[tokio::test]
    async fn top_tracks() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/me/top/tracks",
            Matcher::UrlEncoded("limit".into(), "1".into()),
            r#"{"items": [{"id": "4iV5W9uYEdYUVa79Axb7Rh", "name": "New Noise"}], "limit": 1}"#,
        )
        .await;

        let result = client(&server).me().top_tracks(Some(1)).await.unwrap();
        assert_eq!(result.items[0].name.as_deref(), Some("New Noise"));
    }
}
