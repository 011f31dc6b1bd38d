//! Endpoint functions relateed to artists

// Use 3rd party
use async_trait::async_trait;
use serde::Deserialize;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::track::Track;
use crate::model::Paging;
use crate::requester::Requester;

#[derive(Deserialize)]
struct TrackList {
    tracks: Vec<Track>,
}

#[derive(Deserialize)]
struct ArtistList {
    artists: Vec<Artist>,
}

pub struct Artists {
    requester: Arc<Requester>,
}

impl Artists {
    pub const SEGMENT: &'static str = "artists";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn fetch(&self, id: &str) -> ClientResult<Artist> {
        self.requester.get_as(&self.expanded_path(Some(id)), &[]).await
    }

    pub async fn albums(&self, id: &str, limit: Option<u32>) -> ClientResult<Paging<Album>> {
        let url = self.expanded_path(Some(&format!("{}/albums", id)));
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester.get_as(&url, &[("limit", limit.as_str())]).await
    }

    /// `market` is an ISO 3166-1 alpha-2 country code.
    pub async fn top_tracks(&self, id: &str, market: &str) -> ClientResult<Vec<Track>> {
        let url = self.expanded_path(Some(&format!("{}/top-tracks", id)));
        let result: TrackList = self.requester.get_as(&url, &[("market", market)]).await?;
        Ok(result.tracks)
    }

    pub async fn related(&self, id: &str) -> ClientResult<Vec<Artist>> {
        let url = self.expanded_path(Some(&format!("{}/related-artists", id)));
        let result: ArtistList = self.requester.get_as(&url, &[]).await?;
        Ok(result.artists)
    }
}

#[async_trait]
impl Endpoint for Artists {
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
            "/artists/0TnOYISbd1XYRBk9myaseg",
            Matcher::Any,
            "tests/files/artist.json",
        )
        .await;

        let result: Artist = client(&server).artists().fetch("0TnOYISbd1XYRBk9myaseg").await.unwrap();
        let expected_result = Artist {
            id: Some("0TnOYISbd1XYRBk9myaseg".to_owned()),
            name: Some("Pitbull".to_owned()),
            ..Default::default()
        };
        assert_eq!(result.id, expected_result.id);
        assert_eq!(result.name, expected_result.name);
        assert_eq!(result.followers.unwrap().total, Some(10_466_512));
    }

    #[tokio::test]
    async fn albums() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/artists/0TnOYISbd1XYRBk9myaseg/albums",
            Matcher::UrlEncoded("limit".into(), "20".into()),
            r#"{"items": [{"id": "4aawyAB9vmqN3uQ7FjRGTy", "name": "Global Warming", "album_type": "album"}], "total": 1}"#,
        )
        .await;

        let result = client(&server)
            .artists()
            .albums("0TnOYISbd1XYRBk9myaseg", None)
            .await
            .unwrap();
        assert_eq!(result.items[0].name.as_deref(), Some("Global Warming"));
        assert_eq!(result.total, Some(1));
    }

    #[tokio::test]
    async fn top_tracks() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/artists/0TnOYISbd1XYRBk9myaseg/top-tracks",
            Matcher::UrlEncoded("market".into(), "ES".into()),
            r#"{"tracks": [{"id": "2bfGNzdiRa1jXZRdfssSzR", "name": "Timber"}]}"#,
        )
        .await;

        let result = client(&server)
            .artists()
            .top_tracks("0TnOYISbd1XYRBk9myaseg", "ES")
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name.as_deref(), Some("Timber"));
    }

    #[tokio::test]
    async fn related() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/artists/0TnOYISbd1XYRBk9myaseg/related-artists",
            Matcher::Any,
            r#"{"artists": [{"id": "7bXgB6jMjp9ATFy66eO08Z", "name": "Chris Brown"}, {"id": "1l7ZsJRRS8wlW3WfJfPfNS", "name": "Christina Aguilera"}]}"#,
        )
        .await;

        let result = client(&server).artists().related("0TnOYISbd1XYRBk9myaseg").await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].name.as_deref(), Some("Christina Aguilera"));
    }
}
