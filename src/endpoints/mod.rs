//! Endpoints of the API, one per REST resource group.
//!
//! Every endpoint is bound to a route segment and to the [`Requester`] shared by the client.
//! The [`Endpoint`] trait gives each of them raw `get`/`post` passthroughs relative to that
//! segment; the concrete types add typed helpers on top.

pub mod albums;
pub mod artists;
pub mod audio_features;
pub mod browse;
pub mod me;
pub mod playlists;
pub mod recommendations;
pub mod search;
pub mod tracks;
pub mod users;

// Use 3rd party
use async_trait::async_trait;
use serde_json::Value;

// Use built-in library
use std::collections::HashMap;
use std::sync::Arc;

// Use internal modules
use crate::client::{ClientError, ClientResult};
use crate::requester::Requester;

/// Default page size of the typed helpers.
pub const DEFAULT_LIMIT: u32 = 20;

#[async_trait]
pub trait Endpoint: Send + Sync {
    /// Route segment the endpoint is published under, e.g. `"albums"`.
    fn segment(&self) -> &'static str;

    fn requester(&self) -> &Requester;

    /// `/<segment>/<path>`, skipping an absent or empty path.
    fn expanded_path(&self, path: Option<&str>) -> String {
        let parts: Vec<&str> = [Some(self.segment()), path]
            .iter()
            .flatten()
            .copied()
            .filter(|part| !part.is_empty())
            .collect();
        format!("/{}", parts.join("/"))
    }

    async fn get(&self, path: Option<&str>, query: &[(&str, &str)]) -> ClientResult<Value> {
        self.requester().get(&self.expanded_path(path), query).await
    }

    async fn post(
        &self,
        path: Option<&str>,
        query: &[(&str, &str)],
        payload: Option<&Value>,
    ) -> ClientResult<Value> {
        self.requester()
            .post(&self.expanded_path(path), query, payload)
            .await
    }
}

/// Endpoints by route segment. Filled once when the client is built.
#[derive(Default)]
pub struct EndpointRegistry {
    endpoints: HashMap<&'static str, Arc<dyn Endpoint>>,
}

impl EndpointRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the endpoint under its segment and hands back a typed handle to the same instance.
    pub fn attach<E>(&mut self, endpoint: E) -> ClientResult<Arc<E>>
    where
        E: Endpoint + 'static,
    {
        let endpoint = Arc::new(endpoint);
        self.register(endpoint.clone())?;
        Ok(endpoint)
    }

    pub fn register(&mut self, endpoint: Arc<dyn Endpoint>) -> ClientResult<()> {
        let name = endpoint.segment();
        if self.endpoints.contains_key(name) {
            return Err(ClientError::DuplicateEndpoint(name));
        }
        self.endpoints.insert(name, endpoint);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Endpoint> {
        self.endpoints.get(name).map(|endpoint| &**endpoint)
    }

    /// Registered segments, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.endpoints.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, mock_request_success, server};
    use crate::config::Config;
    use crate::endpoints::albums::Albums;
    use crate::endpoints::tracks::Tracks;
    use mockito::Matcher;
    use serde_json::json;

    fn requester() -> Arc<Requester> {
        Arc::new(Requester::new(&Config::default()))
    }

    #[test]
    fn expanded_path() {
        let tracks = Tracks::new(requester());
        assert_eq!(tracks.expanded_path(None), "/tracks");
        assert_eq!(tracks.expanded_path(Some("")), "/tracks");
        assert_eq!(tracks.expanded_path(Some("11dFghVXANMlKmJXsNCbNl")), "/tracks/11dFghVXANMlKmJXsNCbNl");
        assert_eq!(tracks.expanded_path(Some("1/extra")), "/tracks/1/extra");
    }

    #[test]
    fn registry_rejects_duplicate_names() {
        let requester = requester();
        let mut registry = EndpointRegistry::new();
        assert!(registry.is_empty());

        registry.attach(Albums::new(requester.clone())).unwrap();
        let result = registry.attach(Albums::new(requester));
        assert!(matches!(result, Err(ClientError::DuplicateEndpoint("albums"))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_hands_back_the_registered_instance() {
        let mut registry = EndpointRegistry::new();
        let tracks = registry.attach(Tracks::new(requester())).unwrap();
        let by_name = registry.get("tracks").unwrap();
        assert!(std::ptr::eq(
            Arc::as_ptr(&tracks) as *const u8,
            by_name as *const dyn Endpoint as *const u8,
        ));
        assert!(registry.get("albums").is_none());
    }

    #[tokio::test]
    async fn get_passthrough() {
        let mut server = server().await;
        let _mock = mock_request_success(
            &mut server,
            "GET",
            "/artists/0OdUWJ0sBjDrqHygGUXeCF/albums",
            Matcher::UrlEncoded("include_groups".into(), "single".into()),
            r#"{"items": []}"#,
        )
        .await;

        let client = client(&server);
        let result = client
            .endpoint("artists")
            .unwrap()
            .get(Some("0OdUWJ0sBjDrqHygGUXeCF/albums"), &[("include_groups", "single")])
            .await
            .unwrap();
        assert_eq!(result, json!({"items": []}));
    }

    #[tokio::test]
    async fn post_passthrough() {
        let mut server = server().await;
        let mock = server
            .mock("POST", "/playlists/3cEYpjA9oz9GiPac4AsH4n/tracks")
            .match_body(Matcher::Json(json!({"uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"]})))
            .with_status(201)
            .with_body(r#"{"snapshot_id": "JbtmHBDBAYu3/bt8BOXKjzKx3i0b6LCa/wVjyl6qQ2Yf6nFXkbmzuEa+ZI/U1yF+"}"#)
            .create_async()
            .await;

        let client = client(&server);
        let payload = json!({"uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"]});
        let result = client
            .endpoint("playlists")
            .unwrap()
            .post(Some("3cEYpjA9oz9GiPac4AsH4n/tracks"), &[], Some(&payload))
            .await
            .unwrap();
        assert!(result["snapshot_id"].is_string());
        mock.assert_async().await;
    }
}
