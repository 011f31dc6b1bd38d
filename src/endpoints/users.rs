//! Endpoint functions related to users

// Use 3rd party
use async_trait::async_trait;
use serde_json::json;

// Use built-in library
use std::sync::Arc;

use crate::client::ClientResult;
use crate::endpoints::{Endpoint, DEFAULT_LIMIT};
use crate::model::playlist::Playlist;
use crate::model::user::User;
use crate::model::Paging;
use crate::requester::Requester;

pub struct Users {
    requester: Arc<Requester>,
}

impl Users {
    pub const SEGMENT: &'static str = "users";

    pub fn new(requester: Arc<Requester>) -> Self {
        Self { requester }
    }

    pub async fn fetch(&self, user_id: &str) -> ClientResult<User> {
        self.requester.get_as(&self.expanded_path(Some(user_id)), &[]).await
    }

    pub async fn playlists(&self, user_id: &str, limit: Option<u32>) -> ClientResult<Paging<Playlist>> {
        let url = self.expanded_path(Some(&format!("{}/playlists", user_id)));
        let limit = limit.unwrap_or(DEFAULT_LIMIT).to_string();
        self.requester.get_as(&url, &[("limit", limit.as_str())]).await
    }

    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> ClientResult<Playlist> {
        let url = self.expanded_path(Some(&format!("{}/playlists", user_id)));
        let payload = json!({
            "name": name,
            "description": description,
            "public": public,
        });
        self.requester.post_as(&url, &[], Some(&payload)).await
    }
}

#[async_trait]
impl Endpoint for Users {
    fn segment(&self) -> &'static str {
        Self::SEGMENT
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
