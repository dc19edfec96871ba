use tc_core::types::DbId;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::{BlogPost, BlogProfile, BlogProject};

pub struct BlogApi;

impl BlogApi {
    pub async fn profile(gateway: &Gateway) -> ClientResult<BlogProfile> {
        gateway.get("/blog/profile").await
    }

    pub async fn posts(gateway: &Gateway) -> ClientResult<Vec<BlogPost>> {
        gateway.get("/blog/posts").await
    }

    pub async fn post(gateway: &Gateway, id: DbId) -> ClientResult<BlogPost> {
        gateway.get(&format!("/blog/posts/{id}")).await
    }

    pub async fn projects(gateway: &Gateway) -> ClientResult<Vec<BlogProject>> {
        gateway.get("/blog/projects").await
    }
}
