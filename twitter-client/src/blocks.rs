// twitter-client/src/blocks.rs
use crate::error::Result;
use crate::http::HttpClient;
use crate::resource::Resource;
use crate::response::ApiResponse;
use crate::types::{null_as_default, Cursors, User};
use serde::{Deserialize, Serialize};

/// Parameters for `blocks/list`
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockListParams {
    #[serde(rename = "block_entities", skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockListResult {
    #[serde(flatten)]
    pub cursors: Cursors,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

/// Parameters for `blocks/ids`
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockIdsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stringify_ids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
}

/// Result of `blocks/ids`. With `stringify_ids` the ids arrive as strings;
/// numeric and string forms both decode here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockIdsResult {
    #[serde(flatten)]
    pub cursors: Cursors,
    #[serde(deserialize_with = "crate::friendships::lenient_ids")]
    pub ids: Vec<i64>,
}

/// Target of `blocks/create` and `blocks/destroy`: one of `screen_name` or
/// `user_id`
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
}

/// Block endpoints under `blocks/`
pub struct BlockService<'a, C: HttpClient> {
    resource: Resource<'a, C>,
}

impl<'a, C: HttpClient> BlockService<'a, C> {
    pub(crate) fn new(resource: Resource<'a, C>) -> Self {
        Self { resource }
    }

    /// Users the authenticating user is blocking
    pub async fn list(&self, params: &BlockListParams) -> Result<ApiResponse<BlockListResult>> {
        self.resource.get("list.json", Some(params)).await
    }

    pub async fn ids(&self, params: &BlockIdsParams) -> Result<ApiResponse<BlockIdsResult>> {
        self.resource.get("ids.json", Some(params)).await
    }

    /// Blocks the given user; also unfollows them if followed
    pub async fn create(&self, params: &BlockParams) -> Result<ApiResponse<User>> {
        self.resource.post("create.json", Some(params)).await
    }

    pub async fn destroy(&self, params: &BlockParams) -> Result<ApiResponse<User>> {
        self.resource.post("destroy.json", Some(params)).await
    }
}
