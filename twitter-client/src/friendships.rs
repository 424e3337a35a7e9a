// twitter-client/src/friendships.rs
use crate::error::Result;
use crate::http::HttpClient;
use crate::resource::{NoParams, Resource};
use crate::response::ApiResponse;
use crate::types::{null_as_default, Cursors, User};
use serde::{Deserialize, Deserializer, Serialize};

/// Relationship of the authenticating user to one looked-up user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendshipLookupStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub id_str: String,
    /// e.g. `following`, `followed_by`, `blocking`, `none`
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<String>,
}

/// Target user(s) of lookup, create and destroy. `lookup` accepts comma
/// separated lists of up to 100 values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FriendshipLookupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendshipShowResult {
    #[serde(deserialize_with = "null_as_default")]
    pub relationship: Relationship,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    #[serde(deserialize_with = "null_as_default")]
    pub target: RelationshipTarget,
    #[serde(deserialize_with = "null_as_default")]
    pub source: RelationshipSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipTarget {
    #[serde(deserialize_with = "null_as_default")]
    pub id_str: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub following: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub followed_by: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipSource {
    #[serde(deserialize_with = "null_as_default")]
    pub can_dm: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub blocking: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muting: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id_str: String,
    #[serde(deserialize_with = "null_as_default")]
    pub all_replies: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub want_retweets: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub marked_spam: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub following: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub followed_by: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FriendshipShowParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_screen_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_screen_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

/// Parameters for the pending request listings (`incoming`, `outgoing`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct FriendshipPendingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stringify_ids: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendshipPendingResult {
    #[serde(flatten)]
    pub cursors: Cursors,
    #[serde(deserialize_with = "lenient_ids")]
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FriendshipUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Enable/disable device notifications from the target user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<bool>,
    /// Enable/disable retweets from the target user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retweets: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Id lists come back numeric, or as strings when `stringify_ids` is set.
pub(crate) fn lenient_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawId>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|id| match id {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid id: {}", s))),
        })
        .collect()
}

/// Friendship endpoints under `friendships/`
pub struct FriendshipService<'a, C: HttpClient> {
    resource: Resource<'a, C>,
}

impl<'a, C: HttpClient> FriendshipService<'a, C> {
    pub(crate) fn new(resource: Resource<'a, C>) -> Self {
        Self { resource }
    }

    /// Relationships of the authenticating user to the given users
    pub async fn lookup(
        &self,
        params: &FriendshipLookupParams,
    ) -> Result<ApiResponse<Vec<FriendshipLookupStatus>>> {
        self.resource.get("lookup.json", Some(params)).await
    }

    /// Detailed relationship between two arbitrary users
    pub async fn show(
        &self,
        params: &FriendshipShowParams,
    ) -> Result<ApiResponse<FriendshipShowResult>> {
        self.resource.get("show.json", Some(params)).await
    }

    /// Ids of every user with a pending request to follow the
    /// authenticating user
    pub async fn incoming(
        &self,
        params: &FriendshipPendingParams,
    ) -> Result<ApiResponse<FriendshipPendingResult>> {
        self.resource.get("incoming.json", Some(params)).await
    }

    /// Ids of every protected user the authenticating user has a pending
    /// follow request for
    pub async fn outgoing(
        &self,
        params: &FriendshipPendingParams,
    ) -> Result<ApiResponse<FriendshipPendingResult>> {
        self.resource.get("outgoing.json", Some(params)).await
    }

    /// Ids of users the authenticating user does not want retweets from
    pub async fn no_retweets(&self) -> Result<ApiResponse<Vec<i64>>> {
        self.resource
            .get::<NoParams, _>("no_retweets/ids.json", None)
            .await
    }

    /// Follow the given user
    pub async fn create(&self, params: &FriendshipLookupParams) -> Result<ApiResponse<User>> {
        self.resource.post("create.json", Some(params)).await
    }

    /// Unfollow the given user
    pub async fn destroy(&self, params: &FriendshipLookupParams) -> Result<ApiResponse<User>> {
        self.resource.post("destroy.json", Some(params)).await
    }

    /// Enable or disable retweets and device notifications from a user
    pub async fn update(
        &self,
        params: &FriendshipUpdateParams,
    ) -> Result<ApiResponse<FriendshipShowResult>> {
        self.resource.post("update.json", Some(params)).await
    }
}
