// twitter-client/src/lib.rs
pub mod accounts;
pub mod blocks;
pub mod client;
pub mod error;
pub mod friendships;
pub mod http;
pub mod resource;
pub mod response;
pub mod types;

pub use client::{TwitterClient, DEFAULT_API_URL};
pub use error::{ApiError, Error, ErrorDetail, Result};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};
pub use resource::Resource;
pub use response::{decode, ApiResponse};
pub use types::{Cursors, User};

pub use accounts::{
    AccountService,
    AccountSettings,
    AccountSettingsParams,
    AccountUpdateProfileParams,
    AccountVerifyParams,
    PlaceType,
    SleepTime,
    TimeZone,
    TrendLocation,
};
pub use blocks::{
    BlockIdsParams,
    BlockIdsResult,
    BlockListParams,
    BlockListResult,
    BlockParams,
    BlockService,
};
pub use friendships::{
    FriendshipLookupParams,
    FriendshipLookupStatus,
    FriendshipPendingParams,
    FriendshipPendingResult,
    FriendshipService,
    FriendshipShowParams,
    FriendshipShowResult,
    FriendshipUpdateParams,
    Relationship,
    RelationshipSource,
    RelationshipTarget,
};

// Re-export reqwest client when feature is enabled
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
