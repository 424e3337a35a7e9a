// twitter-client/src/client.rs
use crate::accounts::AccountService;
use crate::blocks::BlockService;
use crate::friendships::FriendshipService;
use crate::http::HttpClient;
use crate::resource::Resource;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1.1/";

/// Entry point to the REST API.
///
/// Holds the authenticated transport and the versioned root URL, and hands
/// out one service per resource group. Services borrow the client, so they
/// are cheap to create per call.
pub struct TwitterClient<C: HttpClient> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> TwitterClient<C> {
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_API_URL)
    }

    /// Use a different API root, e.g. a proxy or a local mock server
    pub fn with_base_url(http: C, base_url: &str) -> Self {
        Self {
            http,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Request issuer for an arbitrary group prefix such as `"mutes/users/"`
    pub fn resource(&self, prefix: &str) -> Resource<'_, C> {
        Resource::new(&self.http, &self.base_url, prefix)
    }

    pub fn accounts(&self) -> AccountService<'_, C> {
        AccountService::new(self.resource("account/"))
    }

    pub fn blocks(&self) -> BlockService<'_, C> {
        BlockService::new(self.resource("blocks/"))
    }

    pub fn friendships(&self) -> FriendshipService<'_, C> {
        FriendshipService::new(self.resource("friendships/"))
    }
}
