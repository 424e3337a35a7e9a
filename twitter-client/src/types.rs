// twitter-client/src/types.rs
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire format of `created_at`, e.g. `Thu Mar 01 00:16:47 +0000 2012`
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Decode `null` the same as a missing key: the type's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Twitter user object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub contributors_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_profile: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub default_profile_image: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub favourites_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub follow_request_sent: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub following: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub followers_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub friends_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub id_str: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_translator: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(deserialize_with = "null_as_default")]
    pub listed_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_background_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_background_image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_background_image_url_https: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_background_tile: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_banner_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_image_url_https: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_link_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_sidebar_border_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_sidebar_fill_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_text_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_use_background_image: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub protected: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_all_inline_media: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub statuses_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub utc_offset: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub withheld_in_countries: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub withheld_scope: String,
}

impl User {
    /// Parse `created_at`; `None` when absent or not in the wire format
    pub fn created_at_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT).ok()
    }
}

/// Cursor fields shared by every cursored listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursors {
    #[serde(deserialize_with = "null_as_default")]
    pub previous_cursor: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_cursor_str: String,
    #[serde(deserialize_with = "null_as_default")]
    pub next_cursor: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub next_cursor_str: String,
}

impl Cursors {
    /// Twitter signals the last page with a zero next cursor
    pub fn has_next(&self) -> bool {
        self.next_cursor != 0
    }
}
