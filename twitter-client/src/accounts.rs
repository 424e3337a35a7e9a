// twitter-client/src/accounts.rs
use crate::error::Result;
use crate::http::HttpClient;
use crate::resource::{NoParams, Resource};
use crate::response::ApiResponse;
use crate::types::{null_as_default, User};
use serde::{Deserialize, Serialize};

/// Parameters for `account/verify_credentials`
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountVerifyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_email: Option<bool>,
}

/// Settings of the authenticating user, as returned by `account/settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub always_use_https: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub discoverable_by_email: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protected: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_all_inline_media: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub use_cookie_personalization: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_contributor_request: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sleep_time: SleepTime,
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: TimeZone,
    #[serde(deserialize_with = "null_as_default")]
    pub trend_location: Vec<TrendLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepTime {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tzinfo_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub utc_offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(rename = "countryCode", deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "parentid", deserialize_with = "null_as_default")]
    pub parent_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub woeid: i64,
    #[serde(rename = "placeType", deserialize_with = "null_as_default")]
    pub place_type: PlaceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceType {
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Parameters for `POST account/settings`. Only the fields set are changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_use_https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discoverable_by_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all_inline_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cookie_personalization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_contributor_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_time_enabled: Option<bool>,
    /// Hour in 00-23 format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_sleep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_sleep_time: Option<String>,
    /// Rails time zone name, e.g. `Europe/Copenhagen`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_location_woeid: Option<i64>,
}

/// Parameters for `account/update_profile`
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountUpdateProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_link_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
}

/// Account credential and settings endpoints under `account/`
pub struct AccountService<'a, C: HttpClient> {
    resource: Resource<'a, C>,
}

impl<'a, C: HttpClient> AccountService<'a, C> {
    pub(crate) fn new(resource: Resource<'a, C>) -> Self {
        Self { resource }
    }

    /// Returns the authorized user if the credentials are valid.
    /// Requires a user auth context.
    pub async fn verify_credentials(
        &self,
        params: &AccountVerifyParams,
    ) -> Result<ApiResponse<User>> {
        self.resource
            .get("verify_credentials.json", Some(params))
            .await
    }

    /// Settings (trend, geo and sleep time information) of the
    /// authenticating user
    pub async fn settings(&self) -> Result<ApiResponse<AccountSettings>> {
        self.resource
            .get::<NoParams, _>("settings.json", None)
            .await
    }

    pub async fn update_settings(
        &self,
        params: &AccountSettingsParams,
    ) -> Result<ApiResponse<AccountSettings>> {
        self.resource.post("settings.json", Some(params)).await
    }

    /// Sets the values users can change under the "Account" tab of their
    /// settings page. Only the parameters given are updated.
    pub async fn update_profile(
        &self,
        params: &AccountUpdateProfileParams,
    ) -> Result<ApiResponse<User>> {
        self.resource.post("update_profile.json", Some(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::resource::testing::FakeHttp;
    use crate::TwitterClient;

    const SETTINGS_JSON: &str = r#"{"always_use_https":true,"discoverable_by_email":true,"geo_enabled":true,"language":"en","protected":false,"screen_name":"theSeanCook","show_all_inline_media":false,"sleep_time":{"enabled":false,"end_time":null,"start_time":null},"time_zone":{"name":"Pacific Time (US & Canada)","tzinfo_name":"America/Los_Angeles","utc_offset":-28800},"trend_location":[{"country":"United States","countryCode":"US","name":"Atlanta","parentid":23424977,"placeType":{"code":7,"name":"Town"},"url":"http://where.yahooapis.com/v1/place/2357024","woeid":2357024}],"use_cookie_personalization":true,"allow_contributor_request":"all"}"#;

    fn expected_settings() -> AccountSettings {
        AccountSettings {
            always_use_https: true,
            discoverable_by_email: true,
            geo_enabled: true,
            language: "en".to_string(),
            protected: false,
            screen_name: "theSeanCook".to_string(),
            show_all_inline_media: false,
            use_cookie_personalization: true,
            allow_contributor_request: "all".to_string(),
            sleep_time: SleepTime::default(),
            time_zone: TimeZone {
                name: "Pacific Time (US & Canada)".to_string(),
                tzinfo_name: "America/Los_Angeles".to_string(),
                utc_offset: -28800,
            },
            trend_location: vec![TrendLocation {
                country: "United States".to_string(),
                country_code: "US".to_string(),
                name: "Atlanta".to_string(),
                parent_id: 23424977,
                url: "http://where.yahooapis.com/v1/place/2357024".to_string(),
                woeid: 2357024,
                place_type: PlaceType {
                    code: 7,
                    name: "Town".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_settings_fixture_decodes_every_field() {
        let settings: AccountSettings = serde_json::from_str(SETTINGS_JSON).unwrap();
        assert_eq!(settings, expected_settings());
    }

    #[tokio::test]
    async fn test_verify_credentials_sends_only_set_flags() {
        let http = FakeHttp::new(200, r#"{"name": "Dalton Hubble", "id": 623265148}"#);
        let client = TwitterClient::new(&http);
        let params = AccountVerifyParams {
            include_entities: Some(false),
            include_email: Some(true),
            ..Default::default()
        };
        let user = client
            .accounts()
            .verify_credentials(&params)
            .await
            .unwrap()
            .into_data();

        let req = http.last_request();
        assert_eq!(req.method, Method::Get);
        assert_eq!(
            req.url,
            "https://api.twitter.com/1.1/account/verify_credentials.json?include_entities=false&include_email=true"
        );
        assert_eq!(user.name, "Dalton Hubble");
        assert_eq!(user.id, 623265148);
    }

    #[tokio::test]
    async fn test_update_settings_posts_form() {
        let http = FakeHttp::new(200, SETTINGS_JSON);
        let client = TwitterClient::new(&http);
        let params = AccountSettingsParams {
            lang: Some("en".to_string()),
            sleep_time_enabled: Some(false),
            trend_location_woeid: Some(2357024),
            ..Default::default()
        };
        let resp = client.accounts().update_settings(&params).await.unwrap();

        let req = http.last_request();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "https://api.twitter.com/1.1/account/settings.json");
        assert_eq!(
            req.body.as_deref(),
            Some("sleep_time_enabled=false&lang=en&trend_location_woeid=2357024")
        );
        assert_eq!(resp.data, expected_settings());
    }

    #[tokio::test]
    async fn test_update_profile_escapes_values() {
        let http = FakeHttp::new(200, r#"{"name":"Sean Cook","location":"San Francisco, CA"}"#);
        let client = TwitterClient::new(&http);
        let params = AccountUpdateProfileParams {
            name: Some("Sean Cook".to_string()),
            location: Some("San Francisco, CA".to_string()),
            ..Default::default()
        };
        let user = client
            .accounts()
            .update_profile(&params)
            .await
            .unwrap()
            .into_data();

        let req = http.last_request();
        assert_eq!(req.url, "https://api.twitter.com/1.1/account/update_profile.json");
        assert_eq!(
            req.body.as_deref(),
            Some("name=Sean+Cook&location=San+Francisco%2C+CA")
        );
        assert_eq!(user.location, "San Francisco, CA");
    }

    #[test]
    fn test_settings_with_null_nested_values() {
        let settings: AccountSettings = serde_json::from_str(
            r#"{"screen_name":"dghubble","sleep_time":null,"time_zone":null,"trend_location":[{"country":"","countryCode":null,"name":"Worldwide","parentid":0,"placeType":{"code":19,"name":"Supername"},"url":"http://where.yahooapis.com/v1/place/1","woeid":1}],"geo_enabled":null}"#,
        )
        .unwrap();
        assert_eq!(settings.screen_name, "dghubble");
        assert_eq!(settings.sleep_time, SleepTime::default());
        assert_eq!(settings.time_zone, TimeZone::default());
        assert!(!settings.geo_enabled);
        assert_eq!(
            settings.trend_location,
            vec![TrendLocation {
                country: String::new(),
                country_code: String::new(),
                name: "Worldwide".to_string(),
                parent_id: 0,
                url: "http://where.yahooapis.com/v1/place/1".to_string(),
                woeid: 1,
                place_type: PlaceType {
                    code: 19,
                    name: "Supername".to_string(),
                },
            }]
        );
    }

    #[test]
    fn test_time_zone_null_offset() {
        let tz: TimeZone =
            serde_json::from_str(r#"{"name":"UTC","tzinfo_name":"Etc/UTC","utc_offset":null}"#)
                .unwrap();
        assert_eq!(tz.name, "UTC");
        assert_eq!(tz.utc_offset, 0);
    }
}
