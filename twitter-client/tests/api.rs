// twitter-client/tests/api.rs
use twitter_client::{
    AccountVerifyParams, BlockListParams, Error, FriendshipLookupParams, FriendshipUpdateParams,
    ReqwestClient, TwitterClient,
};
use wiremock::matchers::{
    body_string, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TwitterClient<ReqwestClient> {
    let http = ReqwestClient::new().with_token("test-token".to_string());
    TwitterClient::with_base_url(http, &format!("{}/1.1", server.uri()))
}

fn json(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

#[tokio::test]
async fn verify_credentials_sends_bearer_and_present_params_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1/account/verify_credentials.json"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("include_entities", "false"))
        .and(query_param("include_email", "true"))
        .and(query_param_is_missing("skip_status"))
        .respond_with(
            json(200, r#"{"name": "Dalton Hubble", "id": 623265148}"#)
                .insert_header("x-rate-limit-remaining", "74"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = AccountVerifyParams {
        include_entities: Some(false),
        include_email: Some(true),
        ..Default::default()
    };
    let resp = client.accounts().verify_credentials(&params).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.raw.header("x-rate-limit-remaining"), Some("74"));
    assert_eq!(resp.data.name, "Dalton Hubble");
    assert_eq!(resp.data.id, 623265148);
}

#[tokio::test]
async fn settings_has_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1/account/settings.json"))
        .respond_with(json(200, r#"{"screen_name":"theSeanCook","language":"en"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let settings = client_for(&server)
        .accounts()
        .settings()
        .await
        .unwrap()
        .into_data();
    assert_eq!(settings.screen_name, "theSeanCook");
    assert_eq!(settings.language, "en");
    assert!(settings.trend_location.is_empty());
}

#[tokio::test]
async fn blocks_list_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1/blocks/list.json"))
        .and(query_param("skip_status", "true"))
        .and(query_param("cursor", "-1"))
        .and(query_param_is_missing("block_entities"))
        .respond_with(json(
            200,
            r#"{"next_cursor":0,"next_cursor_str":"0","previous_cursor":0,"previous_cursor_str":"0","users":[{"id":509466276,"screen_name":"javierg3ong"}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let params = BlockListParams {
        skip_status: Some(true),
        cursor: Some(-1),
        ..Default::default()
    };
    let result = client_for(&server)
        .blocks()
        .list(&params)
        .await
        .unwrap()
        .into_data();
    assert_eq!(result.users.len(), 1);
    assert_eq!(result.users[0].screen_name, "javierg3ong");
    assert!(!result.cursors.has_next());
}

#[tokio::test]
async fn friendship_create_posts_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/friendships/create.json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("screen_name=dghubble"))
        .respond_with(json(200, r#"{"screen_name":"dghubble","id":623265148}"#))
        .expect(1)
        .mount(&server)
        .await;

    let params = FriendshipLookupParams {
        screen_name: Some("dghubble".to_string()),
        ..Default::default()
    };
    let user = client_for(&server)
        .friendships()
        .create(&params)
        .await
        .unwrap()
        .into_data();
    assert_eq!(user.id, 623265148);
}

#[tokio::test]
async fn friendship_update_sends_explicit_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/friendships/update.json"))
        .and(body_string("user_id=12&device=false"))
        .respond_with(json(200, r#"{"relationship":{"source":{"id":1},"target":{"id":12}}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let params = FriendshipUpdateParams {
        user_id: Some("12".to_string()),
        device: Some(false),
        ..Default::default()
    };
    let result = client_for(&server)
        .friendships()
        .update(&params)
        .await
        .unwrap()
        .into_data();
    assert_eq!(result.relationship.target.id, 12);
}

#[tokio::test]
async fn error_envelope_on_200_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1/friendships/no_retweets/ids.json"))
        .respond_with(json(
            200,
            r#"{"errors":[{"code":131,"message":"Internal error"}]}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .friendships()
        .no_retweets()
        .await
        .unwrap_err();
    let api = err.api_error().expect("structured error");
    assert_eq!(api.errors[0].code, 131);
    assert_eq!(err.to_string(), "twitter: 131 Internal error");
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn error_envelope_keeps_raw_response_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1/account/verify_credentials.json"))
        .respond_with(
            json(429, r#"{"errors":[{"code":88,"message":"Rate limit exceeded"}]}"#)
                .insert_header("x-rate-limit-reset", "1700000000"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .accounts()
        .verify_credentials(&AccountVerifyParams::default())
        .await
        .unwrap_err();
    let raw = err.response().expect("raw response");
    assert_eq!(raw.status, 429);
    assert_eq!(raw.header("x-rate-limit-reset"), Some("1700000000"));
}

#[tokio::test]
async fn server_error_without_envelope_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1/blocks/ids.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Over capacity"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .blocks()
        .ids(&Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { status: 503, .. }));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = TwitterClient::with_base_url(
        ReqwestClient::new(),
        &format!("http://127.0.0.1:{}/1.1", port),
    );
    let err = client.accounts().settings().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.response().is_none());
}
