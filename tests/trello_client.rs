// Tests for the Trello REST adapter against a mock HTTP server.
use mockito::{Matcher, Server};
use serde_json::json;
use tickler::Error;
use tickler::client::{BoardGateway, Credentials, TrelloClient};

const AUTH: &str = r#"OAuth oauth_consumer_key="key", oauth_token="token""#;

fn client(url: &str) -> TrelloClient {
    TrelloClient::new(url, &Credentials::new("key", "token")).unwrap()
}

#[tokio::test]
async fn test_list_sublists_is_cached_per_client() {
    let mut server = Server::new_async().await;
    let lists = server
        .mock("GET", "/boards/b1/lists")
        .match_header("authorization", AUTH)
        .match_header("accept", "application/json")
        .match_header("user-agent", Matcher::Regex("^tickler/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"l1","name":"AQ","closed":false},{"id":"l2","name":"Done"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = client(&server.url());
    let first = client.list_sublists("b1").await.unwrap();
    let second = client.list_sublists("b1").await.unwrap();

    assert_eq!(first["AQ"], "l1");
    assert_eq!(first["Done"], "l2");
    assert_eq!(first, second);
    assert_eq!(client.cache().len(), 1);
    lists.assert_async().await;
}

#[tokio::test]
async fn test_items_grouped_by_sublist() {
    let mut server = Server::new_async().await;
    let _lists = server
        .mock("GET", "/boards/r1/lists")
        .with_status(200)
        .with_body(r#"[{"id":"w","name":"Weekly"},{"id":"m","name":"Monthly"},{"id":"q","name":"Quarterly"}]"#)
        .create_async()
        .await;
    let _cards = server
        .mock("GET", "/boards/r1/cards")
        .with_status(200)
        .with_body(
            r#"[
                {"id":"c1","name":"Review inbox","idList":"w"},
                {"id":"c2","name":"Pay rent","idList":"m"},
                {"id":"c3","name":"Plan week","idList":"w"}
            ]"#,
        )
        .create_async()
        .await;

    let grouped = client(&server.url())
        .get_items_by_sublist("r1")
        .await
        .unwrap();

    assert_eq!(grouped["Weekly"], vec!["Review inbox", "Plan week"]);
    assert_eq!(grouped["Monthly"], vec!["Pay rent"]);
    assert!(grouped["Quarterly"].is_empty());
}

#[tokio::test]
async fn test_create_item_posts_json() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/cards")
        .match_header("authorization", AUTH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"idList": "l1", "name": "Pay rent & bills"})))
        .with_status(200)
        .with_body(r#"{"id":"new","name":"Pay rent & bills","idList":"l1"}"#)
        .create_async()
        .await;

    client(&server.url())
        .create_item("l1", "Pay rent & bills")
        .await
        .unwrap();
    create.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_remote_error() {
    let mut server = Server::new_async().await;
    let _lists = server
        .mock("GET", "/boards/b1/lists")
        .with_status(401)
        .with_body("invalid token")
        .create_async()
        .await;

    let err = client(&server.url()).list_sublists("b1").await.unwrap_err();
    match err {
        Error::Remote(msg) => {
            assert!(msg.contains("401"), "{}", msg);
            assert!(msg.contains("invalid token"), "{}", msg);
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_lookup_is_not_cached() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("GET", "/boards/b1/lists")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let client = client(&server.url());
    assert!(client.list_sublists("b1").await.is_err());
    assert!(client.cache().is_empty());
    failing.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_remote_error() {
    let mut server = Server::new_async().await;
    let _cards = server
        .mock("GET", "/boards/b1/cards")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client(&server.url()).list_items("b1").await.unwrap_err();
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mut server = Server::new_async().await;
    let lists = server
        .mock("GET", "/boards/b1/lists")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client(&format!("{}/", server.url()));
    assert!(client.list_sublists("b1").await.unwrap().is_empty());
    lists.assert_async().await;
}

#[test]
fn test_missing_credentials_rejected() {
    let err = TrelloClient::new("http://localhost", &Credentials::new("", "")).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
