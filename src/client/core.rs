// File: src/client/core.rs
use crate::client::auth::Credentials;
use crate::client::cache::SublistCache;
use crate::client::gateway::BoardGateway;
use crate::client::middleware::{DefaultHeadersLayer, DefaultHeadersService};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{BoardItem, Sublist};

use http::{HeaderValue, Method, Request, StatusCode, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tower::ServiceExt;
use tower_layer::Layer;

pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

// Longest response body quoted back in an error
const ERROR_BODY_LIMIT: usize = 200;

type HttpsClient =
    DefaultHeadersService<Client<hyper_rustls::HttpsConnector<HttpConnector>, String>>;

#[derive(Serialize)]
struct NewCard<'a> {
    #[serde(rename = "idList")]
    id_list: &'a str,
    name: &'a str,
}

/// Board gateway backed by the Trello REST API.
#[derive(Debug)]
pub struct TrelloClient {
    base_url: String,
    http: HttpsClient,
    cache: SublistCache,
}

impl TrelloClient {
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self> {
        Self::with_cache(base_url, credentials, SublistCache::default())
    }

    pub fn with_cache(
        base_url: &str,
        credentials: &Credentials,
        cache: SublistCache,
    ) -> Result<Self> {
        if !credentials.is_complete() {
            return Err(Error::Configuration(
                "API key and token are both required".to_string(),
            ));
        }
        let base_url = base_url.trim_end_matches('/').to_string();
        base_url
            .parse::<Uri>()
            .map_err(|e| Error::Configuration(format!("invalid API url '{}': {}", base_url, e)))?;

        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain http (local servers) still works; https requests will fail.
            log::warn!("No valid system certificates found");
        }
        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let user_agent = format!("tickler/{}", env!("CARGO_PKG_VERSION"));
        let headers = DefaultHeadersLayer::new()
            .with(
                http::header::USER_AGENT,
                HeaderValue::from_str(&user_agent)
                    .map_err(|e| Error::Configuration(e.to_string()))?,
            )
            .with(
                http::header::ACCEPT,
                HeaderValue::from_static("application/json"),
            )
            .with(http::header::AUTHORIZATION, credentials.header_value()?);

        let http_client = Client::builder(TokioExecutor::new()).build(https_connector);

        Ok(Self {
            base_url,
            http: headers.layer(http_client),
            cache,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, &config.credentials())
    }

    pub fn cache(&self) -> &SublistCache {
        &self.cache
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        let uri: Uri = url
            .parse()
            .map_err(|e| Error::Remote(format!("invalid request url '{}': {}", url, e)))?;

        let mut builder = Request::builder().method(method.clone()).uri(uri);
        if body.is_some() {
            builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        }
        let req = builder
            .body(body.unwrap_or_default())
            .map_err(|e| Error::Remote(e.to_string()))?;

        log::debug!("{} {}", method, path);
        let response = self
            .http
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| Error::Remote(format!("{} {} failed: {}", method, path, e)))?;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::Remote(format!("reading response of {}: {}", path, e)))?
            .to_bytes();

        if !status.is_success() {
            return Err(status_error(status, &method, path, &bytes));
        }
        Ok(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.send(Method::GET, path, None).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Remote(format!("unexpected response from {}: {}", path, e)))
    }
}

fn status_error(status: StatusCode, method: &Method, path: &str, body: &[u8]) -> Error {
    let text = String::from_utf8_lossy(body);
    let excerpt: String = text.trim().chars().take(ERROR_BODY_LIMIT).collect();
    if excerpt.is_empty() {
        Error::Remote(format!("{} {} returned {}", method, path, status))
    } else {
        Error::Remote(format!(
            "{} {} returned {}: {}",
            method, path, status, excerpt
        ))
    }
}

fn board_path(board_id: &str, resource: &str) -> Result<String> {
    if board_id.is_empty() || !board_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::Configuration(format!("invalid board id '{}'", board_id)));
    }
    Ok(format!("/boards/{}/{}", board_id, resource))
}

impl BoardGateway for TrelloClient {
    async fn list_sublists(&self, board_id: &str) -> Result<HashMap<String, String>> {
        if let Some(hit) = self.cache.get(board_id) {
            log::debug!("Sub-list cache hit for board '{}'", board_id);
            return Ok(hit);
        }

        let lists: Vec<Sublist> = self.get_json(&board_path(board_id, "lists")?).await?;
        let ids: HashMap<String, String> =
            lists.into_iter().map(|l| (l.name, l.id)).collect();
        self.cache.insert(board_id, ids.clone());
        Ok(ids)
    }

    async fn list_items(&self, board_id: &str) -> Result<Vec<BoardItem>> {
        let items: Vec<BoardItem> = self.get_json(&board_path(board_id, "cards")?).await?;
        log::debug!("Fetched {} items from board '{}'", items.len(), board_id);
        Ok(items)
    }

    async fn create_item(&self, sublist_id: &str, name: &str) -> Result<()> {
        let body = serde_json::to_string(&NewCard {
            id_list: sublist_id,
            name,
        })
        .map_err(|e| Error::Remote(e.to_string()))?;
        self.send(Method::POST, "/cards", Some(body)).await?;
        Ok(())
    }
}
