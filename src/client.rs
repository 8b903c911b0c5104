//! HTTP client for the c99.nl API.

use serde_json::Value;

use crate::error::Error;

/// Production endpoint; every operation is a path below this URL.
pub const DEFAULT_BASE_URL: &str = "https://api.c99.nl/";

/// Handle on the remote API: the key, the base URL, and the shared
/// HTTP client. Built once per process invocation and never mutated.
#[derive(Debug, Clone)]
pub struct Client {
  api_key: String,
  base_url: String,
  http: reqwest::Client,
}

impl Client {
  /// Creates a client against the production API.
  ///
  /// # Errors
  ///
  /// Returns an error if the underlying HTTP client cannot be built.
  pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
    Self::with_base_url(api_key, DEFAULT_BASE_URL)
  }

  /// Creates a client against a custom base URL.
  ///
  /// The CLI always uses [`DEFAULT_BASE_URL`]; this constructor exists so
  /// tests can point the client at a local stub server.
  ///
  /// # Errors
  ///
  /// Returns an error if the underlying HTTP client cannot be built.
  pub fn with_base_url(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
  ) -> Result<Self, Error> {
    let http = reqwest::Client::builder()
      .user_agent(format!("c99_cli/{}", env!("CARGO_PKG_VERSION")))
      .build()?;

    Ok(Self {
      api_key: api_key.into(),
      base_url: base_url.into(),
      http,
    })
  }

  /// Issues a single GET against `endpoint` and returns the decoded body.
  ///
  /// The query string always carries `params` plus the API key (`key`) and
  /// the JSON output flag (`json=true`). The HTTP status code is never
  /// inspected: the service reports its own failures inside the JSON body,
  /// and those are returned to the caller verbatim like any other response.
  /// One attempt only; there is no retry or backoff.
  ///
  /// # Errors
  ///
  /// [`Error::Transport`] when the request cannot complete, and
  /// [`Error::Decode`] when the body is not valid JSON.
  pub async fn request(
    &self,
    endpoint: &str,
    params: &[(&str, String)],
  ) -> Result<Value, Error> {
    let url = format!("{}{endpoint}", self.base_url);

    let response = self
      .http
      .get(&url)
      .query(params)
      .query(&[("key", self.api_key.as_str()), ("json", "true")])
      .send()
      .await?;

    // Read the body as text first so a transport failure and a malformed
    // body stay distinguishable.
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
  }
}
