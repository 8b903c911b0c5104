//! Website utilities: status, reputation, capture, and link tools.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

impl Client {
  /// Get the Alexa rank for a given URL.
  pub async fn alexa_rank(&self, url: &str) -> Result<Value, Error> {
    self.request("alexarank", &[("url", url.into())]).await
  }

  /// Take a screenshot of a given URL.
  pub async fn screenshot_tool(&self, url: &str) -> Result<Value, Error> {
    self
      .request("createscreenshot", &[("url", url.into())])
      .await
  }

  /// Check if a website is up or down.
  pub async fn website_up_or_down_checker(
    &self,
    host: &str,
  ) -> Result<Value, Error> {
    self.request("upordown", &[("host", host.into())]).await
  }

  /// Check the reputation of a given URL.
  pub async fn site_reputation_checker(
    &self,
    url: &str,
  ) -> Result<Value, Error> {
    self
      .request("reputationchecker", &[("url", url.into())])
      .await
  }

  /// Get the HTTP response headers of a given website.
  pub async fn get_website_headers(&self, host: &str) -> Result<Value, Error> {
    self.request("getheaders", &[("host", host.into())]).await
  }

  /// Create a backup link for a given URL.
  pub async fn link_backup(&self, url: &str) -> Result<Value, Error> {
    self.request("linkbackup", &[("url", url.into())]).await
  }

  /// Shorten a given URL.
  pub async fn url_shortener(&self, url: &str) -> Result<Value, Error> {
    self.request("urlshortener", &[("url", url.into())]).await
  }

  /// Perform a reverse image search on a given picture URL.
  pub async fn image_reverse(&self, url: &str) -> Result<Value, Error> {
    self.request("definepicture", &[("url", url.into())]).await
  }

  /// Parse the text content of a given URL.
  pub async fn text_parser(&self, url: &str) -> Result<Value, Error> {
    self.request("textparser", &[("url", url.into())]).await
  }
}
