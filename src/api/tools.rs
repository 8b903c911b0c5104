//! Generators, media lookups, finance, weather, and the grab bag.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

impl Client {
  /// Pick a random string from a given text file URL.
  pub async fn random_string_picker(
    &self,
    textfile: &str,
  ) -> Result<Value, Error> {
    self
      .request("randomstringpicker", &[("textfile", textfile.into())])
      .await
  }

  /// Generate random person information.
  ///
  /// `gender` filters the generated identity and defaults to `all`.
  pub async fn random_info_generator(
    &self,
    gender: Option<&str>,
  ) -> Result<Value, Error> {
    self
      .request(
        "randomperson",
        &[("gender", gender.unwrap_or("all").into())],
      )
      .await
  }

  /// Get details about a YouTube video.
  pub async fn youtube_video_details(
    &self,
    videoid: &str,
  ) -> Result<Value, Error> {
    self
      .request("youtubedetails", &[("videoid", videoid.into())])
      .await
  }

  /// Extract the MP3 audio of a YouTube video.
  pub async fn youtube_to_mp3(&self, videoid: &str) -> Result<Value, Error> {
    self
      .request("youtubemp3", &[("videoid", videoid.into())])
      .await
  }

  /// Interact with the IP logger, `viewloggers` by default.
  pub async fn ip_logger(&self, action: Option<&str>) -> Result<Value, Error> {
    self
      .request(
        "iplogger",
        &[("action", action.unwrap_or("viewloggers").into())],
      )
      .await
  }

  /// Check the balance of a Bitcoin address.
  pub async fn bitcoin_balance(&self, address: &str) -> Result<Value, Error> {
    self
      .request("bitcoinbalance", &[("address", address.into())])
      .await
  }

  /// Check the balance of an Ethereum address.
  pub async fn ethereum_balance(&self, address: &str) -> Result<Value, Error> {
    self
      .request("ethereumbalance", &[("address", address.into())])
      .await
  }

  /// Convert an amount between two currencies.
  ///
  /// `source` and `target` are ISO currency codes, sent under the wire
  /// names `from` and `to`.
  pub async fn currency_converter(
    &self,
    amount: f64,
    source: &str,
    target: &str,
  ) -> Result<Value, Error> {
    self
      .request(
        "currency",
        &[
          ("amount", amount.to_string()),
          ("from", source.into()),
          ("to", target.into()),
        ],
      )
      .await
  }

  /// Get current exchange rates for a source currency.
  pub async fn currency_rates(&self, source: &str) -> Result<Value, Error> {
    self
      .request("currencyrates", &[("source", source.into())])
      .await
  }

  /// Check the weather for a given location.
  ///
  /// `unit` is `C` or `F` and defaults to Celsius.
  pub async fn weather_checker(
    &self,
    location: &str,
    unit: Option<&str>,
  ) -> Result<Value, Error> {
    self
      .request(
        "weather",
        &[("location", location.into()), ("unit", unit.unwrap_or("C").into())],
      )
      .await
  }

  /// Generate a QR code image for a string, 150 pixels by default.
  pub async fn qr_code_generator(
    &self,
    data: &str,
    size: Option<u32>,
  ) -> Result<Value, Error> {
    self
      .request(
        "qrgenerator",
        &[
          ("string", data.into()),
          ("size", size.unwrap_or(150).to_string()),
        ],
      )
      .await
  }

  /// Generate a random password.
  pub async fn password_generator(
    &self,
    length: u32,
    include: &str,
    customlist: &str,
  ) -> Result<Value, Error> {
    self
      .request(
        "passwordgenerator",
        &[
          ("length", length.to_string()),
          ("include", include.into()),
          ("customlist", customlist.into()),
        ],
      )
      .await
  }

  /// Generate a random number.
  ///
  /// Both bounds are optional; an omitted bound is left out of the request
  /// entirely rather than sent empty.
  pub async fn random_number_generator(
    &self,
    length: Option<u32>,
    between: Option<&str>,
  ) -> Result<Value, Error> {
    let mut params = Vec::new();
    if let Some(length) = length {
      params.push(("length", length.to_string()));
    }
    if let Some(between) = between {
      params.push(("between", between.to_string()));
    }
    self.request("randomnumber", &params).await
  }

  /// Generate license keys from a template, one by default.
  pub async fn license_key_generator(
    &self,
    template: &str,
    amount: Option<u32>,
  ) -> Result<Value, Error> {
    self
      .request(
        "licensekeygenerator",
        &[
          ("template", template.into()),
          ("amount", amount.unwrap_or(1).to_string()),
        ],
      )
      .await
  }

  /// Get a random either/or question.
  pub async fn either_or(&self) -> Result<Value, Error> {
    self.request("eitheror", &[]).await
  }

  /// Find a GIF matching a keyword.
  pub async fn gif_finder(&self, keyword: &str) -> Result<Value, Error> {
    self.request("gif", &[("keyword", keyword.into())]).await
  }
}
