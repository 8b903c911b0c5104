//! Language tools: definitions, synonyms, and translation.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

impl Client {
  /// Look up the definition of a word.
  pub async fn dictionary(&self, word: &str) -> Result<Value, Error> {
    self.request("dictionary", &[("word", word.into())]).await
  }

  /// Find synonyms for a given word.
  pub async fn synonym_finder(&self, word: &str) -> Result<Value, Error> {
    self.request("synonym", &[("word", word.into())]).await
  }

  /// Translate text to a given language.
  pub async fn translator(
    &self,
    text: &str,
    tolanguage: &str,
  ) -> Result<Value, Error> {
    self
      .request(
        "translate",
        &[("text", text.into()), ("tolanguage", tolanguage.into())],
      )
      .await
  }
}
