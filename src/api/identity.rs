//! Identity checks: phone numbers, Skype accounts, email addresses, and
//! IP address classification.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

impl Client {
  /// Get information about a phone number.
  pub async fn get_phone_info(&self, number: &str) -> Result<Value, Error> {
    self
      .request("phonelookup", &[("number", number.into())])
      .await
  }

  /// Get information about a Skype user.
  pub async fn get_skype_user_info(
    &self,
    username: &str,
  ) -> Result<Value, Error> {
    self
      .request("skyperesolver", &[("username", username.into())])
      .await
  }

  /// Get Skype accounts associated with an IP address.
  pub async fn get_skype_ip_info(&self, ip: &str) -> Result<Value, Error> {
    self.request("ip2skype", &[("ip", ip.into())]).await
  }

  /// Validate an email address.
  pub async fn email_validator(&self, email: &str) -> Result<Value, Error> {
    self
      .request("emailvalidator", &[("email", email.into())])
      .await
  }

  /// Check if an email address belongs to a disposable mail service.
  pub async fn disposable_mail_check(
    &self,
    email: &str,
  ) -> Result<Value, Error> {
    self
      .request("disposablemailchecker", &[("email", email.into())])
      .await
  }

  /// Validate an IP address.
  pub async fn ip_validator(&self, ip: &str) -> Result<Value, Error> {
    self.request("ipvalidator", &[("ip", ip.into())]).await
  }

  /// Check if an IP address is a Tor exit node.
  pub async fn tor_checker(&self, ip: &str) -> Result<Value, Error> {
    self.request("torchecker", &[("ip", ip.into())]).await
  }

  /// Detect if an IP address is a proxy.
  pub async fn proxy_detector(&self, ip: &str) -> Result<Value, Error> {
    self.request("proxydetector", &[("ip", ip.into())]).await
  }
}
