//! Network and domain reconnaissance.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

impl Client {
  /// Find subdomains of a given domain.
  pub async fn get_sub_domains(&self, domain: &str) -> Result<Value, Error> {
    self
      .request("subdomainfinder", &[("domain", domain.into())])
      .await
  }

  /// Detect firewalls on a given domain.
  ///
  /// The service takes the domain under the wire name `url`.
  pub async fn firewall_resolver(&self, domain: &str) -> Result<Value, Error> {
    self
      .request("firewalldetector", &[("url", domain.into())])
      .await
  }

  /// Scan ports on a given IP address.
  pub async fn port_scanner(&self, ip: &str) -> Result<Value, Error> {
    self.request("portscanner", &[("host", ip.into())]).await
  }

  /// Check if a specific port is open on a given host.
  pub async fn check_port(&self, host: &str, port: u16) -> Result<Value, Error> {
    self
      .request(
        "portscanner",
        &[("host", host.into()), ("port", port.to_string())],
      )
      .await
  }

  /// Ping a given IP address.
  pub async fn ping(&self, ip: &str) -> Result<Value, Error> {
    self.request("ping", &[("host", ip.into())]).await
  }

  /// Resolve the hostname for a given IP address.
  pub async fn hostname_resolver(&self, ip: &str) -> Result<Value, Error> {
    self.request("gethostname", &[("host", ip.into())]).await
  }

  /// Check DNS records for a given domain.
  pub async fn dnschecker(&self, domain: &str) -> Result<Value, Error> {
    self.request("dnschecker", &[("url", domain.into())]).await
  }

  /// Convert a hostname to an IP address.
  ///
  /// The resolver location is pinned to the service's US server.
  pub async fn host_to_ip(&self, host: &str) -> Result<Value, Error> {
    self
      .request(
        "dnsresolver",
        &[("host", host.into()), ("server", "US".into())],
      )
      .await
  }

  /// Find domains hosted on a given IP address.
  pub async fn ip_to_domains(&self, ip: &str) -> Result<Value, Error> {
    self.request("ip2domains", &[("ip", ip.into())]).await
  }

  /// Perform a WHOIS lookup for a given domain.
  pub async fn whois_checker(&self, domain: &str) -> Result<Value, Error> {
    self.request("whois", &[("domain", domain.into())]).await
  }

  /// Get geolocation information for a given host.
  pub async fn geo_ip(&self, host: &str) -> Result<Value, Error> {
    self.request("geoip", &[("host", host.into())]).await
  }
}
