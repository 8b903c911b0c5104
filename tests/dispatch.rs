//! Stub-transport tests: every method's wire mapping, defaults, and the
//! pass-through contract, verified against a local mock server.

use httpmock::prelude::*;
use serde_json::{json, Value};

use c99::client::Client;
use c99::error::Error;
use c99::registry;

fn client_for(server: &MockServer) -> Client {
  Client::with_base_url("test-key", format!("{}/", server.base_url()))
    .expect("client should build")
}

async fn invoke(
  client: &Client,
  method: &str,
  args: &[&str],
) -> Result<Value, Error> {
  let spec = registry::find(method).expect("method should be registered");
  let args: Vec<String> =
    args.iter().map(std::string::ToString::to_string).collect();
  registry::invoke(client, spec, &args).await
}

/// One row per registered method: arguments to supply and the exact
/// parameter mapping expected on the wire.
type WireCase = (&'static str, &'static [&'static str], &'static str, &'static [(&'static str, &'static str)]);

const WIRE_CASES: &[WireCase] = &[
  ("get_sub_domains", &["example.com"], "subdomainfinder", &[("domain", "example.com")]),
  ("get_phone_info", &["+31612345678"], "phonelookup", &[("number", "+31612345678")]),
  ("get_skype_user_info", &["someuser"], "skyperesolver", &[("username", "someuser")]),
  ("get_skype_ip_info", &["1.2.3.4"], "ip2skype", &[("ip", "1.2.3.4")]),
  ("firewall_resolver", &["example.com"], "firewalldetector", &[("url", "example.com")]),
  ("port_scanner", &["1.2.3.4"], "portscanner", &[("host", "1.2.3.4")]),
  ("check_port", &["example.com", "443"], "portscanner", &[("host", "example.com"), ("port", "443")]),
  ("ping", &["1.2.3.4"], "ping", &[("host", "1.2.3.4")]),
  ("hostname_resolver", &["1.2.3.4"], "gethostname", &[("host", "1.2.3.4")]),
  ("dnschecker", &["example.com"], "dnschecker", &[("url", "example.com")]),
  ("host_to_ip", &["example.com"], "dnsresolver", &[("host", "example.com"), ("server", "US")]),
  ("ip_to_domains", &["1.2.3.4"], "ip2domains", &[("ip", "1.2.3.4")]),
  ("alexa_rank", &["https://example.com"], "alexarank", &[("url", "https://example.com")]),
  ("whois_checker", &["example.com"], "whois", &[("domain", "example.com")]),
  ("screenshot_tool", &["https://example.com"], "createscreenshot", &[("url", "https://example.com")]),
  ("geo_ip", &["1.2.3.4"], "geoip", &[("host", "1.2.3.4")]),
  ("website_up_or_down_checker", &["example.com"], "upordown", &[("host", "example.com")]),
  ("site_reputation_checker", &["https://example.com"], "reputationchecker", &[("url", "https://example.com")]),
  ("get_website_headers", &["example.com"], "getheaders", &[("host", "example.com")]),
  ("link_backup", &["https://example.com"], "linkbackup", &[("url", "https://example.com")]),
  ("url_shortener", &["https://example.com/long"], "urlshortener", &[("url", "https://example.com/long")]),
  ("random_string_picker", &["https://example.com/words.txt"], "randomstringpicker", &[("textfile", "https://example.com/words.txt")]),
  ("dictionary", &["ubiquitous"], "dictionary", &[("word", "ubiquitous")]),
  ("image_reverse", &["https://example.com/cat.png"], "definepicture", &[("url", "https://example.com/cat.png")]),
  ("synonym_finder", &["quick"], "synonym", &[("word", "quick")]),
  ("email_validator", &["user@example.com"], "emailvalidator", &[("email", "user@example.com")]),
  ("disposable_mail_check", &["user@mailinator.com"], "disposablemailchecker", &[("email", "user@mailinator.com")]),
  ("ip_validator", &["1.2.3.4"], "ipvalidator", &[("ip", "1.2.3.4")]),
  ("tor_checker", &["1.2.3.4"], "torchecker", &[("ip", "1.2.3.4")]),
  ("translator", &["hello", "nl"], "translate", &[("text", "hello"), ("tolanguage", "nl")]),
  ("random_info_generator", &["female"], "randomperson", &[("gender", "female")]),
  ("youtube_video_details", &["dQw4w9WgXcQ"], "youtubedetails", &[("videoid", "dQw4w9WgXcQ")]),
  ("youtube_to_mp3", &["dQw4w9WgXcQ"], "youtubemp3", &[("videoid", "dQw4w9WgXcQ")]),
  ("ip_logger", &["newlogger"], "iplogger", &[("action", "newlogger")]),
  ("bitcoin_balance", &["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"], "bitcoinbalance", &[("address", "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")]),
  ("ethereum_balance", &["0x00000000219ab540356cBB839Cbe05303d7705Fa"], "ethereumbalance", &[("address", "0x00000000219ab540356cBB839Cbe05303d7705Fa")]),
  ("currency_converter", &["10", "USD", "EUR"], "currency", &[("amount", "10"), ("from", "USD"), ("to", "EUR")]),
  ("currency_rates", &["EUR"], "currencyrates", &[("source", "EUR")]),
  ("weather_checker", &["Amsterdam", "F"], "weather", &[("location", "Amsterdam"), ("unit", "F")]),
  ("qr_code_generator", &["https://example.com", "300"], "qrgenerator", &[("string", "https://example.com"), ("size", "300")]),
  ("text_parser", &["https://example.com"], "textparser", &[("url", "https://example.com")]),
  ("proxy_detector", &["1.2.3.4"], "proxydetector", &[("ip", "1.2.3.4")]),
  ("password_generator", &["16", "special", "words"], "passwordgenerator", &[("length", "16"), ("include", "special"), ("customlist", "words")]),
  ("random_number_generator", &["6", "1-100"], "randomnumber", &[("length", "6"), ("between", "1-100")]),
  ("license_key_generator", &["XXXX-XXXX", "3"], "licensekeygenerator", &[("template", "XXXX-XXXX"), ("amount", "3")]),
  ("either_or", &[], "eitheror", &[]),
  ("gif_finder", &["cats"], "gif", &[("keyword", "cats")]),
];

#[tokio::test]
async fn every_method_sends_its_declared_wire_mapping() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  assert_eq!(
    WIRE_CASES.len(),
    registry::METHODS.len(),
    "wire table out of sync with the registry"
  );

  for (method, args, endpoint, params) in WIRE_CASES {
    let mut mock = server
      .mock_async(|when, then| {
        let mut when = when
          .method(GET)
          .path(format!("/{endpoint}"))
          .query_param("key", "test-key")
          .query_param("json", "true");
        for (name, value) in *params {
          when = when.query_param(*name, *value);
        }
        then
          .status(200)
          .header("content-type", "application/json")
          .json_body(json!({ "status": "success" }));
      })
      .await;

    let result = invoke(&client, method, args).await;
    assert!(result.is_ok(), "{method} failed: {result:?}");

    // Exactly one request per call.
    mock.assert_async().await;
    mock.delete_async().await;
  }
}

#[tokio::test]
async fn subdomain_lookup_returns_the_body_unmodified() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  let body = json!({
    "status": "success",
    "subdomains": ["a.example.com"]
  });
  let mock = server
    .mock_async(|when, then| {
      when
        .method(GET)
        .path("/subdomainfinder")
        .query_param("domain", "example.com");
      then
        .status(200)
        .header("content-type", "application/json")
        .json_body(body.clone());
    })
    .await;

  let result = invoke(&client, "get_sub_domains", &["example.com"])
    .await
    .expect("lookup should succeed");

  assert_eq!(result, body);
  mock.assert_async().await;
}

#[tokio::test]
async fn omitted_optionals_are_absent_from_the_query() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  let mock = server
    .mock_async(|when, then| {
      when
        .method(GET)
        .path("/randomnumber")
        .query_param("key", "test-key")
        .query_param("json", "true")
        .query_param_missing("length")
        .query_param_missing("between");
      then
        .status(200)
        .header("content-type", "application/json")
        .json_body(json!({ "status": "success" }));
    })
    .await;

  invoke(&client, "random_number_generator", &[])
    .await
    .expect("call should succeed");

  mock.assert_async().await;
}

#[tokio::test]
async fn omitted_defaults_are_sent_as_declared() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  let cases: &[(&str, &[&str], &str, (&str, &str))] = &[
    ("weather_checker", &["Amsterdam"], "weather", ("unit", "C")),
    ("random_info_generator", &[], "randomperson", ("gender", "all")),
    ("ip_logger", &[], "iplogger", ("action", "viewloggers")),
    ("qr_code_generator", &["data"], "qrgenerator", ("size", "150")),
    (
      "license_key_generator",
      &["XXXX-YYYY"],
      "licensekeygenerator",
      ("amount", "1"),
    ),
  ];

  for (method, args, endpoint, (param, default)) in cases {
    let mut mock = server
      .mock_async(|when, then| {
        when
          .method(GET)
          .path(format!("/{endpoint}"))
          .query_param(*param, *default);
        then
          .status(200)
          .header("content-type", "application/json")
          .json_body(json!({ "status": "success" }));
      })
      .await;

    invoke(&client, method, args)
      .await
      .unwrap_or_else(|err| panic!("{method} failed: {err}"));

    mock.assert_async().await;
    mock.delete_async().await;
  }
}

#[tokio::test]
async fn currency_conversion_renames_arguments_on_the_wire() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  let mock = server
    .mock_async(|when, then| {
      when
        .method(GET)
        .path("/currency")
        .query_param("amount", "10")
        .query_param("from", "USD")
        .query_param("to", "EUR");
      then
        .status(200)
        .header("content-type", "application/json")
        .json_body(json!({ "status": "success", "result": 9.21 }));
    })
    .await;

  invoke(&client, "currency_converter", &["10", "USD", "EUR"])
    .await
    .expect("conversion should succeed");

  mock.assert_async().await;
}

#[tokio::test]
async fn service_errors_pass_through_verbatim() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  let body = json!({ "status": "error", "error": "invalid API key" });
  let mock = server
    .mock_async(|when, then| {
      when.method(GET).path("/ping");
      then
        .status(500)
        .header("content-type", "application/json")
        .json_body(body.clone());
    })
    .await;

  // The status code is not interpreted: a JSON body is a normal result.
  let result = invoke(&client, "ping", &["1.2.3.4"])
    .await
    .expect("a JSON error body is still a successful call");

  assert_eq!(result, body);
  mock.assert_async().await;
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
  let server = MockServer::start_async().await;
  let client = client_for(&server);

  let _mock = server
    .mock_async(|when, then| {
      when.method(GET).path("/ping");
      then
        .status(200)
        .header("content-type", "text/html")
        .body("<html>service is down</html>");
    })
    .await;

  let result = invoke(&client, "ping", &["1.2.3.4"]).await;
  assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
  // Nothing listens on port 1.
  let client = Client::with_base_url("test-key", "http://127.0.0.1:1/")
    .expect("client should build");

  let result = invoke(&client, "ping", &["1.2.3.4"]).await;
  assert!(matches!(result, Err(Error::Transport(_))));
}
